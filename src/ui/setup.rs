use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::components::tool_palette;
use crate::constants::{
    DROP_ZONE_ID, FILE_INPUT_ID, RESULTS_CONTAINER_ID, TOOL_ITEM_CLASS, TOOL_PALETTE_ID,
    WORKFLOW_CONTAINER_ID,
};

/// Build whatever part of the workbench layout the host page did not ship.
/// A page that already provides `#dropZone` etc. is left untouched, so the
/// controller also works on top of a hand-written `index.html`.
pub fn create_base_ui(document: &Document) -> Result<(), JsValue> {
    let body = document.body().ok_or(JsValue::from_str("No body found"))?;

    if document.get_element_by_id(DROP_ZONE_ID).is_none() {
        let header = document.create_element("div")?;
        header.set_class_name("header");
        let title = document.create_element("h1")?;
        title.set_inner_html("Data Cleaning Workbench");
        header.append_child(&title)?;
        body.append_child(&header)?;

        let drop_zone = create_drop_zone(document)?;
        body.append_child(&drop_zone)?;
    }

    if document.get_element_by_id(TOOL_PALETTE_ID).is_none()
        && document.query_selector(&format!(".{}", TOOL_ITEM_CLASS))?.is_none()
    {
        let palette = section(document, TOOL_PALETTE_ID, "tool-palette", "Tools")?;
        tool_palette::render(document, &palette)?;
        body.append_child(&palette)?;
    }

    if document.get_element_by_id(WORKFLOW_CONTAINER_ID).is_none() {
        let workflow = section(document, WORKFLOW_CONTAINER_ID, "workflow-container", "Workflow")?;
        body.append_child(&workflow)?;
    }

    if document.get_element_by_id(RESULTS_CONTAINER_ID).is_none() {
        let results = document.create_element("div")?;
        results.set_id(RESULTS_CONTAINER_ID);
        results.set_class_name("results-container");
        body.append_child(&results)?;
    }

    ensure_styles(document)?;
    Ok(())
}

fn create_drop_zone(document: &Document) -> Result<Element, JsValue> {
    let zone = document.create_element("div")?;
    zone.set_id(DROP_ZONE_ID);
    zone.set_class_name("drop-zone");

    let hint = document.create_element("p")?;
    hint.set_inner_html("Drop a CSV or Excel file here, or");
    zone.append_child(&hint)?;

    let input = document.create_element("input")?;
    input.set_id(FILE_INPUT_ID);
    input.set_attribute("type", "file")?;
    input.set_attribute("accept", ".csv,.xls,.xlsx")?;
    zone.append_child(&input)?;

    Ok(zone)
}

fn section(document: &Document, id: &str, class: &str, title: &str) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_id(id);
    el.set_class_name(class);
    let heading = document.create_element("h3")?;
    heading.set_inner_html(title);
    el.append_child(&heading)?;
    Ok(el)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("workbench-styles").is_some() {
        return Ok(());
    }

    let css = "
.drop-zone{border:2px dashed #ccc;border-radius:8px;padding:24px;text-align:center;margin:16px 0}
.tool-palette,.workflow-container{border:1px solid #e2e8f0;border-radius:8px;padding:12px;margin:8px 0;min-height:60px}
.tool-item{display:inline-flex;gap:6px;align-items:center;padding:8px 12px;margin:4px;border:1px solid #e2e8f0;border-radius:6px;background:#f8fafc;cursor:grab}
.tool-item.dragging{opacity:.5}
.workflow-item{padding:8px 12px;margin:4px 0;border-left:4px solid #4CAF50;background:#f1f8e9}
.error-message{padding:10px 16px;margin:4px 0;border-radius:4px;color:#fff;background:#dc2626}
.success-message{padding:10px 16px;margin:4px 0;border-radius:4px;color:#fff;background:#16a34a}
.results-message{padding:10px 16px;margin:4px 0;border:1px solid #e2e8f0;border-radius:4px}
";

    let style = document.create_element("style")?;
    style.set_id("workbench-styles");
    style.set_text_content(Some(css));
    // Append to <head>
    if let Some(head) = document.head() {
        head.append_child(&style)?;
    } else {
        // fallback – append to body
        document.body().ok_or(JsValue::from_str("No body found"))?.append_child(&style)?;
    }
    Ok(())
}
