use wasm_bindgen::JsValue;
use web_sys::{Document, DragEvent, Element};

use crate::constants::{TOOL_DRAG_FORMAT, WORKFLOW_CONTAINER_ID, WORKFLOW_ITEM_CLASS};
use crate::dom_utils::{claim_listeners, listen, require_by_id};
use crate::messages::Message;
use crate::models::WorkflowItem;
use crate::state::dispatch_global_message;
use crate::views::workflow_item_html;

/// Accept tool drops on the workflow container.
pub fn attach(document: &Document) -> Result<(), JsValue> {
    let container = require_by_id(document, WORKFLOW_CONTAINER_ID)?;
    if !claim_listeners(&container, "tool-drop")? {
        return Ok(());
    }

    listen(&container, "dragover", |e: DragEvent| e.prevent_default())?;

    listen(&container, "drop", |e: DragEvent| {
        e.prevent_default();
        let tool_id = e
            .data_transfer()
            .and_then(|dt| dt.get_data(TOOL_DRAG_FORMAT).ok())
            .unwrap_or_default();
        if !tool_id.is_empty() {
            dispatch_global_message(Message::ToolDropped(tool_id));
        }
    })
}

/// Build a detached workflow node. No side effects besides creation.
pub fn create_workflow_item(document: &Document, item: &WorkflowItem) -> Result<Element, JsValue> {
    let el = document.create_element("div")?;
    el.set_class_name(WORKFLOW_ITEM_CLASS);
    el.set_attribute("data-item-id", &item.id.to_string())?;
    el.set_attribute("data-tool", &item.tool_id)?;
    el.set_inner_html(&workflow_item_html(item));
    Ok(el)
}

/// Create the node and append it to the workflow container.
pub fn append_workflow_item(document: &Document, item: &WorkflowItem) -> Result<Element, JsValue> {
    let container = require_by_id(document, WORKFLOW_CONTAINER_ID)?;
    let el = create_workflow_item(document, item)?;
    container.append_child(&el)?;
    Ok(el)
}
