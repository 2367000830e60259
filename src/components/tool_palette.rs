use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element};

use crate::constants::{DRAGGING_CLASS, TOOL_DRAG_FORMAT, TOOL_ITEM_CLASS};
use crate::dom_utils::{add_class, claim_listeners, listen, remove_class};
use crate::models::ToolType;

/// Render one draggable entry per known tool into `container`.
pub fn render(document: &Document, container: &Element) -> Result<(), JsValue> {
    for tool in ToolType::ALL {
        let item = document.create_element("div")?;
        item.set_class_name(TOOL_ITEM_CLASS);
        item.set_attribute("draggable", "true")?;
        item.set_attribute("data-tool", tool.id())?;
        item.set_inner_html(&format!(
            "<span class=\"tool-icon\">{}</span><span class=\"tool-label\">{}</span>",
            tool.icon(),
            tool.label()
        ));
        container.append_child(&item)?;
    }
    Ok(())
}

/// Make every `.tool-item` on the page draggable: the `data-tool` value is
/// the drag payload, and the item is marked while it is being dragged.
/// Returns how many items were newly wired.
pub fn attach(document: &Document) -> Result<usize, JsValue> {
    let items = document.query_selector_all(&format!(".{}", TOOL_ITEM_CLASS))?;
    let mut wired = 0;

    for idx in 0..items.length() {
        let item = match items.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) {
            Some(el) => el,
            None => continue,
        };
        if !claim_listeners(&item, "tool-drag")? {
            continue;
        }
        add_drag_listeners(&item)?;
        wired += 1;
    }

    Ok(wired)
}

fn add_drag_listeners(item: &Element) -> Result<(), JsValue> {
    {
        let el = item.clone();
        listen(item, "dragstart", move |e: DragEvent| {
            let tool_id = el.get_attribute("data-tool").unwrap_or_default();
            if let Some(dt) = e.data_transfer() {
                let _ = dt.set_data(TOOL_DRAG_FORMAT, &tool_id);
                dt.set_effect_allowed("copy");
            }
            add_class(&el, DRAGGING_CLASS);
        })?;
    }

    let el = item.clone();
    listen(item, "dragend", move |_: DragEvent| {
        remove_class(&el, DRAGGING_CLASS);
    })
}
