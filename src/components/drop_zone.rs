use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, DragEvent, Element, Event, FileList, HtmlInputElement};

use crate::constants::{
    DROP_ZONE_ACTIVE_BORDER, DROP_ZONE_ID, DROP_ZONE_IDLE_BORDER, FILE_INPUT_ID,
};
use crate::dom_utils::{claim_listeners, listen, require_by_id, set_border_color};
use crate::messages::Message;
use crate::state::dispatch_global_message;

/// Wire the drop zone and the file picker. Both upload only the first file.
pub fn attach(document: &Document) -> Result<(), JsValue> {
    let drop_zone = require_by_id(document, DROP_ZONE_ID)?;
    let file_input = require_by_id(document, FILE_INPUT_ID)?;

    if claim_listeners(&drop_zone, "drop-zone")? {
        wire_drop_zone(&drop_zone)?;
    }
    if claim_listeners(&file_input, "file-input")? {
        listen(&file_input, "change", move |e: Event| {
            let files = e
                .target()
                .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
                .and_then(|input| input.files());
            if let Some(files) = files {
                upload_first(&files);
            }
        })?;
    }

    Ok(())
}

fn wire_drop_zone(drop_zone: &Element) -> Result<(), JsValue> {
    {
        let zone = drop_zone.clone();
        listen(drop_zone, "dragover", move |e: DragEvent| {
            e.prevent_default();
            set_border_color(&zone, DROP_ZONE_ACTIVE_BORDER);
        })?;
    }

    {
        let zone = drop_zone.clone();
        listen(drop_zone, "dragleave", move |_: DragEvent| {
            set_border_color(&zone, DROP_ZONE_IDLE_BORDER);
        })?;
    }

    let zone = drop_zone.clone();
    listen(drop_zone, "drop", move |e: DragEvent| {
        e.prevent_default();
        set_border_color(&zone, DROP_ZONE_IDLE_BORDER);
        if let Some(files) = e.data_transfer().and_then(|dt| dt.files()) {
            upload_first(&files);
        }
    })
}

fn upload_first(files: &FileList) {
    if let Some(file) = files.get(0) {
        dispatch_global_message(Message::FileSelected(file));
    }
}
