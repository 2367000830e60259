use wasm_bindgen::prelude::*;

pub mod command_executors;
pub mod components;
pub mod constants; // Module for constants and default values
pub mod dom_utils;
pub mod error;
pub mod messages; // Message / Command enums
pub mod models;
pub mod network;
pub mod state;
pub mod toast;
pub mod ui;
pub mod update; // Reducer
pub mod views; // Text / HTML builders

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();
    // Route `tracing` events to the browser console
    tracing_wasm::set_as_global_default();

    network::init_api_config();

    let document =
        dom_utils::document().ok_or_else(|| JsValue::from_str("no document on window"))?;

    // Build any part of the layout the page does not provide
    ui::setup::create_base_ui(&document)?;

    // Wire the DOM events
    components::drop_zone::attach(&document)?;
    let tools = components::tool_palette::attach(&document)?;
    components::workflow_canvas::attach(&document)?;

    tracing::info!(tools, "workbench ready");
    Ok(())
}
