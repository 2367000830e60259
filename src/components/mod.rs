pub mod drop_zone;
pub mod tool_palette;
pub mod workflow_canvas;
