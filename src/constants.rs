// Default values and DOM contract - these are the single source of truth for
// ids, class names and timings shared between the components.

// Remote service
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";
pub const DATASET_ID_PARAM: &str = "dataset_id";

// Notifications
pub const NOTIFICATION_TTL_MS: u32 = 5000;

// Element ids the page is expected to provide (created by `ui::setup` when missing)
pub const DROP_ZONE_ID: &str = "dropZone";
pub const FILE_INPUT_ID: &str = "fileInput";
pub const WORKFLOW_CONTAINER_ID: &str = "workflowContainer";
pub const RESULTS_CONTAINER_ID: &str = "resultsContainer";
pub const TOOL_PALETTE_ID: &str = "toolPalette";

// Class names
pub const TOOL_ITEM_CLASS: &str = "tool-item";
pub const DRAGGING_CLASS: &str = "dragging";
pub const WORKFLOW_ITEM_CLASS: &str = "workflow-item";
pub const WORKFLOW_ITEM_RESULTS_CLASS: &str = "workflow-item-results";
pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const SUCCESS_MESSAGE_CLASS: &str = "success-message";
pub const RESULTS_MESSAGE_CLASS: &str = "results-message";

// Drag payload
pub const TOOL_DRAG_FORMAT: &str = "text/plain";

// Drop zone border feedback
pub const DROP_ZONE_ACTIVE_BORDER: &str = "#4CAF50";
pub const DROP_ZONE_IDLE_BORDER: &str = "#ccc";
