use std::cell::RefCell;

use tracing::debug;

use crate::command_executors;
use crate::messages::Message;
use crate::models::{DatasetHandle, WorkflowItem};
use crate::update::update;

// Store global application state
#[derive(Debug, Default)]
pub struct AppState {
    // Dropped tools, in drop order
    pub workflow_items: Vec<WorkflowItem>,
    pub next_item_id: u32,
    // Handle of the last successfully uploaded dataset
    pub dataset: Option<DatasetHandle>,
    // Requests issued but not yet answered
    pub requests_in_flight: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_workflow_item(&mut self, tool_id: &str) -> WorkflowItem {
        let item = WorkflowItem::new(self.next_item_id, tool_id);
        self.next_item_id += 1;
        self.workflow_items.push(item.clone());
        item
    }

    pub(crate) fn request_started(&mut self) {
        self.requests_in_flight += 1;
    }

    pub(crate) fn request_finished(&mut self) {
        self.requests_in_flight = self.requests_in_flight.saturating_sub(1);
    }
}

// We use thread_local to store our app state
thread_local! {
    pub static APP_STATE: RefCell<AppState> = RefCell::new(AppState::new());
}

/// Run a message through the reducer and execute the resulting commands.
///
/// The state borrow is released before any command runs, so executors (and
/// the futures they spawn) are free to dispatch again.
pub fn dispatch_global_message(msg: Message) {
    debug!(?msg, "dispatch");
    let commands = APP_STATE.with(|state| {
        let mut state = state.borrow_mut();
        update(&mut state, msg)
    });

    for cmd in commands {
        command_executors::execute(cmd);
    }
}
