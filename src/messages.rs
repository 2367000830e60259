// src/messages.rs
//
// Events the controller reacts to, and the side effects the reducer asks for.
//
use crate::error::ApiError;
use crate::models::{
    DatasetHandle, NullCheckResponse, RemoveNullResponse, SummaryResponse, ToolType,
    UploadResponse, WorkflowItem,
};
use crate::toast::Notification;

#[derive(Debug, Clone)]
pub enum Message {
    // File upload
    FileSelected(web_sys::File),         // Drop zone or file picker produced a file
    UploadSucceeded {
        dataset: DatasetHandle,           // Handle minted when the upload was issued
        response: UploadResponse,
    },
    UploadFailed(ApiError),

    // Workflow
    ToolDropped(String),                 // Raw `text/plain` payload of a workflow drop

    // Tool results
    NullCheckLoaded(NullCheckResponse),
    NullsRemoved(RemoveNullResponse),
    SummaryLoaded(SummaryResponse),
    ToolFailed {
        tool: ToolType,
        error: ApiError,
    },
}

/// Side effects produced by `update`. Executed by `command_executors` once
/// the state borrow has been released.
#[derive(Debug, Clone)]
pub enum Command {
    /// POST the file to `/upload` under the given handle
    UploadFile {
        file: web_sys::File,
        dataset: DatasetHandle,
    },

    /// Fire the remote request behind a tool
    RunTool {
        tool: ToolType,
        dataset: Option<DatasetHandle>,
    },

    /// Append a node to the workflow container
    AppendWorkflowItem(WorkflowItem),

    /// Prepend a banner or results block to the results container
    Notify(Notification),
}

impl Command {
    pub fn notify(notification: Notification) -> Self {
        Command::Notify(notification)
    }

    /// True for commands that talk to the remote service.
    pub fn is_network(&self) -> bool {
        matches!(self, Command::UploadFile { .. } | Command::RunTool { .. })
    }
}
