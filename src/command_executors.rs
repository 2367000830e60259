use tracing::error;
use wasm_bindgen_futures::spawn_local;

use crate::components::workflow_canvas;
use crate::dom_utils;
use crate::messages::{Command, Message};
use crate::models::{RemoveNullRequest, ToolType};
use crate::network::ApiClient;
use crate::state::dispatch_global_message;
use crate::toast;

/// Run one command. Network commands are fire-and-forget: each spawns its
/// own future and reports back through `dispatch_global_message` in
/// whatever order the responses arrive.
pub fn execute(cmd: Command) {
    match cmd {
        Command::UploadFile { file, dataset } => {
            spawn_local(async move {
                let msg = match ApiClient::upload(&file, &dataset).await {
                    Ok(response) => Message::UploadSucceeded { dataset, response },
                    Err(e) => Message::UploadFailed(e),
                };
                dispatch_global_message(msg);
            });
        }
        Command::RunTool { tool, dataset } => {
            spawn_local(async move {
                let dataset = dataset.as_ref();
                let result = match tool {
                    ToolType::CheckNull => ApiClient::check_null(dataset)
                        .await
                        .map(Message::NullCheckLoaded),
                    ToolType::RemoveNull => {
                        ApiClient::remove_null(dataset, &RemoveNullRequest::dropna())
                            .await
                            .map(Message::NullsRemoved)
                    }
                    ToolType::GetSummary => ApiClient::get_summary(dataset)
                        .await
                        .map(Message::SummaryLoaded),
                };
                let msg = result.unwrap_or_else(|error| Message::ToolFailed { tool, error });
                dispatch_global_message(msg);
            });
        }
        Command::AppendWorkflowItem(item) => {
            let Some(document) = dom_utils::document() else {
                return;
            };
            if let Err(e) = workflow_canvas::append_workflow_item(&document, &item) {
                error!("Failed to append workflow item {}: {:?}", item.id, e);
            }
        }
        Command::Notify(notification) => toast::show(&notification),
    }
}
