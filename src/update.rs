// src/update.rs
//
// The reducer. Pure: takes the current state and one message, mutates the
// state and returns the side effects to run. No DOM, no network.
//
use tracing::{debug, info, warn};

use crate::messages::{Command, Message};
use crate::models::{DatasetHandle, ToolType};
use crate::state::AppState;
use crate::toast::Notification;
use crate::views;

const UPLOAD_ERROR_CONTEXT: &str = "Error uploading file";

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    match msg {
        Message::FileSelected(file) => {
            let dataset = DatasetHandle::generate();
            debug!(name = %file.name(), %dataset, "uploading file");
            state.request_started();
            commands.push(Command::UploadFile { file, dataset });
        }

        Message::UploadSucceeded { dataset, response } => {
            state.request_finished();
            // Prefer the id the service echoes back, if it knows about handles.
            let handle = response
                .dataset_id
                .clone()
                .map(DatasetHandle::from_id)
                .unwrap_or(dataset);
            info!(
                dataset = %handle,
                columns = response.columns.len(),
                shape = ?response.shape,
                "upload complete"
            );
            state.dataset = Some(handle);
            commands.push(Command::notify(Notification::success(
                views::upload_success_text(&response.columns),
            )));
        }

        Message::UploadFailed(error) => {
            state.request_finished();
            warn!(%error, "upload failed");
            commands.push(Command::notify(Notification::error(
                error.user_message(UPLOAD_ERROR_CONTEXT),
            )));
        }

        Message::ToolDropped(tool_id) => {
            if tool_id.is_empty() {
                return commands;
            }
            let item = state.push_workflow_item(&tool_id);
            commands.push(Command::AppendWorkflowItem(item));

            match ToolType::from_id(&tool_id) {
                Some(tool) => {
                    state.request_started();
                    commands.push(Command::RunTool {
                        tool,
                        dataset: state.dataset.clone(),
                    });
                }
                None => debug!(%tool_id, "no operation bound to tool"),
            }
        }

        Message::NullCheckLoaded(resp) => {
            state.request_finished();
            info!(total_nulls = resp.total_nulls, "null check complete");
            commands.push(Command::notify(Notification::results(
                views::null_summary_html(&resp),
            )));
        }

        Message::NullsRemoved(resp) => {
            state.request_finished();
            info!(rows = resp.new_shape.rows(), cols = resp.new_shape.cols(), "nulls removed");
            commands.push(Command::notify(Notification::success(
                views::remove_null_success_text(&resp.new_shape),
            )));
        }

        Message::SummaryLoaded(resp) => {
            state.request_finished();
            info!(columns = resp.columns.len(), "summary loaded");
            commands.push(Command::notify(Notification::results(views::summary_html(
                &resp,
            ))));
        }

        Message::ToolFailed { tool, error } => {
            state.request_finished();
            warn!(%tool, %error, "tool request failed");
            commands.push(Command::notify(Notification::error(
                error.user_message(tool.error_context()),
            )));
        }
    }

    commands
}
