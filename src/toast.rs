//! Notification helper.
//! Prepends banners and results blocks to `#resultsContainer`. Success and
//! error banners remove themselves after `NOTIFICATION_TTL_MS`; results
//! blocks stay until the page is reloaded.

use gloo_timers::callback::Timeout;
use tracing::warn;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::{
    ERROR_MESSAGE_CLASS, NOTIFICATION_TTL_MS, RESULTS_CONTAINER_ID, RESULTS_MESSAGE_CLASS,
    SUCCESS_MESSAGE_CLASS,
};
use crate::dom_utils;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    /// HTML block, never expires
    Results,
}

impl NotificationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            NotificationKind::Success => SUCCESS_MESSAGE_CLASS,
            NotificationKind::Error => ERROR_MESSAGE_CLASS,
            NotificationKind::Results => RESULTS_MESSAGE_CLASS,
        }
    }

    /// Auto-dismiss delay, `None` for persistent nodes.
    pub fn ttl_ms(self) -> Option<u32> {
        match self {
            NotificationKind::Success | NotificationKind::Error => Some(NOTIFICATION_TTL_MS),
            NotificationKind::Results => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    /// Plain text for banners, HTML for results.
    pub body: String,
}

impl Notification {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Success, body: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Error, body: text.into() }
    }

    pub fn results(html: impl Into<String>) -> Self {
        Self { kind: NotificationKind::Results, body: html.into() }
    }
}

/// Render a notification. Failures are logged, never propagated: a missing
/// results container must not take the page down.
pub fn show(notification: &Notification) {
    let document = match dom_utils::document() {
        Some(d) => d,
        None => return,
    };
    if let Err(e) = render(&document, notification) {
        warn!("failed to render notification: {:?}", e);
    }
}

/// Build the node, prepend it and schedule its removal.
pub fn render(document: &Document, notification: &Notification) -> Result<Element, JsValue> {
    let container = dom_utils::require_by_id(document, RESULTS_CONTAINER_ID)?;

    let node = document.create_element("div")?;
    node.set_class_name(notification.kind.class_name());
    match notification.kind {
        NotificationKind::Results => node.set_inner_html(&notification.body),
        NotificationKind::Success | NotificationKind::Error => {
            node.set_text_content(Some(&notification.body))
        }
    }

    // Prepend so newest appears on top.
    container.prepend_with_node_1(&node)?;

    if let Some(ttl) = notification.kind.ttl_ms() {
        let doomed = node.clone();
        Timeout::new(ttl, move || doomed.remove()).forget();
    }

    Ok(node)
}
