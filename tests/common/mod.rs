//! Helpers shared by the browser tests: page layout, a recording stand-in
//! for `window.fetch`, and polling for asynchronous DOM updates.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use data_cleaning_frontend::constants::RESULTS_CONTAINER_ID;
use data_cleaning_frontend::ui::setup::create_base_ui;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Element, FormData, Request, Response, ResponseInit};

enum Reply {
    Status(u16, String),
    Offline(String),
}

thread_local! {
    static REQUESTS: RefCell<Vec<Request>> = RefCell::new(Vec::new());
    static REPLY: RefCell<Reply> = RefCell::new(Reply::Status(200, "{}".to_string()));
    static FETCH_REPLACED: Cell<bool> = Cell::new(false);
}

pub fn document() -> Document {
    let document = web_sys::window().unwrap().document().unwrap();
    create_base_ui(&document).expect("layout builds");
    document
}

pub fn results_container(document: &Document) -> Element {
    document.get_element_by_id(RESULTS_CONTAINER_ID).unwrap()
}

/// Empty `#resultsContainer` so the next notification is the only one.
pub fn clear_results(document: &Document) {
    results_container(document).set_inner_html("");
}

/// Answer every `fetch` with `status` and `body`, recording the requests.
pub fn stub_fetch(status: u16, body: &str) {
    REPLY.with(|r| *r.borrow_mut() = Reply::Status(status, body.to_string()));
    replace_fetch();
}

/// Reject every `fetch` the way the browser does when the host is down.
pub fn stub_fetch_offline(message: &str) {
    REPLY.with(|r| *r.borrow_mut() = Reply::Offline(message.to_string()));
    replace_fetch();
}

/// Requests seen since the last stub was installed.
pub fn recorded_requests() -> Vec<Request> {
    REQUESTS.with(|r| r.borrow().clone())
}

fn replace_fetch() {
    REQUESTS.with(|r| r.borrow_mut().clear());
    if FETCH_REPLACED.with(|done| done.replace(true)) {
        return;
    }

    let fetch = Closure::wrap(Box::new(|input: JsValue| -> Promise {
        let request: Request = input.unchecked_into();
        REQUESTS.with(|r| r.borrow_mut().push(request));
        REPLY.with(|reply| match &*reply.borrow() {
            Reply::Status(status, body) => {
                let init = ResponseInit::new();
                init.set_status(*status);
                match Response::new_with_opt_str_and_init(Some(body), &init) {
                    Ok(response) => Promise::resolve(&JsValue::from(response)),
                    Err(e) => Promise::reject(&e),
                }
            }
            Reply::Offline(message) => Promise::reject(&js_sys::Error::new(message)),
        })
    }) as Box<dyn FnMut(JsValue) -> Promise>);

    let window = web_sys::window().unwrap();
    Reflect::set(&window, &JsValue::from_str("fetch"), fetch.as_ref()).unwrap();
    fetch.forget();
}

/// Poll until `ready` holds, giving spawned futures and timers a chance to
/// run. Returns the final answer.
pub async fn wait_until(mut ready: impl FnMut() -> bool) -> bool {
    for _ in 0..200 {
        if ready() {
            return true;
        }
        TimeoutFuture::new(10).await;
    }
    ready()
}

/// Wait for exactly `count` requests, then give stragglers a moment to show.
pub async fn wait_for_requests(count: usize) -> Vec<Request> {
    wait_until(|| recorded_requests().len() >= count).await;
    TimeoutFuture::new(50).await;
    recorded_requests()
}

/// Wait for the newest notification to carry `class`.
pub async fn wait_for_notification(document: &Document, class: &str) -> Element {
    let container = results_container(document);
    let found = wait_until(|| {
        container
            .first_element_child()
            .map(|el| el.class_name() == class)
            .unwrap_or(false)
    })
    .await;
    assert!(found, "no .{} notification appeared", class);
    container.first_element_child().unwrap()
}

pub async fn body_text(request: &Request) -> String {
    let text = JsFuture::from(request.text().unwrap()).await.unwrap();
    text.as_string().unwrap()
}

pub async fn body_form(request: &Request) -> FormData {
    let form = JsFuture::from(request.form_data().unwrap()).await.unwrap();
    form.unchecked_into()
}

pub fn content_type(request: &Request) -> Option<String> {
    request.headers().get("content-type").unwrap()
}
