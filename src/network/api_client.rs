use tracing::{debug, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Headers, Request, RequestInit, RequestMode, Response};

use super::config::with_api_config;
use crate::constants::DATASET_ID_PARAM;
use crate::error::ApiError;
use crate::models::{
    decode_envelope, DatasetHandle, NullCheckResponse, RemoveNullRequest, RemoveNullResponse,
    SummaryResponse, UploadResponse,
};

/// Request payloads we know how to send.
enum Body {
    Json(String),
    Form(FormData),
}

// REST client for the data-cleaning service
pub struct ApiClient;

impl ApiClient {
    fn endpoint(path: &str, dataset: Option<&DatasetHandle>) -> Result<String, ApiError> {
        with_api_config(|config| config.endpoint(path, dataset))
    }

    /// Upload a CSV / Excel file as multipart form data (`file` field).
    pub async fn upload(file: &File, dataset: &DatasetHandle) -> Result<UploadResponse, ApiError> {
        let url = Self::endpoint("/upload", None)?;

        let form = FormData::new()?;
        form.append_with_blob_and_filename("file", file, &file.name())?;
        form.append_with_str(DATASET_ID_PARAM, dataset.as_str())?;

        let body = Self::fetch_text(&url, "POST", Some(Body::Form(form))).await?;
        decode_envelope(&body)
    }

    /// Per-column null counts plus the grand total.
    pub async fn check_null(
        dataset: Option<&DatasetHandle>,
    ) -> Result<NullCheckResponse, ApiError> {
        let url = Self::endpoint("/check_null", dataset)?;
        let body = Self::fetch_text(&url, "GET", None).await?;
        decode_envelope(&body)
    }

    pub async fn remove_null(
        dataset: Option<&DatasetHandle>,
        request: &RemoveNullRequest,
    ) -> Result<RemoveNullResponse, ApiError> {
        let url = Self::endpoint("/remove_null", dataset)?;
        let payload = serde_json::to_string(request)?;
        let body = Self::fetch_text(&url, "POST", Some(Body::Json(payload))).await?;
        decode_envelope(&body)
    }

    pub async fn get_summary(dataset: Option<&DatasetHandle>) -> Result<SummaryResponse, ApiError> {
        let url = Self::endpoint("/get_summary", dataset)?;
        let body = Self::fetch_text(&url, "GET", None).await?;
        decode_envelope(&body)
    }

    // Helper function to make fetch requests. The body is returned whatever
    // the HTTP status: the service reports failures as `{"error": ...}` with
    // a 4xx, and the caller decides based on the JSON.
    async fn fetch_text(url: &str, method: &str, body: Option<Body>) -> Result<String, ApiError> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        match body {
            Some(Body::Json(data)) => {
                let headers = Headers::new()?;
                headers.append("Content-Type", "application/json")?;
                opts.set_headers(&headers);
                opts.set_body(&JsValue::from_str(&data));
            }
            // The browser sets the multipart boundary itself.
            Some(Body::Form(form)) => opts.set_body(&form),
            None => {}
        }

        let request = Request::new_with_str_and_init(url, &opts)?;

        let window =
            web_sys::window().ok_or_else(|| ApiError::Dom("no global window exists".into()))?;
        debug!(%method, %url, "fetch");
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        if !resp.ok() {
            warn!(status = resp.status(), %url, "service returned an error status");
        }

        let text = JsFuture::from(resp.text()?).await?;
        Ok(text.as_string().unwrap_or_default())
    }
}
