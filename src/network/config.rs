use std::cell::RefCell;

use tracing::info;
use url::Url;
use wasm_bindgen::prelude::*;

use crate::constants::{DATASET_ID_PARAM, DEFAULT_API_BASE_URL};
use crate::error::ApiError;
use crate::models::DatasetHandle;

/// API route configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    /// Points at the local development service. Used whenever no
    /// `API_BASE_URL` was baked in at build time and the host page did not
    /// call `init_api_config_js()`.
    fn default() -> Self {
        Self::from_url(DEFAULT_API_BASE_URL)
    }
}

impl ApiConfig {
    /// Create a new ApiConfig from the API_BASE_URL environment variable
    pub fn new() -> Result<Self, &'static str> {
        if let Some(url) = option_env!("API_BASE_URL") {
            Ok(Self::from_url(url))
        } else {
            Err("API_BASE_URL environment variable is not set")
        }
    }

    /// Create a new ApiConfig from a URL string
    pub fn from_url(url: &str) -> Self {
        Self { base_url: url.trim().trim_end_matches('/').to_string() }
    }

    /// Get the base URL for all API calls
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`, tagged with the dataset handle when one is known.
    pub fn endpoint(
        &self,
        path: &str,
        dataset: Option<&DatasetHandle>,
    ) -> Result<String, ApiError> {
        let path = path.trim_start_matches('/');
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|e| ApiError::Transport(format!("invalid API URL: {}", e)))?;
        if let Some(dataset) = dataset {
            url.query_pairs_mut().append_pair(DATASET_ID_PARAM, dataset.as_str());
        }
        Ok(url.into())
    }
}

thread_local! {
    static API_CONFIG: RefCell<ApiConfig> = RefCell::new(ApiConfig::default());
}

/// Install the build-time configuration, keeping the default when
/// `API_BASE_URL` was not set.
pub fn init_api_config() {
    if let Ok(config) = ApiConfig::new() {
        set_api_config(config);
    }
}

/// Runtime override for hosts that serve the service elsewhere.
#[wasm_bindgen]
pub fn init_api_config_js(base_url: &str) {
    set_api_config(ApiConfig::from_url(base_url));
}

pub fn set_api_config(config: ApiConfig) {
    info!(base_url = config.base_url(), "API configured");
    API_CONFIG.with(|c| *c.borrow_mut() = config);
}

pub fn with_api_config<R>(f: impl FnOnce(&ApiConfig) -> R) -> R {
    API_CONFIG.with(|c| f(&c.borrow()))
}
