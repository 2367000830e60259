use std::fmt;
use std::marker::PhantomData;

use serde::de::{DeserializeOwned, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::ApiError;

// ---------------------------------------------------------------------------
// Tools
// ---------------------------------------------------------------------------

/// The closed set of remote operations a user can drag into the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolType {
    CheckNull,
    RemoveNull,
    GetSummary,
}

impl ToolType {
    pub const ALL: [ToolType; 3] =
        [ToolType::CheckNull, ToolType::RemoveNull, ToolType::GetSummary];

    /// Parse a drag payload. Anything outside the closed set is `None`.
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "check_null" => Some(ToolType::CheckNull),
            "remove_null" => Some(ToolType::RemoveNull),
            "get_summary" => Some(ToolType::GetSummary),
            _ => None,
        }
    }

    /// Identifier carried in `data-tool` and the drag payload.
    pub fn id(self) -> &'static str {
        match self {
            ToolType::CheckNull => "check_null",
            ToolType::RemoveNull => "remove_null",
            ToolType::GetSummary => "get_summary",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ToolType::CheckNull => "Check Null Values",
            ToolType::RemoveNull => "Remove Null Values",
            ToolType::GetSummary => "Get Data Summary",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ToolType::CheckNull => "🔍",
            ToolType::RemoveNull => "🧹",
            ToolType::GetSummary => "📊",
        }
    }

    /// Prefix for transport/decode failures of this tool's request.
    pub fn error_context(self) -> &'static str {
        match self {
            ToolType::CheckNull => "Error checking null values",
            ToolType::RemoveNull => "Error removing null values",
            ToolType::GetSummary => "Error getting summary",
        }
    }
}

impl fmt::Display for ToolType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Human readable label for a tool identifier, echoing unknown identifiers.
pub fn tool_name(tool_id: &str) -> String {
    ToolType::from_id(tool_id)
        .map(|tool| tool.label().to_string())
        .unwrap_or_else(|| tool_id.to_string())
}

// ---------------------------------------------------------------------------
// Workflow items
// ---------------------------------------------------------------------------

/// One dropped tool. The raw identifier is kept even when it is not a known
/// tool so the node can still be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowItem {
    pub id: u32,
    pub tool_id: String,
    pub label: String,
    pub results_html: String,
}

impl WorkflowItem {
    pub fn new(id: u32, tool_id: &str) -> Self {
        Self {
            id,
            tool_id: tool_id.to_string(),
            label: tool_name(tool_id),
            results_html: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset handle
// ---------------------------------------------------------------------------

/// Reference to the dataset held by the remote service. Minted when a file
/// is uploaded and passed along with every later tool request.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DatasetHandle(String);

impl DatasetHandle {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn from_id(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DatasetHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// `[rows, cols]` as returned by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shape(pub u64, pub u64);

impl Shape {
    pub fn rows(&self) -> u64 {
        self.0
    }

    pub fn cols(&self) -> u64 {
        self.1
    }
}

/// JSON object decoded into an ordered list of `(column, value)` pairs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMap<T>(pub Vec<(String, T)>);

impl<T> ColumnMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<T> FromIterator<(String, T)> for ColumnMap<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ColumnMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ColumnMapVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for ColumnMapVisitor<T> {
            type Value = ColumnMap<T>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object keyed by column name")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((key, value)) = map.next_entry::<String, T>()? {
                    entries.push((key, value));
                }
                Ok(ColumnMap(entries))
            }
        }

        deserializer.deserialize_map(ColumnMapVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UploadResponse {
    pub columns: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub shape: Option<Shape>,
    #[serde(default)]
    pub dataset_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NullCheckResponse {
    pub null_counts: ColumnMap<u64>,
    pub total_nulls: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullStrategy {
    Dropna,
    Fillna,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RemoveNullRequest {
    pub method: NullStrategy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_value: Option<Value>,
}

impl RemoveNullRequest {
    /// The payload the workflow tool sends: drop every row holding a null.
    pub fn dropna() -> Self {
        Self {
            method: NullStrategy::Dropna,
            columns: None,
            fill_value: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RemoveNullResponse {
    pub new_shape: Shape,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SummaryResponse {
    pub shape: Shape,
    pub columns: Vec<String>,
    pub dtypes: ColumnMap<String>,
    #[serde(default)]
    pub null_counts: Option<ColumnMap<u64>>,
}

/// Decode a response body. A truthy `error` field wins over everything else,
/// regardless of what other fields are present.
pub fn decode_envelope<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let value: Value = serde_json::from_str(body)?;
    if let Some(message) = value.get("error").and_then(error_text) {
        return Err(ApiError::Remote(message));
    }
    Ok(serde_json::from_value(value)?)
}

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_name_maps_known_ids() {
        assert_eq!(tool_name("check_null"), "Check Null Values");
        assert_eq!(tool_name("remove_null"), "Remove Null Values");
        assert_eq!(tool_name("get_summary"), "Get Data Summary");
    }

    #[test]
    fn tool_name_echoes_unknown_ids() {
        assert_eq!(tool_name("fill_null"), "fill_null");
        assert_eq!(tool_name(""), "");
        assert_eq!(tool_name("Check_Null"), "Check_Null");
    }

    #[test]
    fn tool_ids_round_trip() {
        for tool in ToolType::ALL {
            assert_eq!(ToolType::from_id(tool.id()), Some(tool));
        }
    }

    #[test]
    fn workflow_item_starts_with_empty_results() {
        let item = WorkflowItem::new(3, "get_summary");
        assert_eq!(item.label, "Get Data Summary");
        assert_eq!(item.tool_id, "get_summary");
        assert!(item.results_html.is_empty());

        let unknown = WorkflowItem::new(4, "mystery");
        assert_eq!(unknown.label, "mystery");
        assert_eq!(unknown.tool_id, "mystery");
    }

    #[test]
    fn generated_handles_are_distinct() {
        assert_ne!(DatasetHandle::generate(), DatasetHandle::generate());
    }

    #[test]
    fn dropna_payload_is_minimal() {
        let body = serde_json::to_value(RemoveNullRequest::dropna()).unwrap();
        assert_eq!(body, json!({ "method": "dropna" }));
    }

    #[test]
    fn fillna_payload_keeps_optional_fields() {
        let req = RemoveNullRequest {
            method: NullStrategy::Fillna,
            columns: Some(vec!["age".into()]),
            fill_value: Some(json!(0)),
        };
        let body = serde_json::to_value(req).unwrap();
        assert_eq!(body, json!({ "method": "fillna", "columns": ["age"], "fill_value": 0 }));
    }

    #[test]
    fn upload_response_accepts_extra_fields() {
        let body = r#"{"message":"File uploaded successfully","columns":["a","b"],"shape":[10,2]}"#;
        let resp: UploadResponse = decode_envelope(body).unwrap();
        assert_eq!(resp.columns, vec!["a", "b"]);
        assert_eq!(resp.shape, Some(Shape(10, 2)));
        assert_eq!(resp.dataset_id, None);
    }

    #[test]
    fn column_maps_keep_server_order() {
        let body = r#"{"null_counts":{"zeta":1,"alpha":0,"mid":4},"total_nulls":5}"#;
        let resp: NullCheckResponse = decode_envelope(body).unwrap();
        let cols: Vec<&str> = resp.null_counts.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["zeta", "alpha", "mid"]);
        assert_eq!(resp.total_nulls, 5);
    }

    #[test]
    fn error_field_wins() {
        let body = r#"{"error":"No data loaded"}"#;
        let err = decode_envelope::<NullCheckResponse>(body).unwrap_err();
        assert_eq!(err, ApiError::Remote("No data loaded".into()));

        // even when the success fields are also present
        let body = r#"{"error":"boom","new_shape":[1,1]}"#;
        let err = decode_envelope::<RemoveNullResponse>(body).unwrap_err();
        assert_eq!(err, ApiError::Remote("boom".into()));
    }

    #[test]
    fn falsy_error_fields_are_ignored() {
        for err in [json!(null), json!(""), json!(false), json!(0)] {
            let body = json!({ "error": err, "new_shape": [3, 2] }).to_string();
            let resp: RemoveNullResponse = decode_envelope(&body).unwrap();
            assert_eq!(resp.new_shape, Shape(3, 2));
        }
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode_envelope::<SummaryResponse>("<!doctype html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn missing_fields_are_a_decode_error() {
        let err = decode_envelope::<SummaryResponse>(r#"{"shape":[1,1]}"#).unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
