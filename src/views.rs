// src/views.rs
//
// Pure text / HTML builders for everything the controller puts on screen.
// Nothing in here touches the DOM so the formatting can be unit tested
// natively.
//
use crate::constants::WORKFLOW_ITEM_RESULTS_CLASS;
use crate::models::{NullCheckResponse, Shape, SummaryResponse, WorkflowItem};

/// Escape text before it is spliced into `inner_html`. Column names and
/// tool identifiers come from the network or the drag payload.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn shape_text(shape: &Shape) -> String {
    format!("{} rows × {} columns", shape.rows(), shape.cols())
}

/// Plain text for the upload success banner.
pub fn upload_success_text(columns: &[String]) -> String {
    format!("File uploaded successfully. Columns: {}", columns.join(", "))
}

/// Plain text for the null-removal success banner.
pub fn remove_null_success_text(new_shape: &Shape) -> String {
    format!("Null values removed. New shape: {}", shape_text(new_shape))
}

/// Results block for `check_null`.
pub fn null_summary_html(resp: &NullCheckResponse) -> String {
    let per_column = resp
        .null_counts
        .iter()
        .map(|(col, count)| format!("{}: {}", escape_html(col), count))
        .collect::<Vec<_>>()
        .join("<br>");
    format!(
        "Null Values Summary:<br>{}<br>Total nulls: {}",
        per_column, resp.total_nulls
    )
}

/// Results block for `get_summary`.
pub fn summary_html(resp: &SummaryResponse) -> String {
    let columns = resp
        .columns
        .iter()
        .map(|c| escape_html(c))
        .collect::<Vec<_>>()
        .join(", ");
    let dtypes = resp
        .dtypes
        .iter()
        .map(|(col, ty)| format!("{}: {}", escape_html(col), escape_html(ty)))
        .collect::<Vec<_>>()
        .join("<br>");
    format!(
        "Shape: {}<br>Columns: {}<br>Data Types:<br>{}",
        shape_text(&resp.shape),
        columns,
        dtypes
    )
}

/// Inner markup of a workflow node: label plus its (empty) results slot.
pub fn workflow_item_html(item: &WorkflowItem) -> String {
    format!(
        "<div>{}</div><div class=\"{}\">{}</div>",
        escape_html(&item.label),
        WORKFLOW_ITEM_RESULTS_CLASS,
        item.results_html
    )
}
