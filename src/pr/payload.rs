//! Field extractors over a decoded PR payload.
//!
//! Payloads are owned by the GitHub API, so every accessor walks optional
//! layers and substitutes an empty default instead of failing.

use serde_json::Value;

/// Label names in payload order. Entries without a non-empty `name` are skipped.
pub fn get_pr_labels(payload: &Value) -> Vec<String> {
    payload
        .get("labels")
        .and_then(Value::as_array)
        .map(|labels| {
            labels
                .iter()
                .filter_map(|label| label.get("name").and_then(Value::as_str))
                .filter(|name| !name.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Milestone title, or an empty string when there is no milestone.
pub fn get_pr_milestone(payload: &Value) -> String {
    payload
        .pointer("/milestone/title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

/// Changelog types carried by the labels, e.g. `Added` for `changelog/Added`.
///
/// Keeps label order and duplicates.
pub fn get_changelog_types(payload: &Value, prefix: &str) -> Vec<String> {
    get_pr_labels(payload)
        .into_iter()
        .filter(|name| name.starts_with(prefix))
        .filter_map(|name| {
            // Text between the first and second occurrence of the prefix.
            name.split(prefix).nth(1).map(str::to_string)
        })
        .collect()
}

/// Whether the PR head lives in a fork, i.e. comes from an external contributor.
///
/// True only when `head.repo.fork` is the boolean `true`. Any missing layer or
/// unexpected type yields false.
pub fn from_contributor(payload: &Value) -> bool {
    payload.pointer("/head/repo/fork").and_then(Value::as_bool) == Some(true)
}

/// The `items` of a search payload, empty when absent.
pub fn get_search_items(payload: &Value) -> &[Value] {
    payload
        .get("items")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}
