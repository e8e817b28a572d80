//! Query filters for list endpoints.
//!
//! Each query struct deserializes straight from a URL query string (camelCase
//! keys, every parameter optional) and applies to an in-memory collection.
//! Comma-separated parameters match any of the listed values.

pub mod client;
pub mod exercise;
pub mod goal;
pub mod routine;
pub mod tracking;
pub mod workout;

use std::cmp::Ordering;

use serde::de::DeserializeOwned;

/// Case-insensitive substring match.
pub(crate) fn icontains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

pub(crate) fn icontains_opt(haystack: Option<&str>, needle: &str) -> bool {
    haystack.is_some_and(|h| icontains(h, needle))
}

/// Split a comma-separated parameter, dropping blank entries.
pub(crate) fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a comma-separated list of enum values by their wire names.
/// Unrecognized names are skipped.
pub(crate) fn parse_list<T: DeserializeOwned>(raw: &str) -> Vec<T> {
    split_list(raw)
        .into_iter()
        .filter_map(|s| serde_json::from_value(serde_json::Value::String(s)).ok())
        .collect()
}

pub(crate) fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}

/// Sort `items` by an ordering parameter such as `"name"` or `"-joinDate"`.
///
/// A leading `-` sorts descending. A missing or unrecognized field falls back
/// to `default`. `compare` receives the bare field name.
pub(crate) fn sort_by_ordering<T>(
    items: &mut [T],
    ordering: Option<&str>,
    fields: &[&str],
    default: &str,
    compare: impl Fn(&str, &T, &T) -> Ordering,
) {
    let parse = |raw: &str| match raw.strip_prefix('-') {
        Some(field) => (field.to_string(), true),
        None => (raw.to_string(), false),
    };

    let (field, descending) = ordering
        .map(str::trim)
        .map(parse)
        .filter(|(field, _)| fields.contains(&field.as_str()))
        .unwrap_or_else(|| parse(default));

    items.sort_by(|a, b| {
        let ord = compare(&field, a, b);
        if descending { ord.reverse() } else { ord }
    });
}
