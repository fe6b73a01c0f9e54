//! URL helpers

use crate::types::*;
use once_cell::sync::Lazy;
use regex::Regex;

static ABSOLUTE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://").expect("absolute URL pattern is valid"));

/// Join a base URL and a child path with `/`
///
/// An empty side yields the other side. An absolute `http(s)://` child
/// replaces the parent.
pub fn join_urls(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        return child.to_string();
    }
    if child.is_empty() {
        return parent.to_string();
    }
    if ABSOLUTE_URL.is_match(child) {
        return child.to_string();
    }
    format!("{parent}/{child}")
}

/// Replace booleans in a query map with `1`/`0`
pub fn normalize_url_query(query: &Map) -> Map {
    query
        .iter()
        .map(|(key, val)| {
            let val = match val {
                Value::Bool(b) => Value::Number(if *b { 1.0 } else { 0.0 }),
                other => other.clone(),
            };
            (key.clone(), val)
        })
        .collect()
}
