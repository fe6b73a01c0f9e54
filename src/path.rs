//! Dot-path flattening of nested maps
//!
//! ```text
//! { id: "123", user: { email: "ann@example.com" } }
//! <=> { "id": "123", "user.email": "ann@example.com" }
//! ```
//!
//! Only maps are walked. Lists are stored as opaque leaves. Keys that already
//! contain the separator are not escaped, so they do not survive a round trip.

use crate::types::*;

/// Default path separator
pub const DEFAULT_SEPARATOR: char = '.';

/// Options for flatten/expand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathOpts {
    /// Character joining path segments
    pub separator: char,
}

impl Default for PathOpts {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
        }
    }
}

impl PathOpts {
    /// Options with a custom separator
    pub fn with_separator(separator: char) -> Self {
        Self { separator }
    }
}

/// Flatten a nested map into dot-joined paths
pub fn flatten(obj: &Map) -> Map {
    flatten_with_opts(obj, "", &PathOpts::default())
}

/// Flatten with every produced path starting with `prefix`
///
/// The prefix is prepended as is; pass `"parent."` to nest under `parent`.
pub fn flatten_with_prefix(obj: &Map, prefix: &str) -> Map {
    flatten_with_opts(obj, prefix, &PathOpts::default())
}

/// Flatten with custom options
pub fn flatten_with_opts(obj: &Map, prefix: &str, opts: &PathOpts) -> Map {
    let mut result = Map::new();
    write_flat(&mut result, obj, prefix, opts);
    result
}

/// Expand dot-joined paths back into nested maps
///
/// Precondition: no path is both a leaf and a container (`"a"` and `"a.b"`).
/// When that is violated the later write in key order wins. A path always
/// sorts before its extensions, so in practice the leaf is overwritten by the
/// container and its value is dropped.
pub fn expand(flat: &Map) -> Map {
    expand_with_opts(flat, &PathOpts::default())
}

/// Expand with custom options
pub fn expand_with_opts(flat: &Map, opts: &PathOpts) -> Map {
    let mut result = Map::new();
    for (path, val) in flat {
        insert_path(&mut result, path, val.clone(), opts.separator);
    }
    result
}

// ============================================================
// Internal helpers
// ============================================================

fn write_flat(out: &mut Map, obj: &Map, prefix: &str, opts: &PathOpts) {
    for (key, val) in obj {
        let path = format!("{prefix}{key}");
        match val {
            Value::Map(child) => {
                let child_prefix = format!("{path}{}", opts.separator);
                write_flat(out, child, &child_prefix, opts);
            }
            leaf => {
                out.insert(path, leaf.clone());
            }
        }
    }
}

fn insert_path(root: &mut Map, path: &str, val: Value, separator: char) {
    let mut segments: Vec<&str> = path.split(separator).collect();
    // split always yields at least one segment
    let leaf = segments.pop().unwrap_or_default();
    insert_segments(root, &segments, leaf, val);
}

fn insert_segments(map: &mut Map, parents: &[&str], leaf: &str, val: Value) {
    let Some((head, rest)) = parents.split_first() else {
        map.insert(leaf.to_string(), val);
        return;
    };
    let slot = map
        .entry(head.to_string())
        .or_insert_with(|| Value::Map(Map::new()));
    match slot {
        Value::Map(child) => insert_segments(child, rest, leaf, val),
        other => {
            // A leaf where a container is needed is dropped.
            let mut child = Map::new();
            insert_segments(&mut child, rest, leaf, val);
            *other = Value::Map(child);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn map_of(entries: Vec<(String, Value)>) -> Map {
        entries.into_iter().collect()
    }

    fn person() -> Map {
        map_of(vec![
            field(
                "person",
                Value::map([field("firstName", "Jean"), field("lastName", "Dupont")]),
            ),
            field("number", 123),
        ])
    }

    fn person_flat() -> Map {
        map_of(vec![
            field("person.firstName", "Jean"),
            field("person.lastName", "Dupont"),
            field("number", 123),
        ])
    }

    #[test]
    fn test_flatten() {
        assert_eq!(flatten(&person()), person_flat());
    }

    #[test]
    fn test_expand() {
        assert_eq!(expand(&person_flat()), person());
    }

    #[test]
    fn test_empty() {
        assert_eq!(flatten(&Map::new()), Map::new());
        assert_eq!(expand(&Map::new()), Map::new());
    }

    #[test]
    fn test_lists_are_leaves() {
        let obj = map_of(vec![field(
            "tags",
            Value::list(vec![Value::map([field("a", 1)]), "x".into()]),
        )]);
        assert_eq!(flatten(&obj), obj);
        assert_eq!(expand(&obj), obj);
    }

    #[test]
    fn test_deep_roundtrip() {
        let obj = map_of(vec![
            field(
                "a",
                Value::map([
                    field("b", Value::map([field("c", Value::map([field("d", true)]))])),
                    field("e", Value::Null),
                ]),
            ),
            field("f", "g"),
        ]);
        let flat = flatten(&obj);
        assert_eq!(flat.get("a.b.c.d"), Some(&Value::bool(true)));
        assert_eq!(flat.get("a.e"), Some(&Value::Null));
        assert_eq!(expand(&flat), obj);
    }

    #[test]
    fn test_prefix() {
        let obj = map_of(vec![field("x", 1)]);
        let flat = flatten_with_prefix(&obj, "root.");
        assert_eq!(flat, map_of(vec![field("root.x", 1)]));
    }

    #[test]
    fn test_empty_keys() {
        let top = map_of(vec![field("", 1)]);
        assert_eq!(flatten(&top), top);

        let nested = map_of(vec![field("a", Value::map([field("", 1)]))]);
        assert_eq!(flatten(&nested), map_of(vec![field("a.", 1)]));
        assert_eq!(expand(&map_of(vec![field("a.", 1)])), nested);
    }

    #[test]
    fn test_prefix_with_empty_top_level_key() {
        // The prefix is kept verbatim, trailing separator included.
        let obj = map_of(vec![field("", 1), field("x", 2)]);
        let flat = flatten_with_prefix(&obj, "root.");
        assert_eq!(flat, map_of(vec![field("root.", 1), field("root.x", 2)]));
        assert_eq!(
            expand(&flat),
            map_of(vec![field("root", Value::map([field("", 1), field("x", 2)]))])
        );
    }

    #[test]
    fn test_empty_nested_map_disappears() {
        let obj = map_of(vec![field("a", Value::Map(Map::new())), field("b", 1)]);
        assert_eq!(flatten(&obj), map_of(vec![field("b", 1)]));
    }

    #[test]
    fn test_custom_separator() {
        let opts = PathOpts::with_separator('/');
        let flat = flatten_with_opts(&person(), "", &opts);
        assert!(flat.contains_key("person/firstName"));
        assert_eq!(expand_with_opts(&flat, &opts), person());
    }

    #[test]
    fn test_leaf_container_collision_last_write_wins() {
        let flat = map_of(vec![field("a", 1), field("a.b", 2)]);
        assert_eq!(
            expand(&flat),
            map_of(vec![field("a", Value::map([field("b", 2)]))])
        );
    }

    #[test]
    fn test_deep_path_through_leaf() {
        let flat = map_of(vec![field("a", "leaf"), field("a.b.c", true)]);
        assert_eq!(
            expand(&flat),
            map_of(vec![field(
                "a",
                Value::map([field("b", Value::map([field("c", true)]))])
            )])
        );
    }
}
