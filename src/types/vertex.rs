//! Vertex identifiers.

use std::fmt::Display;
use std::hash::Hash;

/// A value usable as a vertex identifier.
///
/// Labels are hashed for lookup, compared for equality, cloned out of the
/// graph when a traversal reports its visit order, and rendered by
/// `Display` in adjacency listings and error messages. Short strings,
/// `char`s and integers all qualify.
pub trait VertexLabel: Eq + Hash + Clone + Display {}

impl<T: Eq + Hash + Clone + Display> VertexLabel for T {}

/// Parse a `SRC:DEST` edge argument into its two endpoint labels.
///
/// Both halves are trimmed and must be non-empty.
pub fn parse_edge_spec(spec: &str) -> Option<(String, String)> {
    let (src, dest) = spec.split_once(':')?;
    let (src, dest) = (src.trim(), dest.trim());
    if src.is_empty() || dest.is_empty() {
        return None;
    }
    Some((src.to_string(), dest.to_string()))
}
