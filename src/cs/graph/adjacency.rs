//! Adjacency-list text input.
//!
//! Each non-blank line reads `vertex_id neighbor_id neighbor_id ...`,
//! separated by any whitespace. Lines starting with `#` are skipped.

use std::fmt::Display;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use crate::error::{GraphError, Result};

/// Vertex identifiers paired with their (possibly repeating) neighbors.
pub type AdjacencyList<V> = Vec<(V, Vec<V>)>;

/// Parses adjacency-list text.
///
/// # Errors
/// * `Parse` with the 1-based line number if a token is not a valid identifier
pub fn parse_adjacency_list<V>(text: &str) -> Result<AdjacencyList<V>>
where
    V: FromStr,
    V::Err: Display,
{
    let mut list = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut ids = Vec::new();
        for token in line.split_whitespace() {
            let id = token.parse::<V>().map_err(|e| GraphError::Parse {
                line: idx + 1,
                reason: format!("invalid vertex id {:?}: {}", token, e),
            })?;
            ids.push(id);
        }

        let mut ids = ids.into_iter();
        if let Some(vertex) = ids.next() {
            list.push((vertex, ids.collect()));
        }
    }
    Ok(list)
}

/// Reads and parses an adjacency-list file.
pub fn read_adjacency_list<V, P>(path: P) -> Result<AdjacencyList<V>>
where
    V: FromStr,
    V::Err: Display,
    P: AsRef<Path>,
{
    let text = fs::read_to_string(path)?;
    parse_adjacency_list(&text)
}
