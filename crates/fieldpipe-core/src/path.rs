//! Dotted path resolution
//!
//! Walks the intermediate maps of a path and hands back the map that owns the
//! final segment. Never creates maps and never indexes into lists.

use crate::error::{Error, Result};
use crate::value::{Map, Value};

fn not_found(path: &str) -> Error {
    Error::PathNotFound {
        path: path.to_string(),
    }
}

/// Split a path into its intermediate segments and final key.
fn split(path: &str) -> Result<(Vec<&str>, &str)> {
    let mut segments: Vec<&str> = path.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(not_found(path));
    }
    let last = segments.pop().ok_or_else(|| not_found(path))?;
    Ok((segments, last))
}

/// Resolve the map holding the last segment of `path`.
pub(crate) fn parent<'m, 'p>(root: &'m Map, path: &'p str) -> Result<(&'m Map, &'p str)> {
    let (intermediate, last) = split(path)?;
    let mut current = root;
    for segment in intermediate {
        current = match current.get(segment) {
            Some(Value::Map(next)) => next,
            _ => return Err(not_found(path)),
        };
    }
    Ok((current, last))
}

/// Mutable counterpart of [`parent`].
pub(crate) fn parent_mut<'m, 'p>(
    root: &'m mut Map,
    path: &'p str,
) -> Result<(&'m mut Map, &'p str)> {
    let (intermediate, last) = split(path)?;
    let mut current = root;
    for segment in intermediate {
        current = match current.get_mut(segment) {
            Some(Value::Map(next)) => next,
            _ => return Err(not_found(path)),
        };
    }
    Ok((current, last))
}
