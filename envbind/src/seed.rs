//! Seed files: `key=value` lines assigned into environment state before binding
//!
//! Lines starting with `//` are comments. A line with exactly one `=` is a
//! pair; every other line is ignored. Nothing is trimmed, quoted or escaped.

use std::fs;
use std::path::Path;

use tracing::{debug, trace};

use crate::env::Environment;
use crate::error::BindError;

const COMMENT_PREFIX: &str = "//";

/// Parse seed-file text into key/value pairs, in file order.
pub fn parse_seed(text: &str) -> Vec<(&str, &str)> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, line)| {
            if line.starts_with(COMMENT_PREFIX) {
                return None;
            }
            let mut parts = line.split('=');
            match (parts.next(), parts.next(), parts.next()) {
                (Some(key), Some(value), None) => Some((key, value)),
                _ => {
                    trace!(line = index + 1, "ignoring seed line");
                    None
                }
            }
        })
        .collect()
}

/// Assign each pair into `env`, stopping at the first rejected assignment.
pub fn apply_seed<E: Environment + ?Sized>(
    env: &mut E,
    pairs: &[(&str, &str)],
) -> Result<(), BindError> {
    for (key, value) in pairs {
        env.set_var(key, value)?;
    }
    Ok(())
}

/// Read, parse and apply the seed file at `path`.
///
/// Returns the number of pairs assigned.
pub fn seed_from_file<E: Environment + ?Sized>(
    env: &mut E,
    path: impl AsRef<Path>,
) -> Result<usize, BindError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| BindError::Io {
        path: path.display().to_string(),
        source: e,
    })?;

    let pairs = parse_seed(&text);
    apply_seed(env, &pairs)?;
    debug!(path = %path.display(), pairs = pairs.len(), "seeded environment");
    Ok(pairs.len())
}
