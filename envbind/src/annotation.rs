//! Binding annotation parsing
//!
//! Grammar: `name` or `name,default:<literal>`. Only the first `,` splits;
//! the literal is kept verbatim, so defaults may contain `,` and `=`.
//!
//! A suffix that does not start with `default:` is dropped and the field
//! behaves as if it had no default. `#[env("PORT,defualt:80")]` silently
//! binds `PORT` with no fallback; watch for typos here.

const DEFAULT_MARKER: &str = "default:";

/// A parsed `name[,default:<literal>]` annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding<'a> {
    /// Environment variable key
    pub name: &'a str,
    /// Fallback used when the variable is unset or empty; empty means none
    pub default: &'a str,
}

impl<'a> Binding<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (name, default) = match raw.split_once(',') {
            Some((name, rest)) => (name, rest.strip_prefix(DEFAULT_MARKER).unwrap_or("")),
            None => (raw, ""),
        };
        Self { name, default }
    }
}
