//! Environment state providers

use std::collections::HashMap;
use std::env::{self, VarError};

use crate::error::BindError;

/// String-keyed environment state the binder reads from.
pub trait Environment {
    /// Look up `key`, with the same contract as [`std::env::var`].
    fn var(&self, key: &str) -> Result<String, VarError>;

    /// Assign `value` to `key`, overwriting any previous value.
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), BindError>;
}

impl<E: Environment + ?Sized> Environment for &mut E {
    fn var(&self, key: &str) -> Result<String, VarError> {
        (**self).var(key)
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), BindError> {
        (**self).set_var(key, value)
    }
}

/// Reject assignments the operating system would refuse.
///
/// `std::env::set_var` panics on these, so they are checked up front and
/// applied to every provider alike.
fn validate_assignment(key: &str, value: &str) -> Result<(), BindError> {
    let reason = if key.is_empty() {
        "key is empty"
    } else if key.contains('=') {
        "key contains '='"
    } else if key.contains('\0') {
        "key contains a NUL byte"
    } else if value.contains('\0') {
        "value contains a NUL byte"
    } else {
        return Ok(());
    };

    Err(BindError::InvalidAssignment {
        key: key.to_owned(),
        reason,
    })
}

/// The real process environment.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        // such keys can never have been assigned
        if key.is_empty() || key.contains(['=', '\0']) {
            return Err(VarError::NotPresent);
        }
        env::var(key)
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), BindError> {
        validate_assignment(key, value)?;
        env::set_var(key, value);
        Ok(())
    }
}

/// An in-memory environment, isolated from the process.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Result<String, VarError> {
        self.vars.get(key).cloned().ok_or(VarError::NotPresent)
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), BindError> {
        validate_assignment(key, value)?;
        self.vars.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_map_env_overwrites() {
        let mut env = MapEnv::new();
        env.set_var("KEY", "one").unwrap();
        env.set_var("KEY", "two").unwrap();
        assert_eq!(env.var("KEY").unwrap(), "two");
        assert_eq!(env.len(), 1);
    }

    #[test]
    fn test_map_env_missing() {
        let env = MapEnv::new();
        assert!(matches!(env.var("NOPE"), Err(VarError::NotPresent)));
    }

    #[test]
    fn test_invalid_assignments_are_rejected() {
        let mut env = MapEnv::new();
        for (key, value) in [("", "v"), ("A=B", "v"), ("A\0", "v"), ("A", "v\0")] {
            let err = env.set_var(key, value).unwrap_err();
            assert!(matches!(err, BindError::InvalidAssignment { .. }), "{key:?}");
        }
        assert!(env.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let env: MapEnv = [("A", "1"), ("B", "2")].into_iter().collect();
        assert_eq!(env.get("B"), Some("2"));
    }

    #[test]
    #[serial]
    fn test_process_env_round_trip() {
        let mut env = ProcessEnv;
        env.set_var("ENVBIND_TEST_PROCESS", "value").unwrap();
        assert_eq!(env.var("ENVBIND_TEST_PROCESS").unwrap(), "value");
        std::env::remove_var("ENVBIND_TEST_PROCESS");
        assert!(env.var("ENVBIND_TEST_PROCESS").is_err());
    }

    #[test]
    fn test_process_env_rejects_empty_key() {
        let mut env = ProcessEnv;
        assert!(env.set_var("", "value").is_err());
        assert!(matches!(env.var(""), Err(VarError::NotPresent)));
    }
}
