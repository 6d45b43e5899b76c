//! Error types for environment binding

use std::num::{ParseFloatError, ParseIntError};

use crate::descriptor::FieldKind;

/// Errors that can occur when binding a record from environment state.
///
/// Every variant aborts the whole bind; no partially populated record is
/// ever returned.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    /// The target type is not a record (struct with named fields).
    #[error("type '{type_name}' is not a record type")]
    NotARecordType {
        /// Name of the type that was passed to the binder
        type_name: &'static str,
    },

    /// A resolved value could not be decoded into the field's type.
    #[error("failed to decode environment variable '{name}': {source}")]
    FieldDecode {
        /// Binding name (environment variable key) of the field
        name: String,
        /// The conversion failure
        #[source]
        source: DecodeError,
    },

    /// The field's declared type has no decoding rule.
    #[error("environment variable '{name}' is bound to unsupported type {kind}")]
    UnsupportedType {
        /// Binding name of the field
        name: String,
        /// The offending kind
        kind: FieldKind,
    },

    /// The seed file could not be read.
    #[error("failed to read seed file '{path}': {source}")]
    Io {
        /// Path of the seed file
        path: String,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A key/value pair could not be assigned into environment state.
    #[error("cannot assign environment variable '{key}': {reason}")]
    InvalidAssignment {
        /// Key that was rejected
        key: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// A decoded value did not match the kind of the field it was assigned to.
    #[error("field '{field}' expects a value of kind {expected}")]
    ValueMismatch {
        /// Rust field name
        field: &'static str,
        /// Kind the field was declared with
        expected: FieldKind,
    },
}

impl BindError {
    /// Create a decode error wrapped with the field's binding name
    pub fn decode(name: impl Into<String>, source: DecodeError) -> Self {
        Self::FieldDecode {
            name: name.into(),
            source,
        }
    }

    /// Create a value mismatch error (used by macro-generated code)
    #[doc(hidden)]
    pub fn mismatch(field: &'static str, expected: FieldKind) -> Self {
        Self::ValueMismatch { field, expected }
    }
}

/// The specific conversion failure behind a [`BindError::FieldDecode`].
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// Not one of the accepted boolean literals.
    #[error("invalid boolean literal '{value}'")]
    InvalidBool {
        /// Rejected text
        value: String,
    },

    /// Malformed or out-of-range integer.
    #[error("invalid integer: {0}")]
    Int(#[from] ParseIntError),

    /// Explicit `+` on an unsigned value.
    #[error("unexpected sign in unsigned value '{value}'")]
    UnexpectedSign {
        /// Rejected text
        value: String,
    },

    /// Malformed float.
    #[error("invalid float: {0}")]
    Float(#[from] ParseFloatError),

    /// Finite literal that does not fit the declared float width.
    #[error("'{value}' is out of range for a {bits}-bit float")]
    FloatOverflow {
        /// Rejected text
        value: String,
        /// Declared width
        bits: u32,
    },

    /// Malformed base64 for a byte-sequence field.
    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The environment variable is set but is not valid Unicode.
    #[error("value is not valid unicode")]
    NotUnicode,
}
