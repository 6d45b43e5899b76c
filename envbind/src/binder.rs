//! The field-binding engine

use std::env::VarError;
use std::path::Path;

use tracing::{debug, trace};

use crate::annotation::Binding;
use crate::decode;
use crate::descriptor::{Bindable, FieldDescriptor, FieldKind};
use crate::env::Environment;
use crate::error::{BindError, DecodeError};
use crate::seed;

/// Populates [`Bindable`] records from an [`Environment`].
#[derive(Debug, Default, Clone)]
pub struct Binder<E> {
    env: E,
}

impl<E: Environment> Binder<E> {
    pub fn new(env: E) -> Self {
        Self { env }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Give back the environment, including anything seeded into it.
    pub fn into_env(self) -> E {
        self.env
    }

    /// Build a `T` from the current environment state.
    ///
    /// Fields are visited in declaration order. A field is left at its
    /// `Default` value when it is not `pub`, has no annotation, or neither
    /// the variable nor the annotation's default yields a non-empty string.
    ///
    /// # Errors
    ///
    /// - `T` is not a record type
    /// - A resolved value cannot be decoded into its field's type
    /// - A resolved value targets a field of unsupported type
    pub fn bind<T: Bindable + Default>(&self) -> Result<T, BindError> {
        let descriptor = T::descriptor();
        let fields = descriptor.fields().ok_or(BindError::NotARecordType {
            type_name: descriptor.type_name,
        })?;

        let mut record = T::default();
        for (index, field) in fields.iter().enumerate() {
            if let Some(value) = self.resolve(field)? {
                record.assign(index, value)?;
            }
        }
        Ok(record)
    }

    /// Seed the environment from the file at `path`, then [`bind`](Self::bind).
    pub fn load_file<T: Bindable + Default>(
        &mut self,
        path: impl AsRef<Path>,
    ) -> Result<T, BindError> {
        seed::seed_from_file(&mut self.env, path)?;
        self.bind()
    }

    fn resolve(&self, field: &FieldDescriptor) -> Result<Option<decode::Value>, BindError> {
        if !field.public {
            trace!(field = field.name, "skipping non-public field");
            return Ok(None);
        }
        let Some(raw) = field.annotation.filter(|raw| !raw.is_empty()) else {
            trace!(field = field.name, "skipping unannotated field");
            return Ok(None);
        };

        let binding = Binding::parse(raw);
        let text = match self.env.var(binding.name) {
            Ok(value) if !value.is_empty() => value,
            Ok(_) | Err(VarError::NotPresent) => binding.default.to_owned(),
            Err(VarError::NotUnicode(_)) => {
                return Err(BindError::decode(binding.name, DecodeError::NotUnicode));
            }
        };
        if text.is_empty() {
            trace!(field = field.name, name = binding.name, "no value resolved");
            return Ok(None);
        }

        debug!(field = field.name, name = binding.name, kind = %field.kind, "binding field");
        match decode::decode(field.kind, &text) {
            Some(Ok(value)) => Ok(Some(value)),
            Some(Err(e)) => Err(BindError::decode(binding.name, e)),
            None => Err(unsupported(binding.name, field.kind)),
        }
    }
}

fn unsupported(name: &str, kind: FieldKind) -> BindError {
    BindError::UnsupportedType {
        name: name.to_owned(),
        kind,
    }
}
