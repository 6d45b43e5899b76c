//! Attribute parsing for `#[env("...")]` annotations.
//!
//! The annotation text is not interpreted here; it is carried verbatim into
//! the generated descriptor and parsed by the binder at runtime.

use syn::{Field, LitStr};

/// Parsed `#[env(...)]` attribute of a struct field.
#[derive(Debug, Default)]
pub struct FieldAttrs {
    /// Raw `name[,default:<literal>]` annotation, if the field has one.
    pub annotation: Option<String>,
}

impl FieldAttrs {
    /// Extract the `#[env("...")]` attribute from a struct field.
    ///
    /// Attributes other than `env` are left for other macros.
    pub fn from_field(field: &Field) -> syn::Result<Self> {
        let mut attrs = Self::default();

        for attr in &field.attrs {
            if !attr.path().is_ident("env") {
                continue;
            }

            if attrs.annotation.is_some() {
                return Err(syn::Error::new_spanned(attr, "duplicate #[env] attribute"));
            }

            let lit: LitStr = attr.parse_args().map_err(|_| {
                syn::Error::new_spanned(attr, "expected #[env(\"NAME[,default:VALUE]\")]")
            })?;
            attrs.annotation = Some(lit.value());
        }

        Ok(attrs)
    }
}
