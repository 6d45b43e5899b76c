//! Field type classification.
//!
//! Classification is syntactic: the last path segment of the field's type is
//! matched against the decodable primitives. Anything else is reported as
//! unsupported at bind time.

use proc_macro2::TokenStream;
use quote::{format_ident, quote, ToTokens};
use syn::{GenericArgument, PathArguments, Type};

/// Kind of a field as seen by the derive.
#[derive(Debug, PartialEq, Eq)]
pub enum Kind {
    /// Name of the matching `FieldKind` variant
    Supported(&'static str),
    /// Source text of the type
    Unsupported(String),
}

impl Kind {
    pub fn of(ty: &Type) -> Self {
        match supported_variant(ty) {
            Some(variant) => Self::Supported(variant),
            None => Self::Unsupported(type_text(ty)),
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Self::Supported(_))
    }

    /// `::envbind::FieldKind` expression for the descriptor table
    pub fn to_field_kind(&self) -> TokenStream {
        match self {
            Self::Supported(variant) => {
                let variant = format_ident!("{}", variant);
                quote! { ::envbind::FieldKind::#variant }
            }
            Self::Unsupported(text) => quote! { ::envbind::FieldKind::Unsupported(#text) },
        }
    }
}

fn supported_variant(ty: &Type) -> Option<&'static str> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let seg = type_path.path.segments.last()?;

    if let PathArguments::AngleBracketed(args) = &seg.arguments {
        // Vec<u8>
        if seg.ident != "Vec" || args.args.len() != 1 {
            return None;
        }
        return match args.args.first() {
            Some(GenericArgument::Type(inner)) if supported_variant(inner) == Some("U8") => {
                Some("Bytes")
            }
            _ => None,
        };
    }
    if !seg.arguments.is_none() {
        return None;
    }

    let variant = match seg.ident.to_string().as_str() {
        "bool" => "Bool",
        "i8" => "I8",
        "i16" => "I16",
        "i32" => "I32",
        "i64" => "I64",
        "isize" => "Isize",
        "u8" => "U8",
        "u16" => "U16",
        "u32" => "U32",
        "u64" => "U64",
        "usize" => "Usize",
        "f32" => "F32",
        "f64" => "F64",
        "String" => "String",
        _ => return None,
    };
    Some(variant)
}

fn type_text(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_primitives() {
        assert_eq!(Kind::of(&parse_quote!(bool)), Kind::Supported("Bool"));
        assert_eq!(Kind::of(&parse_quote!(i8)), Kind::Supported("I8"));
        assert_eq!(Kind::of(&parse_quote!(u64)), Kind::Supported("U64"));
        assert_eq!(Kind::of(&parse_quote!(f32)), Kind::Supported("F32"));
    }

    #[test]
    fn test_qualified_string() {
        assert_eq!(
            Kind::of(&parse_quote!(std::string::String)),
            Kind::Supported("String")
        );
    }

    #[test]
    fn test_bytes() {
        assert_eq!(Kind::of(&parse_quote!(Vec<u8>)), Kind::Supported("Bytes"));
        assert_eq!(
            Kind::of(&parse_quote!(std::vec::Vec<u8>)),
            Kind::Supported("Bytes")
        );
    }

    #[test]
    fn test_unsupported() {
        assert_eq!(
            Kind::of(&parse_quote!(Vec<String>)),
            Kind::Unsupported("Vec<String>".to_string())
        );
        assert_eq!(
            Kind::of(&parse_quote!(Option<u16>)),
            Kind::Unsupported("Option<u16>".to_string())
        );
        assert!(!Kind::of(&parse_quote!(&'static str)).is_supported());
        assert!(!Kind::of(&parse_quote!(char)).is_supported());
    }
}
