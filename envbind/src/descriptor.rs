//! Record type descriptors
//!
//! A descriptor is the static, structural view of a type that the binder
//! walks: for records, the ordered list of fields with their visibility,
//! declared kind and raw binding annotation.

use std::fmt;

use crate::decode::Value;
use crate::error::BindError;

/// Classification of a field's declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Bool,
    I8,
    I16,
    I32,
    I64,
    Isize,
    U8,
    U16,
    U32,
    U64,
    Usize,
    F32,
    F64,
    String,
    /// `Vec<u8>`, decoded from base64
    Bytes,
    /// Any other type; carries the type as written in source
    Unsupported(&'static str),
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "bool",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Isize => "isize",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::String => "String",
            Self::Bytes => "Vec<u8>",
            Self::Unsupported(ty) => *ty,
        };
        f.write_str(name)
    }
}

/// One field of a record type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Rust field name
    pub name: &'static str,
    /// Whether the field is declared `pub`
    pub public: bool,
    /// Declared type classification
    pub kind: FieldKind,
    /// Raw `#[env("...")]` annotation, if any
    pub annotation: Option<&'static str>,
}

/// Structural shape of a described type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Struct with named fields, in declaration order
    Record(&'static [FieldDescriptor]),
    /// Anything that is not a record
    Scalar(FieldKind),
}

/// Description of a type the binder may be asked to populate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub type_name: &'static str,
    pub shape: Shape,
}

impl TypeDescriptor {
    pub const fn record(type_name: &'static str, fields: &'static [FieldDescriptor]) -> Self {
        Self {
            type_name,
            shape: Shape::Record(fields),
        }
    }

    pub const fn scalar(type_name: &'static str, kind: FieldKind) -> Self {
        Self {
            type_name,
            shape: Shape::Scalar(kind),
        }
    }

    /// Fields of a record, or `None` for non-record shapes
    pub fn fields(&self) -> Option<&'static [FieldDescriptor]> {
        match self.shape {
            Shape::Record(fields) => Some(fields),
            Shape::Scalar(_) => None,
        }
    }
}

/// Types the binder can describe and populate.
///
/// Implemented for structs by `#[derive(EnvBind)]`. The built-in scalar types
/// implement it too, describing themselves as non-records so that asking the
/// binder for one fails with [`BindError::NotARecordType`].
pub trait Bindable {
    fn descriptor() -> TypeDescriptor;

    /// Write a decoded value into the field at `index` of the descriptor.
    fn assign(&mut self, index: usize, value: Value) -> Result<(), BindError>;
}

macro_rules! scalar_bindable {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl Bindable for $ty {
                fn descriptor() -> TypeDescriptor {
                    TypeDescriptor::scalar(std::any::type_name::<$ty>(), FieldKind::$kind)
                }

                fn assign(&mut self, _index: usize, _value: Value) -> Result<(), BindError> {
                    Err(BindError::NotARecordType {
                        type_name: std::any::type_name::<$ty>(),
                    })
                }
            }
        )*
    };
}

scalar_bindable! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
    f32 => F32,
    f64 => F64,
    String => String,
    Vec<u8> => Bytes,
}
