//! Derive macro implementation for envbind

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields, Visibility};

mod attrs;
mod kind;

use attrs::FieldAttrs;
use kind::Kind;

/// `EnvBind` derive macro
///
/// Implements `envbind::Bindable` for a struct with named fields and adds the
/// `from_env()` and `from_env_file(path)` constructors. The struct must also
/// implement `Default`, which provides the value of every field that is not
/// bound.
///
/// # Field attribute
///
/// - `#[env("NAME")]`: bind the field to environment variable `NAME`
/// - `#[env("NAME,default:VALUE")]`: fall back to `VALUE` when `NAME` is unset or empty
///
/// Only `pub` fields are bound.
///
/// # Example
///
/// See the `envbind` crate documentation for usage examples.
#[proc_macro_derive(EnvBind, attributes(env))]
pub fn derive_envbind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let struct_name = &input.ident;
    let type_name = struct_name.to_string();
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => &fields.named,
            _ => return Err(not_a_record(input)),
        },
        _ => return Err(not_a_record(input)),
    };

    let mut descriptors = Vec::with_capacity(fields.len());
    let mut assign_arms = Vec::new();
    let mut errors: Option<syn::Error> = None;

    for (index, field) in fields.iter().enumerate() {
        let attrs = match FieldAttrs::from_field(field) {
            Ok(attrs) => attrs,
            Err(e) => {
                match errors.as_mut() {
                    Some(errors) => errors.combine(e),
                    None => errors = Some(e),
                }
                continue;
            }
        };

        let Some(field_ident) = field.ident.as_ref() else {
            continue;
        };
        let field_name = field_ident.to_string();
        let field_type = &field.ty;
        let public = matches!(field.vis, Visibility::Public(_));
        let kind = Kind::of(field_type);
        let field_kind = kind.to_field_kind();
        let annotation = match &attrs.annotation {
            Some(raw) => quote! { ::std::option::Option::Some(#raw) },
            None => quote! { ::std::option::Option::None },
        };

        descriptors.push(quote! {
            ::envbind::FieldDescriptor {
                name: #field_name,
                public: #public,
                kind: #field_kind,
                annotation: #annotation,
            }
        });

        if kind.is_supported() {
            assign_arms.push(quote! {
                #index => {
                    self.#field_ident = <#field_type as ::envbind::FromValue>::from_value(value)
                        .ok_or_else(|| ::envbind::BindError::mismatch(
                            #field_name,
                            <#field_type as ::envbind::FromValue>::KIND,
                        ))?;
                }
            });
        }
    }

    if let Some(errors) = errors {
        return Err(errors);
    }

    Ok(quote! {
        impl #impl_generics ::envbind::Bindable for #struct_name #ty_generics #where_clause {
            fn descriptor() -> ::envbind::TypeDescriptor {
                const FIELDS: &[::envbind::FieldDescriptor] = &[#(#descriptors),*];
                ::envbind::TypeDescriptor::record(#type_name, FIELDS)
            }

            #[allow(unused_variables)]
            fn assign(
                &mut self,
                index: usize,
                value: ::envbind::Value,
            ) -> ::std::result::Result<(), ::envbind::BindError> {
                match index {
                    #(#assign_arms)*
                    _ => {}
                }
                ::std::result::Result::Ok(())
            }
        }

        impl #impl_generics #struct_name #ty_generics #where_clause {
            /// Load configuration from environment variables
            ///
            /// # Errors
            ///
            /// - Environment variable values cannot be decoded into field types
            /// - A bound field has an unsupported type
            pub fn from_env() -> ::envbind::anyhow::Result<Self>
            where
                Self: ::std::default::Default,
            {
                ::std::result::Result::Ok(::envbind::load::<Self>()?)
            }

            /// Seed environment variables from a `key=value` file, then load configuration
            ///
            /// # Errors
            ///
            /// - The file cannot be read
            /// - A pair from the file cannot be assigned into the environment
            /// - Any error from `from_env()`
            pub fn from_env_file(
                path: impl ::std::convert::AsRef<::std::path::Path>,
            ) -> ::envbind::anyhow::Result<Self>
            where
                Self: ::std::default::Default,
            {
                ::std::result::Result::Ok(::envbind::load_file::<Self>(path)?)
            }
        }
    })
}

fn not_a_record(input: &DeriveInput) -> syn::Error {
    syn::Error::new_spanned(
        &input.ident,
        "EnvBind only supports structs with named fields",
    )
}
