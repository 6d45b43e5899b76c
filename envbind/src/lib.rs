//! Bind environment variables into typed configuration structs
//!
//! `envbind` fills a struct from environment variables. Each field opts in with
//! an `#[env("...")]` annotation naming the variable and, optionally, a
//! default. The environment can be seeded from a simple `key=value` file
//! before binding.
//!
//! # Features
//!
//! - **Declarative**: Automatic implementation with `#[derive(EnvBind)]`
//! - **Defaults**: Literal fallbacks written in the annotation itself
//! - **Typed decoding**: Booleans, sized integers, floats, strings and base64 bytes
//! - **Seed files**: Load `key=value` files into the environment before binding
//! - **All-or-nothing**: Any decode failure aborts the bind; no partial records
//!
//! # Annotation syntax
//!
//! ```text
//! name[,default:<literal>]
//! ```
//!
//! Only the first `,` separates the name from the default, so the literal may
//! contain `,` and `=`. A second segment that does not start with `default:`
//! is ignored and the field has no default.
//!
//! A field is left at its `Default` value when it is not `pub`, carries no
//! annotation, or when neither the variable nor the default yields a
//! non-empty string. There is no way to mark a field as required.
//!
//! # Value decoding
//!
//! | Field type | Accepted text |
//! |---|---|
//! | `bool` | `true`/`t`/`1`, `false`/`f`/`0` (any case) |
//! | `i8`..`i64`, `isize` | base-10, must fit the width |
//! | `u8`..`u64`, `usize` | base-10, unsigned (no `+` or `-`), must fit the width |
//! | `f32`, `f64` | decimal or scientific notation |
//! | `String` | verbatim |
//! | `Vec<u8>` | standard base64 with padding |
//!
//! Fields of any other type fail with [`BindError::UnsupportedType`] as soon
//! as a value resolves for them.
//!
//! # Example
//!
//! ```rust
//! use envbind::EnvBind;
//!
//! #[derive(Debug, Default, EnvBind)]
//! struct Config {
//!     #[env("APP_PORT,default:8080")]
//!     pub port: u16,
//!
//!     #[env("APP_GREETING,default:hello, world!")]
//!     pub greeting: String,
//!
//!     #[env("APP_DEBUG,default:false")]
//!     pub debug: bool,
//! }
//!
//! # fn main() -> anyhow::Result<()> {
//! #     std::env::set_var("APP_PORT", "3000");
//! let config = Config::from_env()?;
//! assert_eq!(config.port, 3000);
//! assert_eq!(config.greeting, "hello, world!");
//! assert!(!config.debug);
//! #     Ok(())
//! # }
//! ```
//!
//! # Seed files
//!
//! ```text
//! // comment lines start with two slashes
//! APP_PORT=3000
//! APP_DEBUG=true
//! ```
//!
//! Lines with exactly one `=` are assigned into the environment; every other
//! line is ignored. Nothing is trimmed.

mod annotation;
mod binder;
mod decode;
mod descriptor;
mod env;
mod error;
mod seed;

use std::path::Path;

pub use annotation::Binding;
pub use binder::Binder;
pub use decode::{decode, FromValue, Value};
pub use descriptor::{Bindable, FieldDescriptor, FieldKind, Shape, TypeDescriptor};
pub use env::{Environment, MapEnv, ProcessEnv};
pub use envbind_derive::EnvBind;
pub use error::{BindError, DecodeError};
pub use seed::{apply_seed, parse_seed, seed_from_file};

// Re-export for macro-generated code
#[doc(hidden)]
pub use anyhow;

/// Bind `T` from the process environment.
pub fn load<T: Bindable + Default>() -> Result<T, BindError> {
    Binder::new(ProcessEnv).bind()
}

/// Seed the process environment from the file at `path`, then bind `T`.
///
/// # Errors
///
/// - The file cannot be read
/// - A pair from the file cannot be assigned into the environment
/// - Any error from [`load`]
pub fn load_file<T: Bindable + Default>(path: impl AsRef<Path>) -> Result<T, BindError> {
    Binder::new(ProcessEnv).load_file(path)
}
