//! Obfuscation of login credentials in log lines.
//!
//! Request and response bodies are often logged verbatim while debugging
//! network traffic. This crate rewrites such lines so that credential values
//! never reach a log sink:
//!
//! ```rust
//! use log_obfuscator::{CredentialFields, EmailPassword, Obfuscate};
//!
//! let line = r#"{"username":"my_username","password":"123456","something":"random"}"#;
//! let masked = EmailPassword::obfuscator().obfuscate(line).unwrap();
//! assert_eq!(masked, r#"{"username":"***","password":"***","something":"random"}"#);
//! ```
//!
//! Lines are treated as text, not parsed. A `FieldPattern` finds the exact
//! quoted key and rewrites only its value; every other byte is preserved.
//! Lines that do not contain a configured key are returned unchanged.
//!
//! What this crate provides:
//! - `RegexPatternObfuscator`: masks a fixed set of fields
//! - credential markers (`EmailPassword`, `ApiKey`, `Token`,
//!   `CustomFunction`) with ready-made obfuscators, feature `credentials`
//! - `HttpLogObfuscator`: picks the obfuscator from a login request URL,
//!   feature `http`
//! - integrations behind feature flags (`config`, `slog`)
//!
//! What it does not do:
//! - perform I/O or logging
//! - validate that a line is well-formed JSON

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::default_trait_access,
    clippy::doc_markdown,
    clippy::if_not_else,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::needless_pass_by_value,
    clippy::needless_ifs,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::enum_glob_use,
    clippy::struct_excessive_bools,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::result_large_err,
    clippy::future_not_send,
    clippy::option_if_let_else,
    clippy::from_over_into,
    clippy::manual_inspect
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
#[cfg(feature = "config")]
pub mod config;
mod error;
#[cfg(feature = "http")]
mod http;
mod obfuscator;
mod pattern;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use error::ObfuscationError;
#[cfg(feature = "http")]
pub use http::{HttpLogObfuscator, LoginProvider, PROVIDERS_FEATURE};
#[cfg(feature = "credentials")]
pub use obfuscator::{ApiKey, CredentialFields, CustomFunction, EmailPassword, Token};
pub use obfuscator::{Obfuscate, RegexPatternObfuscator};
pub use pattern::{FieldPattern, ValueMatcher, MASK_TOKEN};
