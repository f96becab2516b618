//! Adapters for emitting obfuscated lines through `slog`.
//!
//! Raw request or response bodies should never reach a drain. Wrapping a line
//! in [`ObfuscatedText`] makes the `slog::Value` implementation the only way
//! the line is serialized, and it always serializes the obfuscated form.
//!
//! This module does not configure `slog` or decide which fields are sensitive.

use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::obfuscator::Obfuscate;

/// A `slog::Value` that emits `text` after running it through `obfuscator`.
///
/// Obfuscation happens lazily, when a drain actually serializes the record.
pub struct ObfuscatedText<'a, O: ?Sized> {
    obfuscator: &'a O,
    text: &'a str,
}

impl<'a, O> ObfuscatedText<'a, O>
where
    O: Obfuscate + ?Sized,
{
    pub fn new(obfuscator: &'a O, text: &'a str) -> Self {
        Self { obfuscator, text }
    }
}

impl<O> SlogValue for ObfuscatedText<'_, O>
where
    O: Obfuscate + ?Sized,
{
    fn serialize(
        &self,
        _record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        serializer.emit_str(key, &self.obfuscator.obfuscate_str(self.text))
    }
}

/// Wraps log lines so they are obfuscated when logged.
///
/// ## Example
/// ```ignore
/// use log_obfuscator::{slog::ObfuscateValue, CredentialFields, EmailPassword};
///
/// let obfuscator = EmailPassword::obfuscator();
/// info!(logger, "login request"; "body" => obfuscator.obfuscated(&body));
/// ```
pub trait ObfuscateValue: Obfuscate {
    /// Returns a `slog::Value` that serializes the obfuscated form of `text`.
    fn obfuscated<'a>(&'a self, text: &'a str) -> ObfuscatedText<'a, Self> {
        ObfuscatedText::new(self, text)
    }
}

impl<T> ObfuscateValue for T where T: Obfuscate + ?Sized {}
