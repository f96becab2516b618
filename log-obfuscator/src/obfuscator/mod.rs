//! Obfuscators and their shared entrypoint.
//!
//! - **`regex_pattern`**: the pattern-driven obfuscator (`RegexPatternObfuscator`)
//! - **`credentials`**: preconfigured obfuscators per login credential kind
//!
//! Field patterns live in `crate::pattern`; request routing lives in `crate::http`.

#[cfg(feature = "credentials")]
mod credentials;
mod regex_pattern;

#[cfg(feature = "credentials")]
pub use credentials::{ApiKey, CredentialFields, CustomFunction, EmailPassword, Token};
pub use regex_pattern::RegexPatternObfuscator;

use crate::error::ObfuscationError;

/// Rewrites a log line so that sensitive values no longer appear in it.
///
/// Implementations must be pure: the same input always yields the same output
/// and nothing is shared or mutated between calls.
pub trait Obfuscate: Send + Sync {
    /// Obfuscates a line that is known to be present.
    ///
    /// This method is total. Lines without sensitive fields come back unchanged.
    fn obfuscate_str(&self, input: &str) -> String;

    /// Obfuscates an optional line.
    ///
    /// Accepts either `&str` or `Option<&str>`. A missing line is a caller
    /// error and yields [`ObfuscationError::InvalidInput`]; it is never treated
    /// as an empty string.
    ///
    /// ```rust
    /// use log_obfuscator::{EmailPassword, CredentialFields, Obfuscate, ObfuscationError};
    ///
    /// let obfuscator = EmailPassword::obfuscator();
    /// assert_eq!(
    ///     obfuscator.obfuscate(r#"{"password":"hunter2"}"#).unwrap(),
    ///     r#"{"password":"***"}"#
    /// );
    /// assert_eq!(obfuscator.obfuscate(None), Err(ObfuscationError::InvalidInput));
    /// ```
    fn obfuscate<'a, I>(&self, input: I) -> Result<String, ObfuscationError>
    where
        I: Into<Option<&'a str>>,
        Self: Sized,
    {
        input
            .into()
            .map(|line| self.obfuscate_str(line))
            .ok_or(ObfuscationError::InvalidInput)
    }
}

impl<T> Obfuscate for std::sync::Arc<T>
where
    T: Obfuscate + ?Sized,
{
    fn obfuscate_str(&self, input: &str) -> String {
        (**self).obfuscate_str(input)
    }
}
