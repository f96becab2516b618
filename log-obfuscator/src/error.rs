//! Error type shared by every obfuscator.

use thiserror::Error;

/// Failures surfaced by obfuscators and their builders.
///
/// Obfuscation itself is permissive: text that does not look like a
/// key/value line is simply left alone. The only runtime failure is a missing
/// input; everything else is rejected while the obfuscator is being built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ObfuscationError {
    /// No input was supplied to `obfuscate`.
    #[error("invalid input: nothing to obfuscate")]
    InvalidInput,
    /// A field pattern could not be turned into a matcher.
    #[error("invalid pattern for field `{key}`: {reason}")]
    InvalidPattern {
        /// The offending field key.
        key: String,
        /// Why the pattern was rejected.
        reason: String,
    },
    /// A replacement text that would not survive a second pass.
    #[error("invalid mask `{mask}`: {reason}")]
    InvalidMask {
        /// The rejected replacement text.
        mask: String,
        /// Why the mask was rejected.
        reason: String,
    },
    /// A login provider id that is not recognised.
    #[error("unknown login provider `{0}`")]
    UnknownProvider(String),
}

impl ObfuscationError {
    pub(crate) fn invalid_pattern(key: &str, reason: impl ToString) -> Self {
        Self::InvalidPattern {
            key: key.to_string(),
            reason: reason.to_string(),
        }
    }
}
