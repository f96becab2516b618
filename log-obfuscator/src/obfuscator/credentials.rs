//! Preconfigured obfuscators for each kind of login credential.
//!
//! Every credential kind is a zero-sized marker. The marker only names the
//! fields that carry secrets; the obfuscator built from them is created once
//! and shared, so calling `obfuscator()` repeatedly is cheap.

use std::sync::LazyLock;

use super::RegexPatternObfuscator;
use crate::pattern::{FieldPattern, ValueMatcher};

/// Associates a credential kind with the fields that must never be logged.
pub trait CredentialFields {
    /// Sensitive keys and how their values are laid out.
    const FIELDS: &'static [(&'static str, ValueMatcher)];

    /// Returns an obfuscator bound to this credential kind's fields.
    fn obfuscator() -> RegexPatternObfuscator;

    /// Builds the patterns for [`Self::FIELDS`].
    ///
    /// # Panics
    /// If a key in [`Self::FIELDS`] is empty or contains a double quote.
    fn patterns() -> Vec<FieldPattern> {
        Self::FIELDS
            .iter()
            .map(|&(key, matcher)| {
                FieldPattern::new(key, matcher).expect("built-in field keys are valid")
            })
            .collect()
    }
}

/// Credential marker for email/password logins.
#[derive(Clone, Copy, Debug)]
pub struct EmailPassword;
impl CredentialFields for EmailPassword {
    const FIELDS: &'static [(&'static str, ValueMatcher)] = &[
        ("username", ValueMatcher::Quoted),
        ("password", ValueMatcher::Quoted),
    ];

    fn obfuscator() -> RegexPatternObfuscator {
        static SHARED: LazyLock<RegexPatternObfuscator> =
            LazyLock::new(|| RegexPatternObfuscator::new(EmailPassword::patterns()));
        SHARED.clone()
    }
}

/// Credential marker for API key logins.
#[derive(Clone, Copy, Debug)]
pub struct ApiKey;
impl CredentialFields for ApiKey {
    const FIELDS: &'static [(&'static str, ValueMatcher)] = &[("key", ValueMatcher::Quoted)];

    fn obfuscator() -> RegexPatternObfuscator {
        static SHARED: LazyLock<RegexPatternObfuscator> =
            LazyLock::new(|| RegexPatternObfuscator::new(ApiKey::patterns()));
        SHARED.clone()
    }
}

/// Credential marker for OAuth and custom JWT logins.
///
/// Covers access tokens (Facebook), auth codes and ID tokens (Google, Apple)
/// and raw JWTs.
#[derive(Clone, Copy, Debug)]
pub struct Token;
impl CredentialFields for Token {
    const FIELDS: &'static [(&'static str, ValueMatcher)] = &[
        ("accessToken", ValueMatcher::Quoted),
        ("authCode", ValueMatcher::Quoted),
        ("id_token", ValueMatcher::Quoted),
        ("token", ValueMatcher::Quoted),
    ];

    fn obfuscator() -> RegexPatternObfuscator {
        static SHARED: LazyLock<RegexPatternObfuscator> =
            LazyLock::new(|| RegexPatternObfuscator::new(Token::patterns()));
        SHARED.clone()
    }
}

/// Credential marker for custom function logins. The whole argument payload is masked.
#[derive(Clone, Copy, Debug)]
pub struct CustomFunction;
impl CredentialFields for CustomFunction {
    const FIELDS: &'static [(&'static str, ValueMatcher)] =
        &[("functionArgs", ValueMatcher::Structured)];

    fn obfuscator() -> RegexPatternObfuscator {
        static SHARED: LazyLock<RegexPatternObfuscator> =
            LazyLock::new(|| RegexPatternObfuscator::new(CustomFunction::patterns()));
        SHARED.clone()
    }
}
