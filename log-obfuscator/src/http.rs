//! Obfuscation of HTTP request logs, routed by auth provider.
//!
//! Login requests carry the provider in the URL path, e.g.
//! `.../auth/providers/local-userpass/login`. The segment that follows the
//! configured feature segment (`providers` by default) selects which
//! obfuscator sees the request body. Requests for other endpoints, or for
//! providers with no registered obfuscator, are passed through unchanged.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::ObfuscationError;
use crate::obfuscator::{
    ApiKey, CredentialFields, CustomFunction, EmailPassword, Obfuscate, RegexPatternObfuscator,
    Token,
};

/// URL segment that precedes the provider id in login requests.
pub const PROVIDERS_FEATURE: &str = "providers";

/// Authentication providers a login request can target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LoginProvider {
    /// Anonymous login. Carries no credentials.
    AnonUser,
    /// Server or user API key.
    ApiKey,
    /// Email and password.
    EmailPassword,
    /// Custom function with arbitrary arguments.
    CustomFunction,
    /// Custom JWT.
    Jwt,
    /// Sign in with Apple.
    Apple,
    /// Facebook OAuth.
    Facebook,
    /// Google OAuth.
    Google,
}

impl LoginProvider {
    /// Every provider, in declaration order.
    pub const ALL: [LoginProvider; 8] = [
        LoginProvider::AnonUser,
        LoginProvider::ApiKey,
        LoginProvider::EmailPassword,
        LoginProvider::CustomFunction,
        LoginProvider::Jwt,
        LoginProvider::Apple,
        LoginProvider::Facebook,
        LoginProvider::Google,
    ];

    /// The id used in URL paths.
    pub fn id(self) -> &'static str {
        match self {
            LoginProvider::AnonUser => "anon-user",
            LoginProvider::ApiKey => "api-key",
            LoginProvider::EmailPassword => "local-userpass",
            LoginProvider::CustomFunction => "custom-function",
            LoginProvider::Jwt => "custom-token",
            LoginProvider::Apple => "oauth2-apple",
            LoginProvider::Facebook => "oauth2-facebook",
            LoginProvider::Google => "oauth2-google",
        }
    }

    /// The obfuscator for this provider's credentials, if it has any.
    pub fn obfuscator(self) -> Option<RegexPatternObfuscator> {
        match self {
            LoginProvider::AnonUser => None,
            LoginProvider::ApiKey => Some(ApiKey::obfuscator()),
            LoginProvider::EmailPassword => Some(EmailPassword::obfuscator()),
            LoginProvider::CustomFunction => Some(CustomFunction::obfuscator()),
            LoginProvider::Jwt
            | LoginProvider::Apple
            | LoginProvider::Facebook
            | LoginProvider::Google => Some(Token::obfuscator()),
        }
    }
}

impl fmt::Display for LoginProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for LoginProvider {
    type Err = ObfuscationError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        LoginProvider::ALL
            .into_iter()
            .find(|provider| provider.id() == id)
            .ok_or_else(|| ObfuscationError::UnknownProvider(id.to_string()))
    }
}

/// Picks an obfuscator from the request URL and applies it to the body.
#[derive(Clone)]
pub struct HttpLogObfuscator {
    feature: String,
    obfuscators: BTreeMap<String, Arc<dyn Obfuscate>>,
}

impl HttpLogObfuscator {
    /// Creates an obfuscator keyed on the segment after `feature`.
    pub fn new<F, I, K>(feature: F, obfuscators: I) -> Self
    where
        F: Into<String>,
        I: IntoIterator<Item = (K, Arc<dyn Obfuscate>)>,
        K: Into<String>,
    {
        Self {
            feature: feature.into(),
            obfuscators: obfuscators
                .into_iter()
                .map(|(key, obfuscator)| (key.into(), obfuscator))
                .collect(),
        }
    }

    /// Obfuscator for login requests: every credential-bearing provider under
    /// [`PROVIDERS_FEATURE`].
    pub fn login_info() -> Self {
        let obfuscators = LoginProvider::ALL.into_iter().filter_map(|provider| {
            provider
                .obfuscator()
                .map(|obfuscator| (provider.id(), Arc::new(obfuscator) as Arc<dyn Obfuscate>))
        });
        Self::new(PROVIDERS_FEATURE, obfuscators)
    }

    /// The URL segment that precedes the routing key.
    pub fn feature(&self) -> &str {
        &self.feature
    }

    /// Routing keys with a registered obfuscator, in sorted order.
    pub fn routes(&self) -> impl Iterator<Item = &str> + '_ {
        self.obfuscators.keys().map(String::as_str)
    }

    /// Obfuscates `input` using the obfuscator selected by `url_segments`.
    ///
    /// The routing key is the segment right after the last occurrence of the
    /// feature segment; an app id equal to the feature name earlier in the path
    /// does not shadow it. If there is no such segment, or nothing is
    /// registered for it, the input is returned unchanged. A missing input fails with
    /// [`ObfuscationError::InvalidInput`] regardless of routing.
    pub fn obfuscate<'a, I>(
        &self,
        url_segments: &[&str],
        input: I,
    ) -> Result<String, ObfuscationError>
    where
        I: Into<Option<&'a str>>,
    {
        let input = input.into().ok_or(ObfuscationError::InvalidInput)?;
        let selected = url_segments
            .iter()
            .rposition(|segment| *segment == self.feature)
            .and_then(|index| url_segments.get(index + 1))
            .and_then(|key| self.obfuscators.get(*key));

        Ok(match selected {
            Some(obfuscator) => obfuscator.obfuscate_str(input),
            None => input.to_string(),
        })
    }

    /// Like [`HttpLogObfuscator::obfuscate`], splitting `url` into path
    /// segments first. Query string and fragment are ignored.
    pub fn obfuscate_url<'a, I>(&self, url: &str, input: I) -> Result<String, ObfuscationError>
    where
        I: Into<Option<&'a str>>,
    {
        let path = url.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').collect();
        self.obfuscate(&segments, input)
    }
}

impl fmt::Debug for HttpLogObfuscator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpLogObfuscator")
            .field("feature", &self.feature)
            .field("routes", &self.obfuscators.keys().collect::<Vec<_>>())
            .finish()
    }
}
