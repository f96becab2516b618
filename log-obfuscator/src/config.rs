//! Declarative obfuscator configuration.
//!
//! Field sets can be loaded at runtime instead of being compiled in. A
//! configuration only describes patterns; building it validates every key and
//! produces an ordinary [`RegexPatternObfuscator`].
//!
//! ```json
//! {
//!   "mask": "***",
//!   "fields": [
//!     { "key": "password" },
//!     { "key": "functionArgs", "matcher": "structured" }
//!   ]
//! }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::ObfuscationError;
use crate::obfuscator::{Obfuscate, RegexPatternObfuscator};
use crate::pattern::{FieldPattern, ValueMatcher};

/// Value layout as written in configuration files.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatcherConfig {
    /// `"key":"value"`
    #[default]
    Quoted,
    /// `"key":[...]` or `"key":{...}`
    Structured,
}

impl From<MatcherConfig> for ValueMatcher {
    fn from(config: MatcherConfig) -> Self {
        match config {
            MatcherConfig::Quoted => ValueMatcher::Quoted,
            MatcherConfig::Structured => ValueMatcher::Structured,
        }
    }
}

/// One sensitive field.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    pub key: String,
    #[serde(default)]
    pub matcher: MatcherConfig,
}

/// A field set plus an optional replacement text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObfuscatorConfig {
    /// Replacement text. Defaults to [`crate::MASK_TOKEN`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
    #[serde(default)]
    pub fields: Vec<FieldConfig>,
}

impl ObfuscatorConfig {
    /// Parses a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Validates every field and builds the obfuscator.
    ///
    /// The first invalid key aborts the build with
    /// [`ObfuscationError::InvalidPattern`], an unusable mask with
    /// [`ObfuscationError::InvalidMask`]. Repeated keys keep their first entry.
    pub fn build(&self) -> Result<RegexPatternObfuscator, ObfuscationError> {
        let patterns = self
            .fields
            .iter()
            .map(|field| FieldPattern::new(field.key.clone(), field.matcher.into()))
            .collect::<Result<Vec<_>, _>>()?;

        let obfuscator = RegexPatternObfuscator::new(patterns);
        match &self.mask {
            Some(mask) => obfuscator.with_mask(mask.clone()),
            None => Ok(obfuscator),
        }
    }
}

fn default_feature() -> String {
    crate::http::PROVIDERS_FEATURE.to_string()
}

/// Routing table for [`crate::HttpLogObfuscator`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HttpLogConfig {
    #[serde(default = "default_feature")]
    pub feature: String,
    #[serde(default)]
    pub providers: BTreeMap<String, ObfuscatorConfig>,
}

impl HttpLogConfig {
    /// Parses a JSON configuration document.
    pub fn from_json(source: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Builds one obfuscator per configured route.
    pub fn build(&self) -> Result<crate::HttpLogObfuscator, ObfuscationError> {
        let routes = self
            .providers
            .iter()
            .map(|(route, config)| {
                config
                    .build()
                    .map(|obfuscator| (route.clone(), Arc::new(obfuscator) as Arc<dyn Obfuscate>))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(crate::HttpLogObfuscator::new(self.feature.clone(), routes))
    }
}
