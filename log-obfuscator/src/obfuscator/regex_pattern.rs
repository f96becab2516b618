//! Pattern-driven obfuscation over a fixed field set.

use std::borrow::Cow;

use super::Obfuscate;
use crate::error::ObfuscationError;
use crate::pattern::{FieldPattern, MASK_TOKEN};

/// Masks the values of a fixed set of fields.
///
/// Patterns are applied in the order they were given. Because every pattern
/// anchors on a distinct quoted key, the order never changes the output; it
/// is kept only so runs are reproducible.
///
/// The obfuscator holds no per-call state and is cheap to clone, so one
/// instance can be shared across threads.
#[derive(Clone, Debug)]
pub struct RegexPatternObfuscator {
    patterns: Vec<FieldPattern>,
    mask: Cow<'static, str>,
}

impl RegexPatternObfuscator {
    /// Creates an obfuscator that writes [`MASK_TOKEN`] over matched values.
    ///
    /// Patterns that repeat an earlier key are dropped.
    pub fn new(patterns: impl IntoIterator<Item = FieldPattern>) -> Self {
        let mut distinct: Vec<FieldPattern> = Vec::new();
        for pattern in patterns {
            if !distinct.iter().any(|seen| seen.key() == pattern.key()) {
                distinct.push(pattern);
            }
        }
        Self {
            patterns: distinct,
            mask: Cow::Borrowed(MASK_TOKEN),
        }
    }

    /// Builds quoted-value patterns for each key.
    pub fn for_keys<I, K>(keys: I) -> Result<Self, ObfuscationError>
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        let patterns = keys
            .into_iter()
            .map(FieldPattern::quoted)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(patterns))
    }

    /// Uses a different replacement text.
    ///
    /// The replacement is written verbatim; `$` is not special. Masks that
    /// could end a string value or unbalance a structured one are rejected with
    /// [`ObfuscationError::InvalidMask`]: `"`, `\`, brackets, braces and
    /// control characters.
    pub fn with_mask<M>(mut self, mask: M) -> Result<Self, ObfuscationError>
    where
        M: Into<Cow<'static, str>>,
    {
        let mask = mask.into();
        if let Some(found) = mask
            .chars()
            .find(|ch| matches!(ch, '"' | '\\' | '[' | ']' | '{' | '}') || ch.is_control())
        {
            return Err(ObfuscationError::InvalidMask {
                mask: mask.into_owned(),
                reason: format!("contains {found:?}"),
            });
        }
        self.mask = mask;
        Ok(self)
    }

    /// The configured patterns, in application order.
    pub fn patterns(&self) -> &[FieldPattern] {
        &self.patterns
    }

    /// The replacement text.
    pub fn mask(&self) -> &str {
        &self.mask
    }
}

impl Obfuscate for RegexPatternObfuscator {
    fn obfuscate_str(&self, input: &str) -> String {
        let mut line = Cow::Borrowed(input);
        for pattern in &self.patterns {
            let masked = match pattern.mask_in(&line, &self.mask) {
                Cow::Owned(masked) => Some(masked),
                Cow::Borrowed(_) => None,
            };
            if let Some(masked) = masked {
                line = Cow::Owned(masked);
            }
        }
        line.into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::RegexPatternObfuscator;
    use crate::error::ObfuscationError;
    use crate::obfuscator::Obfuscate;
    use crate::pattern::FieldPattern;

    const ORIGINAL: &str = r#"{"blahblahblah":"blehblehbleh","username":"my_username","password":"123456","something":"random"}"#;
    const OBFUSCATED: &str = r#"{"blahblahblah":"blehblehbleh","username":"***","password":"***","something":"random"}"#;

    fn username_password() -> RegexPatternObfuscator {
        RegexPatternObfuscator::for_keys(["username", "password"]).unwrap()
    }

    #[test]
    fn masks_each_configured_field() {
        assert_eq!(username_password().obfuscate(ORIGINAL).unwrap(), OBFUSCATED);
    }

    #[test]
    fn pattern_order_does_not_change_output() {
        let reversed = RegexPatternObfuscator::for_keys(["password", "username"]).unwrap();
        assert_eq!(
            reversed.obfuscate_str(ORIGINAL),
            username_password().obfuscate_str(ORIGINAL)
        );
    }

    #[test]
    fn missing_input_is_rejected() {
        assert_eq!(
            username_password().obfuscate(None),
            Err(ObfuscationError::InvalidInput)
        );
    }

    #[test]
    fn duplicate_keys_are_collapsed() {
        let obfuscator = RegexPatternObfuscator::new([
            FieldPattern::quoted("password").unwrap(),
            FieldPattern::structured("password").unwrap(),
        ]);
        assert_eq!(obfuscator.patterns().len(), 1);
        assert_eq!(obfuscator.patterns()[0].key(), "password");
    }

    #[test]
    fn custom_mask_is_written_verbatim() {
        let obfuscator = username_password().with_mask("$1<hidden>").unwrap();
        assert_eq!(
            obfuscator.obfuscate_str(r#"{"password":"x"}"#),
            r#"{"password":"$1<hidden>"}"#
        );
    }

    #[test]
    fn masks_that_break_delimiters_are_rejected() {
        for mask in ["a\\", "\"", "x]", "{", "tab\t"] {
            assert!(
                matches!(
                    username_password().with_mask(mask),
                    Err(ObfuscationError::InvalidMask { .. })
                ),
                "{mask:?}"
            );
        }
    }

    #[test]
    fn custom_mask_keeps_obfuscation_idempotent() {
        let obfuscator = username_password().with_mask("<hidden>").unwrap();
        let once = obfuscator.obfuscate_str(r#"{"password":"x","y":"z"}"#);
        assert_eq!(once, r#"{"password":"<hidden>","y":"z"}"#);
        assert_eq!(obfuscator.obfuscate_str(&once), once);
    }

    #[test]
    fn empty_pattern_set_is_identity() {
        let obfuscator = RegexPatternObfuscator::new([]);
        assert_eq!(obfuscator.obfuscate_str(ORIGINAL), ORIGINAL);
    }
}
