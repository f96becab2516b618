//! Field patterns: "which value in this line is sensitive?"
//!
//! A [`FieldPattern`] names one key and says how that key's value is laid out
//! in the text. Lines are never parsed as JSON; a pattern finds the literal
//! quoted key, skips the `:` separator, and then scans for the end of the
//! value. Only the value span is ever rewritten.

use std::borrow::Cow;

use regex::Regex;

use crate::error::ObfuscationError;

/// Replacement written in place of every matched value.
pub const MASK_TOKEN: &str = "***";

/// How a field's value is delimited in the text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ValueMatcher {
    /// A string value: `"key":"value"`. The value ends at the next unescaped `"`.
    #[default]
    Quoted,
    /// An array or object value: `"key":[...]` or `"key":{...}`. The value is
    /// the balanced bracket body; the brackets themselves are kept.
    Structured,
}

impl ValueMatcher {
    fn opener(self) -> &'static str {
        match self {
            ValueMatcher::Quoted => "\"",
            ValueMatcher::Structured => r"[\[{]",
        }
    }

    /// Returns the byte offset of the value's closing delimiter, scanning from
    /// `start` (the first byte after the opening delimiter).
    ///
    /// `None` means the value never terminates on this line.
    fn value_end(self, input: &str, start: usize) -> Option<usize> {
        let bytes = input.as_bytes();
        match self {
            ValueMatcher::Quoted => closing_quote(bytes, start),
            ValueMatcher::Structured => closing_bracket(bytes, start),
        }
    }
}

// Only ASCII bytes are ever compared, so every returned offset sits on a char
// boundary even when the value holds multi-byte text.
fn closing_quote(bytes: &[u8], start: usize) -> Option<usize> {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2,
            b'"' => return Some(i),
            _ => i += 1,
        }
    }
    None
}

fn closing_bracket(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 1_usize;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'"' => i = closing_quote(bytes, i + 1)?,
            b'[' | b'{' => depth += 1,
            b']' | b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// One sensitive field, identified by its exact (case-sensitive) key.
///
/// Patterns are immutable once built. The key's own quotes are part of the
/// match, so `password` never matches `"password_hint"` or `"old_password"`.
///
/// ```rust
/// use log_obfuscator::{FieldPattern, ValueMatcher};
///
/// let pattern = FieldPattern::quoted("password").unwrap();
/// assert_eq!(pattern.key(), "password");
/// assert_eq!(pattern.matcher(), ValueMatcher::Quoted);
/// ```
#[derive(Clone, Debug)]
pub struct FieldPattern {
    key: String,
    matcher: ValueMatcher,
    locator: Regex,
}

impl FieldPattern {
    /// Builds a pattern for `key` using the given value layout.
    ///
    /// Fails with [`ObfuscationError::InvalidPattern`] when the key is empty or
    /// contains a double quote.
    pub fn new(key: impl Into<String>, matcher: ValueMatcher) -> Result<Self, ObfuscationError> {
        let key = key.into();
        if key.is_empty() {
            return Err(ObfuscationError::invalid_pattern(&key, "key is empty"));
        }
        if key.contains('"') {
            return Err(ObfuscationError::invalid_pattern(
                &key,
                "key must not contain a double quote",
            ));
        }

        let source = format!(r#""{}"\s*:\s*{}"#, regex::escape(&key), matcher.opener());
        let locator =
            Regex::new(&source).map_err(|err| ObfuscationError::invalid_pattern(&key, err))?;

        Ok(Self {
            key,
            matcher,
            locator,
        })
    }

    /// Pattern for a string value, `"key":"value"`.
    pub fn quoted(key: impl Into<String>) -> Result<Self, ObfuscationError> {
        Self::new(key, ValueMatcher::Quoted)
    }

    /// Pattern for an array or object value, `"key":[...]`.
    pub fn structured(key: impl Into<String>) -> Result<Self, ObfuscationError> {
        Self::new(key, ValueMatcher::Structured)
    }

    /// The field key this pattern matches.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// How the value is delimited.
    pub fn matcher(&self) -> ValueMatcher {
        self.matcher
    }

    /// Replaces every value of this field in `input` with `mask`.
    ///
    /// Returns the input borrowed when nothing matched. A value that never
    /// terminates stops the scan and the remainder is kept as-is.
    pub(crate) fn mask_in<'a>(&self, input: &'a str, mask: &str) -> Cow<'a, str> {
        let mut output = String::new();
        let mut copied_up_to = 0;
        let mut search_from = 0;

        while let Some(found) = self.locator.find_at(input, search_from) {
            let value_start = found.end();
            let Some(value_end) = self.matcher.value_end(input, value_start) else {
                break;
            };
            output.push_str(&input[copied_up_to..value_start]);
            output.push_str(mask);
            copied_up_to = value_end;
            search_from = value_end;
        }

        if copied_up_to == 0 {
            return Cow::Borrowed(input);
        }
        output.push_str(&input[copied_up_to..]);
        Cow::Owned(output)
    }
}
