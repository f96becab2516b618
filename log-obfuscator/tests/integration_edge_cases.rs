//! Edge-case coverage for text that is not a tidy single-line JSON object.
//!
//! Obfuscation is permissive: malformed or partial input is never an error,
//! it simply yields fewer matches.

#![cfg(feature = "credentials")]

use log_obfuscator::{CredentialFields, CustomFunction, EmailPassword, Obfuscate};

#[test]
fn test_empty_line() {
    assert_eq!(EmailPassword::obfuscator().obfuscate("").unwrap(), "");
}

#[test]
fn test_plain_text() {
    let line = "POST /login 200 (12ms)";
    assert_eq!(EmailPassword::obfuscator().obfuscate_str(line), line);
}

#[test]
fn test_pretty_printed_json() {
    let input = "{\n  \"username\": \"bob\",\n  \"password\" :\t\"p\"\n}";
    let expected = "{\n  \"username\": \"***\",\n  \"password\" :\t\"***\"\n}";
    assert_eq!(EmailPassword::obfuscator().obfuscate_str(input), expected);
}

#[test]
fn test_line_embedded_in_log_prefix() {
    let input = r#"2024-01-01T00:00:00Z DEBUG body={"username":"bob","password":"p"} len=32"#;
    let expected = r#"2024-01-01T00:00:00Z DEBUG body={"username":"***","password":"***"} len=32"#;
    assert_eq!(EmailPassword::obfuscator().obfuscate_str(input), expected);
}

#[test]
fn test_escaped_quote_in_value() {
    let input = r#"{"password":"a\"b\\","next":"kept"}"#;
    assert_eq!(
        EmailPassword::obfuscator().obfuscate_str(input),
        r#"{"password":"***","next":"kept"}"#
    );
}

#[test]
fn test_truncated_line_keeps_tail() {
    let input = r#"{"username":"bob","password":"12"#;
    assert_eq!(
        EmailPassword::obfuscator().obfuscate_str(input),
        r#"{"username":"***","password":"12"#
    );
}

#[test]
fn test_non_string_value_is_not_matched() {
    let input = r#"{"password":null,"username":123}"#;
    assert_eq!(EmailPassword::obfuscator().obfuscate_str(input), input);
}

#[test]
fn test_value_equal_to_mask() {
    let input = r#"{"password":"***"}"#;
    assert_eq!(EmailPassword::obfuscator().obfuscate_str(input), input);
}

#[test]
fn test_unicode_values() {
    let input = r#"{"username":"José 🔒","city":"Zürich"}"#;
    assert_eq!(
        EmailPassword::obfuscator().obfuscate_str(input),
        r#"{"username":"***","city":"Zürich"}"#
    );
}

#[test]
fn test_nested_function_arguments() {
    let input = r#"{"functionArgs":[{"a":{"b":["]","}"]}},2],"trailer":"t"}"#;
    let once = CustomFunction::obfuscator().obfuscate_str(input);
    assert_eq!(once, r#"{"functionArgs":[***],"trailer":"t"}"#);
    assert_eq!(CustomFunction::obfuscator().obfuscate_str(&once), once);
}

#[test]
fn test_unbalanced_function_arguments_are_left_alone() {
    let input = r#"{"functionArgs":[{"a":1}"#;
    assert_eq!(CustomFunction::obfuscator().obfuscate_str(input), input);
}
