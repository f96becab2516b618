//! Integration tests for runtime-configured obfuscators.

#![cfg(feature = "config")]

use log_obfuscator::{
    config::{HttpLogConfig, ObfuscatorConfig},
    Obfuscate,
};

#[test]
fn test_configured_field_set() {
    let config = ObfuscatorConfig::from_json(
        r#"{"fields":[{"key":"username"},{"key":"password"}]}"#,
    )
    .unwrap();
    let obfuscator = config.build().unwrap();
    assert_eq!(
        obfuscator
            .obfuscate(r#"{"blahblahblah":"blehblehbleh","username":"my_username","password":"123456","something":"random"}"#)
            .unwrap(),
        r#"{"blahblahblah":"blehblehbleh","username":"***","password":"***","something":"random"}"#
    );
}

#[test]
fn test_field_order_is_kept() {
    let config = ObfuscatorConfig::from_json(
        r#"{"fields":[{"key":"b"},{"key":"a"},{"key":"b","matcher":"structured"}]}"#,
    )
    .unwrap();
    let obfuscator = config.build().unwrap();
    let keys: Vec<&str> = obfuscator.patterns().iter().map(|p| p.key()).collect();
    assert_eq!(keys, ["b", "a"]);
}

#[test]
fn test_config_round_trips_through_json() {
    let config = ObfuscatorConfig::from_json(
        r#"{"mask":"<m>","fields":[{"key":"pin","matcher":"quoted"}]}"#,
    )
    .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ObfuscatorConfig::from_json(&json).unwrap(), config);
}

#[test]
fn test_http_routes_from_config() {
    let config = HttpLogConfig::from_json(
        r#"{
            "feature": "services",
            "providers": {
                "vault": { "fields": [{ "key": "secret" }] },
                "rpc": { "mask": "<args>", "fields": [{ "key": "args", "matcher": "structured" }] }
            }
        }"#,
    )
    .unwrap();
    let http = config.build().unwrap();

    assert_eq!(http.routes().collect::<Vec<_>>(), ["rpc", "vault"]);
    assert_eq!(
        http.obfuscate_url("/services/rpc/call", r#"{"args":[1],"secret":"s"}"#)
            .unwrap(),
        r#"{"args":[<args>],"secret":"s"}"#
    );
    assert_eq!(
        http.obfuscate_url("/services/vault/read", r#"{"args":[1],"secret":"s"}"#)
            .unwrap(),
        r#"{"args":[1],"secret":"***"}"#
    );
}

#[test]
fn test_invalid_key_in_http_config() {
    let config =
        HttpLogConfig::from_json(r#"{"providers":{"x":{"fields":[{"key":""}]}}}"#).unwrap();
    assert!(config.build().is_err());
}
