// tests/options_tests.rs

use deepr::{KeyMatcher, OptionsError, ParseOptions};
use regex::Regex;
use serde_json::json;

// ============================================================================
// Key matchers
// ============================================================================

#[test]
fn test_exact_matcher() {
    let matcher = KeyMatcher::exact("title");
    assert!(matcher.matches("title"));
    assert!(!matcher.matches("subtitle"));
    assert!(!matcher.matches("Title"));
}

#[test]
fn test_pattern_matcher_is_unanchored() {
    let matcher = KeyMatcher::pattern("id").unwrap();
    assert!(matcher.matches("id"));
    assert!(matcher.matches("user_id"));
    assert!(matcher.matches("valid"));
    assert!(!matcher.matches("userId"));
    assert!(matcher.matches("identity"));
    assert!(!matcher.matches("name"));
}

#[test]
fn test_anchored_pattern() {
    let matcher = KeyMatcher::pattern("^_").unwrap();
    assert!(matcher.matches("_id"));
    assert!(!matcher.matches("id_"));
}

#[test]
fn test_parse_slashes_as_pattern() {
    assert_eq!(
        KeyMatcher::parse("/^_/").unwrap(),
        KeyMatcher::Pattern(Regex::new("^_").unwrap())
    );
}

#[test]
fn test_parse_plain_text_as_exact() {
    assert_eq!(KeyMatcher::parse("^_").unwrap(), KeyMatcher::exact("^_"));
    assert_eq!(KeyMatcher::parse("/").unwrap(), KeyMatcher::exact("/"));
    assert_eq!(KeyMatcher::parse("/path").unwrap(), KeyMatcher::exact("/path"));
}

#[test]
fn test_parse_invalid_pattern() {
    let result = KeyMatcher::parse("/(unclosed/");
    assert!(matches!(
        result,
        Err(OptionsError::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"
    ));
}

#[test]
fn test_from_str() {
    let matcher: KeyMatcher = "/^tmp/".parse().unwrap();
    assert!(matcher.matches("tmpValue"));
}

#[test]
fn test_display_round_trips_syntax() {
    assert_eq!(KeyMatcher::parse("/^_/").unwrap().to_string(), "/^_/");
    assert_eq!(KeyMatcher::exact("title").to_string(), "title");
}

#[test]
fn test_from_regex() {
    let matcher: KeyMatcher = Regex::new("^x").unwrap().into();
    assert!(matcher.matches("xy"));
}

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_defaults() {
    let options = ParseOptions::default();
    assert!(options.ignore_keys.is_empty());
    assert!(options.accept_keys.is_empty());
    assert!(options.ignore_built_in_keys);
    assert_eq!(options, ParseOptions::new());
}

#[test]
fn test_is_ignored() {
    let options = ParseOptions::new()
        .ignore_key("password")
        .ignore_key(KeyMatcher::pattern("^_").unwrap())
        .accept_key(KeyMatcher::pattern("^_id$").unwrap());

    assert!(options.is_ignored("password"));
    assert!(options.is_ignored("_rev"));
    assert!(!options.is_ignored("_id"));
    assert!(!options.is_ignored("title"));
}

// ============================================================================
// JSON options
// ============================================================================

#[test]
fn test_from_json_lists() {
    let options = ParseOptions::from_json(&json!({
        "ignoreKeys": ["/^_/", "password"],
        "acceptKeys": ["_id"],
        "ignoreBuiltInKeys": false
    }))
    .unwrap();

    assert_eq!(
        options.ignore_keys,
        vec![KeyMatcher::pattern("^_").unwrap(), KeyMatcher::exact("password")]
    );
    assert_eq!(options.accept_keys, vec![KeyMatcher::exact("_id")]);
    assert!(!options.ignore_built_in_keys);
}

#[test]
fn test_from_json_single_matchers() {
    let options = ParseOptions::from_json(&json!({
        "ignoreKeys": "/^_/",
        "acceptKeys": "_id"
    }))
    .unwrap();

    assert_eq!(options.ignore_keys.len(), 1);
    assert_eq!(options.accept_keys.len(), 1);
    assert!(options.ignore_built_in_keys);
}

#[test]
fn test_from_json_empty_object() {
    assert_eq!(ParseOptions::from_json(&json!({})).unwrap(), ParseOptions::default());
}

#[test]
fn test_from_json_nulls_use_defaults() {
    let options = ParseOptions::from_json(&json!({
        "ignoreKeys": null,
        "ignoreBuiltInKeys": null
    }))
    .unwrap();
    assert_eq!(options, ParseOptions::default());
}

#[test]
fn test_from_json_not_an_object() {
    let result = ParseOptions::from_json(&json!(["ignoreKeys"]));
    assert!(matches!(result, Err(OptionsError::InvalidType { ref field, .. }) if field == "options"));
}

#[test]
fn test_from_json_wrong_matcher_type() {
    let result = ParseOptions::from_json(&json!({"ignoreKeys": 3}));
    assert!(matches!(
        result,
        Err(OptionsError::InvalidType { ref field, .. }) if field == "ignoreKeys"
    ));

    let result = ParseOptions::from_json(&json!({"acceptKeys": ["ok", 3]}));
    assert!(matches!(
        result,
        Err(OptionsError::InvalidType { ref field, .. }) if field == "acceptKeys"
    ));
}

#[test]
fn test_from_json_wrong_flag_type() {
    let result = ParseOptions::from_json(&json!({"ignoreBuiltInKeys": "yes"}));
    assert!(matches!(
        result,
        Err(OptionsError::InvalidType { ref field, expected: "a boolean" }) if field == "ignoreBuiltInKeys"
    ));
}

#[test]
fn test_from_json_invalid_pattern() {
    let result = ParseOptions::from_json(&json!({"ignoreKeys": ["/[/"]}));
    assert!(matches!(result, Err(OptionsError::InvalidPattern { .. })));
}
