//! Parser configuration.
//!
//! Source keys can be dropped from a query with `ignore_keys`, unless they
//! are also listed in `accept_keys`. Built-in keys are dropped by default.

use crate::error::OptionsError;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// Matches source keys either by equality or by regular expression.
#[derive(Debug, Clone)]
pub enum KeyMatcher {
    /// Matches a key equal to the string
    Exact(String),

    /// Matches a key containing a match of the pattern (unanchored)
    Pattern(Regex),
}

impl KeyMatcher {
    /// Parse the textual matcher syntax.
    ///
    /// `/body/` is a pattern, anything else an exact key.
    ///
    /// # Examples
    ///
    /// ```
    /// use deepr::KeyMatcher;
    ///
    /// assert!(KeyMatcher::parse("/^_/").unwrap().matches("_id"));
    /// assert!(KeyMatcher::parse("_id").unwrap().matches("_id"));
    /// assert!(!KeyMatcher::parse("_id").unwrap().matches("_ids"));
    /// ```
    pub fn parse(text: &str) -> Result<Self, OptionsError> {
        match text
            .strip_prefix('/')
            .and_then(|rest| rest.strip_suffix('/'))
        {
            Some(body) => Self::pattern(body),
            None => Ok(KeyMatcher::Exact(text.to_string())),
        }
    }

    pub fn exact(key: impl Into<String>) -> Self {
        KeyMatcher::Exact(key.into())
    }

    pub fn pattern(pattern: &str) -> Result<Self, OptionsError> {
        Regex::new(pattern)
            .map(KeyMatcher::Pattern)
            .map_err(|source| OptionsError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            KeyMatcher::Exact(expected) => expected == key,
            KeyMatcher::Pattern(regex) => regex.is_match(key),
        }
    }
}

impl PartialEq for KeyMatcher {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (KeyMatcher::Exact(a), KeyMatcher::Exact(b)) => a == b,
            (KeyMatcher::Pattern(a), KeyMatcher::Pattern(b)) => a.as_str() == b.as_str(),
            _ => false,
        }
    }
}

impl FromStr for KeyMatcher {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        KeyMatcher::parse(s)
    }
}

impl From<Regex> for KeyMatcher {
    fn from(regex: Regex) -> Self {
        KeyMatcher::Pattern(regex)
    }
}

impl From<&str> for KeyMatcher {
    fn from(key: &str) -> Self {
        KeyMatcher::Exact(key.to_string())
    }
}

impl From<String> for KeyMatcher {
    fn from(key: String) -> Self {
        KeyMatcher::Exact(key)
    }
}

impl fmt::Display for KeyMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyMatcher::Exact(key) => write!(f, "{}", key),
            KeyMatcher::Pattern(regex) => write!(f, "/{}/", regex.as_str()),
        }
    }
}

/// Options controlling which keys of a query are parsed.
///
/// # Examples
///
/// ```
/// use deepr::{KeyMatcher, ParseOptions};
///
/// let options = ParseOptions::new()
///     .ignore_key(KeyMatcher::pattern("^_").unwrap())
///     .accept_key("_id");
///
/// assert!(options.is_ignored("_secret"));
/// assert!(!options.is_ignored("_id"));
/// assert!(!options.is_ignored("title"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOptions {
    /// Source keys to drop
    pub ignore_keys: Vec<KeyMatcher>,

    /// Source keys kept even when they match `ignore_keys`
    pub accept_keys: Vec<KeyMatcher>,

    /// Drop reserved property names such as `constructor`
    pub ignore_built_in_keys: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            ignore_keys: Vec::new(),
            accept_keys: Vec::new(),
            ignore_built_in_keys: true,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ignore_key(mut self, matcher: impl Into<KeyMatcher>) -> Self {
        self.ignore_keys.push(matcher.into());
        self
    }

    pub fn accept_key(mut self, matcher: impl Into<KeyMatcher>) -> Self {
        self.accept_keys.push(matcher.into());
        self
    }

    pub fn ignore_built_in_keys(mut self, ignore: bool) -> Self {
        self.ignore_built_in_keys = ignore;
        self
    }

    /// A key matching `ignore_keys` and none of `accept_keys`.
    pub fn is_ignored(&self, source_key: &str) -> bool {
        self.ignore_keys.iter().any(|m| m.matches(source_key))
            && !self.accept_keys.iter().any(|m| m.matches(source_key))
    }

    /// Build options from a JSON document.
    ///
    /// ```json
    /// {"ignoreKeys": ["/^_/", "password"], "acceptKeys": "_id", "ignoreBuiltInKeys": true}
    /// ```
    ///
    /// Matchers may be given as a single string or as an array of strings.
    /// Unknown fields are ignored.
    pub fn from_json(value: &Value) -> Result<Self, OptionsError> {
        let object = value.as_object().ok_or_else(|| OptionsError::InvalidType {
            field: "options".to_string(),
            expected: "an object",
        })?;

        let mut options = ParseOptions::default();

        if let Some(value) = object.get("ignoreKeys") {
            options.ignore_keys = matchers_from_json("ignoreKeys", value)?;
        }
        if let Some(value) = object.get("acceptKeys") {
            options.accept_keys = matchers_from_json("acceptKeys", value)?;
        }
        match object.get("ignoreBuiltInKeys") {
            None | Some(Value::Null) => {}
            Some(Value::Bool(ignore)) => options.ignore_built_in_keys = *ignore,
            Some(_) => {
                return Err(OptionsError::InvalidType {
                    field: "ignoreBuiltInKeys".to_string(),
                    expected: "a boolean",
                });
            }
        }

        Ok(options)
    }
}

/// Coerce a single matcher or a list of matchers into a list.
fn matchers_from_json(field: &str, value: &Value) -> Result<Vec<KeyMatcher>, OptionsError> {
    let invalid = || OptionsError::InvalidType {
        field: field.to_string(),
        expected: "a string or an array of strings",
    };

    match value {
        Value::Null => Ok(Vec::new()),
        Value::String(text) => Ok(vec![KeyMatcher::parse(text)?]),
        Value::Array(items) => items
            .iter()
            .map(|item| item.as_str().ok_or_else(invalid).and_then(KeyMatcher::parse))
            .collect(),
        _ => Err(invalid()),
    }
}
