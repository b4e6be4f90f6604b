//! Key syntax: `source`, `source?`, `source=>target`, `source=>` and `=>target`.

use crate::error::ParseError;

/// Separates the source key from the target key.
pub const SEPARATOR: &str = "=>";

/// Trailing marker making a source key optional.
pub const OPTIONAL_MARKER: char = '?';

/// Reserved key holding the params of the current node.
pub const PARAMS_KEY: &str = "()";

/// The three parts encoded in a query key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedKey {
    pub source_key: String,
    pub target_key: String,
    pub is_optional: bool,
}

/// Split a query key into source key, target key and optionality.
///
/// # Examples
///
/// ```
/// use deepr::key::parse_key;
///
/// let key = parse_key("movies?=>films").unwrap();
/// assert_eq!(key.source_key, "movies");
/// assert_eq!(key.target_key, "films");
/// assert!(key.is_optional);
///
/// // Without an alias, the target is the source minus the optional marker
/// let key = parse_key("rating?").unwrap();
/// assert_eq!(key.target_key, "rating");
/// ```
pub fn parse_key(key: &str) -> Result<ParsedKey, ParseError> {
    let mut parts = key.split(SEPARATOR);

    let (raw_source, target) = match (parts.next(), parts.next(), parts.next()) {
        (Some(source), None, None) => (source, None),
        (Some(source), Some(target), None) => (source, Some(target)),
        _ => {
            return Err(ParseError::InvalidKeySyntax {
                key: key.to_string(),
            });
        }
    };

    let (source_key, is_optional) = match raw_source.strip_suffix(OPTIONAL_MARKER) {
        Some(stripped) => (stripped, true),
        None => (raw_source, false),
    };

    Ok(ParsedKey {
        source_key: source_key.to_string(),
        // An explicit target is kept verbatim, even when empty
        target_key: target.unwrap_or(source_key).to_string(),
        is_optional,
    })
}
