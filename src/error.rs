use thiserror::Error;

/// Errors raised while turning a raw query into an [`Expression`](crate::Expression) tree.
///
/// The `key` carried by most variants is the source key of the node being
/// parsed when the failure happened. It is empty at the root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The query is absent (`null`) where one is required.
    #[error("Invalid query{}: the query is missing", at(.key))]
    MissingQuery { key: String },

    /// An array that does not contain exactly one element.
    #[error(
        "Invalid query{}: an array should contain exactly one element, found {len}",
        at(.key)
    )]
    InvalidArraySyntax { key: String, len: usize },

    /// Neither `true`, a one-element array, nor an object.
    #[error("Invalid query{}: {value} is neither `true` nor an object", at(.key))]
    InvalidQueryShape { key: String, value: String },

    /// A key with more than one `=>` separator.
    #[error("Invalid key '{key}': a key can contain at most one '=>' separator")]
    InvalidKeySyntax { key: String },

    /// Two sibling entries both resolve to an empty target.
    #[error("Invalid query{}: more than one empty target at the same level", at(.key))]
    MultipleEmptyTargets { key: String },

    /// Empty and non-empty targets at the same level.
    #[error(
        "Invalid query{}: empty and non-empty targets at the same level",
        at(.key)
    )]
    ConflictingTargets { key: String },
}

fn at(key: &str) -> String {
    if key.is_empty() {
        String::new()
    } else {
        format!(" at '{key}'")
    }
}

/// Errors raised while building [`ParseOptions`](crate::ParseOptions) from text or JSON.
#[derive(Error, Debug, Clone)]
pub enum OptionsError {
    #[error("Invalid key pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid option '{field}': expected {expected}")]
    InvalidType {
        field: String,
        expected: &'static str,
    },
}

/// Failure of [`parse_query_str`](crate::parse_query_str): the text is not JSON or the query is invalid.
#[derive(Error, Debug)]
pub enum QueryTextError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Parse(#[from] ParseError),
}
