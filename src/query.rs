use crate::error::ParseError;
use serde_json::{Map, Value};

/// The body of a raw query, once its shape has been checked.
///
/// ```text
/// Query := true | [Query] | { (Key: Query)*, "()"?: Params }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Query<'a> {
    /// `true`: include the resolved value as is
    Include,

    /// An object of keys to sub-queries, possibly holding `"()"` params
    Fields(&'a Map<String, Value>),
}

/// A raw query classified for parsing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QueryNode<'a> {
    /// The query was wrapped in a one-element array
    pub use_collection_elements: bool,
    pub body: Query<'a>,
}

impl<'a> QueryNode<'a> {
    /// Classify `value`, unwrapping at most one one-element array.
    ///
    /// `key` is the source key the value belongs to. It only serves error reporting.
    pub fn classify(key: &str, value: &'a Value) -> Result<Self, ParseError> {
        let (use_collection_elements, value) = match value {
            Value::Array(items) => match items.as_slice() {
                [item] => (true, item),
                _ => {
                    return Err(ParseError::InvalidArraySyntax {
                        key: key.to_string(),
                        len: items.len(),
                    });
                }
            },
            value => (false, value),
        };

        let body = match value {
            Value::Null => {
                return Err(ParseError::MissingQuery {
                    key: key.to_string(),
                });
            }
            Value::Bool(true) => Query::Include,
            Value::Object(fields) => Query::Fields(fields),
            other => {
                return Err(ParseError::InvalidQueryShape {
                    key: key.to_string(),
                    value: other.to_string(),
                });
            }
        };

        Ok(QueryNode {
            use_collection_elements,
            body,
        })
    }
}
