use crate::{
    builtins::is_built_in_key,
    error::{ParseError, QueryTextError},
    expression::Expression,
    key::{PARAMS_KEY, parse_key},
    options::ParseOptions,
    query::{Query, QueryNode},
};
use indexmap::IndexMap;
use serde_json::Value;

/// Turns raw queries into [`Expression`] trees.
///
/// A parser only holds its options, so one instance can parse any number of
/// queries and the produced trees are owned by the caller.
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a whole query. The root has an empty source key.
    pub fn parse(&self, query: &Value) -> Result<Expression, ParseError> {
        self.parse_node(query, "", false)
    }

    fn parse_node(
        &self,
        query: &Value,
        source_key: &str,
        is_optional: bool,
    ) -> Result<Expression, ParseError> {
        let node = QueryNode::classify(source_key, query)?;

        let mut expression = Expression {
            source_key: source_key.to_string(),
            is_optional,
            use_collection_elements: node.use_collection_elements,
            ..Default::default()
        };

        let fields = match node.body {
            Query::Include => return Ok(expression),
            Query::Fields(fields) => fields,
        };

        log::trace!("parsing '{}' ({} entries)", source_key, fields.len());

        let mut nested_expressions = IndexMap::new();

        for (key, value) in fields {
            if key == PARAMS_KEY {
                expression.params = Some(value.clone());
                continue;
            }

            let key = parse_key(key)?;

            if self.should_skip(&key.source_key) {
                log::trace!("skipping key '{}'", key.source_key);
                continue;
            }

            let child = self.parse_node(value, &key.source_key, key.is_optional)?;

            if key.target_key.is_empty() {
                if expression.next_expression.is_some() {
                    return Err(ParseError::MultipleEmptyTargets {
                        key: source_key.to_string(),
                    });
                }
                expression.next_expression = Some(Box::new(child));
            } else if nested_expressions.insert(key.target_key, child).is_some() {
                log::debug!("duplicate target overwritten under '{}'", source_key);
            }
        }

        if !nested_expressions.is_empty() {
            if expression.next_expression.is_some() {
                return Err(ParseError::ConflictingTargets {
                    key: source_key.to_string(),
                });
            }
            expression.nested_expressions = Some(nested_expressions);
        }

        Ok(expression)
    }

    /// Built-in keys first, then `ignore_keys` unless overridden by `accept_keys`.
    fn should_skip(&self, source_key: &str) -> bool {
        (self.options.ignore_built_in_keys && is_built_in_key(source_key))
            || self.options.is_ignored(source_key)
    }
}

impl Default for Parser {
    fn default() -> Self {
        Parser::new(ParseOptions::default())
    }
}

/// Parse a raw query into an [`Expression`] tree.
///
/// # Examples
///
/// ```
/// use deepr::{parse_query, ParseOptions};
/// use serde_json::json;
///
/// let query = json!({"movies=>actionMovies": [{"()": {"genre": "action"}, "title": true}]});
/// let root = parse_query(&query, &ParseOptions::default()).unwrap();
///
/// let movies = &root.nested_expressions.as_ref().unwrap()["actionMovies"];
/// assert_eq!(movies.source_key, "movies");
/// assert!(movies.use_collection_elements);
/// assert_eq!(movies.params, Some(json!({"genre": "action"})));
/// ```
pub fn parse_query(query: &Value, options: &ParseOptions) -> Result<Expression, ParseError> {
    Parser::new(options.clone()).parse(query)
}

/// Parse a query given as JSON text.
pub fn parse_query_str(query: &str, options: &ParseOptions) -> Result<Expression, QueryTextError> {
    let value: Value = serde_json::from_str(query)?;
    Ok(parse_query(&value, options)?)
}
