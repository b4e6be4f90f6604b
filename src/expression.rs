use indexmap::IndexMap;
use serde_json::Value;

/// One invocation step of a parsed query.
///
/// An expression tells the execution engine to resolve `source_key` in the
/// current context (optionally calling it with `params`), then either return
/// the value as is (a leaf) or keep walking into its children.
///
/// # Examples
///
/// ```
/// use deepr::{parse_query, ParseOptions};
/// use serde_json::json;
///
/// let root = parse_query(&json!({"movie": {"title": true}}), &ParseOptions::default()).unwrap();
/// let movie = &root.nested_expressions.as_ref().unwrap()["movie"];
///
/// assert_eq!(movie.source_key, "movie");
/// assert!(movie.nested_expressions.as_ref().unwrap()["title"].is_leaf());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expression {
    /// Attribute or method to resolve in the parent context.
    ///
    /// Empty at the root and at pass-through nodes (`"=>target"`).
    pub source_key: String,

    /// Tolerate the absence of `source_key` instead of failing.
    pub is_optional: bool,

    /// Apply the children to each element of the collection produced by
    /// `source_key` rather than to the collection itself (`[query]`).
    pub use_collection_elements: bool,

    /// Arguments passed when invoking `source_key`, taken verbatim from `"()"`.
    pub params: Option<Value>,

    /// The single child with an empty target (`"key=>"`).
    pub next_expression: Option<Box<Expression>>,

    /// Children keyed by target, in query order.
    pub nested_expressions: Option<IndexMap<String, Expression>>,
}

impl Expression {
    /// A leaf resolving `source_key` with no params and no children.
    pub fn leaf(source_key: impl Into<String>) -> Self {
        Expression {
            source_key: source_key.into(),
            ..Default::default()
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.params.is_none() && self.next_expression.is_none() && self.nested_expressions.is_none()
    }

    /// Iterate over the children of this node.
    ///
    /// Nested children come with their target key, the next expression with `None`.
    /// At most one of the two kinds is ever present on a node.
    pub fn children(&self) -> impl Iterator<Item = (Option<&str>, &Expression)> {
        let next = self
            .next_expression
            .as_deref()
            .map(|expression| (None, expression));

        let nested = self
            .nested_expressions
            .iter()
            .flat_map(|map| map.iter())
            .map(|(target, expression)| (Some(target.as_str()), expression));

        next.into_iter().chain(nested)
    }
}
