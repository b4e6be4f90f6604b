//! JSON rendering of expression trees.
//!
//! An [`Expression`] is rendered as an object using the field names of the
//! wire format:
//!
//! ```text
//! {
//!   "sourceKey": "movies",
//!   "isOptional": false,
//!   "useCollectionElements": true,
//!   "params": {"genre": "action"},
//!   "nestedExpressions": {"title": {"sourceKey": "title", ...}}
//! }
//! ```
//!
//! `sourceKey`, `isOptional` and `useCollectionElements` are always present.
//! `params`, `nextExpression` and `nestedExpressions` only when set. Nested
//! expressions keep the order of the query.
//!
//! # Examples
//!
//! ```
//! use deepr::output::to_json;
//! use deepr::Expression;
//!
//! let json = to_json(&Expression::leaf("title"));
//! assert_eq!(json, r#"{"sourceKey":"title","isOptional":false,"useCollectionElements":false}"#);
//! ```

use crate::expression::Expression;
use serde_json::{Map, Value};

/// Convert an expression tree to a JSON value.
pub fn to_value(expression: &Expression) -> Value {
    let mut object = Map::new();

    object.insert(
        "sourceKey".to_string(),
        Value::String(expression.source_key.clone()),
    );
    object.insert("isOptional".to_string(), Value::Bool(expression.is_optional));
    object.insert(
        "useCollectionElements".to_string(),
        Value::Bool(expression.use_collection_elements),
    );

    if let Some(params) = &expression.params {
        object.insert("params".to_string(), params.clone());
    }

    if let Some(next) = &expression.next_expression {
        object.insert("nextExpression".to_string(), to_value(next));
    }

    if let Some(nested) = &expression.nested_expressions {
        let nested = nested
            .iter()
            .map(|(target, child)| (target.clone(), to_value(child)))
            .collect();
        object.insert("nestedExpressions".to_string(), Value::Object(nested));
    }

    Value::Object(object)
}

/// Render an expression tree as compact JSON.
pub fn to_json(expression: &Expression) -> String {
    to_value(expression).to_string()
}

/// Render an expression tree as JSON with 2-space indentation.
pub fn to_json_pretty(expression: &Expression) -> String {
    format!("{:#}", to_value(expression))
}
