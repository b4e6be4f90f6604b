//! # Deepr
//!
//! Deepr is a query language for composing remote method and attribute
//! invocations into a single request. Queries are plain JSON:
//!
//! ```text
//! {
//!   "movies=>actionMovies": [{
//!     "()": {"genre": "action"},
//!     "title": true,
//!     "rating?": true
//!   }]
//! }
//! ```
//!
//! This crate parses such queries into [`Expression`] trees for an execution
//! engine to walk. It does not execute anything.
//!
//! - `true` includes the resolved value as is
//! - `[query]` applies `query` to each element of a collection
//! - `"source=>target"` aliases a key, `"source=>"` merges the result upward
//! - `"key?"` tolerates a missing key
//! - `"()"` holds the params passed when invoking the key

pub mod builtins;
#[cfg(feature = "cli")]
pub mod cli;
pub mod error;
pub mod expression;
pub mod key;
pub mod options;
pub mod output;
pub mod parser;
pub mod query;

pub use error::{OptionsError, ParseError, QueryTextError};
pub use expression::Expression;
pub use key::{ParsedKey, parse_key};
pub use options::{KeyMatcher, ParseOptions};
pub use output::{to_json, to_json_pretty};
pub use parser::{Parser, parse_query, parse_query_str};
