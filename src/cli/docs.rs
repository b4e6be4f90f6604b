//! Documentation content for deepr CLI

use super::CliError;

/// Available documentation categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocCategory {
    Syntax,
    Keys,
    Collections,
    Params,
    Options,
    Errors,
    Expressions,
}

impl DocCategory {
    /// Parse category name from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "syntax" => Some(Self::Syntax),
            "keys" | "key" | "aliases" => Some(Self::Keys),
            "collections" | "collection" | "arrays" => Some(Self::Collections),
            "params" | "parameters" => Some(Self::Params),
            "options" | "config" => Some(Self::Options),
            "errors" | "error" => Some(Self::Errors),
            "expressions" | "expression" | "output" => Some(Self::Expressions),
            _ => None,
        }
    }
}

/// Get the docs overview (category listing)
pub fn get_docs_overview() -> &'static str {
    r#"DEEPR DOCUMENTATION

Deepr is a query language for composing remote method and attribute
invocations into a single request. Queries are JSON documents; deepr parses
them into expression trees for an execution engine to run.

DOCUMENTATION CATEGORIES

  syntax            Query grammar: true, objects, and one-element arrays
  keys              Aliases, empty targets, and optional keys
  collections       Applying a query to each element of a collection
  params            Passing arguments with the "()" key
  options           Ignoring and accepting keys, built-in keys
  errors            Invalid queries and what they report
  expressions       The expression tree printed by 'deepr check'

QUICK REFERENCE

  true              Include the value as is
  {"key": ...}      Resolve key, then apply the sub-query
  [{...}]           Apply the sub-query to each element
  "key?"            Tolerate a missing key
  "source=>target"  Return source under target
  "source=>"        Merge the result of source upward
  "()"              Params of the current key

Run 'deepr doc <category>' for detailed documentation.
"#
}

/// Get documentation for a specific category
pub fn get_doc_category(name: &str) -> Result<&'static str, CliError> {
    match DocCategory::from_str(name) {
        Some(DocCategory::Syntax) => Ok(SYNTAX_DOC),
        Some(DocCategory::Keys) => Ok(KEYS_DOC),
        Some(DocCategory::Collections) => Ok(COLLECTIONS_DOC),
        Some(DocCategory::Params) => Ok(PARAMS_DOC),
        Some(DocCategory::Options) => Ok(OPTIONS_DOC),
        Some(DocCategory::Errors) => Ok(ERRORS_DOC),
        Some(DocCategory::Expressions) => Ok(EXPRESSIONS_DOC),
        None => Err(CliError::UnknownCategory(name.to_string())),
    }
}

const SYNTAX_DOC: &str = r#"SYNTAX - Query Grammar

  Query := true
         | [Query]                              (exactly one element)
         | { "key": Query, ..., "()": Params }

INCLUDE
  true
    Resolve the key and include its value verbatim.

    Example:
      Query:  {"movie": {"title": true, "year": true}}
      Means:  resolve movie, then its title and year

NESTING
  {"key": Query}
    Resolve key in the current context, then apply the sub-query to the result.
    Entries are processed in document order.

    Constraints:
      - A sub-query must not be null
      - false, numbers, and strings are not queries
"#;

const KEYS_DOC: &str = r#"KEYS - Source, Target, Optional

SOURCE AND TARGET
  "source=>target"
    Resolve source, return the result under target.

    Example:
      Query:  {"movies=>actionMovies": {"()": {"genre": "action"}}}
      Means:  call movies with {"genre": "action"}, return it as actionMovies

  "key"
    Shorthand for "key=>key".

EMPTY TARGET
  "source=>"
    Resolve source and merge its result into the parent instead of
    nesting it under a key.

    Constraints:
      - At most one empty target per level
      - An empty target cannot be mixed with other targets at the same level

  "=>target"
    Empty source: the current value passes through under target.

OPTIONAL KEYS
  "key?"
    Tolerate a missing key instead of failing. The marker is removed from
    both the source and the default target.

    Example:
      "rating?"           source rating, target rating, optional
      "rating?=>score"    source rating, target score, optional

  A key contains at most one '=>'.
"#;

const COLLECTIONS_DOC: &str = r#"COLLECTIONS - Element Queries

  {"key": [Query]}
    Resolve key to a collection, then apply Query to each element rather than
    to the collection itself.

    Example:
      Query:  {"movies": [{"title": true}]}
      Means:  the title of every movie

  {"key": Query}
    Apply Query to the collection itself, for instance to read its length.

    Constraints:
      - The array must contain exactly one element
      - Only one level of array is unwrapped: [[...]] is invalid
"#;

const PARAMS_DOC: &str = r#"PARAMS - Invocation Arguments

  {"key": {"()": Params, ...}}
    Invoke key with Params. Params are passed through verbatim and can be
    any JSON value.

    Example:
      Query:  {"movies": {"()": {"genre": "action"}, "length": true}}
      Means:  call movies with {"genre": "action"}, then read its length

  "()" never produces a child expression.
"#;

const OPTIONS_DOC: &str = r#"OPTIONS - Ignoring Keys

  deepr check QUERY --ignore-key KEY --accept-key KEY --keep-built-in-keys
  deepr check QUERY --options '{"ignoreKeys": ["/^_/"], "acceptKeys": "_id"}'

MATCHERS
  key         Matches the key exactly
  /pattern/   Matches keys containing a match of the regular expression

IGNORE AND ACCEPT
  Keys matching an ignore matcher are dropped, unless they also match an
  accept matcher. Matchers apply to the source key, after '?' is removed.

BUILT-IN KEYS
  Reserved names such as constructor, prototype, toString, or __proto__
  are dropped by default. Use --keep-built-in-keys (or
  "ignoreBuiltInKeys": false) to parse them like any other key.
  Accept matchers do not override the built-in filter.

  Values of dropped keys are never inspected.
"#;

const ERRORS_DOC: &str = r#"ERRORS - Invalid Queries

  Any error rejects the whole query.

  the query is missing
    A query or sub-query is null.

  an array should contain exactly one element
    [] or [a, b] used as a query.

  ... is neither `true` nor an object
    A query is false, a number, a string, or a nested array.

  a key can contain at most one '=>' separator
    "a=>b=>c"

  more than one empty target at the same level
    {"a=>": {...}, "b=>": {...}}

  empty and non-empty targets at the same level
    {"a=>": true, "b": true}

  Duplicate targets do not fail: the last entry wins.
"#;

const EXPRESSIONS_DOC: &str = r#"EXPRESSIONS - Parser Output

  deepr check '{"movies": [{"title": true}]}' --pretty

  {
    "sourceKey": "",
    "isOptional": false,
    "useCollectionElements": false,
    "nestedExpressions": {
      "movies": {
        "sourceKey": "movies",
        "isOptional": false,
        "useCollectionElements": true,
        "nestedExpressions": {
          "title": {
            "sourceKey": "title",
            "isOptional": false,
            "useCollectionElements": false
          }
        }
      }
    }
  }

FIELDS
  sourceKey               Key to resolve, empty at the root
  isOptional              Key marked with '?'
  useCollectionElements   Sub-query was wrapped in [ ]
  params                  Value of "()", when present
  nextExpression          Child with an empty target
  nestedExpressions       Children by target key, in query order
"#;
