//! Parse deepr queries and render their expression trees

use super::CliError;
use crate::{KeyMatcher, ParseOptions, Parser, output};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// The query, as JSON text
    pub query: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate the query, don't print the expression tree
    pub syntax_only: bool,
    /// Parser options as a JSON document
    pub options: Option<String>,
    /// Additional keys to ignore, in matcher syntax (`key` or `/pattern/`)
    pub ignore_keys: Vec<String>,
    /// Additional keys to accept, in matcher syntax
    pub accept_keys: Vec<String>,
    /// Parse built-in keys like any other key
    pub keep_built_in_keys: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Query validation passed
    SyntaxValid,
    /// Query parsed successfully, with the rendered expression tree
    Success(String),
}

/// Build parser options from the JSON document, then the individual flags.
fn parser_options(options: &CheckOptions) -> Result<ParseOptions, CliError> {
    let mut parse_options = match &options.options {
        Some(text) => ParseOptions::from_json(&serde_json::from_str(text)?)?,
        None => ParseOptions::default(),
    };

    for key in &options.ignore_keys {
        parse_options = parse_options.ignore_key(KeyMatcher::parse(key)?);
    }
    for key in &options.accept_keys {
        parse_options = parse_options.accept_key(KeyMatcher::parse(key)?);
    }
    if options.keep_built_in_keys {
        parse_options = parse_options.ignore_built_in_keys(false);
    }

    Ok(parse_options)
}

/// Execute a deepr check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let query_str = options.query.as_ref().ok_or(CliError::NoInput)?;
    if query_str.trim().is_empty() {
        return Err(CliError::NoInput);
    }

    let query: serde_json::Value = serde_json::from_str(query_str).map_err(CliError::Json)?;

    let parser = Parser::new(parser_options(options)?);
    log::debug!("parsing query with {:?}", parser.options());

    let expression = parser.parse(&query).map_err(CliError::Parse)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid);
    }

    let rendered = if options.pretty {
        output::to_json_pretty(&expression)
    } else {
        output::to_json(&expression)
    };
    Ok(CheckResult::Success(rendered))
}
