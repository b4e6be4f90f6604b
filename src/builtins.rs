//! Reserved property names that are never treated as query fields.
//!
//! These are the structural members every plain object or callable exposes
//! in the environments Deepr queries are usually written for. A query such as
//! `{"constructor": true}` would otherwise ask the execution engine to
//! resolve object internals instead of user-defined fields.
//!
//! Generic words that are also common field names (`name`, `length`) are
//! not part of the list.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Names that must never be treated as query fields.
pub const BUILT_IN_KEYS: &[&str] = &[
    // Members of every plain object
    "constructor",
    "__proto__",
    "__defineGetter__",
    "__defineSetter__",
    "__lookupGetter__",
    "__lookupSetter__",
    "hasOwnProperty",
    "isPrototypeOf",
    "propertyIsEnumerable",
    "toString",
    "toLocaleString",
    "valueOf",
    // Members of every callable
    "prototype",
    "apply",
    "bind",
    "call",
    "arguments",
    "caller",
];

static BUILT_IN_KEY_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| BUILT_IN_KEYS.iter().copied().collect());

/// Check whether `name` is a reserved property name.
pub fn is_built_in_key(name: &str) -> bool {
    BUILT_IN_KEY_SET.contains(name)
}
