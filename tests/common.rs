//! Shared helpers for integration tests
//!
//! Each test binary pulls in the subset it needs.
#![allow(dead_code)]

use indexmap::IndexMap;
use quill_runtime::Value;

/// Build a member map from (name, value) pairs
pub fn members(entries: &[(&str, Value)]) -> IndexMap<String, Value> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

/// Build a sequence of integers
pub fn int_seq(items: &[i64]) -> Value {
    Value::seq(items.iter().map(|&n| Value::Int(n)).collect())
}

/// Build a mapping of string keys to integers, preserving insertion order
pub fn int_map(entries: &[(&str, i64)]) -> Value {
    Value::map(
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), Value::Int(*v)))
            .collect(),
    )
}
