//! Same-value identity
//!
//! Ordinary equality is unsafe for correctness-critical comparisons: it is
//! not reflexive (NaN != NaN) and not sign-aware (+0 == -0). `same_value`
//! is the total, symmetric, reflexive relation emitted code uses instead.

use std::rc::Rc;

use crate::value::Value;

/// Strict same-value identity predicate
///
/// NaN is identical to NaN; +0 and −0 are distinct. Integers and floats
/// inhabit one numeric domain, so `same_value(Int(1), Float(1.0))` holds.
/// Strings compare by content, aggregates and functions by reference.
pub fn same_value(x: &Value, y: &Value) -> bool {
    match (x, y) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Int(a), Value::Int(b)) => a == b,
        (Value::Float(a), Value::Float(b)) => same_value_f64(*a, *b),
        (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
            same_value_f64(*a as f64, *b)
        }
        (Value::Str(a), Value::Str(b)) => a == b,
        (Value::Seq(a), Value::Seq(b)) => Rc::ptr_eq(a, b),
        (Value::Map(a), Value::Map(b)) => Rc::ptr_eq(a, b),
        (Value::Nodes(a), Value::Nodes(b)) => Rc::ptr_eq(a, b),
        (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
        _ => false,
    }
}

/// Logical negation of [`same_value`]
pub fn not_same_value(x: &Value, y: &Value) -> bool {
    !same_value(x, y)
}

// Bit comparison separates +0 from -0 and is payload-insensitive for NaN
// once the NaN case is handled up front.
fn same_value_f64(a: f64, b: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    a.to_bits() == b.to_bits()
}
