//! Dynamic value model
//!
//! Emitted code operates on host values whose shape is only known at
//! runtime. `Value` is the explicit tagged representation of those values:
//! scalars are stored inline, aggregates behind `Rc` so that cloning is
//! cheap and identity comparisons over aggregates are reference identity,
//! matching the host environment's object semantics. The layer is
//! single-threaded throughout, so `Rc` rather than `Arc`.

use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::RuntimeError;

/// Signature of a native function value
///
/// Functions are opaque to the runtime layer; it only stores, passes, and
/// invokes them.
pub type NativeFn = dyn Fn(&[Value]) -> Result<Value, RuntimeError>;

/// A dynamically typed runtime value
#[derive(Clone)]
pub enum Value {
    /// Absent value
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    /// Text; compared by content, iterated per character
    Str(Rc<str>),
    /// Indexable, length-bearing sequence
    Seq(Rc<Vec<Value>>),
    /// Plain key/value container; enumerates in insertion order
    Map(Rc<IndexMap<String, Value>>),
    /// Ordered collection of host nodes
    Nodes(Rc<Vec<Value>>),
    /// Callable value
    Func(Rc<NativeFn>),
}

impl Value {
    /// Build a text value
    pub fn str(s: impl AsRef<str>) -> Self {
        Value::Str(Rc::from(s.as_ref()))
    }

    /// Build a sequence value
    pub fn seq(items: Vec<Value>) -> Self {
        Value::Seq(Rc::new(items))
    }

    /// Build a mapping value
    pub fn map(entries: IndexMap<String, Value>) -> Self {
        Value::Map(Rc::new(entries))
    }

    /// Build a node-collection value
    pub fn nodes(items: Vec<Value>) -> Self {
        Value::Nodes(Rc::new(items))
    }

    /// Build a function value
    pub fn func<F>(f: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, RuntimeError> + 'static,
    {
        Value::Func(Rc::new(f))
    }

    /// Name of the value's runtime tag
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Int(_) | Value::Float(_) => "number",
            Value::Str(_) => "string",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "mapping",
            Value::Nodes(_) => "node collection",
            Value::Func(_) => "function",
        }
    }

    /// Whether the value is callable
    pub fn is_func(&self) -> bool {
        matches!(self, Value::Func(_))
    }

    /// Slice a sequence-like value from `start` to its end
    ///
    /// `start` counts from the end when negative. Supported over sequences,
    /// node collections, and text (per character); any other shape raises
    /// [`RuntimeError::UnsupportedIterable`]. Used by emitted code to
    /// collect rest arguments.
    pub fn slice_from(&self, start: i64) -> Result<Value, RuntimeError> {
        match self {
            Value::Seq(items) => Ok(Value::seq(slice_tail(items, start))),
            Value::Nodes(items) => Ok(Value::nodes(slice_tail(items, start))),
            Value::Str(s) => {
                let chars: Vec<char> = s.chars().collect();
                let from = clamp_start(start, chars.len());
                Ok(Value::str(chars[from..].iter().collect::<String>()))
            }
            other => Err(RuntimeError::UnsupportedIterable(other.to_string())),
        }
    }
}

fn clamp_start(start: i64, len: usize) -> usize {
    if start < 0 {
        len.saturating_sub(start.unsigned_abs() as usize)
    } else {
        (start as usize).min(len)
    }
}

fn slice_tail(items: &[Value], start: i64) -> Vec<Value> {
    items[clamp_start(start, items.len())..].to_vec()
}

/// Structural equality, for tests and assertions
///
/// This is ordinary equality: NaN is not equal to itself and +0 equals −0.
/// Correctness-critical comparisons must use
/// [`same_value`](crate::identity::same_value) instead.
impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                *a as f64 == *b
            }
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::Seq(a), Value::Seq(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Nodes(a), Value::Nodes(b)) => a == b,
            (Value::Func(a), Value::Func(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Float(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else {
                    write!(f, "{}", n)
                }
            }
            Value::Str(s) => write!(f, "{}", s),
            Value::Seq(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Map(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
            Value::Nodes(items) => write!(f, "[node collection of {}]", items.len()),
            Value::Func(_) => write!(f, "[function]"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Str(s) => write!(f, "Str({:?})", s),
            Value::Func(_) => write!(f, "Func(..)"),
            other => write!(f, "{}", other),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::str(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::str(s)
    }
}
