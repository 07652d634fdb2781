//! Generic iteration dispatch
//!
//! The uniform foreach construct emitted by the compiler lowers to a single
//! entry point, [`for_each`], which classifies the iterable's runtime shape
//! once and drives the callback according to shape-specific rules. The
//! classification is computed from the value's intrinsic tag, never by
//! duck-typing members, so hybrid values resolve deterministically and
//! exactly one shape branch runs per call.

use tracing::trace;

use crate::error::RuntimeError;
use crate::value::Value;

/// Number of loop variables the caller's foreach construct bound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    One,
    Two,
}

/// Runtime shape of an iterable value
///
/// Computed fresh on every dispatch; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    Sequence,
    Mapping,
    Text,
    NodeCollection,
    Unsupported,
}

impl Shape {
    fn describe(self) -> &'static str {
        match self {
            Shape::Sequence => "a sequence",
            Shape::Mapping => "a mapping",
            Shape::Text => "text",
            Shape::NodeCollection => "a node collection",
            Shape::Unsupported => "an unsupported value",
        }
    }
}

/// Classify a value's iterable shape from its intrinsic tag
pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Seq(_) => Shape::Sequence,
        Value::Map(_) => Shape::Mapping,
        Value::Str(_) => Shape::Text,
        Value::Nodes(_) => Shape::NodeCollection,
        _ => Shape::Unsupported,
    }
}

/// One callback invocation's worth of loop-variable bindings
#[derive(Debug)]
pub enum IterItem<'a> {
    /// Sequence element with its ascending index
    Element { value: &'a Value, index: usize },
    /// Mapping entry under a two-variable loop
    Pair { key: &'a str, value: &'a Value },
    /// Mapping entry under a one-variable loop: a fresh two-element sequence
    PairSeq(Value),
    /// One character of a text value
    Char(Value),
    /// One node of an ordered node collection
    Node(&'a Value),
}

/// Drive `callback` over `iterable` according to its runtime shape
///
/// The callback is invoked against `scope` once per element and returns
/// `true` to request early termination; remaining elements are then not
/// visited. Shape contracts:
///
/// - sequences: arity 1 only, elements in ascending index order
/// - mappings: arity 2 binds key and value; arity 1 binds a `[key, value]`
///   pair sequence; entries enumerate in insertion order
/// - text and node collections: arity 1 only, per position
///
/// Any other shape raises [`RuntimeError::UnsupportedIterable`]; an arity
/// the shape does not support raises [`RuntimeError::ArityMismatch`]. The
/// dispatcher holds no state across calls.
pub fn for_each<S, F>(
    arity: Arity,
    iterable: &Value,
    scope: &mut S,
    mut callback: F,
) -> Result<(), RuntimeError>
where
    F: FnMut(&mut S, IterItem<'_>) -> bool,
{
    let shape = classify(iterable);
    trace!(?shape, ?arity, "foreach dispatch");

    match iterable {
        Value::Seq(items) => {
            require_single(arity, shape)?;
            visit_sequence(items, scope, &mut callback);
            Ok(())
        }
        Value::Map(entries) => {
            visit_mapping(arity, entries, scope, &mut callback);
            Ok(())
        }
        Value::Str(text) => {
            require_single(arity, shape)?;
            visit_text(text, scope, &mut callback);
            Ok(())
        }
        Value::Nodes(nodes) => {
            require_single(arity, shape)?;
            visit_nodes(nodes, scope, &mut callback);
            Ok(())
        }
        _ => Err(RuntimeError::UnsupportedIterable(iterable.to_string())),
    }
}

fn require_single(arity: Arity, shape: Shape) -> Result<(), RuntimeError> {
    if arity != Arity::One {
        return Err(RuntimeError::ArityMismatch {
            shape: shape.describe(),
        });
    }
    Ok(())
}

fn visit_sequence<S, F>(items: &[Value], scope: &mut S, callback: &mut F)
where
    F: FnMut(&mut S, IterItem<'_>) -> bool,
{
    for (index, value) in items.iter().enumerate() {
        if callback(scope, IterItem::Element { value, index }) {
            return;
        }
    }
}

fn visit_mapping<S, F>(
    arity: Arity,
    entries: &indexmap::IndexMap<String, Value>,
    scope: &mut S,
    callback: &mut F,
) where
    F: FnMut(&mut S, IterItem<'_>) -> bool,
{
    match arity {
        Arity::Two => {
            for (key, value) in entries {
                if callback(scope, IterItem::Pair { key, value }) {
                    return;
                }
            }
        }
        Arity::One => {
            for (key, value) in entries {
                let pair = Value::seq(vec![Value::str(key), value.clone()]);
                if callback(scope, IterItem::PairSeq(pair)) {
                    return;
                }
            }
        }
    }
}

fn visit_text<S, F>(text: &str, scope: &mut S, callback: &mut F)
where
    F: FnMut(&mut S, IterItem<'_>) -> bool,
{
    for ch in text.chars() {
        if callback(scope, IterItem::Char(Value::str(ch.to_string()))) {
            return;
        }
    }
}

fn visit_nodes<S, F>(nodes: &[Value], scope: &mut S, callback: &mut F)
where
    F: FnMut(&mut S, IterItem<'_>) -> bool,
{
    for node in nodes {
        if callback(scope, IterItem::Node(node)) {
            return;
        }
    }
}
