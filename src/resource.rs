//! Scoped-resource protocol
//!
//! A value participates in a scoped acquisition/release block ("with"
//! block) iff it exposes `enter` and `exit` members of function type.
//! Validation is a precondition gate only: it performs no acquisition, and
//! call sequencing is the responsibility of the emitted block.

use std::rc::Rc;

use crate::error::RuntimeError;
use crate::value::{NativeFn, Value};

/// The two-method contract a value must satisfy for scoped acquisition
pub trait ScopedResource {
    /// Acquire the resource; the returned value is bound inside the block
    fn enter(&mut self) -> Result<Value, RuntimeError>;

    /// Release the resource
    fn exit(&mut self) -> Result<(), RuntimeError>;
}

/// A dynamic value checked against the scoped-resource protocol
pub struct ValueResource {
    enter: Rc<NativeFn>,
    exit: Rc<NativeFn>,
}

impl ValueResource {
    /// Structural check: `candidate` must be a mapping owning `enter` and
    /// `exit` members, both functions
    pub fn from_value(candidate: &Value) -> Result<Self, RuntimeError> {
        let Value::Map(entries) = candidate else {
            return Err(RuntimeError::InvalidResourceProtocol(candidate.to_string()));
        };
        match (entries.get("enter"), entries.get("exit")) {
            (Some(Value::Func(enter)), Some(Value::Func(exit))) => Ok(ValueResource {
                enter: Rc::clone(enter),
                exit: Rc::clone(exit),
            }),
            _ => Err(RuntimeError::InvalidResourceProtocol(candidate.to_string())),
        }
    }
}

impl ScopedResource for ValueResource {
    fn enter(&mut self) -> Result<Value, RuntimeError> {
        (self.enter)(&[])
    }

    fn exit(&mut self) -> Result<(), RuntimeError> {
        (self.exit)(&[]).map(|_| ())
    }
}

/// Precondition gate run before a scoped-acquisition block
pub fn validate_scoped_resource(candidate: &Value) -> Result<(), RuntimeError> {
    ValueResource::from_value(candidate).map(|_| ())
}
