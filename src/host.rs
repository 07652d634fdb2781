//! Host capability boundaries
//!
//! Two collaborators live outside this layer: the class/object system and
//! the print/log sink. Both are consumed through traits and injected by
//! the embedder; this layer never constructs an implementation of the
//! class system and adds no behavior on top of it.

use indexmap::IndexMap;

use crate::error::RuntimeError;
use crate::value::Value;

/// External polymorphism provider
///
/// Re-exported to emitted code unchanged; inputs and outputs are defined by
/// the provider, not by this layer.
pub trait ClassSystem {
    /// Define a new class from base classes and a member map
    fn define_class(
        &self,
        name: &str,
        bases: &[Value],
        members: &IndexMap<String, Value>,
    ) -> Result<Value, RuntimeError>;

    /// Resolve a method on the parent of the given class
    fn find_super_method(&self, class: &Value, method: &str) -> Result<Value, RuntimeError>;

    /// Whether a value is an instance of a class
    fn is_instance(&self, value: &Value, class: &Value) -> bool;

    /// Whether a class derives from another
    fn is_subclass(&self, class: &Value, of: &Value) -> bool;
}

/// Variadic output sink for emitted `print` calls
///
/// No formatting contract beyond passing the rendered arguments through,
/// space-separated.
pub trait PrintSink {
    fn print(&self, args: &[Value]);
}

/// Sink writing to standard output
#[derive(Debug, Default)]
pub struct StdoutSink;

impl PrintSink for StdoutSink {
    fn print(&self, args: &[Value]) {
        println!("{}", render_args(args));
    }
}

/// Sink forwarding to the tracing pipeline
#[derive(Debug, Default)]
pub struct LogSink;

impl PrintSink for LogSink {
    fn print(&self, args: &[Value]) {
        tracing::info!(target: "quill_runtime::print", "{}", render_args(args));
    }
}

fn render_args(args: &[Value]) -> String {
    let rendered: Vec<String> = args.iter().map(|v| v.to_string()).collect();
    rendered.join(" ")
}
