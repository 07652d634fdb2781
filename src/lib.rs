//! Quill Runtime - support layer for code emitted by the Quill compiler
//!
//! Quill compiles a source language down to a dynamic host environment;
//! the emitted code links against this crate for the primitives it cannot
//! express directly:
//!
//! - **Module registry**: a tree-shaped namespace keyed by dotted names,
//!   with idempotent, mergeable registration of partially declared modules
//! - **Iteration dispatcher**: one polymorphic entry point driving a
//!   callback over heterogeneous container shapes
//! - **Identity & validation utilities**: the strict same-value predicate
//!   and the scoped-resource protocol check
//!
//! ## Design Principles
//!
//! 1. **Synchronous and single-threaded**: every operation runs to
//!    completion on the caller's thread; no suspension points, no I/O
//! 2. **Errors are contract violations**: anything raised here is a bug in
//!    the calling emitted code and propagates immediately
//! 3. **Collaborators are injected**: the class system and print sinks are
//!    consumed through traits, never constructed here

pub mod config;
pub mod error;
pub mod host;
pub mod identity;
pub mod iter;
pub mod logging;
pub mod registry;
pub mod resource;
pub mod value;

pub use config::{ConfigError, LoggingConfig, PrintSinkConfig, RuntimeConfig};
pub use error::RuntimeError;
pub use host::{ClassSystem, LogSink, PrintSink, StdoutSink};
pub use identity::{not_same_value, same_value};
pub use iter::{classify, for_each, Arity, IterItem, Shape};
pub use registry::{Module, ModuleRegistry, RESERVED_MARKER};
pub use resource::{validate_scoped_resource, ScopedResource, ValueResource};
pub use value::{NativeFn, Value};

use std::rc::Rc;

use indexmap::IndexMap;

/// The runtime instance emitted code talks to
///
/// Owns the process-wide module registry, the optional class-system
/// provider, and the print sink chain. Created once at process start and
/// never torn down at runtime.
pub struct Runtime {
    registry: ModuleRegistry,
    classes: Option<Rc<dyn ClassSystem>>,
    sinks: Vec<Box<dyn PrintSink>>,
}

impl Runtime {
    /// Create a runtime from configuration
    pub fn new(config: &RuntimeConfig) -> Self {
        let sinks: Vec<Box<dyn PrintSink>> = match config.print_sink {
            PrintSinkConfig::Auto => vec![Box::new(StdoutSink), Box::new(LogSink)],
            PrintSinkConfig::Stdout => vec![Box::new(StdoutSink)],
            PrintSinkConfig::Log => vec![Box::new(LogSink)],
            PrintSinkConfig::Disabled => Vec::new(),
        };
        Runtime {
            registry: ModuleRegistry::new(),
            classes: None,
            sinks,
        }
    }

    /// Inject the class-system provider
    pub fn with_class_system(mut self, classes: Rc<dyn ClassSystem>) -> Self {
        self.classes = Some(classes);
        self
    }

    /// The namespace tree
    pub fn registry(&self) -> &ModuleRegistry {
        &self.registry
    }

    /// Register a module under a dotted name
    ///
    /// See [`ModuleRegistry::register`] for the merge semantics.
    pub fn register_module(
        &mut self,
        dotted_name: &str,
        members: Option<IndexMap<String, Value>>,
    ) -> Result<(), RuntimeError> {
        self.registry.register(dotted_name, members)
    }

    /// Print arguments through the first configured sink
    ///
    /// Raises [`RuntimeError::UnsupportedOperation`] when no sink is
    /// configured.
    pub fn print(&self, args: &[Value]) -> Result<(), RuntimeError> {
        match self.sinks.first() {
            Some(sink) => {
                sink.print(args);
                Ok(())
            }
            None => Err(RuntimeError::UnsupportedOperation(
                "print function is unsupported".to_string(),
            )),
        }
    }

    /// Passthrough to the injected class system
    pub fn define_class(
        &self,
        name: &str,
        bases: &[Value],
        members: &IndexMap<String, Value>,
    ) -> Result<Value, RuntimeError> {
        self.class_system()?.define_class(name, bases, members)
    }

    /// Passthrough to the injected class system
    pub fn find_super_method(&self, class: &Value, method: &str) -> Result<Value, RuntimeError> {
        self.class_system()?.find_super_method(class, method)
    }

    /// Passthrough to the injected class system
    pub fn is_instance(&self, value: &Value, class: &Value) -> Result<bool, RuntimeError> {
        Ok(self.class_system()?.is_instance(value, class))
    }

    /// Passthrough to the injected class system
    pub fn is_subclass(&self, class: &Value, of: &Value) -> Result<bool, RuntimeError> {
        Ok(self.class_system()?.is_subclass(class, of))
    }

    fn class_system(&self) -> Result<&dyn ClassSystem, RuntimeError> {
        self.classes.as_deref().ok_or_else(|| {
            RuntimeError::UnsupportedOperation("no class system provider injected".to_string())
        })
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(&RuntimeConfig::default())
    }
}
