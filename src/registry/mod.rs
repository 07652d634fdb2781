//! Hierarchical module registry
//!
//! Emitted code declares its modules incrementally: members for one dotted
//! name may arrive across several partial declarations, and parent
//! namespaces may be referenced before anything defines them. The registry
//! owns the namespace tree and implements the merge semantics those partial
//! declarations rely on.
//!
//! The registry is an explicit object, created once at process start and
//! passed to every call site that registers or resolves modules; there is
//! no ambient global. It is only ever appended to — nodes are never removed
//! and initialized nodes are never rewritten.

mod module;

pub use module::{Module, RESERVED_MARKER};

use indexmap::IndexMap;
use tracing::debug;

use crate::error::RuntimeError;
use crate::value::Value;

/// Process-wide namespace tree
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    roots: IndexMap<String, Module>,
}

impl ModuleRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        ModuleRegistry::default()
    }

    /// Register a module under a dotted name
    ///
    /// Every path segment not yet present is auto-created as an
    /// uninitialized placeholder. At the final segment:
    ///
    /// - no node yet: the node is created, initialized iff `members` is
    ///   `Some`, with every admissible member copied in
    /// - node exists, initialized: [`RuntimeError::DuplicateDefinition`]
    /// - node exists, uninitialized: incoming members merge additively,
    ///   first writer per key wins, and the node stays uninitialized
    ///
    /// Passing `None` declares the name without members, pre-creating
    /// namespace nodes.
    pub fn register(
        &mut self,
        dotted_name: &str,
        members: Option<IndexMap<String, Value>>,
    ) -> Result<(), RuntimeError> {
        let segments = split_name(dotted_name)?;
        let Some((last, parents)) = segments.split_last() else {
            return Err(RuntimeError::InvalidName(dotted_name.to_string()));
        };

        let mut prefix = String::new();
        let mut container = &mut self.roots;
        for segment in parents {
            if !prefix.is_empty() {
                prefix.push('.');
            }
            prefix.push_str(segment);
            container = container
                .entry(segment.to_string())
                .or_insert_with(|| {
                    debug!(module = %prefix, "auto-creating placeholder module");
                    Module::placeholder(prefix.clone())
                })
                .children_mut();
        }

        match container.get_mut(*last) {
            Some(existing) if existing.is_initialized() => {
                Err(RuntimeError::DuplicateDefinition(dotted_name.to_string()))
            }
            Some(existing) => {
                let added = match &members {
                    Some(members) => existing.merge_members(members),
                    None => 0,
                };
                debug!(module = %dotted_name, added, "merged into uninitialized module");
                Ok(())
            }
            None => {
                let module = Module::defined(dotted_name.to_string(), members.as_ref());
                debug!(
                    module = %dotted_name,
                    initialized = module.is_initialized(),
                    members = module.member_count(),
                    "registered module"
                );
                container.insert(last.to_string(), module);
                Ok(())
            }
        }
    }

    /// Resolve a dotted name to its module node
    pub fn lookup(&self, dotted_name: &str) -> Option<&Module> {
        let mut segments = dotted_name.split('.');
        let mut current = self.roots.get(segments.next()?)?;
        for segment in segments {
            current = current.child(segment)?;
        }
        Some(current)
    }

    /// Whether a node exists for the dotted name
    pub fn contains(&self, dotted_name: &str) -> bool {
        self.lookup(dotted_name).is_some()
    }

    /// Top-level modules in insertion order
    pub fn roots(&self) -> impl Iterator<Item = &Module> {
        self.roots.values()
    }
}

fn split_name(dotted_name: &str) -> Result<Vec<&str>, RuntimeError> {
    if dotted_name.is_empty() {
        return Err(RuntimeError::InvalidName(dotted_name.to_string()));
    }
    let segments: Vec<&str> = dotted_name.split('.').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return Err(RuntimeError::InvalidName(dotted_name.to_string()));
    }
    Ok(segments)
}
