//! Module node type
//!
//! A module is a named node in the namespace tree holding exported bindings
//! and child modules. Nodes start out uninitialized when created as path
//! placeholders and become initialized the first time a definition supplies
//! a member set.

use indexmap::IndexMap;

use crate::value::Value;

/// Member names starting with this character are reserved for the runtime
/// and never stored as exported bindings.
pub const RESERVED_MARKER: char = '$';

/// Whether a member name may be stored as an exported binding
pub(crate) fn admissible_member(name: &str) -> bool {
    !name.is_empty() && !name.starts_with(RESERVED_MARKER)
}

/// A node in the namespace tree
#[derive(Debug, Clone)]
pub struct Module {
    name: String,
    initialized: bool,
    members: IndexMap<String, Value>,
    children: IndexMap<String, Module>,
}

impl Module {
    /// Auto-created intermediate node: uninitialized, no members
    pub(crate) fn placeholder(name: String) -> Self {
        Module {
            name,
            initialized: false,
            members: IndexMap::new(),
            children: IndexMap::new(),
        }
    }

    /// Node created at the final path segment of a registration
    ///
    /// `initialized` tracks whether a member set was supplied at all, not
    /// whether any member survived the reserved-name filter.
    pub(crate) fn defined(name: String, members: Option<&IndexMap<String, Value>>) -> Self {
        let mut module = Module {
            name,
            initialized: members.is_some(),
            members: IndexMap::new(),
            children: IndexMap::new(),
        };
        if let Some(members) = members {
            for (key, value) in members {
                if admissible_member(key) {
                    module.members.insert(key.clone(), value.clone());
                }
            }
        }
        module
    }

    /// Fully dotted name of this node
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True once a definition has attached a member set to this node
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Look up an exported binding
    pub fn member(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Exported bindings in insertion order
    pub fn members(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of exported bindings
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    /// Look up a direct child module
    pub fn child(&self, segment: &str) -> Option<&Module> {
        self.children.get(segment)
    }

    pub(crate) fn children_mut(&mut self) -> &mut IndexMap<String, Module> {
        &mut self.children
    }

    /// Merge an incoming member set into an uninitialized node
    ///
    /// First writer per key wins: a key is copied only when neither the
    /// member map nor the child map already owns it. Does not flip
    /// `initialized` — only node creation sets that flag.
    pub(crate) fn merge_members(&mut self, members: &IndexMap<String, Value>) -> usize {
        let mut added = 0;
        for (key, value) in members {
            if !admissible_member(key) {
                continue;
            }
            if self.members.contains_key(key) || self.children.contains_key(key) {
                continue;
            }
            self.members.insert(key.clone(), value.clone());
            added += 1;
        }
        added
    }
}
