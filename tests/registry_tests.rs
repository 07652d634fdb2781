//! Module registry tests
//!
//! Covers registration, placeholder auto-creation, duplicate detection,
//! and the first-writer-wins merge policy for uninitialized targets.

mod common;
use common::members;

use quill_runtime::{ModuleRegistry, RuntimeError, Value};

#[test]
fn test_register_creates_placeholder_chain() {
    let mut registry = ModuleRegistry::new();
    registry
        .register("a.b.c", Some(members(&[("x", Value::Int(5))])))
        .unwrap();

    let a = registry.lookup("a").unwrap();
    assert_eq!(a.name(), "a");
    assert!(!a.is_initialized());
    assert_eq!(a.member_count(), 0);

    let b = registry.lookup("a.b").unwrap();
    assert_eq!(b.name(), "a.b");
    assert!(!b.is_initialized());
    assert_eq!(b.member_count(), 0);

    let c = registry.lookup("a.b.c").unwrap();
    assert_eq!(c.name(), "a.b.c");
    assert!(c.is_initialized());
    assert_eq!(c.member("x"), Some(&Value::Int(5)));
}

#[test]
fn test_register_twice_with_members_is_duplicate() {
    let mut registry = ModuleRegistry::new();
    registry
        .register("app.core", Some(members(&[("x", Value::Int(1))])))
        .unwrap();
    let err = registry
        .register("app.core", Some(members(&[("y", Value::Int(2))])))
        .unwrap_err();
    match err {
        RuntimeError::DuplicateDefinition(name) => assert_eq!(name, "app.core"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_placeholder_then_definition_still_uninitialized() {
    // A node created as a path placeholder stays mergeable: defining it
    // later adds members without flipping the initialized flag.
    let mut registry = ModuleRegistry::new();
    registry.register("pkg.sub", None).unwrap();

    registry
        .register("pkg", Some(members(&[("a", Value::Int(1))])))
        .unwrap();
    let pkg = registry.lookup("pkg").unwrap();
    assert!(!pkg.is_initialized());
    assert_eq!(pkg.member("a"), Some(&Value::Int(1)));

    // the same name accepts further merges
    registry
        .register("pkg", Some(members(&[("b", Value::Int(2))])))
        .unwrap();
    let pkg = registry.lookup("pkg").unwrap();
    assert_eq!(pkg.member("a"), Some(&Value::Int(1)));
    assert_eq!(pkg.member("b"), Some(&Value::Int(2)));
}

#[test]
fn test_merge_keeps_earlier_value_on_collision() {
    let mut registry = ModuleRegistry::new();
    registry.register("m.leaf", None).unwrap();

    registry
        .register("m", Some(members(&[("k", Value::str("first"))])))
        .unwrap();
    registry
        .register("m", Some(members(&[("k", Value::str("second"))])))
        .unwrap();

    assert_eq!(
        registry.lookup("m").unwrap().member("k"),
        Some(&Value::str("first"))
    );
}

#[test]
fn test_merge_order_does_not_matter_for_disjoint_keys() {
    let declarations = [
        members(&[("x", Value::Int(1))]),
        members(&[("y", Value::Int(2))]),
        members(&[("z", Value::Int(3))]),
    ];

    let mut forward = ModuleRegistry::new();
    forward.register("m.anchor", None).unwrap();
    for decl in &declarations {
        forward.register("m", Some(decl.clone())).unwrap();
    }

    let mut reverse = ModuleRegistry::new();
    reverse.register("m.anchor", None).unwrap();
    for decl in declarations.iter().rev() {
        reverse.register("m", Some(decl.clone())).unwrap();
    }

    for key in ["x", "y", "z"] {
        assert_eq!(
            forward.lookup("m").unwrap().member(key),
            reverse.lookup("m").unwrap().member(key),
        );
    }
}

#[test]
fn test_sibling_namespaces_are_independent() {
    let mut registry = ModuleRegistry::new();
    registry
        .register("app.a", Some(members(&[("x", Value::Int(1))])))
        .unwrap();
    registry
        .register("app.b", Some(members(&[("x", Value::Int(2))])))
        .unwrap();

    assert_eq!(
        registry.lookup("app.a").unwrap().member("x"),
        Some(&Value::Int(1))
    );
    assert_eq!(
        registry.lookup("app.b").unwrap().member("x"),
        Some(&Value::Int(2))
    );
    assert!(!registry.lookup("app").unwrap().is_initialized());
}

#[test]
fn test_deep_registration_under_initialized_parent() {
    let mut registry = ModuleRegistry::new();
    registry
        .register("top", Some(members(&[("v", Value::Int(1))])))
        .unwrap();
    // children may still be registered under an initialized parent
    registry
        .register("top.inner", Some(members(&[("w", Value::Int(2))])))
        .unwrap();

    assert!(registry.lookup("top").unwrap().is_initialized());
    assert_eq!(
        registry.lookup("top.inner").unwrap().member("w"),
        Some(&Value::Int(2))
    );
}

#[test]
fn test_invalid_names() {
    let mut registry = ModuleRegistry::new();
    for bad in ["", ".", "a..b", ".a", "a."] {
        let err = registry.register(bad, None).unwrap_err();
        assert!(
            matches!(err, RuntimeError::InvalidName(_)),
            "expected InvalidName for {bad:?}"
        );
    }
    assert!(!registry.contains("a"));
}

#[test]
fn test_lookup_missing_names() {
    let mut registry = ModuleRegistry::new();
    registry.register("a.b", None).unwrap();
    assert!(registry.lookup("a.b.c").is_none());
    assert!(registry.lookup("z").is_none());
    assert!(registry.contains("a"));
}
