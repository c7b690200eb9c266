use crate::graph::{GraphBuilder, OrderingError};
use crate::registry::{ComponentDescriptor, ComponentId, ComponentRegistry};

fn registry_of(descriptors: Vec<ComponentDescriptor>) -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    for descriptor in descriptors {
        registry.record(descriptor);
    }
    registry
}

#[test]
fn test_build_simple_graph() {
    let registry = registry_of(vec![
        ComponentDescriptor::startup("a"),
        ComponentDescriptor::startup("b").after(["a"]),
        ComponentDescriptor::startup("c").after(["a", "b"]),
    ]);

    let graph = GraphBuilder::new(&registry).build_eligible().unwrap();

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.dependencies_of("c"), vec![ComponentId::from("a"), ComponentId::from("b")]);
    assert!(graph.dependencies_of("a").is_empty());
}

#[test]
fn test_shared_dependency_is_one_node() {
    // "a" is referenced by two dependants and is itself eligible
    let registry = registry_of(vec![
        ComponentDescriptor::startup("b").after(["a"]),
        ComponentDescriptor::startup("c").after(["a"]),
        ComponentDescriptor::startup("a"),
    ]);

    let graph = GraphBuilder::new(&registry).build_eligible().unwrap();

    assert_eq!(graph.len(), 3);
    let a = graph.find("a").unwrap();
    assert!(!graph.node(a).is_placeholder(), "eligible node reached first as a dependency must still be activated");
}

#[test]
fn test_non_eligible_dependency_becomes_placeholder() {
    let registry = registry_of(vec![
        ComponentDescriptor::passive("db").after(["never-looked-at"]),
        ComponentDescriptor::startup("cache").after(["db"]),
    ]);

    let graph = GraphBuilder::new(&registry).build_eligible().unwrap();

    assert_eq!(graph.len(), 2);
    let db = graph.find("db").unwrap();
    assert!(graph.node(db).is_placeholder());
    // Placeholder edges are not translated, so its own unknown reference is not an error
    assert!(graph.dependencies_of("db").is_empty());
}

#[test]
fn test_unknown_dependency_fails() {
    let registry = registry_of(vec![
        ComponentDescriptor::startup("a"),
        ComponentDescriptor::startup("b").after(["a", "ghost"]),
    ]);

    let result = GraphBuilder::new(&registry).build_eligible();
    match result {
        Err(OrderingError::UnresolvedDependency { component, dependency }) => {
            assert_eq!(component.as_str(), "b");
            assert_eq!(dependency.as_str(), "ghost");
        }
        other => panic!("Expected UnresolvedDependency, got {:?}", other),
    }
}

#[test]
fn test_unknown_dependency_message_names_identity() {
    let registry = registry_of(vec![ComponentDescriptor::startup("b").after(["ghost"])]);
    let err = GraphBuilder::new(&registry).build_eligible().unwrap_err();
    assert!(err.to_string().contains("'ghost'"), "message was: {}", err);
}

#[test]
fn test_self_dependency_kept_as_edge() {
    let registry = registry_of(vec![ComponentDescriptor::startup("a").after(["a"])]);

    let graph = GraphBuilder::new(&registry).build_eligible().unwrap();

    assert_eq!(graph.len(), 1);
    assert_eq!(graph.dependencies_of("a"), vec![ComponentId::from("a")]);
}

#[test]
fn test_build_explicit_subset() {
    let registry = registry_of(vec![
        ComponentDescriptor::startup("a"),
        ComponentDescriptor::startup("b").after(["a"]),
        ComponentDescriptor::startup("c"),
    ]);
    let subset: Vec<_> = registry.get("b").into_iter().collect();

    let graph = GraphBuilder::new(&registry).build(&subset).unwrap();

    // "a" is pulled in from the full registry as a placeholder for this subset
    assert_eq!(graph.len(), 2);
    assert!(graph.node(graph.find("a").unwrap()).is_placeholder());
    assert!(!graph.contains("c"));
}

#[test]
fn test_empty_registry_builds_empty_graph() {
    let registry = ComponentRegistry::new();
    let graph = GraphBuilder::new(&registry).build_eligible().unwrap();
    assert!(graph.is_empty());
}
