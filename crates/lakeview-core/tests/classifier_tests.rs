use lakeview_core::{is_node_expandable, EntityClass, EntityType, ResourceNode};

fn node(entity_type: EntityType) -> ResourceNode {
    ResourceNode::new(entity_type, ["root", "entry"])
}

#[test]
fn test_containers_always_expandable() {
    for t in EntityType::ALL.into_iter().filter(|t| t.class() == EntityClass::Container) {
        assert!(is_node_expandable(&node(t), false), "{:?}", t);
        assert!(is_node_expandable(&node(t), true), "{:?}", t);
    }
}

#[test]
fn test_datasets_expandable_unless_stopping() {
    for t in EntityType::ALL.into_iter().filter(|t| t.class() == EntityClass::Dataset) {
        assert!(is_node_expandable(&node(t), false), "{:?}", t);
        assert!(!is_node_expandable(&node(t), true), "{:?}", t);
    }
}

#[test]
fn test_leaves_never_expandable() {
    for t in EntityType::ALL.into_iter().filter(|t| t.class() == EntityClass::Leaf) {
        assert!(!is_node_expandable(&node(t), false), "{:?}", t);
        assert!(!is_node_expandable(&node(t), true), "{:?}", t);
    }
}

#[test]
fn test_set_membership() {
    let containers = [EntityType::Source, EntityType::Space, EntityType::Home, EntityType::Folder];
    for t in containers {
        assert!(t.is_container());
    }
    assert!(EntityType::VirtualDataset.is_dataset());
    assert!(EntityType::PhysicalDatasetSourceFolder.is_dataset());
    assert_eq!(EntityType::File.class(), EntityClass::Leaf);
    assert_eq!(EntityType::Unknown.class(), EntityClass::Leaf);
}

#[test]
fn test_unrecognised_and_missing_types_are_leaves() {
    let unrecognised: ResourceNode =
        serde_json::from_str(r#"{"type": "MATERIALIZED_THING", "name": "x"}"#).unwrap();
    let missing: ResourceNode = serde_json::from_str(r#"{"name": "y"}"#).unwrap();

    for n in [unrecognised, missing] {
        assert_eq!(n.entity_type, EntityType::Unknown);
        assert!(!is_node_expandable(&n, false));
        assert!(!is_node_expandable(&n, true));
    }
}

#[test]
fn test_classification_is_repeatable() {
    let folder = node(EntityType::Folder);
    let before = folder.clone();
    let first = is_node_expandable(&folder, true);
    for _ in 0..10 {
        assert_eq!(is_node_expandable(&folder, true), first);
    }
    assert_eq!(folder, before);
}
