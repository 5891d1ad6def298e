use lakeview_core::{
    format_id_from_node, handle_selected_node_change, is_node_expandable, EntityType,
    ResourceNode, SelectionHandler, TreeOptions, TreeState,
};

/// Records every callback in call order.
#[derive(Default)]
struct CallLog {
    calls: Vec<String>,
}

impl SelectionHandler for CallLog {
    fn on_node_click(&mut self, node: &ResourceNode, is_node_expanded: bool) {
        self.calls.push(format!("click {} {}", node.id(), is_node_expanded));
    }

    fn on_selection_change(&mut self, id: String, node: Option<&ResourceNode>) {
        self.calls.push(format!("select '{}' {}", id, node.is_some()));
    }
}

fn options(stop_at_datasets: bool) -> TreeOptions {
    TreeOptions {
        stop_at_datasets,
        ..TreeOptions::default()
    }
}

#[test]
fn test_folder_selection_clicks_then_selects() {
    let folder = ResourceNode::new(EntityType::Folder, ["Sales", "reports"]);
    assert!(is_node_expandable(&folder, false));

    let mut log = CallLog::default();
    handle_selected_node_change(Some(&folder), false, &options(false), &mut log);

    assert_eq!(
        log.calls,
        vec![
            "click Sales.reports false".to_string(),
            "select 'Sales.reports' true".to_string(),
        ]
    );
}

#[test]
fn test_view_with_stop_at_datasets_only_selects() {
    let view = ResourceNode::new(EntityType::VirtualDataset, ["Sales", "orders"]);
    assert!(!is_node_expandable(&view, true));

    let mut log = CallLog::default();
    handle_selected_node_change(Some(&view), false, &options(true), &mut log);

    assert_eq!(log.calls, vec!["select 'Sales.orders' true".to_string()]);
}

#[test]
fn test_null_node_clears_selection() {
    let mut log = CallLog::default();
    handle_selected_node_change(None, true, &options(false), &mut log);

    assert_eq!(log.calls, vec![format!("select '{}' false", format_id_from_node(None))]);
}

#[test]
fn test_selection_reported_exactly_once() {
    let nodes = [
        ResourceNode::new(EntityType::Source, ["s3"]),
        ResourceNode::new(EntityType::PhysicalDataset, ["s3", "trips"]),
        ResourceNode::new(EntityType::Function, ["s3", "fn"]),
    ];
    for stop in [false, true] {
        for node in &nodes {
            let mut log = CallLog::default();
            handle_selected_node_change(Some(node), false, &options(stop), &mut log);
            let selects = log.calls.iter().filter(|c| c.starts_with("select")).count();
            let clicks = log.calls.iter().filter(|c| c.starts_with("click")).count();
            assert_eq!(selects, 1);
            assert_eq!(clicks, usize::from(is_node_expandable(node, stop)));
        }
    }
}

#[test]
fn test_tree_state_as_handler() {
    let root = ResourceNode::new(EntityType::Home, ["@alice"])
        .with_child(ResourceNode::new(EntityType::File, ["@alice", "notes.txt"]));
    let file = &root.children[0];
    let mut state = TreeState::new();
    let opts = options(false);

    let expanded = state.is_node_expanded(&root.id());
    handle_selected_node_change(Some(&root), expanded, &opts, &mut state);
    assert!(state.is_node_expanded("\"@alice\""));

    let expanded = state.is_node_expanded(&file.id());
    handle_selected_node_change(Some(file), expanded, &opts, &mut state);
    assert_eq!(state.selected(), Some("\"@alice\".\"notes.txt\""));
    assert!(!state.is_node_expanded(&file.id()));
    assert_eq!(state.selected_path().as_deref(), Some("\"@alice\".\"notes.txt\""));
}
