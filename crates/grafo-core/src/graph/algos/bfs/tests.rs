use crate::graph::algos::bfs::{bfs, bfs_path};
use crate::graph::Graph;

fn chain() -> Graph {
    // A - B - C - D
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 5.0);
    g.add_edge("B", "C", 3.0);
    g.add_edge("C", "D", 2.0);
    g
}

#[test]
fn test_source_level_zero_and_no_parent() {
    let g = chain();
    let result = bfs(&g, "A").unwrap();
    assert_eq!(result.levels["A"], 0);
    assert_eq!(result.parent["A"], None);
    assert_eq!(result.order[0], "A");
}

#[test]
fn test_level_consistency() {
    let g = chain();
    let result = bfs(&g, "A").unwrap();
    for node in &result.order {
        if node == "A" {
            continue;
        }
        let parent = result.parent[node].as_ref().unwrap();
        assert_eq!(result.levels[node], result.levels[parent] + 1);
    }
}

#[test]
fn test_traversal_order_is_dequeue_order() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1.0);
    g.add_edge("A", "C", 1.0);
    g.add_edge("B", "D", 1.0);
    let result = bfs(&g, "A").unwrap();
    assert_eq!(result.order, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_unknown_source_is_error() {
    let g = chain();
    assert!(bfs(&g, "Z").is_err());
    assert!(bfs_path(&g, "Z", "A").is_err());
    assert!(bfs_path(&g, "A", "Z").is_err());
}

#[test]
fn test_path_reconstruction() {
    let g = chain();
    let path = bfs_path(&g, "A", "D").unwrap().unwrap();
    assert_eq!(path, vec!["A", "B", "C", "D"]);
}

#[test]
fn test_same_node_path_short_circuits() {
    let g = chain();
    let path = bfs_path(&g, "B", "B").unwrap().unwrap();
    assert_eq!(path, vec!["B"]);
}

#[test]
fn test_disconnected_pair_yields_none() {
    let mut g = chain();
    g.add_node("Island");
    assert_eq!(bfs_path(&g, "A", "Island").unwrap(), None);

    let result = bfs(&g, "A").unwrap();
    assert!(!result.visited.contains("Island"));
}

#[test]
fn test_directed_reachability_is_one_way() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    assert!(bfs_path(&g, "A", "B").unwrap().is_some());
    assert_eq!(bfs_path(&g, "B", "A").unwrap(), None);
}

#[test]
fn test_parallel_edges_enqueue_once() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    g.add_edge("A", "B", 2.0);
    let result = bfs(&g, "A").unwrap();
    assert_eq!(result.order, vec!["A", "B"]);
    assert_eq!(result.levels["B"], 1);
}
