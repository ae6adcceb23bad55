use crate::error::GrafoError;
use crate::graph::algos::dijkstra::*;
use crate::graph::Graph;

#[test]
fn test_undirected_chain_path_and_length() {
    // A - B(5) - C(3) - D(2)
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 5.0);
    g.add_edge("B", "C", 3.0);
    g.add_edge("C", "D", 2.0);

    let path = dijkstra_path(&g, "A", "D").unwrap().unwrap();
    assert_eq!(path, vec!["A", "B", "C", "D"]);
    assert_eq!(dijkstra_path_length(&g, "A", "D").unwrap(), 10.0);
}

#[test]
fn test_diamond_picks_direct_edge() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 5.0);
    g.add_edge("A", "C", 2.0);
    g.add_edge("A", "D", 1.0);
    g.add_edge("B", "D", 3.0);
    g.add_edge("C", "D", 4.0);

    let path = dijkstra_path(&g, "A", "D").unwrap().unwrap();
    assert_eq!(path, vec!["A", "D"]);
    assert_eq!(dijkstra_path_length(&g, "A", "D").unwrap(), 1.0);
}

#[test]
fn test_same_node_short_circuits() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1.0);
    assert_eq!(dijkstra_path_length(&g, "A", "A").unwrap(), 0.0);
    assert_eq!(
        dijkstra_path(&g, "A", "A").unwrap().unwrap(),
        vec!["A".to_string()]
    );
}

#[test]
fn test_unreachable_target() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    g.add_node("Z");
    assert_eq!(dijkstra_path(&g, "A", "Z").unwrap(), None);
    assert_eq!(
        dijkstra_path_length(&g, "A", "Z").unwrap(),
        f64::INFINITY
    );
}

#[test]
fn test_unknown_nodes_are_errors() {
    let mut g = Graph::directed();
    g.add_node("A");
    assert!(dijkstra_path(&g, "missing", "A").is_err());
    assert!(dijkstra_path(&g, "A", "missing").is_err());
}

#[test]
fn test_empty_sources_is_usage_error() {
    let g = Graph::directed();
    let result = multi_source_dijkstra(&g, &[], &DijkstraOptions::default());
    assert!(matches!(result, Err(GrafoError::UsageError(_))));
}

#[test]
fn test_multi_source_distances() {
    // A - B - C - D - E, unit weights, sources {A, E}
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 1.0);
    g.add_edge("B", "C", 1.0);
    g.add_edge("C", "D", 1.0);
    g.add_edge("D", "E", 1.0);

    let sources = vec!["A".to_string(), "E".to_string()];
    let result = multi_source_dijkstra(&g, &sources, &DijkstraOptions::default()).unwrap();
    assert_eq!(result.distances["A"], 0.0);
    assert_eq!(result.distances["E"], 0.0);
    assert_eq!(result.distances["C"], 2.0);
    assert_eq!(result.distances["B"], 1.0);
    assert_eq!(result.paths["B"], vec!["A", "B"]);
    assert_eq!(result.paths["D"], vec!["E", "D"]);
}

#[test]
fn test_target_in_sources_short_circuits() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    let opts = DijkstraOptions {
        target: Some("A".to_string()),
        ..Default::default()
    };
    let result = multi_source_dijkstra(&g, &["A".to_string()], &opts).unwrap();
    assert_eq!(result.distances["A"], 0.0);
    assert_eq!(result.paths["A"], vec!["A"]);
}

#[test]
fn test_cutoff_skips_expensive_relaxations() {
    let mut g = Graph::undirected();
    g.add_edge("A", "B", 5.0);
    g.add_edge("B", "C", 5.0);

    let opts = DijkstraOptions {
        cutoff: Some(6.0),
        ..Default::default()
    };
    let result = single_source_dijkstra(&g, "A", &opts).unwrap();
    assert_eq!(result.distances["B"], 5.0);
    assert!(!result.distances.contains_key("C"));
}

#[test]
fn test_equal_distance_records_extra_predecessors() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    g.add_edge("A", "C", 1.0);
    g.add_edge("B", "D", 1.0);
    g.add_edge("C", "D", 1.0);

    let result = single_source_dijkstra(&g, "A", &DijkstraOptions::default()).unwrap();
    assert_eq!(result.distances["D"], 2.0);
    assert_eq!(result.predecessors["D"], vec!["B", "C"]);
}

#[test]
fn test_negative_weight_detected_opportunistically() {
    // C -> B relaxes an already-finalized node
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    g.add_edge("A", "C", 2.0);
    g.add_edge("C", "B", -2.0);

    let result = single_source_dijkstra(&g, "A", &DijkstraOptions::default());
    assert!(matches!(result, Err(GrafoError::ContradictoryPaths)));
}

#[test]
fn test_weight_function_can_hide_edges() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 1.0);
    g.add_edge("B", "C", 1.0);
    g.add_edge("A", "C", 10.0);

    // Hide the direct A -> C edge; the two-hop route remains
    let result = multi_source_dijkstra_with(
        &g,
        &["A".to_string()],
        &DijkstraOptions::default(),
        |from, to, w| {
            if from == "A" && to == "C" {
                None
            } else {
                Some(w)
            }
        },
    )
    .unwrap();
    assert_eq!(result.distances["C"], 2.0);
    assert_eq!(result.paths["C"], vec!["A", "B", "C"]);
}

#[test]
fn test_parallel_edges_use_cheapest() {
    let mut g = Graph::directed();
    g.add_edge("A", "B", 5.0);
    g.add_edge("A", "B", 2.0);

    assert_eq!(dijkstra_path_length(&g, "A", "B").unwrap(), 2.0);
}
