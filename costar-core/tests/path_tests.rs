// Tests for BFS shortest-distance search

use costar_core::graph::ActorGraph;
use costar_core::path::{SearchOutcome, shortest_distance};

// ============================================================================
// Distance Correctness
// ============================================================================

#[test]
fn test_distance_to_self() {
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(shortest_distance(&graph, "a", "a"), SearchOutcome::Found(0));
}

#[test]
fn test_direct_edge_is_distance_one() {
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(shortest_distance(&graph, "a", "b"), SearchOutcome::Found(1));
    assert_eq!(shortest_distance(&graph, "b", "a"), SearchOutcome::Found(1));
}

#[test]
fn test_chain_distance() {
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("b", "c");
    graph.add_edge("c", "d");

    assert_eq!(shortest_distance(&graph, "a", "d"), SearchOutcome::Found(3));
}

#[test]
fn test_bfs_returns_shortest_of_multiple_paths() {
    let graph = ActorGraph::new();
    // Short route: a - b - d
    graph.add_edge("a", "b");
    graph.add_edge("b", "d");
    // Long route: a - e - f - d
    graph.add_edge("a", "e");
    graph.add_edge("e", "f");
    graph.add_edge("f", "d");

    assert_eq!(shortest_distance(&graph, "a", "d"), SearchOutcome::Found(2));
}

#[test]
fn test_star_neighborhood_distances() {
    // Seed A shared one work with B and C.
    let graph = ActorGraph::new();
    graph.add_edge("A", "B");
    graph.add_edge("A", "C");

    assert_eq!(shortest_distance(&graph, "A", "B"), SearchOutcome::Found(1));
    assert_eq!(shortest_distance(&graph, "B", "C"), SearchOutcome::Found(2));
}

// ============================================================================
// NoPath and NotFound Outcomes
// ============================================================================

#[test]
fn test_disconnected_vertices_report_no_path() {
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");
    graph.add_edge("c", "d");

    assert_eq!(shortest_distance(&graph, "a", "c"), SearchOutcome::NoPath);
}

#[test]
fn test_absent_vertex_reports_not_found() {
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(
        shortest_distance(&graph, "a", "ghost"),
        SearchOutcome::NotFound
    );
    assert_eq!(
        shortest_distance(&graph, "ghost", "a"),
        SearchOutcome::NotFound
    );
}

#[test]
fn test_empty_graph_reports_not_found() {
    let graph = ActorGraph::new();
    assert_eq!(
        shortest_distance(&graph, "a", "b"),
        SearchOutcome::NotFound
    );
}

#[test]
fn test_not_found_takes_precedence_over_no_path() {
    // One endpoint present, one absent: the absence is the reported
    // outcome, not the missing connection.
    let graph = ActorGraph::new();
    graph.add_edge("a", "b");

    assert_eq!(
        shortest_distance(&graph, "c", "d"),
        SearchOutcome::NotFound
    );
}
