use apsp_core::{Distance, VertexId, WeightedDigraph};
use apsp_graph::{canonical_hash, DiGraph};
use apsp_paths::{johnson, shortest_distances, Johnson, JohnsonOpts, Stage};

fn v(index: usize) -> VertexId {
    VertexId::from_index(index)
}

#[test]
fn four_vertex_scenario() {
    let matrix =
        shortest_distances(4, &[(0, 1, 3.0), (0, 2, 8.0), (1, 3, 1.0), (2, 3, -4.0)]).unwrap();
    assert_eq!(matrix.get(v(0), v(2)), Distance::Finite(8.0));
    assert_eq!(matrix.get(v(0), v(3)), Distance::Finite(4.0));
    assert_eq!(matrix.get(v(2), v(3)), Distance::Finite(-4.0));
    assert_eq!(matrix.get(v(1), v(0)), Distance::Unreachable);
    assert_eq!(matrix.get(v(3), v(2)), Distance::Unreachable);
}

#[test]
fn negative_edge_without_cycle() {
    let matrix = shortest_distances(3, &[(0, 1, 5.0), (1, 2, -3.0), (0, 2, 100.0)]).unwrap();
    assert_eq!(matrix.get(v(0), v(2)), Distance::Finite(2.0));
    assert_eq!(matrix.get(v(1), v(2)), Distance::Finite(-3.0));
    assert_eq!(matrix.get(v(2), v(0)), Distance::Unreachable);
}

#[test]
fn two_vertex_negative_cycle_is_reported() {
    let err = shortest_distances(2, &[(0, 1, -1.0), (1, 0, -1.0)]).unwrap_err();
    assert!(err.is_negative_cycle());
    assert_eq!(err.info().code, "negative-cycle");
}

#[test]
fn negative_cycle_anywhere_fails_the_whole_run() {
    // Vertex 0 cannot reach the cycle, yet no matrix may be returned.
    let graph = DiGraph::from_triples(4, &[(0, 1, 1.0), (2, 3, 1.0), (3, 2, -2.0)]).unwrap();
    let mut run = Johnson::new(&graph, JohnsonOpts::default());
    let err = run.run().unwrap_err();
    assert!(err.is_negative_cycle());
    assert_eq!(run.stage(), Stage::Failed);
}

#[test]
fn reweighted_edge_past_the_f64_range_is_an_error() {
    let graph = DiGraph::from_triples(3, &[(0, 1, 1e308), (2, 1, -1e308)]).unwrap();
    let mut run = Johnson::new(&graph, JohnsonOpts::default());
    let err = run.run().unwrap_err();
    assert!(err.is_distance_overflow());
    assert_eq!(err.info().code, "distance-overflow");
    assert_eq!(run.stage(), Stage::Failed);
}

#[test]
fn negative_path_sum_past_the_f64_range_is_an_error() {
    let err = shortest_distances(3, &[(0, 1, -1e308), (1, 2, -1e308), (0, 2, 1.0)]).unwrap_err();
    assert!(err.is_distance_overflow());
    assert!(!err.is_negative_cycle());
}

#[test]
fn large_weights_that_cancel_stay_finite() {
    let matrix = shortest_distances(3, &[(0, 1, 1e308), (1, 2, -1e308)]).unwrap();
    assert_eq!(matrix.get(v(0), v(1)), Distance::Finite(1e308));
    assert_eq!(matrix.get(v(0), v(2)), Distance::Finite(0.0));
    assert_eq!(matrix.get(v(1), v(2)), Distance::Finite(-1e308));
    for (_, _, distance) in matrix.iter() {
        if let Some(value) = distance.finite() {
            assert!(value.is_finite());
        }
    }
}

#[test]
fn five_vertex_graph_with_back_edges() {
    let graph = DiGraph::from_triples(
        5,
        &[
            (0, 1, 3.0),
            (0, 2, 8.0),
            (1, 3, 1.0),
            (2, 3, -4.0),
            (3, 4, 2.0),
            (4, 0, -1.0),
        ],
    )
    .unwrap();
    let result = johnson(&graph, &JohnsonOpts::default()).unwrap();
    let expected_from_zero = [0.0, 3.0, 8.0, 4.0, 6.0];
    for (target, value) in expected_from_zero.iter().enumerate() {
        assert_eq!(result.distance(v(0), v(target)), Distance::Finite(*value));
    }
    assert_eq!(result.distance(v(4), v(3)), Distance::Finite(3.0));
    assert_eq!(result.distance(v(2), v(0)), Distance::Finite(-3.0));
    assert!(result.predecessors().is_none());
    assert_eq!(result.path(v(0), v(4)), None);
}

#[test]
fn diagonal_is_zero_even_with_zero_cycles() {
    let graph = DiGraph::from_triples(3, &[(0, 1, -2.0), (1, 0, 2.0), (2, 2, 0.0)]).unwrap();
    let matrix = johnson(&graph, &JohnsonOpts::default()).unwrap().into_distances();
    for vertex in 0..3 {
        assert_eq!(matrix.get(v(vertex), v(vertex)), Distance::Finite(0.0));
    }
    assert_eq!(matrix.get(v(0), v(1)), Distance::Finite(-2.0));
    assert_eq!(matrix.get(v(1), v(0)), Distance::Finite(2.0));
}

#[test]
fn parallel_edges_are_considered_independently() {
    let matrix = shortest_distances(2, &[(0, 1, 4.0), (0, 1, -1.0), (0, 1, 2.0)]).unwrap();
    assert_eq!(matrix.get(v(0), v(1)), Distance::Finite(-1.0));
}

#[test]
fn single_vertex_graph() {
    let matrix = shortest_distances(1, &[]).unwrap();
    assert_eq!(matrix.vertex_count(), 1);
    assert_eq!(matrix.get(v(0), v(0)), Distance::Finite(0.0));
    assert_eq!(matrix.shortest_shortest_path(), None);
}

#[test]
fn invalid_edges_surface_before_any_work() {
    let err = shortest_distances(2, &[(0, 2, 1.0)]).unwrap_err();
    assert!(err.is_invalid_edge());
}

#[test]
fn caller_graph_is_unchanged_and_runs_are_repeatable() {
    let graph = DiGraph::from_triples(3, &[(0, 1, -2.0), (1, 2, 3.0), (2, 0, 1.0)]).unwrap();
    let before = canonical_hash(&graph);
    let mut run = Johnson::new(&graph, JohnsonOpts::default());
    assert_eq!(run.stage(), Stage::Init);
    let first = run.run().unwrap();
    assert_eq!(run.stage(), Stage::Done);
    let second = run.run().unwrap();
    assert_eq!(first, second);
    assert_eq!(canonical_hash(&graph), before);
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
}

#[test]
fn tracked_paths_follow_shortest_routes() {
    let graph =
        DiGraph::from_triples(4, &[(0, 1, 3.0), (0, 2, 8.0), (1, 3, 1.0), (2, 3, -4.0)]).unwrap();
    let opts = JohnsonOpts {
        track_paths: true,
        ..JohnsonOpts::default()
    };
    let result = johnson(&graph, &opts).unwrap();
    assert!(result.predecessors().is_some());
    assert_eq!(result.path(v(0), v(2)), Some(vec![v(0), v(2)]));
    assert_eq!(result.path(v(2), v(3)), Some(vec![v(2), v(3)]));
    assert_eq!(result.path(v(1), v(1)), Some(vec![v(1)]));
    assert_eq!(result.path(v(3), v(0)), None);

    let path = result.path(v(0), v(3)).unwrap();
    assert_eq!(path.first(), Some(&v(0)));
    assert_eq!(path.last(), Some(&v(3)));
}

#[test]
fn shortest_shortest_path_over_the_result() {
    let matrix =
        shortest_distances(4, &[(0, 1, 3.0), (0, 2, 8.0), (1, 3, 1.0), (2, 3, -4.0)]).unwrap();
    assert_eq!(matrix.shortest_shortest_path(), Some((v(2), v(3), -4.0)));
}
