use apsp_core::rng::RngHandle;
use apsp_core::{Distance, DistanceMatrix, VertexId, WeightedDigraph};
use apsp_graph::{gen_potential_digraph, gen_random_digraph, DiGraph};
use apsp_paths::{dijkstra, johnson, reweight, BellmanFordOpts, JohnsonOpts, Potentials};
use proptest::prelude::*;

fn v(index: usize) -> VertexId {
    VertexId::from_index(index)
}

/// Dense relaxation over every intermediate vertex; `None` on a negative cycle.
fn dense_oracle(graph: &DiGraph) -> Option<Vec<Vec<f64>>> {
    let n = graph.vertex_count();
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for (i, row) in dist.iter_mut().enumerate() {
        row[i] = 0.0;
    }
    for edge in graph.edges() {
        let slot = &mut dist[edge.from.index()][edge.to.index()];
        *slot = slot.min(edge.weight);
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if dist[i][k].is_finite() && dist[k][j].is_finite() {
                    let through = dist[i][k] + dist[k][j];
                    if through < dist[i][j] {
                        dist[i][j] = through;
                    }
                }
            }
        }
    }
    if (0..n).any(|i| dist[i][i] < 0.0) {
        None
    } else {
        Some(dist)
    }
}

fn graph_from(n: usize, raw: &[(usize, usize, i32)]) -> DiGraph {
    let triples: Vec<_> = raw
        .iter()
        .map(|&(from, to, weight)| (from % n, to % n, f64::from(weight)))
        .collect();
    DiGraph::from_triples(n, &triples).unwrap()
}

fn arbitrary_graph() -> impl Strategy<Value = DiGraph> {
    (1usize..7).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, -6i32..12), 0..(n * 3))
            .prop_map(move |raw| graph_from(n, &raw))
    })
}

fn potential_graph() -> impl Strategy<Value = DiGraph> {
    (any::<u64>(), 1usize..9, 0usize..30).prop_map(|(seed, n, m)| {
        gen_potential_digraph(n, m, 10, &mut RngHandle::from_seed(seed)).unwrap()
    })
}

fn assert_matches_oracle(
    matrix: &DistanceMatrix,
    oracle: &[Vec<f64>],
) -> Result<(), TestCaseError> {
    for (s, row) in oracle.iter().enumerate() {
        for (t, expected) in row.iter().enumerate() {
            prop_assert_eq!(matrix.get(v(s), v(t)), Distance::from_tentative(*expected));
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn agrees_with_dense_oracle(graph in arbitrary_graph()) {
        let outcome = johnson(&graph, &JohnsonOpts::default());
        match dense_oracle(&graph) {
            Some(oracle) => assert_matches_oracle(outcome.unwrap().distances(), &oracle)?,
            None => prop_assert!(outcome.unwrap_err().is_negative_cycle()),
        }
    }

    #[test]
    fn triangle_inequality_and_zero_diagonal(graph in potential_graph()) {
        let matrix = johnson(&graph, &JohnsonOpts::default()).unwrap().into_distances();
        let n = matrix.vertex_count();
        for i in 0..n {
            prop_assert_eq!(matrix.get(v(i), v(i)), Distance::Finite(0.0));
            for j in 0..n {
                for k in 0..n {
                    if let (Some(ij), Some(jk)) = (
                        matrix.get(v(i), v(j)).finite(),
                        matrix.get(v(j), v(k)).finite(),
                    ) {
                        let ik = matrix.get(v(i), v(k)).finite();
                        prop_assert!(ik.is_some());
                        prop_assert!(ik.unwrap() <= ij + jk);
                    }
                }
            }
        }
    }

    #[test]
    fn reweighted_edges_are_never_negative(graph in potential_graph()) {
        let augmented = graph.with_synthetic_source();
        let potentials = Potentials::compute(&augmented, &BellmanFordOpts::default()).unwrap();
        prop_assert_eq!(potentials.len(), graph.vertex_count());
        let reweighted = reweight(&graph, &potentials).unwrap();
        for (original, shifted) in graph.edge_list().iter().zip(reweighted.edge_list()) {
            // Integer weights keep every potential exact, so no tolerance is needed.
            let expected =
                original.weight + potentials.get(original.from) - potentials.get(original.to);
            prop_assert!(expected >= 0.0, "edge {:?} shifts to {}", original, expected);
            prop_assert_eq!(shifted.weight, expected);
        }
    }

    #[test]
    fn non_negative_graphs_match_direct_searches(
        seed in any::<u64>(),
        n in 1usize..10,
        m in 0usize..40,
    ) {
        let graph = gen_random_digraph(n, m, 15, &mut RngHandle::from_seed(seed)).unwrap();
        let augmented = graph.with_synthetic_source();
        let potentials = Potentials::compute(&augmented, &BellmanFordOpts::default()).unwrap();
        prop_assert!(potentials.is_trivial());
        let matrix = johnson(&graph, &JohnsonOpts::default()).unwrap().into_distances();
        for s in 0..n {
            let direct = dijkstra(&graph, v(s)).unwrap();
            let direct_distances = direct.distances();
            prop_assert_eq!(matrix.row(v(s)), direct_distances.as_slice());
        }
    }

    #[test]
    fn sequential_and_parallel_runs_agree(graph in potential_graph()) {
        let four = JohnsonOpts { concurrency: Some(4), ..JohnsonOpts::default() };
        let sequential = johnson(&graph, &JohnsonOpts::sequential()).unwrap();
        let parallel = johnson(&graph, &four).unwrap();
        let again = johnson(&graph, &four).unwrap();
        prop_assert_eq!(&sequential, &parallel);
        prop_assert_eq!(&parallel, &again);
    }

    #[test]
    fn tracked_paths_cost_their_distance(graph in potential_graph()) {
        let opts = JohnsonOpts { track_paths: true, ..JohnsonOpts::default() };
        let result = johnson(&graph, &opts).unwrap();
        for (s, t, distance) in result.distances().iter() {
            let path = result.path(s, t);
            match distance.finite() {
                None => prop_assert!(path.is_none()),
                Some(expected) => {
                    let path = path.unwrap();
                    prop_assert_eq!(path.first().copied(), Some(s));
                    prop_assert_eq!(path.last().copied(), Some(t));
                    let mut cost = 0.0;
                    for hop in path.windows(2) {
                        let cheapest = graph
                            .out_edges(hop[0])
                            .filter(|edge| edge.to == hop[1])
                            .map(|edge| edge.weight)
                            .fold(f64::INFINITY, f64::min);
                        cost += cheapest;
                    }
                    prop_assert_eq!(cost, expected);
                }
            }
        }
    }
}
