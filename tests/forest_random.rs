//! 随机输入不变式检验：以字节串解码为图，检查森林的全部不变式。
use RustMSF::forest::{DisjointSetForest, Edge, Graph, minimum_spanning_forest};
use rand::Rng;
use rand::seq::SliceRandom;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Decodes an opaque byte string into a graph: the first byte is the
/// vertex count clamped to at least 2, each following 3-byte group is a
/// candidate edge (endpoints taken modulo the vertex count, weight the
/// raw byte value). Self-loops are discarded. Trailing bytes that do not
/// fill a group are ignored.
fn decode_graph(data: &[u8]) -> Option<Graph> {
    let (&first, raw_edges) = data.split_first()?;
    let vertices = u32::from(first).max(2);

    let mut edges = Vec::new();
    for chunk in raw_edges.chunks_exact(3) {
        let source = u32::from(chunk[0]) % vertices;
        let dest = u32::from(chunk[1]) % vertices;
        if source != dest {
            edges.push(Edge::new(source, dest, i64::from(chunk[2])));
        }
    }

    Some(Graph::with_edges(vertices, edges))
}

fn has_cycle(vertices: u32, edges: &[Edge]) -> bool {
    let mut dset = DisjointSetForest::new(vertices);
    for edge in edges {
        let root_a = dset.find(edge.source);
        let root_b = dset.find(edge.dest);
        if root_a == root_b {
            return true;
        }
        dset.union(root_a, root_b);
    }
    false
}

/// Number of connected components of the full input graph.
fn component_count(graph: &Graph) -> u32 {
    let mut dset = DisjointSetForest::new(graph.vertices);
    let mut classes = graph.vertices;
    for edge in &graph.edges {
        let root_a = dset.find(edge.source);
        let root_b = dset.find(edge.dest);
        if root_a != root_b {
            dset.union(root_a, root_b);
            classes -= 1;
        }
    }
    classes
}

#[test]
fn seed_corpus_case() {
    init_logger();

    // The small dense graph from the scenario table, in byte form.
    let data = [4u8, 0, 1, 10, 0, 2, 6, 0, 3, 5, 1, 3, 15, 2, 3, 4];
    let graph = decode_graph(&data).unwrap();
    let forest = minimum_spanning_forest(graph).unwrap();

    assert_eq!(forest.total_weight, 19);
    assert_eq!(forest.edge_count(), 3);
}

#[test]
fn random_byte_graphs_uphold_invariants() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..200 {
        let len = rng.random_range(1..=512);
        let mut data = vec![0u8; len];
        rng.fill(&mut data[..]);

        let Some(graph) = decode_graph(&data) else {
            continue;
        };

        let forest = minimum_spanning_forest(graph.clone()).unwrap();

        // Never more than V - 1 accepted edges.
        assert!(forest.edge_count() <= graph.vertices as usize - 1);

        // Total weight is the exact sum of the accepted edges.
        let sum: i64 = forest.edges.iter().map(|edge| edge.weight).sum();
        assert_eq!(forest.total_weight, sum);

        // The forest is acyclic.
        assert!(
            !has_cycle(graph.vertices, &forest.edges),
            "cycle in forest for input {data:?}"
        );

        // One spanning tree per component: V - k edges in total.
        assert_eq!(
            forest.edge_count() as u32,
            graph.vertices - component_count(&graph)
        );
    }
}

#[test]
fn total_weight_is_invariant_under_input_order() {
    init_logger();
    let mut rng = rand::rng();

    for _ in 0..50 {
        let vertices = rng.random_range(2..64u32);
        let mut edges: Vec<Edge> = (0..rng.random_range(0..256))
            .map(|_| {
                Edge::new(
                    rng.random_range(0..vertices),
                    rng.random_range(0..vertices),
                    rng.random_range(1..100i64),
                )
            })
            .filter(|edge| !edge.is_loop())
            .collect();

        let expected = minimum_spanning_forest(Graph::with_edges(vertices, edges.clone()))
            .unwrap()
            .total_weight;

        for _ in 0..4 {
            edges.shuffle(&mut rng);
            let total = minimum_spanning_forest(Graph::with_edges(vertices, edges.clone()))
                .unwrap()
                .total_weight;
            assert_eq!(total, expected);
        }
    }
}
