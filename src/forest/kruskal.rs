//! Kruskal 扫描：排序后单趟生成最小生成森林。
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forest::dset::DisjointSetForest;
use crate::forest::ids::VertexId;
use crate::forest::structure::{Edge, Graph, Weight};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("edge {edge} references {vertex:?}, outside the graph's {vertices} vertices")]
    VertexOutOfBounds {
        edge: usize,
        vertex: VertexId,
        vertices: u32,
    },
}

/// The edges accepted by the scan, in acceptance order (non-decreasing
/// weight), and their exact weight sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest {
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl SpanningForest {
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// Computes a minimum spanning forest of `graph`.
///
/// Consumes the graph and sorts its edge vector in place; callers that
/// need the original edge order clone the graph first. The sort has no
/// secondary key, so which edge wins among equal weights is unspecified
/// (the total weight is not affected).
///
/// A disconnected graph is not an error: the result holds one minimum
/// spanning tree per connected component, `V - k` edges in total. Weight
/// accumulation is unchecked `i64` arithmetic.
///
/// Fails if any edge references a vertex outside `0..graph.vertices`.
pub fn minimum_spanning_forest(mut graph: Graph) -> Result<SpanningForest, GraphError> {
    for (index, edge) in graph.edges.iter().enumerate() {
        for vertex in [edge.source, edge.dest] {
            if vertex.raw() >= graph.vertices {
                return Err(GraphError::VertexOutOfBounds {
                    edge: index,
                    vertex,
                    vertices: graph.vertices,
                });
            }
        }
    }

    // A spanning forest never holds more than V - 1 edges; clamp so that
    // V = 0 does not underflow.
    let bound = (graph.vertices as usize).saturating_sub(1);
    let candidates = graph.edges.len();

    graph.edges.sort_unstable_by_key(|edge| edge.weight);

    let mut dset = DisjointSetForest::new(graph.vertices);
    let mut accepted: Vec<Edge> = Vec::with_capacity(bound);
    let mut total_weight: Weight = 0;

    for edge in graph.edges {
        // The forest is complete once the bound is hit.
        if accepted.len() == bound {
            break;
        }

        let root_a = dset.find(edge.source);
        let root_b = dset.find(edge.dest);
        if root_a != root_b {
            total_weight += edge.weight;
            accepted.push(edge);
            dset.union(root_a, root_b);
        }
    }

    log::debug!(
        "kruskal: accepted {} of {} candidate edges, total weight {}",
        accepted.len(),
        candidates,
        total_weight
    );

    Ok(SpanningForest {
        edges: accepted,
        total_weight,
    })
}

impl Graph {
    /// Method form of [`minimum_spanning_forest`]; same consuming contract.
    pub fn minimum_spanning_forest(self) -> Result<SpanningForest, GraphError> {
        minimum_spanning_forest(self)
    }
}
