//! 图静态结构元素：顶点计数与带权边多重集。
use serde::{Deserialize, Serialize};

use crate::forest::ids::VertexId;

pub type Weight = i64;

/// A weighted undirected edge. The endpoints are conceptually unordered
/// but stored with fixed field order.
///
/// Both endpoints must lie in `0..vertices` of the graph the edge belongs
/// to; the forest builder rejects graphs that violate this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: VertexId,
    pub dest: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub const fn new(source: u32, dest: u32, weight: Weight) -> Self {
        Self {
            source: VertexId::new(source),
            dest: VertexId::new(dest),
            weight,
        }
    }

    /// Both endpoints are the same vertex. Such edges are valid input and
    /// always rejected by the forest builder.
    pub const fn is_loop(&self) -> bool {
        self.source.raw() == self.dest.raw()
    }
}

/// A weighted undirected graph: a vertex count and an edge multiset.
/// Duplicated and parallel edges are valid input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub vertices: u32,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertices: u32) -> Self {
        Self {
            vertices,
            edges: Vec::new(),
        }
    }

    pub fn with_edges(vertices: u32, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn add_edge(&mut self, source: u32, dest: u32, weight: Weight) {
        self.edges.push(Edge::new(source, dest, weight));
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
