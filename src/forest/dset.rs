//! 不相交集合森林：迭代式路径压缩与按秩合并。
//!
//! 不变式：从任一顶点沿父指针出发总会终止于自指的根。每次 `find`
//! 之后，路径上的所有顶点都直接指向根。
use crate::forest::ids::VertexId;
use crate::forest::index_vec::IndexVec;

/// Partition of `0..vertices` into disjoint classes.
///
/// The parent and rank tables are private and exclusively owned by one
/// builder invocation; nothing is shared across calls.
pub struct DisjointSetForest {
    parent: IndexVec<VertexId, VertexId>,
    rank: IndexVec<VertexId, u32>,
}

impl DisjointSetForest {
    /// Every vertex starts as its own singleton class.
    pub fn new(vertices: u32) -> Self {
        Self {
            parent: IndexVec::from_fn(vertices as usize, |v| v),
            rank: IndexVec::from_elem(0, vertices as usize),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `vertex`'s class.
    ///
    /// Iterative two-pass walk: first locate the root, then repoint every
    /// vertex on the walked path directly at it. Amortized cost over a
    /// sequence of operations is inverse-Ackermann, given [`union`]
    /// attaches by rank.
    ///
    /// [`union`]: DisjointSetForest::union
    pub fn find(&mut self, vertex: VertexId) -> VertexId {
        let mut root = vertex;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Path compression.
        let mut curr = vertex;
        while curr != root {
            let next = self.parent[curr];
            self.parent[curr] = root;
            curr = next;
        }

        root
    }

    /// Merges the classes of two roots returned by [`find`].
    ///
    /// Callers pass two distinct roots; `union` does not re-find. The root
    /// of strictly smaller rank attaches under the other; on equal ranks
    /// the first argument becomes the parent and its rank increments.
    ///
    /// [`find`]: DisjointSetForest::find
    pub fn union(&mut self, a: VertexId, b: VertexId) {
        debug_assert!(a != b, "union of a class with itself");
        debug_assert!(
            self.parent[a] == a && self.parent[b] == b,
            "union operands must be roots"
        );

        if self.rank[a] < self.rank[b] {
            self.parent[a] = b;
        } else if self.rank[a] > self.rank[b] {
            self.parent[b] = a;
        } else {
            self.parent[b] = a;
            self.rank[a] += 1;
        }
    }

    /// `find` on both vertices, then true iff they share a representative.
    pub fn same_class(&mut self, a: VertexId, b: VertexId) -> bool {
        self.find(a) == self.find(b)
    }
}
