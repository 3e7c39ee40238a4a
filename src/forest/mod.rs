//! # 最小生成森林核心（Kruskal + 不相交集合森林）
//!
//! 设无向带权图 `G = (V, E)`。将 `E` 按权非降序排序后做单趟扫描：
//! 当且仅当一条边的两个端点位于不同的不相交集合类时接受该边，
//! 接受后合并两类。不相交集合森林采用迭代式路径压缩与按秩合并，
//! 一次扫描的摊还成本为逆 Ackermann 级，整体成本由排序主导。
//!
//! * 接受的边数不超过 `max(|V| - 1, 0)`，达到上界立即停止扫描；
//! * 自环恒被拒绝，平行边中只有最先连通两端的那条被接受；
//! * 非连通图得到森林（每个连通分量一棵最小生成树），不是错误；
//! * 等权边之间的取舍未定义（排序无次级键），但总权重不受影响。
//!
//! ## 示例
//!
//! ```rust
//! use RustMSF::forest::*;
//!
//! let mut graph = Graph::new(3);
//! graph.add_edge(0, 1, 1);
//! graph.add_edge(1, 2, 2);
//! graph.add_edge(0, 2, 3);
//!
//! let forest = minimum_spanning_forest(graph).unwrap();
//! assert_eq!(forest.total_weight, 3);
//! assert_eq!(forest.edge_count(), 2);
//! ```

pub mod dset;
pub mod ids;
pub mod index_vec;
pub mod io;
pub mod kruskal;
pub mod structure;

pub use dset::DisjointSetForest;
pub use ids::VertexId;
pub use index_vec::{Idx, IndexVec};
pub use io::{IoError, to_json_string, write_json};
pub use kruskal::{GraphError, SpanningForest, minimum_spanning_forest};
pub use structure::{Edge, Graph, Weight};
