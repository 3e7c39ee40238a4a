//! RustMSF：带权无向图的最小生成森林（Kruskal）。
//!
//! 核心在 [`forest`] 模块；常用类型与入口函数在 crate 根重导出。
#![allow(non_snake_case)]

pub mod forest;

pub use forest::{
    DisjointSetForest, Edge, Graph, GraphError, SpanningForest, VertexId, Weight,
    minimum_spanning_forest,
};
