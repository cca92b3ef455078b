//! 图算法模块
//!
//! 包含深度/广度优先遍历和最短路径算法

mod shortest_path;
mod traversal;

pub use shortest_path::{PairPath, PathFinder, PathResult, ShortestPathTree};
pub use traversal::{Traversal, TraversalOrder};
