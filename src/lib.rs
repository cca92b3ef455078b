//! MileGraph - 城市里程图引擎
//!
//! 从逗号分隔的里程表构建无向里程图，支持：
//! - 深度优先 / 广度优先遍历
//! - Dijkstra 最短路径（单对、单源、全部城市对）
//! - 按里程分段着色的 Graphviz 导出

pub mod algorithm;
pub mod cli;
pub mod error;
pub mod export;
pub mod graph;
pub mod import;
pub mod io;
pub mod logging;

// 重导出常用类型
pub use algorithm::{PathFinder, PathResult, Traversal, TraversalOrder};
pub use error::{Error, Result};
pub use export::{render, Band, DotFormatter};
pub use graph::{City, CityId, Edge, Graph, GraphBuilder, Mileage};
pub use import::{load_chart, load_chart_file, ChartLoader};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
