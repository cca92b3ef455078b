//! 命令行报告
//!
//! 读入里程表后依次给出：图统计、深度优先遍历、广度优先遍历、全部城市对的最短路径

mod printer;

pub use printer::{PrintMode, Printer};

use crate::algorithm::{PairPath, PathFinder, Traversal, TraversalOrder};
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::import::ImportStats;
use serde::Serialize;

/// 报告配置
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// 深度优先遍历起点（默认第一个城市）
    pub dfs_from: Option<String>,
    /// 广度优先遍历起点（默认第一个城市）
    pub bfs_from: Option<String>,
    /// 是否计算全部城市对的最短路径
    pub all_pairs: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            dfs_from: None,
            bfs_from: None,
            all_pairs: true,
        }
    }
}

/// 图统计
#[derive(Debug, Clone, Serialize)]
pub struct GraphStats {
    pub cities: usize,
    pub edges: usize,
    pub total_mileage: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import: Option<ImportStats>,
}

/// 一次遍历的结果
#[derive(Debug, Clone, Serialize)]
pub struct TraversalSection {
    pub order: TraversalOrder,
    pub start: String,
    pub cities: Vec<String>,
}

/// 完整报告
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub stats: GraphStats,
    pub depth_first: TraversalSection,
    pub breadth_first: TraversalSection,
    pub shortest_paths: Vec<PairPath>,
}

impl Report {
    /// 按配置生成报告
    pub fn build(graph: &Graph, config: &ReportConfig, import: Option<ImportStats>) -> Result<Self> {
        let first = graph
            .cities()
            .next()
            .map(|c| c.name().to_string())
            .ok_or_else(|| Error::CityNotFound("(空图)".to_string()))?;

        let traversal = Traversal::new(graph);
        let section = |order: TraversalOrder, start: Option<&str>| -> Result<TraversalSection> {
            let start = start.unwrap_or(&first).to_string();
            let cities = traversal
                .visit(order, &start)?
                .into_iter()
                .map(str::to_string)
                .collect();
            Ok(TraversalSection {
                order,
                start,
                cities,
            })
        };

        let depth_first = section(TraversalOrder::DepthFirst, config.dfs_from.as_deref())?;
        let breadth_first = section(TraversalOrder::BreadthFirst, config.bfs_from.as_deref())?;

        let shortest_paths = if config.all_pairs {
            PathFinder::new(graph).all_pairs()
        } else {
            Vec::new()
        };

        Ok(Self {
            stats: GraphStats {
                cities: graph.city_count(),
                edges: graph.edge_count(),
                total_mileage: graph.total_mileage(),
                import,
            },
            depth_first,
            breadth_first,
            shortest_paths,
        })
    }

    /// JSON 格式
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
