//! 报告打印器
//!
//! 提供表格文本和 JSON 两种输出

use super::{GraphStats, Report, TraversalSection};
use crate::algorithm::{PairPath, TraversalOrder};
use prettytable::{format, row, Cell, Row, Table};

/// 打印模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintMode {
    /// 表格模式
    Table,
    /// JSON
    Json,
}

/// 报告打印器
pub struct Printer {
    mode: PrintMode,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new(PrintMode::Table)
    }
}

impl Printer {
    pub fn new(mode: PrintMode) -> Self {
        Self { mode }
    }

    /// 打印完整报告
    pub fn print_report(&self, report: &Report) -> serde_json::Result<String> {
        match self.mode {
            PrintMode::Json => report.to_json(),
            PrintMode::Table => {
                let mut out = String::new();
                out.push_str(&self.format_stats(&report.stats));
                out.push('\n');
                out.push_str(&self.format_traversal(&report.depth_first));
                out.push('\n');
                out.push_str(&self.format_traversal(&report.breadth_first));
                if !report.shortest_paths.is_empty() {
                    out.push('\n');
                    out.push_str(&self.format_paths(&report.shortest_paths));
                }
                Ok(out)
            }
        }
    }

    /// 图统计表
    fn format_stats(&self, stats: &GraphStats) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["Property", "Value"]);
        table.add_row(row!["City Count", stats.cities.to_string()]);
        table.add_row(row!["Edge Count", stats.edges.to_string()]);
        table.add_row(row!["Total Mileage", stats.total_mileage.to_string()]);
        if let Some(import) = &stats.import {
            table.add_row(row!["Data Rows", import.data_rows.to_string()]);
            table.add_row(row!["Aligned Rows", import.aligned_rows.to_string()]);
            table.add_row(row!["Packed Rows", import.packed_rows.to_string()]);
        }
        table.to_string()
    }

    /// 遍历顺序，一行一个城市
    fn format_traversal(&self, section: &TraversalSection) -> String {
        let title = match section.order {
            TraversalOrder::DepthFirst => "Depth First Search",
            TraversalOrder::BreadthFirst => "Breadth First Search",
        };

        let mut out = format!("{} (from {}):\n", title, section.start);
        for city in &section.cities {
            out.push_str(city);
            out.push('\n');
        }
        out
    }

    /// 最短路径表
    fn format_paths(&self, paths: &[PairPath]) -> String {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);
        table.set_titles(row!["From", "To", "Mileage", "Route"]);

        for pair in paths {
            let (mileage, route) = match &pair.path {
                Some(path) => (path.distance.to_string(), path.names().join(" -> ")),
                None => ("-".to_string(), "不可达".to_string()),
            };
            table.add_row(Row::new(vec![
                Cell::new(pair.from.name()),
                Cell::new(pair.to.name()),
                Cell::new(&mileage),
                Cell::new(&route),
            ]));
        }

        format!("Shortest Paths:\n{}", table)
    }
}
