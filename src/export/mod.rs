//! Graphviz 导出模块
//!
//! 将里程图渲染为 dot 文本：每个城市一个节点，每条规范边一条连线，
//! 连线颜色按里程分段

use crate::error::Result;
use crate::graph::{Graph, Mileage};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// 固定的节点与连线样式
const STYLE: &[&str] = &[
    "ratio = 1.0;",
    "node [style=filled]",
    "node [fillcolor=darkslateblue]",
    "node [fixedsize=true]",
    "node [shape=oval]",
    "node [width=6]",
    "node [height=4]",
    "node [fontname=Arial]",
    "node [fontsize=60]",
    "node [fontcolor=white]",
    "edge [dir=none]",
    "edge [penwidth=24]",
    "edge [fontname=Arial]",
    "edge [fontsize=110]",
];

const INDENT: &str = "    ";

/// 里程分段（上界不含）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    /// < 100
    Green,
    /// 100..200
    Blue,
    /// 200..300
    Magenta,
    /// >= 300
    Red,
}

impl Band {
    pub fn from_mileage(mileage: Mileage) -> Self {
        match mileage {
            0..=99 => Band::Green,
            100..=199 => Band::Blue,
            200..=299 => Band::Magenta,
            _ => Band::Red,
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Band::Green => "green",
            Band::Blue => "blue",
            Band::Magenta => "magenta",
            Band::Red => "red",
        }
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.color())
    }
}

/// dot 格式渲染器
#[derive(Debug, Clone)]
pub struct DotFormatter {
    name: String,
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self {
            name: "BST".to_string(),
        }
    }
}

impl DotFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置 digraph 名称
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// 渲染为文本行
    pub fn render(&self, graph: &Graph) -> Vec<String> {
        let mut lines = Vec::with_capacity(STYLE.len() + graph.city_count() + graph.edge_count() + 2);
        lines.push(format!("digraph {} {{", self.name));
        lines.extend(STYLE.iter().map(|s| format!("{}{}", INDENT, s)));

        for city in graph.cities() {
            lines.push(format!(
                "{}{} [label=\"{}\"];",
                INDENT,
                city.id(),
                escape(city.name())
            ));
        }

        // 规范边保证每条无向连线只输出一次
        for edge in graph.canonical_edges().iter().filter(|e| e.is_canonical()) {
            lines.push(format!(
                "{}{} -> {} [label=\"{}\" color=\"{}\"]",
                INDENT,
                edge.from(),
                edge.to(),
                edge.mileage(),
                Band::from_mileage(edge.mileage())
            ));
        }

        lines.push("}".to_string());
        debug!(
            nodes = graph.city_count(),
            edges = graph.edge_count(),
            "dot 渲染完成"
        );
        lines
    }

    /// 渲染并写入文件
    pub fn write<P: AsRef<Path>>(&self, graph: &Graph, path: P) -> Result<()> {
        crate::io::write_lines(path, &self.render(graph))
    }
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

/// 使用默认样式渲染
pub fn render(graph: &Graph) -> Vec<String> {
    DotFormatter::new().render(graph)
}
