//! 里程表导入模块
//!
//! 解析逗号分隔的里程表，构建只读里程图
//!
//! 表头行的每个非空字段是一个城市名；之后每一行对应一个城市，
//! 只读取上三角部分（目标下标大于当前行下标）。数据行支持两种布局：
//! - 对齐布局：第 `j + 1` 个字段是到城市 `j` 的里程，下三角与对角线忽略
//! - 紧凑布局：第 `1..N-i` 个字段依次是到城市 `i+1..N-1` 的里程
//!
//! 整张表使用同一种布局，由第一行数据决定；数据行必须恰好 N 行。

use crate::error::{Error, Result};
use crate::graph::{CityId, Graph, GraphBuilder, Mileage};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

/// 数据行布局
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ChartLayout {
    /// 按列对齐（完整矩阵宽度）
    Aligned,
    /// 只含上三角数值
    Packed,
}

/// 导入统计
#[derive(Debug, Default, Clone, Serialize)]
pub struct ImportStats {
    pub cities: usize,
    pub edges: usize,
    pub data_rows: usize,
    pub aligned_rows: usize,
    pub packed_rows: usize,
}

/// 里程表加载器
#[derive(Debug, Clone, Default)]
pub struct ChartLoader {
    strict_names: bool,
}

impl ChartLoader {
    /// 创建加载器
    pub fn new() -> Self {
        Self::default()
    }

    /// 数据行首字段必须与表头城市名一致（默认只记录警告）
    pub fn with_strict_names(mut self, strict: bool) -> Self {
        self.strict_names = strict;
        self
    }

    /// 从文本行构建里程图
    pub fn load<I, S>(&self, lines: I) -> Result<Graph>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.load_with_stats(lines).map(|(graph, _)| graph)
    }

    /// 从文本行构建里程图并返回导入统计
    pub fn load_with_stats<I, S>(&self, lines: I) -> Result<(Graph, ImportStats)>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // (行号, 字段)，跳过空行
        let mut rows = Vec::new();
        for (i, line) in lines.into_iter().enumerate() {
            let line = line.as_ref();
            if line.trim().is_empty() {
                continue;
            }
            rows.push((i + 1, split_fields(line, i + 1)?));
        }

        let mut rows = rows.into_iter();
        let (header_line, header) = rows
            .next()
            .ok_or_else(|| Error::malformed(0, "缺少表头行"))?;

        let mut builder = GraphBuilder::new();
        for name in header.into_iter().filter(|f| !f.is_empty()) {
            if builder.add_city(name.as_str()).is_none() {
                return Err(Error::malformed(
                    header_line,
                    format!("城市名重复: {}", name),
                ));
            }
        }

        let n = builder.city_count();
        if n == 0 {
            return Err(Error::malformed(header_line, "表头中没有城市"));
        }

        let data: Vec<(usize, Vec<String>)> = rows.collect();
        if data.len() > n {
            return Err(Error::malformed(
                data[n].0,
                format!("数据行过多: {} 个城市, {} 行数据", n, data.len()),
            ));
        }
        if data.len() < n {
            return Err(Error::malformed(
                0,
                format!("数据行不足: {} 个城市, {} 行数据", n, data.len()),
            ));
        }

        // 布局由第一行数据决定，其余各行必须一致
        let layout = match data.first() {
            Some((line_no, fields)) if n > 1 => detect_layout(n, fields.len())
                .ok_or_else(|| short_row(n, 0, *line_no, fields.len(), None))?,
            _ => ChartLayout::Aligned,
        };

        let mut stats = ImportStats {
            cities: n,
            data_rows: data.len(),
            ..Default::default()
        };

        for (row, (line_no, fields)) in data.iter().enumerate() {
            self.check_row_name(&builder, row, *line_no, fields)?;

            let wanted = n - 1 - row;
            if wanted == 0 {
                continue;
            }

            let fits = match layout {
                ChartLayout::Aligned => fields.len() > n,
                ChartLayout::Packed => fields.len() == n - row,
            };
            if !fits {
                return Err(short_row(n, row, *line_no, fields.len(), Some(layout)));
            }

            match layout {
                ChartLayout::Aligned => stats.aligned_rows += 1,
                ChartLayout::Packed => stats.packed_rows += 1,
            }

            for to in (row + 1)..n {
                let offset = match layout {
                    ChartLayout::Aligned => to + 1,
                    ChartLayout::Packed => to - row,
                };
                let mileage = parse_mileage(&fields[offset], *line_no, || {
                    format!("{} -> {}", city_label(&builder, row), city_label(&builder, to))
                })?;
                builder.add_mileage(CityId::new(row), CityId::new(to), mileage)?;
                stats.edges += 1;
            }
        }

        let graph = builder.build();
        debug!(
            cities = stats.cities,
            edges = stats.edges,
            aligned = stats.aligned_rows,
            packed = stats.packed_rows,
            "里程表加载完成"
        );

        Ok((graph, stats))
    }

    fn check_row_name(
        &self,
        builder: &GraphBuilder,
        row: usize,
        line_no: usize,
        fields: &[String],
    ) -> Result<()> {
        let expected = city_label(builder, row);
        let found = fields.first().map(String::as_str).unwrap_or_default();
        if found.is_empty() || found == expected {
            return Ok(());
        }

        if self.strict_names {
            return Err(Error::malformed(
                line_no,
                format!("行首城市 '{}' 与表头 '{}' 不一致", found, expected),
            ));
        }
        warn!(line = line_no, expected, found, "行首城市名与表头不一致");
        Ok(())
    }
}

/// 由第一行数据的字段数判断布局；字段不足时返回 None
fn detect_layout(cities: usize, fields: usize) -> Option<ChartLayout> {
    if fields > cities {
        Some(ChartLayout::Aligned)
    } else if fields == cities {
        Some(ChartLayout::Packed)
    } else {
        None
    }
}

fn short_row(
    cities: usize,
    row: usize,
    line_no: usize,
    fields: usize,
    layout: Option<ChartLayout>,
) -> Error {
    let expected = match layout {
        Some(ChartLayout::Aligned) => format!("{} 个（对齐）", cities + 1),
        Some(ChartLayout::Packed) => format!("{} 个（紧凑）", cities - row),
        None => format!("{} 个（对齐）或 {} 个（紧凑）", cities + 1, cities - row),
    };
    Error::malformed(
        line_no,
        format!("字段数量不足: 需要 {}，实际 {} 个", expected, fields),
    )
}

fn split_fields(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(line.as_bytes());

    match reader.records().next() {
        Some(Ok(record)) => Ok(record.iter().map(str::to_string).collect()),
        Some(Err(e)) => Err(Error::malformed(line_no, e.to_string())),
        None => Ok(Vec::new()),
    }
}

fn parse_mileage<F>(field: &str, line_no: usize, pair: F) -> Result<Mileage>
where
    F: FnOnce() -> String,
{
    field.parse::<Mileage>().map_err(|_| {
        Error::malformed(
            line_no,
            format!("无效的里程 '{}' ({})", field, pair()),
        )
    })
}

fn city_label(builder: &GraphBuilder, index: usize) -> &str {
    builder.city_name(CityId::new(index)).unwrap_or_default()
}

/// 从文本行构建里程图
pub fn load_chart<I, S>(lines: I) -> Result<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    ChartLoader::new().load(lines)
}

/// 从里程表文件构建里程图
pub fn load_chart_file<P: AsRef<Path>>(path: P) -> Result<(Graph, ImportStats)> {
    let lines = crate::io::read_lines(path)?;
    ChartLoader::new().load_with_stats(lines)
}
