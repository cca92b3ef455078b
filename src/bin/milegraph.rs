//! MileGraph 命令行工具
//!
//! 读取里程表，写出 Graphviz 文件，并打印遍历与最短路径报告

use anyhow::Context;
use clap::Parser;
use milegraph::cli::{PrintMode, Printer, Report, ReportConfig};
use milegraph::export::DotFormatter;
use milegraph::import::ChartLoader;
use milegraph::{io, logging};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "milegraph")]
#[command(version, about = "城市里程图：遍历、最短路径与 Graphviz 导出")]
struct Args {
    /// 里程表文件（CSV）
    chart: PathBuf,

    /// 输出的 Graphviz 文件
    graph: PathBuf,

    /// 深度优先遍历起点（默认第一个城市）
    #[arg(long, value_name = "CITY")]
    dfs_from: Option<String>,

    /// 广度优先遍历起点（默认第一个城市）
    #[arg(long, value_name = "CITY")]
    bfs_from: Option<String>,

    /// 不计算全部城市对的最短路径
    #[arg(long)]
    no_paths: bool,

    /// 数据行首字段必须与表头城市名一致
    #[arg(long)]
    strict_names: bool,

    /// 以 JSON 输出报告
    #[arg(long)]
    json: bool,

    /// 输出调试日志
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = logging::init_tracing(args.verbose) {
        eprintln!("警告: 日志初始化失败: {}", e);
    }

    info!(path = %args.chart.display(), "读取里程表");
    let lines = io::read_lines(&args.chart)
        .with_context(|| format!("无法读取里程表: {}", args.chart.display()))?;
    let (graph, stats) = ChartLoader::new()
        .with_strict_names(args.strict_names)
        .load_with_stats(lines)
        .with_context(|| format!("无法解析里程表: {}", args.chart.display()))?;

    info!(path = %args.graph.display(), "写出 Graphviz 文件");
    DotFormatter::new()
        .write(&graph, &args.graph)
        .with_context(|| format!("无法写入图文件: {}", args.graph.display()))?;

    let config = ReportConfig {
        dfs_from: args.dfs_from,
        bfs_from: args.bfs_from,
        all_pairs: !args.no_paths,
    };
    let report = Report::build(&graph, &config, Some(stats))?;

    let mode = if args.json {
        PrintMode::Json
    } else {
        PrintMode::Table
    };
    println!("{}", Printer::new(mode).print_report(&report)?);

    Ok(())
}
