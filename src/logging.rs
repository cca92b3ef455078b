//! 日志初始化
//!
//! 日志统一输出到 stderr，stdout 只留给报告内容

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// 日志过滤环境变量（RUST_LOG 未设置时生效）
pub const LOG_ENV: &str = "MILEGRAPH_LOG";

/// 默认过滤级别
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "milegraph=debug"
    } else {
        "milegraph=warn"
    }
}

/// 初始化 tracing 订阅器
///
/// 过滤规则优先级：RUST_LOG > MILEGRAPH_LOG > `-v` 开关
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
