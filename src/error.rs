//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// 里程表格式错误；`line` 为 1 起始的源行号，0 表示与具体行无关
    #[error("里程表格式错误 (第 {line} 行): {reason}")]
    MalformedChart { line: usize, reason: String },

    #[error("城市不存在: {0}")]
    CityNotFound(String),

    #[error("不可达: {from} -> {to}")]
    NoPath { from: String, to: String },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedChart {
            line,
            reason: reason.into(),
        }
    }
}
