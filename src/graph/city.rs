//! 城市定义
//!
//! 城市由表头中的名称和加载时分配的稳定下标组成

use serde::{Deserialize, Serialize};
use std::fmt;

/// 城市 ID（即注册表中的下标，按表头出现顺序分配）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CityId(pub usize);

impl CityId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for CityId {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node{}", self.0)
    }
}

/// 城市
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    /// 城市 ID
    id: CityId,
    /// 城市名称
    name: String,
}

impl City {
    /// 创建城市
    pub fn new(id: CityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// 获取城市 ID
    pub fn id(&self) -> CityId {
        self.id
    }

    /// 获取城市名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
