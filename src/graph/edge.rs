//! 边定义
//!
//! 里程边在语义上是无向的，存储上拆成两条有向记录分别挂在两个端点的邻接表中

use crate::graph::city::CityId;
use serde::{Deserialize, Serialize};

/// 里程（英里）
pub type Mileage = u32;

/// 有向里程边
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// 源城市
    from: CityId,
    /// 目标城市
    to: CityId,
    /// 里程
    mileage: Mileage,
}

impl Edge {
    /// 创建新边
    pub fn new(from: CityId, to: CityId, mileage: Mileage) -> Self {
        Self { from, to, mileage }
    }

    /// 获取源城市 ID
    pub fn from(&self) -> CityId {
        self.from
    }

    /// 获取目标城市 ID
    pub fn to(&self) -> CityId {
        self.to
    }

    /// 获取里程
    pub fn mileage(&self) -> Mileage {
        self.mileage
    }

    /// 反向边（交换端点，里程不变）
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from, self.mileage)
    }

    /// 是否为规范边（下标小的端点在前）
    pub fn is_canonical(&self) -> bool {
        self.from < self.to
    }
}
