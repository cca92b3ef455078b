//! 城市注册表
//!
//! 按表头顺序保存唯一的城市名，下标即城市 ID

use crate::graph::city::{City, CityId};
use indexmap::IndexSet;

/// 城市注册表
#[derive(Debug, Clone, Default)]
pub struct CityRegistry {
    /// 城市名（插入顺序即下标）
    names: IndexSet<String>,
}

impl CityRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册城市，名称重复时返回 None
    pub fn insert(&mut self, name: impl Into<String>) -> Option<CityId> {
        let (index, inserted) = self.names.insert_full(name.into());
        inserted.then(|| CityId::new(index))
    }

    /// 通过名称查找城市 ID
    pub fn get_id(&self, name: &str) -> Option<CityId> {
        self.names.get_index_of(name).map(CityId::new)
    }

    /// 获取城市名称
    pub fn name(&self, id: CityId) -> Option<&str> {
        self.names.get_index(id.index()).map(String::as_str)
    }

    /// 获取城市
    pub fn get(&self, id: CityId) -> Option<City> {
        self.name(id).map(|name| City::new(id, name))
    }

    /// 按注册顺序遍历 (ID, 名称)
    pub fn iter(&self) -> impl Iterator<Item = (CityId, &str)> + '_ {
        self.names
            .iter()
            .enumerate()
            .map(|(i, name)| (CityId::new(i), name.as_str()))
    }

    /// 城市数量
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
