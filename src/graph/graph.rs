//! 图数据结构
//!
//! 里程图在构建阶段由 [`GraphBuilder`] 组装，构建完成后只读

use super::city::{City, CityId};
use super::edge::{Edge, Mileage};
use super::index::CityRegistry;
use crate::error::{Error, Result};

/// 里程图构建器
#[derive(Debug, Default)]
pub struct GraphBuilder {
    /// 城市注册表
    registry: CityRegistry,
    /// 每个城市的邻接边
    adjacency: Vec<Vec<Edge>>,
    /// 规范边（from < to）
    canonical: Vec<Edge>,
}

impl GraphBuilder {
    /// 创建构建器
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加城市，名称重复时返回 None
    pub fn add_city(&mut self, name: impl Into<String>) -> Option<CityId> {
        let id = self.registry.insert(name)?;
        self.adjacency.push(Vec::new());
        Some(id)
    }

    /// 添加两城之间的里程
    ///
    /// 生成一条规范边和两条邻接记录（每个端点各一条，端点互换）
    pub fn add_mileage(&mut self, a: CityId, b: CityId, mileage: Mileage) -> Result<()> {
        for id in [a, b] {
            if id.index() >= self.adjacency.len() {
                return Err(Error::CityNotFound(format!("#{}", id.index())));
            }
        }
        if a == b {
            return Err(Error::malformed(
                0,
                format!("城市 {} 不能与自身相连", self.registry.name(a).unwrap_or_default()),
            ));
        }

        let edge = if a < b {
            Edge::new(a, b, mileage)
        } else {
            Edge::new(b, a, mileage)
        };
        self.canonical.push(edge);
        self.adjacency[edge.from().index()].push(edge);
        self.adjacency[edge.to().index()].push(edge.reversed());

        Ok(())
    }

    /// 当前城市数量
    pub fn city_count(&self) -> usize {
        self.registry.len()
    }

    /// 获取已注册城市的名称
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.registry.name(id)
    }

    /// 完成构建：邻接表与规范边按里程升序稳定排序
    pub fn build(mut self) -> Graph {
        for edges in &mut self.adjacency {
            edges.sort_by_key(|e| e.mileage());
        }
        self.canonical.sort_by_key(|e| e.mileage());

        Graph {
            registry: self.registry,
            adjacency: self.adjacency,
            canonical: self.canonical,
        }
    }
}

/// 里程图（只读）
#[derive(Debug, Clone)]
pub struct Graph {
    registry: CityRegistry,
    adjacency: Vec<Vec<Edge>>,
    canonical: Vec<Edge>,
}

impl Graph {
    /// 创建构建器
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    // ==================== 城市查询 ====================

    /// 城市注册表
    pub fn registry(&self) -> &CityRegistry {
        &self.registry
    }

    /// 获取城市
    pub fn city(&self, id: CityId) -> Option<City> {
        self.registry.get(id)
    }

    /// 获取城市名称
    pub fn city_name(&self, id: CityId) -> Option<&str> {
        self.registry.name(id)
    }

    /// 通过名称查找城市
    pub fn find(&self, name: &str) -> Result<CityId> {
        self.registry
            .get_id(name)
            .ok_or_else(|| Error::CityNotFound(name.to_string()))
    }

    /// 按注册顺序遍历所有城市
    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.registry.iter().map(|(id, name)| City::new(id, name))
    }

    /// 城市数量
    pub fn city_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }

    // ==================== 边查询 ====================

    /// 城市的邻接边（按里程升序）
    pub fn edges_from(&self, id: CityId) -> &[Edge] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// 城市的邻居（按里程升序）
    pub fn neighbors(&self, id: CityId) -> impl Iterator<Item = CityId> + '_ {
        self.edges_from(id).iter().map(Edge::to)
    }

    /// 规范边（按里程升序，同里程保持插入顺序）
    pub fn canonical_edges(&self) -> &[Edge] {
        &self.canonical
    }

    /// 两城之间的直接里程
    pub fn mileage_between(&self, a: CityId, b: CityId) -> Option<Mileage> {
        self.edges_from(a)
            .iter()
            .find(|e| e.to() == b)
            .map(Edge::mileage)
    }

    /// 规范边数量
    pub fn edge_count(&self) -> usize {
        self.canonical.len()
    }

    /// 所有规范边的里程之和
    pub fn total_mileage(&self) -> u64 {
        self.canonical.iter().map(|e| u64::from(e.mileage())).sum()
    }
}
