//! 图遍历算法
//!
//! 深度优先与广度优先遍历，邻居按里程升序访问

use crate::error::Result;
use crate::graph::{CityId, Graph};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// 遍历顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TraversalOrder {
    /// 深度优先（先序）
    DepthFirst,
    /// 广度优先（层序）
    BreadthFirst,
}

/// 图遍历器
///
/// 只借用图，可以反复调用，不会修改图
pub struct Traversal<'g> {
    graph: &'g Graph,
}

impl<'g> Traversal<'g> {
    /// 创建遍历器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 从指定城市开始遍历，返回访问顺序的城市名
    pub fn visit(&self, order: TraversalOrder, start: &str) -> Result<Vec<&'g str>> {
        let start = self.graph.find(start)?;
        let ids = match order {
            TraversalOrder::DepthFirst => self.depth_first_ids(start),
            TraversalOrder::BreadthFirst => self.breadth_first_ids(start),
        };
        Ok(self.names(&ids))
    }

    /// 深度优先遍历
    pub fn depth_first(&self, start: &str) -> Result<Vec<&'g str>> {
        self.visit(TraversalOrder::DepthFirst, start)
    }

    /// 广度优先遍历
    pub fn breadth_first(&self, start: &str) -> Result<Vec<&'g str>> {
        self.visit(TraversalOrder::BreadthFirst, start)
    }

    /// 深度优先遍历（按 ID）
    ///
    /// 用显式栈模拟递归：栈帧保存城市和下一条待检查的邻接边位置，
    /// 输出顺序与递归先序遍历一致
    pub fn depth_first_ids(&self, start: CityId) -> Vec<CityId> {
        let mut visited = vec![false; self.graph.city_count()];
        let mut order = Vec::new();
        if start.index() >= visited.len() {
            return order;
        }

        let mut stack: Vec<(CityId, usize)> = vec![(start, 0)];
        visited[start.index()] = true;
        order.push(start);

        while let Some(top) = stack.len().checked_sub(1) {
            let (city, cursor) = stack[top];
            match self.graph.edges_from(city).get(cursor) {
                Some(edge) => {
                    stack[top].1 += 1;
                    let next = edge.to();
                    if !visited[next.index()] {
                        visited[next.index()] = true;
                        order.push(next);
                        stack.push((next, 0));
                    }
                }
                None => {
                    stack.pop();
                }
            }
        }

        order
    }

    /// 广度优先遍历（按 ID）
    ///
    /// 入队时即标记已访问，同一城市不会重复入队
    pub fn breadth_first_ids(&self, start: CityId) -> Vec<CityId> {
        let mut visited = vec![false; self.graph.city_count()];
        let mut order = Vec::new();
        if start.index() >= visited.len() {
            return order;
        }

        let mut queue = VecDeque::new();
        visited[start.index()] = true;
        queue.push_back(start);

        while let Some(city) = queue.pop_front() {
            order.push(city);
            for next in self.graph.neighbors(city) {
                if !visited[next.index()] {
                    visited[next.index()] = true;
                    queue.push_back(next);
                }
            }
        }

        order
    }

    fn names(&self, ids: &[CityId]) -> Vec<&'g str> {
        ids.iter()
            .filter_map(|&id| self.graph.city_name(id))
            .collect()
    }
}
