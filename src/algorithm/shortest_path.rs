//! 最短路径算法
//!
//! Dijkstra 算法（线性扫描选点，O(V²)）。里程非负，
//! 一个城市被定点后其距离不再变化。

use crate::error::{Error, Result};
use crate::graph::{City, CityId, Graph};
use rayon::prelude::*;
use serde::Serialize;
use tracing::trace;

/// 路径结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    /// 路径上的城市序列（含起点和终点）
    pub cities: Vec<City>,
    /// 总里程
    pub distance: u64,
}

impl PathResult {
    /// 路径经过的边数
    pub fn hops(&self) -> usize {
        self.cities.len().saturating_sub(1)
    }

    /// 路径上的城市名
    pub fn names(&self) -> Vec<&str> {
        self.cities.iter().map(City::name).collect()
    }
}

/// 城市对之间的最短路径（不可达时 `path` 为 None）
#[derive(Debug, Clone, Serialize)]
pub struct PairPath {
    pub from: City,
    pub to: City,
    pub path: Option<PathResult>,
}

/// 单源最短路径树
#[derive(Debug, Clone)]
pub struct ShortestPathTree<'g> {
    graph: &'g Graph,
    source: CityId,
    /// None 表示不可达
    dist: Vec<Option<u64>>,
    prev: Vec<Option<CityId>>,
}

impl<'g> ShortestPathTree<'g> {
    /// 起点
    pub fn source(&self) -> CityId {
        self.source
    }

    /// 到目标城市的最短里程
    pub fn distance(&self, to: CityId) -> Option<u64> {
        self.dist.get(to.index()).copied().flatten()
    }

    /// 沿前驱回溯出的路线（起点在前）
    pub fn route(&self, to: CityId) -> Option<Vec<CityId>> {
        self.distance(to)?;

        let mut route = vec![to];
        let mut current = to;
        while current != self.source {
            current = self.prev[current.index()]?;
            route.push(current);
        }
        route.reverse();
        Some(route)
    }

    /// 到目标城市的路径结果
    pub fn path_to(&self, to: CityId) -> Result<PathResult> {
        let no_path = || Error::NoPath {
            from: self.city_label(self.source),
            to: self.city_label(to),
        };

        let distance = self.distance(to).ok_or_else(no_path)?;
        let route = self.route(to).ok_or_else(no_path)?;
        let cities = route
            .into_iter()
            .filter_map(|id| self.graph.city(id))
            .collect();

        Ok(PathResult { cities, distance })
    }

    /// 所有可达城市（含起点）
    pub fn reachable(&self) -> impl Iterator<Item = CityId> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_some())
            .map(|(i, _)| CityId::new(i))
    }

    fn city_label(&self, id: CityId) -> String {
        self.graph
            .city_name(id)
            .map(str::to_string)
            .unwrap_or_else(|| format!("#{}", id.index()))
    }
}

/// 最短路径查找器
pub struct PathFinder<'g> {
    graph: &'g Graph,
}

impl<'g> PathFinder<'g> {
    /// 创建路径查找器
    pub fn new(graph: &'g Graph) -> Self {
        Self { graph }
    }

    /// 两城之间的最短路径
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        let from = self.graph.find(from)?;
        let to = self.graph.find(to)?;
        self.shortest_path_ids(from, to)
    }

    /// 两城之间的最短路径（按 ID），终点定点后提前结束
    pub fn shortest_path_ids(&self, from: CityId, to: CityId) -> Result<PathResult> {
        self.check(from)?;
        self.check(to)?;
        self.dijkstra(from, Some(to)).path_to(to)
    }

    /// 单源最短路径树（运行至所有可达城市定点）
    pub fn shortest_paths_from(&self, from: &str) -> Result<ShortestPathTree<'g>> {
        let from = self.graph.find(from)?;
        Ok(self.dijkstra(from, None))
    }

    /// 所有有序城市对（from != to）的最短路径，按注册顺序排列
    ///
    /// 每个起点独立计算，并行执行
    pub fn all_pairs(&self) -> Vec<PairPath> {
        let n = self.graph.city_count();
        let rows: Vec<Vec<PairPath>> = (0..n)
            .into_par_iter()
            .map(|src| {
                let source = CityId::new(src);
                let tree = self.dijkstra(source, None);
                (0..n)
                    .filter(|&dst| dst != src)
                    .filter_map(|dst| {
                        let target = CityId::new(dst);
                        Some(PairPath {
                            from: self.graph.city(source)?,
                            to: self.graph.city(target)?,
                            path: tree.path_to(target).ok(),
                        })
                    })
                    .collect()
            })
            .collect();

        rows.into_iter().flatten().collect()
    }

    fn check(&self, id: CityId) -> Result<()> {
        if id.index() < self.graph.city_count() {
            Ok(())
        } else {
            Err(Error::CityNotFound(format!("#{}", id.index())))
        }
    }

    fn dijkstra(&self, source: CityId, target: Option<CityId>) -> ShortestPathTree<'g> {
        let n = self.graph.city_count();
        let mut dist: Vec<Option<u64>> = vec![None; n];
        let mut prev: Vec<Option<CityId>> = vec![None; n];
        let mut settled = vec![false; n];

        if let Some(d) = dist.get_mut(source.index()) {
            *d = Some(0);
        }

        loop {
            // 未定点中距离最小者，同距离取下标最小者
            let mut next: Option<(usize, u64)> = None;
            for (v, d) in dist.iter().enumerate() {
                if settled[v] {
                    continue;
                }
                if let Some(d) = *d {
                    if next.map_or(true, |(_, best)| d < best) {
                        next = Some((v, d));
                    }
                }
            }

            // 剩余城市都不可达
            let Some((u, du)) = next else { break };
            settled[u] = true;
            let current = CityId::new(u);
            trace!(city = u, distance = du, "定点");

            if target == Some(current) {
                break;
            }

            for edge in self.graph.edges_from(current) {
                let v = edge.to().index();
                let candidate = du + u64::from(edge.mileage());
                if dist[v].map_or(true, |d| candidate < d) {
                    dist[v] = Some(candidate);
                    prev[v] = Some(current);
                }
            }
        }

        ShortestPathTree {
            graph: self.graph,
            source,
            dist,
            prev,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::load_chart;

    fn triangle() -> Graph {
        load_chart([",A,B,C", "A,,50,300", "B,,,150", "C,,,"]).unwrap()
    }

    fn two_islands() -> Graph {
        let mut b = Graph::builder();
        let a = b.add_city("A").unwrap();
        let bb = b.add_city("B").unwrap();
        let c = b.add_city("C").unwrap();
        let d = b.add_city("D").unwrap();
        b.add_mileage(a, bb, 7).unwrap();
        b.add_mileage(c, d, 9).unwrap();
        b.build()
    }

    #[test]
    fn test_shortest_path_prefers_detour() {
        let graph = triangle();
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("A", "C").unwrap();
        assert_eq!(path.distance, 200);
        assert_eq!(path.names(), vec!["A", "B", "C"]);
        assert_eq!(path.hops(), 2);
    }

    #[test]
    fn test_shortest_path_symmetric() {
        let graph = triangle();
        let finder = PathFinder::new(&graph);

        let back = finder.shortest_path("C", "A").unwrap();
        assert_eq!(back.distance, 200);
        assert_eq!(back.names(), vec!["C", "B", "A"]);
    }

    #[test]
    fn test_same_city() {
        let graph = load_chart(["X", "X"]).unwrap();
        let finder = PathFinder::new(&graph);

        let path = finder.shortest_path("X", "X").unwrap();
        assert_eq!(path.distance, 0);
        assert_eq!(path.names(), vec!["X"]);
        assert_eq!(path.hops(), 0);
    }

    #[test]
    fn test_no_path() {
        let graph = two_islands();
        let finder = PathFinder::new(&graph);

        let err = finder.shortest_path("A", "D").unwrap_err();
        assert!(matches!(err, Error::NoPath { ref from, ref to } if from == "A" && to == "D"));
    }

    #[test]
    fn test_unknown_city() {
        let graph = triangle();
        let finder = PathFinder::new(&graph);

        assert!(matches!(
            finder.shortest_path("A", "Z"),
            Err(Error::CityNotFound(_))
        ));
        assert!(matches!(
            finder.shortest_path_ids(CityId::new(0), CityId::new(5)),
            Err(Error::CityNotFound(ref name)) if name == "#5"
        ));
    }

    #[test]
    fn test_tie_break_lowest_index() {
        // A 到 D 有两条等长路线: A-B-D 与 A-C-D，A 的邻接表中 C 排在 B 前
        let mut b = Graph::builder();
        let a = b.add_city("A").unwrap();
        let bb = b.add_city("B").unwrap();
        let c = b.add_city("C").unwrap();
        let d = b.add_city("D").unwrap();
        b.add_mileage(a, c, 10).unwrap();
        b.add_mileage(a, bb, 10).unwrap();
        b.add_mileage(c, d, 10).unwrap();
        b.add_mileage(bb, d, 10).unwrap();
        let graph = b.build();
        let finder = PathFinder::new(&graph);

        // B 与 C 同距离，B 下标更小先定点，D 的前驱取 B
        let path = finder.shortest_path("A", "D").unwrap();
        assert_eq!(path.distance, 20);
        assert_eq!(path.names(), vec!["A", "B", "D"]);
    }

    #[test]
    fn test_tree() {
        let graph = two_islands();
        let finder = PathFinder::new(&graph);
        let tree = finder.shortest_paths_from("A").unwrap();

        assert_eq!(tree.source(), CityId::new(0));
        assert_eq!(tree.distance(CityId::new(1)), Some(7));
        assert_eq!(tree.distance(CityId::new(2)), None);
        assert_eq!(tree.route(CityId::new(3)), None);
        let reachable: Vec<CityId> = tree.reachable().collect();
        assert_eq!(reachable, vec![CityId::new(0), CityId::new(1)]);
    }

    #[test]
    fn test_all_pairs() {
        let graph = two_islands();
        let finder = PathFinder::new(&graph);
        let pairs = finder.all_pairs();

        assert_eq!(pairs.len(), 12);
        assert_eq!(pairs[0].from.name(), "A");
        assert_eq!(pairs[0].to.name(), "B");
        assert_eq!(pairs[0].path.as_ref().map(|p| p.distance), Some(7));
        assert!(pairs[1].path.is_none());

        let reachable = pairs.iter().filter(|p| p.path.is_some()).count();
        assert_eq!(reachable, 4);
    }
}
