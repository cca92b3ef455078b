//! 随机里程图上的性质测试

use milegraph::{load_chart, render, CityId, Error, Graph, PathFinder, Traversal};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

const SEEDS: u64 = 40;

/// 随机生成对齐布局的完整里程表
fn random_chart(rng: &mut StdRng) -> Vec<String> {
    let n = rng.gen_range(1..=8);
    let names: Vec<String> = (0..n).map(|i| format!("City{}", i)).collect();

    let mut lines = vec![format!(",{}", names.join(","))];
    for (i, name) in names.iter().enumerate() {
        let mut fields = vec![name.clone()];
        for j in 0..n {
            if j > i {
                fields.push(rng.gen_range(0..500u32).to_string());
            } else {
                fields.push(String::new());
            }
        }
        lines.push(fields.join(","));
    }
    lines
}

/// 随机稀疏图（可能不连通）
fn random_sparse(rng: &mut StdRng) -> Graph {
    let n = rng.gen_range(1..=9);
    let mut builder = Graph::builder();
    for i in 0..n {
        builder.add_city(format!("C{}", i));
    }
    for a in 0..n {
        for b in (a + 1)..n {
            if rng.gen_bool(0.25) {
                builder
                    .add_mileage(CityId::new(a), CityId::new(b), rng.gen_range(0..400))
                    .unwrap();
            }
        }
    }
    builder.build()
}

/// Floyd-Warshall 作为对照
fn floyd(graph: &Graph) -> Vec<Vec<Option<u64>>> {
    let n = graph.city_count();
    let mut d = vec![vec![None; n]; n];
    for (i, row) in d.iter_mut().enumerate() {
        row[i] = Some(0);
    }
    for e in graph.canonical_edges() {
        let (a, b, m) = (e.from().index(), e.to().index(), u64::from(e.mileage()));
        if d[a][b].map_or(true, |x| m < x) {
            d[a][b] = Some(m);
            d[b][a] = Some(m);
        }
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                if let (Some(x), Some(y)) = (d[i][k], d[k][j]) {
                    if d[i][j].map_or(true, |z| x + y < z) {
                        d[i][j] = Some(x + y);
                    }
                }
            }
        }
    }
    d
}

fn graphs() -> Vec<Graph> {
    let mut out = Vec::new();
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        out.push(load_chart(random_chart(&mut rng)).unwrap());
        out.push(random_sparse(&mut rng));
    }
    out
}

#[test]
fn canonical_edges_appear_in_both_adjacency_lists() {
    for graph in graphs() {
        for e in graph.canonical_edges() {
            assert!(e.from() < e.to());
            assert!(graph
                .edges_from(e.from())
                .iter()
                .any(|a| a.to() == e.to() && a.mileage() == e.mileage()));
            assert!(graph
                .edges_from(e.to())
                .iter()
                .any(|a| a.to() == e.from() && a.mileage() == e.mileage()));
        }
        let adjacency: usize = graph
            .cities()
            .map(|c| graph.edges_from(c.id()).len())
            .sum();
        assert_eq!(adjacency, 2 * graph.edge_count());
    }
}

#[test]
fn adjacency_lists_sorted_by_mileage() {
    for graph in graphs() {
        for city in graph.cities() {
            let miles: Vec<u32> = graph.edges_from(city.id()).iter().map(|e| e.mileage()).collect();
            assert!(miles.windows(2).all(|w| w[0] <= w[1]));
        }
    }
}

#[test]
fn dijkstra_matches_floyd_warshall() {
    for graph in graphs() {
        let expected = floyd(&graph);
        let finder = PathFinder::new(&graph);
        for from in graph.cities() {
            for to in graph.cities() {
                let got = finder.shortest_path(from.name(), to.name());
                match expected[from.id().index()][to.id().index()] {
                    Some(d) => {
                        let path = got.unwrap();
                        assert_eq!(path.distance, d);
                        assert_eq!(path.cities.first(), Some(&from));
                        assert_eq!(path.cities.last(), Some(&to));

                        // 路径各段里程之和等于总里程
                        let sum: u64 = path
                            .cities
                            .windows(2)
                            .map(|w| u64::from(graph.mileage_between(w[0].id(), w[1].id()).unwrap()))
                            .sum();
                        assert_eq!(sum, d);
                    }
                    None => assert!(matches!(got, Err(Error::NoPath { .. }))),
                }
            }
        }
    }
}

#[test]
fn distances_symmetric_and_satisfy_triangle_inequality() {
    for graph in graphs() {
        let finder = PathFinder::new(&graph);
        let dist = |a: &str, b: &str| finder.shortest_path(a, b).ok().map(|p| p.distance);
        let names: Vec<String> = graph.cities().map(|c| c.name().to_string()).collect();

        for a in &names {
            for b in &names {
                assert_eq!(dist(a, b), dist(b, a));
                for c in &names {
                    if let (Some(ab), Some(bc)) = (dist(a, b), dist(b, c)) {
                        let ac = dist(a, c).unwrap();
                        assert!(ac <= ab + bc);
                    }
                }
            }
        }
    }
}

#[test]
fn traversals_visit_exactly_the_reachable_cities() {
    for graph in graphs() {
        let traversal = Traversal::new(&graph);
        let finder = PathFinder::new(&graph);

        for city in graph.cities() {
            let reachable: HashSet<&str> = finder
                .shortest_paths_from(city.name())
                .unwrap()
                .reachable()
                .filter_map(|id| graph.city_name(id))
                .collect();

            for order in [
                traversal.depth_first(city.name()).unwrap(),
                traversal.breadth_first(city.name()).unwrap(),
            ] {
                assert_eq!(order[0], city.name());
                let seen: HashSet<&str> = order.iter().copied().collect();
                assert_eq!(seen.len(), order.len(), "城市重复访问");
                assert_eq!(seen, reachable);
            }
        }
    }
}

#[test]
fn outputs_are_deterministic() {
    for seed in 0..SEEDS {
        let lines = random_chart(&mut StdRng::seed_from_u64(seed));
        let first = load_chart(&lines).unwrap();
        let second = load_chart(&lines).unwrap();

        assert_eq!(render(&first), render(&second));
        let start = first.cities().next().unwrap();
        let t1 = Traversal::new(&first);
        let t2 = Traversal::new(&second);
        assert_eq!(
            t1.depth_first(start.name()).unwrap(),
            t2.depth_first(start.name()).unwrap()
        );
        assert_eq!(
            t1.breadth_first(start.name()).unwrap(),
            t2.breadth_first(start.name()).unwrap()
        );
    }
}

#[test]
fn three_city_scenario() {
    let graph = load_chart([",A,B,C", "A,,50,300", "B,,,150", "C,,,"]).unwrap();

    let path = PathFinder::new(&graph).shortest_path("A", "C").unwrap();
    assert_eq!(path.distance, 200);
    assert_eq!(path.names(), vec!["A", "B", "C"]);

    assert_eq!(
        Traversal::new(&graph).breadth_first("A").unwrap(),
        vec!["A", "B", "C"]
    );

    let dot = render(&graph);
    assert!(dot.contains(&"    Node0 -> Node1 [label=\"50\" color=\"green\"]".to_string()));
    assert!(dot.contains(&"    Node1 -> Node2 [label=\"150\" color=\"blue\"]".to_string()));
    assert!(dot.contains(&"    Node0 -> Node2 [label=\"300\" color=\"red\"]".to_string()));
}
