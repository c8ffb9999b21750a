//! Unweighted breadth-first search.

use std::collections::HashSet;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::frontier::Queue;
use crate::path::CameFrom;
use crate::traits::Graph;

/// Visit every node reachable from `start`.
///
/// Returns the nodes in the order they were dequeued, beginning with
/// `start`. Nodes unreachable from `start` are never visited.
pub fn breadth_first_traversal<G: Graph>(graph: &G, start: &G::Node) -> Result<Vec<G::Node>> {
    breadth_first_traversal_with(graph, start, &SearchConfig::default())
}

/// [`breadth_first_traversal`] with per-call limits.
///
/// With [`SearchConfig::max_cost`] set, nodes more than that many edges
/// away from `start` are not visited.
pub fn breadth_first_traversal_with<G: Graph>(
    graph: &G,
    start: &G::Node,
    config: &SearchConfig<'_>,
) -> Result<Vec<G::Node>> {
    let mut frontier: Queue<(G::Node, i32)> = Queue::new();
    frontier.put((start.clone(), 0));
    let mut visited = HashSet::new();
    visited.insert(start.clone());

    let mut order = Vec::new();
    let mut nbuf = Vec::new();

    while !frontier.is_empty() {
        if config.cancelled() {
            log::warn!("bfs traversal cancelled after {} visits", order.len());
            return Err(SearchError::Cancelled {
                expanded: order.len(),
            });
        }
        let (current, depth) = frontier.get()?;

        let depth = depth.saturating_add(1);
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            if config.within(depth) && visited.insert(next.clone()) {
                frontier.put((next, depth));
            }
        }
        order.push(current);
    }

    log::debug!("bfs traversal: visited {} nodes", order.len());
    Ok(order)
}

/// Record the predecessor of every node reachable from `start`.
pub fn breadth_first_search<G: Graph>(graph: &G, start: &G::Node) -> Result<CameFrom<G::Node>> {
    breadth_first_search_with(graph, start, None, &SearchConfig::default())
}

/// Breadth-first search that stops as soon as `goal` is dequeued.
///
/// The `came_from` chain from `goal` back to `start` is a path with the
/// fewest possible edges. If `goal` is unreachable the whole reachable set
/// is explored and `goal` is absent from the result.
pub fn breadth_first_search_to<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<CameFrom<G::Node>> {
    breadth_first_search_with(graph, start, Some(goal), &SearchConfig::default())
}

/// Breadth-first search with an optional goal and per-call limits.
///
/// The goal test happens when a node is dequeued, not when it is
/// discovered, so the goal itself is never expanded. With
/// [`SearchConfig::max_cost`] set, nodes more than that many edges away
/// from `start` are not discovered.
pub fn breadth_first_search_with<G: Graph>(
    graph: &G,
    start: &G::Node,
    goal: Option<&G::Node>,
    config: &SearchConfig<'_>,
) -> Result<CameFrom<G::Node>> {
    let mut frontier: Queue<(G::Node, i32)> = Queue::new();
    frontier.put((start.clone(), 0));

    let mut came_from = CameFrom::new();
    came_from.insert(start.clone(), None);

    let mut nbuf = Vec::new();
    let mut expanded = 0;
    let mut reached = false;

    while !frontier.is_empty() {
        if config.cancelled() {
            log::warn!("bfs cancelled after {expanded} expansions");
            return Err(SearchError::Cancelled { expanded });
        }
        let (current, depth) = frontier.get()?;

        if goal == Some(&current) {
            reached = true;
            break;
        }
        expanded += 1;

        let depth = depth.saturating_add(1);
        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            if came_from.contains_key(&next) || !config.within(depth) {
                continue;
            }
            came_from.insert(next.clone(), Some(current.clone()));
            frontier.put((next, depth));
        }
    }

    log::debug!(
        "bfs: expanded {expanded}, discovered {}, goal reached: {reached}",
        came_from.len()
    );
    Ok(came_from)
}

#[cfg(test)]
mod tests {
    use gridwalk_core::Point;
    use rand::rngs::StdRng;
    use rand::{RngExt, SeedableRng};

    use std::collections::HashMap;

    use super::*;
    use crate::fixtures::{brute_force_costs, letters};
    use crate::path::reconstruct_path;
    use crate::{AdjacencyGraph, SquareGrid};

    fn random_grid(rng: &mut StdRng, w: i32, h: i32) -> SquareGrid {
        let mut g = SquareGrid::new(w, h);
        for p in g.bounds() {
            if p != Point::ZERO && rng.random_bool(0.3) {
                g.add_wall(p);
            }
        }
        g
    }

    #[test]
    fn traversal_order_on_letter_graph() {
        let order = breadth_first_traversal(&letters(), &"B").unwrap();
        assert_eq!(order, vec!["B", "A", "C", "D", "E"]);
    }

    #[test]
    fn traversal_covers_grid_minus_walls() {
        let g = crate::samples::walled_grid();
        let order = breadth_first_traversal(&g, &Point::ZERO).unwrap();
        assert_eq!(order.len(), 30 * 15 - 9);
        assert_eq!(order[0], Point::ZERO);
        // East is enumerated before north.
        assert_eq!(order[1], Point::new(1, 0));
        assert_eq!(order[2], Point::new(0, 1));
    }

    #[test]
    fn traversal_depth_limit() {
        let g = SquareGrid::new(10, 10);
        let config = SearchConfig::new().with_max_cost(2);
        let order = breadth_first_traversal_with(&g, &Point::ZERO, &config).unwrap();
        // (0,0), two cells at distance 1, three at distance 2.
        assert_eq!(order.len(), 6);
        assert!(order.iter().all(|p| p.x + p.y <= 2));

        let zero = SearchConfig::new().with_max_cost(0);
        let order = breadth_first_traversal_with(&letters(), &"B", &zero).unwrap();
        assert_eq!(order, vec!["B"]);
    }

    #[test]
    fn traversal_cancel_aborts() {
        let g = SquareGrid::new(10, 10);
        let polls = std::cell::Cell::new(0);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > 3
        };
        let config = SearchConfig::new().with_cancel(&cancel);
        let err = breadth_first_traversal_with(&g, &Point::ZERO, &config).unwrap_err();
        assert_eq!(err, SearchError::Cancelled { expanded: 3 });
        assert_eq!(polls.get(), 4);
    }

    #[test]
    fn came_from_for_letter_graph() {
        let cf = breadth_first_search(&letters(), &"A").unwrap();
        assert_eq!(cf.len(), 5);
        assert_eq!(cf["A"], None);
        assert_eq!(cf["B"], Some("A"));
        assert_eq!(cf["C"], Some("B"));
        assert_eq!(cf["D"], Some("B"));
        assert_eq!(cf["E"], Some("D"));
        assert!(!cf.contains_key("F"));
    }

    #[test]
    fn open_grid_path_is_manhattan_length() {
        let g = SquareGrid::new(5, 5);
        let goal = Point::new(4, 4);
        let cf = breadth_first_search_to(&g, &Point::ZERO, &goal).unwrap();
        let path = reconstruct_path(&cf, &Point::ZERO, &goal).unwrap();
        assert_eq!(path.len() - 1, 8);
        assert_eq!(path.first(), Some(&Point::ZERO));
        assert_eq!(path.last(), Some(&goal));
    }

    #[test]
    fn early_exit_does_not_expand_goal() {
        let g: AdjacencyGraph<u32> = [(0, vec![1]), (1, vec![2]), (2, vec![3])]
            .into_iter()
            .collect();
        let cf = breadth_first_search_to(&g, &0, &1).unwrap();
        assert_eq!(cf.len(), 2);
        assert!(!cf.contains_key(&2));

        let full = breadth_first_search(&g, &0).unwrap();
        assert_eq!(full.len(), 4);
    }

    #[test]
    fn start_is_goal() {
        let g = SquareGrid::new(3, 3);
        let p = Point::new(1, 1);
        let cf = breadth_first_search_to(&g, &p, &p).unwrap();
        assert_eq!(cf.len(), 1);
        assert_eq!(cf[&p], None);
        assert_eq!(reconstruct_path(&cf, &p, &p), Ok(vec![p]));
    }

    #[test]
    fn unreachable_goal_explores_component() {
        let cf = breadth_first_search_to(&letters(), &"A", &"F").unwrap();
        assert_eq!(cf.len(), 5);
        assert_eq!(
            reconstruct_path(&cf, &"A", &"F"),
            Err(SearchError::UnreachableGoal)
        );
    }

    #[test]
    fn max_cost_limits_depth() {
        let g = SquareGrid::new(10, 1);
        let config = SearchConfig::new().with_max_cost(3);
        let cf = breadth_first_search_with(&g, &Point::ZERO, None, &config).unwrap();
        assert_eq!(cf.len(), 4);
        assert!(cf.contains_key(&Point::new(3, 0)));
        assert!(!cf.contains_key(&Point::new(4, 0)));
    }

    #[test]
    fn cancel_aborts_search() {
        let g = SquareGrid::new(10, 10);
        let polls = std::cell::Cell::new(0);
        let cancel = || {
            polls.set(polls.get() + 1);
            polls.get() > 5
        };
        let config = SearchConfig::new().with_cancel(&cancel);
        let err = breadth_first_search_with(&g, &Point::ZERO, None, &config).unwrap_err();
        assert_eq!(err, SearchError::Cancelled { expanded: 5 });
    }

    #[test]
    fn paths_are_shortest_on_random_grids() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let g = random_grid(&mut rng, 8, 6);
            // Unit costs, so the weighted oracle yields edge counts.
            let oracle = brute_force_costs(&g, Point::ZERO);
            for goal in g.open_cells() {
                let cf = breadth_first_search_to(&g, &Point::ZERO, &goal).unwrap();
                match oracle.get(&goal) {
                    Some(&d) => {
                        let path = reconstruct_path(&cf, &Point::ZERO, &goal).unwrap();
                        assert_eq!(path.len() as i32 - 1, d);
                        for w in path.windows(2) {
                            let mut nbuf = Vec::new();
                            g.neighbors(&w[0], &mut nbuf);
                            assert!(nbuf.contains(&w[1]));
                        }
                    }
                    None => assert!(!cf.contains_key(&goal)),
                }
            }
        }
    }

    /// Fewest edges from `start` to every reachable node, by relaxing every
    /// edge until nothing changes.
    fn edge_counts(g: &AdjacencyGraph<u32>, start: u32) -> HashMap<u32, i32> {
        let mut dist = HashMap::from([(start, 0)]);
        loop {
            let mut changed = false;
            for n in g.nodes() {
                let Some(&d) = dist.get(n) else { continue };
                for &m in g.edges(n) {
                    if dist.get(&m).is_none_or(|&old| d + 1 < old) {
                        dist.insert(m, d + 1);
                        changed = true;
                    }
                }
            }
            if !changed {
                return dist;
            }
        }
    }

    #[test]
    fn paths_are_shortest_on_random_directed_graphs() {
        let mut rng = StdRng::seed_from_u64(19);
        let nodes = 0..12u32;
        for _ in 0..50 {
            let mut g = AdjacencyGraph::new();
            for n in nodes.clone() {
                // Roughly a quarter of the nodes get no outgoing edges.
                let degree = if rng.random_bool(0.25) { 0 } else { rng.random_range(1..4) };
                g.insert(n, Vec::new());
                for _ in 0..degree {
                    g.add_edge(n, rng.random_range(nodes.clone()));
                }
            }
            let oracle = edge_counts(&g, 0);
            for goal in nodes.clone() {
                let cf = breadth_first_search_to(&g, &0, &goal).unwrap();
                match oracle.get(&goal) {
                    Some(&d) => {
                        let path = reconstruct_path(&cf, &0, &goal).unwrap();
                        assert_eq!(path.len() as i32 - 1, d);
                        for w in path.windows(2) {
                            assert!(g.edges(&w[0]).contains(&w[1]));
                        }
                    }
                    None => assert!(!cf.contains_key(&goal)),
                }
            }
            let order = breadth_first_traversal(&g, &0).unwrap();
            assert_eq!(order.len(), oracle.len());
        }
    }
}
