//! A* search.

use crate::config::SearchConfig;
use crate::dijkstra::{WeightedSearch, best_first};
use crate::error::Result;
use crate::traits::WeightedGraph;

/// Compute the cheapest path cost from `start` to `goal` using A*.
///
/// Nodes are queued with priority `cost + heuristic(goal, node)`, while
/// `cost_so_far` keeps the true accumulated cost. The heuristic must never
/// overestimate the remaining cost (admissible) for the result to be
/// optimal; an overestimating heuristic silently yields a costlier path.
/// On grids with 4-way movement, [`manhattan`](crate::manhattan) qualifies.
pub fn astar_search<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: H,
) -> Result<WeightedSearch<G::Node>>
where
    G: WeightedGraph,
    H: Fn(&G::Node, &G::Node) -> i32,
{
    astar_search_with(graph, start, goal, heuristic, &SearchConfig::default())
}

/// [`astar_search`] with per-call limits.
pub fn astar_search_with<G, H>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
    heuristic: H,
    config: &SearchConfig<'_>,
) -> Result<WeightedSearch<G::Node>>
where
    G: WeightedGraph,
    H: Fn(&G::Node, &G::Node) -> i32,
{
    best_first(
        graph,
        start,
        Some(goal),
        |node: &G::Node| heuristic(goal, node),
        config,
        "astar",
    )
}
