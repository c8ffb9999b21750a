//! Dijkstra's uniform-cost search, and the best-first loop it shares with A*.

use std::hash::Hash;

use crate::config::SearchConfig;
use crate::error::{Result, SearchError};
use crate::frontier::PriorityQueue;
use crate::path::{CameFrom, CostSoFar, reconstruct_path};
use crate::traits::WeightedGraph;

/// Outcome of a weighted search.
#[derive(Debug, Clone)]
pub struct WeightedSearch<N> {
    /// Predecessor of every discovered node; the start maps to `None`.
    pub came_from: CameFrom<N>,
    /// Cheapest accumulated cost found for every discovered node.
    pub cost_so_far: CostSoFar<N>,
    /// Number of nodes popped from the frontier and expanded. Superseded
    /// frontier entries and the goal itself are not counted.
    pub expanded: usize,
}

impl<N: Eq + Hash> PartialEq for WeightedSearch<N> {
    fn eq(&self, other: &Self) -> bool {
        self.expanded == other.expanded
            && self.came_from == other.came_from
            && self.cost_so_far == other.cost_so_far
    }
}

impl<N: Eq + Hash> Eq for WeightedSearch<N> {}

impl<N: Clone + Eq + Hash> WeightedSearch<N> {
    /// Whether `node` was discovered.
    pub fn reached(&self, node: &N) -> bool {
        self.cost_so_far.contains_key(node)
    }

    /// Accumulated cost to `node`, if it was discovered.
    pub fn cost_to(&self, node: &N) -> Option<i32> {
        self.cost_so_far.get(node).copied()
    }

    /// Shortcut for [`reconstruct_path`] over this search's `came_from`.
    pub fn path_to(&self, start: &N, goal: &N) -> Result<Vec<N>> {
        reconstruct_path(&self.came_from, start, goal)
    }
}

/// Cheapest-cost search from `start`, stopping once `goal` is dequeued.
///
/// All edge costs must be non-negative; a negative cost aborts the search
/// with [`SearchError::InvalidCost`]. Discovering a node whose accumulated
/// cost does not fit in an `i32` aborts it with [`SearchError::CostOverflow`].
pub fn dijkstra_search<G: WeightedGraph>(
    graph: &G,
    start: &G::Node,
    goal: &G::Node,
) -> Result<WeightedSearch<G::Node>> {
    dijkstra_search_with(graph, start, Some(goal), &SearchConfig::default())
}

/// Cost map of every node reachable from `start`.
pub fn dijkstra_map<G: WeightedGraph>(graph: &G, start: &G::Node) -> Result<WeightedSearch<G::Node>> {
    dijkstra_search_with(graph, start, None, &SearchConfig::default())
}

/// Dijkstra's search with an optional goal and per-call limits.
pub fn dijkstra_search_with<G: WeightedGraph>(
    graph: &G,
    start: &G::Node,
    goal: Option<&G::Node>,
    config: &SearchConfig<'_>,
) -> Result<WeightedSearch<G::Node>> {
    best_first(graph, start, goal, |_| 0, config, "dijkstra")
}

/// Shared loop of Dijkstra and A*.
///
/// A node is queued with priority `g + estimate(node)` where `g` is its
/// accumulated cost. Each successful relaxation pushes a fresh entry; an
/// entry popped with a priority above the node's current best is
/// superseded and skipped.
pub(crate) fn best_first<G, H>(
    graph: &G,
    start: &G::Node,
    goal: Option<&G::Node>,
    estimate: H,
    config: &SearchConfig<'_>,
    algo: &str,
) -> Result<WeightedSearch<G::Node>>
where
    G: WeightedGraph,
    H: Fn(&G::Node) -> i32,
{
    let mut frontier = PriorityQueue::new();
    frontier.put(start.clone(), 0);

    let mut came_from = CameFrom::new();
    let mut cost_so_far = CostSoFar::new();
    came_from.insert(start.clone(), None);
    cost_so_far.insert(start.clone(), 0);

    let mut nbuf = Vec::new();
    let mut expanded = 0;
    let mut stale = 0;
    let mut reached = false;

    while !frontier.is_empty() {
        if config.cancelled() {
            log::warn!("{algo} cancelled after {expanded} expansions");
            return Err(SearchError::Cancelled { expanded });
        }
        let (current, priority) = frontier.get_with_priority()?;

        let Some(&current_cost) = cost_so_far.get(&current) else {
            continue;
        };
        if priority > current_cost.saturating_add(estimate(&current)) {
            stale += 1;
            continue;
        }

        if goal == Some(&current) {
            reached = true;
            break;
        }
        expanded += 1;

        nbuf.clear();
        graph.neighbors(&current, &mut nbuf);
        for next in nbuf.drain(..) {
            let step = graph.cost(&current, &next);
            if step < 0 {
                return Err(SearchError::InvalidCost { cost: step });
            }
            let new_cost = match current_cost.checked_add(step) {
                Some(c) => c,
                // Too large to improve a known cost or to pass a limit.
                None if cost_so_far.contains_key(&next) || config.max_cost.is_some() => continue,
                None => return Err(SearchError::CostOverflow { cost: current_cost, step }),
            };
            if !config.within(new_cost) {
                continue;
            }
            if cost_so_far.get(&next).is_some_and(|&old| new_cost >= old) {
                continue;
            }
            cost_so_far.insert(next.clone(), new_cost);
            came_from.insert(next.clone(), Some(current.clone()));
            let h = estimate(&next);
            let priority = new_cost
                .checked_add(h)
                .ok_or(SearchError::CostOverflow { cost: new_cost, step: h })?;
            frontier.put(next, priority);
        }
    }

    log::debug!(
        "{algo}: expanded {expanded}, discovered {}, skipped {stale} stale entries, goal reached: {reached}",
        cost_so_far.len()
    );
    Ok(WeightedSearch {
        came_from,
        cost_so_far,
        expanded,
    })
}
