//! Graph search over adjacency-list and square-grid graphs.
//!
//! This crate provides the classic family of single-source search
//! algorithms together with the frontiers that drive them:
//!
//! - **Breadth-first search**: full traversal ([`breadth_first_traversal`]),
//!   parent recording ([`breadth_first_search`]) and early exit on a goal
//!   ([`breadth_first_search_to`])
//! - **Dijkstra** uniform-cost search ([`dijkstra_search`], [`dijkstra_map`])
//! - **A\*** with a caller-supplied heuristic ([`astar_search`])
//! - **Path reconstruction** from predecessor maps ([`reconstruct_path`])
//!
//! Every call owns its frontier and result maps; graphs are only read, so
//! one graph can serve any number of searches.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | breadth-first search |
//! | [`WeightedGraph`] : [`Graph`] | Dijkstra, A* |
//!
//! # Example
//!
//! ```
//! use gridwalk_core::Point;
//! use gridwalk_paths::{GridWithWeights, astar_search, manhattan};
//!
//! let mut map = GridWithWeights::new(10, 10);
//! map.set_weight(Point::new(1, 0), 5).unwrap();
//! let goal = Point::new(3, 0);
//! let found = astar_search(&map, &Point::ZERO, &goal, manhattan).unwrap();
//! assert_eq!(found.cost_to(&goal), Some(5));
//! let path = found.path_to(&Point::ZERO, &goal).unwrap();
//! assert_eq!(path.first(), Some(&Point::ZERO));
//! ```

mod adjacency;
mod astar;
mod bfs;
mod config;
mod dijkstra;
mod distance;
mod error;
mod frontier;
mod grid;
mod path;
pub mod samples;
mod traits;

#[cfg(test)]
mod fixtures;

pub use adjacency::AdjacencyGraph;
pub use astar::{astar_search, astar_search_with};
pub use bfs::{
    breadth_first_search, breadth_first_search_to, breadth_first_search_with,
    breadth_first_traversal, breadth_first_traversal_with,
};
pub use config::SearchConfig;
pub use dijkstra::{WeightedSearch, dijkstra_map, dijkstra_search, dijkstra_search_with};
pub use distance::{chebyshev, manhattan};
pub use error::{Result, SearchError};
pub use frontier::{PriorityQueue, Queue};
pub use grid::{GridWithWeights, SquareGrid};
pub use path::{CameFrom, CostSoFar, reconstruct_path};
pub use traits::{Graph, WeightedGraph};
