//! Graphs and brute-force oracles shared by the search tests.

use std::collections::HashMap;

use gridwalk_core::{Point, Range};
use rand::RngExt;
use rand::rngs::StdRng;

use crate::traits::{Graph, WeightedGraph};
use crate::GridWithWeights;

pub(crate) use crate::samples::letter_graph as letters;

pub(crate) fn forest_map() -> GridWithWeights {
    crate::samples::forest_map().unwrap()
}

/// `w` x `h` grid with ~20% walls and ~30% of cells weighted in
/// `min_weight..10`. The origin is always open with the default cost.
pub(crate) fn random_weighted_grid(rng: &mut StdRng, w: i32, h: i32, min_weight: i32) -> GridWithWeights {
    let mut g = GridWithWeights::new(w, h);
    for p in Range::with_size(w, h) {
        if p == Point::ZERO {
            continue;
        }
        if rng.random_bool(0.2) {
            g.grid_mut().add_wall(p);
        } else if rng.random_bool(0.4) {
            g.set_weight(p, rng.random_range(min_weight..10)).unwrap();
        }
    }
    g
}

/// Least accumulated cost to every reachable cell, by relaxing every edge
/// until nothing changes.
pub(crate) fn brute_force_costs<G>(g: &G, start: Point) -> HashMap<Point, i32>
where
    G: WeightedGraph<Node = Point> + HasCells,
{
    let mut dist = HashMap::from([(start, 0)]);
    let mut nbuf = Vec::new();
    loop {
        let mut changed = false;
        for p in g.cells() {
            let Some(&d) = dist.get(&p) else { continue };
            nbuf.clear();
            g.neighbors(&p, &mut nbuf);
            for &n in &nbuf {
                let nd = d + g.cost(&p, &n);
                if dist.get(&n).is_none_or(|&old| nd < old) {
                    dist.insert(n, nd);
                    changed = true;
                }
            }
        }
        if !changed {
            return dist;
        }
    }
}

/// Grids whose open cells the oracle can enumerate.
pub(crate) trait HasCells: Graph<Node = Point> {
    fn cells(&self) -> Vec<Point>;
}

impl HasCells for GridWithWeights {
    fn cells(&self) -> Vec<Point> {
        self.grid().open_cells().collect()
    }
}

impl HasCells for crate::SquareGrid {
    fn cells(&self) -> Vec<Point> {
        self.open_cells().collect()
    }
}
