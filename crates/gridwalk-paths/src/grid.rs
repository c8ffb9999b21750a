//! Square grid graphs with walls and optional per-cell movement costs.

use std::collections::{HashMap, HashSet};

use gridwalk_core::{Point, Range};

use crate::error::{Result, SearchError};
use crate::traits::{Graph, WeightedGraph};

// ---------------------------------------------------------------------------
// SquareGrid
// ---------------------------------------------------------------------------

/// A `width` x `height` grid anchored at the origin, with a set of blocked
/// cells.
///
/// Neighbors are the four cardinal cells in east, north, west, south order,
/// dropping any that are out of bounds or walls. Every step costs 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SquareGrid {
    bounds: Range,
    walls: HashSet<Point>,
}

impl SquareGrid {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            bounds: Range::with_size(width, height),
            walls: HashSet::new(),
        }
    }

    /// Builder form of [`add_walls`](Self::add_walls).
    pub fn with_walls(mut self, walls: impl IntoIterator<Item = Point>) -> Self {
        self.add_walls(walls);
        self
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    #[inline]
    pub fn in_bounds(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is not a wall. Says nothing about bounds.
    #[inline]
    pub fn passable(&self, p: Point) -> bool {
        !self.walls.contains(&p)
    }

    /// Mark `p` as blocked. Out-of-bounds points are accepted and have no
    /// effect on neighbor enumeration.
    pub fn add_wall(&mut self, p: Point) {
        self.walls.insert(p);
    }

    pub fn add_walls(&mut self, walls: impl IntoIterator<Item = Point>) {
        self.walls.extend(walls);
    }

    pub fn remove_wall(&mut self, p: Point) -> bool {
        self.walls.remove(&p)
    }

    pub fn walls(&self) -> &HashSet<Point> {
        &self.walls
    }

    /// Every in-bounds, passable cell in row-major order.
    pub fn open_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.bounds.iter().filter(|&p| self.passable(p))
    }
}

impl Graph for SquareGrid {
    type Node = Point;

    fn neighbors(&self, node: &Point, buf: &mut Vec<Point>) {
        buf.extend(
            node.neighbors_4()
                .into_iter()
                .filter(|&n| self.in_bounds(n) && self.passable(n)),
        );
    }
}

impl WeightedGraph for SquareGrid {}

// ---------------------------------------------------------------------------
// GridWithWeights
// ---------------------------------------------------------------------------

/// A [`SquareGrid`] where entering a cell may cost more than one step.
///
/// The cost belongs to the destination cell regardless of the direction it
/// is entered from; cells without an entry cost 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridWithWeights {
    grid: SquareGrid,
    weights: HashMap<Point, i32>,
}

impl GridWithWeights {
    pub fn new(width: i32, height: i32) -> Self {
        Self::from_grid(SquareGrid::new(width, height))
    }

    pub fn from_grid(grid: SquareGrid) -> Self {
        Self {
            grid,
            weights: HashMap::new(),
        }
    }

    pub fn grid(&self) -> &SquareGrid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut SquareGrid {
        &mut self.grid
    }

    /// Set the cost of entering `p`.
    ///
    /// Negative costs are rejected with [`SearchError::InvalidCost`].
    pub fn set_weight(&mut self, p: Point, cost: i32) -> Result<()> {
        if cost < 0 {
            return Err(SearchError::InvalidCost { cost });
        }
        self.weights.insert(p, cost);
        Ok(())
    }

    /// Set the same cost on every point of `cells`.
    pub fn set_weights(&mut self, cells: impl IntoIterator<Item = Point>, cost: i32) -> Result<()> {
        cells.into_iter().try_for_each(|p| self.set_weight(p, cost))
    }

    /// Drop the override for `p`, restoring the default cost of 1.
    pub fn clear_weight(&mut self, p: Point) -> Option<i32> {
        self.weights.remove(&p)
    }

    /// Cost of entering `p`.
    #[inline]
    pub fn weight(&self, p: Point) -> i32 {
        self.weights.get(&p).copied().unwrap_or(1)
    }

    pub fn weights(&self) -> &HashMap<Point, i32> {
        &self.weights
    }
}

impl From<SquareGrid> for GridWithWeights {
    fn from(grid: SquareGrid) -> Self {
        Self::from_grid(grid)
    }
}

impl Graph for GridWithWeights {
    type Node = Point;

    #[inline]
    fn neighbors(&self, node: &Point, buf: &mut Vec<Point>) {
        self.grid.neighbors(node, buf);
    }
}

impl WeightedGraph for GridWithWeights {
    #[inline]
    fn cost(&self, _from: &Point, to: &Point) -> i32 {
        self.weight(*to)
    }
}
