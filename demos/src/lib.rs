//! Plain-text grid rendering shared by the demo binaries, plus re-exports
//! of the sample graphs they run on.
//!
//! Demonstrates: breadth-first traversal of a label graph, parent arrows on
//! a walled grid, early exit, Dijkstra and A* on a weighted map.

use gridwalk_core::{Direction, Point};
use gridwalk_paths::{CameFrom, CostSoFar, SquareGrid};

pub use gridwalk_paths::samples::{FOREST_COST, forest_map, letter_graph, walled_grid};

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// What to overlay on a rendered grid.
///
/// Overlays are applied in priority order: start, goal, path, cost number,
/// parent arrow, then wall or empty floor.
#[derive(Debug, Clone, Copy)]
pub struct Overlay<'a> {
    /// Characters per cell.
    pub width: usize,
    pub point_to: Option<&'a CameFrom<Point>>,
    pub number: Option<&'a CostSoFar<Point>>,
    pub path: Option<&'a [Point]>,
    pub start: Option<Point>,
    pub goal: Option<Point>,
}

impl Default for Overlay<'_> {
    fn default() -> Self {
        Self {
            width: 2,
            point_to: None,
            number: None,
            path: None,
            start: None,
            goal: None,
        }
    }
}

fn arrow(d: Direction) -> char {
    match d {
        Direction::East => '>',
        Direction::North => '^',
        Direction::West => '<',
        Direction::South => 'v',
    }
}

fn cell_glyph(grid: &SquareGrid, p: Point, o: &Overlay<'_>) -> String {
    if o.start == Some(p) {
        return "A".into();
    }
    if o.goal == Some(p) {
        return "Z".into();
    }
    if o.path.is_some_and(|path| path.contains(&p)) {
        return "@".into();
    }
    if let Some(&cost) = o.number.and_then(|n| n.get(&p)) {
        return cost.to_string();
    }
    if let Some(Some(prev)) = o.point_to.and_then(|cf| cf.get(&p)) {
        if let Some(d) = Direction::between(p, *prev) {
            return arrow(d).to_string();
        }
    }
    if grid.passable(p) { ".".into() } else { "#".repeat(o.width) }
}

/// Render `grid` as text, north (largest `y`) at the top.
pub fn draw_grid(grid: &SquareGrid, o: &Overlay<'_>) -> String {
    let mut out = String::new();
    for y in (0..grid.height()).rev() {
        for x in 0..grid.width() {
            let glyph = cell_glyph(grid, Point::new(x, y), o);
            out.push_str(&format!("{glyph:<w$}", w = o.width));
        }
        out.push('\n');
    }
    out
}
