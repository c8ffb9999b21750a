//! Small sample graphs for demos and tests.

use gridwalk_core::Point;

use crate::error::Result;
use crate::{AdjacencyGraph, GridWithWeights, SquareGrid};

/// Entry cost of a forest cell in [`forest_map`].
pub const FOREST_COST: i32 = 5;

const FOREST_WALLS: [(i32, i32); 6] = [(1, 7), (1, 8), (2, 7), (2, 8), (3, 7), (3, 8)];

#[rustfmt::skip]
const FOREST_CELLS: [(i32, i32); 27] = [
    (3, 4), (3, 5), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
    (4, 7), (4, 8), (5, 1), (5, 2), (5, 3), (5, 4), (5, 5), (5, 6),
    (5, 7), (5, 8), (6, 2), (6, 3), (6, 4), (6, 5), (6, 6), (6, 7),
    (7, 3), (7, 4), (7, 5),
];

/// Directed label graph over "A" to "F"; "F" has no edges at all.
pub fn letter_graph() -> AdjacencyGraph<&'static str> {
    [
        ("A", vec!["B"]),
        ("B", vec!["A", "C", "D"]),
        ("C", vec!["A"]),
        ("D", vec!["E", "A"]),
        ("E", vec!["B"]),
        ("F", vec![]),
    ]
    .into_iter()
    .collect()
}

/// 30x15 grid with a 3x3 block of walls at x 21..24, y 0..3.
pub fn walled_grid() -> SquareGrid {
    SquareGrid::new(30, 15).with_walls((21..24).flat_map(|x| (0..3).map(move |y| Point::new(x, y))))
}

/// 10x10 map with a small wall block and a band of forest cells costing
/// [`FOREST_COST`] to enter.
pub fn forest_map() -> Result<GridWithWeights> {
    let mut map = GridWithWeights::new(10, 10);
    map.grid_mut().add_walls(FOREST_WALLS.map(Point::from));
    map.set_weights(FOREST_CELLS.map(Point::from), FOREST_COST)?;
    Ok(map)
}
