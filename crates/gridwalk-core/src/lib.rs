//! **gridwalk-core** — geometry primitives for the *gridwalk* toolkit.
//!
//! Grid graphs in `gridwalk-paths` identify their nodes with [`Point`]s,
//! bound themselves with a [`Range`] and enumerate neighbours in the fixed
//! [`CARDINALS`] order.

pub mod geom;

pub use geom::{CARDINALS, Direction, Point, Range, RangeIter};
