use pathviz_core::Pos;

use crate::node::Cost;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for unit-cost 4-directional movement.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> Cost {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}
