//! Geometry primitives: [`Pos`] and [`Bounds`].
//!
//! Positions are expressed as `(row, col)` with rows growing downwards,
//! which is how both the search grid and the terminal address cells.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell position. Rows grow down, columns grow right.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a position shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// The four axis-aligned neighbours in up, down, left, right order.
    ///
    /// Positions outside any particular grid are included; callers filter
    /// them against their [`Bounds`].
    #[inline]
    pub const fn neighbors_4(self) -> [Pos; 4] {
        [
            self.shift(-1, 0),
            self.shift(1, 0),
            self.shift(0, -1),
            self.shift(0, 1),
        ]
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// ---------------------------------------------------------------------------
// Bounds
// ---------------------------------------------------------------------------

/// A `rows × cols` rectangle anchored at the origin.
///
/// `Bounds` doubles as the row-major index mapping for flat cell arrays.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds {
    pub rows: i32,
    pub cols: i32,
}

impl Bounds {
    /// Create new bounds. Negative sizes are clamped to zero.
    #[inline]
    pub const fn new(rows: i32, cols: i32) -> Self {
        Self {
            rows: if rows < 0 { 0 } else { rows },
            cols: if cols < 0 { 0 } else { cols },
        }
    }

    /// Total number of cells.
    #[inline]
    pub const fn len(self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// Whether the rectangle holds no cells.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Whether `p` lies inside the rectangle.
    #[inline]
    pub const fn contains(self, p: Pos) -> bool {
        p.row >= 0 && p.col >= 0 && p.row < self.rows && p.col < self.cols
    }

    /// Row-major flat index of `p`, or `None` if out of bounds.
    #[inline]
    pub const fn idx(self, p: Pos) -> Option<usize> {
        if self.contains(p) {
            Some((p.row as usize) * (self.cols as usize) + (p.col as usize))
        } else {
            None
        }
    }

    /// Inverse of [`idx`](Bounds::idx). `idx` must be below [`len`](Bounds::len).
    #[inline]
    pub const fn pos(self, idx: usize) -> Pos {
        let cols = self.cols as usize;
        Pos::new((idx / cols) as i32, (idx % cols) as i32)
    }

    /// Row-major iterator over every position.
    #[inline]
    pub fn iter(self) -> BoundsIter {
        BoundsIter {
            bounds: self,
            next: 0,
        }
    }
}

impl IntoIterator for Bounds {
    type Item = Pos;
    type IntoIter = BoundsIter;
    #[inline]
    fn into_iter(self) -> BoundsIter {
        self.iter()
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Row-major iterator over the positions in a [`Bounds`].
#[derive(Clone, Debug)]
pub struct BoundsIter {
    bounds: Bounds,
    next: usize,
}

impl Iterator for BoundsIter {
    type Item = Pos;

    #[inline]
    fn next(&mut self) -> Option<Pos> {
        if self.next >= self.bounds.len() {
            return None;
        }
        let p = self.bounds.pos(self.next);
        self.next += 1;
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.bounds.len().saturating_sub(self.next);
        (rest, Some(rest))
    }
}

impl ExactSizeIterator for BoundsIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pos_arithmetic() {
        let a = Pos::new(1, 2);
        let b = Pos::new(3, 5);
        assert_eq!(a + b, Pos::new(4, 7));
        assert_eq!(b - a, Pos::new(2, 3));
        assert_eq!(a.shift(-1, 1), Pos::new(0, 3));
    }

    #[test]
    fn neighbors_are_up_down_left_right() {
        let n = Pos::new(2, 2).neighbors_4();
        assert_eq!(
            n,
            [
                Pos::new(1, 2),
                Pos::new(3, 2),
                Pos::new(2, 1),
                Pos::new(2, 3)
            ]
        );
    }

    #[test]
    fn bounds_contains() {
        let b = Bounds::new(2, 3);
        assert!(b.contains(Pos::new(0, 0)));
        assert!(b.contains(Pos::new(1, 2)));
        assert!(!b.contains(Pos::new(2, 0)));
        assert!(!b.contains(Pos::new(0, 3)));
        assert!(!b.contains(Pos::new(-1, 0)));
    }

    #[test]
    fn bounds_negative_clamped() {
        let b = Bounds::new(-4, 3);
        assert!(b.is_empty());
        assert_eq!(b.len(), 0);
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn idx_and_pos_agree() {
        let b = Bounds::new(4, 7);
        for (i, p) in b.iter().enumerate() {
            assert_eq!(b.idx(p), Some(i));
            assert_eq!(b.pos(i), p);
        }
        assert_eq!(b.idx(Pos::new(4, 0)), None);
    }

    #[test]
    fn iter_is_row_major() {
        let pts: Vec<_> = Bounds::new(2, 3).iter().collect();
        assert_eq!(pts.len(), 6);
        assert_eq!(pts[0], Pos::new(0, 0));
        assert_eq!(pts[2], Pos::new(0, 2));
        assert_eq!(pts[3], Pos::new(1, 0));
        assert_eq!(pts[5], Pos::new(1, 2));
    }

    #[test]
    fn iter_size_hint_shrinks() {
        let mut it = Bounds::new(2, 2).iter();
        assert_eq!(it.len(), 4);
        it.next();
        assert_eq!(it.len(), 3);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn pos_round_trip() {
        let p = Pos::new(3, 7);
        let json = serde_json::to_string(&p).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }
}
