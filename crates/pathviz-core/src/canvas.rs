//! [`Canvas`], the fixed-size buffer of styled [`Cell`]s a model draws into,
//! and the [`Frame`] diff that drivers flush to the screen.

use crate::geom::{Bounds, Pos};
use crate::style::Style;

/// One styled character.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Cell {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }

    #[inline]
    pub const fn with_char(self, ch: char) -> Self {
        Self::new(ch, self.style)
    }

    #[inline]
    pub const fn with_style(self, style: Style) -> Self {
        Self::new(self.ch, style)
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(' ', Style::default())
    }
}

/// A `rows × cols` buffer of styled cells that a model draws into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<Cell>,
    bounds: Bounds,
}

impl Canvas {
    /// Create a canvas filled with default (blank) cells.
    pub fn new(rows: i32, cols: i32) -> Self {
        let bounds = Bounds::new(rows, cols);
        Self {
            cells: vec![Cell::default(); bounds.len()],
            bounds,
        }
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.bounds.rows
    }

    #[inline]
    pub fn cols(&self) -> i32 {
        self.bounds.cols
    }

    /// Read the cell at `p`. Returns `Cell::default()` outside the canvas.
    pub fn at(&self, p: Pos) -> Cell {
        self.bounds
            .idx(p)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Set the cell at `p`. No-op outside the canvas.
    pub fn set(&mut self, p: Pos, cell: Cell) {
        if let Some(i) = self.bounds.idx(p) {
            self.cells[i] = cell;
        }
    }

    pub fn fill(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    /// Write `text` left to right starting at `p`, clipped at the right
    /// edge. Returns the number of cells written.
    pub fn print(&mut self, p: Pos, text: &str, style: Style) -> usize {
        let mut written = 0;
        for (i, ch) in text.chars().enumerate() {
            let q = p.shift(0, i as i32);
            if !self.bounds.contains(q) {
                break;
            }
            self.set(q, Cell::new(ch, style));
            written += 1;
        }
        written
    }

    /// The characters of row `row` as a string. Handy in tests.
    pub fn row_text(&self, row: i32) -> String {
        (0..self.bounds.cols)
            .map(|col| self.at(Pos::new(row, col)).ch)
            .collect()
    }

    /// Row-major iterator over `(Pos, Cell)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        self.bounds.iter().zip(self.cells.iter().copied())
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single cell that changed between two draws.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameCell {
    pub cell: Cell,
    pub pos: Pos,
}

/// The set of cell changes between two canvases.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub bounds: Bounds,
}

/// Compute the cells of `curr` that differ from `prev`.
///
/// When the sizes differ every cell of `curr` is reported.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let resized = prev.bounds != curr.bounds;
    let cells = curr
        .iter()
        .filter(|&(p, c)| resized || prev.at(p) != c)
        .map(|(pos, cell)| FrameCell { cell, pos })
        .collect();
    Frame {
        cells,
        bounds: curr.bounds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_at() {
        let c = Canvas::new(3, 4);
        assert_eq!(c.bounds(), Bounds::new(3, 4));
        assert_eq!(c.at(Pos::new(0, 0)), Cell::default());
    }

    #[test]
    fn set_and_get() {
        let mut c = Canvas::new(3, 4);
        c.set(Pos::new(1, 2), Cell::default().with_char('X'));
        assert_eq!(c.at(Pos::new(1, 2)).ch, 'X');
        // out of bounds is ignored and reads back blank
        c.set(Pos::new(10, 10), Cell::default().with_char('Y'));
        assert_eq!(c.at(Pos::new(10, 10)), Cell::default());
    }

    #[test]
    fn print_clips() {
        let mut c = Canvas::new(1, 4);
        let n = c.print(Pos::new(0, 1), "hello", Style::default());
        assert_eq!(n, 3);
        assert_eq!(c.row_text(0), " hel");
    }

    #[test]
    fn fill_every_cell() {
        let mut c = Canvas::new(2, 3);
        c.fill(Cell::default().with_char('.'));
        assert!(c.iter().all(|(_, cell)| cell.ch == '.'));
    }

    #[test]
    fn frame_reports_only_changes() {
        let a = Canvas::new(2, 3);
        let mut b = Canvas::new(2, 3);
        b.set(Pos::new(0, 1), Cell::default().with_char('A'));
        let frame = compute_frame(&a, &b);
        assert_eq!(frame.cells.len(), 1);
        assert_eq!(frame.cells[0].pos, Pos::new(0, 1));
        assert_eq!(frame.cells[0].cell.ch, 'A');
    }

    #[test]
    fn frame_after_resize_is_full() {
        let a = Canvas::new(1, 1);
        let b = Canvas::new(2, 2);
        assert_eq!(compute_frame(&a, &b).cells.len(), 4);
    }
}
