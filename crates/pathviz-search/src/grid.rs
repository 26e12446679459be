//! The [`NodeGrid`] arena: every cell of the board, its role and its search
//! state, addressed by row-major index.

use pathviz_core::{Bounds, Pos};

use crate::error::SearchError;
use crate::node::Node;

/// A fixed-size grid of [`Node`]s with exactly one start and one finish.
///
/// Nodes live in a flat arena; predecessor links and the open set refer to
/// them by index. Walls may be edited freely while no run owns the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeGrid {
    bounds: Bounds,
    nodes: Vec<Node>,
    start: usize,
    finish: usize,
}

impl NodeGrid {
    /// Create a `rows × cols` grid with the default endpoint layout: both on
    /// the middle row, start at 30% and finish at 70% of the width.
    pub fn new(rows: i32, cols: i32) -> Result<Self, SearchError> {
        if rows <= 0 || cols <= 0 {
            return Err(SearchError::InvalidDimensions { rows, cols });
        }
        // widened so that wide grids cannot overflow
        let at = |tenths: i64| (i64::from(cols) * tenths / 10) as i32;
        let row = rows / 2;
        Self::with_endpoints(rows, cols, Pos::new(row, at(3)), Pos::new(row, at(7)))
    }

    /// Create a grid with explicit start and finish positions.
    pub fn with_endpoints(
        rows: i32,
        cols: i32,
        start: Pos,
        finish: Pos,
    ) -> Result<Self, SearchError> {
        if rows <= 0 || cols <= 0 {
            return Err(SearchError::InvalidDimensions { rows, cols });
        }
        let bounds = Bounds::new(rows, cols);
        let start_idx = bounds.idx(start).ok_or(SearchError::OutOfBounds(start))?;
        let finish_idx = bounds.idx(finish).ok_or(SearchError::OutOfBounds(finish))?;
        if start_idx == finish_idx {
            return Err(SearchError::SameEndpoints(start));
        }
        let nodes = bounds
            .iter()
            .map(|p| Node::new(p, p == start, p == finish))
            .collect();
        Ok(Self {
            bounds,
            nodes,
            start: start_idx,
            finish: finish_idx,
        })
    }

    /// Build a grid from a text layout, one line per row.
    ///
    /// `S` marks the start, `F` the finish, `#` a wall and `.` an open
    /// cell. Leading and trailing blank lines are ignored.
    pub fn parse(layout: &str) -> Result<Self, SearchError> {
        let lines: Vec<&str> = layout
            .trim_matches('\n')
            .lines()
            .map(str::trim_end)
            .collect();
        let rows = lines.len() as i32;
        let cols = lines.first().map_or(0, |l| l.chars().count()) as i32;

        let mut start = None;
        let mut finish = None;
        let mut walls = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            if line.chars().count() as i32 != cols {
                return Err(SearchError::InconsistentRows { line: row });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row as i32, col as i32);
                match ch {
                    '.' => {}
                    '#' => walls.push(pos),
                    'S' | 'F' => {
                        let slot = if ch == 'S' { &mut start } else { &mut finish };
                        if slot.is_some() {
                            return Err(SearchError::DuplicateEndpoint { ch, pos });
                        }
                        *slot = Some(pos);
                    }
                    _ => return Err(SearchError::InvalidRune { ch, pos }),
                }
            }
        }

        let start = start.ok_or(SearchError::MissingEndpoint('S'))?;
        let finish = finish.ok_or(SearchError::MissingEndpoint('F'))?;
        let mut grid = Self::with_endpoints(rows, cols, start, finish)?;
        for p in walls {
            grid.set_wall(p, true)?;
        }
        Ok(grid)
    }

    // -----------------------------------------------------------------------
    // Shape and lookup
    // -----------------------------------------------------------------------

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

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: construction rejects empty grids.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Arena index of `p`, or `None` outside the grid.
    #[inline]
    pub fn idx(&self, p: Pos) -> Option<usize> {
        self.bounds.idx(p)
    }

    #[inline]
    pub fn node(&self, p: Pos) -> Option<&Node> {
        self.idx(p).map(|i| &self.nodes[i])
    }

    /// The node at arena index `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is not below [`len`](NodeGrid::len).
    #[inline]
    #[track_caller]
    pub fn node_at(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    #[inline]
    pub(crate) fn node_at_mut(&mut self, idx: usize) -> &mut Node {
        &mut self.nodes[idx]
    }

    /// All nodes in row-major order.
    #[inline]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Arena index of the start node.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Arena index of the finish node.
    #[inline]
    pub fn finish(&self) -> usize {
        self.finish
    }

    #[inline]
    pub fn start_pos(&self) -> Pos {
        self.nodes[self.start].pos()
    }

    #[inline]
    pub fn finish_pos(&self) -> Pos {
        self.nodes[self.finish].pos()
    }

    /// Append the in-bounds axis-aligned neighbours of `idx` to `buf`, in
    /// up, down, left, right order. The caller clears `buf` first.
    pub fn neighbors(&self, idx: usize, buf: &mut Vec<usize>) {
        let p = self.bounds.pos(idx);
        buf.extend(p.neighbors_4().into_iter().filter_map(|n| self.idx(n)));
    }

    // -----------------------------------------------------------------------
    // Walls
    // -----------------------------------------------------------------------

    /// Place or remove a wall at `p`. Endpoints can never become walls.
    pub fn set_wall(&mut self, p: Pos, wall: bool) -> Result<(), SearchError> {
        let i = self.idx(p).ok_or(SearchError::OutOfBounds(p))?;
        if i == self.start || i == self.finish {
            return Err(SearchError::EndpointEdit(p));
        }
        self.nodes[i].is_wall = wall;
        Ok(())
    }

    /// Flip the wall at `p` and return its new state.
    pub fn toggle_wall(&mut self, p: Pos) -> Result<bool, SearchError> {
        let wall = !self.node(p).ok_or(SearchError::OutOfBounds(p))?.is_wall();
        self.set_wall(p, wall)?;
        Ok(wall)
    }

    pub fn clear_walls(&mut self) {
        for n in &mut self.nodes {
            n.is_wall = false;
        }
    }

    /// Positions of every wall, row-major.
    pub fn walls(&self) -> impl Iterator<Item = Pos> + '_ {
        self.nodes.iter().filter(|n| n.is_wall()).map(Node::pos)
    }

    // -----------------------------------------------------------------------
    // Reset
    // -----------------------------------------------------------------------

    /// Clear all search state in place; positions, roles and walls stay.
    pub fn reset_search(&mut self) {
        for n in &mut self.nodes {
            n.clear_search();
        }
    }
}

/// A copy of `grid` with every search field back to its initial value and
/// the wall layout preserved.
pub fn reset_grid(grid: &NodeGrid) -> NodeGrid {
    let mut fresh = grid.clone();
    fresh.reset_search();
    fresh
}
