use pathviz_core::Pos;

/// Path cost. Every step between neighbouring cells costs 1.
pub type Cost = i32;

/// Sentinel cost meaning "not reached yet" (+∞).
pub const UNREACHABLE: Cost = Cost::MAX;

/// One grid cell together with its search state.
///
/// Scores are written through [`set_scores`](Node::set_scores) so that
/// `f == g + h` holds whenever `g` is finite and `f == UNREACHABLE`
/// otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pos: Pos,
    is_start: bool,
    is_finish: bool,
    pub(crate) is_wall: bool,
    g: Cost,
    h: Cost,
    f: Cost,
    pub(crate) visited: bool,
    /// Arena index of the predecessor on the best known path.
    pub(crate) previous: Option<usize>,
}

impl Node {
    pub(crate) fn new(pos: Pos, is_start: bool, is_finish: bool) -> Self {
        Self {
            pos,
            is_start,
            is_finish,
            is_wall: false,
            g: UNREACHABLE,
            h: 0,
            f: UNREACHABLE,
            visited: false,
            previous: None,
        }
    }

    #[inline]
    pub fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub fn is_start(&self) -> bool {
        self.is_start
    }

    #[inline]
    pub fn is_finish(&self) -> bool {
        self.is_finish
    }

    #[inline]
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    /// Cost of the best known path from the start, or [`UNREACHABLE`].
    #[inline]
    pub fn g(&self) -> Cost {
        self.g
    }

    /// Heuristic estimate to the goal.
    #[inline]
    pub fn h(&self) -> Cost {
        self.h
    }

    #[inline]
    pub fn f(&self) -> Cost {
        self.f
    }

    #[inline]
    pub fn is_visited(&self) -> bool {
        self.visited
    }

    #[inline]
    pub fn is_reached(&self) -> bool {
        self.g != UNREACHABLE
    }

    #[inline]
    pub fn previous(&self) -> Option<usize> {
        self.previous
    }

    pub(crate) fn set_scores(&mut self, g: Cost, h: Cost) {
        self.g = g;
        self.h = h;
        self.f = if g == UNREACHABLE {
            UNREACHABLE
        } else {
            g.saturating_add(h)
        };
    }

    /// Back to the freshly-created state, keeping position, roles and walls.
    pub(crate) fn clear_search(&mut self) {
        self.set_scores(UNREACHABLE, 0);
        self.visited = false;
        self.previous = None;
    }
}
