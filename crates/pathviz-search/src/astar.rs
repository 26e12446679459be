//! The resumable A* state machine.

use std::collections::VecDeque;
use std::fmt;

use pathviz_core::Pos;

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::grid::NodeGrid;
use crate::path::{Path, reconstruct_path};

/// What a [`StepEvent`] reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepKind {
    /// A node was added to the frontier or got a better score while in it.
    Open,
    /// A node was removed from the frontier and finalized.
    Visited,
}

/// One unit of search progress.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepEvent {
    pub kind: StepKind,
    pub nodes: Vec<Pos>,
}

impl StepEvent {
    fn single(kind: StepKind, pos: Pos) -> Self {
        Self {
            kind,
            nodes: vec![pos],
        }
    }
}

/// How a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// The goal was visited; its path can be reconstructed.
    Found,
    /// The frontier ran dry before reaching the goal.
    Unreachable,
}

impl Outcome {
    #[inline]
    pub fn success(self) -> bool {
        self == Self::Found
    }
}

/// Result of a single [`AstarRun::step`] call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Event(StepEvent),
    Done(Outcome),
}

/// Counters over the events a run has emitted so far.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunStats {
    /// Events emitted, of either kind.
    pub steps: usize,
    pub opened: usize,
    pub visited: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Init,
    Searching,
    Done(Outcome),
}

// ---------------------------------------------------------------------------
// RunError
// ---------------------------------------------------------------------------

/// A run could not be started. The grid is handed back untouched.
pub struct RunError {
    error: SearchError,
    grid: NodeGrid,
}

impl RunError {
    #[inline]
    pub fn error(&self) -> &SearchError {
        &self.error
    }

    /// Recover the grid that was passed to [`AstarRun::new`].
    #[inline]
    pub fn into_grid(self) -> NodeGrid {
        self.grid
    }
}

impl fmt::Debug for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot start search: {}", self.error)
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

// ---------------------------------------------------------------------------
// AstarRun
// ---------------------------------------------------------------------------

/// An A* search that advances one event per [`step`](AstarRun::step).
///
/// The run owns its [`NodeGrid`] until [`into_grid`](AstarRun::into_grid),
/// so walls cannot change under it. The open set is scanned linearly for
/// the node with the lowest `f`, then the lowest `h`, then the earliest
/// insertion.
pub struct AstarRun {
    grid: NodeGrid,
    start: usize,
    goal: usize,
    goal_pos: Pos,
    open: Vec<usize>,
    in_open: Vec<bool>,
    /// Node whose neighbours are being relaxed, and those still to do.
    expanding: Option<usize>,
    pending: VecDeque<usize>,
    nbuf: Vec<usize>,
    phase: Phase,
    stats: RunStats,
}

impl fmt::Debug for AstarRun {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AstarRun")
            .field("start", &self.grid.node_at(self.start).pos())
            .field("goal", &self.goal_pos)
            .field("phase", &self.phase)
            .field("open", &self.open.len())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

impl AstarRun {
    /// Begin a run from `start` to `goal` over `grid`.
    ///
    /// Any search state left in the grid is cleared first. Endpoints outside
    /// the grid or on a wall are rejected.
    pub fn new(mut grid: NodeGrid, start: Pos, goal: Pos) -> Result<Self, RunError> {
        let (start_idx, goal_idx) = match Self::check_endpoints(&grid, start, goal) {
            Ok(ends) => ends,
            Err(error) => return Err(RunError { error, grid }),
        };
        grid.reset_search();
        log::debug!(
            "astar: new run {start} -> {goal} on {} grid, {} walls",
            grid.bounds(),
            grid.walls().count()
        );
        let len = grid.len();
        Ok(Self {
            grid,
            start: start_idx,
            goal: goal_idx,
            goal_pos: goal,
            open: Vec::new(),
            in_open: vec![false; len],
            expanding: None,
            pending: VecDeque::with_capacity(4),
            nbuf: Vec::with_capacity(4),
            phase: Phase::Init,
            stats: RunStats::default(),
        })
    }

    /// Begin a run between the grid's own start and finish nodes.
    pub fn from_grid(grid: NodeGrid) -> Result<Self, RunError> {
        let (start, goal) = (grid.start_pos(), grid.finish_pos());
        Self::new(grid, start, goal)
    }

    fn check_endpoints(
        grid: &NodeGrid,
        start: Pos,
        goal: Pos,
    ) -> Result<(usize, usize), SearchError> {
        let mut ends = [0; 2];
        for (slot, p) in ends.iter_mut().zip([start, goal]) {
            let i = grid.idx(p).ok_or(SearchError::OutOfBounds(p))?;
            if grid.node_at(i).is_wall() {
                return Err(SearchError::WallEndpoint(p));
            }
            *slot = i;
        }
        Ok((ends[0], ends[1]))
    }

    // -----------------------------------------------------------------------
    // Stepping
    // -----------------------------------------------------------------------

    /// Perform one unit of work.
    ///
    /// Returns the event it produced, or [`Step::Done`] once the run is over
    /// (and on every call after that).
    pub fn step(&mut self) -> Step {
        match self.phase {
            Phase::Done(outcome) => return Step::Done(outcome),
            Phase::Init => {
                let h = manhattan(self.grid.node_at(self.start).pos(), self.goal_pos);
                self.grid.node_at_mut(self.start).set_scores(0, h);
                self.push_open(self.start);
                self.phase = Phase::Searching;
                return self.emit(StepKind::Open, self.start);
            }
            Phase::Searching => {}
        }

        if let Some(current) = self.expanding {
            while let Some(next) = self.pending.pop_front() {
                if self.relax(current, next) {
                    return self.emit(StepKind::Open, next);
                }
            }
            self.expanding = None;
        }

        loop {
            let Some(ci) = self.pop_best() else {
                return self.end(Outcome::Unreachable);
            };
            let node = self.grid.node_at(ci);
            if node.is_wall() {
                log::trace!("astar: discarding wall {} from open set", node.pos());
                continue;
            }
            if !node.is_reached() {
                log::warn!("astar: unreached node {} in open set", node.pos());
                return self.end(Outcome::Unreachable);
            }

            self.grid.node_at_mut(ci).visited = true;
            if ci == self.goal {
                self.phase = Phase::Done(Outcome::Found);
                log::debug!(
                    "astar: goal reached at cost {} after {} steps",
                    self.grid.node_at(ci).g(),
                    self.stats.steps + 1
                );
            } else {
                self.nbuf.clear();
                self.grid.neighbors(ci, &mut self.nbuf);
                self.pending.extend(self.nbuf.iter().copied());
                self.expanding = Some(ci);
            }
            return self.emit(StepKind::Visited, ci);
        }
    }

    /// Step until the run is over and return how it ended.
    pub fn finish(&mut self) -> Outcome {
        loop {
            if let Step::Done(outcome) = self.step() {
                return outcome;
            }
        }
    }

    /// Try to improve `next` through `current`. Returns `true` if its score
    /// was lowered.
    fn relax(&mut self, current: usize, next: usize) -> bool {
        let n = self.grid.node_at(next);
        if n.is_visited() || n.is_wall() {
            return false;
        }
        let tentative = self.grid.node_at(current).g() + 1;
        if tentative >= n.g() {
            return false;
        }
        let h = manhattan(n.pos(), self.goal_pos);
        let n = self.grid.node_at_mut(next);
        n.previous = Some(current);
        n.set_scores(tentative, h);
        if !self.in_open[next] {
            self.push_open(next);
        }
        true
    }

    fn push_open(&mut self, idx: usize) {
        self.open.push(idx);
        self.in_open[idx] = true;
    }

    /// Remove and return the best open node: lowest `f`, then lowest `h`,
    /// then first inserted.
    fn pop_best(&mut self) -> Option<usize> {
        let (at, _) = self.open.iter().enumerate().min_by_key(|&(_, &i)| {
            let n = self.grid.node_at(i);
            (n.f(), n.h())
        })?;
        let idx = self.open.remove(at);
        self.in_open[idx] = false;
        Some(idx)
    }

    fn emit(&mut self, kind: StepKind, idx: usize) -> Step {
        self.stats.steps += 1;
        match kind {
            StepKind::Open => self.stats.opened += 1,
            StepKind::Visited => self.stats.visited += 1,
        }
        Step::Event(StepEvent::single(kind, self.grid.node_at(idx).pos()))
    }

    fn end(&mut self, outcome: Outcome) -> Step {
        self.phase = Phase::Done(outcome);
        log::debug!(
            "astar: finished {outcome:?} after {} steps ({} visited)",
            self.stats.steps,
            self.stats.visited
        );
        Step::Done(outcome)
    }

    // -----------------------------------------------------------------------
    // Introspection
    // -----------------------------------------------------------------------

    /// The grid being searched, for rendering.
    #[inline]
    pub fn grid(&self) -> &NodeGrid {
        &self.grid
    }

    /// End the run and take the grid back, search state included.
    #[inline]
    pub fn into_grid(self) -> NodeGrid {
        self.grid
    }

    #[inline]
    pub fn start(&self) -> Pos {
        self.grid.node_at(self.start).pos()
    }

    #[inline]
    pub fn goal(&self) -> Pos {
        self.goal_pos
    }

    /// Arena indices of the frontier, in insertion order.
    #[inline]
    pub fn open_set(&self) -> &[usize] {
        &self.open
    }

    #[inline]
    pub fn is_open(&self, idx: usize) -> bool {
        self.in_open.get(idx).copied().unwrap_or(false)
    }

    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    /// How the run ended, or `None` while it is still going.
    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::Done(outcome) => Some(outcome),
            _ => None,
        }
    }

    #[inline]
    pub fn stats(&self) -> RunStats {
        self.stats
    }

    /// The start-to-goal path. Only valid after [`Outcome::Found`].
    pub fn path(&self) -> Result<Path, SearchError> {
        reconstruct_path(&self.grid, self.goal_pos)
    }
}

impl Iterator for AstarRun {
    type Item = StepEvent;

    /// Yields events until the run is over; see [`AstarRun::outcome`].
    fn next(&mut self) -> Option<StepEvent> {
        match self.step() {
            Step::Event(event) => Some(event),
            Step::Done(_) => None,
        }
    }
}
