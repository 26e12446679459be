//! Resumable A* search on a 4-connected grid.
//!
//! The search is split into one unit of work per call so that a front end
//! can animate it: every call to [`AstarRun::step`] either adds or updates
//! one frontier node ([`StepKind::Open`]), finalizes one node
//! ([`StepKind::Visited`]), or reports that the run is over.
//!
//! - [`NodeGrid`] owns the per-cell search state in a flat arena.
//! - [`AstarRun`] owns a grid for the duration of a run and drives A*.
//! - [`reconstruct_path`] walks predecessor links back from the goal.
//!
//! ```
//! use pathviz_search::{AstarRun, NodeGrid, Outcome, Pos};
//!
//! let grid = NodeGrid::with_endpoints(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
//! let mut run = AstarRun::from_grid(grid).unwrap();
//! assert_eq!(run.finish(), Outcome::Found);
//! let path = run.path().unwrap();
//! assert_eq!(path.len(), 9);
//! assert_eq!(path.cost(), 8);
//! ```

mod astar;
mod distance;
mod error;
mod grid;
mod node;
mod path;

pub use astar::{AstarRun, Outcome, RunError, RunStats, Step, StepEvent, StepKind};
pub use distance::manhattan;
pub use error::SearchError;
pub use grid::{NodeGrid, reset_grid};
pub use node::{Cost, Node, UNREACHABLE};
pub use path::{Path, reconstruct_path};
pub use pathviz_core::{Bounds, Pos};
