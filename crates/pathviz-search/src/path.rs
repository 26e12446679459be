use pathviz_core::Pos;

use crate::error::SearchError;
use crate::grid::NodeGrid;
use crate::node::Cost;

/// An ordered start-to-goal sequence of positions and its total cost.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    nodes: Vec<Pos>,
    cost: Cost,
}

impl Path {
    /// Number of cells on the path, both endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    #[inline]
    pub fn nodes(&self) -> &[Pos] {
        &self.nodes
    }

    #[inline]
    pub fn first(&self) -> Option<Pos> {
        self.nodes.first().copied()
    }

    #[inline]
    pub fn last(&self) -> Option<Pos> {
        self.nodes.last().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Pos> + '_ {
        self.nodes.iter().copied()
    }
}

impl IntoIterator for Path {
    type Item = Pos;
    type IntoIter = std::vec::IntoIter<Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.into_iter()
    }
}

/// Follow predecessor links back from `goal` and return the path from the
/// root of the chain (the search start) to `goal`.
///
/// Only meaningful after a run ended with
/// [`Outcome::Found`](crate::Outcome::Found); a goal that was never visited
/// yields [`SearchError::GoalNotVisited`].
pub fn reconstruct_path(grid: &NodeGrid, goal: Pos) -> Result<Path, SearchError> {
    let goal_idx = grid.idx(goal).ok_or(SearchError::OutOfBounds(goal))?;
    let goal_node = grid.node_at(goal_idx);
    if !goal_node.is_visited() {
        return Err(SearchError::GoalNotVisited(goal));
    }

    // a visited goal always has a finite g
    if !goal_node.is_reached() {
        return Err(SearchError::BrokenChain(goal));
    }

    let mut nodes = Vec::with_capacity((goal_node.g() as usize + 1).min(grid.len()));
    let mut cursor = Some(goal_idx);
    while let Some(i) = cursor {
        // a chain can never be longer than the grid
        if nodes.len() == grid.len() {
            return Err(SearchError::BrokenChain(goal));
        }
        let node = grid.node_at(i);
        nodes.push(node.pos());
        cursor = node.previous();
    }
    nodes.reverse();

    Ok(Path {
        nodes,
        cost: goal_node.g(),
    })
}
