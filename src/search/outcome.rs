//! Search outcomes.
//!
//! "No solution" is a result, not an error: the search loop interacts
//! with no unreliable external resources, so nothing here is retried or
//! recovered. The bounded depth-first strategy distinguishes a frontier
//! that truly emptied from one that was truncated at the depth bound.

use serde::{Deserialize, Serialize};

/// Result of a completed search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome<A> {
    /// Ordered actions from the initial state to a goal.
    ///
    /// Empty when the initial state is already a goal.
    Solution(Vec<A>),

    /// The frontier emptied with every reachable state expanded.
    ///
    /// For breadth-first and A* on a finite graph this proves the goal
    /// is unreachable.
    Exhausted,

    /// Depth-bounded search truncated at least one branch at the bound
    /// and found no goal: "not found within limit", which is weaker than
    /// provable absence.
    CutOff,
}

impl<A> SearchOutcome<A> {
    /// Check if a solution was found.
    #[must_use]
    pub fn is_solution(&self) -> bool {
        matches!(self, SearchOutcome::Solution(_))
    }

    /// Borrow the action sequence, if any.
    #[must_use]
    pub fn actions(&self) -> Option<&[A]> {
        match self {
            SearchOutcome::Solution(actions) => Some(actions),
            _ => None,
        }
    }

    /// Take the action sequence, if any.
    #[must_use]
    pub fn into_actions(self) -> Option<Vec<A>> {
        match self {
            SearchOutcome::Solution(actions) => Some(actions),
            _ => None,
        }
    }
}
