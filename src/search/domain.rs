//! Capability contracts between the search engine and a problem domain.
//!
//! The engine never sees inside a state. A domain supplies three pure
//! operations (enumerate legal actions, apply an action, test for a goal)
//! plus equality/hashing on states for visited-set membership. Heuristic
//! guidance for A* is a separate single-method capability so callers can
//! supply arbitrary scoring without an inheritance hierarchy.

use std::hash::Hash;

/// A search problem: states, legal actions, and a goal predicate.
///
/// All three operations must be pure. `apply` must return a fresh
/// successor and never mutate its input; `actions` must enumerate in a
/// deterministic order or repeated solves will not be reproducible.
///
/// `State: Eq + Hash` is the engine's dedup contract: two states that
/// compare equal are the same search node and will not both be expanded.
pub trait SearchDomain {
    /// One configuration of the domain.
    type State: Clone + Eq + Hash;

    /// One legal transition between states.
    type Action: Clone;

    /// All and only the legal actions from `state`. May be empty
    /// (a dead end, not an error).
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Apply `action` to `state`, producing the successor state.
    ///
    /// `action` is assumed to have come from `actions(state)`; behavior
    /// on an illegal action is a contract violation by the caller.
    fn apply(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Is this state a goal?
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// Lower-bound estimate of remaining cost from a state to a goal.
///
/// Used by [`AStar`](crate::search::AStar) to order its frontier. The
/// engine treats the estimate as opaque: admissibility (never
/// overestimating) and consistency are the supplier's responsibility and
/// are required only for A*'s optimality guarantee, not for termination.
pub trait Heuristic<S> {
    /// Estimated remaining cost. Must be non-negative.
    fn estimate(&self, state: &S) -> f64;
}

/// Any `Fn(&S) -> f64` closure is a heuristic.
impl<S, F> Heuristic<S> for F
where
    F: Fn(&S) -> f64,
{
    fn estimate(&self, state: &S) -> f64 {
        self(state)
    }
}

/// The zero heuristic: turns A* into uniform-cost search.
///
/// Trivially admissible, so A* with `ZeroHeuristic` still returns
/// minimum-action-count solutions (at breadth-first's expansion cost).
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroHeuristic;

impl<S> Heuristic<S> for ZeroHeuristic {
    fn estimate(&self, _state: &S) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_heuristic() {
        let h = ZeroHeuristic;
        assert_eq!(h.estimate(&42u32), 0.0);
        assert_eq!(h.estimate(&"anything"), 0.0);
    }

    #[test]
    fn test_closure_heuristic() {
        let h = |state: &u32| *state as f64 * 2.0;
        assert_eq!(h.estimate(&3), 6.0);
    }

    #[test]
    fn test_boxed_heuristic() {
        let h: Box<dyn Heuristic<u32>> = Box::new(|state: &u32| *state as f64);
        assert_eq!(h.estimate(&7), 7.0);
    }
}
