//! Breadth-first search.
//!
//! FIFO frontier, visited set seeded with the initial state, successors
//! marked visited at generation time. Expansion is strictly by increasing
//! depth and no state is expanded twice, so on a finite graph the first
//! goal found has minimum action count.

use std::collections::VecDeque;
use std::time::Instant;

use log::debug;
use rustc_hash::FxHashSet;

use super::domain::SearchDomain;
use super::outcome::SearchOutcome;
use super::path::{PathNodeId, PathTree};
use super::stats::SearchStats;

/// Uninformed breadth-first search over a domain.
///
/// Owns the domain and per-invocation statistics; `solve` may be called
/// repeatedly, each call resetting the stats.
pub struct BreadthFirst<D: SearchDomain> {
    /// The problem domain.
    domain: D,

    /// Statistics for the most recent search.
    stats: SearchStats,
}

impl<D: SearchDomain> BreadthFirst<D> {
    /// Create a breadth-first solver for a domain.
    pub fn new(domain: D) -> Self {
        Self {
            domain,
            stats: SearchStats::default(),
        }
    }

    /// Search for a goal reachable from `initial`.
    ///
    /// Returns a minimum-action-count `Solution` if one exists, or
    /// `Exhausted` once every reachable state has been expanded.
    pub fn solve(&mut self, initial: &D::State) -> SearchOutcome<D::Action> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree: PathTree<D::Action> = PathTree::new();
        let mut frontier: VecDeque<(D::State, PathNodeId)> = VecDeque::new();
        let mut visited: FxHashSet<D::State> = FxHashSet::default();

        visited.insert(initial.clone());
        frontier.push_back((initial.clone(), tree.root()));

        let outcome = loop {
            let Some((state, node)) = frontier.pop_front() else {
                break SearchOutcome::Exhausted;
            };

            if self.domain.is_goal(&state) {
                break SearchOutcome::Solution(tree.reconstruct(node));
            }

            self.stats.expanded += 1;
            self.stats.observe_depth(tree.depth(node));

            for action in self.domain.actions(&state) {
                let successor = self.domain.apply(&state, &action);
                self.stats.generated += 1;

                if !visited.insert(successor.clone()) {
                    self.stats.duplicates += 1;
                    continue;
                }

                let child = tree.child(node, action);
                frontier.push_back((successor, child));
            }

            self.stats.observe_frontier(frontier.len());
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "breadth-first finished: solution={} expanded={} generated={} duplicates={} peak={}",
            outcome.is_solution(),
            self.stats.expanded,
            self.stats.generated,
            self.stats.duplicates,
            self.stats.frontier_peak,
        );

        outcome
    }

    /// Get statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the domain reference.
    pub fn domain(&self) -> &D {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter domain: states are integers, one action increments.
    /// Goal is a fixed target value.
    struct CountUp {
        target: u32,
    }

    impl SearchDomain for CountUp {
        type State = u32;
        type Action = u32;

        fn actions(&self, state: &u32) -> Vec<u32> {
            if *state < self.target {
                vec![state + 1]
            } else {
                vec![]
            }
        }

        fn apply(&self, _state: &u32, action: &u32) -> u32 {
            *action
        }

        fn is_goal(&self, state: &u32) -> bool {
            *state == self.target
        }
    }

    #[test]
    fn test_bfs_finds_linear_path() {
        let mut search = BreadthFirst::new(CountUp { target: 3 });
        let outcome = search.solve(&0);

        assert_eq!(outcome, SearchOutcome::Solution(vec![1, 2, 3]));
        assert_eq!(search.stats().expanded, 3);
    }

    #[test]
    fn test_bfs_goal_at_start() {
        let mut search = BreadthFirst::new(CountUp { target: 5 });
        let outcome = search.solve(&5);

        assert_eq!(outcome, SearchOutcome::Solution(vec![]));
        assert_eq!(search.stats().expanded, 0);
        assert_eq!(search.stats().generated, 0);
    }

    #[test]
    fn test_bfs_exhausts_on_dead_end() {
        // Start above the target: no actions, no goal.
        let mut search = BreadthFirst::new(CountUp { target: 2 });
        let outcome = search.solve(&7);

        assert_eq!(outcome, SearchOutcome::Exhausted);
    }

    #[test]
    fn test_bfs_stats_reset_between_solves() {
        let mut search = BreadthFirst::new(CountUp { target: 2 });
        search.solve(&0);
        let first = search.stats().expanded;

        search.solve(&0);
        assert_eq!(search.stats().expanded, first);
    }
}
