//! Depth-bounded depth-first search.
//!
//! LIFO frontier; one branch is explored to the depth bound before
//! backtracking, trading optimality and completeness for a frontier that
//! stays proportional to depth. The bound exists to stop unbounded
//! descent in graphs with cycles or very deep branches.
//!
//! Duplicate handling is an explicit configuration choice, not a guess:
//! see [`DuplicatePolicy`].

use std::time::Instant;

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::domain::SearchDomain;
use super::outcome::SearchOutcome;
use super::path::{PathNodeId, PathTree};
use super::stats::SearchStats;

/// How bounded depth-first search treats states it has seen before.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DuplicatePolicy {
    /// No duplicate check: states may be revisited at different depths.
    ///
    /// Complete within the bound (a solution that re-enters an earlier
    /// state at a shallower depth is still found), at the cost of
    /// re-exploring transpositions. The default.
    #[default]
    Unchecked,

    /// Skip successors whose state was already generated this search.
    ///
    /// Keeps transposition-heavy domains tractable, but can miss in-bound
    /// solutions that re-enter a pruned state by a shallower route.
    PruneVisited,
}

/// Depth-bounded depth-first search over a domain.
///
/// An entry popped at exactly `depth_limit` is goal-tested but never
/// expanded, so no returned path exceeds `depth_limit` actions.
pub struct DepthFirst<D: SearchDomain> {
    /// The problem domain.
    domain: D,

    /// Maximum path length explored.
    depth_limit: u32,

    /// Duplicate handling policy.
    policy: DuplicatePolicy,

    /// Statistics for the most recent search.
    stats: SearchStats,
}

impl<D: SearchDomain> DepthFirst<D> {
    /// Create a depth-first solver with a depth limit.
    pub fn new(domain: D, depth_limit: u32) -> Self {
        Self {
            domain,
            depth_limit,
            policy: DuplicatePolicy::default(),
            stats: SearchStats::default(),
        }
    }

    /// Set the duplicate handling policy.
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Search for a goal within `depth_limit` actions of `initial`.
    ///
    /// Returns `Solution` (at most `depth_limit` actions long), `CutOff`
    /// if at least one branch was truncated at the bound, or `Exhausted`
    /// if the bounded subgraph was fully explored.
    pub fn solve(&mut self, initial: &D::State) -> SearchOutcome<D::Action> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree: PathTree<D::Action> = PathTree::new();
        let mut frontier: Vec<(D::State, PathNodeId)> = Vec::new();
        let mut visited: FxHashSet<D::State> = FxHashSet::default();

        if self.policy == DuplicatePolicy::PruneVisited {
            visited.insert(initial.clone());
        }
        frontier.push((initial.clone(), tree.root()));

        let outcome = loop {
            let Some((state, node)) = frontier.pop() else {
                break if self.stats.cutoffs > 0 {
                    SearchOutcome::CutOff
                } else {
                    SearchOutcome::Exhausted
                };
            };

            if self.domain.is_goal(&state) {
                break SearchOutcome::Solution(tree.reconstruct(node));
            }

            // Goal test first: a goal sitting exactly at the bound is
            // still returned, only expansion is cut.
            let depth = tree.depth(node);
            if depth == self.depth_limit {
                self.stats.cutoffs += 1;
                continue;
            }

            self.stats.expanded += 1;
            self.stats.observe_depth(depth);

            for action in self.domain.actions(&state) {
                let successor = self.domain.apply(&state, &action);
                self.stats.generated += 1;

                if self.policy == DuplicatePolicy::PruneVisited
                    && !visited.insert(successor.clone())
                {
                    self.stats.duplicates += 1;
                    continue;
                }

                let child = tree.child(node, action);
                frontier.push((successor, child));
            }

            self.stats.observe_frontier(frontier.len());
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "depth-first finished: solution={} limit={} expanded={} cutoffs={} duplicates={}",
            outcome.is_solution(),
            self.depth_limit,
            self.stats.expanded,
            self.stats.cutoffs,
            self.stats.duplicates,
        );

        outcome
    }

    /// Get statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// The configured depth limit.
    #[must_use]
    pub fn depth_limit(&self) -> u32 {
        self.depth_limit
    }

    /// The configured duplicate policy.
    #[must_use]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Get the domain reference.
    pub fn domain(&self) -> &D {
        &self.domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two-letter alphabet strings; goal is a fixed word.
    struct WordBuilder {
        goal: &'static str,
    }

    impl SearchDomain for WordBuilder {
        type State = String;
        type Action = char;

        fn actions(&self, _state: &String) -> Vec<char> {
            vec!['a', 'b']
        }

        fn apply(&self, state: &String, action: &char) -> String {
            let mut next = state.clone();
            next.push(*action);
            next
        }

        fn is_goal(&self, state: &String) -> bool {
            state == self.goal
        }
    }

    #[test]
    fn test_dfs_finds_word_within_limit() {
        let mut search = DepthFirst::new(WordBuilder { goal: "ab" }, 3);
        let outcome = search.solve(&String::new());

        assert_eq!(outcome, SearchOutcome::Solution(vec!['a', 'b']));
    }

    #[test]
    fn test_dfs_goal_exactly_at_limit() {
        let mut search = DepthFirst::new(WordBuilder { goal: "bb" }, 2);
        let outcome = search.solve(&String::new());

        assert_eq!(outcome, SearchOutcome::Solution(vec!['b', 'b']));
    }

    #[test]
    fn test_dfs_cut_off_below_solution_depth() {
        let mut search = DepthFirst::new(WordBuilder { goal: "aaa" }, 2);
        let outcome = search.solve(&String::new());

        assert_eq!(outcome, SearchOutcome::CutOff);
        assert!(search.stats().cutoffs > 0);
    }

    #[test]
    fn test_dfs_goal_at_start() {
        let mut search = DepthFirst::new(WordBuilder { goal: "" }, 0);
        let outcome = search.solve(&String::new());

        assert_eq!(outcome, SearchOutcome::Solution(vec![]));
        assert_eq!(search.stats().expanded, 0);
    }

    #[test]
    fn test_dfs_never_exceeds_limit() {
        let mut search = DepthFirst::new(WordBuilder { goal: "abab" }, 6);
        let outcome = search.solve(&String::new());

        let actions = outcome.into_actions().expect("solvable");
        assert!(actions.len() <= 6);
    }

    #[test]
    fn test_dfs_prune_visited_skips_transpositions() {
        /// Integer states where both actions lead to the same successor.
        struct Converging;

        impl SearchDomain for Converging {
            type State = u32;
            type Action = u32;

            fn actions(&self, state: &u32) -> Vec<u32> {
                if *state < 4 {
                    vec![state + 1, state + 1]
                } else {
                    vec![]
                }
            }

            fn apply(&self, _state: &u32, action: &u32) -> u32 {
                *action
            }

            fn is_goal(&self, state: &u32) -> bool {
                *state == 4
            }
        }

        let mut search = DepthFirst::new(Converging, 8).with_policy(DuplicatePolicy::PruneVisited);
        let outcome = search.solve(&0);

        assert!(outcome.is_solution());
        assert!(search.stats().duplicates > 0);
    }
}
