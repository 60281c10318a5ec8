//! A* best-first search.
//!
//! Min-priority frontier ordered by `f = g + h`: accumulated path cost
//! (one unit per action) plus the heuristic estimate of remaining cost.
//! Stale frontier entries are removed lazily: a popped entry whose state
//! is already visited is a dominated copy and is discarded.
//!
//! If the supplied heuristic is admissible and consistent, the first
//! goal popped is cost-optimal. The engine does not verify either
//! property; it treats the estimate as an opaque score.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::time::Instant;

use log::debug;
use ordered_float::OrderedFloat;
use rustc_hash::FxHashSet;

use super::domain::{Heuristic, SearchDomain};
use super::outcome::SearchOutcome;
use super::path::{PathNodeId, PathTree};
use super::stats::SearchStats;

/// One frontier entry: a state, its path node, accumulated cost `g`,
/// and the heap key `(f, seq)`.
///
/// Ordering compares only the key. `seq` is a monotone insertion counter,
/// so equal-`f` entries pop in insertion order (deterministic tie-break).
struct OpenEntry<S> {
    f: OrderedFloat<f64>,
    seq: u64,
    g: f64,
    state: S,
    node: PathNodeId,
}

impl<S> PartialEq for OpenEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl<S> Eq for OpenEntry<S> {}

impl<S> PartialOrd for OpenEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for OpenEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f.cmp(&other.f).then(self.seq.cmp(&other.seq))
    }
}

/// Heuristic-guided best-first search over a domain.
///
/// Step cost is fixed at one action, so `g` equals path depth and the
/// returned solution minimizes action count whenever the heuristic is
/// admissible ([`ZeroHeuristic`](super::ZeroHeuristic) always is).
pub struct AStar<D: SearchDomain> {
    /// The problem domain.
    domain: D,

    /// Lower-bound estimate of remaining cost.
    heuristic: Box<dyn Heuristic<D::State>>,

    /// Statistics for the most recent search.
    stats: SearchStats,
}

impl<D: SearchDomain> AStar<D> {
    /// Create an A* solver with a heuristic.
    pub fn new<H>(domain: D, heuristic: H) -> Self
    where
        H: Heuristic<D::State> + 'static,
    {
        Self {
            domain,
            heuristic: Box::new(heuristic),
            stats: SearchStats::default(),
        }
    }

    /// Search for a goal reachable from `initial`.
    ///
    /// Returns `Solution` (cost-optimal under an admissible, consistent
    /// heuristic) or `Exhausted` once every reachable state has been
    /// expanded.
    pub fn solve(&mut self, initial: &D::State) -> SearchOutcome<D::Action> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree: PathTree<D::Action> = PathTree::new();
        let mut frontier: BinaryHeap<Reverse<OpenEntry<D::State>>> = BinaryHeap::new();
        let mut visited: FxHashSet<D::State> = FxHashSet::default();
        let mut seq: u64 = 0;

        frontier.push(Reverse(OpenEntry {
            f: OrderedFloat(self.heuristic.estimate(initial)),
            seq,
            g: 0.0,
            state: initial.clone(),
            node: tree.root(),
        }));

        let outcome = loop {
            let Some(Reverse(entry)) = frontier.pop() else {
                break SearchOutcome::Exhausted;
            };

            // Lazy deletion: a visited state was popped earlier with a
            // score no worse than this entry's.
            if !visited.insert(entry.state.clone()) {
                self.stats.duplicates += 1;
                continue;
            }

            if self.domain.is_goal(&entry.state) {
                break SearchOutcome::Solution(tree.reconstruct(entry.node));
            }

            self.stats.expanded += 1;
            self.stats.observe_depth(tree.depth(entry.node));

            for action in self.domain.actions(&entry.state) {
                let successor = self.domain.apply(&entry.state, &action);
                self.stats.generated += 1;

                if visited.contains(&successor) {
                    self.stats.duplicates += 1;
                    continue;
                }

                let g = entry.g + 1.0;
                let f = g + self.heuristic.estimate(&successor);
                let child = tree.child(entry.node, action);
                seq += 1;

                frontier.push(Reverse(OpenEntry {
                    f: OrderedFloat(f),
                    seq,
                    g,
                    state: successor,
                    node: child,
                }));
            }

            self.stats.observe_frontier(frontier.len());
        };

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "a-star finished: solution={} expanded={} generated={} duplicates={} peak={}",
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
