//! Strategy selection.
//!
//! The three strategies form a closed set, so dispatch is an enum with a
//! single `solve` entry point rather than an open plugin hierarchy.

use super::astar::AStar;
use super::bfs::BreadthFirst;
use super::dfs::{DepthFirst, DuplicatePolicy};
use super::domain::{Heuristic, SearchDomain};
use super::outcome::SearchOutcome;
use super::stats::SearchStats;

/// A search strategy over a domain.
///
/// Construct with [`Solver::breadth_first`], [`Solver::depth_first`], or
/// [`Solver::a_star`], then call [`Solver::solve`]. Strategy-specific
/// configuration (depth limit, duplicate policy, heuristic) is fixed at
/// construction.
pub enum Solver<D: SearchDomain> {
    /// Uninformed FIFO search; minimum-action-count solutions.
    BreadthFirst(BreadthFirst<D>),

    /// LIFO search bounded by a depth limit.
    DepthFirst(DepthFirst<D>),

    /// Best-first search guided by a heuristic.
    AStar(AStar<D>),
}

impl<D: SearchDomain> Solver<D> {
    /// Breadth-first strategy.
    pub fn breadth_first(domain: D) -> Self {
        Solver::BreadthFirst(BreadthFirst::new(domain))
    }

    /// Depth-bounded depth-first strategy with the default
    /// [`DuplicatePolicy`].
    pub fn depth_first(domain: D, depth_limit: u32) -> Self {
        Solver::DepthFirst(DepthFirst::new(domain, depth_limit))
    }

    /// Depth-bounded depth-first strategy with an explicit policy.
    pub fn depth_first_with_policy(domain: D, depth_limit: u32, policy: DuplicatePolicy) -> Self {
        Solver::DepthFirst(DepthFirst::new(domain, depth_limit).with_policy(policy))
    }

    /// A* strategy with a heuristic.
    pub fn a_star<H>(domain: D, heuristic: H) -> Self
    where
        H: Heuristic<D::State> + 'static,
    {
        Solver::AStar(AStar::new(domain, heuristic))
    }

    /// Search for a goal reachable from `initial`.
    pub fn solve(&mut self, initial: &D::State) -> SearchOutcome<D::Action> {
        match self {
            Solver::BreadthFirst(s) => s.solve(initial),
            Solver::DepthFirst(s) => s.solve(initial),
            Solver::AStar(s) => s.solve(initial),
        }
    }

    /// Statistics for the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        match self {
            Solver::BreadthFirst(s) => s.stats(),
            Solver::DepthFirst(s) => s.stats(),
            Solver::AStar(s) => s.stats(),
        }
    }

    /// Human-readable strategy name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Solver::BreadthFirst(_) => "breadth-first",
            Solver::DepthFirst(_) => "depth-first",
            Solver::AStar(_) => "a-star",
        }
    }
}
