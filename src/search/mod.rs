//! Generic state-space search.
//!
//! ## Overview
//!
//! Three interchangeable strategies over one domain contract:
//!
//! - **Breadth-first**: uninformed, FIFO frontier, minimum-action-count
//!   solutions on finite graphs
//! - **Depth-first**: LIFO frontier bounded by a depth limit, low memory,
//!   configurable duplicate handling
//! - **A\***: min-priority frontier ordered by `path cost + heuristic`,
//!   cost-optimal under an admissible, consistent heuristic
//!
//! All three share the same infrastructure: a [`PathTree`] arena for
//! O(depth) path reconstruction, a hash-based visited set for dedup, and
//! per-invocation [`SearchStats`].
//!
//! ## Usage
//!
//! ```
//! use cardsolve::search::{SearchDomain, Solver};
//!
//! // A trivial domain: count from 0 to 3 by increments.
//! struct CountUp;
//!
//! impl SearchDomain for CountUp {
//!     type State = u32;
//!     type Action = u32;
//!
//!     fn actions(&self, state: &u32) -> Vec<u32> {
//!         if *state < 10 { vec![state + 1] } else { vec![] }
//!     }
//!     fn apply(&self, _state: &u32, action: &u32) -> u32 {
//!         *action
//!     }
//!     fn is_goal(&self, state: &u32) -> bool {
//!         *state == 3
//!     }
//! }
//!
//! let mut solver = Solver::breadth_first(CountUp);
//! let outcome = solver.solve(&0);
//! assert_eq!(outcome.actions(), Some(&[1, 2, 3][..]));
//! ```
//!
//! Searches run to completion on the calling thread: no suspension
//! points, no timeout. A caller wanting a time or node budget wraps
//! `solve` externally.

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod domain;
pub mod outcome;
pub mod path;
pub mod solver;
pub mod stats;

// Re-export main types
pub use astar::AStar;
pub use bfs::BreadthFirst;
pub use dfs::{DepthFirst, DuplicatePolicy};
pub use domain::{Heuristic, SearchDomain, ZeroHeuristic};
pub use outcome::SearchOutcome;
pub use path::{PathNode, PathNodeId, PathTree};
pub use solver::Solver;
pub use stats::SearchStats;
