//! # cardsolve
//!
//! A generic state-space search engine with a FreeCell solitaire domain.
//!
//! ## Design Principles
//!
//! 1. **Domain-Agnostic Engine**: The strategies know nothing about cards.
//!    A domain supplies states, legal actions, and a goal predicate
//!    through the `SearchDomain` trait.
//!
//! 2. **Closed Strategy Set**: Breadth-first, bounded depth-first, and A*
//!    are enum variants behind one `solve` entry point, not an open
//!    plugin hierarchy.
//!
//! 3. **Per-Invocation State**: Path arenas and statistics live inside
//!    one `solve` call. Nothing leaks across searches; there is no
//!    global counter state.
//!
//! ## Architecture
//!
//! - **Arena Path Tree**: Parent pointers are indices into a flat vector,
//!   giving O(depth) path reconstruction without reference counting.
//!
//! - **Persistent Data Structures**: FreeCell cascades are `im-rs`
//!   vectors, so successor states share structure with their parents.
//!
//! - **Lazy Frontier Deletion**: A* discards stale priority-queue entries
//!   at pop time instead of updating them in place.
//!
//! ## Modules
//!
//! - `search`: domain contract, path tree, outcomes, stats, strategies
//! - `freecell`: cards, board state, dealing, heuristics, domain adapter

pub mod freecell;
pub mod search;

// Re-export commonly used types
pub use crate::search::{
    AStar, BreadthFirst, DepthFirst, DuplicatePolicy,
    Heuristic, SearchDomain, ZeroHeuristic,
    PathNode, PathNodeId, PathTree,
    SearchOutcome, SearchStats, Solver,
};

pub use crate::freecell::{
    deal, BuriedPenalty, Card, FreecellGame, GameState,
    HomeDistance, Location, Move, Suit,
};
