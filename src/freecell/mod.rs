//! FreeCell solitaire as a search domain.
//!
//! A concrete domain for the generic engine in [`crate::search`]:
//! states are board layouts, actions are single-card moves, the goal is
//! all four foundations at king. Safe automoves keep the state space
//! small: cards the tableau can never need go home automatically after
//! every move and after dealing.
//!
//! ## Usage
//!
//! ```
//! use cardsolve::freecell::{deal, FreecellGame};
//! use cardsolve::freecell::heuristic::BuriedPenalty;
//! use cardsolve::search::Solver;
//!
//! let board = deal(42);
//! assert!(!board.is_solved());
//!
//! let solver = Solver::a_star(FreecellGame, BuriedPenalty);
//! assert_eq!(solver.name(), "a-star");
//! // solver.solve(&board) walks the board's move graph
//! ```

pub mod card;
pub mod deal;
pub mod heuristic;
pub mod moves;
pub mod state;

pub use card::{Card, CardParseError, Suit, DECK_SIZE, KING, RANKS, SUITS};
pub use deal::deal;
pub use heuristic::{BuriedPenalty, HomeDistance};
pub use moves::{Location, Move};
pub use state::{GameState, LayoutError, CASCADES, CELLS};

use crate::search::SearchDomain;

/// The FreeCell rules as a [`SearchDomain`].
#[derive(Clone, Copy, Debug, Default)]
pub struct FreecellGame;

impl SearchDomain for FreecellGame {
    type State = GameState;
    type Action = Move;

    fn actions(&self, state: &GameState) -> Vec<Move> {
        state.legal_moves().into_vec()
    }

    fn apply(&self, state: &GameState, action: &Move) -> GameState {
        state.apply_move(*action)
    }

    fn is_goal(&self, state: &GameState) -> bool {
        state.is_solved()
    }
}
