//! Distance estimates for heuristic-guided search.
//!
//! Both heuristics count the work left in moves-to-home terms. Safe
//! automoves make some of that work free, so neither estimate is a
//! strict lower bound on action count; the search engine treats the
//! score as opaque either way.

use super::card::{Suit, DECK_SIZE};
use super::state::GameState;
use crate::search::Heuristic;

/// Cards not yet on a foundation.
///
/// The coarsest useful estimate: every card still in the tableau or a
/// cell needs at least one more placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct HomeDistance;

impl Heuristic<GameState> for HomeDistance {
    fn estimate(&self, state: &GameState) -> f64 {
        let homed: u32 = Suit::ALL.iter().map(|&s| state.home(s) as u32).sum();
        (DECK_SIZE as u32 - homed) as f64
    }
}

/// [`HomeDistance`] plus a burial penalty.
///
/// Adds, per cascade, one point for every card lying on top of a card
/// that is the next one its foundation needs. Those covering cards must
/// each move at least once before the needed card can go home, so the
/// penalty sharpens the estimate on tangled boards.
#[derive(Clone, Copy, Debug, Default)]
pub struct BuriedPenalty;

impl Heuristic<GameState> for BuriedPenalty {
    fn estimate(&self, state: &GameState) -> f64 {
        let mut buried: u32 = 0;

        for i in 0..crate::freecell::state::CASCADES {
            let cascade = state.cascade(i);
            for (depth, card) in cascade.iter().enumerate() {
                if state.home(card.suit) + 1 == card.rank {
                    buried += (cascade.len() - depth - 1) as u32;
                }
            }
        }

        HomeDistance.estimate(state) + buried as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freecell::card::Card;
    use crate::freecell::state::CELLS;

    fn card(code: &str) -> Card {
        code.parse().unwrap()
    }

    fn solved() -> GameState {
        GameState::from_parts(
            [13, 13, 13, 13],
            [None; CELLS],
            [vec![], vec![], vec![], vec![], vec![], vec![], vec![], vec![]],
        )
        .unwrap()
    }

    #[test]
    fn test_home_distance_zero_at_goal() {
        assert_eq!(HomeDistance.estimate(&solved()), 0.0);
        assert_eq!(BuriedPenalty.estimate(&solved()), 0.0);
    }

    #[test]
    fn test_home_distance_counts_remaining_cards() {
        let state = GameState::from_parts(
            [11, 11, 11, 11],
            [None; CELLS],
            [
                vec![card("QH"), card("KH")],
                vec![card("QS"), card("KS")],
                vec![card("QD"), card("KD")],
                vec![card("QC"), card("KC")],
                vec![],
                vec![],
                vec![],
                vec![],
            ],
        )
        .unwrap();

        assert_eq!(HomeDistance.estimate(&state), 8.0);
    }

    #[test]
    fn test_buried_penalty_charges_covering_cards() {
        let state = GameState::from_parts(
            [11, 11, 11, 11],
            [None; CELLS],
            [
                vec![card("QH"), card("KH")],
                vec![card("QS"), card("KS")],
                vec![card("QD"), card("KD")],
                vec![card("QC"), card("KC")],
                vec![],
                vec![],
                vec![],
                vec![],
            ],
        )
        .unwrap();

        // Each of the four queens is next-needed and has one king on top.
        assert_eq!(BuriedPenalty.estimate(&state), 8.0 + 4.0);
    }
}
