//! Seeded dealing.

use im::Vector;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::card::{Card, Suit, KING};
use super::state::{GameState, CASCADES};

/// Deal a fresh board from a seed.
///
/// The deck is shuffled with a ChaCha8 stream seeded from `seed` and
/// dealt round-robin into cascades of 7,7,7,7,6,6,6,6, then
/// automove-closed. The same seed always produces the same board.
#[must_use]
pub fn deal(seed: u64) -> GameState {
    let mut deck: Vec<Card> = Suit::ALL
        .iter()
        .flat_map(|&suit| (1..=KING).map(move |rank| Card::new(rank, suit)))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    deck.shuffle(&mut rng);

    let mut cascades: [Vector<Card>; CASCADES] = Default::default();
    for (i, card) in deck.into_iter().enumerate() {
        cascades[i % CASCADES].push_back(card);
    }

    let mut state = GameState::from_cascades_unchecked(cascades);
    state.run_safe_moves();
    state
}
