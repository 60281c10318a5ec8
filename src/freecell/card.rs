//! Playing cards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of ranks per suit (ace = 1 through king = 13).
pub const RANKS: u8 = 13;

/// Number of suits.
pub const SUITS: usize = 4;

/// Cards in a full deck.
pub const DECK_SIZE: usize = RANKS as usize * SUITS;

/// King rank.
pub const KING: u8 = 13;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in deal and foundation order.
    pub const ALL: [Suit; SUITS] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Foundation index for this suit (0..4).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Diamonds => 1,
            Suit::Clubs => 2,
            Suit::Spades => 3,
        }
    }

    /// Hearts and diamonds are red; clubs and spades are black.
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }

    /// One-letter suit code (H, D, C, S).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// One playing card: a rank (1..=13) and a suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Rank, ace = 1 through king = 13.
    pub rank: u8,

    /// Suit.
    pub suit: Suit,
}

impl Card {
    /// Create a card. Rank must be 1..=13.
    #[must_use]
    pub fn new(rank: u8, suit: Suit) -> Self {
        debug_assert!((1..=KING).contains(&rank), "rank out of range: {rank}");
        Self { rank, suit }
    }

    /// Card color, via the suit.
    #[inline]
    #[must_use]
    pub const fn is_red(self) -> bool {
        self.suit.is_red()
    }

    /// Can `self` stack on `below` in a cascade?
    ///
    /// Requires opposite colors and `below` exactly one rank higher.
    #[inline]
    #[must_use]
    pub fn stacks_on(self, below: Card) -> bool {
        self.is_red() != below.is_red() && below.rank == self.rank + 1
    }

    fn rank_code(self) -> char {
        match self.rank {
            1 => 'A',
            10 => 'T',
            11 => 'J',
            12 => 'Q',
            13 => 'K',
            n => (b'0' + n) as char,
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank_code(), self.suit)
    }
}

/// Error parsing a card from its two-character code.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CardParseError {
    #[error("card code must be two characters, got {0:?}")]
    BadLength(String),
    #[error("unknown rank character {0:?}")]
    BadRank(char),
    #[error("unknown suit character {0:?}")]
    BadSuit(char),
}

impl std::str::FromStr for Card {
    type Err = CardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(su), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CardParseError::BadLength(s.to_string()));
        };

        let rank = match r {
            'A' => 1,
            'T' => 10,
            'J' => 11,
            'Q' => 12,
            'K' => 13,
            '2'..='9' => r as u8 - b'0',
            _ => return Err(CardParseError::BadRank(r)),
        };
        let suit = match su {
            'H' => Suit::Hearts,
            'D' => Suit::Diamonds,
            'C' => Suit::Clubs,
            'S' => Suit::Spades,
            _ => return Err(CardParseError::BadSuit(su)),
        };

        Ok(Card::new(rank, suit))
    }
}
