//! FreeCell board state and move rules.
//!
//! Cascades are persistent vectors (`im::Vector`), so cloning a state for
//! a successor is cheap and structure is shared along a search path.
//!
//! Every state produced by [`GameState::apply_move`] or
//! [`deal`](super::deal::deal) is automove-closed: cards that can never
//! be needed in the tableau have already been sent home. Replaying a
//! returned action sequence through `apply_move` therefore reproduces the
//! solver's states exactly.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;

use super::card::{Card, Suit, KING, SUITS};
use super::moves::{Location, Move};

/// Number of tableau piles.
pub const CASCADES: usize = 8;

/// Number of free cells.
pub const CELLS: usize = 4;

/// Buffer size for move lists; branching rarely exceeds this.
type MoveList = SmallVec<[Move; 24]>;

/// Error building a board layout from explicit parts.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("card {0} is missing from the layout")]
    MissingCard(Card),
    #[error("foundation {0} above king: {1}")]
    HomeOutOfRange(usize, u8),
}

/// One FreeCell board configuration.
///
/// Visited-set identity is the exact layout: two boards are the same
/// search state only if homes, cells, and every cascade match.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Top rank on each suit's foundation, indexed by `Suit::index` (0 = empty).
    homes: [u8; SUITS],

    /// Free cells.
    cells: [Option<Card>; CELLS],

    /// Tableau piles; the last element of each is the exposed top card.
    cascades: [Vector<Card>; CASCADES],
}

impl GameState {
    /// Build a board from explicit parts, validating that the layout is a
    /// complete deck: every card exactly once, counting ranks up to
    /// `homes[suit]` as already on that foundation.
    pub fn from_parts(
        homes: [u8; SUITS],
        cells: [Option<Card>; CELLS],
        cascades: [Vec<Card>; CASCADES],
    ) -> Result<Self, LayoutError> {
        for (suit, &top) in homes.iter().enumerate() {
            if top > KING {
                return Err(LayoutError::HomeOutOfRange(suit, top));
            }
        }

        let mut seen = [false; SUITS * KING as usize];
        let mut record = |card: Card| -> Result<(), LayoutError> {
            let slot = card.suit.index() * KING as usize + (card.rank - 1) as usize;
            if seen[slot] {
                return Err(LayoutError::DuplicateCard(card));
            }
            seen[slot] = true;
            Ok(())
        };

        for suit in Suit::ALL {
            for rank in 1..=homes[suit.index()] {
                record(Card::new(rank, suit))?;
            }
        }
        for card in cells.iter().flatten() {
            record(*card)?;
        }
        for cascade in &cascades {
            for card in cascade {
                record(*card)?;
            }
        }

        if let Some(slot) = seen.iter().position(|present| !present) {
            let suit = Suit::ALL[slot / KING as usize];
            let rank = (slot % KING as usize) as u8 + 1;
            return Err(LayoutError::MissingCard(Card::new(rank, suit)));
        }

        Ok(Self {
            homes,
            cells,
            cascades: cascades.map(Vector::from),
        })
    }

    /// Build a board without validation. For dealing, where the deck is
    /// complete by construction.
    pub(crate) fn from_cascades_unchecked(cascades: [Vector<Card>; CASCADES]) -> Self {
        Self {
            homes: [0; SUITS],
            cells: [None; CELLS],
            cascades,
        }
    }

    /// Top rank on a suit's foundation (0 = empty).
    #[inline]
    #[must_use]
    pub fn home(&self, suit: Suit) -> u8 {
        self.homes[suit.index()]
    }

    /// Free cell contents.
    #[must_use]
    pub fn cells(&self) -> &[Option<Card>; CELLS] {
        &self.cells
    }

    /// A tableau pile.
    #[must_use]
    pub fn cascade(&self, index: usize) -> &Vector<Card> {
        &self.cascades[index]
    }

    /// All four foundations at king.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.homes == [KING; SUITS]
    }

    /// Can this card go to its foundation right now?
    #[inline]
    fn can_home(&self, card: Card) -> bool {
        self.homes[card.suit.index()] + 1 == card.rank
    }

    /// All legal single-card moves, in a fixed enumeration order:
    /// cascade tops to home, cells to home, cascade tops to cascades,
    /// cells to cascades, cascade tops to the first empty cell.
    ///
    /// Equivalent destinations are collapsed: only the first empty
    /// cascade and first empty cell are generated.
    #[must_use]
    pub fn legal_moves(&self) -> SmallVec<[Move; 24]> {
        let mut moves = MoveList::new();
        let first_empty_cascade = self.cascades.iter().position(|c| c.is_empty());
        let first_empty_cell = self.cells.iter().position(|c| c.is_none());

        // Cascade tops to home
        for (i, cascade) in self.cascades.iter().enumerate() {
            if let Some(&top) = cascade.last() {
                if self.can_home(top) {
                    moves.push(Move::new(
                        Location::Cascade(i as u8),
                        Location::Home(top.suit.index() as u8),
                    ));
                }
            }
        }

        // Cells to home
        for (i, cell) in self.cells.iter().enumerate() {
            if let Some(card) = cell {
                if self.can_home(*card) {
                    moves.push(Move::new(
                        Location::Cell(i as u8),
                        Location::Home(card.suit.index() as u8),
                    ));
                }
            }
        }

        // Cascade tops to cascades
        for (i, cascade) in self.cascades.iter().enumerate() {
            let Some(&top) = cascade.last() else { continue };

            for (j, dest) in self.cascades.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(&dest_top) = dest.last() {
                    if top.stacks_on(dest_top) {
                        moves.push(Move::new(Location::Cascade(i as u8), Location::Cascade(j as u8)));
                    }
                }
            }
            // Moving a lone card between empty cascades changes nothing
            if cascade.len() > 1 {
                if let Some(j) = first_empty_cascade {
                    moves.push(Move::new(Location::Cascade(i as u8), Location::Cascade(j as u8)));
                }
            }
        }

        // Cells to cascades
        for (i, cell) in self.cells.iter().enumerate() {
            let Some(card) = cell else { continue };

            for (j, dest) in self.cascades.iter().enumerate() {
                if let Some(&dest_top) = dest.last() {
                    if card.stacks_on(dest_top) {
                        moves.push(Move::new(Location::Cell(i as u8), Location::Cascade(j as u8)));
                    }
                }
            }
            if let Some(j) = first_empty_cascade {
                moves.push(Move::new(Location::Cell(i as u8), Location::Cascade(j as u8)));
            }
        }

        // Cascade tops to the first empty cell
        if let Some(cell) = first_empty_cell {
            for (i, cascade) in self.cascades.iter().enumerate() {
                if !cascade.is_empty() {
                    moves.push(Move::new(Location::Cascade(i as u8), Location::Cell(cell as u8)));
                }
            }
        }

        moves
    }

    /// Apply a legal move, producing the successor board.
    ///
    /// The move is assumed to come from [`legal_moves`](Self::legal_moves)
    /// on this exact state; debug builds assert legality. The successor is
    /// automove-closed.
    #[must_use]
    pub fn apply_move(&self, mv: Move) -> GameState {
        let mut next = self.clone();
        let card = next.remove(mv.from);
        next.place(mv.to, card);
        next.run_safe_moves();
        next
    }

    fn remove(&mut self, from: Location) -> Card {
        match from {
            Location::Cascade(i) => match self.cascades[i as usize].pop_back() {
                Some(card) => card,
                None => unreachable!("move from empty cascade {i}"),
            },
            Location::Cell(i) => match self.cells[i as usize].take() {
                Some(card) => card,
                None => unreachable!("move from empty cell {i}"),
            },
            Location::Home(_) => unreachable!("moves never originate from a foundation"),
        }
    }

    fn place(&mut self, to: Location, card: Card) {
        match to {
            Location::Home(i) => {
                debug_assert_eq!(i as usize, card.suit.index());
                debug_assert!(self.homes[i as usize] + 1 == card.rank, "out-of-order home move");
                self.homes[i as usize] = card.rank;
            }
            Location::Cascade(i) => {
                debug_assert!(
                    self.cascades[i as usize]
                        .last()
                        .map_or(true, |&top| card.stacks_on(top)),
                    "illegal cascade stack"
                );
                self.cascades[i as usize].push_back(card);
            }
            Location::Cell(i) => {
                debug_assert!(self.cells[i as usize].is_none(), "cell {i} occupied");
                self.cells[i as usize] = Some(card);
            }
        }
    }

    /// A card is safe to send home automatically if the tableau can never
    /// need it: rank at most 2, or both opposite-color foundations have
    /// reached at least one rank below it.
    fn is_safe(&self, card: Card) -> bool {
        if card.rank <= 2 {
            return true;
        }
        let (a, b) = if card.is_red() {
            (self.homes[Suit::Clubs.index()], self.homes[Suit::Spades.index()])
        } else {
            (self.homes[Suit::Hearts.index()], self.homes[Suit::Diamonds.index()])
        };
        a + 1 >= card.rank && b + 1 >= card.rank
    }

    /// Send safe cards home until none remain.
    pub(crate) fn run_safe_moves(&mut self) {
        loop {
            let mut moved = false;

            for i in 0..CASCADES {
                if let Some(&top) = self.cascades[i].last() {
                    if self.can_home(top) && self.is_safe(top) {
                        let card = self.remove(Location::Cascade(i as u8));
                        self.homes[card.suit.index()] = card.rank;
                        moved = true;
                    }
                }
            }
            for i in 0..CELLS {
                if let Some(card) = self.cells[i] {
                    if self.can_home(card) && self.is_safe(card) {
                        self.cells[i] = None;
                        self.homes[card.suit.index()] = card.rank;
                        moved = true;
                    }
                }
            }

            if !moved {
                break;
            }
        }
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "homes:")?;
        for suit in Suit::ALL {
            let top = self.homes[suit.index()];
            if top == 0 {
                write!(f, " --{suit}")?;
            } else {
                write!(f, " {}", Card::new(top, suit))?;
            }
        }

        write!(f, "  cells:")?;
        for cell in &self.cells {
            match cell {
                Some(card) => write!(f, " {card}")?,
                None => write!(f, " __")?,
            }
        }
        writeln!(f)?;

        for (i, cascade) in self.cascades.iter().enumerate() {
            write!(f, "{i}:")?;
            for card in cascade {
                write!(f, " {card}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
