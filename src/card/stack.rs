//! The Mnemonica memorized stack.

use super::{Card, DECK_SIZE, Rank, Suit};

/// Juan Tamariz's Mnemonica stack, top of the deck first.
pub const MNEMONICA: [Card; DECK_SIZE] = [
    Card::Complete(Rank::Four, Suit::Clubs),
    Card::Complete(Rank::Two, Suit::Hearts),
    Card::Complete(Rank::Seven, Suit::Diamonds),
    Card::Complete(Rank::Three, Suit::Clubs),
    Card::Complete(Rank::Four, Suit::Hearts),
    Card::Complete(Rank::Six, Suit::Diamonds),
    Card::Complete(Rank::Ace, Suit::Spades),
    Card::Complete(Rank::Five, Suit::Hearts),
    Card::Complete(Rank::Nine, Suit::Spades),
    Card::Complete(Rank::Two, Suit::Spades),
    Card::Complete(Rank::Queen, Suit::Hearts),
    Card::Complete(Rank::Three, Suit::Diamonds),
    Card::Complete(Rank::Queen, Suit::Clubs),
    Card::Complete(Rank::Eight, Suit::Hearts),
    Card::Complete(Rank::Six, Suit::Spades),
    Card::Complete(Rank::Five, Suit::Spades),
    Card::Complete(Rank::Nine, Suit::Hearts),
    Card::Complete(Rank::King, Suit::Clubs),
    Card::Complete(Rank::Two, Suit::Diamonds),
    Card::Complete(Rank::Jack, Suit::Hearts),
    Card::Complete(Rank::Three, Suit::Spades),
    Card::Complete(Rank::Eight, Suit::Spades),
    Card::Complete(Rank::Six, Suit::Hearts),
    Card::Complete(Rank::Ten, Suit::Clubs),
    Card::Complete(Rank::Five, Suit::Diamonds),
    Card::Complete(Rank::King, Suit::Diamonds),
    Card::Complete(Rank::Two, Suit::Clubs),
    Card::Complete(Rank::Three, Suit::Hearts),
    Card::Complete(Rank::Eight, Suit::Diamonds),
    Card::Complete(Rank::Five, Suit::Clubs),
    Card::Complete(Rank::King, Suit::Spades),
    Card::Complete(Rank::Jack, Suit::Diamonds),
    Card::Complete(Rank::Eight, Suit::Clubs),
    Card::Complete(Rank::Ten, Suit::Spades),
    Card::Complete(Rank::King, Suit::Hearts),
    Card::Complete(Rank::Jack, Suit::Clubs),
    Card::Complete(Rank::Seven, Suit::Spades),
    Card::Complete(Rank::Ten, Suit::Hearts),
    Card::Complete(Rank::Ace, Suit::Diamonds),
    Card::Complete(Rank::Four, Suit::Spades),
    Card::Complete(Rank::Seven, Suit::Hearts),
    Card::Complete(Rank::Four, Suit::Diamonds),
    Card::Complete(Rank::Ace, Suit::Clubs),
    Card::Complete(Rank::Nine, Suit::Clubs),
    Card::Complete(Rank::Jack, Suit::Spades),
    Card::Complete(Rank::Queen, Suit::Diamonds),
    Card::Complete(Rank::Seven, Suit::Clubs),
    Card::Complete(Rank::Queen, Suit::Spades),
    Card::Complete(Rank::Ten, Suit::Diamonds),
    Card::Complete(Rank::Six, Suit::Clubs),
    Card::Complete(Rank::Ace, Suit::Hearts),
    Card::Complete(Rank::Nine, Suit::Diamonds),
];

impl Card {
    /// Returns the 1-based position of the card in [`MNEMONICA`].
    ///
    /// Partial cards and the Joker have no position.
    #[must_use]
    pub fn stack_position(&self) -> Option<usize> {
        MNEMONICA
            .iter()
            .position(|card| card == self)
            .map(|index| index + 1)
    }
}

/// Returns the card at a 1-based position in [`MNEMONICA`].
#[must_use]
pub fn card_at_stack_position(position: usize) -> Option<Card> {
    position
        .checked_sub(1)
        .and_then(|index| MNEMONICA.get(index))
        .copied()
}
