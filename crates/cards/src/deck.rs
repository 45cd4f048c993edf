use super::board::Board;
use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use super::street::Street;

/// A mutable deck of cards supporting random draws.
///
/// Wraps a [`Hand`] representing the remaining cards. Used to sample
/// situations for tests and benchmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck(Hand);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck.
    pub fn new() -> Self {
        Self(Hand::from(Hand::mask()))
    }
    /// Tests whether a card is still in the deck.
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
    /// Draws and removes a uniformly random card from the deck.
    pub fn draw(&mut self) -> Card {
        debug_assert!(self.0.size() > 0);
        let i = rand::random_range(0..self.0.size());
        let mut deck = u64::from(self.0);
        for _ in 0..i {
            deck = deck & (deck - 1);
        }
        let card = Card::from(deck.trailing_zeros() as u8);
        self.0.remove(card);
        card
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Hole {
        let a = self.draw();
        let b = self.draw();
        Hole::try_from((a, b)).expect("deck never repeats a card")
    }
    /// Deals a full board for the given street.
    pub fn board(&mut self, street: Street) -> Board {
        let cards = (0..street.n_board())
            .map(|_| self.draw())
            .collect::<Vec<Card>>();
        Board::try_from(cards.as_slice()).expect("deck never repeats a card")
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        match self.0.size() {
            0 => None,
            _ => Some(self.draw()),
        }
    }
}
