use super::card::Card;
use super::error::CardError;
use super::hand::Hand;
use super::street::Street;

/// The community cards visible to all players.
///
/// A board contains 0, 3, 4, or 5 cards corresponding to preflop, flop, turn,
/// and river respectively. Any other size is rejected at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board(Hand);

impl Board {
    /// Creates an empty board (preflop state).
    pub fn empty() -> Self {
        Self(Hand::empty())
    }
    /// Infers the current street from board size.
    pub fn street(&self) -> Street {
        Street::try_from(self.0.size()).expect("board size validated at construction")
    }
    pub fn is_empty(&self) -> bool {
        self.0.size() == 0
    }
}

impl TryFrom<&[Card]> for Board {
    type Error = CardError;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(cards)?;
        Street::try_from(hand.size()).map(|_| Self(hand))
    }
}

impl TryFrom<&str> for Board {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Vec::<Card>::from(self.0)
                .into_iter()
                .map(|c| format!("{}", c))
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn street_from_size() {
        assert_eq!(Board::empty().street(), Street::Pref);
        assert_eq!(Board::try_from("2c 3d 4h").unwrap().street(), Street::Flop);
        assert_eq!(Board::try_from("2c 3d 4h 5s").unwrap().street(), Street::Turn);
        assert_eq!(Board::try_from("2c 3d 4h 5s 6c").unwrap().street(), Street::Rive);
    }

    #[test]
    fn invalid_sizes() {
        assert!(Board::try_from("2c").is_err());
        assert!(Board::try_from("2c 3d").is_err());
        assert!(Board::try_from("2c 3d 4h 5s 6c 7d").is_err());
        assert!(Board::try_from("2c 2c 4h").is_err());
    }
}
