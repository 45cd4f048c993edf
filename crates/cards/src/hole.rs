use super::card::Card;
use super::error::CardError;
use super::hand::Hand;
use super::rank::Rank;

/// A player's two private hole cards.
///
/// Wraps a [`Hand`] with the constraint that exactly two cards are present.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// The higher card first, ties broken by suit.
    pub fn cards(&self) -> (Card, Card) {
        let bits = u64::from(self.0);
        let lo = Card::from(bits.trailing_zeros() as u8);
        let hi = Card::from((64 - 1 - bits.leading_zeros()) as u8);
        (hi, lo)
    }
    /// Ranks ordered high then low.
    pub fn ranks(&self) -> (Rank, Rank) {
        let (hi, lo) = self.cards();
        (hi.rank(), lo.rank())
    }
    pub fn paired(&self) -> bool {
        let (hi, lo) = self.ranks();
        hi == lo
    }
    pub fn suited(&self) -> bool {
        let (hi, lo) = self.cards();
        hi.suit() == lo.suit()
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl TryFrom<(Card, Card)> for Hole {
    type Error = CardError;
    fn try_from((a, b): (Card, Card)) -> Result<Self, Self::Error> {
        match a == b {
            true => Err(CardError::Duplicate(a.to_string())),
            false => Ok(Self(Hand::add(Hand::from(a), Hand::from(b)))),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        match hand.size() {
            2 => Ok(Self(hand)),
            _ => Err(CardError::Length(s.to_string())),
        }
    }
}
