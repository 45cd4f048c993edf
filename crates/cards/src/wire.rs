use super::card::Card;
use super::error::CardError;
use super::rank::Rank;
use super::suit::Suit;

/// A card in the game server's notation: suit letter, then rank token.
///
/// `"H10"` is the ten of hearts, `"sa"` the ace of spades. The rank token
/// `"10"` corresponds to the evaluator's `T`; every other rank token is the
/// same in both notations. Suit letters are case-insensitive.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Wire(Card);

impl Wire {
    /// Decodes a token, mapping the rank token `"10"` to `T`.
    pub fn decode(token: &str) -> Result<Card, CardError> {
        Self::try_from(token).map(Card::from)
    }
    /// Decodes every non-empty token, skipping the malformed ones.
    ///
    /// Unknown cards arrive as empty strings and are not errors. Malformed
    /// tokens are reported to the log and dropped.
    pub fn decode_all<'a, I>(tokens: I) -> Vec<Card>
    where
        I: IntoIterator<Item = &'a str>,
    {
        tokens
            .into_iter()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .filter_map(|t| {
                Self::decode(t)
                    .inspect_err(|e| log::warn!("skipping card {:?}: {}", t, e))
                    .ok()
            })
            .collect()
    }
    fn rank(token: &str) -> Result<Rank, CardError> {
        match token {
            "10" => Ok(Rank::Ten),
            "T" | "t" => Err(CardError::Rank(token.to_string())),
            other => Rank::try_from(other),
        }
    }
    fn token(rank: Rank) -> String {
        match rank {
            Rank::Ten => String::from("10"),
            other => other.to_string(),
        }
    }
}

impl TryFrom<&str> for Wire {
    type Error = CardError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();
        let mut chars = s.chars();
        match chars.next() {
            None => Err(CardError::Empty),
            Some(suit) => match chars.as_str() {
                "" => Err(CardError::Length(s.to_string())),
                rank => {
                    let suit = Suit::try_from(suit.to_string().as_str())?;
                    let rank = Self::rank(rank)?;
                    Ok(Self(Card::from((rank, suit))))
                }
            },
        }
    }
}

impl From<Card> for Wire {
    fn from(card: Card) -> Self {
        Self(card)
    }
}
impl From<Wire> for Card {
    fn from(wire: Wire) -> Self {
        wire.0
    }
}

impl std::fmt::Display for Wire {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let suit = self.0.suit().to_string().to_uppercase();
        write!(f, "{}{}", suit, Self::token(self.0.rank()))
    }
}
