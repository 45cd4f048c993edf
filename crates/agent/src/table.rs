use super::choice::Choice;
use super::moves::Menu;
use hpb_cards::*;
use hpb_core::*;

/// Everything the agent knows about the spot it must act in.
///
/// Built fresh for every request and dropped after the response. Cards
/// are already decoded; malformed tokens never reach this far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub hole: Vec<Card>,
    pub board: Vec<Card>,
    pub pot: Chips,
    pub current_bet: Chips,
    pub player_bet: Chips,
    pub chips: Chips,
    pub min_raise: Chips,
    pub menu: Menu,
}

impl Table {
    /// Chips needed to match the current bet, never negative.
    pub fn call_cost(&self) -> Chips {
        self.current_bet.saturating_sub(self.player_bet).max(0)
    }
    /// Raise increment for a raising choice.
    pub fn raise_size(&self, choice: Choice) -> Option<Chips> {
        choice.raise_size(self.pot, self.min_raise)
    }
    /// Total bet to announce for a raising choice.
    pub fn raise_to(&self, choice: Choice) -> Option<Chips> {
        self.raise_size(choice).map(|size| self.current_bet.saturating_add(size))
    }
    /// Whether our stack covers the call plus the raise increment.
    pub fn affords(&self, choice: Choice) -> bool {
        self.raise_size(choice)
            .map(|size| self.chips >= self.call_cost().saturating_add(size))
            .unwrap_or(true)
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = |cs: &[Card]| {
            cs.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        };
        write!(
            f,
            "hole [{}] board [{}] pot {} bet {}/{} stack {} min {} menu {}",
            cards(&self.hole),
            cards(&self.board),
            self.pot,
            self.player_bet,
            self.current_bet,
            self.chips,
            self.min_raise,
            self.menu,
        )
    }
}
