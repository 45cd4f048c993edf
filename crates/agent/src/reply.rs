use super::choice::Choice;
use super::moves::Menu;
use super::moves::Move;
use hpb_core::*;

/// What gets sent back to the game server.
///
/// The amount only means something for [`Move::Raise`], where it is the
/// total bet to raise to. All-in amounts are resolved by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reply {
    action: Move,
    amount: Chips,
}

impl Reply {
    pub fn fold() -> Self {
        Self::from(Move::Fold)
    }
    pub fn action(&self) -> Move {
        self.action
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }

    /// Translates an internal choice into an external move.
    ///
    /// Check/call picks whichever name the menu offers. A raise the menu
    /// does not offer is downgraded to call or check. If the name is still
    /// not on a non-empty menu, the most passive offered move replaces it.
    pub fn translate(choice: Choice, menu: &Menu, pot: Chips, current_bet: Chips, min_raise: Chips) -> Self {
        let candidates = choice.moves().collect::<Vec<Move>>();
        let action = menu
            .first_of(candidates.iter().copied())
            .or_else(|| candidates.last().copied())
            .unwrap_or(Move::Fold);
        let amount = choice
            .raise_size(pot, min_raise)
            .map(|size| current_bet.saturating_add(size))
            .unwrap_or_default();
        let reply = Self { action, amount };
        let reply = match reply.action == Move::Raise && !menu.contains(Move::Raise) {
            true if menu.contains(Move::Call) => Self::from(Move::Call),
            true => Self::from(Move::Check),
            false => reply,
        };
        match menu.contains(reply.action) {
            true => reply,
            false => menu
                .first_of(Move::safest())
                .map(|safe| Self::safe(safe, pot, current_bet, min_raise))
                .unwrap_or(reply),
        }
    }

    fn safe(action: Move, pot: Chips, current_bet: Chips, min_raise: Chips) -> Self {
        match action {
            Move::Raise => Self {
                action,
                amount: Choice::RaiseHalfPot
                    .raise_size(pot, min_raise)
                    .map(|size| current_bet.saturating_add(size))
                    .unwrap_or_default(),
            },
            _ => Self::from(action),
        }
    }
}

impl From<Move> for Reply {
    fn from(action: Move) -> Self {
        Self { action, amount: 0 }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.action {
            Move::Raise => write!(f, "{} {}", self.action, self.amount),
            _ => write!(f, "{}", self.action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn menu(names: &[&str]) -> Menu {
        Menu::from(names)
    }
    fn everything() -> Menu {
        Move::all().into_iter().collect()
    }

    #[test]
    fn direct_translations() {
        let m = everything();
        assert_eq!(Reply::translate(Choice::Fold, &m, 100, 0, 20), Reply::fold());
        assert_eq!(Reply::translate(Choice::CheckCall, &m, 100, 0, 20).action(), Move::Check);
        assert_eq!(Reply::translate(Choice::AllIn, &m, 100, 0, 20), Reply::from(Move::AllIn));
    }

    #[test]
    fn check_call_prefers_check() {
        let r = Reply::translate(Choice::CheckCall, &menu(&["fold", "call"]), 100, 10, 20);
        assert_eq!(r, Reply::from(Move::Call));
        let r = Reply::translate(Choice::CheckCall, &menu(&["check", "call"]), 100, 10, 20);
        assert_eq!(r, Reply::from(Move::Check));
    }

    #[test]
    fn raise_amounts() {
        let m = everything();
        let r = Reply::translate(Choice::RaiseHalfPot, &m, 100, 0, 20);
        assert_eq!((r.action(), r.amount()), (Move::Raise, 50));
        let r = Reply::translate(Choice::RaisePot, &m, 100, 30, 20);
        assert_eq!((r.action(), r.amount()), (Move::Raise, 130));
        let r = Reply::translate(Choice::RaiseHalfPot, &m, 10, 30, 20);
        assert_eq!((r.action(), r.amount()), (Move::Raise, 50));
    }

    #[test]
    fn raise_downgrades_when_not_offered() {
        let r = Reply::translate(Choice::RaisePot, &menu(&["fold", "call"]), 100, 10, 20);
        assert_eq!(r, Reply::from(Move::Call));
        let r = Reply::translate(Choice::RaiseHalfPot, &menu(&["fold", "check"]), 100, 0, 20);
        assert_eq!(r, Reply::from(Move::Check));
    }

    #[test]
    fn guard_picks_most_passive_offered() {
        let r = Reply::translate(Choice::Fold, &menu(&["check", "raise"]), 100, 0, 20);
        assert_eq!(r, Reply::from(Move::Check));
        let r = Reply::translate(Choice::CheckCall, &menu(&["fold"]), 100, 10, 20);
        assert_eq!(r, Reply::fold());
        let r = Reply::translate(Choice::Fold, &menu(&["raise"]), 100, 10, 20);
        assert_eq!((r.action(), r.amount()), (Move::Raise, 60));
        let r = Reply::translate(Choice::RaisePot, &menu(&["all-in"]), 100, 10, 20);
        assert_eq!(r, Reply::from(Move::AllIn));
    }

    #[test]
    fn raise_amount_saturates() {
        let r = Reply::translate(Choice::RaisePot, &everything(), Chips::MAX, Chips::MAX, 0);
        assert_eq!((r.action(), r.amount()), (Move::Raise, Chips::MAX));
        let r = Reply::translate(Choice::Fold, &menu(&["raise"]), Chips::MAX, Chips::MAX, 0);
        assert_eq!((r.action(), r.amount()), (Move::Raise, Chips::MAX));
    }

    #[test]
    fn always_on_menu() {
        for bits in 1..32u8 {
            let m = Menu::from(bits);
            for choice in Choice::all() {
                let r = Reply::translate(choice, &m, 100, 10, 20);
                assert!(m.contains(r.action()), "{} not on {}", r, m);
            }
        }
    }
}
