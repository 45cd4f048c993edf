use super::decision::Decision;
use super::estimator::Estimator;
use super::legal::Legal;
use super::policy::Policy;
use super::reply::Reply;
use super::table::Table;
use rand::Rng;

/// The full decision pipeline: map the menu, estimate strength, pick a
/// choice, translate it back.
///
/// Holds no mutable state, so one instance serves every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct Agent {
    estimator: Estimator,
    policy: Policy,
}

impl Agent {
    pub fn new(estimator: Estimator, policy: Policy) -> Self {
        Self { estimator, policy }
    }

    /// Picks an internal choice for the spot.
    pub fn decide<R>(&self, table: &Table, rng: &mut R) -> anyhow::Result<Decision>
    where
        R: Rng + ?Sized,
    {
        let legal = Legal::from(table);
        let strength = self.estimator.estimate(&table.hole, &table.board)?;
        log::info!("hand strength {:.2}", strength);
        let choice = self
            .policy
            .decide(strength, &legal, table.call_cost(), table.pot, rng);
        log::info!("agent chose action {} from {}", choice, legal);
        Ok(Decision::from(choice))
    }

    /// Picks a move the game server will accept.
    pub fn act<R>(&self, table: &Table, rng: &mut R) -> anyhow::Result<Reply>
    where
        R: Rng + ?Sized,
    {
        let decision = self.decide(table, rng)?;
        Ok(Reply::translate(
            decision.choice(),
            &table.menu,
            table.pot,
            table.current_bet,
            table.min_raise,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Menu;
    use crate::Move;
    use hpb_cards::*;
    use hpb_core::Chips;

    fn wire(tokens: &[&str]) -> Vec<Card> {
        Wire::decode_all(tokens.iter().copied())
    }

    #[test]
    fn unknown_hole_checks() {
        let table = Table {
            menu: Menu::from(["fold", "check"].as_slice()),
            ..Table::default()
        };
        let reply = Agent::default().act(&table, &mut rand::rng()).unwrap();
        assert_eq!(reply, Reply::from(Move::Check));
    }

    #[test]
    fn pocket_aces_raise_the_pot() {
        let table = Table {
            hole: wire(&["SA", "HA"]),
            pot: 100,
            chips: 1000,
            min_raise: 20,
            menu: Menu::from(["fold", "check", "call", "raise", "all-in"].as_slice()),
            ..Table::default()
        };
        let reply = Agent::default().act(&table, &mut rand::rng()).unwrap();
        assert_eq!(reply.action(), Move::Raise);
        assert_eq!(reply.amount(), 100);
    }

    #[test]
    fn river_nuts_shove() {
        let table = Table {
            hole: wire(&["SA", "SK"]),
            board: wire(&["SQ", "SJ", "S10", "D2", "C3"]),
            pot: 400,
            current_bet: 100,
            chips: 5000,
            min_raise: 100,
            menu: Menu::from(["fold", "call", "raise", "all-in"].as_slice()),
            ..Table::default()
        };
        let reply = Agent::default().act(&table, &mut rand::rng()).unwrap();
        assert_eq!(reply, Reply::from(Move::AllIn));
    }

    #[test]
    fn trash_folds_to_a_bet() {
        let table = Table {
            hole: wire(&["S7", "D2"]),
            pot: 100,
            current_bet: 50,
            chips: 1000,
            min_raise: 50,
            menu: Menu::from(["fold", "call", "raise"].as_slice()),
            ..Table::default()
        };
        let reply = Agent::default().act(&table, &mut rand::rng()).unwrap();
        assert_eq!(reply, Reply::fold());
    }

    #[test]
    fn decision_payload_is_empty() {
        let table = Table {
            hole: wire(&["S7", "D2"]),
            menu: Menu::from(["fold", "check"].as_slice()),
            ..Table::default()
        };
        let decision = Agent::default().decide(&table, &mut rand::rng()).unwrap();
        assert!(decision.extras().is_empty());
    }

    #[test]
    fn duplicate_cards_error() {
        let table = Table {
            hole: wire(&["SA", "SK"]),
            board: wire(&["SA", "D2", "C3"]),
            menu: Menu::from(["fold", "check"].as_slice()),
            ..Table::default()
        };
        assert!(Agent::default().act(&table, &mut rand::rng()).is_err());
    }

    #[test]
    fn replies_always_on_menu() {
        let agent = Agent::default();
        let ref mut rng = rand::rng();
        for _ in 0..64 {
            for bits in 1..32u8 {
                let mut deck = Deck::new();
                let street = Street::all()[rng.random_range(0..4)];
                let chip = |rng: &mut rand::rngs::ThreadRng, hi: Chips| rng.random_range(0..hi);
                let table = Table {
                    hole: Vec::<Card>::from(Hand::from(deck.hole())),
                    board: Vec::<Card>::from(Hand::from(deck.board(street))),
                    pot: chip(rng, 1000),
                    current_bet: chip(rng, 300),
                    player_bet: chip(rng, 300),
                    chips: chip(rng, 2000),
                    min_raise: chip(rng, 200),
                    menu: Menu::from(bits),
                };
                let reply = agent.act(&table, rng).unwrap();
                assert!(table.menu.contains(reply.action()), "{} not on {}", reply, table);
            }
        }
    }
}
