use hpb_cards::*;
use hpb_core::*;

/// Scores a hole against the visible board on `[0, 1]`, higher is better.
///
/// Before the flop only the hole ranks and suitedness matter, looked up in a
/// fixed table. Afterwards the best five of all known cards are placed on
/// the 7462-class ladder and the percentile is inverted.
#[derive(Debug, Default, Clone, Copy)]
pub struct Estimator;

impl Estimator {
    /// Strength of the known cards.
    ///
    /// Fewer than two hole cards means the hand is unknown and scores
    /// [`UNKNOWN_STRENGTH`]. Extra hole cards, impossible board sizes, and
    /// repeated cards are errors.
    pub fn estimate(&self, hole: &[Card], board: &[Card]) -> Result<Probability, CardError> {
        match hole {
            [a, b] => {
                let hole = Hole::try_from((*a, *b))?;
                let board = Board::try_from(board)?;
                match board.is_empty() {
                    true => Ok(self.preflop(hole)),
                    false => self.postflop(hole, board),
                }
            }
            [] | [_] => {
                log::debug!("hole unknown, assuming weakest hand");
                Ok(UNKNOWN_STRENGTH)
            }
            _ => Err(CardError::Length(format!("{} hole cards", hole.len()))),
        }
    }

    /// Static table over ranks and suitedness. Branches are checked in
    /// order and exactly one fires.
    pub fn preflop(&self, hole: Hole) -> Probability {
        let (hi, lo) = hole.ranks();
        match hole.paired() {
            true if hi >= Rank::Ten => PREFLOP_HIGH_PAIR,
            true if hi >= Rank::Seven => PREFLOP_MID_PAIR,
            true => PREFLOP_LOW_PAIR,
            false if hi >= Rank::Queen && lo >= Rank::Jack => PREFLOP_BROADWAY,
            false if hi >= Rank::Queen && hole.suited() => PREFLOP_HIGH_SUITED,
            false if hi >= Rank::Queen => PREFLOP_HIGH_OFFSUIT,
            false if hi >= Rank::Ten && lo >= Rank::Nine => PREFLOP_MIDDLING,
            false => PREFLOP_TRASH,
        }
    }

    /// One minus the percentile of the best five-card hand.
    pub fn postflop(&self, hole: Hole, board: Board) -> Result<Probability, CardError> {
        let hole = Hand::from(hole);
        let board = Hand::from(board);
        if let Some(card) = hole.into_iter().find(|c| board.contains(c)) {
            return Err(CardError::Duplicate(card.to_string()));
        }
        let strength = Strength::from(Hand::add(hole, board));
        log::debug!("{} class {}", strength, strength.class());
        Ok(1.0 - strength.percentile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(hole: &str, board: &str) -> Result<Probability, CardError> {
        Estimator.estimate(&Card::parse(hole)?, &Card::parse(board)?)
    }
    fn preflop(hole: &str) -> Probability {
        Estimator.preflop(Hole::try_from(hole).unwrap())
    }

    #[test]
    fn high_pairs_are_point_nine() {
        for rank in Rank::all().into_iter().filter(|r| *r >= Rank::Ten) {
            let hole = Hole::try_from((Card::from((rank, Suit::S)), Card::from((rank, Suit::H)))).unwrap();
            assert_eq!(Estimator.preflop(hole), 0.9);
        }
    }

    #[test]
    fn pair_bands() {
        assert_eq!(preflop("9s 9h"), 0.7);
        assert_eq!(preflop("7s 7h"), 0.7);
        assert_eq!(preflop("6s 6h"), 0.6);
        assert_eq!(preflop("2s 2h"), 0.6);
    }

    #[test]
    fn broadway_and_high_cards() {
        assert_eq!(preflop("Qs Jh"), 0.75);
        assert_eq!(preflop("As Kh"), 0.75);
        assert_eq!(preflop("Qs Ts"), 0.65);
        assert_eq!(preflop("Ah 2h"), 0.65);
        assert_eq!(preflop("Qs Th"), 0.55);
        assert_eq!(preflop("Ks 2d"), 0.55);
    }

    #[test]
    fn middling_and_trash() {
        assert_eq!(preflop("Ts 9s"), 0.5);
        assert_eq!(preflop("Jh 9d"), 0.5);
        assert_eq!(preflop("Js Tc"), 0.5);
        assert_eq!(preflop("Js 7d"), 0.3);
        assert_eq!(preflop("Ts 8h"), 0.3);
        assert_eq!(preflop("9s 8s"), 0.3);
        assert_eq!(preflop("8s 7h"), 0.3);
        assert_eq!(preflop("8s 6h"), 0.3);
        assert_eq!(preflop("7s 6s"), 0.3);
        assert_eq!(preflop("7s 2d"), 0.3);
    }

    #[test]
    fn low_unpaired_holes_are_trash() {
        let low = Rank::all().into_iter().filter(|r| *r < Rank::Ten).collect::<Vec<_>>();
        for hi in low.iter() {
            for lo in low.iter().filter(|r| *r < hi) {
                let hole = Hole::try_from((Card::from((*hi, Suit::S)), Card::from((*lo, Suit::S)))).unwrap();
                assert_eq!(Estimator.preflop(hole), 0.3);
            }
        }
    }

    #[test]
    fn preflop_is_total() {
        let bands = [0.9, 0.75, 0.7, 0.65, 0.6, 0.55, 0.5, 0.3];
        let cards = Hand::from(Hand::mask()).collect::<Vec<Card>>();
        let mut n = 0;
        for (i, a) in cards.iter().enumerate() {
            for b in cards.iter().skip(i + 1) {
                let p = Estimator.preflop(Hole::try_from((*a, *b)).unwrap());
                assert!(bands.contains(&p));
                n += 1;
            }
        }
        assert_eq!(n, 1326);
    }

    #[test]
    fn postflop_inverts_percentile() {
        let nuts = estimate("As Ks", "Qs Js Ts").unwrap();
        assert!(nuts > 0.999);
        let worst = estimate("7s 5h", "4d 3c 2s").unwrap();
        assert_eq!(worst, 0.0);
        let pair = estimate("As Ah", "Kd 7c 2s 9h").unwrap();
        assert!(pair > 0.5 && pair < 0.9);
    }

    #[test]
    fn board_improves_strength() {
        let flop = estimate("Ah Kh", "Qh 7c 2s").unwrap();
        let turn = estimate("Ah Kh", "Qh 7c 2s Jh").unwrap();
        let river = estimate("Ah Kh", "Qh 7c 2s Jh Th").unwrap();
        assert!(flop < turn);
        assert!(turn < river);
    }

    #[test]
    fn missing_hole_is_unknown() {
        assert_eq!(estimate("", ""), Ok(0.0));
        assert_eq!(estimate("As", "Kd 7c 2s"), Ok(0.0));
    }

    #[test]
    fn rejects_impossible_inputs() {
        assert!(matches!(estimate("As Ks Qs", ""), Err(CardError::Length(_))));
        assert!(matches!(estimate("As Ks", "Qs Js"), Err(CardError::Length(_))));
        assert!(matches!(estimate("As Ks", "Qs Js Ts 9s 8s 7s"), Err(CardError::Length(_))));
        assert!(matches!(estimate("As As", ""), Err(CardError::Duplicate(_))));
        assert!(matches!(estimate("As Ks", "As 7c 2d"), Err(CardError::Duplicate(_))));
    }
}
