use super::choice::Choice;
use super::legal::Legal;
use hpb_core::*;
use rand::Rng;

/// Threshold table from strength, price, and legal ids to one choice.
///
/// Bands are strict lower bounds checked strongest first. Within a band
/// the preferred ids are tried in order; whatever comes out is finally
/// checked against [`Legal`] and replaced by the first legal fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct Policy;

impl Policy {
    pub fn decide<R>(
        &self,
        strength: Probability,
        legal: &Legal,
        call_cost: Chips,
        pot: Chips,
        rng: &mut R,
    ) -> Choice
    where
        R: Rng + ?Sized,
    {
        let choice = match strength {
            s if s > BAND_MONSTER => legal
                .first_of([Choice::AllIn, Choice::RaisePot, Choice::RaiseHalfPot])
                .unwrap_or(Choice::CheckCall),
            s if s > BAND_STRONG => legal
                .first_of([Choice::RaisePot, Choice::RaiseHalfPot])
                .unwrap_or(Choice::CheckCall),
            s if s > BAND_GOOD => match legal.contains(Choice::RaiseHalfPot)
                && rng.random::<Probability>() > PASSIVE_FREQUENCY
            {
                true => Choice::RaiseHalfPot,
                false => legal.first_of([Choice::CheckCall]).unwrap_or(Choice::Fold),
            },
            s if s > BAND_MARGINAL => match legal.contains(Choice::CheckCall) {
                true if call_cost == 0 => Choice::CheckCall,
                true if s > Self::pot_odds(call_cost, pot) + POT_ODDS_MARGIN => Choice::CheckCall,
                _ => Choice::Fold,
            },
            _ => match legal.contains(Choice::CheckCall) && call_cost == 0 {
                true => Choice::CheckCall,
                false => Choice::Fold,
            },
        };
        match legal.contains(choice) {
            true => choice,
            false => legal.first_of(Choice::fallbacks()).unwrap_or(choice),
        }
    }

    /// Share of the final pot we would be paying for.
    pub fn pot_odds(call_cost: Chips, pot: Chips) -> Probability {
        call_cost as Probability / pot.saturating_add(call_cost).saturating_add(1) as Probability
    }
}
