use super::rank::Rank;

/// A hand's kicker cards as a u16 rank mask.
///
/// Within one [`Ranking`](super::ranking::Ranking) all kicker sets have the
/// same size, so comparing the masks as integers compares kickers
/// high-card-first.
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Kickers(u16);

impl Kickers {
    /// Kicker ranks from highest to lowest.
    pub fn descending(&self) -> Vec<Rank> {
        let mut ranks = Vec::<Rank>::from(*self);
        ranks.reverse();
        ranks
    }
}

/// u16 isomorphism
impl From<Kickers> for u16 {
    fn from(k: Kickers) -> Self {
        k.0
    }
}
impl From<u16> for Kickers {
    fn from(n: u16) -> Self {
        Self(n & Rank::mask())
    }
}

/// Vec<Rank> isomorphism, ascending
///
/// [2c, Ts, Jc, Js, Jd, Jh]
/// xxx 0001100000001
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        Rank::all()
            .into_iter()
            .filter(|r| k.0 & u16::from(*r) != 0)
            .collect()
    }
}
impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks.iter().map(|r| u16::from(*r)).fold(0u16, |a, b| a | b))
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.descending() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
