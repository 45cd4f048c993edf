use super::evaluator::Evaluator;
use super::hand::Hand;
use super::kicks::Kickers;
use super::rank::Rank;
use super::ranking::Ranking;
use hpb_core::Probability;

/// Number of distinct five-card hand classes, royal flush through 7-high.
pub const CLASSES: u16 = 7462;

/// A fully-evaluated hand strength for comparison.
///
/// Combines a [`Ranking`] (hand category like flush or two pair) with
/// [`Kickers`] (tie-breaking cards). Ordering is lexicographic: ranking
/// first, then kickers.
///
/// Constructed from a [`Hand`] by running the [`Evaluator`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, PartialOrd, Ord)]
pub struct Strength {
    value: Ranking,
    kicks: Kickers,
}

impl Strength {
    /// Position among all distinct five-card hands, `1` for a royal flush
    /// and [`CLASSES`] for 7-5-4-3-2 offsuit. Lower is stronger.
    ///
    /// Each category occupies a contiguous block; within a block hands are
    /// ordered by defining ranks, then kickers, both highest first.
    pub fn class(&self) -> u16 {
        let kicks = self.kicks.descending();
        match self.value {
            Ranking::StraightFlush(hi) => 1 + top(hi),
            Ranking::FourOAK(quad) => {
                let kick = squeeze(kicks.first().copied(), &[quad]);
                11 + top(quad) * 12 + 11u16.saturating_sub(kick)
            }
            Ranking::FullHouse(trip, pair) => {
                let pair = squeeze(Some(pair), &[trip]);
                167 + top(trip) * 12 + 11u16.saturating_sub(pair)
            }
            Ranking::Flush(hi) => 323 + 1276u16.saturating_sub(unpaired(hi, &kicks)),
            Ranking::Straight(hi) => 1600 + top(hi),
            Ranking::ThreeOAK(trip) => {
                let kicks = kicks
                    .iter()
                    .map(|k| squeeze(Some(*k), &[trip]))
                    .collect::<Vec<u16>>();
                1610 + top(trip) * 66 + 65u16.saturating_sub(colex(&kicks))
            }
            Ranking::TwoPair(hi, lo) => {
                let pairs = colex(&[u16::from(u8::from(hi)), u16::from(u8::from(lo))]);
                let kick = squeeze(kicks.first().copied(), &[hi, lo]);
                2468 + 77u16.saturating_sub(pairs) * 11 + 10u16.saturating_sub(kick)
            }
            Ranking::OnePair(pair) => {
                let kicks = kicks
                    .iter()
                    .map(|k| squeeze(Some(*k), &[pair]))
                    .collect::<Vec<u16>>();
                3326 + top(pair) * 220 + 219u16.saturating_sub(colex(&kicks))
            }
            Ranking::HighCard(hi) => 6186 + 1276u16.saturating_sub(unpaired(hi, &kicks)),
        }
    }
    /// Fraction of distinct five-card hands that beat or tie this one.
    /// Near zero for the nuts, exactly one for the worst hand.
    pub fn percentile(&self) -> Probability {
        self.class() as Probability / CLASSES as Probability
    }
}

/// Distance from the top rank: Ace is 0, Two is 12.
fn top(rank: Rank) -> u16 {
    u16::from(u8::from(Rank::MAX) - u8::from(rank))
}

/// Ordinal of a rank once the excluded ranks are removed from the ladder.
fn squeeze(rank: Option<Rank>, skip: &[Rank]) -> u16 {
    rank.map(|r| u8::from(r) - skip.iter().filter(|s| **s < r).count() as u8)
        .map(u16::from)
        .unwrap_or_default()
}

fn choose(n: u16, k: u16) -> u16 {
    match k > n {
        true => 0,
        false => (0..k).fold(1u32, |acc, i| acc * u32::from(n - i) / u32::from(i + 1)) as u16,
    }
}

/// Colexicographic index of a set given highest element first. Ordering
/// sets by this index is the same as comparing them high card first.
fn colex(desc: &[u16]) -> u16 {
    let k = desc.len() as u16;
    desc.iter()
        .enumerate()
        .map(|(i, r)| choose(*r, k - i as u16))
        .sum()
}

/// Index among the 1277 five-distinct-rank sets that do not form a straight.
fn unpaired(hi: Rank, kicks: &[Rank]) -> u16 {
    let ranks = std::iter::once(hi)
        .chain(kicks.iter().copied())
        .map(|r| u16::from(u8::from(r)))
        .collect::<Vec<u16>>();
    let index = colex(&ranks);
    index - straights().into_iter().filter(|s| *s < index).count() as u16
}

/// Colexicographic indices of the ten straight rank patterns.
fn straights() -> [u16; 10] {
    let mut patterns = [0u16; 10];
    for (i, hi) in (u8::from(Rank::Five)..=u8::from(Rank::Ace)).enumerate() {
        patterns[i] = match hi {
            3 => colex(&[12, 3, 2, 1, 0]),
            _ => colex(&[hi, hi - 1, hi - 2, hi - 3, hi - 4].map(u16::from)),
        };
    }
    patterns
}

impl From<Hand> for Strength {
    fn from(hand: Hand) -> Self {
        Self::from(Evaluator::from(hand))
    }
}

impl From<Evaluator> for Strength {
    fn from(e: Evaluator) -> Self {
        let value = e.find_ranking();
        let kicks = e.find_kickers(value);
        Self::from((value, kicks))
    }
}

impl From<(Ranking, Kickers)> for Strength {
    fn from((value, kicks): (Ranking, Kickers)) -> Self {
        Self { value, kicks }
    }
}

impl std::fmt::Display for Strength {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<18}{:>5}", self.value, self.kicks)
    }
}
