use hpb_core::*;

/// The agent's internal decision space.
///
/// Ids are fixed: the policy's priority lists and the fallback scan both
/// refer to them. Raises carry no amount here; sizing is resolved against
/// the [`Table`](super::table::Table) when the choice is mapped or sent.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Choice {
    Fold = 0,
    CheckCall = 1,
    RaiseHalfPot = 2,
    RaisePot = 3,
    AllIn = 4,
}

impl Choice {
    pub const fn all() -> [Self; 5] {
        [
            Self::Fold,
            Self::CheckCall,
            Self::RaiseHalfPot,
            Self::RaisePot,
            Self::AllIn,
        ]
    }
    /// Last-resort targets when a preferred choice is not legal.
    pub const fn fallbacks() -> [Self; 2] {
        [Self::CheckCall, Self::Fold]
    }
    /// Raise increment over the current bet, `None` for non-raises.
    pub fn raise_size(&self, pot: Chips, min_raise: Chips) -> Option<Chips> {
        match self {
            Self::RaiseHalfPot => Some((pot / HALF_POT_DIVISOR).max(min_raise)),
            Self::RaisePot => Some(pot.max(min_raise)),
            _ => None,
        }
    }
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::CheckCall => "check/call",
            Self::RaiseHalfPot => "raise half pot",
            Self::RaisePot => "raise pot",
            Self::AllIn => "all-in",
        }
    }
}

/// u8 isomorphism
impl From<Choice> for u8 {
    fn from(c: Choice) -> Self {
        c as u8
    }
}
impl TryFrom<u8> for Choice {
    type Error = String;
    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|c| u8::from(*c) == n)
            .ok_or_else(|| format!("no choice with id {}", n))
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", u8::from(*self), self.label())
    }
}
