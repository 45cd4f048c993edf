use super::error::CardError;

/// The four betting rounds in Texas Hold'em.
///
/// Each street reveals additional community cards. The street is always
/// inferred from the number of board cards: 0, 3, 4 or 5.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Street {
    #[default]
    Pref = 0isize,
    Flop = 1isize,
    Turn = 2isize,
    Rive = 3isize,
}

impl Street {
    /// All four streets in order.
    pub const fn all() -> [Self; 4] {
        [Self::Pref, Self::Flop, Self::Turn, Self::Rive]
    }
    /// Total cards visible to a player (hole + board).
    pub const fn n_observed(&self) -> usize {
        match self {
            Self::Pref => 2,
            Self::Flop => 5,
            Self::Turn => 6,
            Self::Rive => 7,
        }
    }
    /// Community cards on the table during this street.
    pub const fn n_board(&self) -> usize {
        self.n_observed() - 2
    }
}

/// Board size isomorphism
impl TryFrom<usize> for Street {
    type Error = CardError;
    fn try_from(n: usize) -> Result<Self, Self::Error> {
        match n {
            0 => Ok(Self::Pref),
            3 => Ok(Self::Flop),
            4 => Ok(Self::Turn),
            5 => Ok(Self::Rive),
            x => Err(CardError::Length(format!("{} board cards", x))),
        }
    }
}

impl std::fmt::Display for Street {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Pref => write!(f, "preflop"),
            Self::Flop => write!(f, "flop"),
            Self::Turn => write!(f, "turn"),
            Self::Rive => write!(f, "river"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_board_size() {
        for street in Street::all() {
            assert_eq!(Street::try_from(street.n_board()), Ok(street));
        }
    }

    #[test]
    fn partial_flops_rejected() {
        assert!(Street::try_from(1).is_err());
        assert!(Street::try_from(2).is_err());
        assert!(Street::try_from(6).is_err());
    }
}
