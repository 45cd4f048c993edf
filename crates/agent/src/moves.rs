use super::choice::Choice;

/// The game server's action vocabulary.
///
/// Parallel to [`Choice`] but coarser: both raise sizes share one name and
/// check and call are distinct. [`BRIDGE`] is the only place the two
/// vocabularies meet.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Move {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

/// Every pairing of external name and internal id, in preference order.
pub const BRIDGE: [(Move, Choice); 6] = [
    (Move::Fold, Choice::Fold),
    (Move::Check, Choice::CheckCall),
    (Move::Call, Choice::CheckCall),
    (Move::Raise, Choice::RaiseHalfPot),
    (Move::Raise, Choice::RaisePot),
    (Move::AllIn, Choice::AllIn),
];

impl Move {
    pub const fn all() -> [Self; 5] {
        [Self::Fold, Self::Check, Self::Call, Self::Raise, Self::AllIn]
    }
    /// Scan order when a response would otherwise name an absent move,
    /// most passive first.
    pub const fn safest() -> [Self; 5] {
        [Self::Check, Self::Call, Self::Fold, Self::Raise, Self::AllIn]
    }
    /// Internal ids this name can stand for.
    pub fn choices(self) -> impl Iterator<Item = Choice> {
        BRIDGE
            .into_iter()
            .filter(move |(m, _)| *m == self)
            .map(|(_, c)| c)
    }
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fold => "fold",
            Self::Check => "check",
            Self::Call => "call",
            Self::Raise => "raise",
            Self::AllIn => "all-in",
        }
    }
}

impl Choice {
    /// External names this id can be sent as, preferred first.
    pub fn moves(self) -> impl Iterator<Item = Move> {
        BRIDGE
            .into_iter()
            .filter(move |(_, c)| *c == self)
            .map(|(m, _)| m)
    }
}

impl TryFrom<&str> for Move {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::all()
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| format!("unknown action: {}", s))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The set of moves the game server says are legal right now.
///
/// Stored as a bitmask over [`Move`] discriminants. Names outside the
/// vocabulary are dropped with a warning when the menu is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Menu(u8);

impl Menu {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn with(self, m: Move) -> Self {
        Self(self.0 | 1 << m as u8)
    }
    pub fn contains(&self, m: Move) -> bool {
        (self.0 & 1 << m as u8) != 0
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// First move of `order` that is on the menu.
    pub fn first_of(&self, order: impl IntoIterator<Item = Move>) -> Option<Move> {
        order.into_iter().find(|m| self.contains(*m))
    }
    pub fn iter(&self) -> impl Iterator<Item = Move> + '_ {
        Move::all().into_iter().filter(|m| self.contains(*m))
    }
}

impl FromIterator<Move> for Menu {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl<S: AsRef<str>> From<&[S]> for Menu {
    fn from(names: &[S]) -> Self {
        names
            .iter()
            .map(|name| name.as_ref())
            .filter_map(|name| {
                Move::try_from(name)
                    .inspect_err(|e| log::warn!("ignoring {}", e))
                    .ok()
            })
            .collect()
    }
}

/// u8 isomorphism
impl From<Menu> for u8 {
    fn from(menu: Menu) -> Self {
        menu.0
    }
}
impl From<u8> for Menu {
    fn from(n: u8) -> Self {
        Self(n & ((1 << Move::all().len()) - 1))
    }
}

impl std::fmt::Display for Menu {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let names = self.iter().map(|m| m.as_str()).collect::<Vec<_>>();
        write!(f, "[{}]", names.join(", "))
    }
}
