use super::choice::Choice;
use super::moves::Move;
use super::table::Table;

/// The internal ids the agent may pick from.
///
/// Bitmask over [`Choice`] discriminants, iterated in ascending id order.
/// Built from a [`Table`] by mapping the game server's menu onto the
/// internal space and dropping raises the stack cannot cover.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Legal(u8);

impl Legal {
    pub fn empty() -> Self {
        Self(0)
    }
    pub fn with(self, c: Choice) -> Self {
        Self(self.0 | 1 << u8::from(c))
    }
    pub fn contains(&self, c: Choice) -> bool {
        (self.0 & 1 << u8::from(c)) != 0
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    /// First legal choice of `order`.
    pub fn first_of(&self, order: impl IntoIterator<Item = Choice>) -> Option<Choice> {
        order.into_iter().find(|c| self.contains(*c))
    }
    pub fn iter(&self) -> impl Iterator<Item = Choice> + '_ {
        Choice::all().into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Choice> for Legal {
    fn from_iter<I: IntoIterator<Item = Choice>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

/// Maps the game server's menu into the internal action space.
///
/// Every offered name contributes the ids it bridges to; raise sizes the
/// stack cannot cover after calling are left out. A menu that maps to
/// nothing still yields a single passive id, so the result is never empty.
impl From<&Table> for Legal {
    fn from(table: &Table) -> Self {
        let legal = table
            .menu
            .iter()
            .flat_map(Move::choices)
            .filter(|c| table.affords(*c))
            .collect::<Self>();
        match legal.is_empty() {
            false => legal,
            true => match table.menu.contains(Move::Check) {
                true => Self::empty().with(Choice::CheckCall),
                false => Self::empty().with(Choice::Fold),
            },
        }
    }
}

/// u8 isomorphism
impl From<Legal> for u8 {
    fn from(legal: Legal) -> Self {
        legal.0
    }
}
impl From<u8> for Legal {
    fn from(n: u8) -> Self {
        Self(n & ((1 << Choice::all().len()) - 1))
    }
}

impl std::fmt::Display for Legal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let ids = self
            .iter()
            .map(|c| u8::from(c).to_string())
            .collect::<Vec<_>>();
        write!(f, "{{{}}}", ids.join(", "))
    }
}
