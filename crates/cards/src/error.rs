/// Errors produced while decoding card notation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    Empty,
    Length(String),
    Rank(String),
    Suit(String),
    Duplicate(String),
}

impl std::fmt::Display for CardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid card format: empty token"),
            Self::Length(s) => write!(f, "invalid card format: {:?} has wrong length", s),
            Self::Rank(s) => write!(f, "invalid card format: unknown rank {:?}", s),
            Self::Suit(s) => write!(f, "invalid card format: unknown suit {:?}", s),
            Self::Duplicate(s) => write!(f, "duplicate card: {}", s),
        }
    }
}

impl std::error::Error for CardError {}
