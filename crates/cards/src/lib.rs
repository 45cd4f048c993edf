//! Card representation, wire codecs, and hand evaluation.
//!
//! All representations are small `Copy` values built for bijective encoding
//! and fast bitwise evaluation.
//!
//! ## Core Types
//!
//! - [`Card`] — A single card as a `(Rank, Suit)` tuple encoded in one byte
//! - [`Wire`] — The game server's card notation (`"H10"`, `"SA"`)
//! - [`Hand`] — An unordered set of cards as a 64-bit bitmask
//! - [`Hole`] — A player's two private cards
//! - [`Board`] — The community cards (flop, turn, river)
//! - [`Deck`] — A shuffled collection for dealing
//!
//! ## Evaluation
//!
//! - [`Evaluator`] — Bitwise best-five-card search over any set of cards
//! - [`Strength`] — Evaluated hand ranking with kicker resolution
//! - [`Ranking`] — Hand category (high card through straight flush)
//! - [`Strength::percentile`] — Class among the 7462 distinct five-card hands
//!   over 7462, the post-flop input to strength estimation
//!
//! ## Street Progression
//!
//! [`Street`] encodes the four betting rounds: preflop → flop → turn → river.
mod board;
mod card;
mod deck;
mod error;
mod evaluator;
mod hand;
mod hole;
mod kicks;
mod rank;
mod ranking;
mod street;
mod strength;
mod suit;
mod wire;

pub use board::*;
pub use card::*;
pub use deck::*;
pub use error::*;
pub use evaluator::*;
pub use hand::*;
pub use hole::*;
pub use kicks::*;
pub use rank::*;
pub use ranking::*;
pub use street::*;
pub use strength::*;
pub use suit::*;
pub use wire::*;
