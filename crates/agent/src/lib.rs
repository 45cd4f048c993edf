//! The heuristic decision pipeline.
//!
//! Two action vocabularies meet here: the game server's names ([`Move`],
//! collected into a [`Menu`]) and the agent's internal ids ([`Choice`],
//! collected into a [`Legal`] set). [`BRIDGE`] is the single mapping
//! between them.
//!
//! ## Pipeline
//!
//! - [`Legal`] — Menu mapped onto internal ids, unaffordable raises removed
//! - [`Estimator`] — Hole and board scored on `[0, 1]`
//! - [`Policy`] — Threshold table from strength and pot odds to a [`Choice`]
//! - [`Reply`] — Choice translated back to a move the server accepts
//! - [`Agent`] — All of the above over one [`Table`]
mod agent;
mod choice;
mod decision;
mod estimator;
mod legal;
mod moves;
mod policy;
mod reply;
mod table;

pub use agent::*;
pub use choice::*;
pub use decision::*;
pub use estimator::*;
pub use legal::*;
pub use moves::*;
pub use policy::*;
pub use reply::*;
pub use table::*;
