//! Data transfer objects for the decision API.
//!
//! Request and response types for `/get_action` and `/health`, serializable
//! via `serde`. These types bridge the gap between the game server's JSON
//! and the agent's domain model.
mod request;
mod response;

pub use request::*;
pub use response::*;
