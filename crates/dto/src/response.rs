use hpb_core::Chips;
use serde::Deserialize;
use serde::Serialize;

/// Body of a successful `/get_action` response.
///
/// `amount` is omitted for the empty-menu fold short circuit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionResponse {
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Chips>,
}

impl ActionResponse {
    /// Fold without an amount, sent when nothing is legal.
    pub fn fold() -> Self {
        Self {
            action: String::from("fold"),
            amount: None,
        }
    }
}

/// Body of any failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(e: impl std::fmt::Display) -> Self {
        Self {
            error: e.to_string(),
        }
    }
}

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self {
            status: String::from("ok"),
        }
    }
}
