use hpb_core::Chips;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// Game state posted to `/get_action`.
///
/// Every field is optional. Missing or `null` lists are empty, missing or
/// `null` numbers are zero, and fractional chip counts are truncated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionRequest {
    #[serde(deserialize_with = "nullable")]
    pub legal_actions: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub hand: Vec<Option<String>>,
    #[serde(deserialize_with = "nullable")]
    pub public_cards: Vec<Option<String>>,
    #[serde(deserialize_with = "chips")]
    pub pot: Chips,
    #[serde(deserialize_with = "chips")]
    pub current_bet: Chips,
    #[serde(deserialize_with = "chips")]
    pub player_current_bet: Chips,
    #[serde(deserialize_with = "chips")]
    pub chips: Chips,
    #[serde(deserialize_with = "chips")]
    pub min_raise: Chips,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_id: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_players: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<serde_json::Value>,
}

impl ActionRequest {
    /// Hole card tokens that are actually present.
    pub fn hole_tokens(&self) -> impl Iterator<Item = &str> {
        self.hand.iter().flatten().map(String::as_str)
    }
    /// Community card tokens that are actually present.
    pub fn board_tokens(&self) -> impl Iterator<Item = &str> {
        self.public_cards.iter().flatten().map(String::as_str)
    }
}

fn nullable<'de, D, T>(d: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(d).map(Option::unwrap_or_default)
}

/// Any JSON number, truncated toward zero.
fn chips<'de, D>(d: D) -> Result<Chips, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(d).map(|x| x.map(|x| x as Chips).unwrap_or_default())
}
