use super::choice::Choice;
use std::collections::BTreeMap;

/// The policy's output: one choice plus an auxiliary payload that is
/// currently always empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    choice: Choice,
    extras: BTreeMap<String, String>,
}

impl Decision {
    pub fn choice(&self) -> Choice {
        self.choice
    }
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }
}

impl From<Choice> for Decision {
    fn from(choice: Choice) -> Self {
        Self {
            choice,
            extras: BTreeMap::new(),
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.choice)
    }
}
