use serde::{Deserialize, Serialize};

/// Part-owner of the property who receives a share of net income.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shareholder {
    pub name: String,
    pub percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl Shareholder {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage,
            status: None,
        }
    }
}
