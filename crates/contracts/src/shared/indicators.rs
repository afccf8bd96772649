use serde::{Deserialize, Serialize};

/// How to format a stat-card value on the frontend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
}

impl ValueFormat {
    /// Rupee format used across the dashboard.
    pub fn rupees() -> Self {
        ValueFormat::Money {
            currency: "Rs.".to_string(),
        }
    }
}

/// Visual status of a stat card (drives colour).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorStatus {
    Good,
    Bad,
    Neutral,
}
