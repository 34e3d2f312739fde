use serde::{Deserialize, Serialize};

use super::punch::Punch;
use crate::errors::AppResult;

/// The set of punches recorded against one employee for one scheduled shift.
/// Punches are not guaranteed to arrive sorted; the calculator sorts them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timesheet {
    pub id: String,
    #[serde(default)]
    pub punches: Vec<Punch>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Timesheet {
    pub fn new(id: impl Into<String>, punches: Vec<Punch>) -> Self {
        Self {
            id: id.into(),
            punches,
            note: None,
        }
    }

    /// Parse a timesheet from its REST payload shape.
    pub fn from_json(payload: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
