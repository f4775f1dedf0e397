//! Request-scoped data models
//!
//! Nothing here is persisted; every value lives for the single call that
//! consumes it.

use chrono::{DateTime, NaiveDate};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::AdvisorError;
use crate::Result;

//
// ================= Profile =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub annual_income: f64,
    /// Category → amount, kept in caller order.
    #[serde(default)]
    pub monthly_expenses: IndexMap<String, f64>,
    pub current_savings: f64,
    #[serde(default)]
    pub financial_goals: Vec<String>,
    pub risk_tolerance: String,
}

impl UserProfile {
    pub fn validate(&self) -> Result<()> {
        check_amount("annual income", self.annual_income)?;
        check_amount("current savings", self.current_savings)?;
        for (category, amount) in &self.monthly_expenses {
            check_amount(&format!("monthly expense '{}'", category), *amount)?;
        }
        Ok(())
    }
}

//
// ================= Goal =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(rename = "type")]
    pub goal_type: String,
    pub target_amount: f64,
    pub current_amount: f64,
    #[serde(deserialize_with = "deserialize_target_date")]
    pub target_date: NaiveDate,
}

impl Goal {
    pub fn validate(&self) -> Result<()> {
        check_amount("target amount", self.target_amount)?;
        check_amount("current amount", self.current_amount)
    }

    /// Long-form date, e.g. "December 31, 2025".
    pub fn formatted_target_date(&self) -> String {
        self.target_date.format("%B %-d, %Y").to_string()
    }
}

/// Accepts a plain `YYYY-MM-DD` date or a full RFC 3339 timestamp.
fn deserialize_target_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .map_err(|e| serde::de::Error::custom(format!("invalid target date '{}': {}", raw, e)))
}

//
// ================= Chat =================
//

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

fn check_amount(field: &str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(AdvisorError::InvalidInput(format!(
            "{} must be a finite number",
            field
        )));
    }
    Ok(())
}
