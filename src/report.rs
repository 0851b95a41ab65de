//! Presentation of estimation results

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::Result;
use crate::estimator::EstimateBreakdown;

/// A single estimate, ready to print or serialize
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimationReport {
    /// When the estimate was produced
    pub generated_at: DateTime<Utc>,
    /// Free-text tag shown next to the result
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(flatten)]
    pub breakdown: EstimateBreakdown,
}

impl EstimationReport {
    pub fn from_breakdown(breakdown: EstimateBreakdown) -> Self {
        Self {
            generated_at: Utc::now(),
            label: None,
            breakdown,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Emissions in grams, rounded to two decimals
    pub fn render_text(&self) -> String {
        match &self.label {
            Some(label) => format!(
                "Estimated CO2 emissions ({}): {:.2} grams",
                label, self.breakdown.co2_grams
            ),
            None => format!(
                "Estimated CO2 emissions: {:.2} grams",
                self.breakdown.co2_grams
            ),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
