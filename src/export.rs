use crate::error::Result;
use crate::heloc::LoanInputs;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_EXPORT_FILE: &str = "heloc-calculation.json";

/// Raw HELOC calculator inputs as saved by the export action.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportInputs {
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub credit_limit: f64,
    pub draw_amount: f64,
    pub interest_rate: f64,
    pub draw_period: u32,
    pub repayment_period: u32,
}

impl From<&LoanInputs> for ExportInputs {
    fn from(inputs: &LoanInputs) -> Self {
        Self {
            home_value: inputs.home_value,
            mortgage_balance: inputs.mortgage_balance,
            credit_limit: inputs.credit_limit,
            draw_amount: inputs.draw_amount,
            interest_rate: inputs.annual_rate,
            draw_period: inputs.draw_period_years,
            repayment_period: inputs.repayment_period_years,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ExportDocument {
    pub timestamp: DateTime<Utc>,
    pub inputs: ExportInputs,
}

/// Pretty-printed JSON document of `inputs`, stamped with `timestamp`.
pub fn export_inputs(inputs: &LoanInputs, timestamp: DateTime<Utc>) -> Result<String> {
    let doc = ExportDocument {
        timestamp,
        inputs: inputs.into(),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}
