use crate::error::{HelocError, Result};
use log::debug;

pub const DEFAULT_MAX_LTV_PERCENT: f64 = 85.;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityInputs {
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub max_ltv_percent: Option<f64>, // DEFAULT_MAX_LTV_PERCENT when None or not positive
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityResult {
    pub available_to_borrow: f64,
    pub current_equity: f64,
    pub current_ltv_percent: f64,
    pub max_ltv_percent: f64,
}

/// How much more can be borrowed against the home before reaching the maximum LTV.
pub fn calculate_available_equity(inputs: &EquityInputs) -> Result<EquityResult> {
    if !(inputs.home_value > 0.) {
        return Err(HelocError::invalid(
            "home_value",
            "Please enter a valid home value.",
        ));
    }

    // zero or unparsable entries fall back to the default too
    let max_ltv_percent = inputs
        .max_ltv_percent
        .filter(|ltv| *ltv > 0.)
        .unwrap_or(DEFAULT_MAX_LTV_PERCENT);
    let max_debt = inputs.home_value * (max_ltv_percent / 100.);

    let result = EquityResult {
        available_to_borrow: (max_debt - inputs.mortgage_balance).max(0.),
        current_equity: inputs.home_value - inputs.mortgage_balance,
        current_ltv_percent: inputs.mortgage_balance / inputs.home_value * 100.,
        max_ltv_percent,
    };
    debug!("{:?}", result);
    Ok(result)
}
