use crate::error::{HelocError, Result};
use crate::payment::{monthly_payment, monthly_rate, MONTHS_PER_YEAR};
use log::{debug, trace};
use std::{fmt, str::FromStr};

/// Maximum combined loan-to-value a lender is assumed to allow, in percent.
pub const MAX_COMBINED_LTV_PERCENT: f64 = 85.;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PaymentType {
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "interest-only"))]
    InterestOnly,
    #[cfg_attr(feature = "serde", serde(rename = "principal-interest"))]
    PrincipalAndInterest,
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentType::InterestOnly => write!(f, "Interest Only"),
            PaymentType::PrincipalAndInterest => write!(f, "Principal + Interest"),
        }
    }
}

impl FromStr for PaymentType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "interest-only" | "interest_only" | "io" => Ok(PaymentType::InterestOnly),
            "principal-interest" | "principal-and-interest" | "pi" => {
                Ok(PaymentType::PrincipalAndInterest)
            }
            other => Err(format!("unknown payment type '{}'", other)),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LoanInputs {
    pub home_value: f64,
    pub mortgage_balance: f64,
    pub credit_limit: f64,
    pub draw_amount: f64,
    pub annual_rate: f64, // annual interest rate in percent (i.e., 7.0)
    pub draw_period_years: u32,
    pub repayment_period_years: u32,
    pub payment_type: PaymentType,
}

impl LoanInputs {
    /// Checks every precondition of the HELOC calculator, first failure wins.
    pub fn validate(&self) -> Result<()> {
        if !(self.home_value > 0.) || !(self.draw_amount > 0.) || !(self.annual_rate > 0.) {
            let field = if !(self.home_value > 0.) {
                "home_value"
            } else if !(self.draw_amount > 0.) {
                "draw_amount"
            } else {
                "annual_rate"
            };
            return Err(HelocError::invalid(
                field,
                "Please enter valid positive values for all required fields.",
            ));
        }
        if self.draw_amount > self.credit_limit {
            return Err(HelocError::invalid(
                "draw_amount",
                "Draw amount cannot exceed credit limit.",
            ));
        }
        if self.mortgage_balance > self.home_value {
            return Err(HelocError::invalid(
                "mortgage_balance",
                "Mortgage balance cannot exceed home value.",
            ));
        }
        if self.repayment_period_years == 0 {
            return Err(HelocError::invalid(
                "repayment_period_years",
                "Repayment period must be at least one year.",
            ));
        }
        if self.payment_type == PaymentType::PrincipalAndInterest && self.draw_period_years == 0 {
            return Err(HelocError::invalid(
                "draw_period_years",
                "Draw period must be at least one year for principal + interest payments.",
            ));
        }
        if self.term_months().is_none() {
            return Err(HelocError::invalid(
                "repayment_period_years",
                "Loan term is too long.",
            ));
        }
        Ok(())
    }

    /// Draw plus repayment period in months, `None` if it doesn't fit in a `u32`.
    pub fn term_months(&self) -> Option<u32> {
        self.draw_period_years
            .checked_add(self.repayment_period_years)?
            .checked_mul(12)
    }

    pub fn draw_months(&self) -> f64 {
        f64::from(self.draw_period_years) * MONTHS_PER_YEAR
    }

    pub fn repayment_months(&self) -> f64 {
        f64::from(self.repayment_period_years) * MONTHS_PER_YEAR
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmortizationResult {
    pub inputs: LoanInputs,
    pub equity: f64,
    pub equity_percent: f64,
    pub combined_ltv_percent: f64,
    pub remaining_available_credit: f64,
    pub draw_period_payment: f64,
    pub repayment_payment: f64,
    pub remaining_balance_at_repayment_start: f64,
    pub draw_period_total_paid: f64,
    pub repayment_period_total_paid: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub total_term_years: u32,
    pub additional_borrowing_capacity: f64,
}

/// Payment during the draw period for the given inputs. Inputs must already be validated.
pub(crate) fn draw_period_payment(inputs: &LoanInputs, rate: f64) -> f64 {
    match inputs.payment_type {
        PaymentType::InterestOnly => inputs.draw_amount * rate,
        PaymentType::PrincipalAndInterest => {
            monthly_payment(inputs.draw_amount, rate, inputs.draw_months())
        }
    }
}

pub fn calculate_heloc(inputs: &LoanInputs) -> Result<AmortizationResult> {
    inputs.validate()?;

    let equity = inputs.home_value - inputs.mortgage_balance;
    let equity_percent = equity / inputs.home_value * 100.;
    let combined_ltv_percent =
        (inputs.mortgage_balance + inputs.credit_limit) / inputs.home_value * 100.;

    let rate = monthly_rate(inputs.annual_rate);
    let draw_months = inputs.draw_months();
    let repayment_months = inputs.repayment_months();

    let draw_pmt = draw_period_payment(inputs, rate);

    // principal retired during the draw period is estimated from the first month's split
    let remaining_balance = match inputs.payment_type {
        PaymentType::InterestOnly => inputs.draw_amount,
        PaymentType::PrincipalAndInterest => {
            let principal_repaid = (draw_pmt - inputs.draw_amount * rate) * draw_months;
            (inputs.draw_amount - principal_repaid).max(0.)
        }
    };
    trace!(
        "monthly rate {}, draw payment {}, balance entering repayment {}",
        rate,
        draw_pmt,
        remaining_balance
    );

    let repayment_pmt = monthly_payment(remaining_balance, rate, repayment_months);

    let draw_period_total_paid = draw_pmt * draw_months;
    let repayment_period_total_paid = repayment_pmt * repayment_months;
    let total_paid = draw_period_total_paid + repayment_period_total_paid;

    let max_debt = inputs.home_value * MAX_COMBINED_LTV_PERCENT / 100.;
    let additional_borrowing_capacity =
        (max_debt - (inputs.mortgage_balance + inputs.credit_limit)).max(0.);

    let result = AmortizationResult {
        inputs: inputs.clone(),
        equity,
        equity_percent,
        combined_ltv_percent,
        remaining_available_credit: inputs.credit_limit - inputs.draw_amount,
        draw_period_payment: draw_pmt,
        repayment_payment: repayment_pmt,
        remaining_balance_at_repayment_start: remaining_balance,
        draw_period_total_paid,
        repayment_period_total_paid,
        total_paid,
        total_interest: total_paid - inputs.draw_amount,
        total_term_years: inputs.draw_period_years.saturating_add(inputs.repayment_period_years),
        additional_borrowing_capacity,
    };
    debug!("{:?}", result);
    Ok(result)
}
