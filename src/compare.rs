//! HELOC versus home-equity loan cost comparison.
//!
//! The HELOC leg is modelled as interest-only for a fixed draw period (capped at the
//! comparison term) followed by an amortizing repayment of the full amount. When the term
//! is no longer than the draw period there is no repayment phase, so the HELOC total
//! excludes the principal while the loan total includes it. Callers comparing short terms
//! should keep this in mind.

use crate::cost::{amortize, SimpleLoanResult};
use crate::error::{HelocError, Result};
use crate::payment::{monthly_payment, monthly_rate, MONTHS_PER_YEAR};
use log::{debug, trace};
use std::fmt;

/// Typical interest-only draw period assumed for the HELOC leg.
pub const HELOC_DRAW_PERIOD_YEARS: f64 = 10.;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonInputs {
    pub amount: f64,
    pub heloc_rate: f64, // percent
    pub loan_rate: f64,  // percent
    pub term_years: f64,
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HelocLeg {
    pub draw_period_years: f64,
    pub repayment_years: f64,
    pub interest_only_payment: f64,
    pub repayment_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    #[cfg_attr(feature = "serde", serde(rename = "HELOC"))]
    Heloc,
    #[cfg_attr(feature = "serde", serde(rename = "Home Equity Loan"))]
    HomeEquityLoan,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Heloc => write!(f, "HELOC"),
            Winner::HomeEquityLoan => write!(f, "Home Equity Loan"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonResult {
    pub heloc: HelocLeg,
    pub loan: SimpleLoanResult,
    pub winner: Winner,
    pub savings: f64, // always non-negative
}

fn heloc_leg(amount: f64, annual_rate: f64, term_years: f64) -> HelocLeg {
    let rate = monthly_rate(annual_rate);
    let interest_only_payment = amount * rate;
    let draw_period_years = HELOC_DRAW_PERIOD_YEARS.min(term_years);
    let repayment_years = term_years - draw_period_years;

    let repayment_payment = if repayment_years > 0. {
        monthly_payment(amount, rate, repayment_years * MONTHS_PER_YEAR)
    } else {
        0.
    };

    let total_paid = interest_only_payment * draw_period_years * MONTHS_PER_YEAR
        + repayment_payment * repayment_years * MONTHS_PER_YEAR;

    HelocLeg {
        draw_period_years,
        repayment_years,
        interest_only_payment,
        repayment_payment,
        total_paid,
        total_interest: total_paid - amount,
    }
}

pub fn compare_options(inputs: &ComparisonInputs) -> Result<ComparisonResult> {
    for (field, value) in [
        ("amount", inputs.amount),
        ("heloc_rate", inputs.heloc_rate),
        ("loan_rate", inputs.loan_rate),
        ("term_years", inputs.term_years),
    ] {
        if !(value > 0.) {
            return Err(HelocError::invalid(field, "Please enter valid values."));
        }
    }

    let heloc = heloc_leg(inputs.amount, inputs.heloc_rate, inputs.term_years);
    let loan = amortize(inputs.amount, inputs.loan_rate, inputs.term_years);

    let savings = loan.total_paid - heloc.total_paid;
    trace!(
        "heloc total {}, loan total {}, difference {}",
        heloc.total_paid,
        loan.total_paid,
        savings
    );
    let winner = if savings > 0. {
        Winner::Heloc
    } else {
        Winner::HomeEquityLoan
    };

    let result = ComparisonResult {
        heloc,
        loan,
        winner,
        savings: savings.abs(),
    };
    debug!("{:?}", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{compare_options, ComparisonInputs, Winner};
    use crate::error::HelocError;
    use crate::payment::{monthly_payment, monthly_rate, round};
    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn test_short_term_has_no_repayment() {
        let result = compare_options(&ComparisonInputs {
            amount: 50000.,
            heloc_rate: 8.,
            loan_rate: 7.,
            term_years: 5.,
        })
        .unwrap();

        let heloc = &result.heloc;
        assert_eq!(heloc.draw_period_years, 5.);
        assert_eq!(heloc.repayment_years, 0.);
        assert_eq!(heloc.repayment_payment, 0.);
        assert_eq!(round(heloc.interest_only_payment, 2.), 333.33);
        assert_relative_eq!(
            heloc.total_paid,
            heloc.interest_only_payment * 60.,
            max_relative = 1e-12
        );
        // principal is never repaid inside the window
        assert!(heloc.total_paid < 50000.);
        assert!(heloc.total_interest < 0.);

        assert_eq!(round(result.loan.monthly_payment, 2.), 990.06);
        assert_eq!(result.winner, Winner::Heloc);
        assert_relative_eq!(
            result.savings,
            result.loan.total_paid - heloc.total_paid,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_long_term_with_repayment() {
        let result = compare_options(&ComparisonInputs {
            amount: 100000.,
            heloc_rate: 9.,
            loan_rate: 7.,
            term_years: 25.,
        })
        .unwrap();

        let heloc = &result.heloc;
        assert_eq!(heloc.draw_period_years, 10.);
        assert_eq!(heloc.repayment_years, 15.);
        assert_eq!(
            heloc.repayment_payment,
            monthly_payment(100000., monthly_rate(9.), 180.)
        );
        assert_relative_eq!(
            heloc.total_paid,
            heloc.interest_only_payment * 120. + heloc.repayment_payment * 180.,
            max_relative = 1e-12
        );

        // ten years of interest-only at a higher rate costs more than amortizing at 7%
        assert_eq!(result.winner, Winner::HomeEquityLoan);
        assert_relative_eq!(
            result.savings,
            heloc.total_paid - result.loan.total_paid,
            max_relative = 1e-12
        );
        assert!(result.savings > 0.);
    }

    #[test]
    fn test_term_equal_to_draw_period() {
        let result = compare_options(&ComparisonInputs {
            amount: 1000.,
            heloc_rate: 5.,
            loan_rate: 5.,
            term_years: 10.,
        })
        .unwrap();
        assert_eq!(result.heloc.repayment_years, 0.);
        assert_eq!(result.winner, Winner::Heloc);
        assert_eq!(Winner::HomeEquityLoan.to_string(), "Home Equity Loan");
        assert_eq!(Winner::Heloc.to_string(), "HELOC");
    }

    #[test]
    fn test_validation() {
        let good = ComparisonInputs {
            amount: 50000.,
            heloc_rate: 8.,
            loan_rate: 7.,
            term_years: 5.,
        };
        for (inputs, expected) in [
            (ComparisonInputs { amount: 0., ..good.clone() }, "amount"),
            (ComparisonInputs { heloc_rate: 0., ..good.clone() }, "heloc_rate"),
            (ComparisonInputs { loan_rate: -2., ..good.clone() }, "loan_rate"),
            (ComparisonInputs { term_years: 0., ..good.clone() }, "term_years"),
        ] {
            match compare_options(&inputs) {
                Err(HelocError::InvalidInput { field, .. }) => assert_eq!(field, expected),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_repeated_calls_identical() {
        let inputs = ComparisonInputs {
            amount: 75000.,
            heloc_rate: 8.25,
            loan_rate: 7.5,
            term_years: 20.,
        };
        assert_eq!(compare_options(&inputs), compare_options(&inputs));
    }
}
