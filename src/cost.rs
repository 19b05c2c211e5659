use crate::error::{HelocError, Result};
use crate::payment::{monthly_payment, monthly_rate, MONTHS_PER_YEAR};
use log::debug;

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleLoanInputs {
    pub principal: f64,
    pub annual_rate: f64, // percent
    pub term_years: f64,  // fractional years allowed
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimpleLoanResult {
    pub monthly_payment: f64,
    pub total_paid: f64,
    pub total_interest: f64,
    pub interest_percent_of_principal: f64,
}

// fully amortizing loan, no validation
pub(crate) fn amortize(principal: f64, annual_rate: f64, term_years: f64) -> SimpleLoanResult {
    let months = term_years * MONTHS_PER_YEAR;
    let pmt = monthly_payment(principal, monthly_rate(annual_rate), months);
    let total_paid = pmt * months;
    let total_interest = total_paid - principal;

    SimpleLoanResult {
        monthly_payment: pmt,
        total_paid,
        total_interest,
        interest_percent_of_principal: total_interest / principal * 100.,
    }
}

/// Total interest cost of a fully amortizing fixed-rate loan.
pub fn calculate_interest_cost(inputs: &SimpleLoanInputs) -> Result<SimpleLoanResult> {
    for (field, value) in [
        ("principal", inputs.principal),
        ("annual_rate", inputs.annual_rate),
        ("term_years", inputs.term_years),
    ] {
        if !(value > 0.) {
            return Err(HelocError::invalid(field, "Please enter valid values."));
        }
    }

    let result = amortize(inputs.principal, inputs.annual_rate, inputs.term_years);
    debug!("{:?}", result);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::{calculate_interest_cost, SimpleLoanInputs};
    use crate::error::HelocError;
    use crate::payment::round;
    use approx::assert_relative_eq;
    use test_log::test;

    #[test]
    fn test_interest_cost() {
        let result = calculate_interest_cost(&SimpleLoanInputs {
            principal: 200000.,
            annual_rate: 7.,
            term_years: 15.,
        })
        .unwrap();

        assert_eq!(round(result.monthly_payment, 2.), 1797.66);
        assert_relative_eq!(result.total_paid, result.monthly_payment * 180.);
        assert_relative_eq!(result.total_interest, result.total_paid - 200000.);
        assert_relative_eq!(
            result.interest_percent_of_principal,
            result.total_interest / 200000. * 100.
        );
        assert_eq!(round(result.total_interest, 0.), 123578.);
    }

    #[test]
    fn test_fractional_term() {
        let result = calculate_interest_cost(&SimpleLoanInputs {
            principal: 10000.,
            annual_rate: 6.,
            term_years: 2.5,
        })
        .unwrap();

        assert_relative_eq!(result.total_paid, result.monthly_payment * 30.);
        assert!(result.total_interest > 0.);
    }

    #[test]
    fn test_repeated_calls_identical() {
        let inputs = SimpleLoanInputs {
            principal: 123456.78,
            annual_rate: 6.875,
            term_years: 17.5,
        };
        assert_eq!(
            calculate_interest_cost(&inputs),
            calculate_interest_cost(&inputs)
        );
    }

    #[test]
    fn test_all_fields_required() {
        let good = SimpleLoanInputs {
            principal: 10000.,
            annual_rate: 6.,
            term_years: 5.,
        };
        for (inputs, expected) in [
            (SimpleLoanInputs { principal: 0., ..good.clone() }, "principal"),
            (SimpleLoanInputs { annual_rate: -1., ..good.clone() }, "annual_rate"),
            (SimpleLoanInputs { term_years: 0., ..good.clone() }, "term_years"),
        ] {
            match calculate_interest_cost(&inputs) {
                Err(HelocError::InvalidInput { field, reason }) => {
                    assert_eq!(field, expected);
                    assert_eq!(reason, "Please enter valid values.");
                }
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }
}
