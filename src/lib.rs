//! Home-equity borrowing calculators.
//!
//! Each calculator is a pure function from an input record to a result record,
//! failing only with [`HelocError::InvalidInput`]. All payments are monthly at a
//! constant annual rate.

pub mod compare;
pub mod cost;
pub mod equity;
pub mod error;
#[cfg(feature = "serde")]
pub mod export;
pub mod format;
pub mod heloc;
pub mod payment;
pub mod schedule;

pub use compare::{compare_options, ComparisonInputs, ComparisonResult, HelocLeg, Winner};
pub use cost::{calculate_interest_cost, SimpleLoanInputs, SimpleLoanResult};
pub use equity::{calculate_available_equity, EquityInputs, EquityResult};
pub use error::{HelocError, Result};
pub use heloc::{calculate_heloc, AmortizationResult, LoanInputs, PaymentType};
pub use payment::monthly_payment;
pub use schedule::{build_schedule, Phase, SchedulePayment};

// verifies that results can be shared across threads
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<LoanInputs>();
    is_normal::<AmortizationResult>();
    is_normal::<EquityResult>();
    is_normal::<SimpleLoanResult>();
    is_normal::<ComparisonResult>();
    is_normal::<SchedulePayment>();
    is_normal::<HelocError>();
}
