use crate::error::{HelocError, Result};
use crate::heloc::{draw_period_payment, LoanInputs, PaymentType};
use crate::payment::{monthly_payment, monthly_rate};
use chrono::{Months, NaiveDate};
use log::trace;
use std::fmt;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Draw,
    Repayment,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Draw => write!(f, "draw"),
            Phase::Repayment => write!(f, "repayment"),
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulePayment {
    pub pmt_number: u32,
    pub pmt_date: NaiveDate,
    pub phase: Phase,
    pub pmt_amount: f64,
    pub pmt_interest_paid: f64,
    pub pmt_principal_paid: f64,
    pub pmt_end_balance: f64,
}

impl fmt::Display for SchedulePayment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pmt number {}, date {}, {}, payment ${:.2}, interest paid ${:.2}, principal paid ${:.2}, ending balance ${:.2}",
            self.pmt_number,
            self.pmt_date,
            self.phase,
            self.pmt_amount,
            self.pmt_interest_paid,
            self.pmt_principal_paid,
            self.pmt_end_balance
        )
    }
}

struct PhasePlan {
    phase: Phase,
    months: u32,
    pmt_amount: f64,
    amortizing: bool, // final payment of the phase clears the balance
}

/// Month-by-month payments for a HELOC, draw period first, then repayment.
///
/// Unlike [`crate::heloc::calculate_heloc`], which estimates the balance entering
/// repayment, this follows the actual running balance. The schedule ends early once
/// the balance is paid off.
pub fn build_schedule(
    inputs: &LoanInputs,
    first_pmt_date: NaiveDate,
) -> Result<Vec<SchedulePayment>> {
    inputs.validate()?;

    let rate = monthly_rate(inputs.annual_rate);
    let mut sched_pmt: Vec<SchedulePayment> = Vec::new();
    let mut balance = inputs.draw_amount;
    let mut pmt_number = 0;

    let draw = PhasePlan {
        phase: Phase::Draw,
        months: months_in(inputs.draw_period_years)?,
        pmt_amount: draw_period_payment(inputs, rate),
        amortizing: inputs.payment_type == PaymentType::PrincipalAndInterest,
    };
    add_phase_pmts(&draw, rate, first_pmt_date, &mut balance, &mut pmt_number, &mut sched_pmt)?;

    if balance > 0. {
        let repayment = PhasePlan {
            phase: Phase::Repayment,
            months: months_in(inputs.repayment_period_years)?,
            pmt_amount: monthly_payment(balance, rate, inputs.repayment_months()),
            amortizing: true,
        };
        add_phase_pmts(
            &repayment,
            rate,
            first_pmt_date,
            &mut balance,
            &mut pmt_number,
            &mut sched_pmt,
        )?;
    }

    Ok(sched_pmt)
}

fn months_in(years: u32) -> Result<u32> {
    years.checked_mul(12).ok_or_else(|| {
        HelocError::invalid(
            "first_pmt_date",
            "Payment dates run past the supported calendar range.",
        )
    })
}

fn add_phase_pmts(
    plan: &PhasePlan,
    rate: f64,
    first_pmt_date: NaiveDate,
    balance: &mut f64,
    pmt_number: &mut u32,
    sched_pmt: &mut Vec<SchedulePayment>,
) -> Result<()> {
    for month in 1..=plan.months {
        if *balance <= 0. {
            break;
        }

        let interest = *balance * rate;
        let pays_off =
            plan.pmt_amount >= *balance + interest || (plan.amortizing && month == plan.months);
        let (pmt_amt, principal) = if pays_off {
            (*balance + interest, *balance)
        } else {
            (plan.pmt_amount, plan.pmt_amount - interest)
        };
        *balance = if pays_off { 0. } else { *balance - principal };

        // count from the first date so end-of-month dates don't drift
        let pmt_date = first_pmt_date
            .checked_add_months(Months::new(*pmt_number))
            .ok_or_else(|| {
                HelocError::invalid(
                    "first_pmt_date",
                    "Payment dates run past the supported calendar range.",
                )
            })?;
        *pmt_number += 1;

        trace!(
            "pmt # {}, {}, date {}, interest {}, end bal {}",
            pmt_number,
            plan.phase,
            pmt_date,
            interest,
            balance
        );

        sched_pmt.push(SchedulePayment {
            pmt_number: *pmt_number,
            pmt_date,
            phase: plan.phase,
            pmt_amount: pmt_amt,
            pmt_interest_paid: interest,
            pmt_principal_paid: principal,
            pmt_end_balance: *balance,
        });
    }
    Ok(())
}
