//! Display formatting for calculator results.
//!
//! Currency is shown in whole dollars and percentages with two decimals, which is
//! all the precision a borrower-facing report needs. The calculators themselves
//! never round.

use crate::compare::ComparisonResult;
use crate::cost::SimpleLoanResult;
use crate::equity::EquityResult;
use crate::heloc::AmortizationResult;
use std::fmt;

/// Whole-dollar amount with thousands separators, i.e. `$1,234` or `-$56`.
pub fn format_currency(amount: f64) -> String {
    let rounded = amount.round();
    if !rounded.is_finite() {
        return format!("${}", rounded);
    }

    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if rounded < 0. { "-" } else { "" };
    format!("{}${}", sign, grouped)
}

pub fn format_percent(value: f64) -> String {
    format!("{:.2}%", value)
}

impl fmt::Display for AmortizationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inp = &self.inputs;
        writeln!(f, "Your HELOC Payment Breakdown")?;
        writeln!(
            f,
            "  Draw period payment:      {}/month for {} years ({})",
            format_currency(self.draw_period_payment),
            inp.draw_period_years,
            inp.payment_type
        )?;
        writeln!(
            f,
            "  Repayment period payment: {}/month for {} years (Principal + Interest)",
            format_currency(self.repayment_payment),
            inp.repayment_period_years
        )?;
        writeln!(f)?;
        writeln!(f, "Loan Details")?;
        writeln!(f, "  Home value:                 {}", format_currency(inp.home_value))?;
        writeln!(f, "  Current mortgage:           {}", format_currency(inp.mortgage_balance))?;
        writeln!(
            f,
            "  Available equity:           {} ({})",
            format_currency(self.equity),
            format_percent(self.equity_percent)
        )?;
        writeln!(f, "  HELOC credit limit:         {}", format_currency(inp.credit_limit))?;
        writeln!(f, "  Amount drawing:             {}", format_currency(inp.draw_amount))?;
        writeln!(
            f,
            "  Remaining available credit: {}",
            format_currency(self.remaining_available_credit)
        )?;
        writeln!(
            f,
            "  Combined LTV ratio:         {}",
            format_percent(self.combined_ltv_percent)
        )?;
        writeln!(f)?;
        writeln!(f, "Cost Analysis")?;
        writeln!(f, "  Interest rate:                 {}", format_percent(inp.annual_rate))?;
        writeln!(
            f,
            "  Total paid (draw period):      {}",
            format_currency(self.draw_period_total_paid)
        )?;
        writeln!(
            f,
            "  Total paid (repayment period): {}",
            format_currency(self.repayment_period_total_paid)
        )?;
        writeln!(f, "  Total amount paid:             {}", format_currency(self.total_paid))?;
        writeln!(f, "  Total interest paid:           {}", format_currency(self.total_interest))?;
        writeln!(f, "  Loan term:                     {} years", self.total_term_years)?;
        writeln!(f)?;
        writeln!(f, "Payment Timeline")?;
        writeln!(
            f,
            "  Years 1-{}: Draw Period - {}/month",
            inp.draw_period_years,
            format_currency(self.draw_period_payment)
        )?;
        write!(
            f,
            "  Years {}-{}: Repayment Period - {}/month",
            inp.draw_period_years.saturating_add(1),
            self.total_term_years,
            format_currency(self.repayment_payment)
        )?;
        if self.additional_borrowing_capacity > 0. {
            write!(
                f,
                "\n\nAdditional Borrowing Capacity: {}",
                format_currency(self.additional_borrowing_capacity)
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for EquityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available to Borrow: {}", format_currency(self.available_to_borrow))?;
        writeln!(f, "Current Equity: {}", format_currency(self.current_equity))?;
        writeln!(f, "Current LTV: {}", format_percent(self.current_ltv_percent))?;
        write!(f, "Max LTV: {}", format_percent(self.max_ltv_percent))
    }
}

impl fmt::Display for SimpleLoanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Payment: {}", format_currency(self.monthly_payment))?;
        writeln!(f, "Total Interest: {}", format_currency(self.total_interest))?;
        writeln!(f, "Total Paid: {}", format_currency(self.total_paid))?;
        write!(
            f,
            "Interest as % of Loan: {}",
            format_percent(self.interest_percent_of_principal)
        )
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HELOC:")?;
        writeln!(
            f,
            "  Draw Period: {}/mo",
            format_currency(self.heloc.interest_only_payment)
        )?;
        writeln!(f, "  Repayment: {}/mo", format_currency(self.heloc.repayment_payment))?;
        writeln!(f, "  Total Interest: {}", format_currency(self.heloc.total_interest))?;
        writeln!(f, "Home Equity Loan:")?;
        writeln!(f, "  Monthly Payment: {}", format_currency(self.loan.monthly_payment))?;
        writeln!(f, "  Total Interest: {}", format_currency(self.loan.total_interest))?;
        writeln!(f, "Best Option: {}", self.winner)?;
        write!(f, "Savings: {}", format_currency(self.savings))
    }
}
