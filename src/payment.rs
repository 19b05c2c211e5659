use log::trace;

pub const MONTHS_PER_YEAR: f64 = 12.;

/// Rounds `amt` to `dec` decimal places.
pub fn round(amt: f64, dec: f64) -> f64 {
    if amt == 0. {
        0.
    } else {
        (amt * 10_f64.powf(dec)).round() / 10_f64.powf(dec)
    }
}

/// Converts an annual percentage rate (i.e., 7.0 for 7%) to a monthly decimal rate.
pub fn monthly_rate(annual_rate_percent: f64) -> f64 {
    annual_rate_percent / 100. / MONTHS_PER_YEAR
}

/// Level payment that retires `principal` over `months` payments at `monthly_rate`.
///
/// A zero rate falls back to straight-line repayment. `months` must be positive,
/// otherwise the result is infinite or NaN; every calculator checks this before calling.
pub fn monthly_payment(principal: f64, monthly_rate: f64, months: f64) -> f64 {
    if monthly_rate == 0. {
        return principal / months;
    }

    let factor = (1. + monthly_rate).powf(months);
    let pmt = principal * monthly_rate * factor / (factor - 1.);
    trace!(
        "principal {}, monthly rate {}, months {}, payment {}",
        principal,
        monthly_rate,
        months,
        pmt
    );
    pmt
}

#[cfg(test)]
mod tests {
    use super::{monthly_payment, monthly_rate, round};
    use approx::assert_abs_diff_eq;
    use test_log::test;

    #[test]
    fn test_zero_rate_is_straight_line() {
        for months in [1., 12., 60., 120., 360.] {
            assert_eq!(monthly_payment(90000., 0., months), 90000. / months);
        }
        assert_eq!(monthly_payment(1000., 0., 3.), 1000. / 3.);
    }

    #[test]
    fn test_payment_amortizes_to_zero() {
        for (principal, annual, months) in [
            (200000., 7., 180.),
            (80000., 7., 120.),
            (50000., 8., 60.),
            (1000., 0.5, 1.),
            (350000., 12.25, 360.),
        ] {
            let rate = monthly_rate(annual);
            let pmt = monthly_payment(principal, rate, months);
            let mut balance = principal;
            for _ in 0..months as u32 {
                balance -= pmt - balance * rate;
            }
            assert_abs_diff_eq!(balance, 0., epsilon = 1e-6);
        }
    }

    #[test]
    fn test_known_payments() {
        // 15 year, 7%, monthly compounding
        assert_eq!(round(monthly_payment(200000., monthly_rate(7.), 180.), 2.), 1797.66);
        assert_eq!(round(monthly_payment(50000., monthly_rate(7.), 60.), 2.), 990.06);
        assert_eq!(round(monthly_payment(80000., monthly_rate(7.), 180.), 2.), 719.06);
    }

    #[test]
    fn test_zero_months_is_not_finite() {
        assert!(!monthly_payment(1000., 0.01, 0.).is_finite());
        assert!(!monthly_payment(1000., 0., 0.).is_finite());
    }

    #[test]
    fn test_monthly_rate() {
        assert_abs_diff_eq!(monthly_rate(12.), 0.01, epsilon = 1e-15);
        assert_eq!(monthly_rate(0.), 0.);
    }

    #[test]
    fn test_round() {
        assert_eq!(round(466.666666, 2.), 466.67);
        assert_eq!(round(0., 4.), 0.);
        assert_eq!(round(1799.869123, 4.), 1799.8691);
    }
}
