//! Derived-value calculators.
//!
//! Pure functions, no side effects, deterministic given their inputs and a
//! caller-supplied reference date. Everything the console shows as a status
//! label, remaining count, or due amount comes from here; the stored copies
//! of these fields are written from these functions and never computed ad
//! hoc at render time.

use crate::entities::enums::{MembershipStatus, PaymentStatus};
use crate::errors::{Error, Result};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

/// Days from `today` until `end_date`. Negative values mean days overdue,
/// zero means the membership expires today.
#[must_use]
pub fn remaining_days(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

/// Effective membership status for display. Cancellation is explicit and
/// wins over everything; expiry is time-driven and derived, never stored.
#[must_use]
pub fn membership_status(
    end_date: NaiveDate,
    today: NaiveDate,
    explicitly_cancelled: bool,
) -> MembershipStatus {
    if explicitly_cancelled {
        MembershipStatus::Cancelled
    } else if today > end_date {
        MembershipStatus::Expired
    } else {
        MembershipStatus::Active
    }
}

/// Outstanding amount, clamped at zero so overpayment never shows a
/// negative balance.
#[must_use]
pub fn due_amount(total: Decimal, paid: Decimal) -> Decimal {
    (total - paid).max(Decimal::ZERO)
}

/// Settlement state from paid versus total. `Paid` holds exactly when
/// nothing is due.
#[must_use]
pub fn payment_status(total: Decimal, paid: Decimal) -> PaymentStatus {
    if paid >= total {
        PaymentStatus::Paid
    } else if paid > Decimal::ZERO {
        PaymentStatus::Partial
    } else {
        PaymentStatus::Unpaid
    }
}

/// Sessions left on a personal training engagement, floored at zero.
#[must_use]
pub fn sessions_remaining(sessions_total: i32, sessions_completed: i32) -> i32 {
    (sessions_total - sessions_completed).max(0)
}

/// Hours between check-in and check-out. Fails when the range is inverted;
/// an equal pair is a valid zero-hour day.
pub fn working_hours(check_in: NaiveTime, check_out: NaiveTime) -> Result<f64> {
    if check_out < check_in {
        return Err(Error::InvalidTimeRange {
            check_in,
            check_out,
        });
    }

    let minutes = (check_out - check_in).num_minutes();
    #[allow(clippy::cast_precision_loss)]
    Ok(minutes as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_remaining_days_signs() {
        let today = date(2024, 6, 15);
        assert_eq!(remaining_days(date(2024, 6, 25), today), 10);
        assert_eq!(remaining_days(today, today), 0);
        // Negative means days overdue
        assert_eq!(remaining_days(date(2024, 6, 10), today), -5);
    }

    #[test]
    fn test_membership_status_expiry_is_strictly_after_end_date() {
        let end = date(2024, 6, 15);
        assert_eq!(
            membership_status(end, date(2024, 6, 14), false),
            MembershipStatus::Active
        );
        // Expires today means still active today
        assert_eq!(
            membership_status(end, end, false),
            MembershipStatus::Active
        );
        assert_eq!(
            membership_status(end, date(2024, 6, 16), false),
            MembershipStatus::Expired
        );
    }

    #[test]
    fn test_membership_status_cancellation_wins_over_dates() {
        let end = date(2024, 6, 15);
        for today in [date(2024, 6, 1), end, date(2024, 7, 1)] {
            assert_eq!(
                membership_status(end, today, true),
                MembershipStatus::Cancelled
            );
        }
    }

    #[test]
    fn test_due_amount_never_negative() {
        let grid = [0i64, 1, 40, 60, 100, 250, 10_000];
        for total in grid {
            for paid in grid {
                let due = due_amount(Decimal::from(total), Decimal::from(paid));
                assert!(due >= Decimal::ZERO);
                assert_eq!(
                    due,
                    Decimal::from((total - paid).max(0)),
                    "total={total} paid={paid}"
                );
            }
        }
    }

    #[test]
    fn test_payment_status_partition() {
        // Exactly one status holds, and Paid holds iff nothing is due
        let grid = [0i64, 1, 40, 60, 100, 250];
        for total in grid {
            for paid in grid {
                let total = Decimal::from(total);
                let paid = Decimal::from(paid);
                let status = payment_status(total, paid);
                let due = due_amount(total, paid);

                match status {
                    PaymentStatus::Paid => assert_eq!(due, Decimal::ZERO),
                    PaymentStatus::Partial => {
                        assert!(paid > Decimal::ZERO && paid < total);
                        assert!(due > Decimal::ZERO);
                    }
                    PaymentStatus::Unpaid => {
                        assert_eq!(paid, Decimal::ZERO);
                        assert!(due > Decimal::ZERO);
                    }
                }
            }
        }
    }

    #[test]
    fn test_payment_status_fixed_point_exactness() {
        // 0.10 + 0.20 style drift must not flip a status
        let total: Decimal = "0.30".parse().unwrap();
        let paid: Decimal = "0.10".parse().unwrap();
        let paid = paid + "0.20".parse::<Decimal>().unwrap();
        assert_eq!(payment_status(total, paid), PaymentStatus::Paid);
        assert_eq!(due_amount(total, paid), Decimal::ZERO);
    }

    #[test]
    fn test_sessions_remaining_floor_and_sum() {
        for total in 0..=12 {
            for completed in 0..=15 {
                let remaining = sessions_remaining(total, completed);
                assert!(remaining >= 0);
                if completed <= total {
                    assert_eq!(remaining + completed.min(total), total);
                }
            }
        }
    }

    #[test]
    fn test_working_hours_normal_day() {
        let hours = working_hours(time(9, 0), time(17, 30)).unwrap();
        assert_eq!(hours, 8.5);
    }

    #[test]
    fn test_working_hours_zero_length_day() {
        let hours = working_hours(time(9, 0), time(9, 0)).unwrap();
        assert_eq!(hours, 0.0);
    }

    #[test]
    fn test_working_hours_inverted_range_rejected() {
        let err = working_hours(time(17, 0), time(9, 0)).unwrap_err();
        match err {
            Error::InvalidTimeRange {
                check_in,
                check_out,
            } => {
                assert_eq!(check_in, time(17, 0));
                assert_eq!(check_out, time(9, 0));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_working_hours_non_negative_for_valid_ranges() {
        for start in 0..24 {
            for end in start..24 {
                let hours = working_hours(time(start, 0), time(end, 0)).unwrap();
                assert!(hours >= 0.0);
            }
        }
    }
}
