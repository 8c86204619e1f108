//! Age calculator: calendar-aware date arithmetic.

use chrono::{DateTime, Datelike, NaiveDate};

use crate::shared::error::{AppError, AppResult};
use crate::shared::types::AgeCalcResponse;

/// Parse a wire date string. Accepts plain `YYYY-MM-DD` as well as a full
/// RFC 3339 timestamp, which is what date inputs in browsers produce.
pub fn parse_date(value: &str) -> AppResult<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.date_naive());
    }
    Err(AppError::Validation(format!("'{}' is not a valid date", value)))
}

fn days_in_month(year: i32, month: u32) -> Option<i64> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((next - first).num_days())
}

// The birthday carried into a target year. A Feb 29 birth date resolves
// to Mar 1 in non-leap years: the overflowing day rolls into the next
// month.
fn birthday_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Compute the calendar difference between a birth date and a reference
/// date, plus absolute spans and the next-birthday countdown.
///
/// On the birthday itself `days_until_birthday` is 0: the candidate date
/// only rolls forward a year when it is strictly before the reference.
pub fn calculate_age(birth: NaiveDate, reference: NaiveDate) -> AppResult<AgeCalcResponse> {
    if birth > reference {
        return Err(AppError::DateOrder(
            "Birth date cannot be in the future of calculation date".to_string(),
        ));
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    if days < 0 {
        months -= 1;
        let (prev_year, prev_month) = if reference.month() == 1 {
            (reference.year() - 1, 12)
        } else {
            (reference.year(), reference.month() - 1)
        };
        let borrowed = days_in_month(prev_year, prev_month)
            .ok_or_else(|| AppError::Internal("month arithmetic out of range".to_string()))?;
        days += borrowed as i32;
    }
    if months < 0 {
        years -= 1;
        months += 12;
    }

    let total_days = (reference - birth).num_days().abs();
    let total_weeks = total_days / 7;

    let mut next_birthday = birthday_in_year(birth, reference.year())
        .ok_or_else(|| AppError::Internal("birthday arithmetic out of range".to_string()))?;
    if next_birthday < reference {
        next_birthday = birthday_in_year(birth, reference.year() + 1)
            .ok_or_else(|| AppError::Internal("birthday arithmetic out of range".to_string()))?;
    }
    let days_until_birthday = (next_birthday - reference).num_days();

    Ok(AgeCalcResponse {
        years,
        months,
        days,
        total_days,
        total_weeks,
        days_until_birthday,
        next_birthday,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn same_date_yields_all_zeros() {
        let today = date(2024, 6, 15);
        let age = calculate_age(today, today).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 0));
        assert_eq!(age.total_days, 0);
        assert_eq!(age.total_weeks, 0);
        assert_eq!(age.days_until_birthday, 0);
        assert_eq!(age.next_birthday, today);
    }

    #[test]
    fn millennium_birth_to_mid_2024() {
        let age = calculate_age(date(2000, 1, 1), date(2024, 6, 15)).unwrap();
        assert_eq!((age.years, age.months, age.days), (24, 5, 14));
        assert_eq!(age.total_weeks, age.total_days / 7);
        assert_eq!(age.next_birthday, date(2025, 1, 1));
        assert_eq!(age.days_until_birthday, 200);
    }

    #[test]
    fn birth_after_reference_is_rejected() {
        let result = calculate_age(date(2030, 1, 1), date(2024, 6, 15));
        assert!(matches!(result, Err(AppError::DateOrder(_))));
    }

    #[test]
    fn day_borrow_uses_the_preceding_month_length() {
        // Feb 2024 has 29 days: 10 - 15 borrows through it.
        let age = calculate_age(date(2024, 1, 15), date(2024, 3, 10)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 1, 24));
    }

    #[test]
    fn borrow_across_a_year_boundary() {
        let age = calculate_age(date(2023, 12, 20), date(2024, 1, 10)).unwrap();
        assert_eq!((age.years, age.months, age.days), (0, 0, 21));
    }

    #[test]
    fn birthday_today_counts_as_day_zero() {
        let age = calculate_age(date(1990, 6, 15), date(2024, 6, 15)).unwrap();
        assert_eq!(age.years, 34);
        assert_eq!(age.days_until_birthday, 0);
    }

    #[test]
    fn birthday_tomorrow() {
        let age = calculate_age(date(1990, 6, 16), date(2024, 6, 15)).unwrap();
        assert_eq!(age.days_until_birthday, 1);
        assert_eq!(age.next_birthday, date(2024, 6, 16));
    }

    #[test]
    fn leap_day_birthday_resolves_to_march_first() {
        let age = calculate_age(date(2000, 2, 29), date(2023, 2, 28)).unwrap();
        assert_eq!(age.next_birthday, date(2023, 3, 1));
        assert_eq!(age.days_until_birthday, 1);
    }

    #[test]
    fn total_days_counts_the_whole_span() {
        let age = calculate_age(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(age.total_days, 365); // 2024 is a leap year
        assert_eq!(age.total_weeks, 52);
    }

    #[test]
    fn parse_date_accepts_both_wire_formats() {
        assert_eq!(parse_date("2000-01-01").unwrap(), date(2000, 1, 1));
        assert_eq!(
            parse_date("2000-01-01T12:30:00Z").unwrap(),
            date(2000, 1, 1)
        );
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("2000-13-01").is_err());
    }
}
