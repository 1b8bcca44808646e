//! Stateless month-grid arithmetic.
//!
//! Everything in here is a pure function of its arguments; the wall clock
//! never enters this module. Weekdays are numbered 0..=6 with 0 = Monday,
//! matching `Weekday::num_days_from_monday`.

use chrono::{Datelike, Duration, Month, NaiveDate};
use num_traits::FromPrimitive;

use crate::error::{Error, ErrorKind, Result};

/// A single cell of the 7-column month grid.
///
/// `Empty` cells pad the first row so that day 1 lands in its weekday
/// column. There is no trailing padding, the last row may be short.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayCell {
    Empty,
    Day(NaiveDate),
}

impl DayCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            DayCell::Empty => None,
            DayCell::Day(date) => Some(*date),
        }
    }

    pub fn day_num(&self) -> Option<u32> {
        self.date().map(|date| date.day())
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            &format!("no such month: year {}, month {}", year, month),
        )
    })
}

/// True length of a month in days (28..=31, leap-aware).
pub fn days_of_month(year: i32, month: u32) -> Result<u32> {
    let first = first_of_month(year, month)?;
    let next = if month == 12 {
        first_of_month(year + 1, 1)
    } else {
        first_of_month(year, month + 1)
    }?;

    Ok(next.signed_duration_since(first).num_days() as u32)
}

/// Builds the padded day grid for one month.
///
/// The result starts with 0..=6 `Empty` cells so that day 1 falls into the
/// column of its weekday when `first_weekday` is the leftmost column, then
/// holds one `Day` cell per day of the month, ascending from 1.
pub fn month_grid(year: i32, month: u32, first_weekday: u32) -> Result<Vec<DayCell>> {
    if first_weekday > 6 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            &format!("first weekday must be in 0..=6, got {}", first_weekday),
        ));
    }

    let first = first_of_month(year, month)?;
    let num_days = days_of_month(year, month)?;

    let padding = (first.weekday().num_days_from_monday() as i32 - first_weekday as i32)
        .rem_euclid(7) as usize;

    let cells = std::iter::repeat(DayCell::Empty)
        .take(padding)
        .chain((0..num_days).map(|offset| DayCell::Day(first + Duration::days(i64::from(offset)))))
        .collect();

    Ok(cells)
}

/// Rotates the 7 weekday labels left so that `labels[start_index mod 7]`
/// comes first. Negative indices count from the right.
///
/// An empty slice is passed through as an empty result; any other length
/// than 7 is rejected.
pub fn rotate_weekday_labels(labels: &[String], start_index: i32) -> Result<Vec<String>> {
    if labels.is_empty() {
        return Ok(Vec::new());
    }

    if labels.len() != 7 {
        return Err(Error::new(
            ErrorKind::InvalidInput,
            &format!("expected 7 weekday labels, got {}", labels.len()),
        ));
    }

    let split = start_index.rem_euclid(7) as usize;
    let mut rotated = Vec::with_capacity(labels.len());
    rotated.extend_from_slice(&labels[split..]);
    rotated.extend_from_slice(&labels[..split]);

    Ok(rotated)
}

/// Civil-date equality, ignoring any time-of-day the arguments carry.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    a.year() == b.year() && a.month() == b.month() && a.day() == b.day()
}

pub fn month_display_name(month: u32) -> Result<&'static str> {
    Month::from_u32(month).map(|m| m.name()).ok_or_else(|| {
        Error::new(
            ErrorKind::InvalidInput,
            &format!("month must be in 1..=12, got {}", month),
        )
    })
}

/// Formats the calendar year. The field is taken as-is rather than going
/// through a strftime pattern, so a week-based-year placeholder can never
/// sneak in and misrender the days around January 1st.
pub fn year_display_name(year: i32) -> String {
    format!("{:04}", year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn labels() -> Vec<String> {
        ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    fn filled_count(cells: &[DayCell]) -> usize {
        cells
            .iter()
            .filter(|cell| matches!(cell, DayCell::Day(_)))
            .count()
    }

    #[test]
    fn january_2025_monday_first() {
        // January 1st 2025 is a Wednesday, so a Monday-first grid needs
        // two leading padding cells.
        let cells = month_grid(2025, 1, 0).unwrap();

        assert_eq!(cells.len(), 33);
        assert_eq!(&cells[..2], &[DayCell::Empty, DayCell::Empty]);
        assert_eq!(
            cells[2],
            DayCell::Day(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert_eq!(cells[32].day_num(), Some(31));
    }

    #[test]
    fn first_weekday_shifts_padding() {
        // Wednesday-first puts January 1st 2025 in the first column.
        let cells = month_grid(2025, 1, 2).unwrap();
        assert_eq!(cells[0].day_num(), Some(1));

        // Sunday-first needs three padding cells.
        let cells = month_grid(2025, 1, 6).unwrap();
        assert_eq!(&cells[..3], &[DayCell::Empty; 3]);
        assert_eq!(cells[3].day_num(), Some(1));
    }

    #[test]
    fn length_is_padding_plus_days() {
        for month in 1..=12 {
            for &first_weekday in &[0u32, 3, 6] {
                let cells = month_grid(2025, month, first_weekday).unwrap();
                let padding = cells
                    .iter()
                    .take_while(|cell| **cell == DayCell::Empty)
                    .count();
                let days = days_of_month(2025, month).unwrap();

                assert!(padding <= 6);
                assert_eq!(cells.len(), padding + days as usize);

                let nums: Vec<u32> = cells[padding..]
                    .iter()
                    .map(|cell| cell.day_num().unwrap())
                    .collect();
                assert_eq!(nums, (1..=days).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn february_is_leap_aware() {
        assert_eq!(filled_count(&month_grid(2024, 2, 0).unwrap()), 29);
        assert_eq!(filled_count(&month_grid(2023, 2, 0).unwrap()), 28);
        assert_eq!(days_of_month(2000, 2).unwrap(), 29);
        assert_eq!(days_of_month(1900, 2).unwrap(), 28);
    }

    #[test]
    fn far_years_are_fine() {
        assert_eq!(filled_count(&month_grid(1582, 10, 0).unwrap()), 31);
        assert!(month_grid(-44, 3, 0).is_ok());
        assert!(month_grid(9999, 12, 6).is_ok());
    }

    #[test]
    fn out_of_range_inputs_are_rejected() {
        for result in vec![
            month_grid(2025, 0, 0),
            month_grid(2025, 13, 0),
            month_grid(2025, 1, 7),
        ] {
            let err = result.unwrap_err();
            assert!(matches!(err.kind, ErrorKind::InvalidInput));
        }
    }

    #[test]
    fn rotation_identities() {
        let labels = labels();
        assert_eq!(rotate_weekday_labels(&labels, 0).unwrap(), labels);
        assert_eq!(rotate_weekday_labels(&labels, 7).unwrap(), labels);
        assert_eq!(rotate_weekday_labels(&labels, -14).unwrap(), labels);
    }

    #[test]
    fn rotation_is_cyclic() {
        let labels = labels();

        let rotated = rotate_weekday_labels(&labels, 2).unwrap();
        assert_eq!(rotated[0], "Wed");
        assert_eq!(rotated[5], "Mon");
        assert_eq!(rotated[6], "Tue");

        // A negative index counts from the right.
        assert_eq!(
            rotate_weekday_labels(&labels, -1).unwrap(),
            rotate_weekday_labels(&labels, 6).unwrap()
        );

        // Same elements, relative order preserved across the wrap.
        let mut sorted = rotated.clone();
        sorted.sort();
        let mut expected = labels.clone();
        expected.sort();
        assert_eq!(sorted, expected);
    }

    #[test]
    fn rotation_length_contract() {
        assert_eq!(rotate_weekday_labels(&[], 3).unwrap(), Vec::<String>::new());

        let short: Vec<String> = labels().into_iter().take(5).collect();
        let err = rotate_weekday_labels(&short, 1).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::InvalidInput));
    }

    #[test]
    fn same_day_ignores_time_of_day() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        let morning = date.and_hms_opt(0, 0, 0).unwrap();
        let night = date.and_hms_opt(23, 59, 59).unwrap();

        assert!(is_same_day(&date, &date));
        assert!(is_same_day(&morning, &night));
        assert!(is_same_day(&night, &morning));
        assert!(!is_same_day(&date, &date.succ_opt().unwrap()));
    }

    #[test]
    fn display_names() {
        assert_eq!(month_display_name(1).unwrap(), "January");
        assert_eq!(month_display_name(12).unwrap(), "December");
        assert!(month_display_name(13).is_err());

        assert_eq!(year_display_name(2025), "2025");
        assert_eq!(year_display_name(33), "0033");

        // December 29th 2025 belongs to ISO week-year 2026; the calendar
        // year must still render as 2025.
        let date = NaiveDate::from_ymd_opt(2025, 12, 29).unwrap();
        assert_eq!(year_display_name(date.year()), "2025");
    }
}
