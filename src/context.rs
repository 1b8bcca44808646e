//! The single mutable owner of "what is shown and what is selected".

use chrono::{Datelike, Local, Month, NaiveDate};
use num_traits::FromPrimitive;

/// Currently viewed month/year plus the selected date.
///
/// Only the three transition operations mutate this; the viewed month is
/// deliberately independent of the selected date so paging through months
/// leaves the selection where it was.
pub struct Context {
    selected_date: NaiveDate,
    viewed_year: i32,
    viewed_month: Month,
}

impl Context {
    /// Starts out viewing today's month with today selected.
    ///
    /// This and `reset_to_today` are the only places the wall clock is
    /// read; everything else is deterministic.
    pub fn new() -> Self {
        Context::from_date(Local::now().date_naive())
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Context {
            selected_date: date,
            viewed_year: date.year(),
            viewed_month: Month::from_u32(date.month()).unwrap(),
        }
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn viewed_year(&self) -> i32 {
        self.viewed_year
    }

    pub fn viewed_month(&self) -> Month {
        self.viewed_month
    }

    pub fn viewed_month_number(&self) -> u32 {
        self.viewed_month.number_from_month()
    }

    /// Moves the view by `delta` months, rolling the year over as needed.
    ///
    /// Works in flat month-index space, so any delta is exact: applying
    /// +1 twelve times lands on the same month as one application of +12.
    pub fn advance_month(&mut self, delta: i32) {
        let months = i64::from(self.viewed_year) * 12
            + i64::from(self.viewed_month.number_from_month())
            - 1
            + i64::from(delta);

        self.viewed_year = months.div_euclid(12) as i32;
        self.viewed_month = Month::from_i64(months.rem_euclid(12) + 1).unwrap();

        log::debug!("viewing {} {}", self.viewed_month.name(), self.viewed_year);
    }

    /// Sets the selected date unconditionally. The viewed month does not
    /// follow; callers only offer dates from the grid they are showing.
    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Snaps view and selection back to the host clock's current date.
    pub fn reset_to_today(&mut self) {
        let today = Local::now().date_naive();

        self.selected_date = today;
        self.viewed_year = today.year();
        self.viewed_month = Month::from_u32(today.month()).unwrap();
    }
}

impl Default for Context {
    fn default() -> Self {
        Context::new()
    }
}
