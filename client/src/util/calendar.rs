//! Month-grid math for the booking calendar.
//!
//! Weeks start on Sunday. A grid is the run of blank cells before the first
//! of the month followed by one cell per day; rows are left to CSS.

#[cfg(test)]
#[path = "calendar_test.rs"]
mod calendar_test;

use chrono::{Datelike, Local, NaiveDate};

/// Column headers, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar month (`month` is 1-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self { year: date.year(), month: date.month() }
    }

    pub fn first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn next(self) -> Self {
        if self.month == 12 {
            Self { year: self.year + 1, month: 1 }
        } else {
            Self { year: self.year, month: self.month + 1 }
        }
    }

    pub fn previous(self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// Heading text such as `"March 2030"`.
    pub fn label(self) -> String {
        let name = usize::try_from(self.month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| MONTH_NAMES.get(i))
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

/// One cell of the month grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day { date: NaiveDate, disabled: bool, is_today: bool },
}

/// The local calendar date right now.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Days in `month`, or 0 for an invalid month.
pub fn days_in_month(month: YearMonth) -> u32 {
    let (Some(first), Some(next_first)) = (month.first_day(), month.next().first_day()) else {
        return 0;
    };
    u32::try_from(next_first.signed_duration_since(first).num_days()).unwrap_or(0)
}

/// Weekday index of the 1st (Sunday = 0).
pub fn leading_blanks(month: YearMonth) -> u32 {
    month
        .first_day()
        .map_or(0, |first| first.weekday().num_days_from_sunday())
}

/// Dates strictly before `today` cannot be booked.
pub fn is_past(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

/// Build the grid for `month`, disabling days before `today`.
pub fn month_grid(month: YearMonth, today: NaiveDate) -> Vec<CalendarCell> {
    let blanks = leading_blanks(month);
    let days = days_in_month(month);
    let mut cells = Vec::with_capacity((blanks + days) as usize);
    cells.extend((0..blanks).map(|_| CalendarCell::Blank));
    cells.extend(
        (1..=days)
            .filter_map(|day| NaiveDate::from_ymd_opt(month.year, month.month, day))
            .map(|date| CalendarCell::Day { date, disabled: is_past(date, today), is_today: date == today }),
    );
    cells
}

/// Earlier months than `today`'s hold no bookable days.
pub fn can_show_previous(shown: YearMonth, today: NaiveDate) -> bool {
    shown > YearMonth::of(today)
}

/// `YYYY-MM-DD` wire format.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Long display format, e.g. `"Thursday, March 7, 2030"`.
pub fn display_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}
