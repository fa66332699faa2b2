use super::*;

fn ym(year: i32, month: u32) -> YearMonth {
    YearMonth { year, month }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// =============================================================
// Month arithmetic
// =============================================================

#[test]
fn days_in_month_handles_leap_years() {
    assert_eq!(days_in_month(ym(2024, 2)), 29);
    assert_eq!(days_in_month(ym(2023, 2)), 28);
    assert_eq!(days_in_month(ym(2100, 2)), 28);
    assert_eq!(days_in_month(ym(2000, 2)), 29);
    assert_eq!(days_in_month(ym(2030, 4)), 30);
    assert_eq!(days_in_month(ym(2030, 12)), 31);
    assert_eq!(days_in_month(ym(2030, 13)), 0);
}

#[test]
fn next_and_previous_wrap_years() {
    assert_eq!(ym(2030, 12).next(), ym(2031, 1));
    assert_eq!(ym(2030, 1).previous(), ym(2029, 12));
    assert_eq!(ym(2030, 6).next().previous(), ym(2030, 6));
}

#[test]
fn label_names_month_and_year() {
    assert_eq!(ym(2030, 3).label(), "March 2030");
    assert_eq!(ym(2030, 12).label(), "December 2030");
}

// =============================================================
// Grid shape
// =============================================================

#[test]
fn leading_blanks_match_first_weekday() {
    // 2026-02-01 is a Sunday, 2026-10-01 a Thursday.
    assert_eq!(leading_blanks(ym(2026, 2)), 0);
    assert_eq!(leading_blanks(ym(2026, 10)), 4);
    // 2030-06-01 is a Saturday.
    assert_eq!(leading_blanks(ym(2030, 6)), 6);
}

#[test]
fn grid_has_blanks_plus_days_for_every_month() {
    let today = date(2000, 1, 1);
    for year in [1999, 2000, 2024, 2026, 2100] {
        for month in 1..=12 {
            let m = ym(year, month);
            let first = m.first_day().unwrap();
            let grid = month_grid(m, today);
            let blanks = grid.iter().take_while(|c| matches!(c, CalendarCell::Blank)).count();
            assert_eq!(blanks as u32, first.weekday().num_days_from_sunday(), "{year}-{month}");
            assert_eq!(grid.len() as u32, blanks as u32 + days_in_month(m), "{year}-{month}");
            assert!(grid[blanks..].iter().all(|c| matches!(c, CalendarCell::Day { .. })));
        }
    }
}

#[test]
fn grid_days_are_consecutive_from_the_first() {
    let grid = month_grid(ym(2030, 3), date(2000, 1, 1));
    let days: Vec<u32> = grid
        .iter()
        .filter_map(|c| match c {
            CalendarCell::Day { date, .. } => Some(date.day()),
            CalendarCell::Blank => None,
        })
        .collect();
    assert_eq!(days, (1..=31).collect::<Vec<_>>());
}

// =============================================================
// Past-date disabling
// =============================================================

#[test]
fn past_dates_disabled_today_and_future_enabled() {
    let today = date(2030, 3, 15);
    for cell in month_grid(ym(2030, 3), today) {
        if let CalendarCell::Day { date, disabled, is_today } = cell {
            assert_eq!(disabled, date < today, "{date}");
            assert_eq!(is_today, date == today);
        }
    }
}

#[test]
fn whole_past_month_is_disabled() {
    let today = date(2030, 3, 15);
    assert!(month_grid(ym(2030, 2), today).iter().all(|c| match c {
        CalendarCell::Day { disabled, .. } => *disabled,
        CalendarCell::Blank => true,
    }));
}

#[test]
fn is_past_is_strict() {
    let today = date(2030, 3, 15);
    assert!(is_past(date(2030, 3, 14), today));
    assert!(!is_past(today, today));
    assert!(!is_past(date(2030, 3, 16), today));
}

#[test]
fn previous_navigation_stops_at_current_month() {
    let today = date(2030, 3, 15);
    assert!(!can_show_previous(ym(2030, 3), today));
    assert!(can_show_previous(ym(2030, 4), today));
    assert!(can_show_previous(ym(2031, 1), today));
}

// =============================================================
// Formatting
// =============================================================

#[test]
fn iso_and_display_formats() {
    let d = date(2030, 3, 7);
    assert_eq!(iso_date(d), "2030-03-07");
    assert_eq!(display_date(d), "Thursday, March 7, 2030");
}
