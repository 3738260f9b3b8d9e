//! Month grid and per-day event lookups.
//!
//! # Invariants
//! - A month grid always has exactly `GRID_CELLS` cells (six weeks).
//! - Cells are consecutive days starting on the configured week start.

use crate::model::event::CalendarEvent;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub const GRID_CELLS: usize = 42;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    InvalidMonth { year: i32, month: u32 },
}

impl Display for CalendarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMonth { year, month } => write!(f, "invalid month {year}-{month:02}"),
        }
    }
}

impl Error for CalendarError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDay {
    pub date: NaiveDate,
    /// `false` for leading/trailing padding days.
    pub in_month: bool,
}

/// Builds the 42-cell view of `year`/`month`.
///
/// Months whose padding days fall outside the supported date range are
/// reported as `InvalidMonth`.
pub fn month_grid(
    year: i32,
    month: u32,
    week_start: Weekday,
) -> Result<Vec<GridDay>, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let leading = (first.weekday().num_days_from_monday() + 7
        - week_start.num_days_from_monday())
        % 7;
    let invalid = CalendarError::InvalidMonth { year, month };
    let start = first
        .checked_sub_signed(Duration::days(i64::from(leading)))
        .ok_or_else(|| invalid.clone())?;

    (0..GRID_CELLS as i64)
        .map(|offset| -> Result<GridDay, CalendarError> {
            let date = start
                .checked_add_signed(Duration::days(offset))
                .ok_or_else(|| invalid.clone())?;
            Ok(GridDay {
                date,
                in_month: date.year() == year && date.month() == month,
            })
        })
        .collect()
}

/// Days in `year`/`month`.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    let next = first
        .checked_add_months(chrono::Months::new(1))
        .ok_or(CalendarError::InvalidMonth { year, month })?;
    Ok((next - first).num_days() as u32)
}

/// Events on `date`: all-day first, then by start time.
pub fn events_on<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
    date: NaiveDate,
) -> Vec<&'a CalendarEvent> {
    let mut selected = events
        .into_iter()
        .filter(|event| event.date == date)
        .collect::<Vec<_>>();
    selected.sort_by(|a, b| {
        a.start_minutes()
            .cmp(&b.start_minutes())
            .then_with(|| a.title.cmp(&b.title))
    });
    selected
}

/// Distinct dates in `year`/`month` that carry at least one event.
pub fn days_with_events<'a>(
    events: impl IntoIterator<Item = &'a CalendarEvent>,
    year: i32,
    month: u32,
) -> BTreeSet<NaiveDate> {
    events
        .into_iter()
        .map(|event| event.date)
        .filter(|date| date.year() == year && date.month() == month)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{days_in_month, events_on, month_grid, CalendarError, GRID_CELLS};
    use crate::model::event::{CalendarEvent, NewEvent};
    use chrono::{Datelike, NaiveDate, Weekday};

    #[test]
    fn grid_pads_october_2026_from_monday() {
        let grid = month_grid(2026, 10, Weekday::Mon).unwrap();
        assert_eq!(grid.len(), GRID_CELLS);
        // 2026-10-01 is a Thursday: three leading days from September.
        assert_eq!(grid[0].date, NaiveDate::from_ymd_opt(2026, 9, 28).unwrap());
        assert!(!grid[2].in_month);
        assert!(grid[3].in_month);
        assert_eq!(grid.iter().filter(|day| day.in_month).count(), 31);
        assert_eq!(grid[41].date, NaiveDate::from_ymd_opt(2026, 11, 8).unwrap());
    }

    #[test]
    fn grid_starting_on_week_start_has_no_leading_days() {
        // 2026-02-01 is a Sunday.
        let grid = month_grid(2026, 2, Weekday::Sun).unwrap();
        assert_eq!(grid[0].date.day(), 1);
        assert!(grid[0].in_month);
        assert_eq!(grid.iter().filter(|day| day.in_month).count(), 28);
    }

    #[test]
    fn invalid_month_is_rejected() {
        assert_eq!(
            month_grid(2026, 13, Weekday::Mon),
            Err(CalendarError::InvalidMonth {
                year: 2026,
                month: 13
            })
        );
        assert_eq!(days_in_month(2028, 2), Ok(29));
    }

    #[test]
    fn grid_at_the_edge_of_the_date_range_is_an_error() {
        let last_year = NaiveDate::MAX.year();
        assert_eq!(
            month_grid(last_year, 12, Weekday::Mon),
            Err(CalendarError::InvalidMonth {
                year: last_year,
                month: 12
            })
        );
        assert!(days_in_month(last_year, 12).is_err());
    }

    #[test]
    fn events_on_same_start_fall_back_to_title() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let events = vec![
            CalendarEvent::from_new(NewEvent::all_day("standup", date).at("09:00", None)),
            CalendarEvent::from_new(NewEvent::all_day("birthday", date)),
            CalendarEvent::from_new(NewEvent::all_day("anniversary", date)),
            CalendarEvent::from_new(NewEvent::all_day("breakfast", date).at("09:00", None)),
        ];
        let titles = events_on(&events, date)
            .into_iter()
            .map(|event| event.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["anniversary", "birthday", "breakfast", "standup"]);
    }

    #[test]
    fn events_on_day_put_all_day_first() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let events = vec![
            CalendarEvent::from_new(NewEvent::all_day("late", date).at("18:00", None)),
            CalendarEvent::from_new(NewEvent::all_day("holiday", date)),
            CalendarEvent::from_new(NewEvent::all_day("early", date).at("08:15", Some("09:00"))),
            CalendarEvent::from_new(NewEvent::all_day("tomorrow", date.succ_opt().unwrap())),
        ];
        let titles = events_on(&events, date)
            .into_iter()
            .map(|event| event.title.as_str())
            .collect::<Vec<_>>();
        assert_eq!(titles, vec!["holiday", "early", "late"]);
    }
}
