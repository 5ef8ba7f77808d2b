//! Month-calendar grid for the browse view
//!
//! The grid covers whole Sunday-first weeks around the requested month, so
//! leading and trailing out-of-month days are present but flagged. Cells
//! carry a has-entries marker derived from the normalized day keys.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::entries::{self, Entry};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    /// Canonical `YYYY-MM-DD` key for this cell.
    pub key: String,
    /// Day of month (1-31).
    pub day: u32,
    /// Whether the cell belongs to the requested month.
    pub in_month: bool,
    pub is_today: bool,
    /// Whether any entry falls on this day.
    pub has_entries: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// Whole weeks of seven cells, Sunday first.
    pub weeks: Vec<Vec<CalendarCell>>,
}

/// Build the grid for a month. `today` is injected rather than read from
/// the clock so rendering is deterministic. Returns `None` for an invalid
/// year/month pair.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    entries: &[Entry],
) -> Option<MonthGrid> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let month_end = NaiveDate::from_ymd_opt(next_year, next_month, 1)? - Duration::days(1);

    let grid_start =
        month_start - Duration::days(month_start.weekday().num_days_from_sunday() as i64);
    let grid_end =
        month_end + Duration::days((6 - month_end.weekday().num_days_from_sunday()) as i64);

    let keys = entries::day_keys(entries);

    let mut weeks = Vec::new();
    let mut week = Vec::with_capacity(7);
    let mut date = grid_start;
    while date <= grid_end {
        let key = date.format("%Y-%m-%d").to_string();
        week.push(CalendarCell {
            has_entries: keys.contains(&key),
            day: date.day(),
            in_month: date.year() == year && date.month() == month,
            is_today: date == today,
            key,
        });
        if week.len() == 7 {
            weeks.push(std::mem::take(&mut week));
        }
        date += Duration::days(1);
    }

    Some(MonthGrid { year, month, weeks })
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

pub fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_grid_covers_whole_weeks() {
        // May 2024 starts on a Wednesday and ends on a Friday
        let grid = month_grid(2024, 5, day(2024, 5, 15), &[]).unwrap();
        assert_eq!(grid.weeks.len(), 5);
        assert!(grid.weeks.iter().all(|week| week.len() == 7));

        let first = &grid.weeks[0][0];
        assert_eq!(first.key, "2024-04-28");
        assert!(!first.in_month);

        let last = grid.weeks.last().unwrap().last().unwrap();
        assert_eq!(last.key, "2024-06-01");
        assert!(!last.in_month);
    }

    #[test]
    fn test_entry_markers_and_today() {
        let entries = vec![
            Entry::new("2024-05-03T10:00:00Z".into(), "A".into(), "a".into()),
            Entry::new("2024-05-03".into(), "B".into(), "b".into()),
        ];
        let grid = month_grid(2024, 5, day(2024, 5, 15), &entries).unwrap();
        let cells: Vec<&CalendarCell> = grid.weeks.iter().flatten().collect();

        assert!(cells.iter().any(|c| c.key == "2024-05-03" && c.has_entries));
        assert_eq!(cells.iter().filter(|c| c.has_entries).count(), 1);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert!(cells.iter().any(|c| c.key == "2024-05-15" && c.is_today));
    }

    #[test]
    fn test_invalid_month_is_rejected() {
        assert!(month_grid(2024, 13, day(2024, 5, 15), &[]).is_none());
    }

    #[test]
    fn test_month_paging() {
        assert_eq!(next_month(2024, 12), (2025, 1));
        assert_eq!(next_month(2024, 5), (2024, 6));
        assert_eq!(prev_month(2024, 1), (2023, 12));
        assert_eq!(prev_month(2024, 5), (2024, 4));
    }

    #[test]
    fn test_december_grid() {
        // Month-end arithmetic crosses the year boundary
        let grid = month_grid(2024, 12, day(2024, 12, 25), &[]).unwrap();
        let last = grid.weeks.last().unwrap().last().unwrap();
        assert_eq!(last.key, "2025-01-04");
    }
}
