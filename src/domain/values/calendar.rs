//! Month grid and date keys for the calendar view.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;

pub const WEEKS_PER_MONTH_VIEW: usize = 6;
pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKDAY_LABELS: [&str; DAYS_PER_WEEK] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// `YYYY-MM-DD` from the value's own calendar fields. No timezone
/// conversion happens; pass dates already in the frame you want keyed.
pub fn format_date_key<D: Datelike>(date: &D) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// One position in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the 1st or after the last day of the month.
    Blank,
    Day(NaiveDate),
}

impl CalendarCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            CalendarCell::Blank => None,
            CalendarCell::Day(d) => Some(*d),
        }
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, CalendarCell::Blank)
    }
}

impl Serialize for CalendarCell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CalendarCell::Blank => serializer.serialize_none(),
            CalendarCell::Day(d) => serializer.serialize_some(&format_date_key(d)),
        }
    }
}

pub type MonthMatrix = [[CalendarCell; DAYS_PER_WEEK]; WEEKS_PER_MONTH_VIEW];

/// A calendar month. Months are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Normalizes out-of-range months the way calendar arithmetic
    /// overflows: month 13 is January of the next year, month 0 is
    /// December of the previous one.
    /// Years past the `i32` range saturate.
    pub fn new(year: i32, month: i32) -> Self {
        Self::normalize(i64::from(year), i64::from(month))
    }

    fn normalize(year: i64, month: i64) -> Self {
        let zero_based = month - 1;
        let year = year + zero_based.div_euclid(12);
        Self {
            year: year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32,
            month: (zero_based.rem_euclid(12) + 1) as u32,
        }
    }

    pub fn of<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn shift(&self, delta: i32) -> Self {
        Self::normalize(i64::from(self.year), i64::from(self.month) + i64::from(delta))
    }

    /// Day 1 of the month, or `None` past chrono's supported year range.
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> u32 {
        self.first_day()
            .and_then(|first| first.checked_add_months(Months::new(1)))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// "January 2024"
    pub fn label(&self) -> String {
        match self.first_day() {
            Some(d) => d.format("%B %Y").to_string(),
            None => format!("{:04}-{:02}", self.year, self.month),
        }
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for YearMonth {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| format!("Invalid month: {s}. Use YYYY-MM"))?;
        let year: i32 = y.parse().map_err(|_| format!("Invalid year in {s}"))?;
        let month: u32 = m.parse().map_err(|_| format!("Invalid month in {s}"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("Month must be 1-12, got {month}"));
        }
        Ok(Self { year, month })
    }
}

/// Fixed 6x7 Monday-first grid for a month. Rows are weeks in
/// chronological order, columns Mon..Sun. Cells before day 1 and after the
/// last day are blank; the grid is always six rows so layouts stay stable.
pub fn build_month_matrix(year: i32, month: i32) -> MonthMatrix {
    let ym = YearMonth::new(year, month);
    let mut matrix = [[CalendarCell::Blank; DAYS_PER_WEEK]; WEEKS_PER_MONTH_VIEW];
    let Some(first) = ym.first_day() else {
        return matrix;
    };

    let leading = first.weekday().num_days_from_monday() as i64;
    let days_in_month = ym.days_in_month() as i64;

    let mut day = 1 - leading;
    for week in matrix.iter_mut() {
        for cell in week.iter_mut() {
            if (1..=days_in_month).contains(&day) {
                if let Some(date) = NaiveDate::from_ymd_opt(ym.year, ym.month, day as u32) {
                    *cell = CalendarCell::Day(date);
                }
            }
            day += 1;
        }
    }
    matrix
}
