use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::calendar::{build_month_matrix, format_date_key, YearMonth, WEEKDAY_LABELS};
use crate::domain::values::stats::group_by_day;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::sync::Arc;

/// One grid cell with the closed-trade totals booked on it. Blank cells
/// have no date.
#[derive(Debug, Clone, Serialize)]
pub struct CalendarDay {
    pub date: Option<String>,
    pub day: Option<u32>,
    pub pl: f64,
    pub trade_count: usize,
}

impl CalendarDay {
    fn blank() -> Self {
        Self {
            date: None,
            day: None,
            pl: 0.0,
            trade_count: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CalendarMonth {
    pub journal_id: String,
    pub month: YearMonth,
    pub label: String,
    pub weekdays: [&'static str; 7],
    pub weeks: Vec<Vec<CalendarDay>>,
    pub total_pl: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayDetail {
    pub date: String,
    pub total_pl: f64,
    pub trades: Vec<Trade>,
}

pub struct CalendarUseCase {
    trades: Arc<dyn TradeRepository>,
}

impl CalendarUseCase {
    pub fn new(trades: Arc<dyn TradeRepository>) -> Self {
        Self { trades }
    }

    fn closed_trades(&self, journal_id: &str, day: Option<NaiveDate>) -> Result<Vec<Trade>, DomainError> {
        self.trades.list_trades(&TradeFilter {
            journal_id: Some(journal_id.to_string()),
            status: Some(TradeStatus::Closed),
            day,
            limit: None,
        })
    }

    pub fn month(&self, journal_id: &str, month: YearMonth) -> Result<CalendarMonth, DomainError> {
        let daily = group_by_day(&self.closed_trades(journal_id, None)?);
        let matrix = build_month_matrix(month.year, month.month as i32);

        let mut total_pl = 0.0;
        let weeks = matrix
            .iter()
            .map(|week| {
                week.iter()
                    .map(|cell| match cell.date() {
                        None => CalendarDay::blank(),
                        Some(date) => {
                            let key = format_date_key(&date);
                            let (pl, trade_count) = daily
                                .get(&key)
                                .map(|d| (d.pl, d.trades.len()))
                                .unwrap_or((0.0, 0));
                            total_pl += pl;
                            CalendarDay {
                                date: Some(key),
                                day: Some(date.day()),
                                pl,
                                trade_count,
                            }
                        }
                    })
                    .collect()
            })
            .collect();

        Ok(CalendarMonth {
            journal_id: journal_id.to_string(),
            month,
            label: month.label(),
            weekdays: WEEKDAY_LABELS,
            weeks,
            total_pl,
        })
    }

    /// Closed trades booked on one day.
    pub fn day(&self, journal_id: &str, date: NaiveDate) -> Result<DayDetail, DomainError> {
        let trades = self.closed_trades(journal_id, Some(date))?;
        Ok(DayDetail {
            date: format_date_key(&date),
            total_pl: trades.iter().map(|t| t.pl_usd).sum(),
            trades,
        })
    }
}
