//! Performance statistics over a set of trades.
//!
//! Only closed trades count toward any profitability figure. Every function
//! here is total: malformed values were already coerced to zero when the
//! trades were built, and empty inputs produce zeroed results.

use crate::domain::entities::trade::Trade;
use serde::Serialize;
use std::collections::BTreeMap;

/// Closed trades booked on one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyAggregate {
    pub date: String,
    pub pl: f64,
    pub trades: Vec<Trade>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EquityPoint {
    pub date: String,
    pub pl: f64,
    pub cumulative: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub break_even: usize,
    /// Whole percent, 0..=100.
    pub win_rate: u32,
    pub total_pl_usd: f64,
    pub total_pl_ngn: f64,
    pub avg_win: f64,
    /// Mean of the losing trades' P/L, so zero or negative.
    pub avg_loss: f64,
    /// 0 when there are no dated closed trades; check `trading_days` to
    /// tell that apart from a flat day.
    pub best_day: f64,
    pub worst_day: f64,
    pub trading_days: usize,
    #[serde(skip_serializing)]
    pub daily: BTreeMap<String, DailyAggregate>,
}

/// `round(part / whole * 100)`, or 0 for an empty whole.
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0).round() as u32
}

pub fn compute_summary(trades: &[Trade]) -> StatsSummary {
    let closed: Vec<Trade> = trades.iter().filter(|t| t.is_closed()).cloned().collect();
    let total = closed.len();

    let mut wins = 0;
    let mut losses = 0;
    let mut break_even = 0;
    let mut sum_wins = 0.0;
    let mut sum_losses = 0.0;
    let mut total_pl_usd = 0.0;
    let mut total_pl_ngn = 0.0;

    for trade in &closed {
        total_pl_usd += trade.pl_usd;
        total_pl_ngn += trade.pl_ngn;
        if trade.pl_usd > 0.0 {
            wins += 1;
            sum_wins += trade.pl_usd;
        } else if trade.pl_usd < 0.0 {
            losses += 1;
            sum_losses += trade.pl_usd;
        } else {
            break_even += 1;
        }
    }

    let daily = group_by_day(&closed);
    let best_day = daily.values().map(|d| d.pl).reduce(f64::max).unwrap_or(0.0);
    let worst_day = daily.values().map(|d| d.pl).reduce(f64::min).unwrap_or(0.0);

    StatsSummary {
        total,
        wins,
        losses,
        break_even,
        win_rate: percent(wins, total),
        total_pl_usd,
        total_pl_ngn,
        avg_win: if wins > 0 { sum_wins / wins as f64 } else { 0.0 },
        avg_loss: if losses > 0 { sum_losses / losses as f64 } else { 0.0 },
        best_day,
        worst_day,
        trading_days: daily.len(),
        daily,
    }
}

/// Group trades by the day they are booked on (close date, else open
/// date). Trades with neither are skipped. No status filtering happens
/// here; pass the set you want grouped.
pub fn group_by_day(trades: &[Trade]) -> BTreeMap<String, DailyAggregate> {
    let mut days: BTreeMap<String, DailyAggregate> = BTreeMap::new();
    for trade in trades {
        let Some(key) = trade.day_key() else {
            continue;
        };
        let entry = days.entry(key.clone()).or_insert_with(|| DailyAggregate {
            date: key,
            pl: 0.0,
            trades: Vec::new(),
        });
        entry.pl += trade.pl_usd;
        entry.trades.push(trade.clone());
    }
    days
}

/// Running total of daily P/L in date order.
pub fn equity_curve(daily: &BTreeMap<String, DailyAggregate>) -> Vec<EquityPoint> {
    let mut cumulative = 0.0;
    daily
        .values()
        .map(|day| {
            cumulative += day.pl;
            EquityPoint {
                date: day.date.clone(),
                pl: day.pl,
                cumulative,
            }
        })
        .collect()
}
