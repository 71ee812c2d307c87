use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::confluence::{bucket_by_confluence, ConfluenceBucket};
use crate::domain::values::stats::{compute_summary, equity_curve, EquityPoint, StatsSummary};
use crate::domain::values::trade_query::AnalyticsFilter;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct DayTotal {
    pub date: String,
    pub pl: f64,
    pub trades: usize,
}

/// Everything the analytics view shows for one journal.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsReport {
    pub journal_id: String,
    /// Trades that passed the filter, open ones included.
    pub matched_trades: usize,
    pub summary: StatsSummary,
    pub daily: Vec<DayTotal>,
    pub equity_curve: Vec<EquityPoint>,
    pub confluence: Vec<ConfluenceBucket>,
}

pub struct AnalyticsUseCase {
    trades: Arc<dyn TradeRepository>,
}

impl AnalyticsUseCase {
    pub fn new(trades: Arc<dyn TradeRepository>) -> Self {
        Self { trades }
    }

    fn filtered(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<Vec<Trade>, DomainError> {
        let trades = self.trades.list_trades(&TradeFilter::journal(journal_id))?;
        Ok(filter.apply(&trades))
    }

    pub fn report(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<AnalyticsReport, DomainError> {
        let trades = self.filtered(journal_id, filter)?;
        let summary = compute_summary(&trades);
        let daily = summary
            .daily
            .values()
            .map(|d| DayTotal {
                date: d.date.clone(),
                pl: d.pl,
                trades: d.trades.len(),
            })
            .collect();
        let equity_curve = equity_curve(&summary.daily);
        let confluence = bucket_by_confluence(&trades).to_vec();

        tracing::debug!(
            journal_id,
            matched = trades.len(),
            closed = summary.total,
            "computed analytics"
        );
        Ok(AnalyticsReport {
            journal_id: journal_id.to_string(),
            matched_trades: trades.len(),
            summary,
            daily,
            equity_curve,
            confluence,
        })
    }

    pub fn summary(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<StatsSummary, DomainError> {
        Ok(compute_summary(&self.filtered(journal_id, filter)?))
    }

    pub fn confluence(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<Vec<ConfluenceBucket>, DomainError> {
        Ok(bucket_by_confluence(&self.filtered(journal_id, filter)?).to_vec())
    }
}
