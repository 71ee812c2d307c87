use crate::application::journal::require_journal;
use crate::application::template::load_template;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use crate::domain::values::position_size::risk_amount;
use crate::domain::values::trade_query::{matches_search, sort_trades, TradeSort};
use chrono::Local;
use std::sync::Arc;

/// Give an undated trade an open time: the previous version's, else now.
fn stamp_open_time(trade: &mut Trade, previous: Option<&Trade>) {
    if trade.opened_at.is_some() || trade.date.is_some() {
        return;
    }
    match previous.filter(|p| p.opened_at.is_some() || p.date.is_some()) {
        Some(previous) => {
            trade.opened_at = previous.opened_at;
            trade.date = previous.date;
        }
        None => trade.opened_at = Some(Local::now().naive_local()),
    }
    trade.derive_date_keys();
}

pub struct TradeUseCase {
    trades: Arc<dyn TradeRepository>,
    journals: Arc<dyn JournalRepository>,
}

impl TradeUseCase {
    pub fn new(trades: Arc<dyn TradeRepository>, journals: Arc<dyn JournalRepository>) -> Self {
        Self { trades, journals }
    }

    /// Log a trade from JSON into a journal.
    ///
    /// A trade with no open time or open date is stamped with the current
    /// local time. When checklist items are ticked, the confluence score is
    /// recomputed from the journal's checklist; otherwise the given score
    /// is kept.
    pub fn add(&self, journal_id: &str, json: &str) -> Result<Trade, DomainError> {
        let mut journal = require_journal(self.journals.as_ref(), journal_id)?;
        let mut trade = Trade::from_json(journal_id, json)?;
        stamp_open_time(&mut trade, None);
        self.prepare(&mut trade)?;

        self.trades.add_trade(&trade)?;
        journal.trade_count = self.trades.count_trades(journal_id)?;
        self.journals.update_journal(&journal)?;

        tracing::info!(
            trade_id = %trade.id,
            journal_id,
            status = %trade.status,
            pl_usd = trade.pl_usd,
            "logged trade"
        );
        Ok(trade)
    }

    /// Replace a trade's contents from JSON, keeping its identity, journal
    /// and creation time. Without an open time or open date in the input,
    /// the stored ones are kept.
    pub fn update(&self, id: &str, json: &str) -> Result<Trade, DomainError> {
        let existing = self.get(id)?;
        let mut trade = Trade::from_json(&existing.journal_id, json)?;
        stamp_open_time(&mut trade, Some(&existing));
        trade.id = existing.id;
        trade.created_at = existing.created_at;
        self.prepare(&mut trade)?;

        self.trades.update_trade(&trade)?;
        tracing::info!(trade_id = %trade.id, status = %trade.status, "updated trade");
        Ok(trade)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        let trade = self.get(id)?;
        self.trades.delete_trade(id)?;

        if let Some(mut journal) = self.journals.get_journal(&trade.journal_id)? {
            journal.trade_count = self.trades.count_trades(&trade.journal_id)?;
            self.journals.update_journal(&journal)?;
        }
        tracing::info!(trade_id = id, journal_id = %trade.journal_id, "deleted trade");
        Ok(())
    }

    pub fn get(&self, id: &str) -> Result<Trade, DomainError> {
        self.trades
            .get_trade(id)?
            .ok_or_else(|| DomainError::NotFound(format!("Trade not found: {id}")))
    }

    /// All trades of a journal, optionally narrowed by a text search, in
    /// the requested order.
    pub fn list(
        &self,
        journal_id: &str,
        search: Option<&str>,
        sort: TradeSort,
    ) -> Result<Vec<Trade>, DomainError> {
        let mut trades = self.trades.list_trades(&TradeFilter::journal(journal_id))?;
        if let Some(text) = search {
            trades.retain(|t| matches_search(t, text));
        }
        sort_trades(&mut trades, sort);
        Ok(trades)
    }

    fn prepare(&self, trade: &mut Trade) -> Result<(), DomainError> {
        if !trade.confluence_checked.is_empty() {
            let template = load_template(self.journals.as_ref(), &trade.journal_id)?;
            trade.confluence_score = template.score(&trade.confluence_checked);
        }
        if trade.risk_amount.is_none() {
            trade.risk_amount = risk_amount(trade.balance, trade.risk_percent);
        }
        Ok(())
    }
}
