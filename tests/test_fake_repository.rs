//! The facade runs against any repository implementation, not just SQLite.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tradejournal::domain::entities::confluence_template::ConfluenceTemplate;
use tradejournal::domain::entities::journal::Journal;
use tradejournal::domain::entities::trade::Trade;
use tradejournal::domain::error::DomainError;
use tradejournal::domain::ports::journal_repository::JournalRepository;
use tradejournal::domain::ports::trade_repository::{TradeFilter, TradeRepository};
use tradejournal::domain::values::calendar::YearMonth;
use tradejournal::domain::values::trade_query::AnalyticsFilter;
use tradejournal::TradeJournal;

#[derive(Default)]
struct MemJournals {
    journals: Mutex<Vec<Journal>>,
    templates: Mutex<HashMap<String, ConfluenceTemplate>>,
}

impl JournalRepository for MemJournals {
    fn add_journal(&self, journal: &Journal) -> Result<(), DomainError> {
        self.journals.lock().unwrap().push(journal.clone());
        Ok(())
    }

    fn update_journal(&self, journal: &Journal) -> Result<(), DomainError> {
        let mut journals = self.journals.lock().unwrap();
        let slot = journals
            .iter_mut()
            .find(|j| j.id == journal.id)
            .ok_or_else(|| DomainError::NotFound(journal.id.clone()))?;
        *slot = journal.clone();
        Ok(())
    }

    fn delete_journal(&self, id: &str) -> Result<(), DomainError> {
        self.journals.lock().unwrap().retain(|j| j.id != id);
        self.templates.lock().unwrap().remove(id);
        Ok(())
    }

    fn get_journal(&self, id: &str) -> Result<Option<Journal>, DomainError> {
        Ok(self.journals.lock().unwrap().iter().find(|j| j.id == id).cloned())
    }

    fn list_journals(&self) -> Result<Vec<Journal>, DomainError> {
        Ok(self.journals.lock().unwrap().clone())
    }

    fn get_template(&self, journal_id: &str) -> Result<Option<ConfluenceTemplate>, DomainError> {
        Ok(self.templates.lock().unwrap().get(journal_id).cloned())
    }

    fn save_template(&self, template: &ConfluenceTemplate) -> Result<(), DomainError> {
        self.templates
            .lock()
            .unwrap()
            .insert(template.journal_id.clone(), template.clone());
        Ok(())
    }
}

#[derive(Default)]
struct MemTrades {
    trades: Mutex<Vec<Trade>>,
}

impl TradeRepository for MemTrades {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        self.trades.lock().unwrap().push(trade.clone());
        Ok(())
    }

    fn update_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let mut trades = self.trades.lock().unwrap();
        let slot = trades
            .iter_mut()
            .find(|t| t.id == trade.id)
            .ok_or_else(|| DomainError::NotFound(trade.id.clone()))?;
        *slot = trade.clone();
        Ok(())
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        self.trades.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        Ok(self.trades.lock().unwrap().iter().find(|t| t.id == id).cloned())
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        let trades = self.trades.lock().unwrap();
        let matched = trades
            .iter()
            .filter(|t| filter.journal_id.as_deref().map_or(true, |j| t.journal_id == j))
            .filter(|t| filter.status.map_or(true, |s| t.status == s))
            .filter(|t| filter.day.map_or(true, |d| t.day() == Some(d)))
            .take(filter.limit.unwrap_or(usize::MAX))
            .cloned()
            .collect();
        Ok(matched)
    }

    fn count_trades(&self, journal_id: &str) -> Result<usize, DomainError> {
        Ok(self.trades.lock().unwrap().iter().filter(|t| t.journal_id == journal_id).count())
    }
}

fn setup() -> (TradeJournal, Arc<MemTrades>) {
    let trades = Arc::new(MemTrades::default());
    let tj = TradeJournal::with_repositories(Arc::new(MemJournals::default()), trades.clone());
    (tj, trades)
}

#[test]
fn test_use_cases_over_in_memory_repositories() {
    let (tj, trades) = setup();
    let journal = tj.journal_create("Fake").unwrap();
    tj.trade_add(
        &journal.id,
        r#"{"status": "closed", "closed_at": "2024-06-03T10:00", "pl_usd": 25, "pl_ngn": "38000"}"#,
    )
    .unwrap();
    tj.trade_add(
        &journal.id,
        r#"{"status": "closed", "closed_at": "2024-06-04T10:00", "pl_usd": -5}"#,
    )
    .unwrap();

    assert_eq!(trades.trades.lock().unwrap().len(), 2);
    assert_eq!(tj.journal_get(&journal.id).unwrap().trade_count, 2);

    let s = tj.stats(&journal.id, &AnalyticsFilter::default()).unwrap();
    assert_eq!(s.total_pl_usd, 20.0);
    assert_eq!(s.total_pl_ngn, 38000.0);
    assert_eq!(s.win_rate, 50);

    let june = tj.calendar(&journal.id, YearMonth::new(2024, 6)).unwrap();
    assert_eq!(june.total_pl, 20.0);
}

#[test]
fn test_missing_template_is_created_on_demand() {
    let (tj, _) = setup();
    let journal = tj.journal_create("Fake").unwrap();
    let template = tj.template(&journal.id).unwrap();
    assert_eq!(template.items.len(), 6);
}
