pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

use crate::application::analytics::{AnalyticsReport, AnalyticsUseCase};
use crate::application::calendar::{CalendarMonth, CalendarUseCase, DayDetail};
use crate::application::journal::JournalUseCase;
use crate::application::risk::RiskUseCase;
use crate::application::template::TemplateUseCase;
use crate::application::trade::TradeUseCase;
use crate::domain::entities::confluence_template::ConfluenceTemplate;
use crate::domain::entities::journal::Journal;
use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::ports::trade_repository::TradeRepository;
use crate::domain::values::calendar::YearMonth;
use crate::domain::values::confluence::ConfluenceBucket;
use crate::domain::values::market_type::MarketType;
use crate::domain::values::position_size::{RiskGuidance, RiskInputs};
use crate::domain::values::stats::StatsSummary;
use crate::domain::values::trade_query::{AnalyticsFilter, TradeSort};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::sqlite::journal_repo::SqliteJournalRepo;
use crate::infrastructure::sqlite::store::SqliteStore;
use crate::infrastructure::sqlite::trade_repo::SqliteTradeRepo;
use chrono::NaiveDate;
use std::sync::Arc;

pub struct TradeJournal {
    journal_uc: JournalUseCase,
    template_uc: TemplateUseCase,
    trade_uc: TradeUseCase,
    analytics_uc: AnalyticsUseCase,
    calendar_uc: CalendarUseCase,
    risk_uc: RiskUseCase,
}

impl TradeJournal {
    pub fn open(config: &AppConfig) -> Result<Self, DomainError> {
        Self::new(&config.db_path)
    }

    pub fn new(db_path: &str) -> Result<Self, DomainError> {
        Ok(Self::with_store(SqliteStore::open(db_path)?))
    }

    pub fn with_store(store: SqliteStore) -> Self {
        let journals: Arc<dyn JournalRepository> = Arc::new(SqliteJournalRepo::new(store.clone()));
        let trades: Arc<dyn TradeRepository> = Arc::new(SqliteTradeRepo::new(store));
        Self::with_repositories(journals, trades)
    }

    pub fn with_repositories(
        journals: Arc<dyn JournalRepository>,
        trades: Arc<dyn TradeRepository>,
    ) -> Self {
        Self {
            journal_uc: JournalUseCase::new(journals.clone()),
            template_uc: TemplateUseCase::new(journals.clone()),
            trade_uc: TradeUseCase::new(trades.clone(), journals.clone()),
            analytics_uc: AnalyticsUseCase::new(trades.clone()),
            calendar_uc: CalendarUseCase::new(trades),
            risk_uc: RiskUseCase::new(journals),
        }
    }

    // Journals
    pub fn journal_create(&self, name: &str) -> Result<Journal, DomainError> {
        self.journal_uc.create(name)
    }

    pub fn journal_list(&self) -> Result<Vec<Journal>, DomainError> {
        self.journal_uc.list()
    }

    pub fn journal_get(&self, id: &str) -> Result<Journal, DomainError> {
        self.journal_uc.get(id)
    }

    pub fn journal_rename(&self, id: &str, name: &str) -> Result<Journal, DomainError> {
        self.journal_uc.rename(id, name)
    }

    pub fn journal_delete(&self, id: &str) -> Result<(), DomainError> {
        self.journal_uc.delete(id)
    }

    pub fn instrument_set(
        &self,
        journal_id: &str,
        instrument: &str,
        market_type: MarketType,
        value: f64,
    ) -> Result<Journal, DomainError> {
        self.journal_uc.set_instrument_value(journal_id, instrument, market_type, value)
    }

    pub fn instrument_remove(
        &self,
        journal_id: &str,
        instrument: &str,
        market_type: MarketType,
    ) -> Result<Journal, DomainError> {
        self.journal_uc.remove_instrument_value(journal_id, instrument, market_type)
    }

    // Trades
    pub fn trade_add(&self, journal_id: &str, json: &str) -> Result<Trade, DomainError> {
        self.trade_uc.add(journal_id, json)
    }

    pub fn trade_update(&self, id: &str, json: &str) -> Result<Trade, DomainError> {
        self.trade_uc.update(id, json)
    }

    pub fn trade_delete(&self, id: &str) -> Result<(), DomainError> {
        self.trade_uc.delete(id)
    }

    pub fn trade_get(&self, id: &str) -> Result<Trade, DomainError> {
        self.trade_uc.get(id)
    }

    pub fn trade_list(
        &self,
        journal_id: &str,
        search: Option<&str>,
        sort: TradeSort,
    ) -> Result<Vec<Trade>, DomainError> {
        self.trade_uc.list(journal_id, search, sort)
    }

    // Confluence checklist
    pub fn template(&self, journal_id: &str) -> Result<ConfluenceTemplate, DomainError> {
        self.template_uc.get(journal_id)
    }

    pub fn template_add(&self, journal_id: &str, label: &str) -> Result<ConfluenceTemplate, DomainError> {
        self.template_uc.add_item(journal_id, label)
    }

    pub fn template_rename(
        &self,
        journal_id: &str,
        item_id: &str,
        label: &str,
    ) -> Result<ConfluenceTemplate, DomainError> {
        self.template_uc.rename_item(journal_id, item_id, label)
    }

    pub fn template_move(
        &self,
        journal_id: &str,
        index: usize,
        delta: isize,
    ) -> Result<ConfluenceTemplate, DomainError> {
        self.template_uc.move_item(journal_id, index, delta)
    }

    pub fn template_remove(&self, journal_id: &str, index: usize) -> Result<ConfluenceTemplate, DomainError> {
        self.template_uc.remove_item(journal_id, index)
    }

    // Analytics
    pub fn analytics(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<AnalyticsReport, DomainError> {
        self.analytics_uc.report(journal_id, filter)
    }

    pub fn stats(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<StatsSummary, DomainError> {
        self.analytics_uc.summary(journal_id, filter)
    }

    pub fn confluence(&self, journal_id: &str, filter: &AnalyticsFilter) -> Result<Vec<ConfluenceBucket>, DomainError> {
        self.analytics_uc.confluence(journal_id, filter)
    }

    // Calendar
    pub fn calendar(&self, journal_id: &str, month: YearMonth) -> Result<CalendarMonth, DomainError> {
        self.calendar_uc.month(journal_id, month)
    }

    pub fn day_detail(&self, journal_id: &str, date: NaiveDate) -> Result<DayDetail, DomainError> {
        self.calendar_uc.day(journal_id, date)
    }

    // Risk
    pub fn risk_guidance(
        &self,
        journal_id: &str,
        inputs: &RiskInputs,
        market_type: MarketType,
    ) -> Result<RiskGuidance, DomainError> {
        self.risk_uc.guidance(journal_id, inputs, market_type)
    }
}
