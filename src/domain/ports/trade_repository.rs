use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::values::trade_status::TradeStatus;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default)]
pub struct TradeFilter {
    pub journal_id: Option<String>,
    pub status: Option<TradeStatus>,
    /// Matches the trade's booked day (close date, else open date).
    pub day: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TradeFilter {
    pub fn journal(journal_id: &str) -> Self {
        Self {
            journal_id: Some(journal_id.to_string()),
            ..Self::default()
        }
    }
}

pub trait TradeRepository: Send + Sync {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    /// Replace a stored trade. `NotFound` if the id is unknown.
    fn update_trade(&self, trade: &Trade) -> Result<(), DomainError>;
    fn delete_trade(&self, id: &str) -> Result<(), DomainError>;
    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError>;
    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError>;
    fn count_trades(&self, journal_id: &str) -> Result<usize, DomainError>;
}
