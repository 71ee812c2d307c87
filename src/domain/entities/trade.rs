use crate::domain::error::DomainError;
use crate::domain::values::calendar::format_date_key;
use crate::domain::values::coerce;
use crate::domain::values::market_type::MarketType;
use crate::domain::values::trade_direction::TradeDirection;
use crate::domain::values::trade_status::TradeStatus;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single journaled trade.
///
/// Numeric and date fields deserialize leniently (see [`coerce`]): missing
/// or malformed P/L becomes 0, missing plan fields become `None`, and
/// unreadable dates are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Trade {
    pub id: String,
    pub journal_id: String,
    #[serde(deserialize_with = "coerce::lenient_text")]
    pub instrument: Option<String>,
    pub market_type: MarketType,
    pub direction: TradeDirection,
    #[serde(deserialize_with = "coerce::lenient_text")]
    pub session: Option<String>,
    pub status: TradeStatus,
    #[serde(deserialize_with = "coerce::lenient_date_time")]
    pub opened_at: Option<NaiveDateTime>,
    #[serde(deserialize_with = "coerce::lenient_date_time")]
    pub closed_at: Option<NaiveDateTime>,
    /// Open date key.
    #[serde(deserialize_with = "coerce::lenient_date")]
    pub date: Option<NaiveDate>,
    #[serde(deserialize_with = "coerce::lenient_date")]
    pub close_date: Option<NaiveDate>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub entry_price: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub stop_loss: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub take_profit: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub exit_price: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub lot_size: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub balance: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub risk_percent: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub risk_amount: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_opt_f64")]
    pub pips: Option<f64>,
    #[serde(deserialize_with = "coerce::lenient_f64")]
    pub pl_usd: f64,
    #[serde(deserialize_with = "coerce::lenient_f64")]
    pub pl_ngn: f64,
    #[serde(deserialize_with = "coerce::lenient_tags")]
    pub tags: Vec<String>,
    #[serde(deserialize_with = "coerce::lenient_text")]
    pub notes: Option<String>,
    pub confluence_checked: Vec<String>,
    #[serde(deserialize_with = "coerce::lenient_score")]
    pub confluence_score: i64,
    pub created_at: DateTime<Utc>,
}

impl Trade {
    pub fn new(
        journal_id: String,
        instrument: Option<String>,
        market_type: MarketType,
        direction: TradeDirection,
        opened_at: Option<NaiveDateTime>,
    ) -> Self {
        let mut trade = Self {
            id: uuid::Uuid::new_v4().to_string(),
            journal_id,
            instrument,
            market_type,
            direction,
            opened_at,
            created_at: Utc::now(),
            ..Self::default()
        };
        trade.derive_date_keys();
        trade
    }

    /// Build a trade from loosely-typed JSON. Identity fields in the input
    /// are ignored; the trade gets a fresh id and the given journal.
    pub fn from_json(journal_id: &str, json: &str) -> Result<Self, DomainError> {
        let mut trade: Trade = serde_json::from_str(json)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid trade: {e}")))?;
        trade.id = uuid::Uuid::new_v4().to_string();
        trade.journal_id = journal_id.to_string();
        trade.created_at = Utc::now();
        trade.derive_date_keys();
        Ok(trade)
    }

    pub fn close(&mut self, pl_usd: f64, pl_ngn: f64, closed_at: Option<NaiveDateTime>) {
        self.status = TradeStatus::Closed;
        self.pl_usd = pl_usd;
        self.pl_ngn = pl_ngn;
        self.closed_at = closed_at;
        self.derive_date_keys();
    }

    /// Fill missing date keys from the matching timestamps.
    pub fn derive_date_keys(&mut self) {
        if self.date.is_none() {
            self.date = self.opened_at.map(|dt| dt.date());
        }
        if self.close_date.is_none() {
            self.close_date = self.closed_at.map(|dt| dt.date());
        }
    }

    pub fn is_closed(&self) -> bool {
        self.status.is_closed()
    }

    /// Calendar day a trade's P/L is booked on: close date, else open date.
    pub fn day(&self) -> Option<NaiveDate> {
        self.close_date.or(self.date)
    }

    pub fn day_key(&self) -> Option<String> {
        self.day().map(|d| format_date_key(&d))
    }

    /// Point in time used for range filters, consistent with [`Trade::day`]:
    /// close time, close date, open time, then open date.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let midnight = |d: NaiveDate| d.and_hms_opt(0, 0, 0);
        self.closed_at
            .or_else(|| self.close_date.and_then(midnight))
            .or(self.opened_at)
            .or_else(|| self.date.and_then(midnight))
    }
}
