use crate::domain::values::market_type::MarketType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Monetary value of one price unit for one lot of an instrument, used for
/// position sizing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstrumentValue {
    pub instrument: String,
    pub market_type: MarketType,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Journal {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub trade_count: usize,
    #[serde(default)]
    pub instrument_values: Vec<InstrumentValue>,
}

impl Journal {
    pub fn new(name: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            created_at: Utc::now(),
            trade_count: 0,
            instrument_values: Vec::new(),
        }
    }

    pub fn instrument_value(&self, instrument: &str, market_type: MarketType) -> Option<f64> {
        self.instrument_values
            .iter()
            .find(|v| v.instrument == instrument && v.market_type == market_type)
            .map(|v| v.value)
    }

    /// Insert or replace the value for an instrument + market pair.
    pub fn set_instrument_value(&mut self, instrument: String, market_type: MarketType, value: f64) {
        match self
            .instrument_values
            .iter_mut()
            .find(|v| v.instrument == instrument && v.market_type == market_type)
        {
            Some(existing) => existing.value = value,
            None => self.instrument_values.push(InstrumentValue {
                instrument,
                market_type,
                value,
            }),
        }
    }

    /// Returns whether anything was removed.
    pub fn remove_instrument_value(&mut self, instrument: &str, market_type: MarketType) -> bool {
        let before = self.instrument_values.len();
        self.instrument_values
            .retain(|v| !(v.instrument == instrument && v.market_type == market_type));
        self.instrument_values.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instrument_values_upsert_by_pair() {
        let mut journal = Journal::new("Main".into());
        journal.set_instrument_value("XAUUSD".into(), MarketType::Commodities, 100.0);
        journal.set_instrument_value("XAUUSD".into(), MarketType::Forex, 10.0);
        journal.set_instrument_value("XAUUSD".into(), MarketType::Commodities, 1.0);

        assert_eq!(journal.instrument_values.len(), 2);
        assert_eq!(journal.instrument_value("XAUUSD", MarketType::Commodities), Some(1.0));
        assert_eq!(journal.instrument_value("XAUUSD", MarketType::Forex), Some(10.0));
        assert_eq!(journal.instrument_value("XAUUSD", MarketType::Crypto), None);
    }

    #[test]
    fn test_remove_instrument_value() {
        let mut journal = Journal::new("Main".into());
        journal.set_instrument_value("US30".into(), MarketType::Indices, 1.0);
        assert!(!journal.remove_instrument_value("US30", MarketType::Forex));
        assert!(journal.remove_instrument_value("US30", MarketType::Indices));
        assert!(journal.instrument_values.is_empty());
    }
}
