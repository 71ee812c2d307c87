//! In-memory trade filtering, search and ordering.

use crate::domain::entities::trade::Trade;
use crate::domain::values::market_type::MarketType;
use crate::domain::values::trade_direction::TradeDirection;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Narrowing applied before analytics are computed. Every field is
/// optional; an empty filter keeps every trade.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalyticsFilter {
    pub start: Option<NaiveDateTime>,
    pub end: Option<NaiveDateTime>,
    /// Case-insensitive substring of the instrument.
    pub instrument: Option<String>,
    pub direction: Option<TradeDirection>,
    pub market_type: Option<MarketType>,
    /// Case-insensitive substring of any tag.
    pub tag: Option<String>,
    pub confluence_min: Option<i64>,
    pub confluence_max: Option<i64>,
}

impl AnalyticsFilter {
    pub fn matches(&self, trade: &Trade) -> bool {
        // Trades without any usable time pass date bounds.
        if let Some(ts) = trade.timestamp() {
            if self.start.is_some_and(|start| ts < start) {
                return false;
            }
            if self.end.is_some_and(|end| ts > end) {
                return false;
            }
        }
        if let Some(needle) = non_empty_lower(&self.instrument) {
            let hit = trade
                .instrument
                .as_deref()
                .is_some_and(|i| i.to_lowercase().contains(&needle));
            if !hit {
                return false;
            }
        }
        if self.direction.is_some_and(|d| d != trade.direction) {
            return false;
        }
        if self.market_type.is_some_and(|m| m != trade.market_type) {
            return false;
        }
        if let Some(needle) = non_empty_lower(&self.tag) {
            if !trade.tags.iter().any(|t| t.to_lowercase().contains(&needle)) {
                return false;
            }
        }
        if self.confluence_min.is_some_and(|min| trade.confluence_score < min) {
            return false;
        }
        if self.confluence_max.is_some_and(|max| trade.confluence_score > max) {
            return false;
        }
        true
    }

    pub fn apply(&self, trades: &[Trade]) -> Vec<Trade> {
        trades.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}

fn non_empty_lower(s: &Option<String>) -> Option<String> {
    s.as_deref()
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSort {
    #[default]
    DateDesc,
    DateAsc,
    PlDesc,
    PlAsc,
}

impl fmt::Display for TradeSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradeSort::DateDesc => write!(f, "date_desc"),
            TradeSort::DateAsc => write!(f, "date_asc"),
            TradeSort::PlDesc => write!(f, "pl_desc"),
            TradeSort::PlAsc => write!(f, "pl_asc"),
        }
    }
}

impl FromStr for TradeSort {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "date_desc" | "newest" => Ok(TradeSort::DateDesc),
            "date_asc" | "oldest" => Ok(TradeSort::DateAsc),
            "pl_desc" => Ok(TradeSort::PlDesc),
            "pl_asc" => Ok(TradeSort::PlAsc),
            _ => Err(format!("Unknown sort order: {s}")),
        }
    }
}

/// Case-insensitive match against instrument, notes and tags.
pub fn matches_search(trade: &Trade, text: &str) -> bool {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let mut haystack: Vec<&str> = Vec::new();
    haystack.extend(trade.instrument.as_deref());
    haystack.extend(trade.notes.as_deref());
    haystack.extend(trade.tags.iter().map(String::as_str));
    haystack.join(" ").to_lowercase().contains(&needle)
}

/// Order by open time (falling back to the booked time) or by P/L.
/// Sorting is stable; undated trades sort as oldest.
pub fn sort_trades(trades: &mut [Trade], sort: TradeSort) {
    let opened = |t: &Trade| t.opened_at.or_else(|| t.timestamp());
    match sort {
        TradeSort::DateDesc => trades.sort_by(|a, b| opened(b).cmp(&opened(a))),
        TradeSort::DateAsc => trades.sort_by(|a, b| opened(a).cmp(&opened(b))),
        TradeSort::PlDesc => trades.sort_by(|a, b| b.pl_usd.partial_cmp(&a.pl_usd).unwrap_or(Ordering::Equal)),
        TradeSort::PlAsc => trades.sort_by(|a, b| a.pl_usd.partial_cmp(&b.pl_usd).unwrap_or(Ordering::Equal)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn trade(value: serde_json::Value) -> Trade {
        serde_json::from_value(value).unwrap()
    }

    fn at(s: &str) -> Option<NaiveDateTime> {
        crate::domain::values::coerce::date_time(s)
    }

    #[test]
    fn test_empty_filter_keeps_everything() {
        let trades = vec![trade(json!({})), trade(json!({"status": "closed"}))];
        assert_eq!(AnalyticsFilter::default().apply(&trades).len(), 2);
    }

    #[test]
    fn test_date_range_uses_close_time_first() {
        let t = trade(json!({"opened_at": "2024-01-01T10:00", "closed_at": "2024-01-10T10:00"}));
        let filter = AnalyticsFilter {
            start: at("2024-01-05T00:00"),
            ..Default::default()
        };
        assert!(filter.matches(&t));

        let filter = AnalyticsFilter {
            end: at("2024-01-05T00:00"),
            ..Default::default()
        };
        assert!(!filter.matches(&t));
    }

    #[test]
    fn test_undated_trade_passes_date_bounds() {
        let filter = AnalyticsFilter {
            start: at("2024-01-01T00:00"),
            end: at("2024-01-31T00:00"),
            ..Default::default()
        };
        assert!(filter.matches(&trade(json!({}))));
    }

    #[test]
    fn test_instrument_and_tag_substrings() {
        let t = trade(json!({"instrument": "XAUUSD", "tags": ["London-Open", "A+"]}));
        let filter = AnalyticsFilter {
            instrument: Some("xau".into()),
            tag: Some("london".into()),
            ..Default::default()
        };
        assert!(filter.matches(&t));

        let filter = AnalyticsFilter {
            tag: Some("asia".into()),
            ..Default::default()
        };
        assert!(!filter.matches(&t));
    }

    #[test]
    fn test_direction_market_and_confluence() {
        let t = trade(json!({"direction": "sell", "market_type": "indices", "confluence_score": 70}));
        let pass = AnalyticsFilter {
            direction: Some(TradeDirection::Sell),
            market_type: Some(MarketType::Indices),
            confluence_min: Some(70),
            confluence_max: Some(70),
            ..Default::default()
        };
        assert!(pass.matches(&t));

        let fail = AnalyticsFilter {
            confluence_min: Some(71),
            ..Default::default()
        };
        assert!(!fail.matches(&t));
        let fail = AnalyticsFilter {
            direction: Some(TradeDirection::Buy),
            ..Default::default()
        };
        assert!(!fail.matches(&t));
    }

    #[test]
    fn test_search_covers_notes_and_tags() {
        let t = trade(json!({"instrument": "GBPJPY", "notes": "Chased the move", "tags": "revenge"}));
        assert!(matches_search(&t, "gbp"));
        assert!(matches_search(&t, "CHASED"));
        assert!(matches_search(&t, "revenge"));
        assert!(matches_search(&t, ""));
        assert!(!matches_search(&t, "eurusd"));
    }

    #[test]
    fn test_sort_orders() {
        let mut trades = vec![
            trade(json!({"instrument": "B", "opened_at": "2024-01-02T00:00", "pl_usd": -5})),
            trade(json!({"instrument": "A", "opened_at": "2024-01-01T00:00", "pl_usd": 10})),
            trade(json!({"instrument": "C", "opened_at": "2024-01-03T00:00", "pl_usd": 3})),
        ];
        let names = |ts: &[Trade]| -> Vec<String> { ts.iter().filter_map(|t| t.instrument.clone()).collect() };

        sort_trades(&mut trades, TradeSort::DateDesc);
        assert_eq!(names(&trades), vec!["C", "B", "A"]);
        sort_trades(&mut trades, TradeSort::DateAsc);
        assert_eq!(names(&trades), vec!["A", "B", "C"]);
        sort_trades(&mut trades, TradeSort::PlDesc);
        assert_eq!(names(&trades), vec!["A", "C", "B"]);
        sort_trades(&mut trades, TradeSort::PlAsc);
        assert_eq!(names(&trades), vec!["B", "C", "A"]);
    }

    #[test]
    fn test_sort_parse() {
        assert_eq!("pl_desc".parse::<TradeSort>().unwrap(), TradeSort::PlDesc);
        assert!("sideways".parse::<TradeSort>().is_err());
    }
}
