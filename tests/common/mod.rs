//! Shared test helpers.

#![allow(dead_code)]

use serde_json::{json, Value};
use tradejournal::domain::entities::journal::Journal;
use tradejournal::domain::entities::trade::Trade;
use tradejournal::TradeJournal;

pub fn setup() -> TradeJournal {
    TradeJournal::new(":memory:").unwrap()
}

pub fn setup_with_journal(name: &str) -> (TradeJournal, Journal) {
    let tj = setup();
    let journal = tj.journal_create(name).unwrap();
    (tj, journal)
}

pub fn closed_trade(tj: &TradeJournal, journal_id: &str, instrument: &str, pl_usd: f64, closed_at: &str) -> Trade {
    add_trade(
        tj,
        journal_id,
        json!({
            "status": "closed",
            "instrument": instrument,
            "opened_at": closed_at,
            "closed_at": closed_at,
            "pl_usd": pl_usd,
        }),
    )
}

pub fn open_trade(tj: &TradeJournal, journal_id: &str, instrument: &str, opened_at: &str) -> Trade {
    add_trade(
        tj,
        journal_id,
        json!({"status": "open", "instrument": instrument, "opened_at": opened_at}),
    )
}

pub fn add_trade(tj: &TradeJournal, journal_id: &str, body: Value) -> Trade {
    tj.trade_add(journal_id, &body.to_string()).unwrap()
}
