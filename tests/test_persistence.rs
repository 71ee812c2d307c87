use serde_json::json;
use tradejournal::domain::values::calendar::YearMonth;
use tradejournal::domain::values::market_type::MarketType;
use tradejournal::domain::values::trade_query::{AnalyticsFilter, TradeSort};
use tradejournal::infrastructure::config::AppConfig;
use tradejournal::TradeJournal;

#[test]
fn test_data_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("journal.db");
    let path = path.to_str().unwrap();

    let journal_id = {
        let tj = TradeJournal::new(path).unwrap();
        let journal = tj.journal_create("Swing").unwrap();
        tj.instrument_set(&journal.id, "US30", MarketType::Indices, 1.0).unwrap();
        tj.template_add(&journal.id, "Weekly bias").unwrap();
        tj.trade_add(
            &journal.id,
            &json!({"status": "closed", "instrument": "US30", "closed_at": "2024-05-06T15:00", "pl_usd": 80})
                .to_string(),
        )
        .unwrap();
        journal.id
    };

    let tj = TradeJournal::new(path).unwrap();
    let journal = tj.journal_get(&journal_id).unwrap();
    assert_eq!(journal.trade_count, 1);
    assert_eq!(journal.instrument_value("US30", MarketType::Indices), Some(1.0));
    assert_eq!(tj.template(&journal_id).unwrap().items.len(), 7);
    assert_eq!(tj.trade_list(&journal_id, None, TradeSort::default()).unwrap().len(), 1);
    assert_eq!(tj.stats(&journal_id, &AnalyticsFilter::default()).unwrap().total_pl_usd, 80.0);
    assert_eq!(tj.calendar(&journal_id, YearMonth::new(2024, 5)).unwrap().total_pl, 80.0);
}

#[test]
fn test_open_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("configured.db");
    let db = path.to_str().unwrap().to_string();
    let config = AppConfig::from_lookup(|key| (key == "TRADEJOURNAL_DB").then(|| db.clone()));

    let tj = TradeJournal::open(&config).unwrap();
    tj.journal_create("From config").unwrap();
    assert!(path.exists());
}
