mod common;

use common::setup_with_journal;
use tradejournal::domain::values::market_type::MarketType;
use tradejournal::domain::values::position_size::{GuidanceStatus, RiskInputs};

fn inputs(instrument: &str) -> RiskInputs {
    RiskInputs {
        balance: Some(10_000.0),
        risk_percent: Some(1.0),
        entry_price: Some(2000.0),
        stop_loss: Some(1990.0),
        instrument: Some(instrument.into()),
    }
}

#[test]
fn test_sizing_uses_saved_instrument_value() {
    let (tj, journal) = setup_with_journal("Main");
    tj.instrument_set(&journal.id, "XAUUSD", MarketType::Commodities, 10.0).unwrap();

    let g = tj
        .risk_guidance(&journal.id, &inputs(" XAUUSD "), MarketType::Commodities)
        .unwrap();
    assert_eq!(g.status, GuidanceStatus::Sized);
    assert_eq!(g.risk_amount, Some(100.0));
    assert_eq!(g.stop_distance, Some(10.0));
    assert_eq!(g.position_size_lots, Some(1.0));
}

#[test]
fn test_value_is_per_market_type() {
    let (tj, journal) = setup_with_journal("Main");
    tj.instrument_set(&journal.id, "XAUUSD", MarketType::Commodities, 10.0).unwrap();

    let g = tj
        .risk_guidance(&journal.id, &inputs("XAUUSD"), MarketType::Forex)
        .unwrap();
    assert_eq!(g.status, GuidanceStatus::NoInstrumentValue);
    assert_eq!(g.position_size_lots, None);
    assert!(g.message.contains("Insufficient data"));
}

#[test]
fn test_missing_inputs_and_unknown_journal() {
    let (tj, journal) = setup_with_journal("Main");
    let g = tj
        .risk_guidance(&journal.id, &RiskInputs::default(), MarketType::Forex)
        .unwrap();
    assert_eq!(g.status, GuidanceStatus::MissingInputs);

    assert!(tj.risk_guidance("missing", &inputs("XAUUSD"), MarketType::Forex).is_err());
}
