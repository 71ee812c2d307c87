mod common;

use chrono::NaiveDate;
use common::{add_trade, closed_trade, open_trade, setup_with_journal};
use serde_json::json;
use tradejournal::cli::render::render_month;
use tradejournal::domain::values::calendar::YearMonth;

#[test]
fn test_month_view_totals() {
    let (tj, journal) = setup_with_journal("Main");
    closed_trade(&tj, &journal.id, "EURUSD", 30.0, "2024-02-05T10:00");
    closed_trade(&tj, &journal.id, "GBPUSD", -10.0, "2024-02-05T14:00");
    closed_trade(&tj, &journal.id, "EURUSD", 15.0, "2024-02-29T10:00");
    closed_trade(&tj, &journal.id, "EURUSD", 500.0, "2024-03-01T10:00");
    open_trade(&tj, &journal.id, "XAUUSD", "2024-02-06T10:00");

    let month = tj.calendar(&journal.id, YearMonth::new(2024, 2)).unwrap();
    assert_eq!(month.label, "February 2024");
    assert_eq!(month.weeks.len(), 6);
    assert!(month.weeks.iter().all(|w| w.len() == 7));
    assert_eq!(month.total_pl, 35.0);

    // Feb 1 2024 is a Thursday.
    assert!(month.weeks[0][2].date.is_none());
    assert_eq!(month.weeks[0][3].day, Some(1));

    let cells: Vec<_> = month.weeks.iter().flatten().filter(|c| c.date.is_some()).collect();
    assert_eq!(cells.len(), 29);

    let feb5 = cells.iter().find(|c| c.date.as_deref() == Some("2024-02-05")).unwrap();
    assert_eq!(feb5.pl, 20.0);
    assert_eq!(feb5.trade_count, 2);

    let feb6 = cells.iter().find(|c| c.date.as_deref() == Some("2024-02-06")).unwrap();
    assert_eq!(feb6.trade_count, 0);
}

#[test]
fn test_month_view_overflow_month() {
    let (tj, journal) = setup_with_journal("Main");
    let month = tj.calendar(&journal.id, YearMonth::new(2023, 13)).unwrap();
    assert_eq!(month.month, YearMonth::new(2024, 1));
    assert_eq!(month.weeks[0][0].date.as_deref(), Some("2024-01-01"));
}

#[test]
fn test_day_detail_uses_close_date() {
    let (tj, journal) = setup_with_journal("Main");
    add_trade(
        &tj,
        &journal.id,
        json!({"status": "closed", "opened_at": "2024-04-01T22:00", "closed_at": "2024-04-02T03:00", "pl_usd": 12}),
    );
    closed_trade(&tj, &journal.id, "EURUSD", -2.0, "2024-04-02T11:00");
    open_trade(&tj, &journal.id, "GBPUSD", "2024-04-02T12:00");

    let day = tj
        .day_detail(&journal.id, NaiveDate::from_ymd_opt(2024, 4, 2).unwrap())
        .unwrap();
    assert_eq!(day.date, "2024-04-02");
    assert_eq!(day.trades.len(), 2);
    assert_eq!(day.total_pl, 10.0);

    let open_day = tj
        .day_detail(&journal.id, NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())
        .unwrap();
    assert!(open_day.trades.is_empty());
    assert_eq!(open_day.total_pl, 0.0);
}

#[test]
fn test_rendered_grid_has_month_total() {
    let (tj, journal) = setup_with_journal("Main");
    closed_trade(&tj, &journal.id, "EURUSD", 7.25, "2024-01-15T10:00");
    let text = render_month(&tj.calendar(&journal.id, YearMonth::new(2024, 1)).unwrap());
    assert!(text.starts_with("January 2024\nMon"));
    assert!(text.contains("+7.25"));
    assert!(text.ends_with("Month P/L: +7.25\n"));
}
