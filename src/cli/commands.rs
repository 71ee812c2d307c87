use crate::domain::values::coerce;
use crate::domain::values::trade_query::AnalyticsFilter;
use chrono::NaiveDateTime;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tradejournal", about = "Trading journal with calendar review and analytics")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a journal (with the default confluence checklist)
    JournalCreate {
        name: String,
    },
    /// List journals
    Journals,
    /// Rename a journal
    JournalRename {
        id: String,
        name: String,
    },
    /// Delete a journal with all its trades and checklist
    JournalDelete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Save the value of one price unit per lot for an instrument
    InstrumentSet {
        journal: String,
        instrument: String,
        /// Market type (forex, crypto, indices, stocks, commodities)
        market: String,
        value: f64,
    },
    /// Remove a saved instrument value
    InstrumentRemove {
        journal: String,
        instrument: String,
        market: String,
    },
    /// Log a trade
    TradeAdd {
        journal: String,
        /// JSON with status, instrument, market_type, direction, opened_at, closed_at,
        /// pl_usd, pl_ngn, entry_price, stop_loss, tags, notes, confluence_checked, ...
        json: String,
    },
    /// Replace a trade's contents
    TradeUpdate {
        id: String,
        json: String,
    },
    /// Delete a trade
    TradeDelete {
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// Show one trade
    Trade {
        id: String,
    },
    /// List a journal's trades
    Trades {
        journal: String,
        /// Text to match against instrument, notes and tags
        #[arg(long)]
        search: Option<String>,
        /// date_desc, date_asc, pl_desc, pl_asc
        #[arg(long, default_value = "date_desc")]
        sort: String,
    },
    /// Performance analytics
    Stats {
        journal: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Win rate by confluence score range
    Confluence {
        journal: String,
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Month calendar of daily P/L
    Calendar {
        journal: String,
        /// Month as YYYY-MM (default: current month)
        #[arg(long)]
        month: Option<String>,
        /// Print JSON instead of a grid
        #[arg(long)]
        json: bool,
    },
    /// Closed trades booked on one day
    Day {
        journal: String,
        /// Date as YYYY-MM-DD
        date: String,
    },
    /// Show the confluence checklist
    Template {
        journal: String,
    },
    /// Append a checklist item
    TemplateAdd {
        journal: String,
        label: String,
    },
    /// Rename a checklist item
    TemplateRename {
        journal: String,
        item_id: String,
        label: String,
    },
    /// Move a checklist item (negative delta moves it up)
    TemplateMove {
        journal: String,
        index: usize,
        #[arg(allow_negative_numbers = true)]
        delta: isize,
    },
    /// Remove a checklist item by position
    TemplateRemove {
        journal: String,
        index: usize,
    },
    /// Position sizing guidance
    Risk {
        journal: String,
        /// JSON with balance, risk_percent, entry_price, stop_loss, instrument
        json: String,
        #[arg(long, default_value = "forex")]
        market: String,
    },
}

/// Analytics filters shared by `stats` and `confluence`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Start of range (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
    #[arg(long)]
    pub from: Option<String>,
    /// End of range; a bare date includes the whole day
    #[arg(long)]
    pub to: Option<String>,
    #[arg(long)]
    pub instrument: Option<String>,
    /// buy or sell
    #[arg(long)]
    pub direction: Option<String>,
    #[arg(long)]
    pub market: Option<String>,
    #[arg(long)]
    pub tag: Option<String>,
    #[arg(long)]
    pub confluence_min: Option<i64>,
    #[arg(long)]
    pub confluence_max: Option<i64>,
}

impl FilterArgs {
    pub fn into_filter(self) -> Result<AnalyticsFilter, String> {
        Ok(AnalyticsFilter {
            start: parse_bound(&self.from, false)?,
            end: parse_bound(&self.to, true)?,
            instrument: self.instrument,
            direction: self.direction.map(|d| d.parse()).transpose()?,
            market_type: self.market.map(|m| m.parse()).transpose()?,
            tag: self.tag,
            confluence_min: self.confluence_min,
            confluence_max: self.confluence_max,
        })
    }
}

fn parse_bound(s: &Option<String>, end_of_day: bool) -> Result<Option<NaiveDateTime>, String> {
    let Some(s) = s else {
        return Ok(None);
    };
    if let Some(dt) = coerce::date_time(s) {
        return Ok(Some(dt));
    }
    let date = chrono::NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date format: {s}. Use YYYY-MM-DD or YYYY-MM-DDTHH:MM"))?;
    let time = if end_of_day {
        date.and_hms_opt(23, 59, 59)
    } else {
        date.and_hms_opt(0, 0, 0)
    };
    Ok(time)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_args_parse() {
        let args = FilterArgs {
            from: Some("2024-01-01".into()),
            to: Some("2024-01-31".into()),
            direction: Some("sell".into()),
            market: Some("crypto".into()),
            ..Default::default()
        };
        let filter = args.into_filter().unwrap();
        assert_eq!(filter.start.unwrap().to_string(), "2024-01-01 00:00:00");
        assert_eq!(filter.end.unwrap().to_string(), "2024-01-31 23:59:59");
        assert!(filter.direction.is_some());
        assert!(filter.market_type.is_some());
    }

    #[test]
    fn test_filter_args_reject_bad_values() {
        let args = FilterArgs {
            from: Some("last tuesday".into()),
            ..Default::default()
        };
        assert!(args.into_filter().is_err());

        let args = FilterArgs {
            direction: Some("up".into()),
            ..Default::default()
        };
        assert!(args.into_filter().is_err());
    }

    #[test]
    fn test_cli_parses_negative_delta() {
        let cli = Cli::try_parse_from(["tradejournal", "template-move", "j1", "2", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::TemplateMove { index: 2, delta: -1, .. }));
    }
}
