use chrono::{Local, NaiveDate};
use clap::Parser;
use tradejournal::cli::commands::{Cli, Commands};
use tradejournal::cli::render::render_month;
use tradejournal::domain::values::calendar::YearMonth;
use tradejournal::domain::values::market_type::MarketType;
use tradejournal::domain::values::position_size::RiskInputs;
use tradejournal::domain::values::trade_query::TradeSort;
use tradejournal::infrastructure::config::AppConfig;
use tradejournal::TradeJournal;

fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let config = AppConfig::from_env();
    config.logging.init();

    let tj = match TradeJournal::open(&config) {
        Ok(tj) => tj,
        Err(e) => {
            eprintln!("Error opening journal database {}: {e}", config.db_path);
            std::process::exit(1);
        }
    };

    if let Err(e) = run_command(&tj, cli.command) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn run_command(tj: &TradeJournal, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::JournalCreate { name } => print_json(&tj.journal_create(&name)?)?,
        Commands::Journals => print_json(&tj.journal_list()?)?,
        Commands::JournalRename { id, name } => print_json(&tj.journal_rename(&id, &name)?)?,
        Commands::JournalDelete { id, yes } => {
            require_confirmation(yes, "journal-delete")?;
            tj.journal_delete(&id)?;
            print_json(&serde_json::json!({ "deleted": id }))?;
        }
        Commands::InstrumentSet {
            journal,
            instrument,
            market,
            value,
        } => {
            let market: MarketType = market.parse()?;
            print_json(&tj.instrument_set(&journal, &instrument, market, value)?)?;
        }
        Commands::InstrumentRemove {
            journal,
            instrument,
            market,
        } => {
            let market: MarketType = market.parse()?;
            print_json(&tj.instrument_remove(&journal, &instrument, market)?)?;
        }
        Commands::TradeAdd { journal, json } => print_json(&tj.trade_add(&journal, &json)?)?,
        Commands::TradeUpdate { id, json } => print_json(&tj.trade_update(&id, &json)?)?,
        Commands::TradeDelete { id, yes } => {
            require_confirmation(yes, "trade-delete")?;
            tj.trade_delete(&id)?;
            print_json(&serde_json::json!({ "deleted": id }))?;
        }
        Commands::Trade { id } => print_json(&tj.trade_get(&id)?)?,
        Commands::Trades {
            journal,
            search,
            sort,
        } => {
            let sort: TradeSort = sort.parse()?;
            print_json(&tj.trade_list(&journal, search.as_deref(), sort)?)?;
        }
        Commands::Stats { journal, filter } => {
            let filter = filter.into_filter()?;
            print_json(&tj.analytics(&journal, &filter)?)?;
        }
        Commands::Confluence { journal, filter } => {
            let filter = filter.into_filter()?;
            print_json(&tj.confluence(&journal, &filter)?)?;
        }
        Commands::Calendar {
            journal,
            month,
            json,
        } => {
            let month = match month {
                Some(m) => m.parse()?,
                None => YearMonth::of(&Local::now().date_naive()),
            };
            let view = tj.calendar(&journal, month)?;
            if json {
                print_json(&view)?;
            } else {
                print!("{}", render_month(&view));
            }
        }
        Commands::Day { journal, date } => {
            let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
                .map_err(|_| format!("Invalid date format: {date}. Use YYYY-MM-DD"))?;
            print_json(&tj.day_detail(&journal, date)?)?;
        }
        Commands::Template { journal } => print_json(&tj.template(&journal)?)?,
        Commands::TemplateAdd { journal, label } => print_json(&tj.template_add(&journal, &label)?)?,
        Commands::TemplateRename {
            journal,
            item_id,
            label,
        } => print_json(&tj.template_rename(&journal, &item_id, &label)?)?,
        Commands::TemplateMove {
            journal,
            index,
            delta,
        } => print_json(&tj.template_move(&journal, index, delta)?)?,
        Commands::TemplateRemove { journal, index } => print_json(&tj.template_remove(&journal, index)?)?,
        Commands::Risk {
            journal,
            json,
            market,
        } => {
            let inputs: RiskInputs = serde_json::from_str(&json)?;
            let market: MarketType = market.parse()?;
            print_json(&tj.risk_guidance(&journal, &inputs, market)?)?;
        }
    }
    Ok(())
}

fn require_confirmation(yes: bool, command: &str) -> Result<(), String> {
    if yes {
        Ok(())
    } else {
        Err(format!("{command} is permanent; pass --yes to confirm"))
    }
}
