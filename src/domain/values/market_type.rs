use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market a trade was placed in. Instrument values for position sizing
/// are keyed by instrument and market type together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum MarketType {
    #[default]
    Forex,
    Crypto,
    Indices,
    Stocks,
    Commodities,
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MarketType::Forex => write!(f, "forex"),
            MarketType::Crypto => write!(f, "crypto"),
            MarketType::Indices => write!(f, "indices"),
            MarketType::Stocks => write!(f, "stocks"),
            MarketType::Commodities => write!(f, "commodities"),
        }
    }
}

impl FromStr for MarketType {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "forex" | "fx" => Ok(MarketType::Forex),
            "crypto" => Ok(MarketType::Crypto),
            "indices" | "index" => Ok(MarketType::Indices),
            "stocks" | "stock" | "equities" => Ok(MarketType::Stocks),
            "commodities" | "commodity" => Ok(MarketType::Commodities),
            _ => Err(format!("Unknown market type: {s}")),
        }
    }
}

impl TryFrom<String> for MarketType {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}
