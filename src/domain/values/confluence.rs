//! Win rate by confluence score range.

use crate::domain::entities::trade::Trade;
use crate::domain::values::stats::percent;
use serde::Serialize;

/// Inclusive score ranges. Together they cover 0..=100 with no gaps or
/// overlaps.
pub const CONFLUENCE_RANGES: [(i64, i64); 4] = [(0, 49), (50, 69), (70, 84), (85, 100)];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfluenceBucket {
    pub label: String,
    pub min: i64,
    pub max: i64,
    pub wins: usize,
    pub total: usize,
    pub win_rate: u32,
}

impl ConfluenceBucket {
    fn new(min: i64, max: i64) -> Self {
        Self {
            label: format!("{min}-{max}"),
            min,
            max,
            wins: 0,
            total: 0,
            win_rate: 0,
        }
    }

    pub fn contains(&self, score: i64) -> bool {
        (self.min..=self.max).contains(&score)
    }
}

/// Tally closed trades into the four score ranges. A score outside
/// 0..=100 fits no range and the trade is left out.
pub fn bucket_by_confluence(trades: &[Trade]) -> [ConfluenceBucket; 4] {
    let mut buckets = CONFLUENCE_RANGES.map(|(min, max)| ConfluenceBucket::new(min, max));

    for trade in trades.iter().filter(|t| t.is_closed()) {
        let Some(bucket) = buckets.iter_mut().find(|b| b.contains(trade.confluence_score)) else {
            continue;
        };
        bucket.total += 1;
        if trade.pl_usd > 0.0 {
            bucket.wins += 1;
        }
    }

    for bucket in buckets.iter_mut() {
        bucket.win_rate = percent(bucket.wins, bucket.total);
    }
    buckets
}
