pub mod calendar;
pub mod coerce;
pub mod confluence;
pub mod market_type;
pub mod position_size;
pub mod stats;
pub mod trade_direction;
pub mod trade_query;
pub mod trade_status;
