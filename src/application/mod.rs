pub mod analytics;
pub mod calendar;
pub mod journal;
pub mod risk;
pub mod template;
pub mod trade;
