pub mod journal_repo;
pub mod migrations;
pub mod store;
pub mod trade_repo;
