pub mod journal_repository;
pub mod trade_repository;
