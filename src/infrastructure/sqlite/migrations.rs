use crate::domain::error::DomainError;
use rusqlite::Connection;

pub fn run_migrations(conn: &Connection) -> Result<(), DomainError> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS journals (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            created_at TEXT NOT NULL,
            trade_count INTEGER NOT NULL DEFAULT 0,
            instrument_values TEXT NOT NULL DEFAULT '[]'
        );

        CREATE TABLE IF NOT EXISTS trades (
            id TEXT PRIMARY KEY,
            journal_id TEXT NOT NULL,
            status TEXT NOT NULL,
            date TEXT,
            close_date TEXT,
            created_at TEXT NOT NULL,
            body TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS confluence_templates (
            journal_id TEXT PRIMARY KEY,
            items TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_trades_journal ON trades(journal_id);
        CREATE INDEX IF NOT EXISTS idx_trades_date ON trades(date);
        CREATE INDEX IF NOT EXISTS idx_trades_close_date ON trades(close_date);
        "
    ).map_err(|e| DomainError::Database(format!("Migration failed: {e}")))
}
