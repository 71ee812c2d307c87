use crate::domain::entities::trade::Trade;
use crate::domain::error::DomainError;
use crate::domain::ports::trade_repository::*;
use crate::domain::values::calendar::format_date_key;
use crate::infrastructure::sqlite::store::SqliteStore;
use rusqlite::{params, OptionalExtension};

/// Trades are stored as a JSON body with the columns needed for lookups
/// pulled out alongside it.
pub struct SqliteTradeRepo {
    store: SqliteStore,
}

impl SqliteTradeRepo {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    fn row_to_trade(row: &rusqlite::Row) -> Result<Trade, rusqlite::Error> {
        let id: String = row.get(0)?;
        let body: String = row.get(1)?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(trade_id = %id, error = %e, "skipping unreadable trade row");
            rusqlite::Error::FromSqlConversionFailure(1, rusqlite::types::Type::Text, Box::new(e))
        })
    }

    fn encode(trade: &Trade) -> Result<String, DomainError> {
        serde_json::to_string(trade)
            .map_err(|e| DomainError::Database(format!("Failed to encode trade: {e}")))
    }
}

impl TradeRepository for SqliteTradeRepo {
    fn add_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let body = Self::encode(trade)?;
        let conn = self.store.lock()?;
        conn.execute(
            "INSERT INTO trades (id, journal_id, status, date, close_date, created_at, body)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                trade.id,
                trade.journal_id,
                trade.status.to_string(),
                trade.date.map(|d| format_date_key(&d)),
                trade.close_date.map(|d| format_date_key(&d)),
                trade.created_at.to_rfc3339(),
                body,
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to add trade: {e}")))?;
        Ok(())
    }

    fn update_trade(&self, trade: &Trade) -> Result<(), DomainError> {
        let body = Self::encode(trade)?;
        let conn = self.store.lock()?;
        let rows = conn.execute(
            "UPDATE trades SET journal_id = ?1, status = ?2, date = ?3, close_date = ?4, body = ?5 WHERE id = ?6",
            params![
                trade.journal_id,
                trade.status.to_string(),
                trade.date.map(|d| format_date_key(&d)),
                trade.close_date.map(|d| format_date_key(&d)),
                body,
                trade.id,
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to update trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {}", trade.id)));
        }
        Ok(())
    }

    fn delete_trade(&self, id: &str) -> Result<(), DomainError> {
        let conn = self.store.lock()?;
        let rows = conn
            .execute("DELETE FROM trades WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete trade: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Trade not found: {id}")));
        }
        Ok(())
    }

    fn get_trade(&self, id: &str) -> Result<Option<Trade>, DomainError> {
        let conn = self.store.lock()?;
        let body: Option<String> = conn
            .query_row("SELECT body FROM trades WHERE id = ?1", params![id], |row| row.get(0))
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        body.map(|body| {
            serde_json::from_str(&body)
                .map_err(|e| DomainError::Parse(format!("Unreadable trade {id}: {e}")))
        })
        .transpose()
    }

    fn list_trades(&self, filter: &TradeFilter) -> Result<Vec<Trade>, DomainError> {
        let conn = self.store.lock()?;
        let mut sql = String::from("SELECT id, body FROM trades WHERE 1=1");
        let mut param_values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

        if let Some(journal_id) = &filter.journal_id {
            sql.push_str(&format!(" AND journal_id = ?{}", param_values.len() + 1));
            param_values.push(Box::new(journal_id.clone()));
        }
        if let Some(status) = filter.status {
            sql.push_str(&format!(" AND status = ?{}", param_values.len() + 1));
            param_values.push(Box::new(status.to_string()));
        }
        if let Some(day) = filter.day {
            sql.push_str(&format!(" AND COALESCE(close_date, date) = ?{}", param_values.len() + 1));
            param_values.push(Box::new(format_date_key(&day)));
        }
        sql.push_str(" ORDER BY created_at ASC");
        if let Some(limit) = filter.limit {
            sql.push_str(&format!(" LIMIT ?{}", param_values.len() + 1));
            param_values.push(Box::new(limit as i64));
        }

        let params_refs: Vec<&dyn rusqlite::types::ToSql> =
            param_values.iter().map(|p| p.as_ref()).collect();
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let trades = stmt
            .query_map(params_refs.as_slice(), Self::row_to_trade)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(trades)
    }

    fn count_trades(&self, journal_id: &str) -> Result<usize, DomainError> {
        let conn = self.store.lock()?;
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM trades WHERE journal_id = ?1",
                params![journal_id],
                |row| row.get(0),
            )
            .map_err(|e| DomainError::Database(e.to_string()))?;
        Ok(count as usize)
    }
}
