use crate::domain::entities::confluence_template::{ChecklistItem, ConfluenceTemplate};
use crate::domain::entities::journal::Journal;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::infrastructure::sqlite::store::SqliteStore;
use chrono::DateTime;
use rusqlite::{params, OptionalExtension};

const SELECT_COLS: &str = "id, name, created_at, trade_count, instrument_values";

pub struct SqliteJournalRepo {
    store: SqliteStore,
}

impl SqliteJournalRepo {
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }

    fn row_to_journal(row: &rusqlite::Row) -> Result<Journal, rusqlite::Error> {
        let created_str: String = row.get(2)?;
        let trade_count: i64 = row.get(3)?;
        let values_str: String = row.get(4)?;

        Ok(Journal {
            id: row.get(0)?,
            name: row.get(1)?,
            created_at: DateTime::parse_from_rfc3339(&created_str)
                .map(|dt| dt.with_timezone(&chrono::Utc))
                .unwrap_or_else(|_| chrono::Utc::now()),
            trade_count: trade_count.max(0) as usize,
            instrument_values: serde_json::from_str(&values_str).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "invalid instrument values in journal, ignoring");
                Vec::new()
            }),
        })
    }

    fn encode_values(journal: &Journal) -> Result<String, DomainError> {
        serde_json::to_string(&journal.instrument_values)
            .map_err(|e| DomainError::Database(format!("Failed to encode instrument values: {e}")))
    }
}

impl JournalRepository for SqliteJournalRepo {
    fn add_journal(&self, journal: &Journal) -> Result<(), DomainError> {
        let values = Self::encode_values(journal)?;
        let conn = self.store.lock()?;
        conn.execute(
            "INSERT INTO journals (id, name, created_at, trade_count, instrument_values)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                journal.id,
                journal.name,
                journal.created_at.to_rfc3339(),
                journal.trade_count as i64,
                values,
            ],
        ).map_err(|e| DomainError::Database(format!("Failed to add journal: {e}")))?;
        Ok(())
    }

    fn update_journal(&self, journal: &Journal) -> Result<(), DomainError> {
        let values = Self::encode_values(journal)?;
        let conn = self.store.lock()?;
        let rows = conn.execute(
            "UPDATE journals SET name = ?1, trade_count = ?2, instrument_values = ?3 WHERE id = ?4",
            params![journal.name, journal.trade_count as i64, values, journal.id],
        ).map_err(|e| DomainError::Database(format!("Failed to update journal: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Journal not found: {}", journal.id)));
        }
        Ok(())
    }

    fn delete_journal(&self, id: &str) -> Result<(), DomainError> {
        let mut conn = self.store.lock()?;
        let tx = conn
            .transaction()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let rows = tx
            .execute("DELETE FROM journals WHERE id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete journal: {e}")))?;
        if rows == 0 {
            return Err(DomainError::NotFound(format!("Journal not found: {id}")));
        }
        let trades = tx
            .execute("DELETE FROM trades WHERE journal_id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete journal trades: {e}")))?;
        tx.execute("DELETE FROM confluence_templates WHERE journal_id = ?1", params![id])
            .map_err(|e| DomainError::Database(format!("Failed to delete checklist: {e}")))?;
        tx.commit()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        tracing::debug!(journal_id = id, trades, "deleted journal");
        Ok(())
    }

    fn get_journal(&self, id: &str) -> Result<Option<Journal>, DomainError> {
        let conn = self.store.lock()?;
        conn.query_row(
            &format!("SELECT {SELECT_COLS} FROM journals WHERE id = ?1"),
            params![id],
            Self::row_to_journal,
        )
        .optional()
        .map_err(|e| DomainError::Database(e.to_string()))
    }

    fn list_journals(&self) -> Result<Vec<Journal>, DomainError> {
        let conn = self.store.lock()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {SELECT_COLS} FROM journals ORDER BY created_at ASC"))
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let journals = stmt
            .query_map([], Self::row_to_journal)
            .map_err(|e| DomainError::Database(e.to_string()))?
            .filter_map(|r| r.ok())
            .collect();
        Ok(journals)
    }

    fn get_template(&self, journal_id: &str) -> Result<Option<ConfluenceTemplate>, DomainError> {
        let conn = self.store.lock()?;
        let items: Option<String> = conn
            .query_row(
                "SELECT items FROM confluence_templates WHERE journal_id = ?1",
                params![journal_id],
                |row| row.get(0),
            )
            .optional()
            .map_err(|e| DomainError::Database(e.to_string()))?;
        let Some(items) = items else {
            return Ok(None);
        };
        let items: Vec<ChecklistItem> = serde_json::from_str(&items)
            .map_err(|e| DomainError::Parse(format!("Invalid checklist for {journal_id}: {e}")))?;
        Ok(Some(ConfluenceTemplate {
            journal_id: journal_id.to_string(),
            items,
        }))
    }

    fn save_template(&self, template: &ConfluenceTemplate) -> Result<(), DomainError> {
        let items = serde_json::to_string(&template.items)
            .map_err(|e| DomainError::Database(format!("Failed to encode checklist: {e}")))?;
        let conn = self.store.lock()?;
        conn.execute(
            "INSERT INTO confluence_templates (journal_id, items) VALUES (?1, ?2)
             ON CONFLICT(journal_id) DO UPDATE SET items = excluded.items",
            params![template.journal_id, items],
        ).map_err(|e| DomainError::Database(format!("Failed to save checklist: {e}")))?;
        Ok(())
    }
}
