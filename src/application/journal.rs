use crate::domain::entities::confluence_template::ConfluenceTemplate;
use crate::domain::entities::journal::Journal;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::values::market_type::MarketType;
use std::sync::Arc;

pub struct JournalUseCase {
    repo: Arc<dyn JournalRepository>,
}

/// Fetch a journal or fail with `NotFound`.
pub(crate) fn require_journal(
    repo: &dyn JournalRepository,
    id: &str,
) -> Result<Journal, DomainError> {
    repo.get_journal(id)?
        .ok_or_else(|| DomainError::NotFound(format!("Journal not found: {id}")))
}

fn clean_name(name: &str) -> Result<String, DomainError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::InvalidInput("Journal name must not be empty".into()));
    }
    Ok(name.to_string())
}

impl JournalUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    /// Create a journal with the default confluence checklist.
    pub fn create(&self, name: &str) -> Result<Journal, DomainError> {
        let journal = Journal::new(clean_name(name)?);
        self.repo.add_journal(&journal)?;
        self.repo.save_template(&ConfluenceTemplate::default_for(&journal.id))?;
        tracing::info!(journal_id = %journal.id, name = %journal.name, "created journal");
        Ok(journal)
    }

    pub fn list(&self) -> Result<Vec<Journal>, DomainError> {
        self.repo.list_journals()
    }

    pub fn get(&self, id: &str) -> Result<Journal, DomainError> {
        require_journal(self.repo.as_ref(), id)
    }

    pub fn rename(&self, id: &str, name: &str) -> Result<Journal, DomainError> {
        let mut journal = self.get(id)?;
        journal.name = clean_name(name)?;
        self.repo.update_journal(&journal)?;
        Ok(journal)
    }

    pub fn delete(&self, id: &str) -> Result<(), DomainError> {
        self.repo.delete_journal(id)?;
        tracing::info!(journal_id = id, "deleted journal and its trades");
        Ok(())
    }

    pub fn set_instrument_value(
        &self,
        id: &str,
        instrument: &str,
        market_type: MarketType,
        value: f64,
    ) -> Result<Journal, DomainError> {
        let instrument = instrument.trim();
        if instrument.is_empty() {
            return Err(DomainError::InvalidInput("Instrument must not be empty".into()));
        }
        if value == 0.0 || !value.is_finite() {
            return Err(DomainError::InvalidInput(format!(
                "Instrument value must be a non-zero number, got {value}"
            )));
        }
        let mut journal = self.get(id)?;
        journal.set_instrument_value(instrument.to_string(), market_type, value);
        self.repo.update_journal(&journal)?;
        Ok(journal)
    }

    pub fn remove_instrument_value(
        &self,
        id: &str,
        instrument: &str,
        market_type: MarketType,
    ) -> Result<Journal, DomainError> {
        let mut journal = self.get(id)?;
        if !journal.remove_instrument_value(instrument.trim(), market_type) {
            return Err(DomainError::NotFound(format!(
                "No saved value for {instrument} ({market_type})"
            )));
        }
        self.repo.update_journal(&journal)?;
        Ok(journal)
    }
}
