use crate::domain::entities::confluence_template::ConfluenceTemplate;
use crate::domain::entities::journal::Journal;
use crate::domain::error::DomainError;

pub trait JournalRepository: Send + Sync {
    fn add_journal(&self, journal: &Journal) -> Result<(), DomainError>;
    fn update_journal(&self, journal: &Journal) -> Result<(), DomainError>;
    /// Removes the journal together with its trades and checklist.
    fn delete_journal(&self, id: &str) -> Result<(), DomainError>;
    fn get_journal(&self, id: &str) -> Result<Option<Journal>, DomainError>;
    fn list_journals(&self) -> Result<Vec<Journal>, DomainError>;
    fn get_template(&self, journal_id: &str) -> Result<Option<ConfluenceTemplate>, DomainError>;
    fn save_template(&self, template: &ConfluenceTemplate) -> Result<(), DomainError>;
}
