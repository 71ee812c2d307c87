use crate::application::journal::require_journal;
use crate::domain::entities::confluence_template::ConfluenceTemplate;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use std::sync::Arc;

pub struct TemplateUseCase {
    repo: Arc<dyn JournalRepository>,
}

/// Load a journal's checklist, saving the default one first if the
/// journal has none yet.
pub(crate) fn load_template(
    repo: &dyn JournalRepository,
    journal_id: &str,
) -> Result<ConfluenceTemplate, DomainError> {
    if let Some(template) = repo.get_template(journal_id)? {
        return Ok(template);
    }
    require_journal(repo, journal_id)?;
    let template = ConfluenceTemplate::default_for(journal_id);
    repo.save_template(&template)?;
    tracing::debug!(journal_id, "saved default confluence checklist");
    Ok(template)
}

fn clean_label(label: &str) -> Result<String, DomainError> {
    let label = label.trim();
    if label.is_empty() {
        return Err(DomainError::InvalidInput("Checklist label must not be empty".into()));
    }
    Ok(label.to_string())
}

impl TemplateUseCase {
    pub fn new(repo: Arc<dyn JournalRepository>) -> Self {
        Self { repo }
    }

    pub fn get(&self, journal_id: &str) -> Result<ConfluenceTemplate, DomainError> {
        load_template(self.repo.as_ref(), journal_id)
    }

    pub fn add_item(&self, journal_id: &str, label: &str) -> Result<ConfluenceTemplate, DomainError> {
        let label = clean_label(label)?;
        let mut template = self.get(journal_id)?;
        template.add_item(label);
        self.repo.save_template(&template)?;
        Ok(template)
    }

    pub fn rename_item(
        &self,
        journal_id: &str,
        item_id: &str,
        label: &str,
    ) -> Result<ConfluenceTemplate, DomainError> {
        let label = clean_label(label)?;
        let mut template = self.get(journal_id)?;
        if !template.rename_item(item_id, label) {
            return Err(DomainError::NotFound(format!("Checklist item not found: {item_id}")));
        }
        self.repo.save_template(&template)?;
        Ok(template)
    }

    /// Moving past either end leaves the checklist unchanged.
    pub fn move_item(
        &self,
        journal_id: &str,
        index: usize,
        delta: isize,
    ) -> Result<ConfluenceTemplate, DomainError> {
        let mut template = self.get(journal_id)?;
        if template.move_item(index, delta) {
            self.repo.save_template(&template)?;
        }
        Ok(template)
    }

    pub fn remove_item(&self, journal_id: &str, index: usize) -> Result<ConfluenceTemplate, DomainError> {
        let mut template = self.get(journal_id)?;
        if template.remove_item(index).is_none() {
            return Err(DomainError::NotFound(format!("No checklist item at position {index}")));
        }
        self.repo.save_template(&template)?;
        Ok(template)
    }
}
