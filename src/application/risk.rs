use crate::application::journal::require_journal;
use crate::domain::error::DomainError;
use crate::domain::ports::journal_repository::JournalRepository;
use crate::domain::values::market_type::MarketType;
use crate::domain::values::position_size::{guidance, RiskGuidance, RiskInputs};
use std::sync::Arc;

pub struct RiskUseCase {
    journals: Arc<dyn JournalRepository>,
}

impl RiskUseCase {
    pub fn new(journals: Arc<dyn JournalRepository>) -> Self {
        Self { journals }
    }

    /// Sizing guidance using the journal's saved value for the instrument.
    pub fn guidance(
        &self,
        journal_id: &str,
        inputs: &RiskInputs,
        market_type: MarketType,
    ) -> Result<RiskGuidance, DomainError> {
        let journal = require_journal(self.journals.as_ref(), journal_id)?;
        let value = inputs
            .instrument
            .as_deref()
            .and_then(|i| journal.instrument_value(i.trim(), market_type));
        Ok(guidance(inputs, value))
    }
}
