use std::collections::HashMap;

use tracing::debug;

use crate::catalog::Catalog;
use crate::error::ChecklistError;
use crate::model::{
    AnswerState, Category, ChecklistItem, ComplianceMetrics, EvidenceAttachment,
};

mod evidence;

pub use evidence::{EvidenceLimits, evidence_allowed};

/// What a presentation layer chooses to show. Never affects state or metrics.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum DisplayFilter {
    #[default]
    All,
    OnlyNonCompliant,
}

impl DisplayFilter {
    pub fn admits(self, answer: AnswerState) -> bool {
        match self {
            Self::All => true,
            Self::OnlyNonCompliant => answer == AnswerState::NonCompliant,
        }
    }
}

/// Per-session answers, notes and evidence, keyed by catalog item id.
#[derive(Debug)]
pub struct VerificationStore<'c> {
    catalog: &'c Catalog,
    answers: HashMap<String, AnswerState>,
    notes: HashMap<String, String>,
    evidence: HashMap<String, Vec<EvidenceAttachment>>,
    limits: EvidenceLimits,
}

impl<'c> VerificationStore<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self::with_limits(catalog, EvidenceLimits::default())
    }

    pub fn with_limits(catalog: &'c Catalog, limits: EvidenceLimits) -> Self {
        let mut answers = HashMap::with_capacity(catalog.item_count());
        let mut notes = HashMap::with_capacity(catalog.item_count());
        let mut evidence = HashMap::with_capacity(catalog.item_count());

        for (_, item) in catalog.items() {
            answers.insert(item.id.clone(), AnswerState::Unanswered);
            notes.insert(item.id.clone(), String::new());
            evidence.insert(item.id.clone(), Vec::new());
        }

        Self {
            catalog,
            answers,
            notes,
            evidence,
            limits,
        }
    }

    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    pub fn set_answer(
        &mut self,
        item_id: &str,
        answer: AnswerState,
    ) -> Result<(), ChecklistError> {
        self.ensure_known(item_id)?;
        self.answers.insert(item_id.to_string(), answer);
        debug!(item = item_id, answer = %answer, "answer recorded");
        Ok(())
    }

    pub fn set_note(
        &mut self,
        item_id: &str,
        text: impl Into<String>,
    ) -> Result<(), ChecklistError> {
        self.ensure_known(item_id)?;
        let text = text.into();
        debug!(item = item_id, chars = text.chars().count(), "note recorded");
        self.notes.insert(item_id.to_string(), text);
        Ok(())
    }

    pub fn answer(&self, item_id: &str) -> AnswerState {
        self.answers.get(item_id).copied().unwrap_or_default()
    }

    pub fn note(&self, item_id: &str) -> &str {
        self.notes.get(item_id).map(String::as_str).unwrap_or("")
    }

    /// Counts over every catalog item, regardless of any display filter.
    pub fn metrics(&self) -> ComplianceMetrics {
        ComplianceMetrics::tally(
            self.catalog
                .items()
                .map(|(_, item)| self.answer(&item.id)),
        )
    }

    /// Catalog-ordered items passing `filter`, with their current answer.
    pub fn visible_items(
        &self,
        filter: DisplayFilter,
    ) -> impl Iterator<Item = (&'c Category, &'c ChecklistItem, AnswerState)> {
        let catalog: &'c Catalog = self.catalog;
        catalog
            .items()
            .map(move |(category, item)| (category, item, self.answer(&item.id)))
            .filter(move |(_, _, answer)| filter.admits(*answer))
    }

    fn ensure_known(&self, item_id: &str) -> Result<(), ChecklistError> {
        if self.catalog.contains(item_id) {
            Ok(())
        } else {
            Err(ChecklistError::UnknownItemId(item_id.to_string()))
        }
    }
}
