use tracing::debug;

use crate::error::ChecklistError;
use crate::model::{AnswerState, EvidenceAttachment};

use super::VerificationStore;

/// Evidence only documents a failed item, so it is offered for `NonCompliant` answers alone.
pub fn evidence_allowed(answer: AnswerState) -> bool {
    answer == AnswerState::NonCompliant
}

/// Optional bounds on in-memory evidence. `None` means unbounded.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct EvidenceLimits {
    pub max_per_item: Option<usize>,
    pub max_image_bytes: Option<usize>,
}

impl EvidenceLimits {
    fn check(
        &self,
        item_id: &str,
        existing: usize,
        images: &[(String, Vec<u8>)],
    ) -> Result<(), ChecklistError> {
        if let Some(max) = self.max_per_item {
            let total = existing + images.len();
            if total > max {
                return Err(ChecklistError::EvidenceLimitExceeded {
                    item_id: item_id.to_string(),
                    reason: format!("{total} attachments exceed the limit of {max}"),
                });
            }
        }

        if let Some(max) = self.max_image_bytes {
            if let Some((filename, bytes)) = images.iter().find(|(_, bytes)| bytes.len() > max) {
                return Err(ChecklistError::EvidenceLimitExceeded {
                    item_id: item_id.to_string(),
                    reason: format!("{filename} is {} bytes, limit is {max}", bytes.len()),
                });
            }
        }

        Ok(())
    }
}

impl VerificationStore<'_> {
    /// Appends one attachment per image, in call order, sharing `caption`.
    ///
    /// Content is not inspected here; unreadable images surface when the report
    /// is assembled. When limits are configured the whole call is rejected
    /// before anything is appended.
    pub fn add_evidence<I>(
        &mut self,
        item_id: &str,
        images: I,
        caption: Option<&str>,
    ) -> Result<usize, ChecklistError>
    where
        I: IntoIterator<Item = (String, Vec<u8>)>,
    {
        self.ensure_known(item_id)?;

        let images = images.into_iter().collect::<Vec<(String, Vec<u8>)>>();
        let existing = self.evidence(item_id).len();
        self.limits.check(item_id, existing, &images)?;

        let caption = caption
            .filter(|value| !value.trim().is_empty())
            .map(ToOwned::to_owned);
        let added = images.len();

        let list = self.evidence.entry(item_id.to_string()).or_default();
        list.extend(
            images
                .into_iter()
                .map(|(filename, bytes)| EvidenceAttachment {
                    filename,
                    bytes,
                    caption: caption.clone(),
                }),
        );

        debug!(item = item_id, added, total = list.len(), "evidence attached");
        Ok(added)
    }

    pub fn evidence(&self, item_id: &str) -> &[EvidenceAttachment] {
        self.evidence
            .get(item_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn remove_evidence(
        &mut self,
        item_id: &str,
        index: usize,
    ) -> Result<EvidenceAttachment, ChecklistError> {
        self.ensure_known(item_id)?;

        let list = self.evidence.entry(item_id.to_string()).or_default();
        if index >= list.len() {
            return Err(ChecklistError::IndexOutOfRange {
                item_id: item_id.to_string(),
                index,
                len: list.len(),
            });
        }

        let removed = list.remove(index);
        debug!(item = item_id, index, filename = %removed.filename, "evidence removed");
        Ok(removed)
    }

    pub fn has_any_evidence(&self) -> bool {
        self.evidence.values().any(|list| !list.is_empty())
    }
}
