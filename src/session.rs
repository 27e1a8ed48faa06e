use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::error::ChecklistError;
use crate::model::AnswerState;
use crate::store::{VerificationStore, evidence_allowed};

/// Recorded input events for one verification session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionScript {
    #[serde(default)]
    pub events: Vec<SessionEvent>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SessionEvent {
    SetAnswer {
        item: String,
        answer: AnswerState,
    },
    SetNote {
        item: String,
        text: String,
    },
    AddEvidence {
        item: String,
        files: Vec<PathBuf>,
        #[serde(default)]
        caption: Option<String>,
    },
    RemoveEvidence {
        item: String,
        index: usize,
    },
}

impl SessionEvent {
    fn op(&self) -> &'static str {
        match self {
            Self::SetAnswer { .. } => "set_answer",
            Self::SetNote { .. } => "set_note",
            Self::AddEvidence { .. } => "add_evidence",
            Self::RemoveEvidence { .. } => "remove_evidence",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplayStats {
    pub applied: usize,
    pub skipped_evidence: usize,
    pub images_attached: usize,
}

impl SessionScript {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_slice(&raw)
            .with_context(|| format!("failed to parse session script {}", path.display()))
    }
}

/// Applies every event in order. Evidence paths resolve against `base_dir`.
///
/// Evidence for an item whose current answer does not allow it is skipped with
/// a warning, the same way the form only offers the uploader for failed items.
pub fn replay(
    store: &mut VerificationStore<'_>,
    script: &SessionScript,
    base_dir: &Path,
) -> Result<ReplayStats> {
    let mut stats = ReplayStats::default();

    for (idx, event) in script.events.iter().enumerate() {
        let position = idx + 1;
        let outcome = match event {
            SessionEvent::SetAnswer { item, answer } => store.set_answer(item, *answer),
            SessionEvent::SetNote { item, text } => store.set_note(item, text.as_str()),
            SessionEvent::AddEvidence {
                item,
                files,
                caption,
            } => {
                if !store.catalog().contains(item) {
                    return Err(ChecklistError::UnknownItemId(item.clone())).with_context(|| {
                        format!("session event #{position} (add_evidence) failed")
                    });
                }
                let answer = store.answer(item);
                if !evidence_allowed(answer) {
                    warn!(
                        event = position,
                        item = %item,
                        answer = %answer,
                        "evidence skipped: item is not marked non-compliant"
                    );
                    stats.skipped_evidence += 1;
                    continue;
                }

                let images = read_images(files, base_dir)
                    .with_context(|| format!("session event #{position} (add_evidence)"))?;
                store
                    .add_evidence(item, images, caption.as_deref())
                    .map(|added| stats.images_attached += added)
            }
            SessionEvent::RemoveEvidence { item, index } => {
                store.remove_evidence(item, *index).map(|_| ())
            }
        };
        outcome.with_context(|| format!("session event #{position} ({}) failed", event.op()))?;

        stats.applied += 1;
    }

    info!(
        applied = stats.applied,
        skipped_evidence = stats.skipped_evidence,
        images = stats.images_attached,
        "session replayed"
    );

    Ok(stats)
}

fn read_images(files: &[PathBuf], base_dir: &Path) -> Result<Vec<(String, Vec<u8>)>> {
    files
        .iter()
        .map(|file| {
            let path = base_dir.join(file);
            let bytes =
                fs::read(&path).with_context(|| format!("failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.display().to_string());
            Ok((filename, bytes))
        })
        .collect()
}
