use serde::{Deserialize, Serialize};

use crate::model::{AnswerState, ComplianceMetrics};

mod assemble;
#[cfg(test)]
mod tests;
mod wrap;

pub use assemble::assemble;
pub use wrap::wrap_note;

pub const DEFAULT_WRAP_WIDTH: usize = 110;

/// Verification metadata supplied by the caller. Not validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CoverInfo {
    pub report_date: String,
    pub product: String,
    pub manufacturer: String,
    pub responsible: String,
    pub registration_id: String,
    pub registration_active: bool,
    pub registration_url: Option<String>,
}

/// Locale text used by the assembled document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportLabels {
    pub compliant: String,
    pub non_compliant: String,
    pub not_applicable: String,
    pub unanswered: String,
    pub registration_active: String,
    pub registration_unverified: String,
    pub columns: [String; 4],
    pub evidence_heading: String,
    pub evidence_subheading: String,
    pub image_error: String,
}

impl Default for ReportLabels {
    fn default() -> Self {
        Self {
            compliant: "Cumple".to_string(),
            non_compliant: "No cumple".to_string(),
            not_applicable: "No aplica".to_string(),
            unanswered: "Sin responder".to_string(),
            registration_active: "ACTIVO y coincidente".to_string(),
            registration_unverified: "No verificado/No activo".to_string(),
            columns: [
                "Ítem".to_string(),
                "Estado".to_string(),
                "Observación".to_string(),
                "Referencia".to_string(),
            ],
            evidence_heading: "Evidencia fotográfica".to_string(),
            evidence_subheading: "Evidencia de incumplimiento".to_string(),
            image_error: "Error al cargar imagen".to_string(),
        }
    }
}

impl ReportLabels {
    pub fn status(&self, answer: AnswerState) -> &str {
        match answer {
            AnswerState::Compliant => &self.compliant,
            AnswerState::NonCompliant => &self.non_compliant,
            AnswerState::NotApplicable => &self.not_applicable,
            AnswerState::Unanswered => &self.unanswered,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub wrap_width: usize,
    pub labels: ReportLabels,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            labels: ReportLabels::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub cover: CoverBlock,
    pub summary: ComplianceMetrics,
    pub columns: [String; 4],
    pub rows: Vec<ReportRow>,
    pub evidence: Option<EvidenceAppendix>,
}

impl ReportDocument {
    pub fn figure_count(&self) -> usize {
        self.figures().count()
    }

    pub fn placeholder_count(&self) -> usize {
        self.figures()
            .filter(|figure| matches!(figure, EvidenceFigure::Placeholder { .. }))
            .count()
    }

    fn figures(&self) -> impl Iterator<Item = &EvidenceFigure> {
        self.evidence
            .iter()
            .flat_map(|appendix| appendix.sections.iter())
            .flat_map(|section| section.figures.iter())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CoverBlock {
    pub title: String,
    pub report_date: String,
    pub product: String,
    pub manufacturer: String,
    pub responsible: String,
    pub registration_id: String,
    pub registration_active: bool,
    pub registration_status: String,
    pub registration_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub category: String,
    pub item: String,
    pub status: AnswerState,
    pub status_label: String,
    pub note_lines: Vec<String>,
    pub reference: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceAppendix {
    pub page_break_before: bool,
    pub heading: String,
    pub subheading: String,
    pub sections: Vec<EvidenceSection>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvidenceSection {
    pub item: String,
    pub figures: Vec<EvidenceFigure>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EvidenceFigure {
    Image {
        filename: String,
        caption: Option<String>,
        format: String,
        width: u32,
        height: u32,
        byte_len: usize,
        sha256: String,
        #[serde(skip)]
        bytes: Vec<u8>,
    },
    Placeholder {
        filename: String,
        message: String,
    },
}
