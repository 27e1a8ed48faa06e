use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerState {
    #[default]
    Unanswered,
    Compliant,
    NonCompliant,
    NotApplicable,
}

impl AnswerState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unanswered => "unanswered",
            Self::Compliant => "compliant",
            Self::NonCompliant => "non_compliant",
            Self::NotApplicable => "not_applicable",
        }
    }
}

impl fmt::Display for AnswerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which kind of product an item applies to.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    FinishedProduct,
    RawMaterial,
    #[default]
    Both,
    Repackaged,
    BulkSale,
}

impl Applicability {
    pub fn label(self) -> &'static str {
        match self {
            Self::FinishedProduct => "Producto terminado",
            Self::RawMaterial => "Materia prima",
            Self::Both => "Ambos",
            Self::Repackaged => "Reenvasado",
            Self::BulkSale => "Venta a granel",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    pub id: String,
    pub verification_text: String,
    pub legal_reference: String,
    #[serde(default)]
    pub applicability: Applicability,
}

impl ChecklistItem {
    pub fn new(
        id: impl Into<String>,
        verification_text: impl Into<String>,
        legal_reference: impl Into<String>,
        applicability: Applicability,
    ) -> Self {
        Self {
            id: id.into(),
            verification_text: verification_text.into(),
            legal_reference: legal_reference.into(),
            applicability,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvidenceAttachment {
    pub filename: String,
    #[serde(skip)]
    pub bytes: Vec<u8>,
    pub caption: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ComplianceMetrics {
    pub compliant: usize,
    pub non_compliant: usize,
    pub not_applicable: usize,
    pub unanswered: usize,
    pub answered: usize,
    pub percent: f64,
}

impl ComplianceMetrics {
    pub fn tally<I>(answers: I) -> Self
    where
        I: IntoIterator<Item = AnswerState>,
    {
        let mut metrics = Self::default();
        for answer in answers {
            match answer {
                AnswerState::Compliant => metrics.compliant += 1,
                AnswerState::NonCompliant => metrics.non_compliant += 1,
                AnswerState::NotApplicable => metrics.not_applicable += 1,
                AnswerState::Unanswered => metrics.unanswered += 1,
            }
        }

        metrics.answered = metrics.compliant + metrics.non_compliant;
        metrics.percent = compliance_percent(metrics.compliant, metrics.answered);
        metrics
    }
}

/// Percentage rounded to one decimal, ties to even; `0.0` when nothing was answered.
///
/// Rounding works on the exact ratio so 1 of 16 gives 6.2, not 6.3.
pub fn compliance_percent(compliant: usize, answered: usize) -> f64 {
    if answered == 0 {
        return 0.0;
    }

    let tenths = compliant * 1000;
    let (mut quotient, remainder) = (tenths / answered, tenths % answered);
    if 2 * remainder > answered || (2 * remainder == answered && quotient % 2 == 1) {
        quotient += 1;
    }
    quotient as f64 / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compliance_percent_breaks_exact_ties_to_even() {
        assert_eq!(compliance_percent(1, 16), 6.2);
        assert_eq!(compliance_percent(3, 16), 18.8);
        assert_eq!(compliance_percent(5, 16), 31.2);
        assert_eq!(compliance_percent(13, 16), 81.2);
    }

    #[test]
    fn compliance_percent_rounds_non_ties_to_nearest() {
        assert_eq!(compliance_percent(2, 3), 66.7);
        assert_eq!(compliance_percent(1, 3), 33.3);
        assert_eq!(compliance_percent(38, 38), 100.0);
        assert_eq!(compliance_percent(0, 0), 0.0);
    }
}
