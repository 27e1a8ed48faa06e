use tracing::{info, warn};

use crate::model::EvidenceAttachment;
use crate::store::VerificationStore;
use crate::util::sha256_bytes;

use super::{
    CoverBlock, CoverInfo, EvidenceAppendix, EvidenceFigure, EvidenceSection, ReportDocument,
    ReportLabels, ReportOptions, ReportRow, wrap_note,
};

/// Builds the report for the store's catalog and current session state.
///
/// Rows and evidence sections follow catalog declaration order. An attachment
/// that fails to decode becomes a placeholder naming the file; the rest of the
/// report is unaffected.
pub fn assemble(
    store: &VerificationStore<'_>,
    cover: &CoverInfo,
    options: &ReportOptions,
) -> ReportDocument {
    let catalog = store.catalog();
    let labels = &options.labels;

    let rows = catalog
        .items()
        .map(|(category, item)| {
            let answer = store.answer(&item.id);
            ReportRow {
                category: category.name.clone(),
                item: item.id.clone(),
                status: answer,
                status_label: labels.status(answer).to_string(),
                note_lines: wrap_note(store.note(&item.id), options.wrap_width),
                reference: item.legal_reference.clone(),
            }
        })
        .collect::<Vec<ReportRow>>();

    let evidence = store.has_any_evidence().then(|| EvidenceAppendix {
        page_break_before: true,
        heading: labels.evidence_heading.clone(),
        subheading: labels.evidence_subheading.clone(),
        sections: evidence_sections(store, labels),
    });

    let document = ReportDocument {
        cover: build_cover(catalog.title(), cover, labels),
        summary: store.metrics(),
        columns: labels.columns.clone(),
        rows,
        evidence,
    };

    info!(
        rows = document.rows.len(),
        percent = document.summary.percent,
        figures = document.figure_count(),
        placeholders = document.placeholder_count(),
        "report assembled"
    );

    document
}

fn evidence_sections(store: &VerificationStore<'_>, labels: &ReportLabels) -> Vec<EvidenceSection> {
    store
        .catalog()
        .items()
        .filter_map(|(_, item)| {
            let attachments = store.evidence(&item.id);
            if attachments.is_empty() {
                return None;
            }

            let figures = attachments
                .iter()
                .map(|attachment| build_figure(&item.id, attachment, labels))
                .collect();
            Some(EvidenceSection {
                item: item.id.clone(),
                figures,
            })
        })
        .collect()
}

fn build_cover(title: &str, cover: &CoverInfo, labels: &ReportLabels) -> CoverBlock {
    let registration_status = if cover.registration_active {
        &labels.registration_active
    } else {
        &labels.registration_unverified
    };

    CoverBlock {
        title: title.to_string(),
        report_date: or_dash(&cover.report_date),
        product: or_dash(&cover.product),
        manufacturer: or_dash(&cover.manufacturer),
        responsible: or_dash(&cover.responsible),
        registration_id: or_dash(&cover.registration_id),
        registration_active: cover.registration_active,
        registration_status: registration_status.clone(),
        registration_url: cover
            .registration_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .map(ToOwned::to_owned),
    }
}

fn build_figure(
    item_id: &str,
    attachment: &EvidenceAttachment,
    labels: &ReportLabels,
) -> EvidenceFigure {
    match image::load_from_memory(&attachment.bytes) {
        Ok(decoded) => EvidenceFigure::Image {
            filename: attachment.filename.clone(),
            caption: attachment.caption.clone(),
            format: image::guess_format(&attachment.bytes)
                .map(|format| format!("{format:?}").to_ascii_lowercase())
                .unwrap_or_else(|_| "unknown".to_string()),
            width: decoded.width(),
            height: decoded.height(),
            byte_len: attachment.bytes.len(),
            sha256: sha256_bytes(&attachment.bytes),
            bytes: attachment.bytes.clone(),
        },
        Err(err) => {
            warn!(
                item = item_id,
                filename = %attachment.filename,
                error = %err,
                "evidence image could not be decoded"
            );
            EvidenceFigure::Placeholder {
                filename: attachment.filename.clone(),
                message: format!("{} {}: {err}", labels.image_error, attachment.filename),
            }
        }
    }
}

fn or_dash(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-".to_string()
    } else {
        trimmed.to_string()
    }
}
