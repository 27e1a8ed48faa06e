use std::io::Cursor;

use super::*;
use crate::catalog::Catalog;
use crate::model::{Applicability, Category, ChecklistItem};
use crate::store::VerificationStore;

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image::DynamicImage::new_rgb8(width, height)
        .write_to(&mut buf, image::ImageFormat::Png)
        .expect("png encoding should succeed");
    buf.into_inner()
}

fn single_item_catalog() -> Catalog {
    Catalog::new(
        "Informe",
        vec![Category {
            name: "INVIMA".to_string(),
            items: vec![ChecklistItem::new(
                "Registro impreso",
                "Número INVIMA impreso",
                "Resolución 5109/2005 Art. 5.7",
                Applicability::FinishedProduct,
            )],
        }],
    )
    .expect("catalog should validate")
}

fn two_category_catalog() -> Catalog {
    let item = |id: &str, reference: &str| {
        ChecklistItem::new(id, "verify", reference, Applicability::Both)
    };
    Catalog::new(
        "Informe",
        vec![
            Category {
                name: "Frontal".to_string(),
                items: vec![item("Lote", "Art. 5.4"), item("Fecha", "Art. 5.5")],
            },
            Category {
                name: "Posterior".to_string(),
                items: vec![item("Ingredientes", "Art. 5.2"), item("Alérgenos", "Art. 5.2")],
            },
        ],
    )
    .expect("catalog should validate")
}

#[test]
fn single_failed_item_with_long_note_and_evidence() {
    let catalog = single_item_catalog();
    let mut store = VerificationStore::new(&catalog);
    store
        .set_answer("Registro impreso", AnswerState::NonCompliant)
        .expect("known item");
    store
        .add_evidence(
            "Registro impreso",
            vec![("photo1.jpg".to_string(), png_bytes(10, 10))],
            Some("blurry"),
        )
        .expect("known item");
    store
        .set_note("Registro impreso", "A".repeat(250))
        .expect("known item");

    let metrics = store.metrics();
    assert_eq!(
        (
            metrics.compliant,
            metrics.non_compliant,
            metrics.not_applicable,
            metrics.unanswered,
            metrics.answered,
            metrics.percent,
        ),
        (0, 1, 0, 0, 1, 0.0)
    );

    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    assert_eq!(report.rows.len(), 1);
    let row = &report.rows[0];
    assert_eq!(row.status_label, "No cumple");
    assert_eq!(row.reference, "Resolución 5109/2005 Art. 5.7");
    assert_eq!(row.note_lines.len(), 3);
    assert!(row.note_lines.iter().all(|line| line.chars().count() <= 110));

    let appendix = report.evidence.as_ref().expect("evidence appendix expected");
    assert!(appendix.page_break_before);
    assert_eq!(appendix.sections.len(), 1);
    assert_eq!(appendix.sections[0].item, "Registro impreso");
    match &appendix.sections[0].figures[0] {
        EvidenceFigure::Image {
            filename,
            caption,
            format,
            width,
            height,
            sha256,
            ..
        } => {
            assert_eq!(filename, "photo1.jpg");
            assert_eq!(caption.as_deref(), Some("blurry"));
            assert_eq!(format, "png");
            assert_eq!((*width, *height), (10, 10));
            assert_eq!(sha256.len(), 64);
        }
        other => panic!("expected decoded image, got {other:?}"),
    }
}

#[test]
fn percent_over_mixed_answers() {
    let catalog = two_category_catalog();
    let mut store = VerificationStore::new(&catalog);
    store.set_answer("Lote", AnswerState::Compliant).expect("known item");
    store.set_answer("Fecha", AnswerState::NonCompliant).expect("known item");
    store
        .set_answer("Ingredientes", AnswerState::NotApplicable)
        .expect("known item");

    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    assert_eq!(report.summary.percent, 50.0);
    assert_eq!(report.summary.not_applicable, 1);
    let summary = report.summary;
    assert_eq!(summary.compliant + summary.non_compliant + summary.not_applicable, 3);
    assert_eq!(report.rows[3].status_label, "Sin responder");
}

#[test]
fn rows_follow_catalog_order_regardless_of_update_order() {
    let catalog = two_category_catalog();
    let mut store = VerificationStore::new(&catalog);
    store.set_note("Alérgenos", "falta gluten").expect("known item");
    store.set_answer("Ingredientes", AnswerState::Compliant).expect("known item");
    store.set_answer("Lote", AnswerState::NonCompliant).expect("known item");
    store
        .add_evidence("Alérgenos", vec![("b.png".to_string(), png_bytes(2, 2))], None)
        .expect("known item");
    store
        .add_evidence("Lote", vec![("a.png".to_string(), png_bytes(2, 2))], None)
        .expect("known item");

    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    let items = report
        .rows
        .iter()
        .map(|row| (row.category.as_str(), row.item.as_str()))
        .collect::<Vec<(&str, &str)>>();
    assert_eq!(
        items,
        vec![
            ("Frontal", "Lote"),
            ("Frontal", "Fecha"),
            ("Posterior", "Ingredientes"),
            ("Posterior", "Alérgenos"),
        ]
    );

    let sections = report
        .evidence
        .expect("evidence appendix expected")
        .sections
        .into_iter()
        .map(|section| section.item)
        .collect::<Vec<String>>();
    assert_eq!(sections, vec!["Lote", "Alérgenos"]);
}

#[test]
fn corrupt_image_becomes_placeholder_without_aborting() {
    let catalog = two_category_catalog();
    let mut store = VerificationStore::new(&catalog);
    store.set_answer("Lote", AnswerState::NonCompliant).expect("known item");
    store
        .add_evidence(
            "Lote",
            vec![
                ("broken.jpg".to_string(), b"definitely not an image".to_vec()),
                ("ok.png".to_string(), png_bytes(3, 4)),
            ],
            Some("etiqueta"),
        )
        .expect("known item");

    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    assert_eq!(report.figure_count(), 2);
    assert_eq!(report.placeholder_count(), 1);

    let figures = &report.evidence.as_ref().expect("appendix").sections[0].figures;
    match &figures[0] {
        EvidenceFigure::Placeholder { filename, message } => {
            assert_eq!(filename, "broken.jpg");
            assert!(message.contains("broken.jpg"));
            assert!(message.starts_with("Error al cargar imagen"));
        }
        other => panic!("expected placeholder, got {other:?}"),
    }
    match &figures[1] {
        EvidenceFigure::Image {
            filename,
            width,
            height,
            ..
        } => {
            assert_eq!(filename, "ok.png");
            assert_eq!((*width, *height), (3, 4));
        }
        other => panic!("expected decoded image, got {other:?}"),
    }
}

#[test]
fn stale_evidence_still_renders_after_answer_resolves() {
    let catalog = single_item_catalog();
    let mut store = VerificationStore::new(&catalog);
    store
        .set_answer("Registro impreso", AnswerState::NonCompliant)
        .expect("known item");
    store
        .add_evidence("Registro impreso", vec![("p.png".to_string(), png_bytes(1, 1))], None)
        .expect("known item");
    store
        .set_answer("Registro impreso", AnswerState::Compliant)
        .expect("known item");

    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    assert_eq!(report.summary.percent, 100.0);
    assert_eq!(report.figure_count(), 1);
}

#[test]
fn no_appendix_without_evidence_and_empty_notes_have_no_lines() {
    let catalog = two_category_catalog();
    let store = VerificationStore::new(&catalog);
    let report = assemble(&store, &CoverInfo::default(), &ReportOptions::default());
    assert!(report.evidence.is_none());
    assert!(report.rows.iter().all(|row| row.note_lines.is_empty()));
    assert_eq!(report.columns[0], "Ítem");
}

#[test]
fn cover_block_fills_blanks_and_drops_empty_url() {
    let catalog = single_item_catalog();
    let store = VerificationStore::new(&catalog);
    let cover = CoverInfo {
        report_date: "2025-01-31".to_string(),
        product: "Galletas".to_string(),
        registration_active: true,
        registration_url: Some("   ".to_string()),
        ..CoverInfo::default()
    };

    let report = assemble(&store, &cover, &ReportOptions::default());
    assert_eq!(report.cover.title, "Informe");
    assert_eq!(report.cover.report_date, "2025-01-31");
    assert_eq!(report.cover.product, "Galletas");
    assert_eq!(report.cover.responsible, "-");
    assert_eq!(report.cover.registration_status, "ACTIVO y coincidente");
    assert!(report.cover.registration_url.is_none());
}

#[test]
fn wrap_width_and_labels_are_configurable() {
    let catalog = single_item_catalog();
    let mut store = VerificationStore::new(&catalog);
    store.set_answer("Registro impreso", AnswerState::Compliant).expect("known item");
    store.set_note("Registro impreso", "abcdefghij").expect("known item");

    let options = ReportOptions {
        wrap_width: 4,
        labels: ReportLabels {
            compliant: "Pass".to_string(),
            ..ReportLabels::default()
        },
    };
    let report = assemble(&store, &CoverInfo::default(), &options);
    assert_eq!(report.rows[0].status_label, "Pass");
    assert_eq!(report.rows[0].note_lines, vec!["abcd", "efgh", "ij"]);
}

#[test]
fn assembly_is_deterministic() {
    let catalog = two_category_catalog();
    let mut store = VerificationStore::new(&catalog);
    store.set_answer("Fecha", AnswerState::NonCompliant).expect("known item");
    store
        .add_evidence("Fecha", vec![("f.png".to_string(), png_bytes(2, 2))], Some("x"))
        .expect("known item");

    let render = || {
        serde_json::to_string(&assemble(&store, &CoverInfo::default(), &ReportOptions::default()))
            .expect("report serializes")
    };
    let first = render();
    let second = render();
    assert_eq!(first, second);
    assert!(!first.contains("\"bytes\""));
}
