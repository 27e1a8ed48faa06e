use std::io::{self, Write};

use crate::report::{EvidenceFigure, ReportDocument};

const PAGE_BREAK: &str = "<div style=\"page-break-before: always\"></div>";

/// File name under which a decoded figure is exported next to the Markdown report.
pub fn asset_file_name(sha256: &str, format: &str) -> String {
    let prefix = sha256.get(..16).unwrap_or(sha256);
    format!("{prefix}.{format}")
}

/// Fixed-column Markdown rendering: cover, summary, item table, evidence appendix.
///
/// With `asset_dir`, image links point at exported copies in that directory
/// instead of the original file names.
pub fn write_markdown<W: Write>(
    out: &mut W,
    document: &ReportDocument,
    asset_dir: Option<&str>,
) -> io::Result<()> {
    let cover = &document.cover;

    writeln!(out, "# {}", cover.title)?;
    writeln!(out)?;
    writeln!(out, "- **Fecha:** {}", cover.report_date)?;
    writeln!(out, "- **Producto:** {}", cover.product)?;
    writeln!(out, "- **Responsable:** {}", cover.responsible)?;
    writeln!(out, "- **Fabricante/Importador:** {}", cover.manufacturer)?;
    writeln!(out, "- **Registro INVIMA:** {}", cover.registration_id)?;
    writeln!(out, "- **Estado:** {}", cover.registration_status)?;
    if let Some(url) = &cover.registration_url {
        writeln!(out, "- **Consulta:** {url}")?;
    }
    writeln!(out)?;

    let summary = &document.summary;
    writeln!(
        out,
        "**Cumplimiento total (sobre ítems contestados):** {:.1}%",
        summary.percent
    )?;
    writeln!(
        out,
        "CUMPLE: {} — NO CUMPLE: {} — NO APLICA: {} — SIN RESPONDER: {}",
        summary.compliant, summary.non_compliant, summary.not_applicable, summary.unanswered
    )?;
    writeln!(out)?;

    let header = document
        .columns
        .iter()
        .map(|column| cell(column))
        .collect::<Vec<String>>();
    writeln!(out, "| {} |", header.join(" | "))?;
    writeln!(out, "|{}", "---|".repeat(header.len()))?;
    for row in &document.rows {
        let note = if row.note_lines.is_empty() {
            "-".to_string()
        } else {
            row.note_lines
                .iter()
                .map(|line| cell(line))
                .collect::<Vec<String>>()
                .join("<br>")
        };
        writeln!(
            out,
            "| {} | {} | {} | {} |",
            cell(&row.item),
            cell(&row.status_label),
            note,
            cell(&row.reference)
        )?;
    }

    let Some(appendix) = &document.evidence else {
        return Ok(());
    };

    writeln!(out)?;
    if appendix.page_break_before {
        writeln!(out, "{PAGE_BREAK}")?;
        writeln!(out)?;
    }
    writeln!(out, "## {}", appendix.heading)?;
    for section in &appendix.sections {
        writeln!(out)?;
        writeln!(out, "### Ítem: {}", section.item)?;
        writeln!(out)?;
        writeln!(out, "**{}:**", appendix.subheading)?;
        writeln!(out)?;
        for figure in &section.figures {
            match figure {
                EvidenceFigure::Image {
                    filename,
                    caption,
                    format,
                    width,
                    height,
                    sha256,
                    ..
                } => {
                    let target = match asset_dir {
                        Some(dir) => format!("{dir}/{}", asset_file_name(sha256, format)),
                        None => filename.clone(),
                    };
                    writeln!(
                        out,
                        "![{}]({target}) ({width}x{height})",
                        inline(caption.as_deref().unwrap_or(filename))
                    )?;
                    if let Some(caption) = caption {
                        writeln!(out)?;
                        writeln!(out, "{}", inline(caption))?;
                    }
                }
                EvidenceFigure::Placeholder { message, .. } => {
                    writeln!(out, "> ⚠️ *{}*", inline(message))?;
                }
            }
            writeln!(out)?;
        }
    }

    Ok(())
}

pub fn markdown(document: &ReportDocument, asset_dir: Option<&str>) -> io::Result<String> {
    let mut buf = Vec::new();
    write_markdown(&mut buf, document, asset_dir)?;
    String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
}

fn cell(value: &str) -> String {
    value.replace('|', "\\|").replace('\n', " ")
}

/// Single-line text that cannot close an image link.
fn inline(value: &str) -> String {
    value
        .replace('[', "\\[")
        .replace(']', "\\]")
        .replace(['\r', '\n'], " ")
}
