use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::Serialize;
use tracing::info;

use crate::cli::ReportArgs;
use crate::commands::{load_catalog, replay_session};
use crate::render;
use crate::report::{CoverInfo, EvidenceFigure, ReportDocument, ReportOptions, assemble};
use crate::util::{
    default_report_stem, ensure_directory, now_utc_string, sanitize_file_stem, today_string,
    write_file, write_json_pretty,
};

#[derive(Debug, Serialize)]
struct ReportExport<'a> {
    manifest_version: u32,
    generated_at: String,
    session_path: String,
    document: &'a ReportDocument,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub json: PathBuf,
    pub markdown: PathBuf,
    pub assets: Option<PathBuf>,
}

pub fn run(args: ReportArgs) -> Result<()> {
    let paths = export(&args)?;
    info!(
        json = %paths.json.display(),
        markdown = %paths.markdown.display(),
        assets = %paths.assets.as_deref().map(|dir| dir.display().to_string()).unwrap_or_default(),
        "report written"
    );
    Ok(())
}

pub fn export(args: &ReportArgs) -> Result<ReportPaths> {
    let catalog = load_catalog(&args.session)?;
    let store = replay_session(&catalog, &args.session)?;

    let cover = CoverInfo {
        report_date: args.report_date.clone().unwrap_or_else(today_string),
        product: args.product.clone(),
        manufacturer: args.manufacturer.clone(),
        responsible: args.responsible.clone(),
        registration_id: args.registration_id.clone(),
        registration_active: args.registration_active,
        registration_url: args.registration_url.clone(),
    };
    let options = ReportOptions {
        wrap_width: args.wrap_width,
        ..ReportOptions::default()
    };
    let document = assemble(&store, &cover, &options);

    let stem = args
        .file_name
        .as_deref()
        .and_then(sanitize_file_stem)
        .unwrap_or_else(|| default_report_stem(Local::now()));

    let asset_dir_name = format!("{stem}_evidencias");
    let paths = ReportPaths {
        json: args.out_dir.join(format!("{stem}.json")),
        markdown: args.out_dir.join(format!("{stem}.md")),
        assets: document
            .evidence
            .as_ref()
            .map(|_| args.out_dir.join(&asset_dir_name)),
    };

    let export = ReportExport {
        manifest_version: 1,
        generated_at: now_utc_string(),
        session_path: args.session.session.display().to_string(),
        document: &document,
    };
    write_json_pretty(&paths.json, &export)?;

    let asset_dir = paths.assets.as_ref().map(|_| asset_dir_name.as_str());
    let markdown =
        render::markdown(&document, asset_dir).context("failed to render markdown report")?;
    write_file(&paths.markdown, markdown.as_bytes())?;

    if let Some(dir) = &paths.assets {
        let exported = export_figures(&document, dir)?;
        info!(path = %dir.display(), images = exported, "exported evidence images");
    }

    Ok(paths)
}

fn export_figures(document: &ReportDocument, dir: &Path) -> Result<usize> {
    ensure_directory(dir)?;

    let mut exported = 0;
    let figures = document
        .evidence
        .iter()
        .flat_map(|appendix| appendix.sections.iter())
        .flat_map(|section| section.figures.iter());
    for figure in figures {
        if let EvidenceFigure::Image {
            format,
            sha256,
            bytes,
            ..
        } = figure
        {
            let path = dir.join(render::asset_file_name(sha256, format));
            fs::write(&path, bytes)
                .with_context(|| format!("failed to write {}", path.display()))?;
            exported += 1;
        }
    }

    Ok(exported)
}
