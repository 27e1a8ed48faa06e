use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::report::DEFAULT_WRAP_WIDTH;

#[derive(Parser, Debug)]
#[command(
    name = "rotulado5109",
    version,
    about = "Labeling compliance checklist for Resolución 5109/2005"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Catalog(CatalogArgs),
    Summary(SummaryArgs),
    Report(ReportArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    #[arg(long)]
    pub catalog_path: Option<PathBuf>,

    #[arg(long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct SessionArgs {
    #[arg(long)]
    pub session: PathBuf,

    #[arg(long)]
    pub catalog_path: Option<PathBuf>,

    #[arg(long)]
    pub max_evidence_per_item: Option<usize>,

    #[arg(long)]
    pub max_evidence_bytes: Option<usize>,
}

#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[arg(long, default_value_t = false)]
    pub only_non_compliant: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[command(flatten)]
    pub session: SessionArgs,

    #[arg(long, default_value = "")]
    pub product: String,

    #[arg(long, default_value = "")]
    pub manufacturer: String,

    #[arg(long, default_value = "")]
    pub responsible: String,

    /// Defaults to today (AAAA-MM-DD).
    #[arg(long)]
    pub report_date: Option<String>,

    #[arg(long, default_value = "")]
    pub registration_id: String,

    #[arg(long, default_value_t = false)]
    pub registration_active: bool,

    #[arg(long)]
    pub registration_url: Option<String>,

    #[arg(long, default_value = "reports")]
    pub out_dir: PathBuf,

    /// Output base name, without extension. Defaults to informe_5109_<AAAAMMDD>.
    #[arg(long)]
    pub file_name: Option<String>,

    #[arg(long, default_value_t = DEFAULT_WRAP_WIDTH)]
    pub wrap_width: usize,
}
