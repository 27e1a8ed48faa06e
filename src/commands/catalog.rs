use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::CatalogArgs;
use crate::util::write_json_pretty;

pub fn run(args: CatalogArgs) -> Result<()> {
    let catalog = Catalog::load_or_builtin(args.catalog_path.as_deref())?;

    for category in catalog.categories() {
        info!(category = %category.name, items = category.items.len(), "category");
    }
    info!(
        title = %catalog.title(),
        categories = catalog.categories().len(),
        items = catalog.item_count(),
        "catalog validated"
    );

    if let Some(output) = &args.output {
        write_json_pretty(output, &catalog)?;
        info!(path = %output.display(), "wrote catalog");
    }

    if args.json {
        let mut output = io::BufWriter::new(io::stdout().lock());
        serde_json::to_writer_pretty(&mut output, &catalog)
            .context("failed to serialize catalog json output")?;
        writeln!(output)?;
        output.flush()?;
    }

    Ok(())
}
