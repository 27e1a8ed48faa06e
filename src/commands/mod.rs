pub mod catalog;
pub mod report;
pub mod summary;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::catalog::Catalog;
use crate::cli::SessionArgs;
use crate::session::{SessionScript, replay};
use crate::store::{EvidenceLimits, VerificationStore};

/// Loads the catalog named by `args` (built-in otherwise).
pub(crate) fn load_catalog(args: &SessionArgs) -> Result<Catalog> {
    let catalog = Catalog::load_or_builtin(args.catalog_path.as_deref())?;
    info!(
        title = %catalog.title(),
        categories = catalog.categories().len(),
        items = catalog.item_count(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Fresh store for `catalog` with the session script replayed into it.
pub(crate) fn replay_session<'c>(
    catalog: &'c Catalog,
    args: &SessionArgs,
) -> Result<VerificationStore<'c>> {
    let limits = EvidenceLimits {
        max_per_item: args.max_evidence_per_item,
        max_image_bytes: args.max_evidence_bytes,
    };
    let mut store = VerificationStore::with_limits(catalog, limits);

    let script = SessionScript::load(&args.session)?;
    let base_dir = args.session.parent().unwrap_or(Path::new("."));
    replay(&mut store, &script, base_dir)?;

    Ok(store)
}
