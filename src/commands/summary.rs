use std::io::{self, Write};

use anyhow::Result;
use tracing::info;

use crate::cli::SummaryArgs;
use crate::commands::{load_catalog, replay_session};
use crate::store::DisplayFilter;

pub fn run(args: SummaryArgs) -> Result<()> {
    let catalog = load_catalog(&args.session)?;
    let store = replay_session(&catalog, &args.session)?;

    let filter = if args.only_non_compliant {
        DisplayFilter::OnlyNonCompliant
    } else {
        DisplayFilter::All
    };

    let mut output = io::BufWriter::new(io::stdout().lock());
    let mut current_category = None;
    for (category, item, answer) in store.visible_items(filter) {
        if current_category != Some(category.name.as_str()) {
            writeln!(output, "{}", category.name)?;
            current_category = Some(category.name.as_str());
        }

        writeln!(
            output,
            "\t{}\t{}\tevidence={}\t[{}]",
            answer,
            item.id,
            store.evidence(&item.id).len(),
            item.applicability.label()
        )?;
        let note = store.note(&item.id);
        if !note.is_empty() {
            writeln!(output, "\t\tnote: {note}")?;
        }
    }
    output.flush()?;

    let metrics = store.metrics();
    info!(
        compliant = metrics.compliant,
        non_compliant = metrics.non_compliant,
        not_applicable = metrics.not_applicable,
        unanswered = metrics.unanswered,
        answered = metrics.answered,
        percent = metrics.percent,
        "compliance summary"
    );

    Ok(())
}
