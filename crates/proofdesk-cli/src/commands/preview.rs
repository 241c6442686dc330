use anyhow::Result;
use proofdesk_core::ReviewStats;

use super::ReviewArgs;
use crate::config::PreviewConfig;

pub fn run(args: ReviewArgs, plain: bool, json: bool, config: &PreviewConfig) -> Result<()> {
    let mut bundle = args.load()?;
    let preview = bundle.preview();

    if json {
        println!("{}", serde_json::to_string_pretty(&preview)?);
        return Ok(());
    }

    if plain {
        println!("{}", preview.reconciled_text);
        return Ok(());
    }

    if let Some(title) = &preview.title {
        println!("{}", title);
        println!("{}", "=".repeat(title.chars().count()));
        println!();
    }

    if config.show_stats {
        println!("{}", stats_line(&preview.stats));
        println!();
    }

    if preview.is_empty() {
        println!("{}", config.empty_placeholder);
        return Ok(());
    }

    for (i, paragraph) in preview.paragraphs.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", paragraph);
    }
    Ok(())
}

fn stats_line(stats: &ReviewStats) -> String {
    format!(
        "{} accepted, {} rejected, {} modified, {} pending ({} issues)",
        stats.accepted, stats.rejected, stats.modified, stats.pending, stats.total
    )
}
