use anyhow::Result;

use super::ReviewArgs;

pub fn run(args: ReviewArgs, json: bool) -> Result<()> {
    let bundle = args.load()?;
    let stats = bundle.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("Accepted: {}", stats.accepted);
    println!("Rejected: {}", stats.rejected);
    println!("Modified: {}", stats.modified);
    println!("Pending:  {}", stats.pending);
    println!("Total:    {}", stats.total);
    Ok(())
}
