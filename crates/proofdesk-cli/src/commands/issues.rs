use anyhow::Result;
use proofdesk_bundle::query::{self, IssueFilter, IssueView};
use proofdesk_core::{Engine, ReviewStatus, Severity};

use super::ReviewArgs;

pub fn run(
    args: ReviewArgs,
    severity: Option<String>,
    engine: Option<String>,
    status: Option<String>,
    group: bool,
    json: bool,
) -> Result<()> {
    let filter = IssueFilter {
        severity: severity.as_deref().map(str::parse::<Severity>).transpose()?,
        engine: engine.as_deref().map(str::parse::<Engine>).transpose()?,
        status: status.as_deref().map(str::parse::<ReviewStatus>).transpose()?,
    };

    let bundle = args.load()?;
    let results = query::query_issues(&bundle.article.issues, &bundle.decisions, &filter);

    if json {
        if group {
            let groups: serde_json::Map<String, serde_json::Value> =
                query::group_by_severity(results)
                    .into_iter()
                    .map(|(severity, views)| {
                        let entries: Vec<_> = views.iter().map(view_json).collect();
                        (severity.to_string(), serde_json::Value::Array(entries))
                    })
                    .collect();
            println!("{}", serde_json::to_string_pretty(&groups)?);
        } else {
            let entries: Vec<_> = results.iter().map(view_json).collect();
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        return Ok(());
    }

    if results.is_empty() {
        println!("No matching issues found.");
        return Ok(());
    }

    if group {
        for (i, (severity, views)) in query::group_by_severity(results).into_iter().enumerate() {
            if i > 0 {
                println!();
            }
            println!("{} ({})", severity, views.len());
            for view in &views {
                print_view(view);
            }
        }
    } else {
        for view in &results {
            print_view(view);
        }
    }
    Ok(())
}

fn view_json(view: &IssueView<'_>) -> serde_json::Value {
    serde_json::json!({
        "id": view.issue.id,
        "status": view.status,
        "object": view.issue,
    })
}

fn print_view(view: &IssueView<'_>) {
    let issue = view.issue;
    println!(
        "[{}] {} ({}, {})",
        issue.severity, issue.id, issue.engine, view.status
    );
    println!("    {} -> {}", issue.original_text, issue.suggested_text);
    if let Some(explanation) = &issue.explanation {
        println!("    {}", explanation);
    }
}
