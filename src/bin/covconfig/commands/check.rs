//! `covconfig check` command

use anyhow::Result;
use covconfig::ops::check_snapshot;
use covconfig::util::config::OutputFormat;
use covconfig::util::diagnostic::{emit, Diagnostic};

use super::Session;
use crate::cli::{CheckArgs, GlobalArgs};

pub fn execute(args: CheckArgs, global: &GlobalArgs) -> Result<i32> {
    let session = Session::open(global, args.snapshot.as_deref(), args.format)?;
    let statuses = check_snapshot(&session.snapshot);

    match session.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&statuses)?),
        OutputFormat::Text => {
            if session.ctx.is_verbose() {
                println!("snapshot: {}", session.snapshot_path.display());
            }
            if let Some(solution) = session.snapshot.solution_configuration_name() {
                println!("solution: {}", solution);
            }

            let width = statuses.iter().map(|s| s.project.len()).max().unwrap_or(0);
            for status in &statuses {
                println!(
                    "{:<width$}  {}",
                    status.project,
                    status.configuration.as_deref().unwrap_or("unresolved"),
                    width = width
                );
            }
        }
    }

    let unresolved = statuses.iter().filter(|s| !s.is_resolved()).count();
    if unresolved > 0 {
        if session.format == OutputFormat::Text {
            let diag = Diagnostic::warning(format!(
                "{} of {} projects unresolved",
                unresolved,
                statuses.len()
            ))
            .with_location(&session.snapshot_path)
            .with_suggestion("Run `covconfig resolve <PROJECT>` to see why");
            emit(&diag, session.ctx.color());
        }
        return Ok(1);
    }

    Ok(0)
}
