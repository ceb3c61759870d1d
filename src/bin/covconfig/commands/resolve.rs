//! `covconfig resolve` command

use anyhow::Result;
use covconfig::ops::{find_project, resolve_project, ResolveProjectError};
use covconfig::util::config::OutputFormat;
use covconfig::util::diagnostic::emit;
use serde_json::json;

use super::Session;
use crate::cli::{GlobalArgs, ResolveArgs};

pub fn execute(args: ResolveArgs, global: &GlobalArgs) -> Result<i32> {
    let session = Session::open(global, args.snapshot.as_deref(), args.format)?;

    if args.soft {
        let resolution = find_project(&session.snapshot, &args.project);
        match (session.format, resolution) {
            (OutputFormat::Json, resolution) => {
                let resolved = resolution.is_some();
                let mut value = match resolution {
                    Some(resolution) => serde_json::to_value(&resolution)?,
                    None => json!({ "project": args.project }),
                };
                value["resolved"] = json!(resolved);
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            (OutputFormat::Text, Some(resolution)) => println!("{}", resolution.key()),
            (OutputFormat::Text, None) => println!("unresolved"),
        }
        return Ok(0);
    }

    match resolve_project(&session.snapshot, &args.project) {
        Ok(resolution) => {
            match session.format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution)?),
                OutputFormat::Text => println!("{}", resolution.key()),
            }
            Ok(0)
        }
        Err(err) => {
            match session.format {
                OutputFormat::Json => {
                    let kind = match &err {
                        ResolveProjectError::UnknownProject { .. } => "unknown-project",
                        ResolveProjectError::Resolution(e) => e.kind(),
                    };
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&json!({
                            "project": args.project,
                            "error": kind,
                            "message": err.to_string(),
                        }))?
                    );
                }
                OutputFormat::Text => emit(
                    &err.to_diagnostic().with_location(&session.snapshot_path),
                    session.ctx.color(),
                ),
            }
            Ok(1)
        }
    }
}
