//! Command implementations

pub mod check;
pub mod completions;
pub mod name;
pub mod resolve;

use std::path::{Path, PathBuf};

use anyhow::Result;
use covconfig::core::HostSnapshot;
use covconfig::util::config::{Config, OutputFormat};
use covconfig::util::GlobalContext;

use crate::cli::GlobalArgs;

/// Everything a snapshot-reading command needs.
pub struct Session {
    pub ctx: GlobalContext,
    pub snapshot_path: PathBuf,
    pub snapshot: HostSnapshot,
    pub format: OutputFormat,
}

impl Session {
    /// Build the context, load configuration and the snapshot.
    pub fn open(
        global: &GlobalArgs,
        snapshot: Option<&Path>,
        format: Option<OutputFormat>,
    ) -> Result<Self> {
        let mut ctx = GlobalContext::new()?;
        ctx.set_verbose(global.verbose);
        let config: Config = ctx.load_config();
        ctx.set_color(!global.no_color && config.output.color);

        let path = ctx.find_snapshot(snapshot, &config)?;
        tracing::debug!("loading snapshot {}", path.display());
        let snapshot = HostSnapshot::load(&path)?;

        Ok(Session {
            ctx,
            snapshot_path: path,
            snapshot,
            format: format.or(config.format()).unwrap_or_default(),
        })
    }
}
