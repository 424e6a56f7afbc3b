//! Generate command.

use anyhow::Result;
use clap::Args;
use gw_session_id::SessionId;
use serde::Serialize;

use crate::output::{print_json, OutputFormat};

use super::CommandContext;

/// Mint one or more session IDs.
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Number of IDs to mint.
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=1000))]
    pub count: u32,
}

#[derive(Debug, Serialize)]
struct GenerateOutput {
    session_ids: Vec<SessionId>,
}

impl GenerateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let key = ctx.signing_key()?;

        let session_ids = (0..self.count)
            .map(|_| SessionId::generate(&key))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(count = session_ids.len(), "minted session IDs");

        match ctx.format {
            OutputFormat::Json => print_json(&GenerateOutput { session_ids }),
            OutputFormat::Table => {
                for id in &session_ids {
                    println!("{}", id);
                }
            }
        }

        Ok(())
    }
}
