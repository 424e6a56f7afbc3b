//! Validate command.

use anyhow::Result;
use clap::Args;
use gw_session_id::SessionId;
use serde::Serialize;

use crate::output::{print_json, print_success, OutputFormat};

use super::CommandContext;

/// Check a session ID against the configured signing key.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// The session ID to check.
    pub id: String,
}

#[derive(Debug, Serialize)]
struct ValidateOutput<'a> {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
}

impl ValidateCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let key = ctx.signing_key()?;

        match SessionId::validate(&self.id, &key) {
            Ok(_) => {
                match ctx.format {
                    OutputFormat::Json => print_json(&ValidateOutput {
                        valid: true,
                        kind: None,
                    }),
                    OutputFormat::Table => print_success("session ID is valid"),
                }
                Ok(())
            }
            Err(e) => {
                if ctx.format == OutputFormat::Json {
                    print_json(&ValidateOutput {
                        valid: false,
                        kind: Some(e.kind()),
                    });
                }
                Err(e.into())
            }
        }
    }
}
