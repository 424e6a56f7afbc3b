//! Inspect command.
//!
//! Shape check only. No key is used, so the output never says whether an
//! ID is authentic.

use anyhow::Result;
use base64::{engine::general_purpose::URL_SAFE, Engine as _};
use clap::Args;
use gw_session_id::{ENCODED_LENGTH, SIGNED_LENGTH};
use serde::Serialize;

use crate::output::{print_field, print_info, print_json, OutputFormat};

use super::CommandContext;

/// Report whether a string has the shape of a session ID.
#[derive(Debug, Args)]
pub struct InspectCommand {
    /// The candidate string.
    pub id: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct Shape {
    encoded_length: usize,
    decodes: bool,
    decoded_length: Option<usize>,
    well_formed: bool,
}

fn shape_of(candidate: &str) -> Shape {
    let decoded_length = URL_SAFE.decode(candidate).ok().map(|bytes| bytes.len());

    Shape {
        encoded_length: candidate.len(),
        decodes: decoded_length.is_some(),
        decoded_length,
        well_formed: decoded_length == Some(SIGNED_LENGTH),
    }
}

impl InspectCommand {
    pub fn run(self, ctx: &CommandContext) -> Result<()> {
        let shape = shape_of(&self.id);

        match ctx.format {
            OutputFormat::Json => print_json(&shape),
            OutputFormat::Table => {
                print_field(
                    "length",
                    format!("{} (expected {})", shape.encoded_length, ENCODED_LENGTH),
                );
                print_field("decodes", shape.decodes);
                match shape.decoded_length {
                    Some(n) => print_field(
                        "decoded bytes",
                        format!("{} (expected {})", n, SIGNED_LENGTH),
                    ),
                    None => print_field("decoded bytes", "-"),
                }
                print_field("well formed", shape.well_formed);
                print_info("signature not checked; use `sidctl validate` with the key");
            }
        }

        Ok(())
    }
}
