//! JSON emitter.
//!
//! Carries the same arrays and descriptor as the C output so tools that
//! do not want to parse C can consume the table.

use anyhow::{Context, Result};
use fontpack_core::{FontDescriptor, FontTable, RenderMode};
use serde::Serialize;

use super::EmitContext;

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct JsonFont<'a> {
    #[serde(flatten)]
    descriptor: &'a FontDescriptor,
    /// Pixel height requested on the command line
    requested_height: u32,
    mode: RenderMode,
    map: String,
    widths: Vec<u8>,
    offsets: Vec<u32>,
    bits: &'a [u8],
    /// Command line that produced the table
    #[serde(skip_serializing_if = "str::is_empty")]
    command_line: &'a str,
}

/// Render `table` as a pretty-printed JSON document.
pub fn render(table: &FontTable, ctx: &EmitContext) -> Result<String> {
    let doc = JsonFont {
        descriptor: &table.descriptor,
        requested_height: ctx.requested_height,
        mode: table.mode,
        map: table.char_map(),
        widths: table.widths(),
        offsets: table.offsets(),
        bits: &table.bits,
        command_line: &ctx.command_line,
    };
    let mut json = serde_json::to_string_pretty(&doc).context("Failed to serialize font table")?;
    json.push('\n');
    Ok(json)
}
