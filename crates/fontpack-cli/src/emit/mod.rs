//! Text framing of a packed font table.

pub mod c_source;
pub mod json;

use std::ffi::OsStr;
use std::str::FromStr;

use anyhow::Result;
use fontpack_core::FontTable;

/// Output format of the converted table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// C source with static arrays and a `struct font` descriptor.
    C,
    /// JSON document with the same arrays and descriptor.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "c" => Ok(OutputFormat::C),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format: {}", other)),
        }
    }
}

/// Values that belong in the output but not in the table itself.
#[derive(Debug, Clone)]
pub struct EmitContext {
    /// Shell-quoted command line recorded in the C header.
    pub command_line: String,
    /// Pixel height requested on the command line.
    pub requested_height: u32,
}

/// Render `table` in the requested format.
pub fn render(table: &FontTable, format: OutputFormat, ctx: &EmitContext) -> Result<String> {
    match format {
        OutputFormat::C => Ok(c_source::render(table, ctx)),
        OutputFormat::Json => json::render(table, ctx),
    }
}

/// Quote one argument the way a POSIX shell would need it.
pub fn shell_quote(arg: &str) -> String {
    let safe = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "@%+=:,./-_".contains(c));
    if safe {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\"'\"'"))
    }
}

/// Join arguments into a copy-pasteable command line.
///
/// Arguments that are not valid UTF-8 are recorded lossily.
pub fn command_line<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    args.into_iter()
        .map(|a| shell_quote(&a.as_ref().to_string_lossy()))
        .collect::<Vec<_>>()
        .join(" ")
}
