//! CLI argument definitions for the fontpack command-line interface.
//!
//! The `#[derive(Parser)]` type lives here so `main.rs` only dispatches and
//! the parser can be exercised from tests.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::commands::convert::ConvertOptions;

/// fontpack - Convert TrueType/OpenType characters into a packed C raster font
#[derive(Debug, Parser)]
#[command(name = "fontpack")]
#[command(author, version, about, long_about = None)]
#[command(group(
    ArgGroup::new("selection")
        .required(true)
        .multiple(false)
        .args(["characters", "string"])
))]
pub struct Cli {
    /// Font file to convert
    pub font_file: PathBuf,

    /// Pixel height to render the font at
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub font_height: u32,

    /// Pixel width to render the font at (default: same as height)
    #[arg(short = 'w', long = "font-width", value_parser = clap::value_parser!(u32).range(1..))]
    pub font_width: Option<u32>,

    /// Bits per pixel: 1 for monochrome, 8 for anti-aliased
    #[arg(long, default_value_t = 8, value_parser = parse_bpp)]
    pub bpp: u8,

    /// Integer or hex character values and/or ranges to include, e.g.
    /// "65, 66, 67" or "32-127" or "0x30-0x39, 0x41-0x5a"
    #[arg(short, long, help_heading = "Character selection")]
    pub characters: Option<String>,

    /// String of characters to include, e.g. "1234567890-."
    #[arg(short, long, help_heading = "Character selection", allow_hyphen_values = true)]
    pub string: Option<String>,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "c", value_parser = ["c", "json"])]
    pub format: String,

    /// Also write a PNG strip of every packed glyph
    #[arg(long)]
    pub preview: Option<PathBuf>,

    /// Reject character selections with code point gaps
    #[arg(long)]
    pub strict: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the status summary on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Turn parsed arguments into run options.
    pub fn into_options(self, command_line: String) -> ConvertOptions {
        let format = self
            .format
            .parse()
            .expect("clap should have validated format");
        ConvertOptions {
            font_file: self.font_file,
            height: self.font_height,
            width: self.font_width.unwrap_or(self.font_height),
            bpp: self.bpp,
            characters: self.characters,
            string: self.string,
            output: self.output,
            format,
            preview: self.preview,
            strict: self.strict,
            quiet: self.quiet,
            command_line,
        }
    }
}

fn parse_bpp(value: &str) -> Result<u8, String> {
    match value.trim() {
        "1" => Ok(1),
        "8" => Ok(8),
        other => Err(format!("'{}' is not supported (expected 1 or 8)", other)),
    }
}
