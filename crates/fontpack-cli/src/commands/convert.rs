//! Convert command implementation
//!
//! Renders the selected characters of a font file and writes the packed
//! table as C source (or JSON) to a file or stdout.

use anyhow::{Context, Result};
use colored::Colorize;
use fontpack_core::{
    font_name, pack_font, preview, CharacterSet, Font, FontPackError, FontTable, PixelSize,
    Rasterizer, RenderMode,
};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info, warn};

use crate::emit::{self, EmitContext, OutputFormat};

/// Options for one conversion run.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub font_file: PathBuf,
    /// Requested pixel height
    pub height: u32,
    /// Requested pixel width (equal to `height` unless overridden)
    pub width: u32,
    /// 1 or 8
    pub bpp: u8,
    pub characters: Option<String>,
    pub string: Option<String>,
    /// Output path (default: stdout)
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// PNG strip path
    pub preview: Option<PathBuf>,
    /// Reject selections with code point gaps
    pub strict: bool,
    /// Suppress the status summary
    pub quiet: bool,
    /// Shell-quoted invocation recorded in the output header
    pub command_line: String,
}

/// Run the convert command
///
/// # Returns
/// Exit code: 0 success, 1 error
pub fn run(opts: &ConvertOptions) -> Result<ExitCode> {
    let mode = RenderMode::from_bpp(opts.bpp)?;
    let charset = select_characters(opts)?;

    let size = PixelSize::new(opts.width, opts.height);
    let mut font = Font::open(&opts.font_file, size, mode)
        .with_context(|| format!("Failed to load font: {}", opts.font_file.display()))?;
    if let Some(family) = font.family_name() {
        info!(family = %family, "font loaded");
    }

    let name = font_name(&opts.font_file, opts.height, opts.bpp);
    convert_with(&mut font, &charset, &name, opts)
}

/// Parse the character selection and apply the contiguity policy.
///
/// The selection is checked before the font is loaded so that usage
/// errors are reported without touching the font file.
pub fn select_characters(opts: &ConvertOptions) -> Result<CharacterSet, FontPackError> {
    let charset = CharacterSet::from_selection(opts.characters.as_deref(), opts.string.as_deref())?;

    if let Some(after) = charset.first_gap() {
        if opts.strict {
            charset.require_contiguous()?;
        }
        warn!(after, "character selection is not contiguous");
        if !opts.quiet {
            eprintln!(
                "{} selection has a gap after {:#x}; firstchar-relative lookup will not work",
                "!".yellow(),
                after
            );
        }
    }

    debug!(count = charset.len(), first = charset.first() as u32, "characters selected");
    Ok(charset)
}

/// Pack, render and write with an already-opened font.
///
/// Output is written only after the whole table has been built and
/// rendered, so a failure never leaves a partial file behind.
pub fn convert_with<R: Rasterizer>(
    font: &mut Font<R>,
    charset: &CharacterSet,
    name: &str,
    opts: &ConvertOptions,
) -> Result<ExitCode> {
    let table = pack_font(font, charset, name)
        .map_err(FontPackError::from)
        .with_context(|| format!("Failed to pack font table: {}", name))?;

    let ctx = EmitContext {
        command_line: opts.command_line.clone(),
        requested_height: opts.height,
    };
    let text = emit::render(&table, opts.format, &ctx)?;

    match &opts.output {
        Some(path) => fs::write(path, &text)
            .with_context(|| format!("Failed to write output: {}", path.display()))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .context("Failed to write output to stdout")?;
            stdout.flush().context("Failed to write output to stdout")?;
        }
    }

    if let Some(path) = &opts.preview {
        preview::write_strip_png(&table, path)
            .with_context(|| format!("Failed to write preview: {}", path.display()))?;
    }

    if !opts.quiet {
        print_summary(&table, opts);
    }

    Ok(ExitCode::SUCCESS)
}

/// Status lines go to stderr; stdout may be carrying the table itself.
fn print_summary(table: &FontTable, opts: &ConvertOptions) {
    let d = &table.descriptor;
    let hash = blake3::hash(&table.bits).to_hex();

    eprintln!("{} {}", "Converted:".cyan().bold(), d.name);
    eprintln!(
        "  {} {} ({} bpp)",
        "Characters:".dimmed(),
        d.size,
        d.bpp
    );
    eprintln!(
        "  {} {}x{} max, ascent {}",
        "Cell:".dimmed(),
        d.max_width,
        d.height,
        d.ascent
    );
    eprintln!(
        "  {} {} bytes, {}-byte offsets",
        "Bits:".dimmed(),
        table.bits.len(),
        d.offset_width.bytes()
    );
    if let Some(path) = &opts.preview {
        eprintln!("  {} {}", "Preview:".dimmed(), path.display());
    }

    let target = opts
        .output
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdout".to_string());
    eprintln!(
        "{} Wrote {} {}",
        "SUCCESS".green().bold(),
        target,
        format!("[{}]", &hash[..16]).dimmed()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use fontpack_core::{CharsetError, GlyphSlot, RasterError};

    /// Every character is a 2x2 block, top 2, left 0, advance 3.
    struct Blocks;

    impl Rasterizer for Blocks {
        fn set_pixel_size(&mut self, _size: PixelSize) -> Result<(), RasterError> {
            Ok(())
        }

        fn load_glyph(&mut self, _ch: char, mode: RenderMode) -> Result<GlyphSlot, RasterError> {
            let (pitch, buffer) = match mode {
                RenderMode::Mono => (1, vec![0b1100_0000, 0b1100_0000]),
                RenderMode::Gray => (2, vec![0xff; 4]),
            };
            Ok(GlyphSlot {
                width: 2,
                rows: 2,
                pitch,
                buffer,
                top: 2,
                left: 0,
                advance: 3 * 64,
            })
        }
    }

    fn options(dir: &tempfile::TempDir) -> ConvertOptions {
        ConvertOptions {
            font_file: dir.path().join("missing.ttf"),
            height: 2,
            width: 2,
            bpp: 1,
            characters: None,
            string: Some("AB".to_string()),
            output: Some(dir.path().join("out.c")),
            format: OutputFormat::C,
            preview: None,
            strict: false,
            quiet: true,
            command_line: "fontpack missing.ttf 2 --bpp 1 -s AB".to_string(),
        }
    }

    #[test]
    fn test_missing_font_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir);
        let err = run(&opts).unwrap_err();
        assert!(err.to_string().contains("Failed to load font"));
        assert!(!opts.output.as_ref().unwrap().exists());
    }

    #[test]
    fn test_strict_rejects_gaps_before_loading_font() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir);
        opts.string = Some("AC".to_string());
        opts.strict = true;

        let err = run(&opts).unwrap_err();
        let err = err.downcast::<FontPackError>().unwrap();
        assert!(matches!(
            err,
            FontPackError::Charset(CharsetError::NotContiguous { after: 0x41 })
        ));
    }

    #[test]
    fn test_gap_is_a_warning_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir);
        opts.string = Some("AC".to_string());
        let charset = select_characters(&opts).unwrap();
        assert_eq!(charset.as_string(), "AC");
    }

    #[test]
    fn test_convert_with_writes_c_source() {
        let dir = tempfile::tempdir().unwrap();
        let opts = options(&dir);
        let mut font = Font::new(Blocks, PixelSize::square(2), RenderMode::Mono).unwrap();
        let charset = select_characters(&opts).unwrap();

        convert_with(&mut font, &charset, "blocks_2", &opts).unwrap();

        let text = fs::read_to_string(opts.output.as_ref().unwrap()).unwrap();
        assert!(text.starts_with("/*\n * Converted using: fontpack missing.ttf 2"));
        assert!(text.contains("static unsigned char widths[] = {\n    0x03,0x03,\n};"));
        assert!(text.contains("static unsigned char offsets[] = {\n    0x00,0x02,\n};"));
        assert!(text.contains("static unsigned char bits[] = {\n    0xc0,0xc0,0xc0,0xc0,\n};"));
        assert!(text.contains("struct font font_blocks_2 = {"));
    }

    #[test]
    fn test_convert_with_writes_json_and_preview() {
        let dir = tempfile::tempdir().unwrap();
        let mut opts = options(&dir);
        opts.format = OutputFormat::Json;
        opts.output = Some(dir.path().join("out.json"));
        opts.preview = Some(dir.path().join("strip.png"));
        opts.bpp = 8;
        let mut font = Font::new(Blocks, PixelSize::square(2), RenderMode::Gray).unwrap();
        let charset = select_characters(&opts).unwrap();

        convert_with(&mut font, &charset, "blocks_2_tt", &opts).unwrap();

        let text = fs::read_to_string(opts.output.as_ref().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["name"], "blocks_2_tt");
        assert_eq!(value["bpp"], 8);
        assert_eq!(value["map"], "AB");
        assert_eq!(value["offsets"], serde_json::json!([0, 6]));
        assert!(opts.preview.as_ref().unwrap().exists());
    }
}
