//! C source emitter.
//!
//! Layout, in order: header comment, per-glyph art comments, `widths[]`,
//! offset width note, `offsets[]`, `bits[]`, metadata comments, and the
//! `struct font` initializer expected by the display driver's `font.h`.

use fontpack_core::{FontTable, OffsetWidth};

use super::EmitContext;

/// Render `table` as a C translation unit.
pub fn render(table: &FontTable, ctx: &EmitContext) -> String {
    let d = &table.descriptor;
    let mut out = String::new();

    out.push_str("/*\n");
    out.push_str(&format!(" * Converted using: {}\n", ctx.command_line));
    out.push_str(" */\n");
    out.push_str("#include \"font.h\"\n\n");

    for glyph in &table.glyphs {
        out.push_str(&format!(
            "// index: {} '{}' {}x{}\n",
            glyph.ch as u32,
            glyph.ch.escape_debug(),
            glyph.width,
            d.height
        ));
        for row in glyph.canvas.to_string().lines() {
            out.push_str("// ");
            out.push_str(row);
            out.push('\n');
        }
        out.push('\n');
    }

    out.push_str("static unsigned char widths[] = {\n");
    out.push_str(&wrap_hex(table.widths().into_iter().map(u32::from), 2, 8));
    out.push_str("\n};\n\n");

    out.push_str(&format!("// OFFSET_WIDTH = {}\n", d.offset_width.bytes()));
    let (c_type, digits, per_line) = match d.offset_width {
        OffsetWidth::One => ("unsigned char", 2, 8),
        OffsetWidth::Two => ("unsigned short", 4, 8),
        OffsetWidth::Four => ("unsigned int", 8, 4),
    };
    out.push_str(&format!("static {} offsets[] = {{\n", c_type));
    out.push_str(&wrap_hex(table.offsets().into_iter(), digits, per_line));
    out.push_str("\n};\n\n");

    out.push_str("static unsigned char bits[] = {\n");
    out.push_str(&wrap_hex(table.bits.iter().map(|&b| b as u32), 2, 8));
    out.push_str("\n};\n\n");

    out.push_str(&format!("// NAME = {}\n", d.name));
    out.push_str(&format!("// HEIGHT = {}\n", ctx.requested_height));
    out.push_str(&format!("// MAX_HEIGHT = {}\n", d.height));
    out.push_str(&format!("// MAX_WIDTH = {}\n", d.max_width));
    out.push_str(&format!("// BPP = {}\n", d.bpp));
    out.push_str(&format!("// MAP = \"{}\"\n\n", escape_map(&table.char_map())));

    out.push_str(&format!("struct font font_{} = {{\n", c_identifier(&d.name)));
    out.push_str(&format!("    \"{}\",\n", escape_map(&d.name)));
    out.push_str(&format!("    {},     /* maxwidth */\n", d.max_width));
    out.push_str(&format!("    {},     /* height */\n", d.height));
    out.push_str(&format!("    {},     /* ascent */\n", d.ascent));
    out.push_str(&format!("    {},     /* firstchar */\n", d.first_char));
    out.push_str(&format!("    {},     /* size */\n", d.size));
    out.push_str("    bits,\n");
    out.push_str("    (unsigned char *)offsets,\n");
    out.push_str("    widths,\n");
    out.push_str(&format!("    {},     /* defaultchar */\n", d.default_char));
    out.push_str(&format!("    {},      /* bits_size */\n", d.bits_size));
    out.push_str(&format!("    {},      /* bpp */\n", d.bpp));
    out.push_str(&format!("    {},      /* bits_width */\n", d.bits_width));
    out.push_str(&format!("    {}       /* offset_width */\n", d.offset_width.bytes()));
    out.push_str("};\n");

    out
}

/// `0x..,` items, `per_line` to a line, each line indented four spaces.
fn wrap_hex(values: impl Iterator<Item = u32>, digits: usize, per_line: usize) -> String {
    let items: Vec<String> = values
        .map(|v| format!("0x{:0width$x},", v, width = digits))
        .collect();
    let lines: Vec<String> = items.chunks(per_line).map(|c| c.concat()).collect();
    format!("    {}", lines.join("\n    "))
}

/// Escape text for a C string literal.
fn escape_map(map: &str) -> String {
    let mut out = String::with_capacity(map.len());
    for ch in map.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            c if c.is_control() => out.extend(c.escape_default()),
            c => out.push(c),
        }
    }
    out
}

/// Table names come from file names; C identifiers cannot hold `-` or `.`.
fn c_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect()
}
