//! Block glyph rasterizer backing text materialization.
//!
//! A minimal 3×5 bitmap font scaled to the requested pixel size. Coarse on
//! purpose: the particles only need glyph ink to sample, not typography.

use app_core::raster::{AlphaBitmap, GlyphRaster, TextLine};

pub struct BlockGlyphs;

/// Cell size (one glyph is 3×5 cells, plus a one-cell gap).
fn cell_px(font_px: f32) -> f32 {
    font_px / 5.0
}

impl GlyphRaster for BlockGlyphs {
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        let n = text.chars().count() as f32;
        if n == 0.0 {
            return 0.0;
        }
        let cell = cell_px(font_px);
        n * 4.0 * cell - cell
    }

    fn raster(
        &mut self,
        lines: &[TextLine],
        width: u32,
        height: u32,
    ) -> anyhow::Result<AlphaBitmap> {
        let mut bitmap = AlphaBitmap::blank(width, height);
        for line in lines {
            let cell = cell_px(line.font_px);
            let line_width = self.measure(&line.text, line.font_px);
            let mut x0 = line.center.x - line_width * 0.5;
            let y0 = line.center.y - line.font_px * 0.5;
            for ch in line.text.chars() {
                let glyph = char_glyph(ch);
                for (row, &bits) in glyph.iter().enumerate() {
                    for col in 0..3usize {
                        if bits & (1 << (2 - col)) != 0 {
                            fill_cell(
                                &mut bitmap,
                                x0 + col as f32 * cell,
                                y0 + row as f32 * cell,
                                cell,
                            );
                        }
                    }
                }
                x0 += 4.0 * cell;
            }
        }
        Ok(bitmap)
    }
}

fn fill_cell(bitmap: &mut AlphaBitmap, x: f32, y: f32, cell: f32) {
    let x0 = x.max(0.0) as u32;
    let y0 = y.max(0.0) as u32;
    let x1 = ((x + cell).max(0.0) as u32).min(bitmap.width);
    let y1 = ((y + cell).max(0.0) as u32).min(bitmap.height);
    for py in y0..y1 {
        for px in x0..x1 {
            bitmap.data[(py * bitmap.width + px) as usize] = 255;
        }
    }
}

/// 3×5 glyphs, 5 rows of 3 bits each.
fn char_glyph(c: char) -> [u8; 5] {
    match c.to_ascii_uppercase() {
        '0' | 'O' => [0b111, 0b101, 0b101, 0b101, 0b111],
        '1' => [0b010, 0b110, 0b010, 0b010, 0b111],
        '2' => [0b111, 0b001, 0b111, 0b100, 0b111],
        '3' => [0b111, 0b001, 0b111, 0b001, 0b111],
        '4' => [0b101, 0b101, 0b111, 0b001, 0b001],
        '5' => [0b111, 0b100, 0b111, 0b001, 0b111],
        '6' => [0b111, 0b100, 0b111, 0b101, 0b111],
        '7' => [0b111, 0b001, 0b001, 0b001, 0b001],
        '8' => [0b111, 0b101, 0b111, 0b101, 0b111],
        '9' => [0b111, 0b101, 0b111, 0b001, 0b111],
        'A' => [0b111, 0b101, 0b111, 0b101, 0b101],
        'B' => [0b110, 0b101, 0b110, 0b101, 0b110],
        'C' => [0b111, 0b100, 0b100, 0b100, 0b111],
        'D' => [0b110, 0b101, 0b101, 0b101, 0b110],
        'E' => [0b111, 0b100, 0b111, 0b100, 0b111],
        'F' => [0b111, 0b100, 0b111, 0b100, 0b100],
        'G' => [0b111, 0b100, 0b101, 0b101, 0b111],
        'H' => [0b101, 0b101, 0b111, 0b101, 0b101],
        'I' => [0b111, 0b010, 0b010, 0b010, 0b111],
        'J' => [0b001, 0b001, 0b001, 0b101, 0b111],
        'K' => [0b101, 0b101, 0b110, 0b101, 0b101],
        'L' => [0b100, 0b100, 0b100, 0b100, 0b111],
        'M' => [0b101, 0b111, 0b101, 0b101, 0b101],
        'N' => [0b111, 0b101, 0b101, 0b101, 0b101],
        'P' => [0b111, 0b101, 0b111, 0b100, 0b100],
        'Q' => [0b111, 0b101, 0b101, 0b111, 0b001],
        'R' => [0b110, 0b101, 0b110, 0b101, 0b101],
        'S' => [0b111, 0b100, 0b111, 0b001, 0b111],
        'T' => [0b111, 0b010, 0b010, 0b010, 0b010],
        'U' => [0b101, 0b101, 0b101, 0b101, 0b111],
        'V' => [0b101, 0b101, 0b101, 0b010, 0b010],
        'W' => [0b101, 0b101, 0b101, 0b111, 0b101],
        'X' => [0b101, 0b101, 0b010, 0b101, 0b101],
        'Y' => [0b101, 0b101, 0b111, 0b010, 0b010],
        'Z' => [0b111, 0b001, 0b010, 0b100, 0b111],
        '!' => [0b010, 0b010, 0b010, 0b000, 0b010],
        '?' => [0b111, 0b001, 0b011, 0b000, 0b010],
        '-' => [0b000, 0b000, 0b111, 0b000, 0b000],
        '.' => [0b000, 0b000, 0b000, 0b000, 0b010],
        ',' => [0b000, 0b000, 0b000, 0b010, 0b100],
        '\'' => [0b010, 0b010, 0b000, 0b000, 0b000],
        ' ' => [0b000, 0b000, 0b000, 0b000, 0b000],
        _ => [0b000, 0b000, 0b010, 0b000, 0b000],
    }
}
