//! Text rasterization into particle target points.
//!
//! Glyph rendering itself belongs to the drawing backend (measure a line,
//! render centered lines into an alpha buffer); this module owns the layout
//! policy — font sizing per viewport, greedy word wrap against the width
//! budget — and the fixed-grid sampling that turns glyph ink into a sparse
//! point set.

use glam::Vec2;

use crate::constants::*;
use crate::render::Viewport;

/// Alpha-only bitmap produced by a glyph backend, row-major.
#[derive(Clone, Debug)]
pub struct AlphaBitmap {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl AlphaBitmap {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height) as usize],
        }
    }

    #[inline]
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        self.data[(y * self.width + x) as usize]
    }
}

/// One laid-out line of text, centered at `center`.
#[derive(Clone, Debug)]
pub struct TextLine {
    pub text: String,
    pub center: Vec2,
    pub font_px: f32,
}

/// Backend capability: measure and render text to a pixel buffer.
pub trait GlyphRaster {
    /// Advance width of `text` at the given size, in pixels.
    fn measure(&self, text: &str, font_px: f32) -> f32;

    /// Render the laid-out lines into a fresh alpha bitmap of the given
    /// dimensions.
    fn raster(&mut self, lines: &[TextLine], width: u32, height: u32)
        -> anyhow::Result<AlphaBitmap>;
}

/// Materialization font size for a viewport.
pub fn font_px_for(viewport: Viewport) -> f32 {
    if viewport.is_narrow() {
        (viewport.width * FONT_VIEWPORT_FRAC_NARROW).min(FONT_MAX_PX_NARROW)
    } else {
        (viewport.width * FONT_VIEWPORT_FRAC).min(FONT_MAX_PX)
    }
}

/// Sampling grid step for a viewport.
pub fn grid_step_for(viewport: Viewport) -> u32 {
    if viewport.is_narrow() {
        RASTER_GRID_STEP_NARROW
    } else {
        RASTER_GRID_STEP
    }
}

/// Lay `text` out as centered lines, wrapping on word boundaries when the
/// rendered width would exceed the budget. A single unbroken token is never
/// wrapped and may overflow. Empty text yields no lines.
pub fn layout_lines(text: &str, viewport: Viewport, raster: &dyn GlyphRaster) -> Vec<TextLine> {
    if text.is_empty() {
        return Vec::new();
    }
    let font_px = font_px_for(viewport);
    let max_width = viewport.width * MAX_TEXT_WIDTH_FRAC;

    let lines: Vec<String> = if raster.measure(text, font_px) > max_width && text.contains(' ') {
        let mut lines = Vec::new();
        let mut line = String::new();
        for word in text.split(' ') {
            let candidate = if line.is_empty() {
                word.to_owned()
            } else {
                format!("{line} {word}")
            };
            if raster.measure(&candidate, font_px) > max_width && !line.is_empty() {
                lines.push(std::mem::replace(&mut line, word.to_owned()));
            } else {
                line = candidate;
            }
        }
        if !line.is_empty() {
            lines.push(line);
        }
        lines
    } else {
        vec![text.to_owned()]
    };

    let line_height = font_px * LINE_HEIGHT_FACTOR;
    let start_y = viewport.height * 0.5 - (lines.len() as f32 - 1.0) * line_height * 0.5;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| TextLine {
            text,
            center: Vec2::new(viewport.width * 0.5, start_y + i as f32 * line_height),
            font_px,
        })
        .collect()
}

/// Rasterize `text` and sample glyph ink on the viewport's grid. Returns an
/// empty set for empty text or a render with no ink above the alpha
/// threshold.
pub fn sample_text(
    text: &str,
    viewport: Viewport,
    raster: &mut dyn GlyphRaster,
) -> anyhow::Result<Vec<Vec2>> {
    let lines = layout_lines(text, viewport, raster);
    if lines.is_empty() {
        return Ok(Vec::new());
    }
    let width = viewport.width.max(1.0) as u32;
    let height = viewport.height.max(1.0) as u32;
    let bitmap = raster.raster(&lines, width, height)?;

    let step = grid_step_for(viewport);
    let mut points = Vec::new();
    let mut y = 0;
    while y < bitmap.height {
        let mut x = 0;
        while x < bitmap.width {
            if bitmap.alpha_at(x, y) > RASTER_ALPHA_THRESHOLD {
                points.push(Vec2::new(x as f32, y as f32));
            }
            x += step;
        }
        y += step;
    }
    Ok(points)
}
