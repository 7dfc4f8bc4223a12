// Synthetic hand poses shared by the integration tests. Coordinates are
// normalized with y growing downward; the base hand is closed (all fingers
// curled, thumb tucked) and each builder adjusts from there.

#![allow(dead_code)]

use app_core::landmark::{idx, HandSample, LANDMARKS_PER_HAND};
use app_core::raster::{AlphaBitmap, GlyphRaster, TextLine};
use glam::Vec2;

const FINGER_COLS: [f32; 4] = [0.46, 0.50, 0.54, 0.58];
const TIP_UP_Y: f32 = 0.50;
const TIP_CURLED_Y: f32 = 0.70;

/// Closed hand: every finger curled, thumb tucked against the palm.
pub fn closed_hand() -> HandSample {
    let mut points = [Vec2::ZERO; LANDMARKS_PER_HAND];
    points[idx::WRIST] = Vec2::new(0.50, 0.85);
    points[1] = Vec2::new(0.45, 0.80);
    points[idx::THUMB_MCP] = Vec2::new(0.42, 0.76);
    points[idx::THUMB_IP] = Vec2::new(0.40, 0.71);
    points[idx::THUMB_TIP] = Vec2::new(0.42, 0.72);
    for (f, &col) in FINGER_COLS.iter().enumerate() {
        let mcp = 5 + f * 4;
        points[mcp] = Vec2::new(col, 0.70);
        points[mcp + 1] = Vec2::new(col, 0.62); // pip
        points[mcp + 2] = Vec2::new(col, 0.68); // dip
        points[mcp + 3] = Vec2::new(col, TIP_CURLED_Y); // tip
    }
    HandSample { points }
}

fn raise_finger(hand: &mut HandSample, finger: usize) {
    let tip = 5 + finger * 4 + 3;
    hand.points[tip].y = TIP_UP_Y;
}

/// Thumb splayed sideways, well clear of the index knuckle.
fn splay_thumb(hand: &mut HandSample) {
    hand.points[idx::THUMB_TIP] = Vec2::new(0.30, 0.66);
}

pub fn open_hand() -> HandSample {
    let mut h = closed_hand();
    for f in 0..4 {
        raise_finger(&mut h, f);
    }
    h
}

pub fn open_hand_thumb_out() -> HandSample {
    let mut h = open_hand();
    splay_thumb(&mut h);
    h
}

pub fn index_only() -> HandSample {
    let mut h = closed_hand();
    raise_finger(&mut h, 0);
    h
}

pub fn pinky_only() -> HandSample {
    let mut h = closed_hand();
    raise_finger(&mut h, 3);
    h
}

pub fn pinky_with_thumb() -> HandSample {
    let mut h = pinky_only();
    splay_thumb(&mut h);
    h
}

pub fn index_with_thumb() -> HandSample {
    let mut h = index_only();
    splay_thumb(&mut h);
    h
}

pub fn love_hand() -> HandSample {
    let mut h = closed_hand();
    raise_finger(&mut h, 0);
    raise_finger(&mut h, 3);
    splay_thumb(&mut h);
    h
}

pub fn three_up() -> HandSample {
    let mut h = closed_hand();
    for f in 0..3 {
        raise_finger(&mut h, f);
    }
    h
}

/// Index + middle raised with a wide tip gap.
pub fn pair_spread() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::INDEX_TIP] = Vec2::new(0.43, TIP_UP_Y);
    h.points[idx::MIDDLE_TIP] = Vec2::new(0.53, TIP_UP_Y);
    h
}

/// Index + middle raised, tips nearly touching.
pub fn pair_close() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::INDEX_TIP] = Vec2::new(0.465, TIP_UP_Y);
    h.points[idx::MIDDLE_TIP] = Vec2::new(0.495, TIP_UP_Y);
    h
}

/// Index + middle extended sideways (lateral reach dominates).
pub fn pair_sideways() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::INDEX_PIP] = Vec2::new(0.38, 0.69);
    h.points[idx::INDEX_TIP] = Vec2::new(0.28, 0.68);
    h.points[idx::MIDDLE_PIP] = Vec2::new(0.42, 0.70);
    h.points[idx::MIDDLE_TIP] = Vec2::new(0.32, 0.69);
    h
}

/// All fingertips gathered around the thumb tip.
pub fn bunched_hand() -> HandSample {
    let mut h = closed_hand();
    let thumb = Vec2::new(0.46, 0.60);
    h.points[idx::THUMB_TIP] = thumb;
    h.points[idx::INDEX_TIP] = thumb + Vec2::new(0.01, -0.02);
    h.points[idx::MIDDLE_TIP] = thumb + Vec2::new(0.02, 0.01);
    h.points[idx::RING_TIP] = thumb + Vec2::new(-0.01, 0.02);
    h.points[idx::PINKY_TIP] = thumb + Vec2::new(-0.02, -0.01);
    h
}

pub fn thumbs_up_hand() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::THUMB_TIP] = Vec2::new(0.40, 0.64);
    h
}

pub fn thumbs_down_hand() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::WRIST] = Vec2::new(0.50, 0.70);
    h.points[idx::THUMB_MCP] = Vec2::new(0.42, 0.66);
    h.points[idx::THUMB_IP] = Vec2::new(0.40, 0.63);
    h.points[idx::THUMB_TIP] = Vec2::new(0.38, 0.82);
    h
}

/// Closed hand with the thumb resting at the side of the fist.
pub fn closed_thumb_side() -> HandSample {
    let mut h = closed_hand();
    h.points[idx::THUMB_TIP] = Vec2::new(0.36, 0.70);
    h
}

/// Translate a whole hand by `delta`.
pub fn shifted(hand: &HandSample, delta: Vec2) -> HandSample {
    let mut h = hand.clone();
    for p in &mut h.points {
        *p += delta;
    }
    h
}

// ── Mock glyph backend ─────────────────────────────────────

/// Fixed-advance glyph backend: every character is 0.6 em wide and each
/// line rasterizes as a solid centered block.
pub struct MockGlyphs {
    /// Alpha written for glyph ink; drop below the threshold to simulate a
    /// blank render.
    pub ink: u8,
}

impl Default for MockGlyphs {
    fn default() -> Self {
        Self { ink: 255 }
    }
}

impl GlyphRaster for MockGlyphs {
    fn measure(&self, text: &str, font_px: f32) -> f32 {
        text.chars().count() as f32 * font_px * 0.6
    }

    fn raster(
        &mut self,
        lines: &[TextLine],
        width: u32,
        height: u32,
    ) -> anyhow::Result<AlphaBitmap> {
        let mut bitmap = AlphaBitmap::blank(width, height);
        for line in lines {
            let w = self.measure(&line.text, line.font_px);
            let x0 = (line.center.x - w * 0.5).max(0.0) as u32;
            let x1 = ((line.center.x + w * 0.5) as u32).min(width.saturating_sub(1));
            let y0 = (line.center.y - line.font_px * 0.5).max(0.0) as u32;
            let y1 = ((line.center.y + line.font_px * 0.5) as u32).min(height.saturating_sub(1));
            for y in y0..=y1 {
                for x in x0..=x1 {
                    bitmap.data[(y * width + x) as usize] = self.ink;
                }
            }
        }
        Ok(bitmap)
    }
}
