//! Score text rasterization
//!
//! The score is drawn as oversized digits near the top of the frame, one
//! shade lighter than the backdrop. It renders before the world pass, so it
//! reads as a watermark behind the rails and spikes.

use rusttype::{Font, Scale, point};

use super::raster;
use crate::consts::{FRAME_WIDTH, palette};

/// Digit size in frame pixels
const SCORE_SCALE: f32 = 102.0;
/// Top of the digit block in frame pixels
const SCORE_TOP: f32 = 2.0;

/// Draw the score centered horizontally
pub fn draw_score(frame: &mut [u8], font: &Font<'_>, score: u32) {
    let digits = score.to_string();
    let scale = Scale::uniform(SCORE_SCALE);
    let v_metrics = font.v_metrics(scale);

    // Lay out once at the origin to measure, then again centered
    let text_width = font
        .layout(&digits, scale, point(0.0, 0.0))
        .last()
        .map_or(0.0, |g| {
            g.position().x + g.unpositioned().h_metrics().advance_width
        });
    let start_x = ((FRAME_WIDTH as f32 - text_width) / 2.0).max(0.0);
    let baseline = SCORE_TOP + v_metrics.ascent;

    for glyph in font.layout(&digits, scale, point(start_x, baseline)) {
        if let Some(bb) = glyph.pixel_bounding_box() {
            glyph.draw(|gx, gy, coverage| {
                let x = bb.min.x + gx as i32;
                let y = bb.min.y + gy as i32;
                let alpha = (coverage * 255.0) as u8;
                raster::blend_pixel(frame, x, y, palette::SCORE_TEXT.with_alpha(alpha));
            });
        }
    }
}
