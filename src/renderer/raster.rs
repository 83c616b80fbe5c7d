//! CPU rasterizer and frame composition
//!
//! Triangles are filled by sampling pixel centers with the same inclusive
//! point-in-triangle test the simulation uses, so what kills you is exactly
//! what you see. All blending is straight-alpha source-over.

use glam::Vec2;
use rusttype::Font;

use super::shapes::{self, Vertex};
use super::sprite::ShipSprite;
use super::text;
use crate::Rgba;
use crate::consts::*;
use crate::sim::{GameState, point_in_triangle};

/// Bytes per pixel in the RGBA frame
const PX: usize = 4;

/// Owns the loaded assets and composes one frame per render call
pub struct Renderer {
    font: Font<'static>,
    ship: ShipSprite,
}

impl Renderer {
    pub fn new(font: Font<'static>, ship: ShipSprite) -> Self {
        Self { font, ship }
    }

    /// Rasterize the current state into the 256x144 RGBA frame
    ///
    /// Draw order: backdrop, score digits in screen space, then one world
    /// pass through the camera (rails, spikes, thruster), ship on top. The
    /// digits sit under the world so the rails overlap them.
    pub fn render(&self, frame: &mut [u8], state: &GameState) {
        clear(frame, palette::GRAY);
        text::draw_score(frame, &self.font, state.score);

        let mut world = Vec::with_capacity(
            12 + state.spikes.len() * 3 + state.thruster.particles.len() * 6,
        );
        world.extend(shapes::rails());
        world.extend(shapes::spikes(&state.spikes));
        if !state.player.dead {
            world.extend(shapes::particles(&state.thruster));
        }
        for v in &mut world {
            v.pos = state.camera.world_to_screen(v.pos);
        }
        draw_triangles(frame, &world);

        if !state.player.dead {
            self.ship.draw(
                frame,
                &state.camera,
                state.player.pos,
                Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT),
            );
        }
    }
}

/// Fill the whole frame with one opaque color
pub fn clear(frame: &mut [u8], color: Rgba) {
    for px in frame.chunks_exact_mut(PX) {
        px.copy_from_slice(&[color.r, color.g, color.b, color.a]);
    }
}

/// Source-over blend one pixel; out-of-frame coordinates are dropped
pub fn blend_pixel(frame: &mut [u8], x: i32, y: i32, color: Rgba) {
    if x < 0 || y < 0 || x >= FRAME_WIDTH as i32 || y >= FRAME_HEIGHT as i32 {
        return;
    }
    if color.a == 0 {
        return;
    }

    let idx = (y as usize * FRAME_WIDTH as usize + x as usize) * PX;
    let px = &mut frame[idx..idx + PX];
    if color.a == 255 {
        px.copy_from_slice(&[color.r, color.g, color.b, 255]);
        return;
    }

    let a = u32::from(color.a);
    let inv = 255 - a;
    px[0] = ((u32::from(color.r) * a + u32::from(px[0]) * inv) / 255) as u8;
    px[1] = ((u32::from(color.g) * a + u32::from(px[1]) * inv) / 255) as u8;
    px[2] = ((u32::from(color.b) * a + u32::from(px[2]) * inv) / 255) as u8;
    px[3] = 255;
}

/// Fill a triangle given in frame coordinates
pub fn fill_triangle(frame: &mut [u8], tri: &[Vec2; 3], color: Rgba) {
    let min_x = tri[0].x.min(tri[1].x).min(tri[2].x).floor().max(0.0) as i32;
    let min_y = tri[0].y.min(tri[1].y).min(tri[2].y).floor().max(0.0) as i32;
    let max_x = tri[0].x.max(tri[1].x).max(tri[2].x).ceil().min(FIELD_WIDTH) as i32;
    let max_y = tri[0].y.max(tri[1].y).max(tri[2].y).ceil().min(FIELD_HEIGHT) as i32;

    for y in min_y..max_y {
        for x in min_x..max_x {
            let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
            if point_in_triangle(center, tri) {
                blend_pixel(frame, x, y, color);
            }
        }
    }
}

/// Draw a triangle list, flat-shaded with each triangle's first color
pub fn draw_triangles(frame: &mut [u8], vertices: &[Vertex]) {
    for tri in vertices.chunks_exact(3) {
        fill_triangle(frame, &[tri[0].pos, tri[1].pos, tri[2].pos], tri[0].color);
    }
}
