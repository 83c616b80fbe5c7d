//! Shape generation for 2D primitives
//!
//! Builders emit world-space triangle lists that are transformed by the
//! camera and rasterized each frame.

use glam::Vec2;

use crate::Rgba;
use crate::consts::*;
use crate::sim::{ParticleSystem, Spike};

/// A colored vertex of a triangle list
#[derive(Debug, Clone, Copy)]
pub struct Vertex {
    pub pos: Vec2,
    pub color: Rgba,
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: Rgba) -> Self {
        Self {
            pos: Vec2::new(x, y),
            color,
        }
    }
}

/// Append an axis-aligned rectangle as two triangles
fn push_rect(vertices: &mut Vec<Vertex>, pos: Vec2, size: Vec2, color: Rgba) {
    let (x, y) = (pos.x, pos.y);
    let (w, h) = (size.x, size.y);

    vertices.push(Vertex::new(x, y, color));
    vertices.push(Vertex::new(x + w, y, color));
    vertices.push(Vertex::new(x, y + h, color));

    vertices.push(Vertex::new(x + w, y, color));
    vertices.push(Vertex::new(x + w, y + h, color));
    vertices.push(Vertex::new(x, y + h, color));
}

/// Ceiling and floor bands
///
/// The bands run four field-widths wide and one band-height past each rail so
/// the view never shows past them while it rotates or shakes.
pub fn rails() -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(12);
    let band = Vec2::new(FIELD_WIDTH * 4.0, GAP * 10.0);

    push_rect(
        &mut vertices,
        Vec2::new(-FIELD_WIDTH, TOP_RAIL - band.y),
        band,
        palette::ORANGE,
    );
    push_rect(
        &mut vertices,
        Vec2::new(-FIELD_WIDTH, BOTTOM_RAIL),
        band,
        palette::ORANGE,
    );

    vertices
}

/// One triangle per spike, flat orange
pub fn spikes(spikes: &[Spike]) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(spikes.len() * 3);

    for spike in spikes {
        for v in spike.verts {
            vertices.push(Vertex {
                pos: v,
                color: spike.color,
            });
        }
    }

    vertices
}

/// One quad per particle, lifespan mapped straight to alpha
pub fn particles(system: &ParticleSystem) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(system.particles.len() * 6);

    for particle in &system.particles {
        let alpha = particle.lifespan.clamp(0.0, 255.0) as u8;
        push_rect(
            &mut vertices,
            particle.pos,
            particle.size,
            system.color.with_alpha(alpha),
        );
    }

    vertices
}
