//! Collision detection between the player and spikes
//!
//! Spikes are solid triangles, so the whole hit test reduces to asking whether
//! any corner of the player's bounding box lies inside a triangle. The test
//! uses three signed edge functions; a point on an edge or vertex counts as
//! inside, so grazing contact still kills.

use glam::Vec2;

/// Signed edge function: which side of the directed edge a->b the point is on
#[inline]
fn edge_sign(p: Vec2, a: Vec2, b: Vec2) -> f32 {
    (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
}

/// Check whether a point lies inside a triangle (boundary inclusive)
///
/// Works for either winding order: the point is inside when the three edge
/// signs do not mix positive and negative.
pub fn point_in_triangle(point: Vec2, verts: &[Vec2; 3]) -> bool {
    let d1 = edge_sign(point, verts[0], verts[1]);
    let d2 = edge_sign(point, verts[1], verts[2]);
    let d3 = edge_sign(point, verts[2], verts[0]);

    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;

    !(has_neg && has_pos)
}
