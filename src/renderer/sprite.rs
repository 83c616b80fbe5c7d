//! Ship sprite loading and blitting

use glam::Vec2;

use super::raster;
use crate::Rgba;
use crate::sim::Camera;

/// Decoded RGBA8 texture for the ship
pub struct ShipSprite {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl ShipSprite {
    /// Decode a png from disk
    pub fn load(path: &str) -> image::ImageResult<Self> {
        let img = image::open(path)?.to_rgba8();
        let (width, height) = img.dimensions();
        Ok(Self {
            width,
            height,
            rgba: img.into_raw(),
        })
    }

    /// Build a sprite from raw RGBA8 pixels
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        debug_assert_eq!(rgba.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            rgba,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Blit the sprite over a world-space rectangle through the camera
    ///
    /// Candidate frame pixels are mapped back into sprite space and
    /// nearest-sampled, so the blit stays crisp under view rotation.
    pub fn draw(&self, frame: &mut [u8], camera: &Camera, pos: Vec2, size: Vec2) {
        let corners = [
            camera.world_to_screen(pos),
            camera.world_to_screen(pos + Vec2::new(size.x, 0.0)),
            camera.world_to_screen(pos + Vec2::new(0.0, size.y)),
            camera.world_to_screen(pos + size),
        ];
        let min_x = corners.iter().fold(f32::MAX, |m, c| m.min(c.x)).floor() as i32;
        let min_y = corners.iter().fold(f32::MAX, |m, c| m.min(c.y)).floor() as i32;
        let max_x = corners.iter().fold(f32::MIN, |m, c| m.max(c.x)).ceil() as i32;
        let max_y = corners.iter().fold(f32::MIN, |m, c| m.max(c.y)).ceil() as i32;

        for y in min_y..max_y {
            for x in min_x..max_x {
                let world = camera.screen_to_world(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
                let local = (world - pos) / size;
                if !(0.0..1.0).contains(&local.x) || !(0.0..1.0).contains(&local.y) {
                    continue;
                }

                let tx = ((local.x * self.width as f32) as u32).min(self.width - 1);
                let ty = ((local.y * self.height as f32) as u32).min(self.height - 1);
                let idx = ((ty * self.width + tx) * 4) as usize;
                let texel = Rgba {
                    r: self.rgba[idx],
                    g: self.rgba[idx + 1],
                    b: self.rgba[idx + 2],
                    a: self.rgba[idx + 3],
                };
                raster::blend_pixel(frame, x, y, texel);
            }
        }
    }
}
