//! Rocketman - a single-screen dodge-the-spikes arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (flight, spikes, collisions, game state)
//! - `renderer`: CPU rasterizer producing the fixed-resolution RGBA frame

pub mod renderer;
pub mod sim;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Logical frame the game is rasterized into, scaled up at presentation
    pub const FRAME_WIDTH: u32 = 256;
    pub const FRAME_HEIGHT: u32 = 144;
    /// Frame dimensions in world units (world and frame are 1:1)
    pub const FIELD_WIDTH: f32 = FRAME_WIDTH as f32;
    pub const FIELD_HEIGHT: f32 = FRAME_HEIGHT as f32;

    /// Window defaults
    pub const WINDOW_WIDTH: u32 = 1280;
    pub const WINDOW_HEIGHT: u32 = 720;
    pub const WINDOW_TITLE: &str = "Rocketman";

    /// Margin between the field edge and the kill rails
    pub const GAP: f32 = 10.0;
    /// Flying above this y kills the player
    pub const TOP_RAIL: f32 = GAP;
    /// Flying below this y kills the player
    pub const BOTTOM_RAIL: f32 = FIELD_HEIGHT - GAP;

    /// Player bounding box
    pub const PLAYER_WIDTH: f32 = 8.0;
    pub const PLAYER_HEIGHT: f32 = 8.0;
    /// Vertical speed magnitude; only the sign ever changes
    pub const PLAYER_SPEED: f32 = 200.0;

    /// Leftward spike scroll speed while a run is active
    pub const SCROLL_SPEED: f32 = 200.0;
    /// Scroll deceleration while no run is active
    pub const SCROLL_DECEL: f32 = 2000.0;

    /// Seconds of active scroll between spike pair spawns
    pub const SPAWN_INTERVAL: f32 = 0.7;
    /// X coordinate new pairs appear at, past the right edge
    pub const SPAWN_X: f32 = FIELD_WIDTH + 60.0;
    /// Horizontal offset of the second spike in a pair
    pub const SPIKE_PAIR_OFFSET: f32 = 6.0 * GAP;
    /// Spike base width range (both spikes of a pair share one roll)
    pub const SPIKE_WIDTH_MIN: f32 = 30.0;
    pub const SPIKE_WIDTH_MAX: f32 = 60.0;
    /// Spike height range
    pub const SPIKE_HEIGHT_MIN: f32 = 50.0;
    pub const SPIKE_HEIGHT_MAX: f32 = 80.0;

    /// Field rotation while spikes are scrolling, degrees per second
    pub const FIELD_SPIN_RATE: f32 = 10.0;

    /// Particle count in the ship's thruster emitter
    pub const THRUSTER_PARTICLES: usize = 500;

    /// Game palette
    pub mod palette {
        use crate::Rgba;

        pub const RED: Rgba = Rgba::hex(0xFF4649FF);
        pub const ORANGE: Rgba = Rgba::hex(0xFF861DFF);
        pub const GRAY: Rgba = Rgba::hex(0x1A1A1AFF);
        pub const WHITE: Rgba = Rgba::hex(0xFFFFFFFF);
        pub const BLUE: Rgba = Rgba::hex(0x55AAFFFF);
        /// Thruster particle tint
        pub const THRUSTER: Rgba = Rgba::hex(0x7DC7FFFF);
        /// Score digits, one shade off the background
        pub const SCORE_TEXT: Rgba = Rgba::hex(0x1F1F1FFF);
    }
}

/// RGBA color, 8 bits per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// Build a color from a 0xRRGGBBAA literal
    #[inline]
    pub const fn hex(rgba: u32) -> Self {
        Self {
            r: (rgba >> 24) as u8,
            g: (rgba >> 16) as u8,
            b: (rgba >> 8) as u8,
            a: rgba as u8,
        }
    }

    /// Same color with a different alpha
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_hex_unpacks_channels() {
        let c = Rgba::hex(0xFF861DFF);
        assert_eq!(c.r, 0xFF);
        assert_eq!(c.g, 0x86);
        assert_eq!(c.b, 0x1D);
        assert_eq!(c.a, 0xFF);
    }

    #[test]
    fn test_rgba_with_alpha_keeps_rgb() {
        let c = Rgba::hex(0x7DC7FFFF).with_alpha(0x40);
        assert_eq!((c.r, c.g, c.b, c.a), (0x7D, 0xC7, 0xFF, 0x40));
    }
}
