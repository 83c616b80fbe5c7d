//! Game state and core simulation types
//!
//! Everything needed to reproduce a run from its seed lives here. World
//! coordinates match the 256x144 frame, with y growing downward.

use glam::Vec2;

use super::collision::point_in_triangle;
use super::particles::ParticleSystem;
use super::rng::GameRng;
use crate::consts::*;
use crate::Rgba;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Fresh run, waiting for the first flip
    Ready,
    /// Active flight
    Running,
    /// Run ended, waiting for restart
    GameOver,
}

/// The player's ship, an axis-aligned box that only ever moves vertically
#[derive(Debug, Clone, Copy)]
pub struct Player {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub vel: Vec2,
    pub dead: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            // Centered in the field; velocity points down until the first flip
            pos: Vec2::new(
                FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
                FIELD_HEIGHT / 2.0 - PLAYER_HEIGHT / 2.0,
            ),
            vel: Vec2::new(0.0, PLAYER_SPEED),
            dead: false,
        }
    }
}

impl Player {
    /// Invert the vertical velocity. Speed magnitude never changes.
    pub fn flip(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Advance position and kill the player on rail contact
    pub fn integrate(&mut self, dt: f32) {
        self.pos += self.vel * dt;

        if self.pos.y < TOP_RAIL {
            self.dead = true;
        } else if self.pos.y + PLAYER_HEIGHT > BOTTOM_RAIL {
            self.dead = true;
        }
    }

    /// The four corners of the bounding box, used for spike hit tests
    pub fn corners(&self) -> [Vec2; 4] {
        let Vec2 { x, y } = self.pos;
        [
            Vec2::new(x, y),
            Vec2::new(x + PLAYER_WIDTH, y),
            Vec2::new(x, y + PLAYER_HEIGHT),
            Vec2::new(x + PLAYER_WIDTH, y + PLAYER_HEIGHT),
        ]
    }
}

/// A triangular obstacle anchored to one of the rails
#[derive(Debug, Clone, Copy)]
pub struct Spike {
    /// Left base, apex, right base
    pub verts: [Vec2; 3],
    pub color: Rgba,
    /// Hangs from the top rail (false: grows from the bottom rail)
    pub top: bool,
    /// Already counted toward the score
    pub passed: bool,
}

impl Spike {
    /// Build a spike centered on `x` with its base flush against a rail
    pub fn new(x: f32, base_width: f32, height: f32, top: bool) -> Self {
        let (base_y, apex_y) = if top {
            (TOP_RAIL, TOP_RAIL + height)
        } else {
            (BOTTOM_RAIL, BOTTOM_RAIL - height)
        };

        Self {
            verts: [
                Vec2::new(x - base_width / 2.0, base_y),
                Vec2::new(x, apex_y),
                Vec2::new(x + base_width / 2.0, base_y),
            ],
            color: palette::ORANGE,
            top,
            passed: false,
        }
    }

    /// Shift the spike horizontally
    pub fn translate(&mut self, dx: f32) {
        for v in &mut self.verts {
            v.x += dx;
        }
    }

    /// The tip vertex; crossing its x scores the spike
    pub fn apex(&self) -> Vec2 {
        self.verts[1]
    }

    /// X of the rightmost vertex; the spike is gone once this leaves the world
    pub fn trailing_x(&self) -> f32 {
        self.verts[2].x
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point_in_triangle(point, &self.verts)
    }
}

/// Death shake starting radius
pub const SHAKE_RADIUS: f32 = 30.0;
/// Multiplicative shake decay per tick
pub const SHAKE_DECAY: f32 = 0.9;
/// Below this radius the shake hands over to recentering
pub const SHAKE_MIN_RADIUS: f32 = 1.0;
/// Recentering step per tick, per axis
pub const RECENTER_STEP_X: f32 = 0.25;
pub const RECENTER_STEP_Y: f32 = 0.5;

/// What the camera is currently doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMotion {
    Steady,
    /// Death shake; the offset radius decays every tick
    Shaking { radius: f32 },
    /// Easing back toward the home center after a shake
    Recentering,
}

/// View over the field: a center that shakes on death and a slow spin
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub center: Vec2,
    /// Where the center returns to after a shake
    pub home: Vec2,
    /// View rotation in degrees, accumulated while spikes scroll
    pub rotation: f32,
    pub motion: CameraMotion,
}

impl Default for Camera {
    fn default() -> Self {
        let home = Vec2::new(FIELD_WIDTH / 2.0, FIELD_HEIGHT / 2.0);
        Self {
            center: home,
            home,
            rotation: 0.0,
            motion: CameraMotion::Steady,
        }
    }
}

impl Camera {
    pub fn start_shake(&mut self) {
        self.motion = CameraMotion::Shaking {
            radius: SHAKE_RADIUS,
        };
    }

    /// Advance the shake/recenter state machine by one tick
    pub fn advance(&mut self, rng: &mut GameRng) {
        match self.motion {
            CameraMotion::Steady => {}
            CameraMotion::Shaking { radius } => {
                let radius = radius * SHAKE_DECAY;
                let angle = rng.f32(0.0, 360.0).to_radians();
                // The y throw is quartered so the shake reads as sideways
                self.center += Vec2::new(angle.sin() * radius, angle.cos() * radius / 4.0);
                self.motion = if radius > SHAKE_MIN_RADIUS {
                    CameraMotion::Shaking { radius }
                } else {
                    CameraMotion::Recentering
                };
            }
            CameraMotion::Recentering => {
                let delta = self.home - self.center;
                self.center.x += delta.x.clamp(-RECENTER_STEP_X, RECENTER_STEP_X);
                self.center.y += delta.y.clamp(-RECENTER_STEP_Y, RECENTER_STEP_Y);
                if self.center == self.home {
                    self.motion = CameraMotion::Steady;
                }
            }
        }
    }

    /// World position to frame position under the current view
    pub fn world_to_screen(&self, p: Vec2) -> Vec2 {
        let (sin, cos) = (-self.rotation.to_radians()).sin_cos();
        let rel = p - self.center;
        Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos) + self.home
    }

    /// Inverse of `world_to_screen`, used for textured blits
    pub fn screen_to_world(&self, p: Vec2) -> Vec2 {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let rel = p - self.home;
        Vec2::new(rel.x * cos - rel.y * sin, rel.x * sin + rel.y * cos) + self.center
    }
}

/// Complete game state (deterministic)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Session seed for reproducibility
    pub seed: u64,
    /// RNG stream; shared by spawning, particles and the camera shake
    pub rng: GameRng,
    /// Current phase
    pub phase: GamePhase,
    /// Spikes dodged this run
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Player ship
    pub player: Player,
    /// Live spikes, oldest first
    pub spikes: Vec<Spike>,
    /// Looping emitter trailing the ship
    pub thruster: ParticleSystem,
    /// View state
    pub camera: Camera,
    /// Current leftward spike speed
    pub scroll_speed: f32,
    /// Seconds of active scroll since the last spawn
    pub spawn_clock: f32,
    /// Orientation the next pair leads with; alternates every pair
    pub next_spike_top: bool,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        let player = Player::default();
        let thruster =
            ParticleSystem::new(player.pos, THRUSTER_PARTICLES, palette::THRUSTER, true, &mut rng);

        Self {
            seed,
            rng,
            phase: GamePhase::Ready,
            score: 0,
            time_ticks: 0,
            player,
            spikes: Vec::new(),
            thruster,
            camera: Camera::default(),
            scroll_speed: 0.0,
            spawn_clock: 0.0,
            next_spike_top: true,
        }
    }

    /// Reset everything for a fresh run. The RNG stream keeps going so
    /// consecutive runs in one session differ.
    pub fn reset_run(&mut self) {
        self.phase = GamePhase::Ready;
        self.score = 0;
        self.player = Player::default();
        self.spikes.clear();
        self.camera = Camera::default();
        self.scroll_speed = 0.0;
        self.spawn_clock = 0.0;
        self.next_spike_top = true;
        self.thruster = ParticleSystem::new(
            self.player.pos,
            THRUSTER_PARTICLES,
            palette::THRUSTER,
            true,
            &mut self.rng,
        );
    }

    /// Spawn a spike pair just past the right edge
    ///
    /// Both spikes share one width/height roll; the second sits
    /// `SPIKE_PAIR_OFFSET` further right on the opposite rail.
    pub fn spawn_spike_pair(&mut self) {
        let base_width = self.rng.f32(SPIKE_WIDTH_MIN, SPIKE_WIDTH_MAX);
        let height = self.rng.f32(SPIKE_HEIGHT_MIN, SPIKE_HEIGHT_MAX);
        let top = self.next_spike_top;

        self.spikes.push(Spike::new(SPAWN_X, base_width, height, top));
        self.spikes.push(Spike::new(
            SPAWN_X + SPIKE_PAIR_OFFSET,
            base_width,
            height,
            !top,
        ));
        self.next_spike_top = !top;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_starts_centered_and_falling() {
        let player = Player::default();
        assert_eq!(player.pos, Vec2::new(124.0, 68.0));
        assert_eq!(player.vel, Vec2::new(0.0, PLAYER_SPEED));
        assert!(!player.dead);
    }

    #[test]
    fn test_flip_only_changes_sign() {
        let mut player = Player::default();
        player.flip();
        assert_eq!(player.vel.y, -PLAYER_SPEED);
        player.flip();
        assert_eq!(player.vel.y, PLAYER_SPEED);
    }

    #[test]
    fn test_integrate_kills_on_rails() {
        let mut player = Player::default();
        player.pos.y = TOP_RAIL + 1.0;
        player.vel.y = -PLAYER_SPEED;
        player.integrate(0.1);
        assert!(player.dead);

        let mut player = Player::default();
        player.pos.y = BOTTOM_RAIL - PLAYER_HEIGHT - 1.0;
        player.integrate(0.1);
        assert!(player.dead);
    }

    #[test]
    fn test_corners_cover_the_box() {
        let player = Player::default();
        let [tl, tr, bl, br] = player.corners();
        assert_eq!(tl, player.pos);
        assert_eq!(tr, player.pos + Vec2::new(PLAYER_WIDTH, 0.0));
        assert_eq!(bl, player.pos + Vec2::new(0.0, PLAYER_HEIGHT));
        assert_eq!(br, player.pos + Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
    }

    #[test]
    fn test_spike_geometry_top() {
        let spike = Spike::new(300.0, 40.0, 60.0, true);
        assert_eq!(spike.verts[0], Vec2::new(280.0, TOP_RAIL));
        assert_eq!(spike.apex(), Vec2::new(300.0, TOP_RAIL + 60.0));
        assert_eq!(spike.verts[2], Vec2::new(320.0, TOP_RAIL));
        assert!(spike.top);
        assert!(!spike.passed);
    }

    #[test]
    fn test_spike_geometry_bottom() {
        let spike = Spike::new(300.0, 40.0, 60.0, false);
        assert_eq!(spike.verts[0], Vec2::new(280.0, BOTTOM_RAIL));
        assert_eq!(spike.apex(), Vec2::new(300.0, BOTTOM_RAIL - 60.0));
        assert_eq!(spike.trailing_x(), 320.0);
    }

    #[test]
    fn test_spike_translate_moves_all_verts() {
        let mut spike = Spike::new(300.0, 40.0, 60.0, false);
        spike.translate(-10.0);
        assert_eq!(spike.verts[0].x, 270.0);
        assert_eq!(spike.apex().x, 290.0);
        assert_eq!(spike.trailing_x(), 310.0);
        // Heights untouched
        assert_eq!(spike.verts[0].y, BOTTOM_RAIL);
    }

    #[test]
    fn test_spike_contains_apex_region() {
        let spike = Spike::new(100.0, 40.0, 60.0, false);
        assert!(spike.contains(Vec2::new(100.0, BOTTOM_RAIL - 30.0)));
        assert!(!spike.contains(Vec2::new(100.0, BOTTOM_RAIL - 61.0)));
        assert!(!spike.contains(Vec2::new(140.0, BOTTOM_RAIL - 1.0)));
    }

    #[test]
    fn test_shake_hands_over_to_recentering() {
        let mut camera = Camera::default();
        let mut rng = GameRng::new(5);
        camera.start_shake();

        // 30 * 0.9^n drops below 1 after 33 decays
        for _ in 0..32 {
            camera.advance(&mut rng);
            assert!(matches!(camera.motion, CameraMotion::Shaking { .. }));
        }
        camera.advance(&mut rng);
        assert_eq!(camera.motion, CameraMotion::Recentering);
    }

    #[test]
    fn test_shake_moves_the_center() {
        let mut camera = Camera::default();
        let mut rng = GameRng::new(5);
        camera.start_shake();
        camera.advance(&mut rng);
        assert_ne!(camera.center, camera.home);
    }

    #[test]
    fn test_recentering_reaches_home_and_stops() {
        let mut camera = Camera::default();
        camera.center = camera.home + Vec2::new(13.0, -20.0);
        camera.motion = CameraMotion::Recentering;
        let mut rng = GameRng::new(5);

        for _ in 0..100 {
            camera.advance(&mut rng);
        }
        assert_eq!(camera.center, camera.home);
        assert_eq!(camera.motion, CameraMotion::Steady);
    }

    #[test]
    fn test_world_to_screen_round_trips() {
        let mut camera = Camera::default();
        camera.rotation = 23.0;
        camera.center = Vec2::new(120.0, 80.0);
        let p = Vec2::new(40.0, 100.0);
        let back = camera.screen_to_world(camera.world_to_screen(p));
        assert!((back - p).length() < 0.001);
    }

    #[test]
    fn test_world_to_screen_identity_at_rest() {
        let camera = Camera::default();
        let p = Vec2::new(40.0, 100.0);
        assert!((camera.world_to_screen(p) - p).length() < 0.001);
    }

    #[test]
    fn test_spawn_pair_shares_roll_and_alternates() {
        let mut state = GameState::new(123);
        state.spawn_spike_pair();
        assert_eq!(state.spikes.len(), 2);

        let (a, b) = (state.spikes[0], state.spikes[1]);
        assert!(a.top);
        assert!(!b.top);
        // Same base width and height, offset apexes
        let width_a = a.verts[2].x - a.verts[0].x;
        let width_b = b.verts[2].x - b.verts[0].x;
        assert!((width_a - width_b).abs() < 0.001);
        assert!((SPIKE_WIDTH_MIN..=SPIKE_WIDTH_MAX).contains(&width_a));
        assert_eq!(a.apex().x, SPAWN_X);
        assert_eq!(b.apex().x, SPAWN_X + SPIKE_PAIR_OFFSET);

        // Next pair leads with the opposite orientation
        state.spawn_spike_pair();
        assert!(!state.spikes[2].top);
        assert!(state.spikes[3].top);
    }

    #[test]
    fn test_reset_run_restores_initial_state() {
        let mut state = GameState::new(7);
        state.score = 12;
        state.player.dead = true;
        state.phase = GamePhase::GameOver;
        state.scroll_speed = 180.0;
        state.spawn_clock = 0.5;
        state.spawn_spike_pair();
        state.camera.start_shake();

        state.reset_run();

        assert_eq!(state.phase, GamePhase::Ready);
        assert_eq!(state.score, 0);
        assert!(!state.player.dead);
        assert!(state.spikes.is_empty());
        assert_eq!(state.scroll_speed, 0.0);
        assert_eq!(state.spawn_clock, 0.0);
        assert!(state.next_spike_top);
        assert_eq!(state.camera.motion, CameraMotion::Steady);
        assert_eq!(state.camera.center, state.camera.home);
    }
}
