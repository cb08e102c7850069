//! Fruit Rush - a fruit-slicing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (projectile physics, spawning, hit testing, session state)
//! - `renderer`: Canvas 2D drawing (clear + sprite blits)
//! - `assets`: Sprite loading and the ready signal that gates session start
//! - `audio`: Procedural sound cues via the Web Audio API
//! - `settings`: Persisted time limit / target score with defaults
//! - `tuning`: Data-driven spawn balance

pub mod highscores;
pub mod settings;
pub mod sim;
pub mod tuning;

#[cfg(target_arch = "wasm32")]
pub mod assets;
#[cfg(target_arch = "wasm32")]
pub mod audio;
#[cfg(target_arch = "wasm32")]
pub mod renderer;

pub use highscores::HighScores;
pub use settings::GameSettings;

/// Game configuration constants
pub mod consts {
    /// Logical playfield size (the canvas is fixed at this resolution)
    pub const SURFACE_WIDTH: f32 = 300.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Half-extent of the square slice hitbox around each projectile
    pub const HIT_HALF_EXTENT: f32 = 60.0;

    /// Sprites are drawn 60x60, centered on the projectile position
    pub const SPRITE_SIZE: f32 = 60.0;

    /// Points awarded per sliced fruit
    pub const FRUIT_SCORE: u32 = 10;

    /// Settings fallbacks when storage is missing or unparseable
    pub const DEFAULT_TIME_LIMIT: u32 = 100;
    pub const DEFAULT_TARGET_SCORE: u32 = 1000;
}
