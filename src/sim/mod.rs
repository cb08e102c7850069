//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per animation frame, fixed per-tick physics increments
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod projectile;
pub mod spawn;
pub mod state;
pub mod tick;

pub use projectile::{FruitKind, Projectile, ProjectileKind, SliceEffect};
pub use spawn::{spawn_bomb, spawn_fruit};
pub use state::{GameOutcome, GamePhase, GameState};
pub use tick::{SliceReport, check_for_slice, check_target, second_tick, tick};
