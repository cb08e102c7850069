//! Data-driven game balance
//!
//! Every number the spawner draws from lives here, so tests can pin spawn
//! behavior (or switch it off) without touching the sim.

use std::ops::Range;

use crate::consts::SURFACE_WIDTH;

/// Gameplay tuning for the projectile spawner.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnTuning {
    /// Per-tick probability of launching one fruit.
    pub fruit_chance: f32,

    /// Per-tick probability of launching one bomb. Rolled independently of
    /// the fruit chance: both, either, or neither may spawn in a tick.
    pub bomb_chance: f32,

    /// Horizontal start position, in surface units.
    pub launch_x: Range<f32>,

    /// Vertical start position (launch height), in surface units.
    pub launch_height: Range<f32>,

    /// Sideways drift velocity per tick.
    pub drift: Range<f32>,

    /// Upward launch velocity per tick for fruits (negative is up).
    pub fruit_launch_speed: Range<f32>,

    /// Per-tick gravity applied to fruits.
    pub fruit_gravity: f32,

    /// Upward launch velocity per tick for bombs. Bombs launch slower and
    /// hang longer than fruit.
    pub bomb_launch_speed: Range<f32>,

    /// Per-tick gravity applied to bombs.
    pub bomb_gravity: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            fruit_chance: 0.04,
            bomb_chance: 0.01,
            launch_x: 0.0..SURFACE_WIDTH,
            launch_height: 100.0..200.0,
            drift: -2.0..2.0,
            fruit_launch_speed: -8.0..-5.0,
            fruit_gravity: 0.2,
            bomb_launch_speed: -6.0..-4.0,
            bomb_gravity: 0.1,
        }
    }
}

impl SpawnTuning {
    /// Tuning with both spawn rolls disabled, for tests that plant their own
    /// projectiles.
    pub fn silent() -> Self {
        Self {
            fruit_chance: 0.0,
            bomb_chance: 0.0,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ranges_are_sane() {
        let t = SpawnTuning::default();
        assert!(t.fruit_chance > 0.0 && t.fruit_chance < 1.0);
        assert!(t.bomb_chance > 0.0 && t.bomb_chance < t.fruit_chance);
        assert!(t.launch_x.start < t.launch_x.end);
        assert!(t.fruit_launch_speed.end <= 0.0, "fruits must launch upward");
        assert!(t.bomb_launch_speed.end <= 0.0, "bombs must launch upward");
    }

    #[test]
    fn test_silent_disables_spawning() {
        let t = SpawnTuning::silent();
        assert_eq!(t.fruit_chance, 0.0);
        assert_eq!(t.bomb_chance, 0.0);
    }
}
