//! Probabilistic projectile spawner
//!
//! Each tick rolls the fruit and bomb chances independently against the
//! session RNG. There is no cap on live projectiles; attrition comes from
//! falling off the bottom of the surface.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;

use super::projectile::{FruitKind, Projectile, ProjectileKind};
use super::state::GameState;
use crate::tuning::SpawnTuning;

/// Launch one fruit of a uniformly random kind.
pub fn spawn_fruit(rng: &mut Pcg32, tuning: &SpawnTuning) -> Projectile {
    let kind = FruitKind::ALL[rng.random_range(0..FruitKind::ALL.len())];
    let pos = Vec2::new(
        rng.random_range(tuning.launch_x.clone()),
        rng.random_range(tuning.launch_height.clone()),
    );
    let vel = Vec2::new(
        rng.random_range(tuning.drift.clone()),
        rng.random_range(tuning.fruit_launch_speed.clone()),
    );
    Projectile::new(pos, vel, tuning.fruit_gravity, ProjectileKind::Fruit(kind))
}

/// Launch one bomb. Bombs use their own velocity/gravity ranges.
pub fn spawn_bomb(rng: &mut Pcg32, tuning: &SpawnTuning) -> Projectile {
    let pos = Vec2::new(
        rng.random_range(tuning.launch_x.clone()),
        rng.random_range(tuning.launch_height.clone()),
    );
    let vel = Vec2::new(
        rng.random_range(tuning.drift.clone()),
        rng.random_range(tuning.bomb_launch_speed.clone()),
    );
    Projectile::new(pos, vel, tuning.bomb_gravity, ProjectileKind::Bomb)
}

/// Run both spawn rolls for one tick, appending to the active sets.
pub(crate) fn run_spawner(state: &mut GameState) {
    if state.rng.random::<f32>() < state.tuning.fruit_chance {
        let fruit = spawn_fruit(&mut state.rng, &state.tuning);
        state.fruits.push(fruit);
    }
    if state.rng.random::<f32>() < state.tuning.bomb_chance {
        let bomb = spawn_bomb(&mut state.rng, &state.tuning);
        state.bombs.push(bomb);
    }
}
