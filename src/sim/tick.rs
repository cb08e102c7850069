//! Per-frame tick, pointer hit testing, and the one-second timer
//!
//! The loop driver calls [`tick`] once per animation frame, draws everything
//! [`GameState::visible`] yields, then calls [`check_target`]. The 1 Hz
//! timer calls [`second_tick`] on its own cadence, and pointer events route
//! through [`check_for_slice`]. All four are no-ops once the session leaves
//! Running, which is what lets the two callbacks interleave freely.

use super::projectile::SliceEffect;
use super::spawn;
use super::state::{GameOutcome, GameState};
use crate::consts::FRUIT_SCORE;

/// What one pointer event sliced, so the shell can play the matching cues
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SliceReport {
    pub fruits_sliced: u32,
    pub bomb_hit: bool,
}

impl SliceReport {
    pub fn hit_anything(&self) -> bool {
        self.fruits_sliced > 0 || self.bomb_hit
    }
}

/// Advance the session by one animation frame: sweep, spawn, physics.
pub fn tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }

    // Sweep: sliced projectiles and anything past the bottom are gone
    state.fruits.retain(|p| !p.sliced && !p.past_bottom());
    state.bombs.retain(|p| !p.sliced && !p.past_bottom());

    spawn::run_spawner(state);

    for p in state.fruits.iter_mut().chain(state.bombs.iter_mut()) {
        p.advance();
    }
}

/// End-of-tick win condition, applied after the frame is drawn.
pub fn check_target(state: &mut GameState) {
    if state.is_running() && state.score >= state.target_score {
        state.finish(GameOutcome::TargetReached);
    }
}

/// Hit-test a pointer position against every live projectile.
///
/// Fruits are tested before bombs; the order is cosmetic since every
/// containment test is independent, and one event may slice several
/// overlapping objects at once. Sliced fruits score immediately; a sliced
/// bomb ends the session.
pub fn check_for_slice(state: &mut GameState, x: f32, y: f32) -> SliceReport {
    let mut report = SliceReport::default();
    if !state.is_running() {
        return report;
    }

    for p in state.fruits.iter_mut().chain(state.bombs.iter_mut()) {
        if !p.contains_point(x, y) {
            continue;
        }
        match p.slice() {
            Some(SliceEffect::Score) => report.fruits_sliced += 1,
            Some(SliceEffect::Detonate) => report.bomb_hit = true,
            None => {}
        }
    }

    state.score += report.fruits_sliced * FRUIT_SCORE;
    if report.bomb_hit {
        state.finish(GameOutcome::BombHit);
    }
    report
}

/// One beat of the independent once-per-second timer.
pub fn second_tick(state: &mut GameState) {
    if !state.is_running() {
        return;
    }
    state.time_left = state.time_left.saturating_sub(1);
    if state.time_left == 0 {
        state.finish(GameOutcome::TimeExpired);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    use crate::consts::SURFACE_HEIGHT;
    use crate::settings::GameSettings;
    use crate::sim::projectile::{FruitKind, Projectile, ProjectileKind};
    use crate::sim::state::GamePhase;
    use crate::tuning::SpawnTuning;

    /// A running session whose spawner is switched off, so tests control
    /// exactly what is in the air.
    fn quiet_session(settings: GameSettings) -> GameState {
        let mut state = GameState::new(1234, settings);
        state.tuning = SpawnTuning::silent();
        state.start();
        state
    }

    fn fruit_at(x: f32, y: f32) -> Projectile {
        Projectile::new(
            Vec2::new(x, y),
            Vec2::ZERO,
            0.2,
            ProjectileKind::Fruit(FruitKind::Melon),
        )
    }

    fn bomb_at(x: f32, y: f32) -> Projectile {
        Projectile::new(Vec2::new(x, y), Vec2::ZERO, 0.1, ProjectileKind::Bomb)
    }

    #[test]
    fn test_tick_sweeps_sliced_and_fallen() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(100.0, 100.0));
        state.fruits.push(fruit_at(100.0, SURFACE_HEIGHT + 5.0));
        state.fruits[0].slice();
        state.bombs.push(bomb_at(50.0, 100.0));

        tick(&mut state);
        assert!(state.fruits.is_empty());
        assert_eq!(state.bombs.len(), 1);
    }

    #[test]
    fn test_tick_noop_outside_running() {
        let mut state = GameState::new(1, GameSettings::default());
        state.fruits.push(fruit_at(100.0, 100.0));
        let before = state.clone();

        tick(&mut state);
        assert_eq!(state, before);
    }

    #[test]
    fn test_slice_scores_in_fixed_increments() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(150.0, 200.0));

        let report = check_for_slice(&mut state, 150.0, 200.0);
        assert_eq!(report.fruits_sliced, 1);
        assert_eq!(state.score, FRUIT_SCORE);

        // Re-slicing the same spot is inert: the fruit is already sliced
        let report = check_for_slice(&mut state, 150.0, 200.0);
        assert!(!report.hit_anything());
        assert_eq!(state.score, FRUIT_SCORE);
    }

    #[test]
    fn test_overlapping_fruits_sliced_together() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(150.0, 200.0));
        state.fruits.push(fruit_at(160.0, 210.0));

        let report = check_for_slice(&mut state, 155.0, 205.0);
        assert_eq!(report.fruits_sliced, 2);
        assert_eq!(state.score, 2 * FRUIT_SCORE);
    }

    #[test]
    fn test_target_reached_after_exactly_one_hundred_slices() {
        let mut state = quiet_session(GameSettings::default());

        for i in 0..100 {
            state.fruits.push(fruit_at(150.0, 200.0));
            check_for_slice(&mut state, 150.0, 200.0);
            tick(&mut state);
            check_target(&mut state);
            if i < 99 {
                assert!(state.is_running(), "ended early after {} slices", i + 1);
            }
        }

        assert_eq!(state.score, 1000);
        assert_eq!(state.outcome(), Some(GameOutcome::TargetReached));
    }

    #[test]
    fn test_time_expires_with_no_slices() {
        let mut state = quiet_session(GameSettings::default());

        for _ in 0..99 {
            second_tick(&mut state);
        }
        assert!(state.is_running());
        assert_eq!(state.time_left, 1);

        second_tick(&mut state);
        assert_eq!(state.outcome(), Some(GameOutcome::TimeExpired));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_bomb_hit_beats_simultaneous_target() {
        let mut state = quiet_session(GameSettings::default());
        state.score = state.target_score;
        state.bombs.push(bomb_at(150.0, 200.0));

        let report = check_for_slice(&mut state, 150.0, 200.0);
        assert!(report.bomb_hit);
        assert_eq!(state.outcome(), Some(GameOutcome::BombHit));

        // The target condition in the same tick no longer applies
        tick(&mut state);
        check_target(&mut state);
        assert_eq!(state.outcome(), Some(GameOutcome::BombHit));
    }

    #[test]
    fn test_bomb_and_fruit_in_one_event() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(150.0, 200.0));
        state.bombs.push(bomb_at(155.0, 205.0));

        let report = check_for_slice(&mut state, 152.0, 202.0);
        assert_eq!(report.fruits_sliced, 1);
        assert!(report.bomb_hit);
        // The fruit still scored; the bomb still ended the run
        assert_eq!(state.score, FRUIT_SCORE);
        assert_eq!(state.outcome(), Some(GameOutcome::BombHit));
    }

    #[test]
    fn test_nothing_mutates_after_over() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(150.0, 200.0));
        state.bombs.push(bomb_at(50.0, 100.0));
        state.finish(GameOutcome::TimeExpired);

        let frozen = state.clone();
        tick(&mut state);
        second_tick(&mut state);
        check_target(&mut state);
        let report = check_for_slice(&mut state, 150.0, 200.0);

        assert!(!report.hit_anything());
        assert_eq!(state, frozen);
    }

    #[test]
    fn test_sliced_projectiles_are_not_visible() {
        let mut state = quiet_session(GameSettings::default());
        state.fruits.push(fruit_at(100.0, 100.0));
        state.fruits.push(fruit_at(250.0, 100.0));

        check_for_slice(&mut state, 100.0, 100.0);
        let visible: Vec<_> = state.visible().collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].pos.x, 250.0);
    }

    #[test]
    fn test_spawner_populates_both_sets() {
        let mut state = GameState::new(99, GameSettings::default());
        state.start();

        let (mut saw_fruit, mut saw_bomb) = (false, false);
        for _ in 0..2000 {
            tick(&mut state);
            saw_fruit |= !state.fruits.is_empty();
            saw_bomb |= !state.bombs.is_empty();
        }
        assert!(saw_fruit);
        assert!(saw_bomb);
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed produce identical trajectories
        let mut a = GameState::new(777, GameSettings::default());
        let mut b = GameState::new(777, GameSettings::default());
        a.start();
        b.start();

        for _ in 0..600 {
            tick(&mut a);
            tick(&mut b);
        }
        assert_eq!(a, b);
    }
}
