//! Session state machine and owned game state
//!
//! One `GameState` is one play-through. The loop driver owns it exclusively;
//! the frame tick and the one-second timer both mutate it cooperatively, so
//! the only coordination needed is the first-wins terminal transition in
//! [`GameState::finish`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::projectile::Projectile;
use crate::settings::GameSettings;
use crate::tuning::SpawnTuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Waiting for required sprites before the first tick
    Loading,
    /// Active gameplay
    Running,
    /// Run ended (terminal)
    Over(GameOutcome),
}

/// Why a session ended
///
/// Outcomes are mutually exclusive: whichever condition is detected first
/// freezes the session, and later conditions are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The score reached the target before time ran out
    TargetReached,
    /// The timer hit zero while short of the target
    TimeExpired,
    /// A bomb was sliced
    BombHit,
}

impl GameOutcome {
    /// Player-facing game-over message
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::TargetReached => "Congratulations! You reached the target score.",
            GameOutcome::TimeExpired => "Time is up! You didn't reach the target score.",
            GameOutcome::BombHit => "Game Over! You sliced a bomb.",
        }
    }
}

/// Complete session state (deterministic for a given seed and input trace)
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; all spawn randomness flows through here
    pub rng: Pcg32,
    pub score: u32,
    /// Remaining time in whole seconds
    pub time_left: u32,
    pub target_score: u32,
    pub phase: GamePhase,
    /// Live fruits, swept each tick
    pub fruits: Vec<Projectile>,
    /// Live bombs, swept each tick
    pub bombs: Vec<Projectile>,
    pub tuning: SpawnTuning,
}

impl GameState {
    /// Create a fresh session in the Loading phase.
    pub fn new(seed: u64, settings: GameSettings) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            time_left: settings.time_limit,
            target_score: settings.target_score,
            phase: GamePhase::Loading,
            fruits: Vec::new(),
            bombs: Vec::new(),
            tuning: SpawnTuning::default(),
        }
    }

    /// Enter Running once the required assets are ready. No-op outside Loading.
    pub fn start(&mut self) {
        if self.phase == GamePhase::Loading {
            self.phase = GamePhase::Running;
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Terminal transition, first-wins: only an active session can end, and
    /// only once. Later outcomes in the same or subsequent ticks are ignored.
    pub fn finish(&mut self, outcome: GameOutcome) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Over(outcome);
        }
    }

    /// The outcome, once the session is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.phase {
            GamePhase::Over(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Every projectile that should be drawn this frame: live and unsliced.
    pub fn visible(&self) -> impl Iterator<Item = &Projectile> {
        self.fruits
            .iter()
            .chain(self.bombs.iter())
            .filter(|p| !p.sliced)
    }
}
