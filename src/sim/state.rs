//! Session state and core simulation types
//!
//! Everything the host needs to render a frame lives here; [`super::tick`]
//! is the only place that mutates it.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::difficulty::Difficulty;
use super::pipes::ObstaclePool;
use super::progress::Progression;
use crate::consts::*;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Timed gate before play begins or resumes
    Countdown,
    /// Active gameplay
    Playing,
    /// Manually paused; the simulation is fully frozen
    Paused,
    /// Collision or out-of-bounds ended the run; restart pending
    GameOver,
}

/// The player-controlled entity
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left corner position
    pub pos: Vec2,
    /// Vertical velocity (positive is downward)
    pub vel_y: f32,
}

impl Actor {
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(ACTOR_START_X, ACTOR_START_Y),
            vel_y: 0.0,
        }
    }

    /// Collision bounds
    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.pos + Vec2::new(ACTOR_WIDTH, ACTOR_HEIGHT))
    }

    /// Replace vertical velocity with the fixed upward impulse
    pub fn flap(&mut self) {
        self.vel_y = -FLAP_IMPULSE;
    }
}

impl Default for Actor {
    fn default() -> Self {
        Self::new()
    }
}

/// Observable things that happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The actor received the upward impulse
    Flapped,
    /// Countdown display value changed (seconds remaining)
    CountdownTick(u32),
    /// Countdown finished; play resumed
    CountdownFinished,
    /// Recycled pairs scored; payload is the new score
    ObstaclePassed(u32),
    /// The score crossed a threshold and the tier was promoted
    DifficultyRaised(Difficulty),
    /// The best score was beaten; payload is the new best
    NewBestScore(u32),
    /// Collision or out-of-bounds ended the run
    GameOver { score: u32 },
    /// The automatic post-game-over restart happened
    Restarted,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct SessionState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Current phase
    pub phase: SessionPhase,
    /// Simulation tick counter (only advances while playing)
    pub time_ticks: u64,
    /// Ticks left in the countdown gate
    pub countdown_ticks: u32,
    /// Ticks left before the automatic restart after game over
    pub restart_ticks: u32,
    /// Cosmetic background scroll offset
    pub scroll_offset: f32,
    /// Player-controlled entity
    pub actor: Actor,
    /// Obstacle pool
    pub pool: ObstaclePool,
    /// Score, best score and difficulty tier
    pub progress: Progression,
    /// Seeded RNG for obstacle placement
    pub(crate) rng: Pcg32,
}

impl SessionState {
    /// Create a new session with the given seed and persisted best score.
    ///
    /// The session starts in the countdown gate with the pool fully placed.
    pub fn new(seed: u64, best_score: u32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let pool = ObstaclePool::new(PAIRS_TO_RENDER, Difficulty::default(), &mut rng);
        Self {
            seed,
            phase: SessionPhase::Countdown,
            time_ticks: 0,
            countdown_ticks: COUNTDOWN_SECONDS * TICKS_PER_SECOND,
            restart_ticks: 0,
            scroll_offset: 0.0,
            actor: Actor::new(),
            pool,
            progress: Progression::new(best_score),
            rng,
        }
    }

    /// Countdown display value (whole seconds remaining, rounded up)
    pub fn countdown_seconds(&self) -> u32 {
        self.countdown_ticks.div_ceil(TICKS_PER_SECOND)
    }

    /// Reset everything but the best score and the RNG stream, then
    /// re-enter the countdown gate
    pub(crate) fn restart(&mut self) {
        self.progress.restart();
        self.actor = Actor::new();
        self.pool = ObstaclePool::new(PAIRS_TO_RENDER, self.progress.tier(), &mut self.rng);
        self.scroll_offset = 0.0;
        self.time_ticks = 0;
        self.countdown_ticks = COUNTDOWN_SECONDS * TICKS_PER_SECOND;
        self.restart_ticks = 0;
        self.phase = SessionPhase::Countdown;
    }
}
