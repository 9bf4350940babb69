//! Score bookkeeping and difficulty progression
//!
//! The score only moves forward within a session; the difficulty tier is
//! promoted when a threshold is reached or crossed and never demoted. The
//! best score survives restarts.

use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;

/// Score, best score and current tier for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progression {
    score: u32,
    best: u32,
    tier: Difficulty,
}

impl Progression {
    /// Start a fresh session with a previously persisted best score
    pub fn new(best: u32) -> Self {
        Self {
            score: 0,
            best,
            tier: Difficulty::Easy,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn tier(&self) -> Difficulty {
        self.tier
    }

    /// Record `count` passed obstacles.
    ///
    /// Returns the new tier if the score crossed a threshold this call.
    pub fn record_pass(&mut self, count: u32) -> Option<Difficulty> {
        self.score += count;
        let target = Difficulty::for_score(self.score);
        if target > self.tier {
            self.tier = target;
            return Some(target);
        }
        None
    }

    /// Raise the stored best if the current score beats it.
    ///
    /// Returns true when a new best was set.
    pub fn note_best(&mut self) -> bool {
        if self.score > self.best {
            self.best = self.score;
            true
        } else {
            false
        }
    }

    /// Reset per-session fields, keeping the best score
    pub fn restart(&mut self) {
        self.score = 0;
        self.tier = Difficulty::Easy;
    }
}
