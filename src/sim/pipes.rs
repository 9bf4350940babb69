//! Obstacle pool and placement engine
//!
//! A fixed-size set of obstacle pairs scrolls leftward; a pair that leaves
//! the playfield is re-placed ahead of the rightmost pair instead of being
//! destroyed. Recycling is the scoring signal: one recycled pair is one
//! passed obstacle.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use crate::consts::{EDGE_MARGIN, OBSTACLE_WIDTH, PLAYFIELD_HEIGHT};

/// One upper/lower obstacle sharing an x-coordinate and framing one gap.
///
/// Both halves always share `x`; the gap is `lower_y - upper_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObstaclePair {
    /// Left edge, shared by both halves
    pub x: f32,
    /// Lower edge of the upper obstacle (top of the gap)
    pub upper_y: f32,
    /// Upper edge of the lower obstacle (bottom of the gap)
    pub lower_y: f32,
}

impl ObstaclePair {
    /// Right edge of both halves
    pub fn right_edge(&self) -> f32 {
        self.x + OBSTACLE_WIDTH
    }

    /// Vertical opening between the halves
    pub fn gap(&self) -> f32 {
        self.lower_y - self.upper_y
    }
}

/// Fixed-size pool of recycled obstacle pairs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstaclePool {
    pairs: Vec<ObstaclePair>,
}

impl ObstaclePool {
    /// Create the pool, placing each pair to the right of the previous one
    pub fn new(pool_size: usize, difficulty: Difficulty, rng: &mut Pcg32) -> Self {
        let mut pool = Self {
            pairs: Vec::with_capacity(pool_size),
        };
        for _ in 0..pool_size {
            let pair = pool.place_next(difficulty, rng);
            pool.pairs.push(pair);
        }
        pool
    }

    /// All live pairs, in pool order
    pub fn pairs(&self) -> &[ObstaclePair] {
        &self.pairs
    }

    #[cfg(test)]
    pub(crate) fn pairs_mut(&mut self) -> &mut [ObstaclePair] {
        &mut self.pairs
    }

    /// Max x over all pairs (0 for an empty pool, which anchors the very
    /// first placement)
    pub fn rightmost_x(&self) -> f32 {
        self.pairs.iter().fold(0.0_f32, |acc, p| acc.max(p.x))
    }

    /// Shift every pair leftward by `dx`
    pub fn advance(&mut self, dx: f32) {
        for pair in &mut self.pairs {
            pair.x -= dx;
        }
    }

    /// Re-place every pair whose right edge has passed the left boundary.
    ///
    /// Returns the number of recycled pairs; each one is a passed obstacle.
    pub fn recycle(&mut self, difficulty: Difficulty, rng: &mut Pcg32) -> u32 {
        let mut recycled = 0;
        for idx in 0..self.pairs.len() {
            if self.pairs[idx].right_edge() <= 0.0 {
                let fresh = self.place_next(difficulty, rng);
                self.pairs[idx] = fresh;
                recycled += 1;
            }
        }
        recycled
    }

    /// Compute a fresh placement strictly to the right of every existing
    /// pair, with the gap fully inside the playfield's vertical margins
    fn place_next(&self, difficulty: Difficulty, rng: &mut Pcg32) -> ObstaclePair {
        let ranges = difficulty.ranges();
        let vertical_gap = rng.random_range(ranges.vertical_gap);
        let max_upper = PLAYFIELD_HEIGHT as i32 - EDGE_MARGIN - vertical_gap;
        let upper_y = rng.random_range(EDGE_MARGIN..=max_upper);
        let horizontal_gap = rng.random_range(ranges.horizontal_gap);

        ObstaclePair {
            x: self.rightmost_x() + horizontal_gap as f32,
            upper_y: upper_y as f32,
            lower_y: (upper_y + vertical_gap) as f32,
        }
    }
}
