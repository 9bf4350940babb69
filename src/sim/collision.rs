//! Axis-aligned collision queries between the actor and obstacle pairs
//!
//! Plain AABB math, kept inside the sim so bounds and collision checks run
//! in the same tick as recycling and scoring.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::pipes::ObstaclePair;
use crate::consts::{OBSTACLE_WIDTH, PLAYFIELD_HEIGHT};

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Whether two boxes overlap (touching edges do not count)
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// Check whether the actor's bounds intersect either half of a pair.
///
/// Each half is a full-height column outside the gap: the upper obstacle
/// occupies everything above `upper_y`, the lower everything below
/// `lower_y`, across the pair's x-span.
pub fn actor_hits_pair(bounds: &Aabb, pair: &ObstaclePair) -> bool {
    let x_overlap = bounds.max.x > pair.x && bounds.min.x < pair.x + OBSTACLE_WIDTH;
    x_overlap && (bounds.min.y < pair.upper_y || bounds.max.y > pair.lower_y)
}

/// Check whether the actor has left the playfield vertically
pub fn out_of_bounds(bounds: &Aabb) -> bool {
    bounds.max.y >= PLAYFIELD_HEIGHT || bounds.min.y <= 0.0
}
