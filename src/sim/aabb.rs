//! Axis-aligned bounding boxes
//!
//! Every collidable in the arena reduces to an AABB. Overlap is split per axis
//! so collision response can tell which axis closed the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box in arena coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    /// Top-left corner
    pub min: Vec2,
    /// Bottom-right corner
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Box from a top-left corner and a size
    pub fn from_rect(pos: Vec2, size: Vec2) -> Self {
        Self {
            min: pos,
            max: pos + size,
        }
    }

    /// Box enclosing a circle
    pub fn from_circle(center: Vec2, radius: f32) -> Self {
        Self {
            min: center - Vec2::splat(radius),
            max: center + Vec2::splat(radius),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }

    /// Horizontal extents intersect (edges touching counts)
    #[inline]
    pub fn overlaps_x(&self, other: &Aabb) -> bool {
        self.left() <= other.right() && self.right() >= other.left()
    }

    /// Vertical extents intersect (edges touching counts)
    #[inline]
    pub fn overlaps_y(&self, other: &Aabb) -> bool {
        self.top() <= other.bottom() && self.bottom() >= other.top()
    }

    /// Both axes intersect
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }
}
