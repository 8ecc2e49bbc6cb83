//! Axis-aligned rectangle math used for wall and entity colliders.

use glam::Vec2;

/// An axis-aligned rectangle described by its center and half extents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub center: Vec2,
    pub half: Vec2,
}

impl Rect {
    pub fn new(center: Vec2, half: Vec2) -> Rect {
        Rect { center, half }
    }

    /// A square rect of the given side length.
    pub fn square(center: Vec2, size: f32) -> Rect {
        Rect::new(center, Vec2::splat(size / 2.0))
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.half.x
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.half.x
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.half.y
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.half.y
    }

    /// Strict AABB overlap test. Touching edges do not count, so an
    /// entity clamped flush against a wall is not re-reported.
    pub fn overlaps(&self, other: &Rect) -> bool {
        (self.center.x - other.center.x).abs() < self.half.x + other.half.x
            && (self.center.y - other.center.y).abs() < self.half.y + other.half.y
    }

    /// Penetration depth along each axis, for two overlapping rects.
    ///
    /// Both components are positive when the rects overlap; resolving a
    /// collision means moving out along the axis with the smaller one.
    pub fn penetration(&self, other: &Rect) -> Vec2 {
        Vec2::new(
            self.half.x + other.half.x - (self.center.x - other.center.x).abs(),
            self.half.y + other.half.y - (self.center.y - other.center.y).abs(),
        )
    }
}
