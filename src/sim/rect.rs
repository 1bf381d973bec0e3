//! Axis-aligned rectangle geometry for bricks, paddle and the play field
//!
//! Screen space: x grows right, y grows down. `pos` is the top-left corner.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{PLAY_H, PLAY_W, PLAY_X, PLAY_Y};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Closest point of the rectangle (edges included) to `p`
    pub fn nearest_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left(), self.right()),
            p.y.clamp(self.top(), self.bottom()),
        )
    }

    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }
}

/// The play field all entities live in
pub fn play_field() -> Rect {
    Rect::new(PLAY_X, PLAY_Y, PLAY_W, PLAY_H)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_nearest_point_outside_and_inside() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Outside a corner
        assert_eq!(r.nearest_point(Vec2::new(-5.0, 15.0)), Vec2::new(0.0, 10.0));
        // Outside an edge
        assert_eq!(r.nearest_point(Vec2::new(5.0, -3.0)), Vec2::new(5.0, 0.0));
        // Inside is its own nearest point
        assert_eq!(r.nearest_point(Vec2::new(4.0, 6.0)), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn test_contains_point() {
        let field = play_field();
        assert!(field.contains_point(field.center()));
        assert!(!field.contains_point(Vec2::new(0.0, 0.0)));
    }
}
