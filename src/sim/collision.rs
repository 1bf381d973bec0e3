//! Collision detection and response for circles against rectangles
//!
//! Balls and pickups are circles; bricks, the paddle and the field are
//! axis-aligned rectangles. Velocities here are unit directions.

use glam::Vec2;

use super::rect::Rect;
use crate::normalize_or_up;

/// Which velocity component a brick contact reflects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BounceAxis {
    X,
    Y,
}

/// Circle vs rectangle overlap via the clamped nearest point
#[inline]
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    (center - rect.nearest_point(center)).length_squared() <= radius * radius
}

/// Pick the bounce axis for a ball overlapping `rect`.
///
/// Side contacts (horizontal offset dominates) flip x, everything else,
/// including a center buried inside the brick, flips y.
pub fn bounce_axis(center: Vec2, rect: &Rect) -> BounceAxis {
    let d = center - rect.nearest_point(center);
    if d.x.abs() > d.y.abs() {
        BounceAxis::X
    } else {
        BounceAxis::Y
    }
}

/// Reflect one component of a direction and renormalize it
pub fn reflect_axis(dir: Vec2, axis: BounceAxis) -> Vec2 {
    let reflected = match axis {
        BounceAxis::X => Vec2::new(-dir.x, dir.y),
        BounceAxis::Y => Vec2::new(dir.x, -dir.y),
    };
    normalize_or_up(reflected)
}

/// New direction after a paddle hit.
///
/// The horizontal offset from the paddle center, normalized to [-1, 1],
/// maps linearly onto an angle from vertical of up to `max_angle_deg`.
pub fn paddle_bounce(ball_x: f32, paddle: &Rect, max_angle_deg: f32) -> Vec2 {
    let half = paddle.size.x * 0.5;
    let hit = if half > 0.0 {
        ((ball_x - paddle.center().x) / half).clamp(-1.0, 1.0)
    } else {
        0.0
    };
    let angle = (hit * max_angle_deg).to_radians();
    Vec2::new(angle.sin(), -angle.cos())
}

/// Bounce a circle off the left, right and top field edges.
///
/// Returns the number of edges hit this call. The bottom edge is open.
pub fn bounce_off_walls(pos: &mut Vec2, dir: &mut Vec2, radius: f32, field: &Rect) -> u32 {
    let mut hits = 0;
    if pos.x - radius < field.left() {
        pos.x = field.left() + radius;
        dir.x = -dir.x;
        hits += 1;
    }
    if pos.x + radius > field.right() {
        pos.x = field.right() - radius;
        dir.x = -dir.x;
        hits += 1;
    }
    if pos.y - radius < field.top() {
        pos.y = field.top() + radius;
        dir.y = -dir.y;
        hits += 1;
    }
    hits
}

/// True once a circle is entirely below the field
#[inline]
pub fn below_field(pos: Vec2, radius: f32, field: &Rect) -> bool {
    pos.y - radius > field.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::play_field;

    #[test]
    fn test_circle_rect_overlap() {
        let r = Rect::new(100.0, 100.0, 50.0, 20.0);
        // Touching the bottom edge
        assert!(circle_rect_overlap(Vec2::new(120.0, 128.0), 8.0, &r));
        // Just out of reach of the bottom edge
        assert!(!circle_rect_overlap(Vec2::new(120.0, 128.5), 8.0, &r));
        // Near a corner but outside the radius diagonally
        assert!(!circle_rect_overlap(Vec2::new(156.0, 126.0), 8.0, &r));
        // Center inside
        assert!(circle_rect_overlap(r.center(), 1.0, &r));
    }

    #[test]
    fn test_bounce_axis_side_vs_face() {
        let r = Rect::new(100.0, 100.0, 50.0, 20.0);
        assert_eq!(bounce_axis(Vec2::new(95.0, 110.0), &r), BounceAxis::X);
        assert_eq!(bounce_axis(Vec2::new(120.0, 125.0), &r), BounceAxis::Y);
        // Buried inside: dx == dy == 0 falls back to y
        assert_eq!(bounce_axis(r.center(), &r), BounceAxis::Y);
    }

    #[test]
    fn test_reflect_axis_keeps_unit_length() {
        let d = Vec2::new(0.6, -0.8);
        let rx = reflect_axis(d, BounceAxis::X);
        assert!((rx - Vec2::new(-0.6, -0.8)).length() < 1e-6);
        let ry = reflect_axis(d, BounceAxis::Y);
        assert!((ry - Vec2::new(0.6, 0.8)).length() < 1e-6);
        assert_eq!(reflect_axis(Vec2::ZERO, BounceAxis::Y), Vec2::new(0.0, -1.0));
    }

    #[test]
    fn test_paddle_bounce_angles() {
        let paddle = Rect::new(440.0, 690.0, 120.0, 16.0);
        let center = paddle_bounce(500.0, &paddle, 70.0);
        assert!(center.x.abs() < 1e-6);
        assert!((center.y + 1.0).abs() < 1e-6);

        let right_edge = paddle_bounce(560.0, &paddle, 70.0);
        let expected = 70.0_f32.to_radians();
        assert!((right_edge.x - expected.sin()).abs() < 1e-5);
        assert!((right_edge.y + expected.cos()).abs() < 1e-5);

        // Beyond the paddle clamps to the edge angle
        let far_left = paddle_bounce(0.0, &paddle, 70.0);
        assert!((far_left.x + expected.sin()).abs() < 1e-5);
    }

    #[test]
    fn test_wall_bounce_left_flips_and_clamps() {
        let field = play_field();
        let mut pos = Vec2::new(field.left() + 2.0, 300.0);
        let mut dir = Vec2::new(-0.6, -0.8);
        let hits = bounce_off_walls(&mut pos, &mut dir, 8.0, &field);
        assert_eq!(hits, 1);
        assert!(dir.x > 0.0);
        assert_eq!(pos.x, field.left() + 8.0);
    }

    #[test]
    fn test_wall_bounce_top_right_corner() {
        let field = play_field();
        let mut pos = Vec2::new(field.right(), field.top());
        let mut dir = Vec2::new(0.6, -0.8);
        let hits = bounce_off_walls(&mut pos, &mut dir, 8.0, &field);
        assert_eq!(hits, 2);
        assert!(dir.x < 0.0 && dir.y > 0.0);
        assert_eq!(pos, Vec2::new(field.right() - 8.0, field.top() + 8.0));
    }

    #[test]
    fn test_below_field() {
        let field = play_field();
        assert!(!below_field(Vec2::new(500.0, field.bottom()), 8.0, &field));
        assert!(below_field(Vec2::new(500.0, field.bottom() + 9.0), 8.0, &field));
    }
}
