//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in canvas coordinates
//! (origin bottom-left, y up).

use glam::{DVec2, Vec2};
use std::f32::consts::PI;

use super::vertex::{Palette, Vertex};
use crate::consts::BALL_RADIUS;
use crate::launch_point;
use crate::settings::Settings;
use crate::sim::{GamePhase, PLATFORM, Rect, Session};

/// Line width used for the trail and the aim indicator
const LINE_WIDTH: f32 = 1.5;
/// Circle tessellation
const CIRCLE_SEGMENTS: u32 = 12;

#[inline]
fn to_vec2(p: DVec2) -> Vec2 {
    p.as_vec2()
}

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0) = (r.x as f32, r.y as f32);
    let (x1, y1) = (r.right() as f32, r.top() as f32);

    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y1, color),
        Vertex::new(x0, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a thick line segment (a quad)
pub fn line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    // Perpendicular for width
    let perp = Vec2::new(-dir.y, dir.x) * (width / 2.0);

    let a = from + perp;
    let b = from - perp;
    let c = to + perp;
    let d = to - perp;

    vec![
        Vertex::new(a.x, a.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(c.x, c.y, color),
        Vertex::new(b.x, b.y, color),
        Vertex::new(d.x, d.y, color),
    ]
}

/// Generate vertices for a traced path (one quad per segment)
pub fn polyline(points: &[DVec2], width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 2 {
        return Vec::new();
    }

    let mut vertices = Vec::with_capacity((points.len() - 1) * 6);
    for pair in points.windows(2) {
        vertices.extend(line(to_vec2(pair[0]), to_vec2(pair[1]), width, color));
    }
    vertices
}

/// End point of the aim indicator: half the launch velocity from the launch point
pub fn aim_indicator_end(session: &Session) -> DVec2 {
    launch_point() + session.aim.velocity() / 2.0
}

/// Build the full frame for a session
pub fn scene_vertices(session: &Session, settings: &Settings) -> Vec<Vertex> {
    let palette = Palette::for_settings(settings.high_contrast);
    let mut vertices = Vec::new();

    for obstacle in &session.scene.obstacles {
        vertices.extend(rect(obstacle, palette.obstacle));
    }
    for target in &session.scene.targets {
        vertices.extend(rect(target, palette.target));
    }
    vertices.extend(rect(&PLATFORM, palette.platform));

    if settings.aim_indicator {
        vertices.extend(line(
            to_vec2(launch_point()),
            to_vec2(aim_indicator_end(session)),
            LINE_WIDTH,
            palette.aim_line,
        ));
    }

    if session.phase != GamePhase::Aiming {
        if settings.trail {
            vertices.extend(polyline(&session.path, LINE_WIDTH, palette.trail));
        }
        if let Some(projectile) = &session.projectile {
            vertices.extend(circle(
                to_vec2(projectile.pos),
                BALL_RADIUS as f32,
                palette.ball,
                CIRCLE_SEGMENTS,
            ));
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_is_two_triangles() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), [1.0; 4]);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [10.0, 20.0]);
        assert_eq!(verts[2].position, [40.0, 60.0]);
    }

    #[test]
    fn test_degenerate_line_is_empty() {
        let p = Vec2::new(5.0, 5.0);
        assert!(line(p, p, 2.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_polyline_segments() {
        let points = [
            DVec2::new(0.0, 0.0),
            DVec2::new(10.0, 0.0),
            DVec2::new(10.0, 10.0),
        ];
        assert_eq!(polyline(&points, 1.0, [1.0; 4]).len(), 12);
        assert!(polyline(&points[..1], 1.0, [1.0; 4]).is_empty());
    }

    #[test]
    fn test_aim_indicator_default() {
        let session = Session::default();
        let end = aim_indicator_end(&session);
        let half = 180.0 * std::f64::consts::FRAC_1_SQRT_2 / 2.0;
        assert!((end.x - (120.0 + half)).abs() < 1e-9);
        assert!((end.y - (120.0 + half)).abs() < 1e-9);
    }

    #[test]
    fn test_scene_vertices_idle_has_no_ball() {
        let session = Session::default();
        let settings = Settings::default();
        // 11 rects + platform + aim line, each 6 vertices
        assert_eq!(scene_vertices(&session, &settings).len(), 13 * 6);

        let no_aim = Settings {
            aim_indicator: false,
            ..Settings::default()
        };
        assert_eq!(scene_vertices(&session, &no_aim).len(), 12 * 6);
    }

    #[test]
    fn test_scene_vertices_in_flight_adds_ball_and_trail() {
        let mut session = Session::default();
        session.launch();
        session.advance();
        session.advance();
        let settings = Settings::default();
        let expected = 13 * 6 + 2 * 6 + (CIRCLE_SEGMENTS as usize) * 3;
        assert_eq!(scene_vertices(&session, &settings).len(), expected);
    }
}
