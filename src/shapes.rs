//! Player shape geometry
//!
//! Every selectable player shape is described as a closed outline polygon
//! around a centre point. Geometry is kept free of SDL types so it can be
//! tested without a window; `render::draw_shape` turns the outline into
//! filled pixels.

use std::f32::consts::PI;

/// Segments used to approximate round outlines
const CURVE_SEGMENTS: usize = 48;

/// The eight shapes a player can pick on the shape-select screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
    Diamond,
    Hexagon,
    Star,
    Cross,
    Heart,
}

impl ShapeKind {
    /// All shapes in the order they appear on the selection row
    pub const ALL: [ShapeKind; 8] = [
        ShapeKind::Circle,
        ShapeKind::Square,
        ShapeKind::Triangle,
        ShapeKind::Diamond,
        ShapeKind::Hexagon,
        ShapeKind::Star,
        ShapeKind::Cross,
        ShapeKind::Heart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "CIRCLE",
            ShapeKind::Square => "SQUARE",
            ShapeKind::Triangle => "TRIANGLE",
            ShapeKind::Diamond => "DIAMOND",
            ShapeKind::Hexagon => "HEXAGON",
            ShapeKind::Star => "STAR",
            ShapeKind::Cross => "CROSS",
            ShapeKind::Heart => "HEART",
        }
    }

    /// Builds the outline of this shape centred on (`cx`, `cy`)
    ///
    /// `size` is the radius of the shape: every vertex lies within `size`
    /// of the centre on both axes. Screen coordinates grow downward, so
    /// "up" is negative y.
    pub fn outline(&self, cx: f32, cy: f32, size: f32) -> Vec<(f32, f32)> {
        match self {
            ShapeKind::Circle => regular_polygon(cx, cy, size, CURVE_SEGMENTS, 0.0),
            ShapeKind::Square => vec![
                (cx - size, cy - size),
                (cx + size, cy - size),
                (cx + size, cy + size),
                (cx - size, cy + size),
            ],
            ShapeKind::Triangle => vec![
                (cx, cy - size),
                (cx + size, cy + size),
                (cx - size, cy + size),
            ],
            ShapeKind::Diamond => regular_polygon(cx, cy, size, 4, -PI / 2.0),
            ShapeKind::Hexagon => regular_polygon(cx, cy, size, 6, 0.0),
            ShapeKind::Star => star(cx, cy, size, size * 0.5, 5),
            ShapeKind::Cross => cross(cx, cy, size, size * 0.3),
            ShapeKind::Heart => heart(cx, cy, size),
        }
    }
}

/// Evenly spaced vertices on a circle, starting at `start_angle`
fn regular_polygon(cx: f32, cy: f32, radius: f32, sides: usize, start_angle: f32) -> Vec<(f32, f32)> {
    (0..sides)
        .map(|i| {
            let angle = start_angle + (i as f32 / sides as f32) * 2.0 * PI;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Alternating outer and inner vertices, first point straight up
fn star(cx: f32, cy: f32, outer: f32, inner: f32, points: usize) -> Vec<(f32, f32)> {
    let step = PI / points as f32;
    (0..points * 2)
        .map(|i| {
            let radius = if i % 2 == 0 { outer } else { inner };
            let angle = -PI / 2.0 + i as f32 * step;
            (cx + radius * angle.cos(), cy + radius * angle.sin())
        })
        .collect()
}

/// Plus sign with arms reaching `size` and half-thickness `arm`
fn cross(cx: f32, cy: f32, size: f32, arm: f32) -> Vec<(f32, f32)> {
    vec![
        (cx - arm, cy - size),
        (cx + arm, cy - size),
        (cx + arm, cy - arm),
        (cx + size, cy - arm),
        (cx + size, cy + arm),
        (cx + arm, cy + arm),
        (cx + arm, cy + size),
        (cx - arm, cy + size),
        (cx - arm, cy + arm),
        (cx - size, cy + arm),
        (cx - size, cy - arm),
        (cx - arm, cy - arm),
    ]
}

/// Classic parametric heart, scaled so it spans `size` in each direction
fn heart(cx: f32, cy: f32, size: f32) -> Vec<(f32, f32)> {
    // x = 16 sin^3 t, y = 13 cos t - 5 cos 2t - 2 cos 3t - cos 4t
    // spans x in [-16, 16] and y in [-17, 12]; centre the y range on cy
    let scale = size / 16.0;
    let y_mid = (12.0 + -17.0) / 2.0;
    (0..CURVE_SEGMENTS)
        .map(|i| {
            let t = i as f32 / CURVE_SEGMENTS as f32 * 2.0 * PI;
            let x = 16.0 * t.sin().powi(3);
            let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
            (cx + x * scale, cy - (y - y_mid) * scale)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds(points: &[(f32, f32)]) -> (f32, f32, f32, f32) {
        points.iter().fold(
            (f32::MAX, f32::MAX, f32::MIN, f32::MIN),
            |(min_x, min_y, max_x, max_y), &(x, y)| (min_x.min(x), min_y.min(y), max_x.max(x), max_y.max(y)),
        )
    }

    #[test]
    fn test_every_shape_stays_within_radius() {
        for shape in ShapeKind::ALL {
            let outline = shape.outline(100.0, 200.0, 30.0);
            assert!(outline.len() >= 3, "{} has too few vertices", shape.name());

            let (min_x, min_y, max_x, max_y) = bounds(&outline);
            assert!(min_x >= 70.0 - 0.01 && max_x <= 130.0 + 0.01, "{} x out of range", shape.name());
            assert!(min_y >= 170.0 - 0.01 && max_y <= 230.0 + 0.01, "{} y out of range", shape.name());
        }
    }

    #[test]
    fn test_star_points_up_and_alternates() {
        let outline = ShapeKind::Star.outline(0.0, 0.0, 10.0);
        assert_eq!(outline.len(), 10);
        assert!(outline[0].0.abs() < 0.001);
        assert!((outline[0].1 + 10.0).abs() < 0.001);

        let inner = (outline[1].0.powi(2) + outline[1].1.powi(2)).sqrt();
        assert!((inner - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_triangle_apex_is_on_top() {
        let outline = ShapeKind::Triangle.outline(50.0, 50.0, 20.0);
        assert_eq!(outline[0], (50.0, 30.0));
    }

    #[test]
    fn test_cross_has_twelve_corners() {
        assert_eq!(ShapeKind::Cross.outline(0.0, 0.0, 10.0).len(), 12);
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> = ShapeKind::ALL.iter().map(|s| s.name()).collect();
        assert_eq!(names.len(), 8);
    }
}
