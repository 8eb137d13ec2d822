/// Procedural polygon rendering
///
/// The SDL2 core renderer only draws points, lines and rectangles. This module
/// fills arbitrary simple polygons with a scanline pass so every player shape,
/// enemy and projectile can be drawn without textures.
///
/// # Architecture
///
/// - `polygon_spans()`: Pure scanline math, returns horizontal spans
/// - `fill_polygon()`: Draws those spans on an SDL2 canvas
/// - `draw_shape()`: Fills a `ShapeKind` outline and strokes its border
///
/// # Usage Example
///
/// ```rust
/// draw_shape(&mut canvas, ShapeKind::Star, 960.0, 980.0, 30.0, Color::RGB(0, 200, 255))?;
/// ```
use crate::shapes::ShapeKind;
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;

/// One horizontal run of filled pixels: row, first column, last column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

/// Computes the horizontal spans covering a closed polygon.
///
/// Each pixel row is sampled at its centre (`y + 0.5`). Edges crossing the
/// sample line are intersected, sorted, and paired up (even-odd rule), so
/// concave outlines like the star and heart fill correctly.
pub fn polygon_spans(points: &[(f32, f32)]) -> Vec<Span> {
    if points.len() < 3 {
        return Vec::new();
    }

    let min_y = points.iter().map(|p| p.1).fold(f32::MAX, f32::min).floor() as i32;
    let max_y = points.iter().map(|p| p.1).fold(f32::MIN, f32::max).ceil() as i32;

    let mut spans = Vec::new();
    let mut crossings: Vec<f32> = Vec::with_capacity(points.len());

    for y in min_y..max_y {
        let sample_y = y as f32 + 0.5;
        crossings.clear();

        for i in 0..points.len() {
            let (ax, ay) = points[i];
            let (bx, by) = points[(i + 1) % points.len()];

            // Half-open test so a vertex on the sample line counts once
            if (ay <= sample_y && sample_y < by) || (by <= sample_y && sample_y < ay) {
                crossings.push(ax + (sample_y - ay) * (bx - ax) / (by - ay));
            }
        }

        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let x_start = pair[0].round() as i32;
            let x_end = pair[1].round() as i32;
            if x_end > x_start {
                spans.push(Span { y, x_start, x_end });
            }
        }
    }

    spans
}

/// Fills a polygon with a solid color
pub fn fill_polygon(canvas: &mut Canvas<Window>, points: &[(f32, f32)], color: Color) -> Result<(), String> {
    canvas.set_draw_color(color);
    for span in polygon_spans(points) {
        canvas.draw_line(Point::new(span.x_start, span.y), Point::new(span.x_end - 1, span.y))?;
    }
    Ok(())
}

/// Draws the closed outline of a polygon
pub fn stroke_polygon(canvas: &mut Canvas<Window>, points: &[(f32, f32)], color: Color) -> Result<(), String> {
    if points.len() < 2 {
        return Ok(());
    }

    let mut sdl_points: Vec<Point> = points
        .iter()
        .map(|&(x, y)| Point::new(x.round() as i32, y.round() as i32))
        .collect();
    sdl_points.push(sdl_points[0]);

    canvas.set_draw_color(color);
    canvas.draw_lines(sdl_points.as_slice())
}

/// Draws a filled shape with a lighter border
pub fn draw_shape(
    canvas: &mut Canvas<Window>,
    shape: ShapeKind,
    cx: f32,
    cy: f32,
    size: f32,
    color: Color,
) -> Result<(), String> {
    let outline = shape.outline(cx, cy, size);
    fill_polygon(canvas, &outline, color)?;
    stroke_polygon(canvas, &outline, Color::RGB(255, 255, 255))
}

/// Fills an axis-aligned rectangle given in floating-point surface coordinates
pub fn fill_rect_f(canvas: &mut Canvas<Window>, x: f32, y: f32, w: f32, h: f32, color: Color) -> Result<(), String> {
    if w <= 0.0 || h <= 0.0 {
        return Ok(());
    }
    canvas.set_draw_color(color);
    canvas.fill_rect(Rect::new(x.round() as i32, y.round() as i32, w.round() as u32, h.round() as u32))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_spans_cover_every_row() {
        let square = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)];
        let spans = polygon_spans(&square);

        assert_eq!(spans.len(), 10);
        for (row, span) in spans.iter().enumerate() {
            assert_eq!(*span, Span { y: row as i32, x_start: 0, x_end: 10 });
        }
    }

    #[test]
    fn test_degenerate_polygon_has_no_spans() {
        assert!(polygon_spans(&[(0.0, 0.0), (5.0, 5.0)]).is_empty());
        assert!(polygon_spans(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]).is_empty());
    }

    #[test]
    fn test_triangle_narrows_toward_apex() {
        let spans = polygon_spans(&ShapeKind::Triangle.outline(50.0, 50.0, 20.0));
        let first = spans.first().unwrap();
        let last = spans.last().unwrap();
        assert!(first.x_end - first.x_start < last.x_end - last.x_start);
    }

    #[test]
    fn test_star_rows_split_into_two_spans_near_the_points() {
        // Just below the two lower arms the star is concave: one row yields two runs
        let spans = polygon_spans(&ShapeKind::Star.outline(0.0, 0.0, 100.0));
        let bottom_row = spans.iter().map(|s| s.y).max().unwrap();
        let runs = spans.iter().filter(|s| s.y == bottom_row).count();
        assert_eq!(runs, 2);
    }
}
