use crate::path::{CubicBezier, PathCommand, PathSegment, QuadraticBezier};

/// Default cap for the hover outline width, in pixels.
pub const DEFAULT_MAX_HOVER_SIZE: f32 = 20.0;

/// Default number of samples per curve when measuring distances.
pub const DEFAULT_HIT_SAMPLES: usize = 20;

/// Width of the invisible hover outline for a stroke.
///
/// Thin strokes get an outline of `max_hover_size` screen pixels (divided by
/// the scale so it stays that size once zoomed), strokes that are already
/// wider keep their own width. Zoomed-out canvases (`scale < 1`) always use
/// `max_hover_size`.
pub fn compute_hover_stroke_width(stroke_width: f32, scale: f32, max_hover_size: f32) -> f32 {
    if stroke_width == 0.0 {
        return 0.0;
    }
    if scale < 1.0 {
        return max_hover_size;
    }
    if stroke_width * scale < max_hover_size {
        return max_hover_size / scale;
    }
    stroke_width
}

/// Trait for connector geometry data needed for hit-testing
pub trait ConnectorGeometry {
    fn id(&self) -> i32;
    fn segments(&self) -> &[PathSegment];
    /// Full width of the hover outline; hits count within half of it.
    fn hover_width(&self) -> f32;
}

/// Simple implementation of ConnectorGeometry
#[derive(Debug, Clone, PartialEq)]
pub struct SimpleConnectorGeometry {
    pub id: i32,
    pub segments: Vec<PathSegment>,
    pub hover_width: f32,
}

impl ConnectorGeometry for SimpleConnectorGeometry {
    fn id(&self) -> i32 { self.id }
    fn segments(&self) -> &[PathSegment] { &self.segments }
    fn hover_width(&self) -> f32 { self.hover_width }
}

/// One drawable piece of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Curve {
    Quadratic(QuadraticBezier),
    Cubic(CubicBezier),
}

impl Curve {
    pub fn eval(&self, t: f32) -> (f32, f32) {
        match self {
            Self::Quadratic(q) => q.eval(t),
            Self::Cubic(c) => c.eval(t),
        }
    }
}

/// Split path tokens into curves, starting from the last `MoveTo` point.
///
/// Commands without enough coordinates end the walk.
pub fn curves(segments: &[PathSegment]) -> Vec<Curve> {
    let mut out = Vec::new();
    let mut current = (0.0, 0.0);
    let mut i = 0;

    while i < segments.len() {
        let PathSegment::Command(cmd) = segments[i] else {
            i += 1;
            continue;
        };

        let n = cmd.point_count();
        let mut points = Vec::with_capacity(n);
        for k in 0..n {
            let x = segments.get(i + 1 + 2 * k);
            let y = segments.get(i + 2 + 2 * k);
            match (x, y) {
                (Some(PathSegment::Coord(x)), Some(PathSegment::Coord(y))) => points.push((*x, *y)),
                _ => return out,
            }
        }

        match cmd {
            PathCommand::MoveTo => {}
            PathCommand::QuadraticCurveTo => out.push(Curve::Quadratic(QuadraticBezier {
                p0: current,
                p1: points[0],
                p2: points[1],
            })),
            PathCommand::CubicCurveTo => out.push(Curve::Cubic(CubicBezier {
                p0: current,
                p1: points[0],
                p2: points[1],
                p3: points[2],
            })),
        }

        current = points[n - 1];
        i += 1 + 2 * n;
    }

    out
}

/// Calculate squared distance from a point to a line segment
fn distance_to_line_segment_sq(point: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f32 {
    let ab = (b.0 - a.0, b.1 - a.1);
    let ap = (point.0 - a.0, point.1 - a.1);

    let ab_len_sq = ab.0 * ab.0 + ab.1 * ab.1;

    if ab_len_sq < f32::EPSILON {
        // Degenerate segment (a == b)
        return ap.0 * ap.0 + ap.1 * ap.1;
    }

    // Project point onto line, clamped to segment
    let t = ((ap.0 * ab.0 + ap.1 * ab.1) / ab_len_sq).clamp(0.0, 1.0);

    let closest = (a.0 + t * ab.0, a.1 + t * ab.1);

    let dx = point.0 - closest.0;
    let dy = point.1 - closest.1;
    dx * dx + dy * dy
}

/// Calculate the minimum distance from a point to a curve
///
/// Uses subdivision approach: sample curve at regular intervals and find closest point.
///
/// # Arguments
/// * `point` - The point to measure distance from
/// * `curve` - The curve
/// * `num_samples` - Number of samples for distance calculation (default: 20)
pub fn distance_to_curve(point: (f32, f32), curve: &Curve, num_samples: usize) -> f32 {
    let num_samples = if num_samples == 0 { DEFAULT_HIT_SAMPLES } else { num_samples };

    let mut min_dist_sq = f32::MAX;
    let mut prev_point = curve.eval(0.0);

    for i in 1..=num_samples {
        let t = i as f32 / num_samples as f32;
        let curr_point = curve.eval(t);

        let dist_sq = distance_to_line_segment_sq(point, prev_point, curr_point);
        if dist_sq < min_dist_sq {
            min_dist_sq = dist_sq;
        }

        prev_point = curr_point;
    }

    min_dist_sq.sqrt()
}

/// Minimum distance from a point to any curve of a path.
///
/// Returns `f32::INFINITY` for a path without curves.
pub fn distance_to_path(point: (f32, f32), segments: &[PathSegment], num_samples: usize) -> f32 {
    curves(segments)
        .iter()
        .map(|c| distance_to_curve(point, c, num_samples))
        .fold(f32::INFINITY, f32::min)
}

/// Find a connector at the given position
///
/// A connector is hit when the position lies within half its hover width of
/// the curve. Returns the ID of the closest hit connector, or -1 if none.
pub fn find_connector_at<C, I>(mouse_x: f32, mouse_y: f32, connectors: I, hit_samples: usize) -> i32
where
    C: ConnectorGeometry,
    I: IntoIterator<Item = C>,
{
    let mut closest_id: i32 = -1;
    let mut closest_distance = f32::INFINITY;

    for connector in connectors {
        let reach = connector.hover_width() / 2.0;
        let distance = distance_to_path((mouse_x, mouse_y), connector.segments(), hit_samples);

        if distance <= reach && distance < closest_distance {
            closest_distance = distance;
            closest_id = connector.id();
        }
    }

    closest_id
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::compute_path;
    use crate::point::Point;

    fn connector(id: i32, start: (f32, f32), end: (f32, f32), hover_width: f32) -> SimpleConnectorGeometry {
        SimpleConnectorGeometry {
            id,
            segments: compute_path(start.into(), end.into(), 1.0).segments,
            hover_width,
        }
    }

    // ========================================================================
    // compute_hover_stroke_width()
    // ========================================================================

    #[test]
    fn test_hover_width_zero_stroke() {
        assert_eq!(compute_hover_stroke_width(0.0, 1.0, 20.0), 0.0);
        assert_eq!(compute_hover_stroke_width(0.0, 2.0, 20.0), 0.0);
        assert_eq!(compute_hover_stroke_width(0.0, 2.0, 10.0), 0.0);
    }

    #[test]
    fn test_hover_width_thin_stroke_uses_max() {
        assert_eq!(compute_hover_stroke_width(10.0, 1.0, 20.0), 20.0);
        assert_eq!(compute_hover_stroke_width(8.0, 2.0, 20.0), 10.0);
        assert_eq!(compute_hover_stroke_width(4.0, 2.0, 10.0), 5.0);
    }

    #[test]
    fn test_hover_width_wide_stroke_keeps_width() {
        assert_eq!(compute_hover_stroke_width(24.0, 1.0, 20.0), 24.0);
        assert_eq!(compute_hover_stroke_width(12.0, 2.0, 20.0), 12.0);
        assert_eq!(compute_hover_stroke_width(8.0, 2.0, 10.0), 8.0);
    }

    #[test]
    fn test_hover_width_zoomed_out() {
        assert_eq!(compute_hover_stroke_width(8.0, 0.5, 20.0), 20.0);
        assert_eq!(compute_hover_stroke_width(8.0, 0.5, 10.0), 10.0);
    }

    // ========================================================================
    // curves() - Path decomposition
    // ========================================================================

    #[test]
    fn test_curves_forward_is_one_cubic() {
        let segments = compute_path(Point::new(0.0, 0.0), Point::new(100.0, 50.0), 1.0).segments;
        let curves = curves(&segments);
        assert_eq!(curves.len(), 1);
        assert!(matches!(curves[0], Curve::Cubic(c) if c.p0 == (0.0, 0.0) && c.p3 == (100.0, 50.0)));
    }

    #[test]
    fn test_curves_steep_backward_is_two_quadratics() {
        let segments = compute_path(Point::new(100.0, 0.0), Point::new(50.0, 300.0), 1.0).segments;
        let curves = curves(&segments);
        assert_eq!(curves.len(), 2);
        match (curves[0], curves[1]) {
            (Curve::Quadratic(a), Curve::Quadratic(b)) => {
                assert_eq!(a.p0, (100.0, 0.0));
                assert_eq!(a.p2, b.p0);
                assert_eq!(b.p2, (50.0, 300.0));
            }
            other => panic!("unexpected curves {:?}", other),
        }
    }

    #[test]
    fn test_curves_truncated_path() {
        let segments = vec![
            PathSegment::Command(PathCommand::MoveTo),
            PathSegment::Coord(0.0),
            PathSegment::Coord(0.0),
            PathSegment::Command(PathCommand::CubicCurveTo),
            PathSegment::Coord(1.0),
        ];
        assert!(curves(&segments).is_empty());
    }

    // ========================================================================
    // distance_to_path()
    // ========================================================================

    #[test]
    fn test_distance_on_curve_endpoints() {
        let segments = compute_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.0).segments;
        assert!(distance_to_path((0.0, 0.0), &segments, 20) < 0.001);
        assert!(distance_to_path((100.0, 0.0), &segments, 20) < 0.001);
    }

    #[test]
    fn test_distance_above_straight_connector() {
        let segments = compute_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.0).segments;
        let d = distance_to_path((50.0, 5.0), &segments, 20);
        assert!((d - 5.0).abs() < 0.01);
    }

    #[test]
    fn test_distance_empty_path_is_infinite() {
        assert_eq!(distance_to_path((0.0, 0.0), &[], 20), f32::INFINITY);
    }

    #[test]
    fn test_distance_zero_samples_uses_default() {
        let segments = compute_path(Point::new(0.0, 0.0), Point::new(100.0, 0.0), 1.0).segments;
        let d = distance_to_path((50.0, 10.0), &segments, 0);
        assert!(d.is_finite());
        assert!(d >= 0.0);
    }

    // ========================================================================
    // find_connector_at()
    // ========================================================================

    #[test]
    fn test_find_connector_hit() {
        let connectors = vec![connector(1, (0.0, 50.0), (100.0, 50.0), 20.0)];
        assert_eq!(find_connector_at(50.0, 55.0, connectors, 20), 1);
    }

    #[test]
    fn test_find_connector_miss_outside_half_width() {
        let connectors = vec![connector(1, (0.0, 50.0), (100.0, 50.0), 20.0)];
        assert_eq!(find_connector_at(50.0, 65.0, connectors, 20), -1);
    }

    #[test]
    fn test_find_connector_closest_wins() {
        let connectors = vec![
            connector(1, (0.0, 50.0), (100.0, 50.0), 20.0),
            connector(2, (0.0, 55.0), (100.0, 55.0), 20.0),
        ];
        assert_eq!(find_connector_at(50.0, 54.0, connectors, 20), 2);
    }

    #[test]
    fn test_find_connector_first_wins_on_tie() {
        let connectors = vec![
            connector(1, (0.0, 50.0), (100.0, 50.0), 20.0),
            connector(2, (0.0, 50.0), (100.0, 50.0), 20.0),
        ];
        assert_eq!(find_connector_at(50.0, 50.0, connectors, 20), 1);
    }

    #[test]
    fn test_find_connector_zero_hover_width_never_hits_off_curve() {
        let connectors = vec![connector(1, (0.0, 50.0), (100.0, 50.0), 0.0)];
        assert_eq!(find_connector_at(50.0, 51.0, connectors, 20), -1);
    }

    #[test]
    fn test_find_connector_on_backward_bow() {
        // Level backward connector bows 110px above its anchors
        let c = connector(1, (100.0, 0.0), (0.0, 0.0), 20.0);
        let label = compute_path(Point::new(100.0, 0.0), Point::new(0.0, 0.0), 1.0).label_anchor;
        assert_eq!(find_connector_at(label.x, label.y, vec![c.clone()], 50), 1);
        assert_eq!(find_connector_at(50.0, 0.0, vec![c], 50), -1);
    }

    #[test]
    fn test_find_connector_empty() {
        let connectors: Vec<SimpleConnectorGeometry> = vec![];
        assert_eq!(find_connector_at(0.0, 0.0, connectors, 20), -1);
    }
}
