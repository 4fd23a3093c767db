use super::{Point2, TOLERANCE};

/// Two accepted boundary points closer than this are the same point.
const COINCIDENT: f64 = 1e-9;

/// Clips the infinite line `a * x + b * y + c = 0` to the axis-aligned
/// rectangle `[min_x, max_x] x [min_y, max_y]`.
///
/// Returns the two endpoints of the visible chord, or `None` when the line
/// misses the rectangle or only touches it at a single corner.
///
/// Horizontal and vertical lines are handled directly. Otherwise the
/// candidates are checked in a fixed order: the left edge, the right edge,
/// the bottom edge, the top edge. The first two distinct candidates lying
/// inside the rectangle win, so a line through a corner reports that corner
/// once.
#[must_use]
pub fn clip_line_to_rect(
    a: f64,
    b: f64,
    c: f64,
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
) -> Option<(Point2, Point2)> {
    if a.abs() < TOLERANCE && b.abs() < TOLERANCE {
        return None;
    }

    if a.abs() < TOLERANCE {
        let y = -c / b;
        if !within(y, min_y, max_y) {
            return None;
        }
        return Some((Point2::new(min_x, y), Point2::new(max_x, y)));
    }

    if b.abs() < TOLERANCE {
        let x = -c / a;
        if !within(x, min_x, max_x) {
            return None;
        }
        return Some((Point2::new(x, min_y), Point2::new(x, max_y)));
    }

    let candidates = [
        Point2::new(min_x, (-a * min_x - c) / b),
        Point2::new(max_x, (-a * max_x - c) / b),
        Point2::new((-b * min_y - c) / a, min_y),
        Point2::new((-b * max_y - c) / a, max_y),
    ];

    let mut first: Option<Point2> = None;
    for candidate in candidates {
        if !within(candidate.x, min_x, max_x) || !within(candidate.y, min_y, max_y) {
            continue;
        }
        // Snap onto the rectangle so tolerance slack never leaks out.
        let p = Point2::new(
            candidate.x.clamp(min_x, max_x),
            candidate.y.clamp(min_y, max_y),
        );
        match first {
            None => first = Some(p),
            Some(q) if (p - q).norm() < COINCIDENT => {}
            Some(q) => return Some((q, p)),
        }
    }
    None
}

/// Inclusive range check with [`TOLERANCE`] slack on both ends.
fn within(value: f64, min: f64, max: f64) -> bool {
    value >= min - TOLERANCE && value <= max + TOLERANCE
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn unit_box(a: f64, b: f64, c: f64) -> Option<(Point2, Point2)> {
        clip_line_to_rect(a, b, c, -1.0, 1.0, -1.0, 1.0)
    }

    #[test]
    fn horizontal_inside() {
        let (p, q) = unit_box(0.0, 1.0, -0.5).unwrap();
        assert!((p - Point2::new(-1.0, 0.5)).norm() < TOLERANCE);
        assert!((q - Point2::new(1.0, 0.5)).norm() < TOLERANCE);
    }

    #[test]
    fn horizontal_outside_returns_none() {
        assert!(unit_box(0.0, 1.0, -2.0).is_none());
        assert!(unit_box(0.0, 2.0, 3.0).is_none());
    }

    #[test]
    fn horizontal_on_edge_is_visible() {
        let (p, q) = unit_box(0.0, 1.0, -1.0).unwrap();
        assert!((p.y - 1.0).abs() < TOLERANCE);
        assert!((q.y - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn vertical_inside() {
        let (p, q) = unit_box(2.0, 0.0, 1.0).unwrap();
        assert!((p - Point2::new(-0.5, -1.0)).norm() < TOLERANCE);
        assert!((q - Point2::new(-0.5, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn vertical_outside_returns_none() {
        assert!(unit_box(1.0, 0.0, 2.0).is_none());
    }

    #[test]
    fn oblique_crossing_left_and_right_edges() {
        // y = x/2 + 1/4
        let (p, q) =
            clip_line_to_rect(-0.5, 1.0, -0.25, -2.0, 2.0, -2.0, 2.0).unwrap();
        assert!((p - Point2::new(-2.0, -0.75)).norm() < 1e-12);
        assert!((q - Point2::new(2.0, 1.25)).norm() < 1e-12);
    }

    #[test]
    fn steep_line_uses_bottom_and_top_edges() {
        // y = 4x
        let (p, q) = unit_box(-4.0, 1.0, 0.0).unwrap();
        assert!((p - Point2::new(-0.25, -1.0)).norm() < 1e-12);
        assert!((q - Point2::new(0.25, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn diagonal_through_two_corners() {
        let (p, q) = unit_box(-1.0, 1.0, 0.0).unwrap();
        assert!((p - Point2::new(-1.0, -1.0)).norm() < TOLERANCE);
        assert!((q - Point2::new(1.0, 1.0)).norm() < TOLERANCE);
    }

    #[test]
    fn corner_through_one_edge() {
        // y = -x/2 + 1/2: passes (-1, 1) corner and (1, 0)
        let (p, q) = unit_box(0.5, 1.0, -0.5).unwrap();
        assert!((p - Point2::new(-1.0, 1.0)).norm() < TOLERANCE);
        assert!((q - Point2::new(1.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn touching_single_corner_is_not_visible() {
        // x + y + 2 = 0 only meets the box at (-1, -1)
        assert!(unit_box(1.0, 1.0, 2.0).is_none());
    }

    #[test]
    fn missing_line_returns_none() {
        assert!(unit_box(-1.0, 1.0, -5.0).is_none());
    }

    #[test]
    fn degenerate_coefficients_return_none() {
        assert!(unit_box(0.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn endpoints_always_distinct_and_inside() {
        let (min_x, max_x, min_y, max_y) = (-4.8, 8.2, -5.2, 5.2);
        for i in -12..=12 {
            for j in -12..=12 {
                for k in -6..=6 {
                    let (a, b, c) = (f64::from(i) * 0.25, f64::from(j) * 0.5, f64::from(k));
                    let Some((p, q)) = clip_line_to_rect(a, b, c, min_x, max_x, min_y, max_y)
                    else {
                        continue;
                    };
                    assert!((p - q).norm() > COINCIDENT);
                    for pt in [p, q] {
                        assert!(pt.x >= min_x - TOLERANCE && pt.x <= max_x + TOLERANCE);
                        assert!(pt.y >= min_y - TOLERANCE && pt.y <= max_y + TOLERANCE);
                        assert!((a * pt.x + b * pt.y + c).abs() < 1e-9);
                    }
                }
            }
        }
    }
}
