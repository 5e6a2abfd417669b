use std::f64::consts::PI;

use super::{Point2, TOLERANCE};

/// Returns the Euclidean distance between `a` and `b`.
#[must_use]
pub fn segment_length(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns the sum of consecutive segment lengths.
///
/// A sequence with fewer than two points has length `0`.
#[must_use]
pub fn path_length(points: &[Point2]) -> f64 {
    points
        .windows(2)
        .map(|pair| segment_length(&pair[0], &pair[1]))
        .sum()
}

/// Returns the running arc length at the end of every segment.
///
/// The result has `points.len() - 1` entries (empty for fewer than two points).
#[must_use]
pub fn cumulative_lengths(points: &[Point2]) -> Vec<f64> {
    let mut total = 0.0;
    points
        .windows(2)
        .map(|pair| {
            total += segment_length(&pair[0], &pair[1]);
            total
        })
        .collect()
}

/// Returns `atan2(from - to)`, the heading of the segment seen from its end.
#[must_use]
pub fn reverse_heading(from: &Point2, to: &Point2) -> f64 {
    (from.y - to.y).atan2(from.x - to.x)
}

/// Returns the rotation that aligns a marker with the direction of travel
/// from `from` to `to`.
///
/// Equal to [`reverse_heading`] plus `π`, so the result lies in `[0, 2π]`.
#[must_use]
pub fn rotation_angle(from: &Point2, to: &Point2) -> f64 {
    reverse_heading(from, to) + PI
}

/// Returns the point reached by moving `offset` units from `from` toward `to`.
///
/// `offset` is an absolute distance and is not clamped to the segment, so
/// values beyond the segment length extrapolate past `to`. A zero-length
/// segment has no direction and yields `from`.
#[must_use]
pub fn point_at_offset(from: &Point2, to: &Point2, offset: f64) -> Point2 {
    let delta = to - from;
    let len = delta.norm();
    if len < TOLERANCE {
        return *from;
    }
    from + delta * (offset / len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOL: f64 = 1e-10;

    fn angle_diff(a: f64, b: f64) -> f64 {
        (a - b).rem_euclid(2.0 * PI)
    }

    // ── length tests ──

    #[test]
    fn segment_length_3_4_5() {
        let d = segment_length(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn path_length_sums_segments() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(3.0, 10.0),
        ];
        assert_relative_eq!(path_length(&pts), 11.0, epsilon = TOL);
    }

    #[test]
    fn path_length_reversal_invariant() {
        let mut pts = vec![
            Point2::new(-2.0, 1.5),
            Point2::new(7.0, 3.0),
            Point2::new(4.0, -8.0),
            Point2::new(12.5, 0.25),
        ];
        let forward = path_length(&pts);
        pts.reverse();
        assert_relative_eq!(path_length(&pts), forward, epsilon = TOL);
    }

    #[test]
    fn path_length_degenerate() {
        assert!(path_length(&[]).abs() < TOL);
        assert!(path_length(&[Point2::new(1.0, 1.0)]).abs() < TOL);
    }

    #[test]
    fn cumulative_lengths_running_total() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(10.0, 0.0),
            Point2::new(10.0, 5.0),
        ];
        let cum = cumulative_lengths(&pts);
        assert_eq!(cum.len(), 2);
        assert_relative_eq!(cum[0], 10.0, epsilon = TOL);
        assert_relative_eq!(cum[1], 15.0, epsilon = TOL);
    }

    // ── angle tests ──

    #[test]
    fn rotation_points_along_travel() {
        // Travel toward +x: atan2(0, -10) + π = 2π ≡ 0.
        let r = rotation_angle(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0));
        assert!(angle_diff(r, 0.0) < TOL || angle_diff(r, 0.0) > 2.0 * PI - TOL);

        // Travel toward +y: atan2(-10, 0) + π = π/2.
        let r = rotation_angle(&Point2::new(0.0, 0.0), &Point2::new(0.0, 10.0));
        assert_relative_eq!(r, PI / 2.0, epsilon = TOL);
    }

    #[test]
    fn reversed_rotation_differs_by_pi() {
        let pairs = [
            (Point2::new(0.0, 0.0), Point2::new(10.0, 0.0)),
            (Point2::new(1.0, 2.0), Point2::new(-3.0, 7.0)),
            (Point2::new(5.0, 5.0), Point2::new(5.0, -1.0)),
        ];
        for (a, b) in pairs {
            let d = angle_diff(rotation_angle(&a, &b), rotation_angle(&b, &a));
            assert_relative_eq!(d, PI, epsilon = 1e-9);
        }
    }

    #[test]
    fn reverse_heading_has_no_flip() {
        let r = reverse_heading(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0));
        assert_relative_eq!(r, PI, epsilon = TOL);
    }

    // ── point_at_offset tests ──

    #[test]
    fn offset_by_absolute_distance() {
        let p = point_at_offset(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0), 2.5);
        assert_relative_eq!(p.x, 1.5, epsilon = TOL);
        assert_relative_eq!(p.y, 2.0, epsilon = TOL);
    }

    #[test]
    fn offset_beyond_segment_extrapolates() {
        let p = point_at_offset(&Point2::new(0.0, 0.0), &Point2::new(10.0, 0.0), 15.0);
        assert_relative_eq!(p.x, 15.0, epsilon = TOL);
        assert!(p.y.abs() < TOL);
    }

    #[test]
    fn offset_on_zero_length_segment() {
        let a = Point2::new(2.0, 3.0);
        let p = point_at_offset(&a, &a, 4.0);
        assert_eq!(p, a);
    }
}
