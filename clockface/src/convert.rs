//! Pointer-position to time-component conversion.
//!
//! Positions arrive as offsets from the dial center with an inverted sign
//! convention: `x = center_x - pointer_x`, `y = center_y - pointer_y`. This
//! matches what [`DialBounds::center_offset`](crate::pointer::DialBounds)
//! produces from a raw page position.

use std::f32::consts::PI;

use crate::{
    geometry::{INNER_RADIUS, OUTER_RADIUS},
    view::View,
};

/// Pointer distances below this boundary select the inner (1-12) hour ring.
const RING_BOUNDARY: f32 = (OUTER_RADIUS + INNER_RADIUS) / 2.0;

/// Converts a center-relative pointer offset into a discrete time component.
///
/// A total function: every input resolves to a value in range for the view,
/// including the degenerate pointer-at-center case (which lands on the
/// 12 o'clock / zero boundary). Hour view snaps to 30-degree sectors and
/// picks between the inner (1-12) and outer (0, 13-23) rings by distance;
/// minute and second views resolve the full 0-59 range from the continuous
/// angle even though only every fifth tick is drawn.
pub fn value_from_point(x: f32, y: f32, view: View) -> u8 {
    let mut radian = (-x).atan2(y);
    if radian < 0.0 {
        radian += 2.0 * PI;
    }
    let unit = match view {
        View::Hour => PI / 6.0,
        View::Minute | View::Second => PI / 30.0,
    };
    let raw = (radian / unit).round() as u8;

    match view {
        View::Hour => {
            let raw = if raw == 12 { 0 } else { raw };
            let inner = (x * x + y * y).sqrt() < RING_BOUNDARY;
            match (inner, raw) {
                (true, 0) => 12,
                (true, value) => value,
                (false, 0) => 0,
                (false, value) => value + 12,
            }
        }
        View::Minute | View::Second => {
            if raw == 60 {
                0
            } else {
                raw
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_resolves_to_boundary_value() {
        // atan2(0, 0) is 0; the degenerate point must not fault.
        assert_eq!(value_from_point(0.0, 0.0, View::Hour), 12);
        assert_eq!(value_from_point(0.0, 0.0, View::Minute), 0);
        assert_eq!(value_from_point(0.0, 0.0, View::Second), 0);
    }

    #[test]
    fn top_of_outer_ring_is_zero_hours() {
        // Pointer straight up from center at the outer radius: index 0 maps
        // to 0 on the outer ring.
        assert_eq!(value_from_point(0.0, OUTER_RADIUS, View::Hour), 0);
    }

    #[test]
    fn top_of_inner_ring_is_twelve() {
        assert_eq!(value_from_point(0.0, INNER_RADIUS, View::Hour), 12);
    }

    #[test]
    fn inner_ring_keeps_raw_index() {
        // 3 o'clock direction (east of center) on the inner ring.
        assert_eq!(value_from_point(-INNER_RADIUS, 0.0, View::Hour), 3);
        // 6 o'clock (below center).
        assert_eq!(value_from_point(0.0, -INNER_RADIUS, View::Hour), 6);
        // 9 o'clock (west of center).
        assert_eq!(value_from_point(INNER_RADIUS, 0.0, View::Hour), 9);
    }

    #[test]
    fn outer_ring_offsets_by_twelve() {
        assert_eq!(value_from_point(-OUTER_RADIUS, 0.0, View::Hour), 15);
        assert_eq!(value_from_point(0.0, -OUTER_RADIUS, View::Hour), 18);
        assert_eq!(value_from_point(OUTER_RADIUS, 0.0, View::Hour), 21);
    }

    #[test]
    fn minute_view_resolves_full_range() {
        assert_eq!(value_from_point(0.0, OUTER_RADIUS, View::Minute), 0);
        assert_eq!(value_from_point(-OUTER_RADIUS, 0.0, View::Minute), 15);
        assert_eq!(value_from_point(0.0, -OUTER_RADIUS, View::Minute), 30);
        assert_eq!(value_from_point(OUTER_RADIUS, 0.0, View::Minute), 45);
    }

    #[test]
    fn minute_view_is_not_limited_to_drawn_ticks() {
        // One 6-degree step past 3 o'clock; only every fifth tick is drawn,
        // but free-angle selection still lands on 16.
        let angle = 16.0 * PI / 30.0;
        let x = -angle.sin() * OUTER_RADIUS;
        let y = angle.cos() * OUTER_RADIUS;
        assert_eq!(value_from_point(x, y, View::Minute), 16);
    }

    #[test]
    fn conversion_is_deterministic() {
        for view in [View::Hour, View::Minute, View::Second] {
            let a = value_from_point(-37.5, 61.2, view);
            let b = value_from_point(-37.5, 61.2, view);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn second_view_matches_minute_view() {
        for step in 0..60 {
            let angle = step as f32 * PI / 30.0;
            let x = -angle.sin() * OUTER_RADIUS;
            let y = angle.cos() * OUTER_RADIUS;
            assert_eq!(
                value_from_point(x, y, View::Minute),
                value_from_point(x, y, View::Second),
            );
        }
    }
}
