//! Projection of the selected value onto the rotating indicator hand.

use crate::{
    geometry::{DIAL_RADIUS, INNER_RADIUS, OUTER_RADIUS},
    view::View,
};

/// Rotation and length of the indicator hand.
///
/// Derived from the active view and value whenever either changes; never
/// cached. The rotation is not reduced modulo 360, mirroring how a CSS-style
/// rotation consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandProjection {
    /// Clockwise rotation from the 12 o'clock position, in degrees.
    pub rotation_degrees: i32,
    /// Length of the hand: the radius of the ring the value sits on.
    pub radius: f32,
    /// Top margin anchoring the hand to the dial center.
    pub margin_top: f32,
}

impl HandProjection {
    /// Projects the selected value for the given view.
    ///
    /// Hour view: 30 degrees per hour number, on the inner ring for 1-12 and
    /// the outer ring otherwise. Minute and second views: 6 degrees per unit
    /// on the outer ring.
    pub fn project(view: View, value: u8) -> Self {
        let (rotation, radius) = match view {
            View::Hour => {
                let inner = value > 0 && value < 13;
                let radius = if inner { INNER_RADIUS } else { OUTER_RADIUS };
                ((value as f32 * 30.0).round() as i32, radius)
            }
            View::Minute | View::Second => ((value as f32 * 6.0).round() as i32, OUTER_RADIUS),
        };
        Self {
            rotation_degrees: rotation,
            radius,
            margin_top: DIAL_RADIUS - radius,
        }
    }
}
