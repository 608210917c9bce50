//! Dial face layout: precomputed tick positions for the three views.
//!
//! The face encodes 24-hour time on a 12-hour dial: hours 1-12 sit on an
//! inner ring, hour 0 and hours 13-23 on the outer ring. Minute and second
//! ticks are drawn every 5 units on the outer ring only.

use std::f32::consts::PI;

use crate::view::View;

/// Radius of the dial itself; tick positions are relative to a square of
/// twice this size.
pub const DIAL_RADIUS: f32 = 120.0;
/// Ring carrying hour ticks 1-12.
pub const INNER_RADIUS: f32 = 66.0;
/// Ring carrying hour 0, hours 13-23, and all minute/second ticks.
pub const OUTER_RADIUS: f32 = 99.0;
/// Half-size of a tick label, subtracted so the label centers on its point.
pub const TICK_RADIUS: f32 = 17.0;

const HOURS: u32 = 24;
const MINUTES: u32 = 60;
const SECONDS: u32 = 60;

/// One labeled, positioned selectable point on the dial.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// `"00"` for the zero tick, otherwise the plain decimal numeral.
    pub label: String,
    /// Offset from the top of the dial square, in dial units.
    pub top: f32,
    /// Offset from the left of the dial square, in dial units.
    pub left: f32,
}

/// Precomputed tick layout for all three views.
///
/// Built once at construction and read-only afterwards; the radius constants
/// are fixed, so the face is never regenerated.
#[derive(Debug, Clone)]
pub struct DialFace {
    hours: Vec<Tick>,
    minutes: Vec<Tick>,
    seconds: Vec<Tick>,
}

impl DialFace {
    /// Lays out the 24 hour ticks and the 12 minute and second ticks.
    pub fn build() -> Self {
        let hours = (0..HOURS)
            .map(|i| {
                let radian = i as f32 / 6.0 * PI;
                let inner = i > 0 && i < 13;
                let radius = if inner { INNER_RADIUS } else { OUTER_RADIUS };
                tick(i, radian, radius)
            })
            .collect();
        let minutes = five_step_ticks(MINUTES);
        let seconds = five_step_ticks(SECONDS);
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// The 24 hour ticks, index 0 first.
    pub fn hour_ticks(&self) -> &[Tick] {
        &self.hours
    }

    /// The 12 minute ticks (every 5 minutes).
    pub fn minute_ticks(&self) -> &[Tick] {
        &self.minutes
    }

    /// The 12 second ticks (every 5 seconds).
    pub fn second_ticks(&self) -> &[Tick] {
        &self.seconds
    }

    /// The tick list for the given view.
    pub fn ticks(&self, view: View) -> &[Tick] {
        match view {
            View::Hour => &self.hours,
            View::Minute => &self.minutes,
            View::Second => &self.seconds,
        }
    }
}

impl Default for DialFace {
    fn default() -> Self {
        Self::build()
    }
}

fn five_step_ticks(count: u32) -> Vec<Tick> {
    (0..count)
        .step_by(5)
        .map(|i| tick(i, i as f32 / 30.0 * PI, OUTER_RADIUS))
        .collect()
}

fn tick(value: u32, radian: f32, radius: f32) -> Tick {
    let label = if value == 0 {
        "00".to_string()
    } else {
        value.to_string()
    };
    Tick {
        label,
        top: DIAL_RADIUS - radian.cos() * radius - TICK_RADIUS,
        left: DIAL_RADIUS + radian.sin() * radius - TICK_RADIUS,
    }
}
