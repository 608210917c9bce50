//! The clock control: time and view ownership, event routing.
//!
//! [`Clock`] is the single source of truth for the selected time and the
//! active view. Pointer events flow through the drag state machine, the
//! resolved value updates the field for the active view, and change
//! notifications are emitted: the aggregate time string on every resolution,
//! the field-specific value exactly once per gesture.

use derive_setters::Setters;
use thiserror::Error;
use tracing::debug;

use crate::{
    callback::CallbackWith,
    geometry::DialFace,
    hand::HandProjection,
    interaction::{DragController, DragOutcome},
    pointer::{DialSurface, PointerEvent},
    view::View,
};

const DEFAULT_TIME: &str = "00:00:00";

/// Error returned when a time string cannot be parsed.
///
/// Malformed segments are rejected up front rather than silently poisoning
/// the value fields.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TimeParseError {
    /// A segment was present but not a decimal number.
    #[error("time segment {0:?} is not a number")]
    InvalidSegment(String),
    /// The minute segment was absent (only seconds may be omitted).
    #[error("missing minute segment")]
    MissingMinute,
    /// A segment parsed but fell outside its field's range.
    #[error("{field} value {value} is out of range")]
    OutOfRange {
        /// Which field overflowed.
        field: &'static str,
        /// The parsed value.
        value: u32,
    },
}

/// Configuration for [`Clock`].
#[derive(Clone, PartialEq, Setters)]
pub struct ClockArgs {
    /// Initial time string; `None` selects `"00:00:00"`.
    #[setters(strip_option, into)]
    pub time: Option<String>,
    /// Initial active view.
    pub view: View,
    /// Fired with the full `"H:M:S"` string on every successful resolution,
    /// including the initial press of a gesture.
    #[setters(into)]
    pub on_time_change: CallbackWith<String>,
    /// Fired once per gesture that ends on the hour view.
    #[setters(into)]
    pub on_hour_change: CallbackWith<u8>,
    /// Fired once per gesture that ends on the minute view.
    #[setters(into)]
    pub on_minute_change: CallbackWith<u8>,
    /// Fired once per gesture that ends on the second view.
    #[setters(into)]
    pub on_second_change: CallbackWith<u8>,
}

impl Default for ClockArgs {
    fn default() -> Self {
        Self {
            time: None,
            view: View::Hour,
            on_time_change: CallbackWith::default(),
            on_hour_change: CallbackWith::default(),
            on_minute_change: CallbackWith::default(),
            on_second_change: CallbackWith::default(),
        }
    }
}

/// Interactive circular time-selection control over a host surface.
///
/// Owns the composite time value, the active view, the precomputed dial
/// face, and the drag state machine. The host feeds pointer events in
/// delivery order through [`Clock::handle_pointer`] and repaints from
/// [`Clock::face`] and [`Clock::hand`].
pub struct Clock<S: DialSurface> {
    face: DialFace,
    drag: DragController,
    surface: S,
    time: String,
    hour: u8,
    minute: u8,
    second: u8,
    view: View,
    on_time_change: CallbackWith<String>,
    on_hour_change: CallbackWith<u8>,
    on_minute_change: CallbackWith<u8>,
    on_second_change: CallbackWith<u8>,
}

impl<S: DialSurface> Clock<S> {
    /// Builds a clock over the given surface.
    ///
    /// Fails only when the initial time string is malformed.
    pub fn new(args: ClockArgs, surface: S) -> Result<Self, TimeParseError> {
        let mut clock = Self {
            face: DialFace::build(),
            drag: DragController::default(),
            surface,
            time: String::new(),
            hour: 0,
            minute: 0,
            second: 0,
            view: args.view,
            on_time_change: args.on_time_change,
            on_hour_change: args.on_hour_change,
            on_minute_change: args.on_minute_change,
            on_second_change: args.on_second_change,
        };
        clock.set_time(args.time.as_deref())?;
        Ok(clock)
    }

    /// The precomputed dial face.
    pub fn face(&self) -> &DialFace {
        &self.face
    }

    /// The host surface.
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The active view.
    pub fn view(&self) -> View {
        self.view
    }

    /// The canonical colon-joined time string.
    pub fn time(&self) -> &str {
        &self.time
    }

    /// The selected hour (0-23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// The selected minute (0-59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// The selected second (0-59).
    pub fn second(&self) -> u8 {
        self.second
    }

    /// Whether a drag gesture is currently active.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Projection of the indicator hand for the active view and value.
    pub fn hand(&self) -> HandProjection {
        let value = match self.view {
            View::Hour => self.hour,
            View::Minute => self.minute,
            View::Second => self.second,
        };
        HandProjection::project(self.view, value)
    }

    /// Switches the active view.
    pub fn set_view(&mut self, view: View) {
        debug!(view = view.name(), "view changed");
        self.view = view;
    }

    /// Switches the active view by name; unknown names silently select the
    /// hour view.
    pub fn set_view_name(&mut self, name: &str) {
        self.set_view(View::from_name(name));
    }

    /// Replaces the selected time from a colon-separated string.
    ///
    /// `None` and the empty string select `"00:00:00"`; a missing seconds
    /// segment defaults to 0. Setting the string the clock already holds is
    /// a no-op. Malformed or out-of-range segments are rejected and leave
    /// the current value untouched.
    pub fn set_time(&mut self, value: Option<&str>) -> Result<(), TimeParseError> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => DEFAULT_TIME,
        };
        if self.time == value {
            return Ok(());
        }
        let (hour, minute, second) = parse_time(value)?;
        self.time = value.to_string();
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        debug!(time = %self.time, "time set");
        Ok(())
    }

    /// Feeds one pointer event through the interaction state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if let Some(outcome) = self.drag.on_event(event, self.view, &mut self.surface) {
            self.apply(outcome);
        }
    }

    /// Ends the active gesture when its release event can no longer arrive
    /// (focus loss, visibility change). Commits like a normal release.
    pub fn interrupt_gesture(&mut self) {
        if let Some(outcome) = self.drag.interrupt(&mut self.surface) {
            self.apply(outcome);
        }
    }

    fn apply(&mut self, outcome: DragOutcome) {
        match outcome {
            DragOutcome::Resolved(value) => {
                match self.view {
                    View::Hour => self.hour = value,
                    View::Minute => self.minute = value,
                    View::Second => self.second = value,
                }
                self.time = format!("{}:{}:{}", self.hour, self.minute, self.second);
                self.on_time_change.call(self.time.clone());
            }
            DragOutcome::Committed => match self.view {
                View::Hour => self.on_hour_change.call(self.hour),
                View::Minute => self.on_minute_change.call(self.minute),
                View::Second => self.on_second_change.call(self.second),
            },
        }
    }
}

fn parse_time(value: &str) -> Result<(u8, u8, u8), TimeParseError> {
    let mut segments = value.split(':');
    let hour = parse_segment("hour", segments.next().unwrap_or_default(), 23)?;
    let minute = match segments.next() {
        Some(segment) => parse_segment("minute", segment, 59)?,
        None => return Err(TimeParseError::MissingMinute),
    };
    let second = match segments.next() {
        Some(segment) => parse_segment("second", segment, 59)?,
        None => 0,
    };
    Ok((hour, minute, second))
}

fn parse_segment(field: &'static str, segment: &str, max: u32) -> Result<u8, TimeParseError> {
    let value: u32 = segment
        .parse()
        .map_err(|_| TimeParseError::InvalidSegment(segment.to_string()))?;
    if value > max {
        return Err(TimeParseError::OutOfRange { field, value });
    }
    Ok(value as u8)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;
    use crate::pointer::{DialBounds, PointerPhase};

    #[derive(Default)]
    struct TestSurface {
        scroll: (f32, f32),
        captures: u32,
        releases: u32,
        scroll_restores: Vec<(f32, f32)>,
    }

    impl DialSurface for TestSurface {
        fn bounds(&self) -> DialBounds {
            DialBounds::new(0.0, 0.0, 240.0, 240.0)
        }

        fn scroll_offset(&self) -> (f32, f32) {
            self.scroll
        }

        fn scroll_to(&mut self, x: f32, y: f32) {
            self.scroll_restores.push((x, y));
        }

        fn capture_pointer(&mut self) {
            self.captures += 1;
        }

        fn release_pointer(&mut self) {
            self.releases += 1;
        }
    }

    fn clock_with_recorders(
        view: View,
    ) -> (
        Clock<TestSurface>,
        Arc<Mutex<Vec<String>>>,
        Arc<Mutex<Vec<u8>>>,
    ) {
        let times = Arc::new(Mutex::new(Vec::new()));
        let fields = Arc::new(Mutex::new(Vec::new()));
        let time_sink = Arc::clone(&times);
        let field_sink = Arc::clone(&fields);
        let field_callback: CallbackWith<u8> =
            CallbackWith::new(move |value| field_sink.lock().push(value));
        let args = ClockArgs::default()
            .view(view)
            .on_time_change(move |time: String| time_sink.lock().push(time))
            .on_hour_change(field_callback.clone())
            .on_minute_change(field_callback.clone())
            .on_second_change(field_callback);
        let clock = Clock::new(args, TestSurface::default()).expect("default time parses");
        (clock, times, fields)
    }

    #[test]
    fn defaults_to_midnight_on_hour_view() {
        let clock =
            Clock::new(ClockArgs::default(), TestSurface::default()).expect("default time parses");
        assert_eq!(clock.time(), "00:00:00");
        assert_eq!(clock.view(), View::Hour);
        assert_eq!((clock.hour(), clock.minute(), clock.second()), (0, 0, 0));
    }

    #[test]
    fn missing_seconds_default_to_zero() {
        let mut clock =
            Clock::new(ClockArgs::default(), TestSurface::default()).expect("default time parses");
        clock.set_time(Some("9:5")).expect("two segments parse");
        assert_eq!((clock.hour(), clock.minute(), clock.second()), (9, 5, 0));
        assert_eq!(clock.time(), "9:5");
    }

    #[test]
    fn none_and_empty_select_the_default_time() {
        let mut clock = Clock::new(
            ClockArgs::default().time("10:30:00"),
            TestSurface::default(),
        )
        .expect("initial time parses");
        clock.set_time(None).expect("default time parses");
        assert_eq!(clock.time(), "00:00:00");

        clock.set_time(Some("10:30:00")).expect("reparse");
        clock.set_time(Some("")).expect("default time parses");
        assert_eq!(clock.time(), "00:00:00");
    }

    #[test]
    fn setting_the_held_string_again_is_a_no_op() {
        let mut clock =
            Clock::new(ClockArgs::default(), TestSurface::default()).expect("default time parses");
        clock.set_time(Some("7:8:9")).expect("parses");
        clock.set_time(Some("7:8:9")).expect("no-op");
        assert_eq!((clock.hour(), clock.minute(), clock.second()), (7, 8, 9));
    }

    #[test]
    fn malformed_segments_are_rejected() {
        let mut clock =
            Clock::new(ClockArgs::default(), TestSurface::default()).expect("default time parses");
        assert_eq!(
            clock.set_time(Some("aa:10")),
            Err(TimeParseError::InvalidSegment("aa".to_string()))
        );
        assert_eq!(clock.set_time(Some("9")), Err(TimeParseError::MissingMinute));
        assert_eq!(
            clock.set_time(Some("25:0:0")),
            Err(TimeParseError::OutOfRange {
                field: "hour",
                value: 25
            })
        );
        assert_eq!(
            clock.set_time(Some("1:60:0")),
            Err(TimeParseError::OutOfRange {
                field: "minute",
                value: 60
            })
        );
        // A rejected string leaves the current value untouched.
        assert_eq!(clock.time(), "00:00:00");
    }

    #[test]
    fn unknown_view_names_normalize_to_hour() {
        let mut clock =
            Clock::new(ClockArgs::default().view(View::Second), TestSurface::default())
                .expect("default time parses");
        clock.set_view_name("bogus");
        assert_eq!(clock.view(), View::Hour);
    }

    #[test]
    fn full_minute_gesture_emits_one_field_event_and_many_time_events() {
        let (mut clock, times, minutes) = clock_with_recorders(View::Minute);
        // Press at the 3 o'clock point (minute 15), drag to 9 o'clock
        // (minute 45), release.
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Pressed, 219.0, 120.0));
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Moved, 120.0, 219.0));
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Moved, 21.0, 120.0));
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Released, 21.0, 120.0));

        assert_eq!(*minutes.lock(), vec![45], "exactly one commit per gesture");
        let times = times.lock();
        assert!(times.len() >= 2);
        assert_eq!(times.first().map(String::as_str), Some("0:15:0"));
        assert_eq!(times.last().map(String::as_str), Some("0:45:0"));
        assert_eq!(clock.minute(), 45);
    }

    #[test]
    fn tap_down_gives_instant_feedback() {
        let (mut clock, times, _fields) = clock_with_recorders(View::Hour);
        // Straight down from center on the outer ring: hour 18.
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Pressed, 120.0, 219.0));
        assert_eq!(clock.hour(), 18);
        assert_eq!(*times.lock(), vec!["18:0:0".to_string()]);
    }

    #[test]
    fn commit_targets_the_active_view() {
        let (mut clock, _times, fields) = clock_with_recorders(View::Second);
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Pressed, 219.0, 120.0));
        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Released, 219.0, 120.0));
        assert_eq!(*fields.lock(), vec![15]);
        assert_eq!(clock.second(), 15);
        assert_eq!(clock.hour(), 0, "other fields never carry over");
    }

    #[test]
    fn touch_gesture_restores_scroll_through_the_clock() {
        let (mut clock, _times, minutes) = clock_with_recorders(View::Minute);
        clock.handle_pointer(PointerEvent::touch(PointerPhase::Pressed, 219.0, 120.0));
        clock.handle_pointer(PointerEvent::touch(PointerPhase::Released, 219.0, 120.0));
        assert_eq!(clock.surface().scroll_restores, vec![(0.0, 0.0)]);
        assert_eq!(clock.surface().captures, 1);
        assert_eq!(clock.surface().releases, 1);
        assert_eq!(*minutes.lock(), vec![15]);
    }

    #[test]
    fn interrupt_commits_the_gesture() {
        let (mut clock, _times, fields) = clock_with_recorders(View::Minute);
        clock.interrupt_gesture();
        assert!(fields.lock().is_empty(), "no gesture, no commit");

        clock.handle_pointer(PointerEvent::mouse(PointerPhase::Pressed, 219.0, 120.0));
        clock.interrupt_gesture();
        assert_eq!(*fields.lock(), vec![15]);
        assert!(!clock.is_dragging());
    }

    #[test]
    fn hand_follows_the_active_view() {
        let (mut clock, _times, _fields) = clock_with_recorders(View::Hour);
        clock.set_time(Some("5:45:30")).expect("parses");
        assert_eq!(clock.hand().rotation_degrees, 150);

        clock.set_view(View::Minute);
        assert_eq!(clock.hand().rotation_degrees, 270);

        clock.set_view(View::Second);
        assert_eq!(clock.hand().rotation_degrees, 180);
    }
}
