//! Replays scripted drag gestures through a [`clockface::Clock`] and logs
//! every emitted event, without any UI framework attached.
//!
//! Run with `RUST_LOG=debug` to also see the gesture state transitions.

use std::sync::Arc;

use clockface::{
    Clock, ClockArgs, DialBounds, DialSurface, PointerEvent, PointerPhase, PointerSource, View,
};
use parking_lot::Mutex;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// In-memory stand-in for the element the dial would be mounted on.
struct ScriptedSurface {
    scroll: (f32, f32),
}

impl DialSurface for ScriptedSurface {
    fn bounds(&self) -> DialBounds {
        DialBounds::new(0.0, 0.0, 240.0, 240.0)
    }

    fn scroll_offset(&self) -> (f32, f32) {
        self.scroll
    }

    fn scroll_to(&mut self, x: f32, y: f32) {
        debug!(x, y, "surface: scroll restored");
        self.scroll = (x, y);
    }

    fn capture_pointer(&mut self) {
        debug!("surface: pointer captured");
    }

    fn release_pointer(&mut self) {
        debug!("surface: pointer released");
    }

    fn suppress_default(&mut self) {
        debug!("surface: default action suppressed");
    }
}

/// Page position on the outer ring at the given clockwise angle from 12.
fn outer_ring_point(degrees: f32) -> (f32, f32) {
    let radian = degrees.to_radians();
    (
        120.0 + radian.sin() * clockface::OUTER_RADIUS,
        120.0 - radian.cos() * clockface::OUTER_RADIUS,
    )
}

fn drag(clock: &mut Clock<ScriptedSurface>, source: PointerSource, path_degrees: &[f32]) {
    let mut phases = vec![PointerPhase::Pressed];
    phases.extend(std::iter::repeat_n(PointerPhase::Moved, path_degrees.len() - 1));
    for (phase, &degrees) in phases.into_iter().zip(path_degrees) {
        let (x, y) = outer_ring_point(degrees);
        clock.handle_pointer(PointerEvent {
            phase,
            source,
            page_x: x,
            page_y: y,
        });
    }
    let (x, y) = outer_ring_point(path_degrees[path_degrees.len() - 1]);
    clock.handle_pointer(PointerEvent {
        phase: PointerPhase::Released,
        source,
        page_x: x,
        page_y: y,
    });
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let gesture_log = Arc::new(Mutex::new(Vec::<String>::new()));
    let sink = Arc::clone(&gesture_log);
    let args = ClockArgs::default()
        .time("10:30:00")
        .on_time_change(move |time: String| info!(%time, "time changed"))
        .on_hour_change({
            let sink = Arc::clone(&sink);
            move |hour: u8| sink.lock().push(format!("hour -> {hour}"))
        })
        .on_minute_change({
            let sink = Arc::clone(&sink);
            move |minute: u8| sink.lock().push(format!("minute -> {minute}"))
        })
        .on_second_change(move |second: u8| sink.lock().push(format!("second -> {second}")));

    let surface = ScriptedSurface { scroll: (0.0, 0.0) };
    let mut clock = match Clock::new(args, surface) {
        Ok(clock) => clock,
        Err(error) => {
            eprintln!("bad initial time: {error}");
            return;
        }
    };

    info!("dial face sample:");
    for tick in clock.face().hour_ticks().iter().take(4) {
        info!(
            label = %tick.label,
            top = tick.top,
            left = tick.left,
            "hour tick"
        );
    }

    // Pick hour 18: tap straight down from center on the outer ring.
    drag(&mut clock, PointerSource::Mouse, &[180.0]);

    // Drag across the minute dial from 15 through 30 to 45.
    clock.set_view(View::Minute);
    drag(&mut clock, PointerSource::Mouse, &[90.0, 180.0, 270.0]);

    // Touch-select second 30; scroll capture and restore kick in.
    clock.set_view(View::Second);
    drag(&mut clock, PointerSource::Touch, &[180.0]);

    let hand = clock.hand();
    info!(
        rotation = hand.rotation_degrees,
        radius = hand.radius,
        margin_top = hand.margin_top,
        "final hand projection"
    );
    info!(time = clock.time(), "final time");
    for entry in gesture_log.lock().iter() {
        info!(%entry, "gesture commit");
    }
}
