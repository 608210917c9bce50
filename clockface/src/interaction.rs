//! The drag gesture state machine.
//!
//! Tracks one press-to-release gesture across mouse and touch input and
//! re-invokes the angle converter on every event that carries a position.
//! Gesture starts while a gesture is already active are guarded no-ops, so
//! pointer capture is never acquired twice.

use tracing::{debug, trace, warn};

use crate::{
    convert::value_from_point,
    pointer::{DialSurface, PointerEvent, PointerPhase, PointerSource},
    view::View,
};

/// Gesture phase. Terminal state is always `Idle`; every gesture end is a
/// commit, there is no distinct cancelled state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum DragPhase {
    #[default]
    Idle,
    Dragging,
}

/// What the coordinator should do after the machine consumed an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DragOutcome {
    /// A value was resolved for the active view (on press or on move).
    Resolved(u8),
    /// The gesture ended; emit the field-specific notification once.
    Committed,
}

/// Interaction state machine for the dial.
#[derive(Debug, Default)]
pub(crate) struct DragController {
    phase: DragPhase,
    /// Scroll offsets captured at touch start, restored at gesture end.
    saved_scroll: Option<(f32, f32)>,
}

impl DragController {
    pub(crate) fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Feeds one pointer event through the machine.
    ///
    /// Events are processed strictly in delivery order with no coalescing;
    /// move events may arrive at any rate the input source produces.
    pub(crate) fn on_event<S: DialSurface>(
        &mut self,
        event: PointerEvent,
        view: View,
        surface: &mut S,
    ) -> Option<DragOutcome> {
        match (self.phase, event.phase) {
            (DragPhase::Idle, PointerPhase::Pressed) => {
                self.saved_scroll =
                    (event.source == PointerSource::Touch).then(|| surface.scroll_offset());
                self.phase = DragPhase::Dragging;
                surface.capture_pointer();
                debug!(source = ?event.source, view = view.name(), "gesture started");
                // Resolve immediately so a plain tap gives instant feedback.
                Some(DragOutcome::Resolved(resolve(&event, view, surface)))
            }
            (DragPhase::Dragging, PointerPhase::Pressed) => {
                warn!("pointer press ignored while a gesture is active");
                None
            }
            (DragPhase::Dragging, PointerPhase::Moved) => {
                if event.source == PointerSource::Mouse {
                    surface.suppress_default();
                }
                let value = resolve(&event, view, surface);
                trace!(value, "drag moved");
                Some(DragOutcome::Resolved(value))
            }
            (DragPhase::Dragging, PointerPhase::Released) => Some(self.end_gesture(surface)),
            (DragPhase::Idle, PointerPhase::Moved | PointerPhase::Released) => None,
        }
    }

    /// Ends the active gesture as if a release had been delivered.
    ///
    /// For hosts where the release event can no longer arrive (focus loss,
    /// visibility change); keeps pointer capture bounded. Returns `None`
    /// when no gesture is active.
    pub(crate) fn interrupt<S: DialSurface>(&mut self, surface: &mut S) -> Option<DragOutcome> {
        if self.phase == DragPhase::Dragging {
            debug!("gesture interrupted by host");
            Some(self.end_gesture(surface))
        } else {
            None
        }
    }

    fn end_gesture<S: DialSurface>(&mut self, surface: &mut S) -> DragOutcome {
        surface.release_pointer();
        if let Some((x, y)) = self.saved_scroll.take() {
            surface.scroll_to(x, y);
        }
        self.phase = DragPhase::Idle;
        debug!("gesture ended");
        DragOutcome::Committed
    }
}

fn resolve<S: DialSurface>(event: &PointerEvent, view: View, surface: &S) -> u8 {
    let (x, y) = surface
        .bounds()
        .center_offset(event.page_x, event.page_y, surface.scroll_offset());
    value_from_point(x, y, view)
}
