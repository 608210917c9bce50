//! Pointer input boundary: raw events and the injected host surface.
//!
//! The interaction state machine never talks to a real display. The host
//! hands it [`PointerEvent`]s and an implementation of [`DialSurface`], which
//! supplies layout and scroll information and receives capture/release
//! requests. Tests drive the machine with an in-memory surface.

/// Where a pointer event originated.
///
/// Touch gestures participate in scroll capture and restore; mouse gestures
/// request default-action suppression while dragging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    /// Mouse or pen input.
    Mouse,
    /// Direct touch input.
    Touch,
}

/// Phase of a pointer event within a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// Contact started (mouse down / touch start).
    Pressed,
    /// Contact moved while held.
    Moved,
    /// Contact ended (mouse up / touch end).
    Released,
}

/// A single pointer or touch event in absolute page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Phase within the gesture.
    pub phase: PointerPhase,
    /// Input device kind.
    pub source: PointerSource,
    /// Horizontal page position.
    pub page_x: f32,
    /// Vertical page position.
    pub page_y: f32,
}

impl PointerEvent {
    /// Builds a mouse event.
    pub fn mouse(phase: PointerPhase, page_x: f32, page_y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            page_x,
            page_y,
        }
    }

    /// Builds a touch event.
    pub fn touch(phase: PointerPhase, page_x: f32, page_y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Touch,
            page_x,
            page_y,
        }
    }
}

/// Viewport-relative bounding rectangle of the dial element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DialBounds {
    /// Left edge, relative to the viewport.
    pub left: f32,
    /// Top edge, relative to the viewport.
    pub top: f32,
    /// Width of the dial element.
    pub width: f32,
    /// Height of the dial element.
    pub height: f32,
}

impl DialBounds {
    /// Builds a bounding rectangle.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Offset of a page-space pointer position from the dial center, in the
    /// inverted convention the converter expects (`center - pointer`).
    ///
    /// Page coordinates include the document scroll, while the rectangle is
    /// viewport-relative, so the scroll offsets are subtracted back out.
    pub fn center_offset(&self, page_x: f32, page_y: f32, scroll: (f32, f32)) -> (f32, f32) {
        let x = self.width / 2.0 - (page_x - self.left - scroll.0);
        let y = self.height / 2.0 - (page_y - self.top - scroll.1);
        (x, y)
    }
}

/// Host surface the dial is mounted on.
///
/// Injected into the interaction state machine so it can be exercised
/// without a display. `capture_pointer` / `release_pointer` stand in for
/// attaching and detaching global move/release tracking; the machine
/// guarantees they are called in pairs, once per gesture.
pub trait DialSurface {
    /// Current bounding rectangle of the dial.
    fn bounds(&self) -> DialBounds;

    /// Current document scroll offsets.
    fn scroll_offset(&self) -> (f32, f32);

    /// Restores a previously captured scroll position.
    ///
    /// Called at the end of a touch gesture to compensate for hosts that
    /// auto-scroll during a long drag.
    fn scroll_to(&mut self, x: f32, y: f32);

    /// Starts global move/release tracking for the active gesture, so that
    /// dragging off the dial keeps reporting.
    fn capture_pointer(&mut self);

    /// Stops global tracking at gesture end.
    fn release_pointer(&mut self);

    /// Suppresses the host's default action (text selection, scrolling)
    /// while a mouse drag is in progress. No-op by default.
    fn suppress_default(&mut self) {}
}
