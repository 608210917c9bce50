//! Headless circular time-selection control.
//!
//! A user points at or drags across a circular dial to choose an hour,
//! minute, or second; the dial switches between three hierarchical views and
//! emits change notifications. This crate ships the coordinate-to-time
//! conversion and the pointer-interaction state machine; rendering and locale
//! formatting stay with the host.
//!
//! # Usage
//!
//! Implement [`DialSurface`] for the host the dial is mounted on, then feed
//! pointer events through a [`Clock`]:
//!
//! ```
//! use clockface::{Clock, ClockArgs, DialBounds, DialSurface, PointerEvent, PointerPhase, View};
//!
//! struct Headless;
//!
//! impl DialSurface for Headless {
//!     fn bounds(&self) -> DialBounds {
//!         DialBounds::new(0.0, 0.0, 240.0, 240.0)
//!     }
//!     fn scroll_offset(&self) -> (f32, f32) {
//!         (0.0, 0.0)
//!     }
//!     fn scroll_to(&mut self, _x: f32, _y: f32) {}
//!     fn capture_pointer(&mut self) {}
//!     fn release_pointer(&mut self) {}
//! }
//!
//! let args = ClockArgs::default().time("10:30:00").view(View::Minute);
//! let mut clock = Clock::new(args, Headless)?;
//!
//! // Tap the 3 o'clock position: minute 15.
//! clock.handle_pointer(PointerEvent::mouse(PointerPhase::Pressed, 219.0, 120.0));
//! clock.handle_pointer(PointerEvent::mouse(PointerPhase::Released, 219.0, 120.0));
//! assert_eq!(clock.minute(), 15);
//! # Ok::<(), clockface::TimeParseError>(())
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod callback;
pub mod clock;
pub mod convert;
pub mod geometry;
pub mod hand;
mod interaction;
pub mod pointer;
pub mod view;

pub use callback::CallbackWith;
pub use clock::{Clock, ClockArgs, TimeParseError};
pub use convert::value_from_point;
pub use geometry::{DIAL_RADIUS, DialFace, INNER_RADIUS, OUTER_RADIUS, TICK_RADIUS, Tick};
pub use hand::HandProjection;
pub use pointer::{DialBounds, DialSurface, PointerEvent, PointerPhase, PointerSource};
pub use view::View;
