//! The three hierarchical selection views of the dial.

/// Which time component is currently selectable on the dial.
///
/// Exactly one view is active at a time; the control starts on [`View::Hour`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Select an hour (0-23, on the two-ring 24-hour face).
    #[default]
    Hour,
    /// Select a minute (0-59).
    Minute,
    /// Select a second (0-59).
    Second,
}

impl View {
    /// Resolves a view from its lowercase name.
    ///
    /// Unknown names silently normalize to [`View::Hour`]; no error is raised.
    pub fn from_name(name: &str) -> Self {
        match name {
            "minute" => View::Minute,
            "second" => View::Second,
            _ => View::Hour,
        }
    }

    /// The lowercase name of this view.
    pub fn name(self) -> &'static str {
        match self {
            View::Hour => "hour",
            View::Minute => "minute",
            View::Second => "second",
        }
    }
}
