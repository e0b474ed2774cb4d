//! Core types for mixtrace-core.
//!
//! This module defines the event model shared by every stage of the
//! transform: the [`Event`] record and its [`EventKind`] discriminant.

/// Which observable occurrence an [`Event`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// An input produced a frame or sample of some kind at a clock tick.
    InputFound,
    /// Start of an output interval.
    OutputBegin,
    /// End of the output interval opened by the preceding `OutputBegin`.
    OutputEnd,
}

impl EventKind {
    /// All variants, in table order.
    pub const ALL: [EventKind; 3] = [
        EventKind::InputFound,
        EventKind::OutputBegin,
        EventKind::OutputEnd,
    ];

    /// Variant name as written to the `Event` column.
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::InputFound => "InputFound",
            EventKind::OutputBegin => "OutputBegin",
            EventKind::OutputEnd => "OutputEnd",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single event extracted from a trace line.
///
/// Events are created once by the classifier and never mutated afterwards.
/// All three variants share this shape; `num` is only set on output events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event: EventKind,
    /// Log-line timestamp, verbatim.
    pub time: String,
    /// Mixer clock tick. Not wall time, and may be negative.
    pub clock_ts: i64,
    /// Input id for `InputFound`, free-text source descriptor for output events.
    pub input: String,
    /// Media category token, e.g. `AUDIO FRAME`.
    pub kind: String,
    /// Count of matched items as captured from the line, `"0"` for "No ..."
    /// lines, `None` for `InputFound`.
    pub num: Option<String>,
}

impl Event {
    pub fn input_found(
        time: impl Into<String>,
        clock_ts: i64,
        input: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            event: EventKind::InputFound,
            time: time.into(),
            clock_ts,
            input: input.into(),
            kind: kind.into(),
            num: None,
        }
    }

    /// Build the begin/end pair for one output interval. Both events share
    /// `time`, `input`, `kind` and `num`; `start` and `end` are kept as given.
    pub fn output_interval(
        time: &str,
        start: i64,
        end: i64,
        input: &str,
        kind: &str,
        num: &str,
    ) -> [Self; 2] {
        let make = |event, clock_ts| Self {
            event,
            time: time.to_string(),
            clock_ts,
            input: input.to_string(),
            kind: kind.to_string(),
            num: Some(num.to_string()),
        };
        [
            make(EventKind::OutputBegin, start),
            make(EventKind::OutputEnd, end),
        ]
    }
}
