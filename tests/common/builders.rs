//! Test builders — produce trace lines in the mixer's format.
//!
//! These are for readability in tests and property generators, not for
//! production use.

/// Fluent builder for a single trace line.
///
/// # Example
///
/// ```rust
/// let line = TraceLine::at("12:00:00.000").output_found("srcA", 3, "VIDEO", 10, 20);
/// ```
pub struct TraceLine {
    time: String,
    output_padding: usize,
}

impl TraceLine {
    pub fn at(time: impl Into<String>) -> Self {
        Self {
            time: time.into(),
            output_padding: 3,
        }
    }

    /// Spaces after `output` inside the tag.
    pub fn output_padding(mut self, spaces: usize) -> Self {
        self.output_padding = spaces;
        self
    }

    pub fn input_found(&self, input: &str, kind: &str, ts: i64) -> String {
        format!(
            "[{}] [input:{input}] Found {kind} at pts 0, rescaled ClockTS{{{ts}}}",
            self.time
        )
    }

    pub fn output_found(&self, input: &str, num: i64, kind: &str, start: i64, end: i64) -> String {
        format!(
            "[{}] [output{}] Found {num} {kind} at pts [ClockTS{{{start}}}, ClockTS{{{end}}}) :{input}",
            self.time,
            " ".repeat(self.output_padding)
        )
    }

    pub fn output_not_found(&self, input: &str, kind: &str, start: i64, end: i64) -> String {
        format!(
            "[{}] [output{}] No {kind} at pts [ClockTS{{{start}}}, ClockTS{{{end}}}) :{input}",
            self.time,
            " ".repeat(self.output_padding)
        )
    }
}
