//! Line classifier — turns one trace line into zero or more [`Event`]s.
//!
//! A [`Classifier`] is an ordered table of [`Rule`]s. Each line is tested
//! against the rules in order and only the first match fires; lines no rule
//! matches yield no events. Patterns are anchored at the start of the line.
//!
//! The built-in table recognises the three trace lines the mixer emits:
//!
//! ```text
//! [time] [input:<id>] ... Found <KIND> at pts <n>, rescaled ClockTS{<ts>}
//! [time] [output] ... Found <N> <KIND> at pts [ClockTS{<a>}, ClockTS{<b>}) :<source>
//! [time] [output] ... No <KIND> at pts [ClockTS{<a>}, ClockTS{<b>}) :<source>
//! ```

use regex::{Captures, Regex};

use crate::error::{Error, Result};
use crate::types::Event;

// ---------------------------------------------------------------------------
// Built-in patterns
// ---------------------------------------------------------------------------

const INPUT_FOUND: &str = r"^\[(?P<time>[^\]]+)\]\s*\[input:(?P<input>[a-z]+)\s*\].*Found (?P<kind>[A-Z ]+) at pts [0-9-]+, rescaled ClockTS\{(?P<ts>[0-9-]+)\}";

const OUTPUT_FOUND: &str = r"^\[(?P<time>[^\]]+)\]\s*\[output\s*\].*Found (?P<num>[0-9-]+) (?P<kind>[A-Z ]+) at pts \[ClockTS\{(?P<start>[0-9-]+)\}, ClockTS\{(?P<end>[0-9-]+)\}\)\s*:(?P<input>.+)";

const OUTPUT_NOT_FOUND: &str = r"^\[(?P<time>[^\]]+)\]\s*\[output\s*\].*No (?P<kind>[A-Z ]+) at pts \[ClockTS\{(?P<start>[0-9-]+)\}, ClockTS\{(?P<end>[0-9-]+)\}\)\s*:(?P<input>.+)";

/// Count recorded on both halves of an interval reported as "No <KIND>".
const NOT_FOUND_COUNT: &str = "0";

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// Builds events from the captures of a matched line.
///
/// Receives the rule name and the 1-based line number for error reporting.
pub type Expander = fn(&Captures<'_>, &'static str, usize) -> Result<Vec<Event>>;

/// One entry of the classification table: a pattern and what to build from it.
#[derive(Clone)]
pub struct Rule {
    name: &'static str,
    pattern: Regex,
    expand: Expander,
}

impl Rule {
    /// Compile a rule. Anchor the pattern with `^` if it should only match
    /// from the start of the line.
    pub fn new(name: &'static str, pattern: &str, expand: Expander) -> Result<Self> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            expand,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Apply the rule to a line. `Ok(None)` means the pattern did not match.
    pub fn apply(&self, line_no: usize, line: &str) -> Result<Option<Vec<Event>>> {
        match self.pattern.captures(line) {
            Some(caps) => (self.expand)(&caps, self.name, line_no).map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

fn input_found(caps: &Captures<'_>, rule: &'static str, line: usize) -> Result<Vec<Event>> {
    let ts = parse_clock(caps, "ts", rule, line)?;
    Ok(vec![Event::input_found(
        &caps["time"],
        ts,
        &caps["input"],
        &caps["kind"],
    )])
}

fn output_found(caps: &Captures<'_>, rule: &'static str, line: usize) -> Result<Vec<Event>> {
    output_interval(caps, rule, line, &caps["num"])
}

fn output_not_found(caps: &Captures<'_>, rule: &'static str, line: usize) -> Result<Vec<Event>> {
    output_interval(caps, rule, line, NOT_FOUND_COUNT)
}

fn output_interval(
    caps: &Captures<'_>,
    rule: &'static str,
    line: usize,
    num: &str,
) -> Result<Vec<Event>> {
    let start = parse_clock(caps, "start", rule, line)?;
    let end = parse_clock(caps, "end", rule, line)?;
    Ok(Event::output_interval(&caps["time"], start, end, &caps["input"], &caps["kind"], num).into())
}

fn parse_clock(
    caps: &Captures<'_>,
    field: &'static str,
    rule: &'static str,
    line: usize,
) -> Result<i64> {
    let value = &caps[field];
    value.parse().map_err(|source| Error::Parse {
        line,
        rule,
        field,
        value: value.to_string(),
        source,
    })
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Ordered rule table. The first rule whose pattern matches a line wins.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<Rule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Classifier {
    /// The input-found, output-found and output-not-found rules, in that order.
    pub fn builtin() -> Self {
        let rule = |name: &'static str, pattern: &str, expand: Expander| {
            Rule::new(name, pattern, expand).expect("built-in trace pattern must compile")
        };
        Self {
            rules: vec![
                rule("input-found", INPUT_FOUND, input_found),
                rule("output-found", OUTPUT_FOUND, output_found),
                rule("output-not-found", OUTPUT_NOT_FOUND, output_not_found),
            ],
        }
    }

    pub fn with_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Classify one line (without its terminator).
    ///
    /// Returns the events of the first matching rule, or an empty vector when
    /// no rule matches. A numeric capture that does not parse is an error.
    pub fn classify(&self, line_no: usize, line: &str) -> Result<Vec<Event>> {
        for rule in &self.rules {
            if let Some(events) = rule.apply(line_no, line)? {
                tracing::trace!(line = line_no, rule = rule.name, events = events.len(), "matched");
                return Ok(events);
            }
        }
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
