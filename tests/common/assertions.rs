//! Domain-specific assertion macros for mixtrace harnesses.
//!
//! These wrap `pretty_assertions` and say which timeline invariant was
//! violated.

use mixtrace_core::{Event, EventKind};

/// Assert that an event has the expected variant and clock tick.
///
/// ```rust
/// assert_event!(events[0], EventKind::OutputBegin, 10);
/// ```
#[macro_export]
macro_rules! assert_event {
    ($event:expr, $kind:expr, $clock:expr) => {{
        let event: &mixtrace_core::Event = &$event;
        let kind: mixtrace_core::EventKind = $kind;
        let clock: i64 = $clock;
        if event.event != kind || event.clock_ts != clock {
            panic!(
                "assert_event! failed:\n  expected: {:?} @ {}\n  actual:   {:?} @ {}\n  event: {:?}",
                kind, clock, event.event, event.clock_ts, event
            );
        }
    }};
}

/// Assert that `events[i]` and `events[i + 1]` form one output interval:
/// begin then end, sharing time, input, kind and count.
pub fn assert_interval_pair(events: &[Event], i: usize) {
    let (begin, end) = match (events.get(i), events.get(i + 1)) {
        (Some(begin), Some(end)) => (begin, end),
        _ => panic!("no interval pair at {i}: only {} events", events.len()),
    };
    assert_eq!(begin.event, EventKind::OutputBegin, "event {i} is not a begin");
    assert_eq!(end.event, EventKind::OutputEnd, "event {} is not an end", i + 1);
    pretty_assertions::assert_eq!(
        (&begin.time, &begin.input, &begin.kind, &begin.num),
        (&end.time, &end.input, &end.kind, &end.num),
        "interval halves at {i} disagree"
    );
}

/// Assert that every begin in `events` is immediately followed by its end and
/// no end appears without a begin right before it.
pub fn assert_intervals_adjacent(events: &[Event]) {
    let mut i = 0;
    while i < events.len() {
        match events[i].event {
            EventKind::InputFound => i += 1,
            EventKind::OutputBegin => {
                assert_interval_pair(events, i);
                i += 2;
            }
            EventKind::OutputEnd => panic!("unpaired OutputEnd at {i}: {:?}", events[i]),
        }
    }
}
