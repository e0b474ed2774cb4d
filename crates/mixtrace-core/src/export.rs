//! Export — renders a [`Timeline`] as a CSV table.
//!
//! One header row, then one row per event in timeline order. Quoting follows
//! RFC 4180: fields holding the delimiter, a quote or a line break are quoted
//! and embedded quotes doubled. Rows end in CRLF.

use std::io::Write;

use crate::config::OutputConfig;
use crate::error::Result;
use crate::timeline::Timeline;
use crate::types::Event;

/// Column names, in output order.
pub const HEADER: [&str; 6] = ["Time", "Input name", "Event", "ClockTS", "Kind", "Count"];

/// Write the table for `timeline` to `out`. Returns the number of event rows.
pub fn write_table<W: Write>(timeline: &Timeline, out: W, config: &OutputConfig) -> Result<usize> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(config.delimiter_byte()?)
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(out);

    if config.header {
        writer.write_record(HEADER)?;
    }

    let sentinel = config.count_sentinel.to_string();
    let mut rows = 0;
    for event in timeline {
        let clock_ts = event.clock_ts.to_string();
        writer.write_record(row(event, &clock_ts, &sentinel))?;
        rows += 1;
    }
    writer.flush()?;

    tracing::debug!(rows, "table written");
    Ok(rows)
}

fn row<'a>(event: &'a Event, clock_ts: &'a str, sentinel: &'a str) -> [&'a str; 6] {
    [
        &event.time,
        &event.input,
        event.event.as_str(),
        clock_ts,
        &event.kind,
        event.num.as_deref().unwrap_or(sentinel),
    ]
}
