//! Ingestor — reads trace lines and feeds them through the classifier.
//!
//! The whole input is consumed before anything is rendered. A fatal parse
//! error stops ingestion at the offending line; events accumulated so far are
//! left in the timeline but the caller is expected not to render them.

use std::io::BufRead;

use crate::classifier::Classifier;
use crate::config::InputConfig;
use crate::error::Result;
use crate::timeline::Timeline;
use crate::types::EventKind;

/// Counters for one ingestion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub lines_read: usize,
    pub lines_matched: usize,
    pub input_found: usize,
    pub output_begin: usize,
    pub output_end: usize,
}

impl Summary {
    pub fn events(&self) -> usize {
        self.input_found + self.output_begin + self.output_end
    }

    fn record(&mut self, kind: EventKind) {
        match kind {
            EventKind::InputFound => self.input_found += 1,
            EventKind::OutputBegin => self.output_begin += 1,
            EventKind::OutputEnd => self.output_end += 1,
        }
    }
}

/// Read `reader` to end of stream, appending every classified event to
/// `timeline`.
pub fn ingest<R: BufRead>(
    mut reader: R,
    classifier: &Classifier,
    timeline: &mut Timeline,
    config: &InputConfig,
) -> Result<Summary> {
    let mut summary = Summary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        summary.lines_read += 1;

        let line = decode_line(&buf, config.lossy_utf8, summary.lines_read)?;
        let events = classifier.classify(summary.lines_read, &line)?;
        if events.is_empty() {
            continue;
        }

        summary.lines_matched += 1;
        for event in &events {
            summary.record(event.event);
        }
        timeline.append(events);
    }

    tracing::debug!(
        lines = summary.lines_read,
        matched = summary.lines_matched,
        events = summary.events(),
        "ingestion finished"
    );
    Ok(summary)
}

/// Strip the line terminator and decode to text.
fn decode_line(raw: &[u8], lossy: bool, line_no: usize) -> Result<std::borrow::Cow<'_, str>> {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    if lossy {
        return Ok(String::from_utf8_lossy(raw));
    }
    std::str::from_utf8(raw).map(std::borrow::Cow::Borrowed).map_err(|err| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("line {line_no}: {err}"),
        )
        .into()
    })
}
