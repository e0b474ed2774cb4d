//! Static trace corpora used across harnesses.

/// The three canonical lines, one per rule.
pub const LINE_INPUT_FOUND: &str =
    "[12:00:01.000] [input:a   ] Found AUDIO FRAME at pts 100, rescaled ClockTS{500}";
pub const LINE_OUTPUT_FOUND: &str =
    "[12:00:02.000] [output   ] Found 3 VIDEO FRAMES at pts [ClockTS{10}, ClockTS{20}):srcA";
pub const LINE_OUTPUT_NOT_FOUND: &str =
    "[12:00:03.000] [output   ] No SUBTITLE at pts [ClockTS{5}, ClockTS{5}):srcB";

/// Lines as the mixer actually writes them, thread tags and all.
pub const CORPUS_MIXER: &[&str] = &[
    "[2024-03-01 10:15:00.001] [main] [info] metamix starting",
    "[2024-03-01 10:15:00.120] [input:cam] [trace] Found CC SEI at pts 90000, rescaled ClockTS{1000}",
    "[2024-03-01 10:15:00.121] [input:studio] [trace] Found SCTE at pts 90010, rescaled ClockTS{1001}",
    "[2024-03-01 10:15:00.200] [output  ] [trace] Found 2 CC SEI at pts [ClockTS{960}, ClockTS{1000}) :cam",
    "[2024-03-01 10:15:00.201] [output  ] [trace] No SCTE at pts [ClockTS{960}, ClockTS{1000}) :studio",
    "[2024-03-01 10:15:00.250] [input:cam] [debug] restarting input",
    "[2024-03-01 10:15:00.300] [input:cam] [trace] Found CC SEI at pts -1, rescaled ClockTS{-1}",
    "",
];

/// Lines no rule should match.
pub const CORPUS_NOISE: &[&str] = &[
    "",
    "   ",
    "metamix version 1.4.2",
    "[10:00:00] [main] [warning] Found H.264 stream within MPEG-TS, Annex B formatted NALUs are not supported yet",
    "[10:00:00] [input:cam] Found CC SEI at pts 1",
    "[10:00:00] [output] Found CC SEI at pts [ClockTS{1}, ClockTS{2}):cam",
    "[10:00:00] [output] Found 1 CC SEI at pts [ClockTS{1}, ClockTS{2}):",
    "[10:00:00] [outputs] No CC SEI at pts [ClockTS{1}, ClockTS{2}):cam",
    "[10:00:00 [input:cam] Found CC SEI at pts 1, rescaled ClockTS{1}",
];

/// Join lines into stdin-shaped input with a trailing newline.
pub fn as_input(lines: &[&str]) -> String {
    let mut input = lines.join("\n");
    input.push('\n');
    input
}
