//! This module is responsible for WebVTT serialization.
//! It turns a caption snapshot into track text, cue by cue, with exact
//! zero-padded timestamps.

use crate::store::Caption;
use tracing::trace;

/// Header line every WebVTT track starts with.
pub const HEADER: &str = "WEBVTT";

/// Serialize a caption snapshot into a WebVTT track.
/// The way this works is by writing the header and then one cue block per
/// caption, numbered from 1 in snapshot order. The snapshot order is kept
/// as-is, so cues authored out of chronological order stay that way.
/// An empty snapshot yields just the header and its blank line.
pub fn encode(captions: &[Caption]) -> String {
    trace!("encode {} captions", captions.len());
    let mut out = format!("{HEADER}\n\n");
    for (i, caption) in captions.iter().enumerate() {
        out.push_str(&format!(
            "{}\n{} --> {}\n{}\n\n",
            i + 1,
            format_timestamp(caption.start),
            format_timestamp(caption.end),
            caption.text
        ));
    }
    out
}

/// Format a time offset in seconds as `HH:MM:SS.mmm`.
/// The offset is rounded to whole milliseconds first. Negative input
/// clamps to zero, and hours past 99 take more digits rather than
/// wrapping, so very long offsets still read as numbers.
pub fn format_timestamp(seconds: f64) -> String {
    let total_ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let h = total_ms / 3_600_000;
    let m = (total_ms % 3_600_000) / 60_000;
    let s = (total_ms % 60_000) / 1000;
    let ms = total_ms % 1000;
    format!("{h:02}:{m:02}:{s:02}.{ms:03}")
}
