use crate::{
    formats::{srt, time::format_srt_time},
    model::{CaptionDocument, CaptionEvent, Event, SrtCue},
};

/// What to do with a text block that reaches the end of the event stream
/// without a following append event.
///
/// The platform closes every spoken block with an append event whose only
/// segment is a lone newline, so `Drop` matches the upstream tool's
/// observed output. `Flush` emits the block with its own timing envelope
/// instead, which matters only for truncated tracks.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TrailingBlockPolicy {
    #[default]
    Drop,
    Flush,
}

/// Convert a caption document into SubRip text.
///
/// Returns `None` when the document carries no events at all ("no
/// captions"), and `Some` with an empty string when events exist but no
/// cue was completed (a header-only track). `offset_ms` shifts cue start
/// times; positive values shift later, negative earlier, and a start that
/// would go negative is clamped to zero.
pub fn convert(doc: &CaptionDocument, offset_ms: i64) -> Option<String> {
    convert_with(doc, offset_ms, TrailingBlockPolicy::Drop)
}

pub fn convert_with(
    doc: &CaptionDocument,
    offset_ms: i64,
    trailing: TrailingBlockPolicy,
) -> Option<String> {
    let cues = assemble_cues(doc, offset_ms, trailing)?;
    Some(srt::render_cues(&cues))
}

/// Single left-to-right pass over the classified events.
///
/// Text events replace the pending fragments; an append event first
/// flushes whatever is pending as a cue timed by the append event itself.
/// Timing for a cue therefore comes from the event *following* the one
/// that produced its text.
pub fn assemble_cues(
    doc: &CaptionDocument,
    offset_ms: i64,
    trailing: TrailingBlockPolicy,
) -> Option<Vec<SrtCue>> {
    if doc.is_empty() {
        return None;
    }

    let mut cues: Vec<SrtCue> = Vec::new();
    let mut pending: Vec<String> = Vec::new();
    let mut pending_start = 0i64;
    let mut pending_duration = 0i64;

    for event in classify(&doc.events) {
        match event {
            Event::Header { duration_ms } => {
                tracing::info!(total_duration_ms = duration_ms, "caption track header");
            }
            Event::Text {
                start_ms,
                duration_ms,
                append,
                fragments,
            } => {
                if append && !pending.is_empty() {
                    cues.push(make_cue(start_ms, duration_ms, offset_ms, pending.concat()));
                }
                pending = fragments;
                pending_start = start_ms;
                pending_duration = duration_ms;
            }
        }
    }

    // A block never closed by an append event is dropped by default,
    // mirroring the upstream tool.
    if trailing == TrailingBlockPolicy::Flush && !pending.is_empty() {
        cues.push(make_cue(
            pending_start,
            pending_duration,
            offset_ms,
            pending.concat(),
        ));
    }

    Some(cues)
}

fn classify(events: &[CaptionEvent]) -> impl Iterator<Item = Event> + '_ {
    events.iter().enumerate().map(|(i, raw)| {
        if i == 0 {
            return Event::Header {
                duration_ms: raw.duration_ms,
            };
        }

        for seg in &raw.segments {
            tracing::trace!(
                start_ms = raw.start_ms,
                seg_offset_ms = seg.offset_ms,
                chars = seg.text.chars().count(),
                "segment"
            );
        }

        Event::Text {
            start_ms: raw.start_ms,
            duration_ms: raw.duration_ms,
            append: raw.append != 0,
            fragments: raw.segments.iter().map(|s| s.text.clone()).collect(),
        }
    })
}

// The offset shifts only the start time. The end keeps the unshifted
// envelope, matching the upstream tool byte for byte even though the
// resulting cue duration changes with the offset.
fn make_cue(start_ms: i64, duration_ms: i64, offset_ms: i64, text: String) -> SrtCue {
    let effective_start = (start_ms + offset_ms).max(0);
    let effective_end = start_ms + duration_ms;

    SrtCue {
        start: format_srt_time(effective_start as f64 / 1000.0),
        end: format_srt_time(effective_end as f64 / 1000.0),
        text,
    }
}
