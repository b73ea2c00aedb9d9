use serde::Deserialize;

/// A caption track as served by the platform timed-text API ("json3"
/// shape). Top-level styling metadata (pens, window styles, window
/// positions) is present on the wire but never consumed here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionDocument {
    #[serde(default)]
    pub events: Vec<CaptionEvent>,
}

impl CaptionDocument {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// One wire event, fields as transmitted. Which fields are populated
/// depends on the event's role; see [`Event`] for the classified form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CaptionEvent {
    #[serde(rename = "tStartMs", default)]
    pub start_ms: i64,
    #[serde(rename = "dDurationMs", default)]
    pub duration_ms: i64,
    /// Non-zero when the event closes the previously accumulated block.
    #[serde(rename = "aAppend", default)]
    pub append: i64,
    #[serde(rename = "segs", default)]
    pub segments: Vec<Segment>,
}

/// A text fragment within an event. Fragments carry their own leading
/// spaces. `offset_ms` is relative to the enclosing event's start and
/// only informs word timing upstream, never output timing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Segment {
    #[serde(rename = "utf8", default)]
    pub text: String,
    #[serde(rename = "tOffsetMs", default)]
    pub offset_ms: i64,
}

/// Wire events classified once at ingestion. The first event of a track
/// is always the duration header and never becomes a cue, regardless of
/// what other fields it carries.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Header {
        duration_ms: i64,
    },
    Text {
        start_ms: i64,
        duration_ms: i64,
        append: bool,
        /// Segment texts in source order, not yet joined.
        fragments: Vec<String>,
    },
}

/// One assembled subtitle entry. Indices are assigned when the final
/// document is rendered, not at creation.
#[derive(Debug, Clone, PartialEq)]
pub struct SrtCue {
    pub start: String,
    pub end: String,
    pub text: String,
}
