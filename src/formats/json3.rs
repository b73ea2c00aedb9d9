use anyhow::{Context, Result};

use crate::model::CaptionDocument;

/// Decode a serialized caption track into the structured document form.
///
/// Decode failure is surfaced to the caller immediately; there is no
/// partial output. Unknown wire fields (pens, window styles, ASR
/// confidence) are tolerated and ignored.
pub fn parse_json3(raw: &str) -> Result<CaptionDocument> {
    serde_json::from_str(raw).context("failed decoding caption track JSON")
}
