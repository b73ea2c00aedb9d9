use crate::model::SrtCue;

/// Render assembled cues as a SubRip document: 1-based numbered blocks of
/// `index`, `start --> end`, text, joined pairwise by a blank line. Zero
/// cues render as the empty string.
pub fn render_cues(cues: &[SrtCue]) -> String {
    cues.iter()
        .enumerate()
        .map(|(i, cue)| format!("{}\n{} --> {}\n{}", i + 1, cue.start, cue.end, cue.text))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start: &str, end: &str, text: &str) -> SrtCue {
        SrtCue {
            start: start.to_string(),
            end: end.to_string(),
            text: text.to_string(),
        }
    }

    #[test]
    fn no_cues_render_empty() {
        assert_eq!(render_cues(&[]), "");
    }

    #[test]
    fn blocks_are_numbered_and_blank_line_separated() {
        let cues = vec![
            cue("00:00:01,670", "00:00:05,120", "today we're going to be talking about"),
            cue("00:00:05,110", "00:00:07,279", "metric driven agent development and"),
        ];

        let out = render_cues(&cues);
        assert_eq!(
            out,
            "1\n00:00:01,670 --> 00:00:05,120\ntoday we're going to be talking about\
             \n\n\
             2\n00:00:05,110 --> 00:00:07,279\nmetric driven agent development and"
        );
    }

    #[test]
    fn text_is_emitted_verbatim() {
        let out = render_cues(&[cue("00:00:00,000", "00:00:01,000", "line one\nline two")]);
        assert!(out.ends_with("line one\nline two"));
    }
}
