use std::borrow::Cow;

use tracing::trace;
use unicode_segmentation::UnicodeSegmentation;

/// Remove a leading list marker (`-`, `•`, `*`) the model sometimes adds.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.strip_prefix(['-', '•', '*']) {
        Some(rest) => {
            trace!(?line, "Stripped bullet marker");
            rest.trim()
        }
        None => trimmed,
    }
}

/// Number of user-perceived characters in `text`.
pub fn display_len(text: &str) -> usize {
    text.graphemes(true).count()
}

/// Right-pad `text` with spaces to `width` graphemes.
pub fn pad_end(text: &str, width: usize) -> String {
    let len = display_len(text);
    let mut padded = text.to_string();
    padded.extend(std::iter::repeat(' ').take(width.saturating_sub(len)));
    padded
}

/// Cut `text` to at most `max` graphemes, marking the cut with an ellipsis.
pub fn truncate_graphemes(text: &str, max: usize) -> Cow<'_, str> {
    if display_len(text) <= max {
        return Cow::Borrowed(text);
    }
    let kept: String = text.graphemes(true).take(max.saturating_sub(1)).collect();
    trace!(max, "Truncated text");
    Cow::Owned(format!("{}…", kept.trim_end()))
}
