use crate::constants::DEFAULT_REASONING_DELTA_MAX;

/// Translator tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslatorConfig {
    /// Max characters per surfaced reasoning delta; longer deltas are split
    /// into multiple chunks, never truncated
    pub reasoning_delta_max: usize,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            reasoning_delta_max: DEFAULT_REASONING_DELTA_MAX,
        }
    }
}

/// Strip non-printable control characters from reasoning text
///
/// Newlines and tabs survive; answer text is never sanitized, only the
/// thinking trace passes through here.
pub fn sanitize_reasoning(text: &str) -> String {
    text.chars()
        .filter(|&c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect()
}

/// Split sanitized reasoning text into chunks of at most `max_chars`
/// characters
///
/// Chunks concatenate back to the input exactly; empty input produces no
/// chunks.
pub fn split_reasoning(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let max_chars = max_chars.max(1);

    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut count = 0;
    for c in text.chars() {
        current.push(c);
        count += 1;
        if count == max_chars {
            chunks.push(std::mem::take(&mut current));
            count = 0;
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
