//! Line splitter for ylang source text.

/// Split source text into command lines.
///
/// Each physical line is trimmed. Lines that are empty after trimming, or
/// whose trimmed text starts with `#`, are dropped. Order is preserved and
/// the result is materialized so blocks can be replayed by `REPEAT`.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect()
}

/// Like [`split_lines`], but keeps the 1-based physical line number of each
/// command. Used by the CLI's `check` command; runtime errors never carry
/// line numbers.
pub fn numbered_lines(text: &str) -> Vec<(usize, &str)> {
    text.lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .collect()
}
