//! Greedy word wrapping against measured pixel widths.

use meme_text::Measure;

/// Pack whitespace-separated words into lines no wider than `max_width`.
///
/// Words are never split: a word wider than `max_width` gets a line of its
/// own. Always returns at least one line (`""` for blank input).
pub fn wrap<M: Measure + ?Sized>(
    measure: &mut M,
    text: &str,
    font_size: u32,
    max_width: u32,
) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if measure.measure(font_size, &candidate).width() <= max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

// ===================================================================
// Tests
// ===================================================================
