//! Markdown quoting for record text placed inside link, image, emphasis and
//! code syntax.

const ESCAPED: &[char] = &['\\', '`', '*', '_', '[', ']', '<', '>'];

/// Backslash-escape characters that would otherwise open or close inline
/// Markdown syntax.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if ESCAPED.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn longest_backtick_run(text: &str) -> usize {
    text.split(|c| c != '`').map(str::len).max().unwrap_or(0)
}

/// Fence for a fenced code block: one backtick longer than any run in
/// `code`, and never shorter than three.
pub fn code_fence(code: &str) -> String {
    "`".repeat(longest_backtick_run(code).max(2) + 1)
}

/// Inline code span holding `text` verbatim.
pub fn code_span(text: &str) -> String {
    let ticks = "`".repeat(longest_backtick_run(text) + 1);
    if text.starts_with('`') || text.ends_with('`') {
        format!("{ticks} {text} {ticks}")
    } else {
        format!("{ticks}{text}{ticks}")
    }
}
