//! Gutter formatting for quoted content (command output, config values).

use super::GUTTER;

/// Format multi-line text with a gutter on every line.
///
/// The gutter appears at column 0, followed by 1 space, then the content starts
/// at column 2. This aligns with message symbols (1 column) + space (1 column).
///
/// ```
/// use prlink::styling::format_with_gutter;
///
/// eprintln!("{}", format_with_gutter("xdg-open: no method available"));
/// ```
pub fn format_with_gutter(content: &str) -> String {
    let gutter = GUTTER;
    content
        .lines()
        .map(|line| format!("{gutter} {gutter:#} {line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
