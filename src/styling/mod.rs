//! Terminal output for prlink.
//!
//! The pull request URL and the service list go to stdout, so
//! `prlink url | pbcopy` works; every status line (success, error, hint,
//! warning) goes to stderr. Colors are stripped by `anstream` when the stream
//! isn't a terminal or `NO_COLOR` is set.

mod constants;
mod format;
mod hyperlink;
mod suggest;

pub use anstream::{eprintln, println};

pub use constants::*;
pub use format::format_with_gutter;
pub use hyperlink::hyperlink_stdout;
pub use suggest::suggest_command;

/// Column width of `s` as displayed, with ANSI escapes removed.
pub fn visual_width(s: &str) -> usize {
    use ansi_str::AnsiStr;
    use unicode_width::UnicodeWidthStr;
    s.ansi_strip().width()
}
