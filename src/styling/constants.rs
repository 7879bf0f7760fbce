//! Message prefixes and the helpers that apply them.
//!
//! Every status line prlink prints starts with one symbol: `✓` when a link
//! was opened, `✗` for errors, `↳` for the hint that follows an error, `▲`
//! for config warnings and `○` for neutral notes. Message bodies are written
//! with `cformat!` tags (`<bold>host</>`, `<bright-black>command</>`).

use anstyle::{AnsiColor, Color, Style};
use color_print::{cformat, cstr};

/// Background for the gutter in front of quoted command output
pub const GUTTER: Style = Style::new().bg_color(Some(Color::Ansi(AnsiColor::BrightWhite)));

pub const SUCCESS_SYMBOL: &str = cstr!("<green>✓</>");
pub const ERROR_SYMBOL: &str = cstr!("<red>✗</>");
pub const WARNING_SYMBOL: &str = cstr!("<yellow>▲</>");
pub const HINT_SYMBOL: &str = cstr!("<dim>↳</>");
pub const INFO_SYMBOL: &str = cstr!("<dim>○</>");

/// A status line with its symbol already applied.
///
/// The helpers below take `impl AsRef<str>`, which this type doesn't
/// implement, so a message can't be prefixed twice:
///
/// ```compile_fail
/// use prlink::styling::{error_message, hint_message};
///
/// hint_message(error_message("Unsupported git service"));
/// ```
#[derive(Debug, Clone)]
pub struct FormattedMessage(String);

impl FormattedMessage {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FormattedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// `✗` line in red, e.g. for an unsupported remote host.
///
/// ```
/// use color_print::cformat;
/// use prlink::styling::error_message;
///
/// let host = "something.com";
/// let msg = error_message(cformat!("Unsupported git service <bold>{host}</>"));
/// assert!(msg.as_str().contains("something.com"));
/// ```
pub fn error_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{ERROR_SYMBOL} <red>{}</>", content.as_ref()))
}

pub fn hint_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{HINT_SYMBOL} <dim>{}</>", content.as_ref()))
}

pub fn warning_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{WARNING_SYMBOL} <yellow>{}</>", content.as_ref()))
}

pub fn success_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(cformat!("{SUCCESS_SYMBOL} <green>{}</>", content.as_ref()))
}

/// `○` line with the body left uncolored.
pub fn info_message(content: impl AsRef<str>) -> FormattedMessage {
    FormattedMessage(format!("{INFO_SYMBOL} {}", content.as_ref()))
}

/// Cyan section title, optionally followed by a source such as the config path.
pub fn format_heading(title: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => cformat!("<cyan>{title}</>  {suffix}"),
        None => cformat!("<cyan>{title}</>"),
    }
}
