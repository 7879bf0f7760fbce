//! OSC 8 hyperlinks.

use osc8::Hyperlink;
use supports_hyperlinks::Stream;

/// `text` wrapped in an OSC 8 link to `url` when stdout's terminal supports
/// it, otherwise `text` unchanged.
pub fn hyperlink_stdout(url: &str, text: &str) -> String {
    if supports_hyperlinks::on(Stream::Stdout) {
        format!("{}{text}{}", Hyperlink::new(url), Hyperlink::END)
    } else {
        text.to_string()
    }
}
