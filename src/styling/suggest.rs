//! Command suggestion helpers for hint messages.
//!
//! Build copy-pasteable commands for user suggestions:
//!
//! ```
//! use prlink::styling::{suggest_command, hint_message};
//! use color_print::cformat;
//!
//! let cmd = suggest_command("url", &["feature/ui"], &["--remote", "upstream"]);
//! println!("{}", hint_message(cformat!("To print the link instead, run <bright-black>{cmd}</>")));
//! // → ↳ To print the link instead, run prlink url feature/ui --remote upstream
//! ```
//!
//! Handles shell escaping and `--` separator for args starting with `-`:
//!
//! ```
//! use prlink::styling::suggest_command;
//!
//! let cmd = suggest_command("open", &["-hotfix"], &[]);
//! assert_eq!(cmd, "prlink open -- -hotfix");
//!
//! let cmd = suggest_command("open", &["my feature"], &[]);
//! assert_eq!(cmd, "prlink open 'my feature'");
//! ```

use shell_escape::escape;
use std::borrow::Cow;

/// Build a suggested command string for hints, like `prlink open feature/ui`.
///
/// Arguments containing spaces, quotes, or special shell characters are
/// escaped using POSIX single-quote style. If any positional argument starts
/// with `-`, a `--` separator is inserted before it.
pub fn suggest_command(subcommand: &str, args: &[&str], flags: &[&str]) -> String {
    let mut parts = vec!["prlink".to_string(), subcommand.to_string()];

    let needs_separator = args.iter().any(|arg| arg.starts_with('-'));
    let mut separator_inserted = false;

    for arg in args {
        if needs_separator && arg.starts_with('-') && !separator_inserted {
            parts.push("--".to_string());
            separator_inserted = true;
        }
        parts.push(escape(Cow::Borrowed(*arg)).into_owned());
    }

    parts.extend(flags.iter().map(|s| s.to_string()));
    parts.join(" ")
}
