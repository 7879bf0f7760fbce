use clap::builder::styling::{AnsiColor, Color, Styles};
use clap::{Parser, Subcommand};
use prlink::pull_request::DEFAULT_REMOTE;

/// Custom styles for help output
fn help_styles() -> Styles {
    Styles::styled()
        .header(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .usage(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .literal(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Cyan))),
        )
        .placeholder(anstyle::Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
        .error(
            anstyle::Style::new()
                .bold()
                .fg_color(Some(Color::Ansi(AnsiColor::Red))),
        )
}

#[derive(Parser)]
#[command(name = "prlink")]
#[command(about = "Open the create-pull-request page for the current branch", long_about = None)]
#[command(version)]
#[command(disable_help_subcommand = true)]
#[command(styles = help_styles())]
pub struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', global = true, value_name = "path")]
    pub directory: Option<std::path::PathBuf>,

    /// User config file [default: ~/.config/prlink/config.toml]
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<std::path::PathBuf>,

    /// Remote whose URL identifies the repository
    #[arg(long, global = true, default_value = DEFAULT_REMOTE)]
    pub remote: String,

    /// Show debug info (-v for resolved services, -vv for every command)
    #[arg(long, short = 'v', global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the pull request page in the browser (default)
    Open {
        /// Branch to open a pull request for [default: current branch]
        branch: Option<String>,
    },

    /// Print the pull request URL without opening it
    Url {
        /// Branch to build the URL for [default: current branch]
        branch: Option<String>,
    },

    /// List known git services, built-in and configured
    Services,
}
