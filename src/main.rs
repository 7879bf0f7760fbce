use std::io::Write;
use std::process;

use anyhow::Context;
use clap::Parser;
use color_print::cformat;
use prlink::config::{UserConfig, get_config_path, set_config_path};
use prlink::git::{GitError, Repository};
use prlink::open_link::CommandOpener;
use prlink::pull_request::{PullRequest, ServiceSource, UrlBuilder};
use prlink::styling::{
    eprintln, error_message, format_heading, hyperlink_stdout, info_message, println,
    success_message, visual_width,
};

mod cli;

use cli::{Cli, Commands};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .init();
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    if let Some(path) = cli.config.clone() {
        set_config_path(path);
    }

    if let Err(e) = run(cli) {
        if let Some(err) = e.downcast_ref::<GitError>() {
            eprintln!("{err}");
        } else if let Some(err) = e.downcast_ref::<prlink::config::ConfigError>() {
            eprintln!("{err}");
        } else {
            eprintln!("{}", error_message(format!("{e:#}")));
        }
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(dir) = &cli.directory {
        std::env::set_current_dir(dir)
            .with_context(|| format!("Failed to change directory to {}", dir.display()))?;
    }

    let config = UserConfig::load()?;

    match cli.command.unwrap_or(Commands::Open { branch: None }) {
        Commands::Open { branch } => handle_open(&config, &cli.remote, branch),
        Commands::Url { branch } => handle_url(&config, &cli.remote, branch),
        Commands::Services => handle_services(&config),
    }
}

fn resolve_branch(repo: &Repository, branch: Option<String>) -> anyhow::Result<String> {
    match branch {
        Some(branch) => Ok(branch),
        None => repo.current_branch(),
    }
}

fn handle_open(config: &UserConfig, remote: &str, branch: Option<String>) -> anyhow::Result<()> {
    let repo = Repository::current()?;
    let branch = resolve_branch(&repo, branch)?;
    let opener = CommandOpener::new(config.open_link_command());

    let url = PullRequest::new(&repo, &opener, config.service_registry())
        .with_remote(remote)
        .create(&branch)?;

    eprintln!(
        "{}",
        success_message(cformat!("Opened <bold>{branch}</>: {}", hyperlink_stdout(&url, &url)))
    );
    Ok(())
}

fn handle_url(config: &UserConfig, remote: &str, branch: Option<String>) -> anyhow::Result<()> {
    let repo = Repository::current()?;
    let branch = resolve_branch(&repo, branch)?;
    let url = UrlBuilder::new(&repo, config.service_registry())
        .with_remote(remote)
        .build(&branch)?;

    println!("{url}");
    Ok(())
}

fn handle_services(config: &UserConfig) -> anyhow::Result<()> {
    let entries = config.service_registry().entries();
    let path = get_config_path().map(|p| p.display().to_string());
    eprintln!("{}", format_heading("SERVICES", path.as_deref()));
    if config.services.is_empty() {
        eprintln!(
            "{}",
            info_message(cformat!(
                "No self-hosted services configured; add them under <bright-black>[services]</>"
            ))
        );
    }

    let host_width = entries.iter().map(|e| visual_width(&e.host)).max().unwrap_or(0);
    let definition_width = entries
        .iter()
        .map(|e| visual_width(&e.definition))
        .max()
        .unwrap_or(0);

    for entry in entries {
        let host_padding = " ".repeat(host_width - visual_width(&entry.host));
        let definition_padding =
            " ".repeat(definition_width - visual_width(&entry.definition));
        let (definition, source) = match (&entry.registration, entry.source) {
            (None, source) => (
                cformat!("<red>{}</>", entry.definition),
                cformat!("{source} <red>(invalid)</>"),
            ),
            (Some(_), ServiceSource::Builtin) => {
                (entry.definition.clone(), cformat!("<dim>builtin</>"))
            }
            (Some(_), ServiceSource::User) => (entry.definition.clone(), "user".to_string()),
        };
        println!(
            "{}{host_padding}  {definition}{definition_padding}  {source}",
            entry.host
        );
    }
    Ok(())
}
