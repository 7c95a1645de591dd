use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use semver_tag::cli::orchestration::{run_next_version, NextVersionArgs};
use semver_tag::{config, ui, SemverError};

#[derive(clap::Parser)]
#[command(
    name = "semver",
    version,
    about = "Print the next semantic version based on the git tags of a repository"
)]
struct Args {
    #[arg(help = "One of major, minor, patch or current")]
    kind: String,

    #[arg(
        short = 'i',
        long,
        help = "Ignore all tags that are not SemVer compliant instead of failing"
    )]
    ignore_non_semver_tags: bool,

    #[arg(short = 'C', long, help = "Directory to inspect instead of the current one")]
    dir: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Log debug output to stderr")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.render().to_string();
            if let Some(reason) = rendered.lines().next() {
                eprintln!("{}", reason);
            }
            ui::display_usage(Some(&Args::command().render_help().to_string()));
            return ExitCode::FAILURE;
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Some(SemverError::InvalidKind(_)) = e.downcast_ref::<SemverError>() {
                ui::display_usage(None);
            } else {
                ui::display_error(&format!("{:#}", e));
            }
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let dir = match args.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to get working directory")?,
    };

    let config = config::load_config(args.config.as_deref(), &dir)?;
    let source = config.tag_source.build();

    let workflow_args = NextVersionArgs {
        kind: args.kind,
        dir,
        ignore_non_semver_tags: args.ignore_non_semver_tags,
    };
    let outcome = run_next_version(&workflow_args, &config, source.as_ref())
        .context("Failed to get next version")?;

    ui::display_outcome(&outcome);
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .init();
}
