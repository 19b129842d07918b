pub mod build;
pub mod config;
mod watch;

use clap::{ArgAction, Args, Parser, Subcommand};
use log::{LevelFilter, info};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::build::BuildSettings;
use crate::config::ConfigError;
use tailor_scanner::ScanError;

pub use crate::build::{BuildReport, run_build};
pub use crate::watch::run_watch;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "tailor",
    version,
    about = "Compile utility classes found in site pages into critical and external stylesheets"
)]
pub struct Cli {
    /// Log more detail; repeat for trace output.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Scan pages and write critical.css and external.css.
    Build(BuildArgs),
    /// Print the distinct class names found in pages.
    Scan(ScanArgs),
    /// Build, then rebuild whenever a page changes.
    Watch(BuildArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildArgs {
    /// Page globs; replace `build.pages` from the config file.
    pub pages: Vec<String>,

    /// Config file. Defaults to tailor.toml when present.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub out_dir: Option<PathBuf>,

    #[arg(long)]
    pub minify: bool,

    /// Glob of pages whose classes form the critical sheet.
    #[arg(long)]
    pub critical: Vec<String>,

    #[arg(long)]
    pub ignore: Vec<String>,
}

#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanArgs {
    pub pages: Vec<String>,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub ignore: Vec<String>,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to watch {}: {source}", path.display())]
    Watch {
        path: PathBuf,
        #[source]
        source: notify::Error,
    },
}

/// Installs the logger. `RUST_LOG` wins over the verbosity flag.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

pub fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Build(args) => {
            run_build(&settings(&args)?)?;
            Ok(())
        }
        Command::Scan(args) => run_scan(&args),
        Command::Watch(args) => run_watch(&settings(&args)?),
    }
}

fn settings(args: &BuildArgs) -> Result<BuildSettings, CliError> {
    let config = config::load_or_default(args.config.as_deref())?;
    Ok(BuildSettings::new(
        config_base(args.config.as_deref()),
        &config.build,
        args,
    ))
}

/// Page globs in a config file are relative to the file's directory.
fn config_base(config: Option<&Path>) -> PathBuf {
    config
        .and_then(Path::parent)
        .filter(|parent| !parent.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run_scan(args: &ScanArgs) -> Result<(), CliError> {
    let build_args = BuildArgs {
        pages: args.pages.clone(),
        config: args.config.clone(),
        ignore: args.ignore.clone(),
        ..BuildArgs::default()
    };
    let settings = settings(&build_args)?;
    let options = tailor_scanner::ScanOptions {
        base_path: settings.base_path.clone(),
        ..tailor_scanner::ScanOptions::default()
    };
    let result =
        tailor_scanner::scan_globs_with_options(&settings.pages, &settings.ignore, &options)?;

    let mut classes = result.classes();
    classes.sort_unstable();
    for class_name in &classes {
        println!("{}", class_name);
    }
    info!(
        "scanned {} files, found {} classes",
        result.files_scanned(),
        classes.len()
    );
    Ok(())
}
