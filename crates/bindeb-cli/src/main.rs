//! Main CLI entry point for bindeb

use std::path::PathBuf;

use bindeb_build::{BatchDriver, BatchReport, FailurePolicy, PackageBuilder};
use bindeb_core::PackageDefaults;
use clap::Parser;
use color_eyre::eyre::{eyre, Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing_subscriber::EnvFilter;

mod config;

use config::FileConfig;

/// bindeb - Build .deb packages from a directory of prebuilt binaries
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory with the binaries to package
    #[arg(short = 'd', long = "bin-dir", value_name = "DIR")]
    bin_dir: PathBuf,

    /// Directory for the output deb packages [default: ./deb_pkg]
    #[arg(short = 'o', long = "deb-dir", value_name = "DIR")]
    deb_dir: Option<PathBuf>,

    /// Directory for the application installation [default: usr/local/bin]
    #[arg(short = 'i', long = "install-dir", value_name = "PATH")]
    install_dir: Option<String>,

    /// Package version [default: 0.1]
    #[arg(short = 'v', long = "version-major", value_name = "VERSION")]
    version_major: Option<String>,

    /// Package revision [default: 1]
    #[arg(short = 'r', long, value_name = "REV")]
    revision: Option<String>,

    /// System target architecture [default: x86-64]
    #[arg(short = 'a', long, value_name = "ARCH")]
    arch: Option<String>,

    /// Package mantainer [default: Home Microtech]
    #[arg(short = 'm', long = "mantainer", alias = "maintainer", value_name = "NAME")]
    mantainer: Option<String>,

    /// Package description [default: Deb package very useful]
    #[arg(long, alias = "ds", value_name = "TEXT")]
    description: Option<String>,

    /// Optional YAML file supplying defaults for the options above
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Fail when the binary directory is missing instead of building nothing
    #[arg(long)]
    strict: bool,

    /// Keep building the remaining binaries when one build fails
    #[arg(long)]
    keep_going: bool,

    /// Increase logging verbosity
    #[arg(long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Decrease logging verbosity
    #[arg(short = 'q', long, action = clap::ArgAction::Count)]
    quiet: u8,
}

fn main() -> Result<()> {
    // Install color-eyre for better error reports
    color_eyre::install()?;

    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet)?;

    if let Err(e) = run(&cli) {
        tracing::error!("Build failed: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    let file_config = match &cli.config {
        Some(path) => FileConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => FileConfig::default(),
    };

    let defaults = resolve_defaults(cli, &file_config);
    let deb_dir = cli
        .deb_dir
        .clone()
        .or(file_config.deb_dir)
        .unwrap_or_else(|| PathBuf::from("./deb_pkg"));

    tracing::info!("Binary directory: {}", cli.bin_dir.display());
    tracing::info!("Output directory: {}", deb_dir.display());

    let failure_policy =
        if cli.keep_going { FailurePolicy::Continue } else { FailurePolicy::Abort };
    let driver = BatchDriver::new(PackageBuilder::new())
        .with_failure_policy(failure_policy)
        .with_strict_bin_dir(cli.strict);

    let progress = ProgressBar::new(count_candidates(&cli.bin_dir));
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}").expect("Valid template"),
    );

    let report = driver.run_with(&cli.bin_dir, &defaults, &deb_dir, |name| {
        progress.set_message(name.to_string());
        progress.inc(1);
    })?;
    progress.finish_and_clear();

    print_summary(&report);

    if !report.failed.is_empty() {
        return Err(eyre!("{} package(s) failed to build", report.failed.len()));
    }

    Ok(())
}

/// CLI flag > config file > built-in default.
fn resolve_defaults(cli: &Cli, file: &FileConfig) -> PackageDefaults {
    let pick = |flag: &Option<String>, from_file: &Option<String>, default: &str| {
        flag.clone()
            .or_else(|| from_file.clone())
            .unwrap_or_else(|| default.to_string())
    };

    PackageDefaults {
        version: pick(&cli.version_major, &file.version, "0.1"),
        revision: pick(&cli.revision, &file.revision, "1"),
        architecture: pick(&cli.arch, &file.arch, "x86-64"),
        install_path: pick(&cli.install_dir, &file.install_dir, "usr/local/bin"),
        maintainer: pick(&cli.mantainer, &file.maintainer, "Home Microtech"),
        description: pick(&cli.description, &file.description, "Deb package very useful"),
    }
}

fn count_candidates(bin_dir: &std::path::Path) -> u64 {
    std::fs::read_dir(bin_dir)
        .map(|entries| {
            entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .count() as u64
        })
        .unwrap_or(0)
}

fn print_summary(report: &BatchReport) {
    for archive in &report.built {
        println!("✓ {}", archive.display());
    }
    for failed in &report.failed {
        println!("✗ {}: {}", failed.name, failed.reason);
    }

    if report.built.is_empty() && report.failed.is_empty() {
        println!("Nothing to build");
    } else {
        println!("\n✨ Built {} package(s), {} failure(s)", report.built.len(), report.failed.len());
    }
}

fn setup_logging(verbose: u8, quiet: u8) -> Result<()> {
    let log_level = match (verbose, quiet) {
        (0, 0) => "info",
        (1, 0) => "debug",
        (2, 0) => "trace",
        (v, 0) if v > 2 => "trace",
        (0, 1) => "warn",
        (0, 2) => "error",
        (0, q) if q > 2 => "off",
        _ => "info", // If both are set, default to info
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    Ok(())
}
