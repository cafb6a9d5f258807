use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use status_icons::{generate_all, IconProfile, Preset};
use tracing_subscriber::EnvFilter;

/// Generate colored status-dot PNG icons for browser extension toolbars.
///
/// With no arguments, writes the watch-party icon set into `./icons`.
#[derive(Parser, Debug)]
#[command(name = "status-icons", version, about)]
struct Cli {
    /// Built-in icon set to generate
    #[arg(long, value_enum, default_value_t = Preset::WatchParty, conflicts_with = "profile")]
    preset: Preset,

    /// Load the icon set from a JSON profile instead of a preset
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Override the output directory
    #[arg(long)]
    out_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    tracing::debug!(event = "cli_args", preset = %cli.preset, profile = ?cli.profile, out_dir = ?cli.out_dir);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(event = "run_failed", error = %err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> status_icons::Result<()> {
    let mut profile = match &cli.profile {
        Some(path) => IconProfile::load(path)?,
        None => cli.preset.profile(),
    };
    if let Some(dir) = cli.out_dir {
        profile = profile.with_output_dir(dir);
    }

    let report = generate_all(&profile)?;

    println!();
    println!(
        "Icon generation complete: {} written, {} failed.",
        report.written_count(),
        report.failures.len()
    );
    for failure in &report.failures {
        println!("  failed: {} ({})", failure.path.display(), failure.error);
    }
    println!(
        "Make sure the icons in '{}' match the paths referenced by manifest.json and the background script.",
        profile.output_dir.display()
    );
    Ok(())
}
