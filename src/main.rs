//! commit-journal
//!
//! Binary entry point, normally invoked from `.git/hooks/post-commit`.
//! Always exits with status 0; problems are reported on stdout.

use color_eyre::config::HookBuilder;
use color_eyre::eyre::WrapErr;
use tracing::Level;

use commit_journal::clock::SystemClock;
use commit_journal::git::GitExecutor;
use commit_journal::{JournalConfig, pipeline};

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .with_max_level(Level::INFO)
        .with_target(false)
        .without_time()
        .init();

    install_hooks();

    if let Err(report) = run() {
        tracing::error!("{:?}", report);
    }
}

/// Install color-eyre's hooks with panics reported through `tracing`
///
/// Panics go to stdout like every other report.
fn install_hooks() {
    let (panic_hook, eyre_hook) = HookBuilder::default().into_hooks();
    if let Err(e) = eyre_hook.install() {
        tracing::warn!("error reporter not installed: {}", e);
    }
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("{}", panic_hook.panic_report(info));
    }));
}

/// Run the journal pipeline against the current directory
fn run() -> color_eyre::Result<()> {
    let root = std::env::current_dir().wrap_err("could not determine working directory")?;
    let config = JournalConfig::new(&root);
    let executor = GitExecutor::with_repo_path(root);

    let report = pipeline::run(&config, &executor, &SystemClock)
        .wrap_err("journal entry was not written")?;

    tracing::info!("tags: {}", report.tags.display());
    Ok(())
}
