pub mod app;
pub mod cli;
pub mod config;
mod effects;
mod logging;
pub mod ui;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use mockconv_core::{guess_mime_type, AppState, FileDescriptor, KNOWN_TOOLS};
use mockconv_engine::{DirectoryDownloadSink, EngineSettings};

use app::{App, SessionOutcome};
use cli::{Cli, Command};
use config::AppConfig;
use ui::render::TerminalRenderer;

pub async fn run_app(cli: Cli) -> Result<()> {
    let config = config::load(cli.config.as_deref()).context("loading settings")?;
    logging::initialize(
        engine_logging::level_for_verbosity(cli.verbose),
        config.log_file.as_deref(),
    );

    match cli.command {
        Command::Tools => {
            print_tools();
            Ok(())
        }
        Command::InitConfig { path } => {
            let written = config::save(&path, &AppConfig::default())
                .with_context(|| format!("writing {}", path.display()))?;
            println!("Wrote default settings to {}", written.display());
            Ok(())
        }
        Command::Run {
            tool,
            file,
            mime,
            output_dir,
        } => {
            let output_dir = output_dir.unwrap_or_else(|| config.output_dir.clone());
            let descriptor = describe_file(&file, mime)?;
            run_session(&config, &tool, descriptor, &output_dir).await
        }
    }
}

fn print_tools() {
    for tool in &KNOWN_TOOLS {
        println!(
            "{:<14} {:<18} accepts {}",
            tool.id(),
            tool.display_name(),
            tool.accept_filter()
        );
    }
    println!("Any other identifier runs as a generic tool producing <name>_<tool>.pdf");
}

/// Builds a descriptor from file metadata. The file contents are never read.
fn describe_file(path: &Path, mime: Option<String>) -> Result<FileDescriptor> {
    let meta =
        fs::metadata(path).with_context(|| format!("reading metadata of {}", path.display()))?;
    if !meta.is_file() {
        anyhow::bail!("{} is not a file", path.display());
    }
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .with_context(|| format!("{} has no file name", path.display()))?;
    let mime_type = mime.unwrap_or_else(|| guess_mime_type(&name).to_string());

    Ok(FileDescriptor {
        name,
        size_bytes: meta.len(),
        mime_type,
    })
}

async fn run_session(
    config: &AppConfig,
    tool: &str,
    descriptor: FileDescriptor,
    output_dir: &Path,
) -> Result<()> {
    engine_info!(
        "Session start: tool={} file={} output_dir={}",
        tool,
        descriptor.name,
        output_dir.display()
    );
    let state = AppState::with_timings(config.upload_delay_ms, config.step_interval_ms);
    let mut app = App::new(
        state,
        EngineSettings::default(),
        DirectoryDownloadSink::new(output_dir),
        TerminalRenderer::new(),
    );

    let cancel = async {
        // Without a signal handler the run simply completes.
        if tokio::signal::ctrl_c().await.is_err() {
            std::future::pending::<()>().await;
        }
    };

    match app.run_session(tool, descriptor, cancel).await? {
        SessionOutcome::Downloaded(path) => {
            println!("Saved {}", path.display());
        }
        SessionOutcome::Cancelled => {
            println!("Cancelled.");
        }
    }
    engine_info!("Session end: screen={:?}", app.state().screen());
    Ok(())
}
