mod cli_messages;
mod config;
mod consts;
mod events;
mod logging;
mod metrics;
mod navigation;
mod session;
mod slots;
mod source;
#[cfg(test)]
mod test_support;
mod ui;
mod workbook;
mod workers;

use crate::config::{Config, get_config_path};
use crate::metrics::ColumnNames;
use crate::session::{run_headless_mode, run_summary_mode, run_tui_mode, setup_session};
use crate::source::ResourceLocator;
use clap::{Parser, Subcommand};
use std::error::Error;
use std::path::Path;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
/// Command-line arguments
struct Args {
    /// Command to execute
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Start the dashboard
    Start {
        /// Workbook URL or path. Overrides the configured source.
        #[arg(long, value_name = "SOURCE")]
        source: Option<String>,

        /// Run without the terminal UI, printing events to the console.
        #[arg(long, action = clap::ArgAction::SetTrue)]
        headless: bool,

        /// Paint the dashboard background.
        #[arg(long = "with-background", action = clap::ArgAction::SetTrue)]
        with_background: bool,
    },
    /// Load the workbook once and print the three card values
    Summary {
        /// Workbook URL or path. Overrides the configured source.
        #[arg(long, value_name = "SOURCE")]
        source: Option<String>,
    },
    /// Save the workbook source to the configuration file
    Configure {
        /// Workbook URL or path
        #[arg(long, value_name = "SOURCE")]
        source: String,
    },
    /// Remove the configuration file
    ClearConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let config_path = get_config_path()?;
    let args = Args::parse();
    match args.command {
        Command::Start {
            source,
            headless,
            with_background,
        } => {
            let (locator, columns) = resolve_source(source, &config_path)?;
            start(locator, columns, headless, with_background).await
        }
        Command::Summary { source } => {
            logging::init_console_logger();
            let (locator, columns) = resolve_source(source, &config_path)?;
            run_summary_mode(&locator, columns).await
        }
        Command::Configure { source } => {
            let locator: ResourceLocator = source.parse()?;
            if let ResourceLocator::Path(path) = &locator {
                if !path.exists() {
                    cli_messages::source_not_found(path);
                }
            }
            // Keep any column overrides already on disk.
            let config = match Config::load_from_file(&config_path) {
                Ok(existing) => Config {
                    source: locator.to_string(),
                    ..existing
                },
                Err(_) => Config::new(locator.to_string()),
            };
            config
                .save(&config_path)
                .map_err(|e| format!("Failed to save config: {}", e))?;
            cli_messages::source_saved(&config.source, &config_path);
            Ok(())
        }
        Command::ClearConfig => {
            cli_messages::config_cleared(&config_path);
            Config::clear(&config_path).map_err(Into::into)
        }
    }
}

/// Resolve the workbook location: the `--source` flag wins, then the
/// configuration file.
fn resolve_source(
    flag: Option<String>,
    config_path: &Path,
) -> Result<(ResourceLocator, ColumnNames), Box<dyn Error>> {
    let config = if config_path.exists() {
        match Config::load_from_file(config_path) {
            Ok(config) => Some(config),
            Err(e) => {
                cli_messages::config_unreadable(config_path, e);
                None
            }
        }
    } else {
        None
    };
    let columns = config
        .as_ref()
        .map(|c| c.columns.clone())
        .unwrap_or_default();

    let raw = match (flag, config) {
        (Some(flag), _) => flag,
        (None, Some(config)) => config.source,
        (None, None) => {
            return Err(Box::from(
                "No workbook source. Pass --source or run `atlas-dashboard configure --source <SOURCE>`.",
            ));
        }
    };
    Ok((raw.parse()?, columns))
}

/// Starts the dashboard in TUI or headless mode.
async fn start(
    locator: ResourceLocator,
    columns: ColumnNames,
    headless: bool,
    with_background: bool,
) -> Result<(), Box<dyn Error>> {
    if headless {
        logging::init_console_logger();
    }
    let session = setup_session(&locator, columns);
    if headless {
        run_headless_mode(session).await
    } else {
        run_tui_mode(session, with_background).await
    }
}
