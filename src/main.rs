mod cli_messages;
mod config;
mod consts;
mod logging;
mod session;
mod status;
mod ui;

use crate::config::DashboardConfig;
use crate::consts::cli_consts::DEFAULT_STATUS_DIR;
use crate::consts::cli_consts::timing::DEFAULT_REFRESH_INTERVAL_MS;
use crate::status::{CardFileProvider, StatusSource};
use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

/// Live terminal view of pipeline status buffers
#[derive(Parser)]
#[command(author, version, long_about = None)]
struct Args {
    /// Status buffer instance to attach to at startup
    #[arg(value_name = "INSTANCE", default_value_t = 0)]
    instance: u32,

    /// Delay between redraws, in milliseconds
    #[arg(long, value_name = "MS", default_value_t = DEFAULT_REFRESH_INTERVAL_MS)]
    interval_ms: u64,

    /// Show one entry per row instead of two
    #[arg(long)]
    onecol: bool,

    /// Leave a blank row between keys with different 3-character prefixes
    #[arg(long)]
    group: bool,

    /// Directory holding the status buffers
    #[arg(long, value_name = "DIR", env = "PIPELINE_STATUS_DIR", default_value = DEFAULT_STATUS_DIR)]
    status_dir: PathBuf,

    /// Print the current status once and exit instead of starting the dashboard
    #[arg(long)]
    dump: bool,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    if let Some(path) = &args.log_file {
        if let Err(e) = logging::init_file_logger(path, logging::env_filter()) {
            print_cmd_warn!("Logging disabled", "{}: {}", path.display(), e);
        }
    }

    // Attach before touching the terminal: with nothing to show there is no UI.
    let provider = CardFileProvider::new(&args.status_dir);
    let source = match StatusSource::open(provider, args.instance) {
        Ok(source) => source,
        Err(e) => {
            print_cmd_error!(
                &format!(
                    "Error connecting to status buffer instance {}",
                    args.instance
                ),
                &e.to_string()
            );
            std::process::exit(1);
        }
    };

    let result = if args.dump {
        session::run_headless_mode(&source)
    } else {
        let config = DashboardConfig::new(args.interval_ms, args.onecol, args.group);
        session::run_tui_mode(source, config).await
    };

    if let Err(e) = result {
        print_cmd_error!("Status monitor stopped", &e.to_string());
        std::process::exit(1);
    }
    Ok(())
}
