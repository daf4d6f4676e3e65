// SPDX-License-Identifier: MPL-2.0
use iced_lightbox::app::{self, Flags};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "iced_lightbox=info";

const HELP: &str = "\
Usage: iced_lightbox [OPTIONS] [PORTFOLIO_DIR]

Browse a portfolio directory: every sub-directory is a project.

Options:
  --config <PATH>   Read settings from PATH instead of the user config dir
  --log <FILTER>    Log filter, e.g. `iced_lightbox=debug` (default: RUST_LOG)
  -h, --help        Print this help
";

fn init_tracing(filter: Option<String>) {
    let filter = filter
        .and_then(|f| EnvFilter::try_new(f).ok())
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let config_path: Option<PathBuf> = args.opt_value_from_str("--config").unwrap_or_else(|err| {
        eprintln!("invalid --config: {err}");
        None
    });
    let log_filter: Option<String> = args.opt_value_from_str("--log").unwrap_or_else(|err| {
        eprintln!("invalid --log: {err}");
        None
    });

    init_tracing(log_filter);

    let portfolio_dir = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        portfolio = ?portfolio_dir,
        "starting iced_lightbox"
    );

    app::run(Flags {
        portfolio_dir,
        config_path,
    })
}
