use tracing::trace;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Install the stderr `fmt` subscriber and apply the color setting.
///
/// `RUST_LOG` wins over `config.log_level`. Calling this twice is harmless.
pub fn init(config: &DemoConfig) {
    // With color on, `colored` still decides from the terminal and NO_COLOR.
    if !config.color {
        colored::control::set_override(false);
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
    if installed.is_err() {
        trace!("subscriber already installed");
    }
}
