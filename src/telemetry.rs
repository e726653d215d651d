use tracing_subscriber::{fmt, EnvFilter};

use crate::settings::AppConfig;

const DEFAULT_DIRECTIVES: &str = "info,actix_web=info,reqwest=warn";

/// Installs the global subscriber. `RUST_LOG` overrides the default filter;
/// production emits JSON lines, everything else the human-readable format.
pub fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));

    let builder = fmt()
        .with_env_filter(filter)
        .with_target(true);

    let result = if config.is_production() {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    if let Err(e) = result {
        eprintln!("Tracing already initialised: {e}");
    }
}
