use crate::Environment;
use tracing::{debug, info};
use tracing_subscriber::{prelude::*, EnvFilter, Layer, Registry};

/// Install color-eyre with a project-standard configuration.
///
/// Call this early in main() before any fallible operations. Safe to call
/// multiple times.
///
/// Configuration:
/// - Shows file:line where errors occur
/// - Hides environment variables (the connection string may carry credentials)
pub fn install_color_eyre() {
    let _ = color_eyre::config::HookBuilder::default()
        .display_location_section(true)
        .display_env_section(false)
        .install();
}

/// Default filter directive when `RUST_LOG` is not set.
///
/// The driver is kept quieter than the application so connection outcome
/// lines stay readable.
fn default_directive(environment: &Environment) -> &'static str {
    if environment.is_production() {
        "info,mongodb=warn"
    } else {
        "debug,mongodb=info"
    }
}

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// JSON lines in production, pretty output otherwise
fn fmt_layer(environment: &Environment) -> BoxedLayer {
    let layer = tracing_subscriber::fmt::layer().with_target(false);

    if environment.is_production() {
        layer.json().flatten_event(true).boxed()
    } else {
        layer
            .with_file(false)
            .with_line_number(false)
            .pretty()
            .boxed()
    }
}

/// Initialize tracing with environment-aware output and error span capture.
///
/// - **Production** (`APP_ENV=production`): JSON lines, no module targets
/// - **Development** (default): pretty-printed, human-readable
///
/// `tracing_error::ErrorLayer` is always installed so `eyre` reports carry
/// span traces.
///
/// Environment variables:
/// - `APP_ENV`: Set to "production" for JSON logs (default: "development")
/// - `RUST_LOG`: Override log levels (e.g., "error", "backend=trace")
///
/// Calling this more than once is a no-op after the first success.
pub fn init_tracing(environment: &Environment) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(environment)));

    let result = tracing_subscriber::registry()
        .with(fmt_layer(environment))
        .with(tracing_error::ErrorLayer::default())
        .with(filter)
        .try_init();

    match result {
        Ok(_) => info!("Tracing initialized. Environment: {:?}", environment),
        Err(_) => debug!("Tracing already initialized, skipping re-initialization"),
    }
}
