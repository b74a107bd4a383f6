use time::format_description::FormatItem;
use time::macros::format_description;
use tracing_error::ErrorLayer;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::config::{Config, LogFormat};

// Cached format description for timestamps
const TIMESTAMP_FORMAT: &[FormatItem<'static>] = format_description!("[hour]:[minute]:[second].[subsecond digits:5]");

static SUBSCRIBER_INIT: std::sync::Once = std::sync::Once::new();

/// Builds the event filter: `RUST_LOG` wins, otherwise the configured directive.
pub fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER))
}

/// Configure and initialize logging for the application.
///
/// Events go to stderr; stdout is reserved for map output. Only the first call has any effect.
pub fn setup_logging(config: &Config) {
    SUBSCRIBER_INIT.call_once(|| {
        let filter = build_filter(config);
        let builder = FmtSubscriber::builder()
            .with_writer(std::io::stderr)
            .with_timer(UtcTime::new(TIMESTAMP_FORMAT))
            .with_target(true)
            .with_env_filter(filter);

        let subscriber: Box<dyn tracing::Subscriber + Send + Sync> = match config.log_format {
            LogFormat::Pretty => Box::new(builder.pretty().finish().with(ErrorLayer::default())),
            LogFormat::Compact => Box::new(builder.compact().finish().with(ErrorLayer::default())),
            LogFormat::Json => Box::new(builder.json().finish().with(ErrorLayer::default())),
        };

        if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
            eprintln!("Could not set global default subscriber: {e}");
        }
    });
}
