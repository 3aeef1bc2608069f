pub mod payload;

pub use payload::{decode, decode_str, Decoded, PayloadError, PayloadKind};

pub mod telemetry {
    use anyhow::Result;
    use parley_config::LoggingConfig;
    use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

    /// Filter used when `RUST_LOG` is unset
    pub fn env_filter(logging: &LoggingConfig) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter))
    }

    pub fn init_tracing(logging: &LoggingConfig) -> Result<()> {
        let subscriber = SubscriberBuilder::default()
            .with_env_filter(env_filter(logging))
            .with_writer(std::io::stderr)
            .finish();

        tracing::subscriber::set_global_default(subscriber)
            .map_err(|error| anyhow::anyhow!("failed to set tracing subscriber: {error}"))
    }
}
