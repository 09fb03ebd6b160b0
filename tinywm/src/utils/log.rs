use tracing::{metadata::LevelFilter, Subscriber};
use tracing_subscriber::{layer::SubscriberExt, registry::LookupSpan, EnvFilter};

#[cfg(feature = "journald-log")]
mod journald;

/// Installs the global logger: stderr, plus journald with the `journald-log` feature.
/// The level comes from `RUST_LOG`, `info` when unset or invalid.
pub fn setup_logging() {
    let filter = parse_log_level(&std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default());
    if let Err(err) = tracing::subscriber::set_global_default(get_subscribers(filter)) {
        eprintln!("Couldn't setup global subscriber (logger): {err}");
    }
}

#[must_use]
pub fn parse_log_level(level_regex: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse(level_regex)
        .unwrap_or_else(|_| {
            EnvFilter::builder()
                .with_default_directive(LevelFilter::INFO.into())
                .parse_lossy("")
        })
}

#[allow(clippy::let_and_return)]
pub fn get_subscribers(filter: EnvFilter) -> impl Subscriber + for<'span> LookupSpan<'span> {
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    #[cfg(feature = "journald-log")]
    let subscriber = journald::add_layer(subscriber);

    subscriber
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn an_empty_level_falls_back_to_info() {
        assert_eq!(parse_log_level("").max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn a_valid_directive_is_used() {
        assert_eq!(
            parse_log_level("tinywm_core=debug").max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn garbage_falls_back_to_info() {
        assert_eq!(
            parse_log_level("tinywm=notalevel").max_level_hint(),
            Some(LevelFilter::INFO)
        );
    }
}
