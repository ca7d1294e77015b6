//! Diagnostic logging setup.

use tracing::Subscriber;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;

/// Target prefix of this crate's events.
const TARGET: &str = "graphql_alchemist";

/// Builds the stderr subscriber for the given level.
///
/// Only events from this crate are kept, so stdout stays reserved for the
/// resolver summary.
pub fn subscriber(level: impl Into<LevelFilter>) -> impl Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .finish()
        .with(crate_filter())
}

/// Keeps only events emitted from this crate.
pub fn crate_filter<S: Subscriber>() -> impl Layer<S> {
    filter_fn(|metadata| metadata.target().starts_with(TARGET))
}

/// Installs the subscriber as the global default.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(level: impl Into<LevelFilter>) -> anyhow::Result<()> {
    tracing::subscriber::set_global_default(subscriber(level))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::Event;
    use tracing_subscriber::layer::Context;

    /// Counts every event that reaches it.
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn count_events(emit: impl FnOnce()) -> usize {
        let seen = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry()
            .with(crate_filter())
            .with(EventCounter(Arc::clone(&seen)));
        tracing::subscriber::with_default(subscriber, emit);
        seen.load(Ordering::SeqCst)
    }

    #[test]
    fn crate_filter_keeps_events_from_this_crate() {
        let seen = count_events(|| {
            tracing::info!("from the crate");
            tracing::warn!(target: "graphql_alchemist::core", "explicit crate target");
        });
        assert_eq!(seen, 2);
    }

    #[test]
    fn crate_filter_drops_foreign_targets() {
        let seen = count_events(|| {
            tracing::info!(target: "other", "foreign");
            tracing::error!(target: "hyper::proto", "foreign");
            tracing::info!("kept");
        });
        assert_eq!(seen, 1);
    }
}
