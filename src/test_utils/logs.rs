use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use tracing::{Event, Level, Subscriber, subscriber::DefaultGuard};
use tracing_subscriber::{
    Layer,
    layer::{Context, SubscriberExt},
    registry::Registry,
};

/// Counts the ERROR events logged while it is installed.
#[derive(Clone, Default)]
pub(crate) struct ErrorCounter(Arc<AtomicUsize>);

impl ErrorCounter {
    pub(crate) fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for ErrorCounter {
    fn on_event(&self, event: &Event<'_>, _context: Context<'_, S>) {
        if *event.metadata().level() == Level::ERROR {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Count ERROR events on the current thread until the guard is dropped.
///
/// `#[tokio::test]` runs on a single thread, so the guard covers the awaited handler too.
pub(crate) fn count_errors() -> (ErrorCounter, DefaultGuard) {
    let counter = ErrorCounter::default();
    let guard = tracing::subscriber::set_default(Registry::default().with(counter.clone()));

    (counter, guard)
}
