//! Test subscriber that records the target of every span and event.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::span::{Attributes, Id, Record};
use tracing::{Event, Metadata, Subscriber};

#[derive(Clone, Default)]
pub struct TraceRecorder {
    targets: Arc<Mutex<Vec<String>>>,
    next_id: Arc<AtomicU64>,
}

impl TraceRecorder {
    /// Run `f` with this recorder as the thread's default subscriber.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        tracing::subscriber::with_default(self.clone(), f)
    }

    /// Recorded targets belonging to this workspace's crates.
    pub fn workspace_targets(&self) -> Vec<String> {
        self.targets
            .lock()
            .unwrap()
            .iter()
            .filter(|target| target.starts_with("deal_ui") || target.starts_with("shared_ui"))
            .cloned()
            .collect()
    }

    fn push(&self, metadata: &Metadata<'_>) {
        self.targets.lock().unwrap().push(metadata.target().to_string());
    }
}

impl Subscriber for TraceRecorder {
    fn enabled(&self, _: &Metadata<'_>) -> bool {
        true
    }

    fn new_span(&self, span: &Attributes<'_>) -> Id {
        self.push(span.metadata());
        Id::from_u64(self.next_id.fetch_add(1, Ordering::Relaxed) + 1)
    }

    fn record(&self, _: &Id, _: &Record<'_>) {}

    fn record_follows_from(&self, _: &Id, _: &Id) {}

    fn event(&self, event: &Event<'_>) {
        self.push(event.metadata());
    }

    fn enter(&self, _: &Id) {}

    fn exit(&self, _: &Id) {}
}
