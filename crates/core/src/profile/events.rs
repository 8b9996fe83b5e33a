//! Change-notification bus for the active profile
//!
//! A single process-wide signal raised whenever the active profile changes.
//! Subscribers register a handler and hold an unsubscribe guard; delivery
//! order across subscribers is unspecified. There is no queuing: an
//! emission with zero subscribers is dropped, which is acceptable because
//! consumers read current state on (re)initialization.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

use biterec_domain::ProfileState;
use parking_lot::Mutex;

type Handler = Arc<dyn Fn(&ProfileState) + Send + Sync>;

#[derive(Default)]
struct EventsInner {
    next_id: AtomicU64,
    handlers: Mutex<HashMap<u64, Handler>>,
}

/// Broadcast bus carrying a copy of the new [`ProfileState`].
#[derive(Clone, Default)]
pub struct ProfileEvents {
    inner: Arc<EventsInner>,
}

impl ProfileEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler. The returned [`Subscription`] unsubscribes on
    /// drop; keep it alive for as long as notifications are wanted.
    #[must_use = "dropping the subscription unsubscribes the handler"]
    pub fn subscribe<F>(&self, handler: F) -> Subscription
    where
        F: Fn(&ProfileState) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.handlers.lock().insert(id, Arc::new(handler));
        Subscription { id, inner: Arc::downgrade(&self.inner) }
    }

    /// Notify every live subscriber. Handlers run outside the registry
    /// lock so they may subscribe or mutate the store reentrantly.
    pub fn emit(&self, state: &ProfileState) {
        let handlers: Vec<Handler> = self.inner.handlers.lock().values().cloned().collect();
        for handler in handlers {
            handler(state);
        }
    }

    /// Number of live subscribers (test/diagnostic helper).
    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.lock().len()
    }
}

/// Guard for one subscription; dropping it removes the handler.
pub struct Subscription {
    id: u64,
    inner: Weak<EventsInner>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.inner.upgrade() {
            inner.handlers.lock().remove(&self.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    #[test]
    fn subscribers_receive_emitted_state() {
        let events = ProfileEvents::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let _sub = events.subscribe(move |state| {
            sink.lock().push(state.profile_id.clone());
        });

        let state = ProfileState { profile_id: "jess-kim".to_string(), ..ProfileState::default() };
        events.emit(&state);

        assert_eq!(seen.lock().as_slice(), ["jess-kim"]);
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let events = ProfileEvents::new();
        let count = Arc::new(AtomicUsize::new(0));

        let sink = Arc::clone(&count);
        let sub = events.subscribe(move |_| {
            sink.fetch_add(1, Ordering::SeqCst);
        });
        assert_eq!(events.subscriber_count(), 1);

        events.emit(&ProfileState::default());
        drop(sub);
        events.emit(&ProfileState::default());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(events.subscriber_count(), 0);
    }

    #[test]
    fn emission_without_subscribers_is_lost_silently() {
        let events = ProfileEvents::new();
        events.emit(&ProfileState::default());
        assert_eq!(events.subscriber_count(), 0);
    }
}
