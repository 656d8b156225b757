//! Shared observable holding the latest scroll snapshot.
//!
//! One store is created per page. The tracker publishes into it and every
//! consumer (progress bar, nav dots, reveal board, logging) either pulls
//! [`ScrollStore::snapshot`] or subscribes for push notifications, so all of
//! them observe the same revision for a given scroll event.

use crate::tracker::{ScrollMetrics, ScrollState};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub state: ScrollState,
    pub metrics: ScrollMetrics,
    pub revision: u64,
}

type Callback = Rc<dyn Fn(&ScrollSnapshot)>;

struct StoreInner {
    snapshot: ScrollSnapshot,
    subscribers: Vec<(u64, Callback)>,
    next_subscriber_id: u64,
}

#[derive(Clone)]
pub struct ScrollStore {
    inner: Rc<RefCell<StoreInner>>,
}

impl ScrollStore {
    pub fn new(initial: ScrollState) -> Self {
        ScrollStore {
            inner: Rc::new(RefCell::new(StoreInner {
                snapshot: ScrollSnapshot {
                    state: initial,
                    metrics: ScrollMetrics::default(),
                    revision: 0,
                },
                subscribers: Vec::new(),
                next_subscriber_id: 0,
            })),
        }
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        self.inner.borrow().snapshot
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }

    /// Register a callback; it stays registered until the returned
    /// [`Subscription`] is dropped.
    pub fn subscribe(&self, callback: impl Fn(&ScrollSnapshot) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_subscriber_id;
        inner.next_subscriber_id += 1;
        inner.subscribers.push((id, Rc::new(callback)));
        Subscription {
            id,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Store a new snapshot and notify subscribers in registration order.
    /// Returns `false` without notifying when nothing changed.
    pub fn publish(&self, state: ScrollState, metrics: ScrollMetrics) -> bool {
        let (snapshot, subscribers) = {
            let mut inner = self.inner.borrow_mut();
            if inner.snapshot.state == state && inner.snapshot.metrics == metrics {
                return false;
            }
            inner.snapshot = ScrollSnapshot {
                state,
                metrics,
                revision: inner.snapshot.revision + 1,
            };
            let subscribers: Vec<Callback> = inner
                .subscribers
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
            (inner.snapshot, subscribers)
        };

        // The borrow is released so callbacks may subscribe, unsubscribe or
        // read the store.
        for callback in subscribers {
            callback(&snapshot);
        }
        true
    }
}

impl fmt::Debug for ScrollStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ScrollStore")
            .field("snapshot", &inner.snapshot)
            .field("subscribers", &inner.subscribers.len())
            .finish()
    }
}

/// Handle returned by [`ScrollStore::subscribe`]; dropping it unsubscribes.
#[must_use = "dropping a Subscription immediately unsubscribes it"]
pub struct Subscription {
    id: u64,
    store: Weak<RefCell<StoreInner>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner
                .borrow_mut()
                .subscribers
                .retain(|(id, _)| *id != self.id);
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
