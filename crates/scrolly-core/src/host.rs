//! Binding a [`ScrollTracker`] to a scroll event source.
//!
//! [`ScrollTracker::mount`] registers exactly one listener and hands back a
//! [`MountedTracker`]; dropping it detaches the listener whatever the reason
//! for teardown, and a listener that is still queued in the host when the
//! guard drops becomes a no-op.

use crate::section::ContainerLayout;
use crate::store::ScrollStore;
use crate::tracker::{ScrollMetrics, ScrollState, ScrollTracker};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

pub type ScrollListener = Rc<dyn Fn(ScrollMetrics)>;

/// Anything that reports scroll position changes.
pub trait ScrollHost {
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId;
    fn remove_scroll_listener(&self, id: ListenerId) -> bool;
    fn metrics(&self) -> ScrollMetrics;
}

/// Source of container geometry. `None` means the container has not been
/// laid out yet.
pub trait LayoutProbe {
    fn measure(&self) -> Option<ContainerLayout>;
}

impl<F> LayoutProbe for F
where
    F: Fn() -> Option<ContainerLayout>,
{
    fn measure(&self) -> Option<ContainerLayout> {
        self()
    }
}

impl ScrollTracker {
    /// Attach to `host`, publishing every recomputed state into `store`.
    /// The current host metrics are applied once immediately.
    pub fn mount<H, P>(self, host: Rc<H>, probe: P, store: ScrollStore) -> MountedTracker<H>
    where
        H: ScrollHost + 'static,
        P: LayoutProbe + 'static,
    {
        let tracker = Rc::new(RefCell::new(self));
        let alive = Rc::new(Cell::new(true));
        let probe = Rc::new(probe);

        let on_scroll: ScrollListener = {
            let tracker = Rc::clone(&tracker);
            let alive = Rc::clone(&alive);
            let probe = Rc::clone(&probe);
            let store = store.clone();
            Rc::new(move |metrics: ScrollMetrics| {
                if !alive.get() {
                    return;
                }
                let layout = probe.measure();
                let state = tracker.borrow_mut().update(metrics, layout.as_ref());
                store.publish(state, metrics);
            })
        };

        let listener = host.add_scroll_listener(Rc::clone(&on_scroll));
        info!(
            sections = tracker.borrow().sections().len(),
            anchor = %tracker.borrow().anchor(),
            "Scroll tracker mounted"
        );
        on_scroll(host.metrics());

        MountedTracker {
            host,
            listener,
            tracker,
            alive,
        }
    }
}

pub struct MountedTracker<H: ScrollHost> {
    host: Rc<H>,
    listener: ListenerId,
    tracker: Rc<RefCell<ScrollTracker>>,
    alive: Rc<Cell<bool>>,
}

impl<H: ScrollHost> MountedTracker<H> {
    pub fn state(&self) -> ScrollState {
        self.tracker.borrow().state()
    }
}

impl<H: ScrollHost> Drop for MountedTracker<H> {
    fn drop(&mut self) {
        self.alive.set(false);
        let removed = self.host.remove_scroll_listener(self.listener);
        debug!(removed, "Scroll tracker unmounted");
    }
}

/// In-memory host used for headless replays and tests.
#[derive(Default)]
pub struct SimulatedHost {
    listeners: RefCell<Vec<(ListenerId, ScrollListener)>>,
    metrics: Cell<ScrollMetrics>,
    next_id: Cell<u64>,
}

impl SimulatedHost {
    pub fn new(viewport_height: f32) -> Self {
        let host = SimulatedHost::default();
        host.metrics.set(ScrollMetrics::new(0.0, viewport_height));
        host
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn scroll_to(&self, scroll_y: f32) {
        let current = self.metrics.get();
        self.metrics
            .set(ScrollMetrics::new(scroll_y, current.viewport_height));
        self.dispatch();
    }

    pub fn resize(&self, viewport_height: f32) {
        let current = self.metrics.get();
        self.metrics
            .set(ScrollMetrics::new(current.scroll_y, viewport_height));
        self.dispatch();
    }

    fn dispatch(&self) {
        let metrics = self.metrics.get();
        let listeners: Vec<ScrollListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in listeners {
            listener(metrics);
        }
    }
}

impl ScrollHost for SimulatedHost {
    fn add_scroll_listener(&self, listener: ScrollListener) -> ListenerId {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    fn remove_scroll_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn metrics(&self) -> ScrollMetrics {
        self.metrics.get()
    }
}
