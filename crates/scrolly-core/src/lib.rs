//! Scroll-driven section tracking for the scrollytelling viewer.
//!
//! The page is a tall container split into named sections. As the reader
//! scrolls, [`ScrollTracker`] turns the scroll position into a progress
//! fraction and the index of the section under the viewport midpoint, and
//! publishes both through a [`ScrollStore`] that every widget reads from.
//! [`RevealBoard`] keeps one hidden/visible machine per section for the
//! entrance animations.

pub mod animation;
pub mod host;
pub mod reveal;
pub mod section;
pub mod store;
pub mod story;
pub mod tracker;

pub use animation::{LoadGate, Transition, ease_out_cubic, lerp};
pub use host::{LayoutProbe, ListenerId, MountedTracker, ScrollHost, ScrollListener, SimulatedHost};
pub use reveal::{DEFAULT_REVEAL_AMOUNT, Reveal, RevealBoard, RevealPhase, is_intersecting};
pub use section::{ContainerLayout, Section, SectionBounds, SectionError, SectionList};
pub use store::{ScrollSnapshot, ScrollStore, Subscription};
pub use tracker::{
    ProgressAnchor, ScrollMetrics, ScrollState, ScrollTracker, compute_active_section,
    compute_progress, compute_progress_with,
};
