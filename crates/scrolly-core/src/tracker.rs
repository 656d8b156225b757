//! Scroll position to progress/active-section mapping.

use crate::section::{ContainerLayout, SectionBounds, SectionList};
use serde::Deserialize;
use tracing::{debug, trace};

/// Raw scroll metrics reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollMetrics {
    pub scroll_y: f32,
    pub viewport_height: f32,
}

impl ScrollMetrics {
    /// Non-finite or negative values are replaced with zero.
    pub fn new(scroll_y: f32, viewport_height: f32) -> Self {
        let sanitize = |v: f32| if v.is_finite() { v.max(0.0) } else { 0.0 };
        ScrollMetrics {
            scroll_y: sanitize(scroll_y),
            viewport_height: sanitize(viewport_height),
        }
    }

    pub fn midpoint(&self) -> f32 {
        self.scroll_y + self.viewport_height / 2.0
    }
}

/// Derived values consumed by the progress bar, nav dots and section
/// animations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollState {
    pub progress: f32,
    pub active_section: Option<usize>,
}

impl ScrollState {
    pub fn initial(section_count: usize) -> Self {
        ScrollState {
            progress: 0.0,
            active_section: if section_count == 0 { None } else { Some(0) },
        }
    }
}

/// What a progress of 1.0 means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProgressAnchor {
    /// Scrolled past the container's bottom edge.
    #[default]
    Container,
    /// Container bottom aligned with the viewport bottom.
    ScrollRange,
}

impl std::fmt::Display for ProgressAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ProgressAnchor::Container => "container",
            ProgressAnchor::ScrollRange => "scroll-range",
        };
        write!(f, "{}", label)
    }
}

/// `clamp((scroll_y - container_top) / container_height, 0, 1)`.
///
/// A degenerate container (zero, negative or non-finite height) reports 0
/// before its top and 1 from its top onward.
pub fn compute_progress(
    scroll_y: f32,
    _viewport_height: f32,
    container_top: f32,
    container_height: f32,
) -> f32 {
    if !scroll_y.is_finite() || !container_top.is_finite() {
        return 0.0;
    }
    if !container_height.is_finite() || container_height <= 0.0 {
        return if scroll_y < container_top { 0.0 } else { 1.0 };
    }
    ((scroll_y - container_top) / container_height).clamp(0.0, 1.0)
}

pub fn compute_progress_with(
    anchor: ProgressAnchor,
    scroll_y: f32,
    viewport_height: f32,
    container_top: f32,
    container_height: f32,
) -> f32 {
    match anchor {
        ProgressAnchor::Container => {
            compute_progress(scroll_y, viewport_height, container_top, container_height)
        }
        ProgressAnchor::ScrollRange => {
            let range = container_height - viewport_height;
            if range.is_finite() && range > 0.0 {
                compute_progress(scroll_y, viewport_height, container_top, range)
            } else {
                compute_progress(scroll_y, viewport_height, container_top, container_height)
            }
        }
    }
}

/// Index of the first section whose `[top, bottom)` holds the viewport
/// midpoint. A midpoint exactly on a boundary belongs to the later section.
/// When nothing matches, `previous` is kept.
pub fn compute_active_section(
    scroll_y: f32,
    viewport_height: f32,
    sections: &[SectionBounds],
    previous: Option<usize>,
) -> Option<usize> {
    let midpoint = scroll_y + viewport_height / 2.0;
    sections
        .iter()
        .position(|bounds| bounds.contains(midpoint))
        .or(previous)
}

/// Stateful wrapper that remembers the last computed [`ScrollState`].
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    sections: SectionList,
    anchor: ProgressAnchor,
    state: ScrollState,
}

impl ScrollTracker {
    pub fn new(sections: SectionList, anchor: ProgressAnchor) -> Self {
        let state = ScrollState::initial(sections.len());
        ScrollTracker {
            sections,
            anchor,
            state,
        }
    }

    pub fn sections(&self) -> &SectionList {
        &self.sections
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    pub fn anchor(&self) -> ProgressAnchor {
        self.anchor
    }

    /// Recompute from fresh metrics. Returns the prior state untouched when
    /// the container is not measurable yet.
    pub fn update(
        &mut self,
        metrics: ScrollMetrics,
        layout: Option<&ContainerLayout>,
    ) -> ScrollState {
        let Some(layout) = layout else {
            trace!("Container not measurable yet; keeping previous scroll state");
            return self.state;
        };
        if layout.sections.len() != self.sections.len() {
            trace!(
                measured = layout.sections.len(),
                expected = self.sections.len(),
                "Section geometry incomplete; keeping previous scroll state"
            );
            return self.state;
        }

        let progress = compute_progress_with(
            self.anchor,
            metrics.scroll_y,
            metrics.viewport_height,
            layout.top,
            layout.height,
        );
        let active_section = compute_active_section(
            metrics.scroll_y,
            metrics.viewport_height,
            &layout.sections,
            self.state.active_section,
        );

        if active_section != self.state.active_section {
            debug!(
                from = ?self.state.active_section,
                to = ?active_section,
                id = active_section
                    .and_then(|idx| self.sections.get(idx))
                    .map(|section| section.id.as_str())
                    .unwrap_or("-"),
                "Active section changed"
            );
        }

        self.state = ScrollState {
            progress,
            active_section,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::section::Section;

    fn three_sections() -> Vec<SectionBounds> {
        vec![
            SectionBounds::new(0.0, 800.0),
            SectionBounds::new(800.0, 800.0),
            SectionBounds::new(1600.0, 800.0),
        ]
    }

    fn tracker(count: usize) -> ScrollTracker {
        let sections = (0..count)
            .map(|i| Section::new(format!("s{i}"), format!("Section {i}")))
            .collect();
        ScrollTracker::new(
            SectionList::new(sections).expect("valid sections"),
            ProgressAnchor::Container,
        )
    }

    #[test]
    fn progress_is_zero_at_or_before_container_top() {
        for s in [-500.0, 0.0, 199.0, 200.0] {
            assert_eq!(compute_progress(s, 600.0, 200.0, 1000.0), 0.0);
        }
    }

    #[test]
    fn progress_is_one_at_or_after_container_bottom() {
        for s in [1200.0, 1201.0, 50_000.0] {
            assert_eq!(compute_progress(s, 600.0, 200.0, 1000.0), 1.0);
        }
    }

    #[test]
    fn progress_is_monotonic() {
        let mut previous = 0.0f32;
        let mut s = -300.0f32;
        while s < 3000.0 {
            let p = compute_progress(s, 700.0, 150.0, 2400.0);
            assert!(p >= previous, "progress went backwards at {s}");
            previous = p;
            s += 37.5;
        }
    }

    #[test]
    fn degenerate_container_snaps_to_edges() {
        assert_eq!(compute_progress(10.0, 600.0, 100.0, 0.0), 0.0);
        assert_eq!(compute_progress(100.0, 600.0, 100.0, 0.0), 1.0);
        assert_eq!(compute_progress(100.0, 600.0, 100.0, f32::NAN), 1.0);
        assert_eq!(compute_progress(f32::NAN, 600.0, 100.0, 500.0), 0.0);
    }

    #[test]
    fn scroll_range_anchor_reaches_one_when_bottoms_align() {
        let p = compute_progress_with(ProgressAnchor::ScrollRange, 3200.0, 800.0, 0.0, 4000.0);
        assert_eq!(p, 1.0);
        let half = compute_progress_with(ProgressAnchor::ScrollRange, 1600.0, 800.0, 0.0, 4000.0);
        assert!((half - 0.5).abs() < 1e-6);
    }

    #[test]
    fn scroll_range_falls_back_when_container_fits_viewport() {
        let p = compute_progress_with(ProgressAnchor::ScrollRange, 250.0, 900.0, 0.0, 500.0);
        assert!((p - 0.5).abs() < 1e-6);
    }

    #[test]
    fn midpoint_on_boundary_selects_following_section() {
        // 500 + 600 / 2 = 800, the shared edge of sections 0 and 1.
        assert_eq!(
            compute_active_section(500.0, 600.0, &three_sections(), Some(0)),
            Some(1)
        );
    }

    #[test]
    fn midpoint_inside_section_selects_it() {
        assert_eq!(
            compute_active_section(1500.0, 600.0, &three_sections(), None),
            Some(2)
        );
    }

    #[test]
    fn unmatched_midpoint_keeps_previous_index() {
        assert_eq!(
            compute_active_section(5000.0, 600.0, &three_sections(), Some(2)),
            Some(2)
        );
        assert_eq!(
            compute_active_section(5000.0, 600.0, &three_sections(), None),
            None
        );
    }

    #[test]
    fn first_match_wins_for_overlapping_sections() {
        let overlapping = vec![SectionBounds::new(0.0, 1000.0), SectionBounds::new(500.0, 1000.0)];
        assert_eq!(
            compute_active_section(400.0, 400.0, &overlapping, None),
            Some(0)
        );
    }

    #[test]
    fn tracker_keeps_state_without_layout() {
        let mut tracker = tracker(3);
        let layout = ContainerLayout::stacked(0.0, &[800.0, 800.0, 800.0]);
        let before = tracker.update(ScrollMetrics::new(1000.0, 600.0), Some(&layout));
        let after = tracker.update(ScrollMetrics::new(0.0, 600.0), None);
        assert_eq!(before, after);
    }

    #[test]
    fn tracker_keeps_state_when_geometry_is_partial() {
        let mut tracker = tracker(3);
        let partial = ContainerLayout::stacked(0.0, &[800.0]);
        let state = tracker.update(ScrollMetrics::new(2000.0, 600.0), Some(&partial));
        assert_eq!(state, ScrollState::initial(3));
    }

    #[test]
    fn tracker_sticks_to_last_section_past_the_end() {
        let mut tracker = tracker(3);
        let layout = ContainerLayout::stacked(0.0, &[800.0, 800.0, 800.0]);
        let mut s = 0.0;
        while s <= 2000.0 {
            tracker.update(ScrollMetrics::new(s, 600.0), Some(&layout));
            s += 100.0;
        }
        let past = tracker.update(ScrollMetrics::new(9000.0, 600.0), Some(&layout));
        assert_eq!(past.active_section, Some(2));
        assert_eq!(past.progress, 1.0);
    }

    #[test]
    fn empty_tracker_has_no_active_section() {
        let mut tracker = tracker(0);
        let layout = ContainerLayout::stacked(0.0, &[]);
        let state = tracker.update(ScrollMetrics::new(10.0, 600.0), Some(&layout));
        assert_eq!(state.active_section, None);
    }

    #[test]
    fn metrics_are_sanitized() {
        let metrics = ScrollMetrics::new(f32::INFINITY, -20.0);
        assert_eq!(metrics, ScrollMetrics::new(0.0, 0.0));
    }
}
