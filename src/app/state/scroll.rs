use super::layout::StoryLayout;
use scrolly_core::{
    RevealBoard, ScrollMetrics, ScrollSnapshot, ScrollStore, ScrollTracker,
    Subscription as StoreSubscription,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::trace;

/// Tracker plus the store every widget reads scroll state from.
pub(in crate::app) struct ScrollModel {
    pub(in crate::app) tracker: ScrollTracker,
    pub(in crate::app) store: ScrollStore,
    pub(in crate::app) metrics: ScrollMetrics,
    _feeds: Vec<StoreSubscription>,
}

impl ScrollModel {
    pub(in crate::app) fn new(
        tracker: ScrollTracker,
        layout: &StoryLayout,
        reveals: Rc<RefCell<RevealBoard>>,
        blocks: Rc<RefCell<RevealBoard>>,
        viewport_height: f32,
    ) -> Self {
        let store = ScrollStore::new(tracker.state());

        let sections = layout.sections().to_vec();
        let block_bounds = layout.blocks().to_vec();
        let reveal_feed = store.subscribe(move |snapshot: &ScrollSnapshot| {
            let now = Instant::now();
            reveals
                .borrow_mut()
                .evaluate(snapshot.metrics, &sections, now);
            blocks
                .borrow_mut()
                .evaluate(snapshot.metrics, &block_bounds, now);
        });
        let trace_feed = store.subscribe(|snapshot: &ScrollSnapshot| {
            trace!(
                revision = snapshot.revision,
                scroll_y = snapshot.metrics.scroll_y,
                progress = snapshot.state.progress,
                active = ?snapshot.state.active_section,
                "Scroll snapshot published"
            );
        });

        ScrollModel {
            tracker,
            store,
            metrics: ScrollMetrics::new(0.0, viewport_height),
            _feeds: vec![reveal_feed, trace_feed],
        }
    }

    /// Recompute from `metrics` and publish. Returns whether subscribers
    /// were notified.
    pub(in crate::app) fn apply(&mut self, metrics: ScrollMetrics, layout: &StoryLayout) -> bool {
        self.metrics = metrics;
        self.sync(layout)
    }

    pub(in crate::app) fn sync(&mut self, layout: &StoryLayout) -> bool {
        let state = self.tracker.update(self.metrics, Some(layout.container()));
        self.store.publish(state, self.metrics)
    }

    pub(in crate::app) fn snapshot(&self) -> ScrollSnapshot {
        self.store.snapshot()
    }

    pub(in crate::app) fn active_section(&self) -> Option<usize> {
        self.snapshot().state.active_section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::SpendingBlock;
    use scrolly_core::story::story_sections;
    use scrolly_core::{ProgressAnchor, Reveal};

    struct Fixture {
        model: ScrollModel,
        layout: StoryLayout,
        reveals: Rc<RefCell<RevealBoard>>,
        blocks: Rc<RefCell<RevealBoard>>,
    }

    fn fixture() -> Fixture {
        let sections = story_sections().expect("story sections are valid");
        let layout = StoryLayout::new(sections.len(), 0.0);
        let reveals = Rc::new(RefCell::new(RevealBoard::new(sections.len(), 0.3, false)));
        let blocks = Rc::new(RefCell::new(RevealBoard::new(layout.blocks().len(), 0.3, false)));
        let tracker = ScrollTracker::new(sections, ProgressAnchor::Container);
        let model = ScrollModel::new(
            tracker,
            &layout,
            Rc::clone(&reveals),
            Rc::clone(&blocks),
            800.0,
        );
        Fixture {
            model,
            layout,
            reveals,
            blocks,
        }
    }

    #[test]
    fn applying_metrics_updates_store_and_reveals() {
        let Fixture {
            mut model,
            layout,
            reveals,
            ..
        } = fixture();
        let top = layout.sections()[1].top;
        assert!(model.apply(ScrollMetrics::new(top, 800.0), &layout));

        assert_eq!(model.active_section(), Some(1));
        assert!(reveals.borrow().get(1).is_some_and(Reveal::is_visible));
    }

    #[test]
    fn repeated_metrics_do_not_republish() {
        let Fixture {
            mut model, layout, ..
        } = fixture();
        assert!(model.apply(ScrollMetrics::new(900.0, 800.0), &layout));
        assert!(!model.apply(ScrollMetrics::new(900.0, 800.0), &layout));
    }

    #[test]
    fn scrolling_back_above_story_keeps_first_section() {
        let Fixture {
            mut model, layout, ..
        } = fixture();
        model.apply(ScrollMetrics::new(0.0, 800.0), &layout);
        assert_eq!(model.active_section(), Some(0));
        assert_eq!(model.snapshot().state.progress, 0.0);
    }

    #[test]
    fn spending_blocks_reveal_independently() {
        let Fixture {
            mut model,
            layout,
            blocks,
            ..
        } = fixture();
        let chart = layout.block(SpendingBlock::Chart).expect("chart block");
        model.apply(ScrollMetrics::new(chart.top, 800.0), &layout);
        {
            let blocks = blocks.borrow();
            assert!(blocks.get(SpendingBlock::Chart.index()).is_some_and(Reveal::is_visible));
            assert!(!blocks.get(SpendingBlock::Insights.index()).is_some_and(Reveal::is_visible));
        }

        let insights = layout.block(SpendingBlock::Insights).expect("insights block");
        model.apply(ScrollMetrics::new(insights.top, 800.0), &layout);
        let blocks = blocks.borrow();
        assert!(blocks.get(SpendingBlock::Insights.index()).is_some_and(Reveal::is_visible));
        assert!(!blocks.get(SpendingBlock::Chart.index()).is_some_and(Reveal::is_visible));
    }
}
