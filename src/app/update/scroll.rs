use super::super::state::App;
use super::Effect;
use iced::widget::scrollable::AbsoluteOffset;
use scrolly_core::ScrollMetrics;
use tracing::{debug, info, trace};

impl App {
    pub(super) fn handle_scrolled(
        &mut self,
        offset_y: f32,
        viewport_height: f32,
        content_height: f32,
    ) {
        let expected = self.layout.content_height();
        if content_height.is_finite() && (content_height - expected).abs() > 1.0 {
            trace!(
                content_height,
                expected, "Rendered story height differs from computed layout"
            );
        }
        let metrics = ScrollMetrics::new(offset_y, viewport_height);
        self.scroll.apply(metrics, &self.layout);
    }

    pub(super) fn handle_jump_to_section(&mut self, idx: usize, effects: &mut Vec<Effect>) {
        let viewport_height = self.scroll.metrics.viewport_height;
        let Some(y) = self.layout.scroll_target(idx, viewport_height) else {
            debug!(idx, "Ignoring jump to unknown section");
            return;
        };
        info!(
            idx,
            id = self
                .scroll
                .tracker
                .sections()
                .get(idx)
                .map(|section| section.id.as_str())
                .unwrap_or("-"),
            y,
            "Jumping to section"
        );
        effects.push(Effect::ScrollTo(AbsoluteOffset { x: 0.0, y }));
    }

    /// Move `delta` sections away from the active one, staying in range.
    pub(super) fn handle_step_section(&mut self, delta: isize, effects: &mut Vec<Effect>) {
        let count = self.layout.sections().len();
        if count == 0 {
            return;
        }
        let target = Self::step_target(self.scroll.active_section(), delta, count);
        self.handle_jump_to_section(target, effects);
    }

    pub(super) fn step_target(active: Option<usize>, delta: isize, count: usize) -> usize {
        let last = count.saturating_sub(1);
        match active {
            None => 0,
            Some(current) => current.saturating_add_signed(delta).min(last),
        }
    }
}
