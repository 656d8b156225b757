use super::super::state::App;
use scrolly_core::ScrollMetrics;
use tracing::{debug, info};

impl App {
    pub(super) fn handle_toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        info!(theme = %self.config.theme, "Toggled theme");
    }

    /// The story scrollable fills the window, so the window height is the
    /// viewport height. Reveals are re-evaluated through the store.
    pub(super) fn handle_window_resized(&mut self, width: f32, height: f32) {
        debug!(width, height, "Window resized");
        let metrics = ScrollMetrics::new(self.scroll.metrics.scroll_y, height);
        self.scroll.apply(metrics, &self.layout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use scrolly_core::story::story_sections;

    #[test]
    fn resizing_reevaluates_active_section_and_reveals() {
        let sections = story_sections().expect("story sections are valid");
        let (mut app, _task) = App::bootstrap(AppConfig::default(), sections);
        let first = app.layout.sections()[0];
        let second = app.layout.sections()[1];

        // A short window scrolled into the first section.
        let offset = first.top + 200.0;
        app.handle_scrolled(offset, 400.0, app.layout.content_height());
        assert_eq!(app.scroll.active_section(), Some(0));
        assert!(!app.reveals.borrow().get(1).is_some_and(|r| r.is_visible()));

        // Growing the window alone pushes the midpoint into the second section.
        let height = (second.top - offset) * 2.0 + 100.0;
        app.handle_window_resized(1280.0, height);
        assert_eq!(app.scroll.metrics, ScrollMetrics::new(offset, height));
        assert_eq!(app.scroll.active_section(), Some(1));
        assert!(app.reveals.borrow().get(1).is_some_and(|r| r.is_visible()));
    }
}
