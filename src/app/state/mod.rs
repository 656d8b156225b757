mod constants;
mod layout;
mod scroll;

use crate::config::AppConfig;
use chrono::{Datelike, Local};
use iced::Task;
use scrolly_core::{LoadGate, RevealBoard, ScrollTracker, SectionList};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tracing::info;

use super::messages::Message;

pub(crate) use constants::*;
pub(crate) use layout::{SpendingBlock, StoryLayout};
pub(in crate::app) use scroll::ScrollModel;

/// Core application state composed of sub-models.
pub struct App {
    pub(super) config: AppConfig,
    pub(super) layout: StoryLayout,
    pub(super) scroll: ScrollModel,
    pub(super) reveals: Rc<RefCell<RevealBoard>>,
    pub(super) blocks: Rc<RefCell<RevealBoard>>,
    pub(super) intro: LoadGate,
    pub(super) now: Instant,
    pub(super) copyright_year: i32,
}

impl App {
    pub fn bootstrap(config: AppConfig, sections: SectionList) -> (App, Task<Message>) {
        let now = Instant::now();
        let layout = StoryLayout::new(sections.len(), config.min_section_height);
        let reveals = Rc::new(RefCell::new(RevealBoard::new(
            sections.len(),
            config.reveal_amount,
            config.reveal_once,
        )));
        let blocks = Rc::new(RefCell::new(RevealBoard::new(
            layout.blocks().len(),
            config.reveal_amount,
            config.reveal_once,
        )));
        let tracker = ScrollTracker::new(sections, config.progress_anchor);
        let scroll = ScrollModel::new(
            tracker,
            &layout,
            Rc::clone(&reveals),
            Rc::clone(&blocks),
            config.window_height,
        );
        let intro = LoadGate::new(
            now,
            Duration::from_millis(config.intro_delay_ms),
            Duration::from_millis(config.intro_fade_ms),
        );

        info!(
            sections = layout.sections().len(),
            content_height = layout.content_height(),
            anchor = %config.progress_anchor,
            theme = %config.theme,
            "Story page ready"
        );

        let mut app = App {
            config,
            layout,
            scroll,
            reveals,
            blocks,
            intro,
            now,
            copyright_year: Local::now().year(),
        };
        app.scroll.sync(&app.layout);
        (app, Task::none())
    }

    /// True while something on screen is still mid-animation.
    pub(super) fn is_animating(&self) -> bool {
        let hero_running = self
            .intro
            .since_loaded(self.now)
            .is_none_or(|elapsed| !HERO_SETTLE.is_finished(elapsed));
        hero_running
            || !self.intro.is_settled(self.now)
            || self.reveals.borrow().is_animating(self.now, REVEAL_SETTLE)
            || self.blocks.borrow().is_animating(self.now, REVEAL_SETTLE)
    }
}
