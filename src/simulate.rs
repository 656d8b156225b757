//! Headless replay of a top-to-bottom scroll through the story.
//!
//! The tracker is mounted on a [`SimulatedHost`] with the same geometry the
//! window renders, and every published snapshot is logged.

use crate::app::StoryLayout;
use crate::config::AppConfig;
use anyhow::{Result, ensure};
use scrolly_core::{
    RevealBoard, ScrollSnapshot, ScrollState, ScrollStore, ScrollTracker, SectionList,
    SimulatedHost,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;
use tracing::info;

/// Aggregate results of one sweep.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimulationReport {
    pub(crate) steps: usize,
    pub(crate) publishes: usize,
    pub(crate) visited: Vec<String>,
    pub(crate) final_state: ScrollState,
}

pub(crate) fn run_simulation(config: &AppConfig, sections: SectionList, step: f32) -> Result<()> {
    let report = simulate_sweep(config, sections, step)?;
    info!(
        steps = report.steps,
        publishes = report.publishes,
        visited = %report.visited.join(" -> "),
        progress = report.final_state.progress,
        "Simulation finished"
    );
    Ok(())
}

pub(crate) fn simulate_sweep(
    config: &AppConfig,
    sections: SectionList,
    step: f32,
) -> Result<SimulationReport> {
    ensure!(step.is_finite() && step > 0.0, "Simulation step must be positive");

    let layout = StoryLayout::new(sections.len(), config.min_section_height);
    let ids: Vec<String> = sections.iter().map(|section| section.id.clone()).collect();
    let host = Rc::new(SimulatedHost::new(config.window_height));
    let store = ScrollStore::new(ScrollState::initial(sections.len()));
    let reveals = Rc::new(RefCell::new(RevealBoard::new(
        sections.len(),
        config.reveal_amount,
        config.reveal_once,
    )));

    let publishes = Rc::new(RefCell::new(0usize));
    let visited = Rc::new(RefCell::new(Vec::<String>::new()));

    let _logger = {
        let publishes = Rc::clone(&publishes);
        let visited = Rc::clone(&visited);
        let reveals = Rc::clone(&reveals);
        let elements = layout.sections().to_vec();
        store.subscribe(move |snapshot: &ScrollSnapshot| {
            *publishes.borrow_mut() += 1;
            let mut board = reveals.borrow_mut();
            board.evaluate(snapshot.metrics, &elements, Instant::now());
            let id = snapshot
                .state
                .active_section
                .and_then(|idx| ids.get(idx))
                .map(String::as_str)
                .unwrap_or("-");
            info!(
                revision = snapshot.revision,
                scroll_y = snapshot.metrics.scroll_y,
                progress = format!("{:.3}", snapshot.state.progress),
                section = id,
                revealed = board.visible_count(),
                "Snapshot"
            );
            let mut visited = visited.borrow_mut();
            if visited.last().map(String::as_str) != Some(id) {
                visited.push(id.to_string());
            }
        })
    };

    let probe = {
        let container = layout.container().clone();
        move || Some(container.clone())
    };
    let tracker = ScrollTracker::new(sections, config.progress_anchor);
    let mounted = tracker.mount(Rc::clone(&host), probe, store.clone());

    let max_scroll = layout.max_scroll(config.window_height);
    let mut steps = 0;
    let mut y: f32 = 0.0;
    loop {
        host.scroll_to(y.min(max_scroll));
        steps += 1;
        if y >= max_scroll {
            break;
        }
        y += step;
    }

    let final_state = mounted.state();
    drop(mounted);
    ensure!(
        host.listener_count() == 0,
        "Scroll listener still registered after teardown"
    );

    let publishes = *publishes.borrow();
    let visited = visited.borrow().clone();
    Ok(SimulationReport {
        steps,
        publishes,
        visited,
        final_state,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrolly_core::story::story_sections;

    #[test]
    fn sweep_visits_every_section_in_order() {
        let config = AppConfig::default();
        let sections = story_sections().expect("story sections are valid");
        let expected: Vec<String> = sections.iter().map(|s| s.id.clone()).collect();

        let report = simulate_sweep(&config, sections, 100.0).expect("sweep runs");

        assert_eq!(report.visited, expected);
        assert_eq!(report.final_state.active_section, Some(expected.len() - 1));
        assert!(report.publishes <= report.steps + 1);
    }

    #[test]
    fn default_config_fills_progress_at_the_bottom() {
        let sections = story_sections().expect("story sections are valid");
        let report =
            simulate_sweep(&AppConfig::default(), sections, 120.0).expect("sweep runs");
        assert_eq!(report.final_state.progress, 1.0);
    }

    #[test]
    fn rejects_non_positive_step() {
        let sections = story_sections().expect("story sections are valid");
        assert!(simulate_sweep(&AppConfig::default(), sections, 0.0).is_err());
    }
}
