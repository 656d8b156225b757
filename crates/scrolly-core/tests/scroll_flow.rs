use scrolly_core::story::story_sections;
use scrolly_core::{
    ContainerLayout, ProgressAnchor, RevealBoard, ScrollMetrics, ScrollState, ScrollStore,
    ScrollTracker, SectionBounds, SimulatedHost, compute_active_section, compute_progress,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Instant;

fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < 1e-5,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn progress_sweeps_container_in_even_steps() {
    let expected = [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 0.875, 1.0];
    for (step, want) in expected.iter().enumerate() {
        let scroll_y = step as f32 * 500.0;
        assert_close(compute_progress(scroll_y, 800.0, 0.0, 4000.0), *want);
    }
    assert_close(compute_progress(6000.0, 800.0, 0.0, 4000.0), 1.0);
}

#[test]
fn midpoint_on_boundary_selects_later_section() {
    let sections = [
        SectionBounds::new(0.0, 1000.0),
        SectionBounds::new(1000.0, 1000.0),
    ];
    assert_eq!(compute_active_section(600.0, 800.0, &sections, Some(0)), Some(1));
    assert_eq!(compute_active_section(599.0, 800.0, &sections, Some(1)), Some(0));
}

#[test]
fn story_page_tracks_every_section_in_order() {
    let sections = story_sections().expect("story sections are valid");
    let count = sections.len();
    let heights = vec![900.0; count];
    let layout = ContainerLayout::stacked(0.0, &heights);

    let host = Rc::new(SimulatedHost::new(900.0));
    let store = ScrollStore::new(ScrollState::initial(count));
    let seen = Rc::new(RefCell::new(Vec::new()));
    let _subscription = {
        let seen = Rc::clone(&seen);
        store.subscribe(move |snapshot| {
            let mut seen = seen.borrow_mut();
            if seen.last() != Some(&snapshot.state.active_section) {
                seen.push(snapshot.state.active_section);
            }
        })
    };

    let probe = {
        let layout = layout.clone();
        move || Some(layout.clone())
    };
    let mounted = ScrollTracker::new(sections, ProgressAnchor::Container).mount(
        Rc::clone(&host),
        probe,
        store.clone(),
    );

    let mut y = 0.0;
    while y <= layout.bottom() {
        host.scroll_to(y);
        y += 150.0;
    }

    let expected: Vec<Option<usize>> = (0..count).map(Some).collect();
    assert_eq!(*seen.borrow(), expected);
    assert_eq!(mounted.state().active_section, Some(count - 1));
    assert_close(mounted.state().progress, 1.0);

    drop(mounted);
    assert_eq!(host.listener_count(), 0);
}

#[test]
fn reveal_board_follows_store_notifications() {
    let layout = ContainerLayout::stacked(0.0, &[800.0, 800.0, 800.0, 800.0]);
    let store = ScrollStore::new(ScrollState::initial(4));
    let board = Rc::new(RefCell::new(RevealBoard::new(4, 0.3, false)));
    let started = Instant::now();

    let _subscription = {
        let board = Rc::clone(&board);
        let elements = layout.sections.clone();
        store.subscribe(move |snapshot| {
            board
                .borrow_mut()
                .evaluate(snapshot.metrics, &elements, started);
        })
    };

    let sections = scrolly_core::SectionList::new(
        ["a", "b", "c", "d"]
            .iter()
            .map(|id| scrolly_core::Section::new(*id, id.to_uppercase()))
            .collect(),
    )
    .expect("unique ids");
    let mut tracker = ScrollTracker::new(sections, ProgressAnchor::Container);

    for scroll_y in [0.0, 1700.0] {
        let metrics = ScrollMetrics::new(scroll_y, 800.0);
        let state = tracker.update(metrics, Some(&layout));
        store.publish(state, metrics);
    }

    let board = board.borrow();
    // 1700..2500 covers most of section 2 and a sliver of section 3.
    assert!(!board.get(0).is_some_and(|r| r.is_visible()));
    assert!(!board.get(1).is_some_and(|r| r.is_visible()));
    assert!(board.get(2).is_some_and(|r| r.is_visible()));
    assert!(!board.get(3).is_some_and(|r| r.is_visible()));
}

#[test]
fn scroll_range_anchor_completes_when_bottom_meets_viewport() {
    let layout = ContainerLayout::stacked(0.0, &[1000.0, 1000.0]);
    let sections = scrolly_core::SectionList::new(vec![
        scrolly_core::Section::new("one", "One"),
        scrolly_core::Section::new("two", "Two"),
    ])
    .expect("unique ids");
    let mut tracker = ScrollTracker::new(sections, ProgressAnchor::ScrollRange);
    let state = tracker.update(ScrollMetrics::new(1200.0, 800.0), Some(&layout));
    assert_close(state.progress, 1.0);
    assert_eq!(state.active_section, Some(1));
}
