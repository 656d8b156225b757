//! Per-element entrance state machines.
//!
//! Each animated element is either `Hidden` or `Visible`. The transition is
//! driven by [`is_intersecting`], evaluated whenever the scroll position or
//! the viewport size changes.

use crate::animation::{Transition, lerp};
use crate::section::SectionBounds;
use crate::tracker::ScrollMetrics;
use std::time::Instant;
use tracing::trace;

/// Fraction of an element that must be on screen before it counts as seen.
pub const DEFAULT_REVEAL_AMOUNT: f32 = 0.3;

/// True when at least `amount` of the element overlaps the viewport.
///
/// The ratio is measured against `min(element.height, viewport_height)` so an
/// element taller than the viewport can still reach it.
pub fn is_intersecting(
    viewport_top: f32,
    viewport_height: f32,
    element: SectionBounds,
    amount: f32,
) -> bool {
    let amount = if amount.is_finite() {
        amount.clamp(0.0, 1.0)
    } else {
        DEFAULT_REVEAL_AMOUNT
    };
    let viewport_bottom = viewport_top + viewport_height;

    if element.height <= 0.0 {
        return element.top >= viewport_top && element.top < viewport_bottom;
    }

    let overlap = element.bottom().min(viewport_bottom) - element.top.max(viewport_top);
    if overlap <= 0.0 {
        return false;
    }
    let basis = element.height.min(viewport_height);
    if basis <= 0.0 {
        return false;
    }
    overlap / basis >= amount
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    Hidden,
    Visible,
}

/// Phase changes kept to rebuild the value a reversed transition starts from.
const PHASE_HISTORY: usize = 4;

#[derive(Debug, Clone, Copy)]
struct PhaseChange {
    phase: RevealPhase,
    at: Instant,
}

#[derive(Debug, Clone)]
pub struct Reveal {
    phase: RevealPhase,
    changes: Vec<PhaseChange>,
    once: bool,
}

impl Reveal {
    pub fn new(once: bool) -> Self {
        Reveal {
            phase: RevealPhase::Hidden,
            changes: Vec::new(),
            once,
        }
    }

    pub fn phase(&self) -> RevealPhase {
        self.phase
    }

    pub fn is_visible(&self) -> bool {
        self.phase == RevealPhase::Visible
    }

    pub fn changed_at(&self) -> Option<Instant> {
        self.changes.last().map(|change| change.at)
    }

    /// Feed the latest predicate value. Returns `true` when the phase changed.
    pub fn evaluate(&mut self, intersecting: bool, now: Instant) -> bool {
        let next = match (self.phase, intersecting) {
            (RevealPhase::Hidden, true) => RevealPhase::Visible,
            (RevealPhase::Visible, false) if !self.once => RevealPhase::Hidden,
            (phase, _) => phase,
        };
        if next == self.phase {
            return false;
        }
        self.phase = next;
        self.changes.push(PhaseChange {
            phase: next,
            at: now,
        });
        if self.changes.len() > PHASE_HISTORY {
            self.changes.remove(0);
        }
        true
    }

    /// How far the element is into its entrance, 0 (hidden) to 1 (shown).
    ///
    /// Each phase change tweens from wherever the previous one had got to, so
    /// reversing mid-way never jumps. Hiding runs without the entrance delay.
    pub fn progress(&self, now: Instant, transition: Transition) -> f32 {
        let Some(first) = self.changes.first() else {
            return 0.0;
        };
        let mut value = match first.phase {
            RevealPhase::Visible => 0.0,
            RevealPhase::Hidden => 1.0,
        };
        for (idx, change) in self.changes.iter().enumerate() {
            let until = self.changes.get(idx + 1).map_or(now, |next| next.at);
            let elapsed = until.saturating_duration_since(change.at);
            let (target, t) = match change.phase {
                RevealPhase::Visible => (1.0, transition.progress(elapsed)),
                RevealPhase::Hidden => (0.0, transition.without_delay().progress(elapsed)),
            };
            value = if t >= 1.0 {
                target
            } else {
                lerp(value, target, t)
            };
        }
        value
    }

    pub fn is_animating(&self, now: Instant, transition: Transition) -> bool {
        let Some(last) = self.changes.last() else {
            return false;
        };
        let transition = match last.phase {
            RevealPhase::Visible => transition,
            RevealPhase::Hidden => transition.without_delay(),
        };
        !transition.is_finished(now.saturating_duration_since(last.at))
    }
}

/// One [`Reveal`] per tracked element.
#[derive(Debug, Clone)]
pub struct RevealBoard {
    reveals: Vec<Reveal>,
    amount: f32,
}

impl RevealBoard {
    pub fn new(count: usize, amount: f32, once: bool) -> Self {
        RevealBoard {
            reveals: vec![Reveal::new(once); count],
            amount,
        }
    }

    pub fn len(&self) -> usize {
        self.reveals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reveals.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Reveal> {
        self.reveals.get(index)
    }

    pub fn visible_count(&self) -> usize {
        self.reveals.iter().filter(|r| r.is_visible()).count()
    }

    /// Re-run the predicate for every element. Extra or missing geometry is
    /// ignored; returns the number of elements that changed phase.
    pub fn evaluate(
        &mut self,
        metrics: ScrollMetrics,
        elements: &[SectionBounds],
        now: Instant,
    ) -> usize {
        let mut changed = 0;
        for (index, (reveal, bounds)) in self.reveals.iter_mut().zip(elements).enumerate() {
            let intersecting =
                is_intersecting(metrics.scroll_y, metrics.viewport_height, *bounds, self.amount);
            if reveal.evaluate(intersecting, now) {
                trace!(index, phase = ?reveal.phase(), "Reveal transitioned");
                changed += 1;
            }
        }
        changed
    }

    /// True while any element is still mid-transition for the longest
    /// transition the view uses.
    pub fn is_animating(&self, now: Instant, longest: Transition) -> bool {
        self.reveals.iter().any(|r| r.is_animating(now, longest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn intersection_requires_amount_of_element() {
        let element = SectionBounds::new(1000.0, 400.0);
        // 100px of 400 visible: 25%.
        assert!(!is_intersecting(300.0, 800.0, element, 0.3));
        // 160px of 400 visible: 40%.
        assert!(is_intersecting(360.0, 800.0, element, 0.3));
    }

    #[test]
    fn tall_element_measured_against_viewport() {
        let element = SectionBounds::new(0.0, 4000.0);
        assert!(is_intersecting(1000.0, 800.0, element, 0.3));
    }

    #[test]
    fn no_overlap_never_intersects_even_with_zero_amount() {
        let element = SectionBounds::new(2000.0, 100.0);
        assert!(!is_intersecting(0.0, 800.0, element, 0.0));
    }

    #[test]
    fn zero_height_element_uses_top_edge() {
        assert!(is_intersecting(0.0, 800.0, SectionBounds::new(400.0, 0.0), 0.3));
        assert!(!is_intersecting(0.0, 800.0, SectionBounds::new(800.0, 0.0), 0.3));
    }

    #[test]
    fn repeat_reveals_rehide() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new(false);
        assert!(reveal.evaluate(true, t0));
        assert!(reveal.evaluate(false, t0 + Duration::from_millis(10)));
        assert_eq!(reveal.phase(), RevealPhase::Hidden);
    }

    #[test]
    fn once_reveals_stay_visible() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new(true);
        reveal.evaluate(true, t0);
        assert!(!reveal.evaluate(false, t0 + Duration::from_millis(10)));
        assert!(reveal.is_visible());
    }

    #[test]
    fn unchanged_outcome_keeps_transition_start() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new(false);
        reveal.evaluate(true, t0);
        reveal.evaluate(true, t0 + Duration::from_millis(300));
        assert_eq!(reveal.changed_at(), Some(t0));
    }

    #[test]
    fn progress_runs_forward_then_back() {
        let t0 = Instant::now();
        let transition = Transition::from_millis(800, 0);
        let mut reveal = Reveal::new(false);
        assert_eq!(reveal.progress(t0, transition), 0.0);

        reveal.evaluate(true, t0);
        assert_eq!(reveal.progress(t0 + Duration::from_secs(1), transition), 1.0);
        assert!(!reveal.is_animating(t0 + Duration::from_secs(1), transition));

        let hidden_at = t0 + Duration::from_secs(2);
        reveal.evaluate(false, hidden_at);
        assert!(reveal.is_animating(hidden_at, transition));
        assert_eq!(
            reveal.progress(hidden_at + Duration::from_secs(1), transition),
            0.0
        );
    }

    #[test]
    fn hiding_mid_entrance_fades_out_from_current_value() {
        let t0 = Instant::now();
        let transition = Transition::from_millis(800, 0);
        let mut reveal = Reveal::new(false);
        reveal.evaluate(true, t0);

        let hidden_at = t0 + Duration::from_millis(100);
        let before = reveal.progress(hidden_at, transition);
        assert!(before > 0.0 && before < 0.5);

        reveal.evaluate(false, hidden_at);
        let after = reveal.progress(hidden_at, transition);
        assert!((after - before).abs() < 1e-6, "jumped from {before} to {after}");
        assert!(reveal.progress(hidden_at + Duration::from_millis(100), transition) < before);
        assert_eq!(
            reveal.progress(hidden_at + Duration::from_secs(1), transition),
            0.0
        );
    }

    #[test]
    fn reshowing_half_hidden_element_resumes_from_current_value() {
        let t0 = Instant::now();
        let transition = Transition::from_millis(800, 0);
        let mut reveal = Reveal::new(false);
        reveal.evaluate(true, t0);
        reveal.evaluate(false, t0 + Duration::from_secs(2));

        let shown_again = t0 + Duration::from_millis(2200);
        let before = reveal.progress(shown_again, transition);
        assert!(before > 0.0 && before < 1.0);

        reveal.evaluate(true, shown_again);
        let after = reveal.progress(shown_again, transition);
        assert!((after - before).abs() < 1e-6, "jumped from {before} to {after}");
        assert_eq!(
            reveal.progress(shown_again + Duration::from_secs(1), transition),
            1.0
        );
    }

    #[test]
    fn history_is_bounded_under_flicker() {
        let t0 = Instant::now();
        let mut reveal = Reveal::new(false);
        for step in 0..20u64 {
            reveal.evaluate(step % 2 == 0, t0 + Duration::from_millis(step * 10));
        }
        assert!(reveal.changes.len() <= PHASE_HISTORY);
        let value = reveal.progress(
            t0 + Duration::from_millis(200),
            Transition::from_millis(800, 0),
        );
        assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn board_evaluates_each_element() {
        let t0 = Instant::now();
        let mut board = RevealBoard::new(3, DEFAULT_REVEAL_AMOUNT, false);
        let elements = [
            SectionBounds::new(0.0, 800.0),
            SectionBounds::new(800.0, 800.0),
            SectionBounds::new(1600.0, 800.0),
        ];
        let changed = board.evaluate(ScrollMetrics::new(500.0, 800.0), &elements, t0);
        assert_eq!(changed, 2);
        assert!(board.get(0).is_some_and(Reveal::is_visible));
        assert!(board.get(1).is_some_and(Reveal::is_visible));
        assert!(!board.get(2).is_some_and(Reveal::is_visible));
        assert_eq!(board.visible_count(), 2);
    }
}
