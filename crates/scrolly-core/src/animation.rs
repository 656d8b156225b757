//! Time-based easing used by the entrance animations and the intro fade.

use std::time::{Duration, Instant};

/// A single tween: wait `delay`, then run for `duration`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub duration: Duration,
    pub delay: Duration,
}

impl Transition {
    pub const fn from_millis(duration_ms: u64, delay_ms: u64) -> Self {
        Transition {
            duration: Duration::from_millis(duration_ms),
            delay: Duration::from_millis(delay_ms),
        }
    }

    /// Child `index` of a staggered group starts `index * step` later.
    pub fn staggered(self, index: usize, step: Duration) -> Self {
        Transition {
            duration: self.duration,
            delay: self.delay + step * index as u32,
        }
    }

    pub fn without_delay(self) -> Self {
        Transition {
            duration: self.duration,
            delay: Duration::ZERO,
        }
    }

    pub fn total(&self) -> Duration {
        self.delay + self.duration
    }

    /// Linear 0..=1 position after `elapsed`.
    pub fn linear_progress(&self, elapsed: Duration) -> f32 {
        let Some(running) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        (running.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased 0..=1 position after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        ease_out_cubic(self.linear_progress(elapsed))
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.total()
    }
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

/// Page-level fade-in: nothing is shown until `delay` has passed, then the
/// content fades in over `fade`.
#[derive(Debug, Clone, Copy)]
pub struct LoadGate {
    armed_at: Instant,
    delay: Duration,
    fade: Transition,
}

impl LoadGate {
    pub fn new(armed_at: Instant, delay: Duration, fade: Duration) -> Self {
        LoadGate {
            armed_at,
            delay,
            fade: Transition {
                duration: fade,
                delay,
            },
        }
    }

    pub fn is_loaded(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.armed_at) >= self.delay
    }

    /// Time since the gate opened, or `None` while still waiting.
    pub fn since_loaded(&self, now: Instant) -> Option<Duration> {
        now.saturating_duration_since(self.armed_at)
            .checked_sub(self.delay)
    }

    pub fn opacity(&self, now: Instant) -> f32 {
        self.fade
            .progress(now.saturating_duration_since(self.armed_at))
    }

    pub fn is_settled(&self, now: Instant) -> bool {
        self.fade
            .is_finished(now.saturating_duration_since(self.armed_at))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_waits_for_delay() {
        let t = Transition::from_millis(800, 300);
        assert_eq!(t.progress(Duration::from_millis(299)), 0.0);
        assert!(t.progress(Duration::from_millis(700)) > 0.0);
        assert_eq!(t.progress(Duration::from_millis(1100)), 1.0);
    }

    #[test]
    fn ease_out_is_ahead_of_linear() {
        let t = Transition::from_millis(1000, 0);
        let elapsed = Duration::from_millis(400);
        assert!(t.progress(elapsed) > t.linear_progress(elapsed));
    }

    #[test]
    fn zero_duration_completes_after_delay() {
        let t = Transition::from_millis(0, 100);
        assert_eq!(t.progress(Duration::from_millis(50)), 0.0);
        assert_eq!(t.progress(Duration::from_millis(100)), 1.0);
    }

    #[test]
    fn stagger_offsets_delay() {
        let base = Transition::from_millis(500, 300);
        let third = base.staggered(2, Duration::from_millis(200));
        assert_eq!(third.delay, Duration::from_millis(700));
        assert_eq!(third.duration, base.duration);
    }

    #[test]
    fn load_gate_fades_in_after_delay() {
        let start = Instant::now();
        let gate = LoadGate::new(start, Duration::from_millis(500), Duration::from_millis(800));
        assert!(!gate.is_loaded(start + Duration::from_millis(499)));
        assert_eq!(gate.opacity(start + Duration::from_millis(400)), 0.0);
        assert!(gate.is_loaded(start + Duration::from_millis(500)));
        assert_eq!(
            gate.since_loaded(start + Duration::from_millis(600)),
            Some(Duration::from_millis(100))
        );
        assert!(!gate.is_settled(start + Duration::from_millis(900)));
        assert!(gate.is_settled(start + Duration::from_millis(1300)));
        assert_eq!(gate.opacity(start + Duration::from_millis(1300)), 1.0);
    }

    #[test]
    fn lerp_interpolates() {
        assert_eq!(lerp(20.0, 0.0, 0.5), 10.0);
    }
}
