//! The registration success toast.
//!
//! Triggered when the contact route is entered through a location that
//! carried `success=true` (the relay service redirects there after a
//! submission). Auto-dismisses after five seconds, or earlier when the
//! user closes it. The progress readout is derived from the same
//! deadline the auto-dismiss uses; there is no second timer.

use std::time::{Duration, Instant};

/// How long the toast stays up without user interaction.
pub const DISMISS_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Hidden,
    Visible { deadline: Instant },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastController {
    phase: Phase,
}

impl ToastController {
    pub fn hidden() -> Self {
        ToastController { phase: Phase::Hidden }
    }

    /// Show the toast and start the auto-dismiss deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.phase = Phase::Visible { deadline: now + DISMISS_AFTER };
    }

    /// Advance the clock; hides the toast once the deadline passes.
    pub fn tick(&mut self, now: Instant) {
        if let Phase::Visible { deadline } = self.phase {
            if now >= deadline {
                self.phase = Phase::Hidden;
            }
        }
    }

    /// Explicit user dismissal.
    pub fn dismiss(&mut self) {
        self.phase = Phase::Hidden;
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible { .. })
    }

    /// Fraction of the display window still remaining, decaying
    /// linearly from 1.0 to 0.0. Purely cosmetic; feeds the progress
    /// bar under the toast text.
    pub fn fraction_remaining(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Hidden => 0.0,
            Phase::Visible { deadline } => {
                let remaining = deadline.saturating_duration_since(now);
                (remaining.as_secs_f32() / DISMISS_AFTER.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_hidden() {
        let toast = ToastController::hidden();
        assert!(!toast.is_visible());
        assert_eq!(toast.fraction_remaining(Instant::now()), 0.0);
    }

    #[test]
    fn test_trigger_then_auto_dismiss() {
        let now = Instant::now();
        let mut toast = ToastController::hidden();
        toast.trigger(now);
        assert!(toast.is_visible());

        toast.tick(now + Duration::from_secs(4));
        assert!(toast.is_visible());

        toast.tick(now + DISMISS_AFTER);
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_manual_dismiss() {
        let now = Instant::now();
        let mut toast = ToastController::hidden();
        toast.trigger(now);
        toast.dismiss();
        assert!(!toast.is_visible());
    }

    #[test]
    fn test_fraction_decays_linearly() {
        let now = Instant::now();
        let mut toast = ToastController::hidden();
        toast.trigger(now);

        assert!((toast.fraction_remaining(now) - 1.0).abs() < 1e-6);

        let halfway = toast.fraction_remaining(now + DISMISS_AFTER / 2);
        assert!((halfway - 0.5).abs() < 1e-3);

        assert_eq!(toast.fraction_remaining(now + DISMISS_AFTER * 2), 0.0);
    }
}
