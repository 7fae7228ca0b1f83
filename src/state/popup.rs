//! The "Join WEDA" popup.
//!
//! A fresh session arms a five-second timer at startup; when it fires
//! the popup is shown and a suppression flag is written to the session
//! store, so reloads and route changes within the same session never
//! show it again. The timer is driven by external ticks: the runtime
//! only subscribes to the clock while the controller reports itself
//! armed, which also guarantees the timer dies with its owner.

use std::time::{Duration, Instant};

use super::session::SessionStore;

/// Session-store key holding the suppression marker.
pub const SUPPRESS_KEY: &str = "weda.join-popup";

/// Stored value. Plain string, matching the store's contract.
const SUPPRESS_VALUE: &str = "1";

/// Delay between arming and showing the popup.
pub const ARM_DELAY: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Suppressed for this session; will never arm.
    Idle,
    /// Counting down to the reveal.
    Armed { since: Instant },
    /// On screen.
    Shown,
    /// Closed by the user; stays closed.
    Dismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupController {
    phase: Phase,
}

impl PopupController {
    /// Build the controller at mount time. Arms the timer unless the
    /// session already carries the suppression flag.
    pub fn mount(session: &dyn SessionStore, now: Instant) -> Self {
        let phase = if session.get(SUPPRESS_KEY).is_some() {
            Phase::Idle
        } else {
            Phase::Armed { since: now }
        };
        PopupController { phase }
    }

    /// Advance the timer. Writes the suppression flag the moment the
    /// popup becomes visible, before the user has any chance to act on
    /// it, so a restart mid-display still counts as shown.
    pub fn tick(&mut self, session: &mut dyn SessionStore, now: Instant) {
        if let Phase::Armed { since } = self.phase {
            if now.duration_since(since) >= ARM_DELAY {
                session.set(SUPPRESS_KEY, SUPPRESS_VALUE);
                self.phase = Phase::Shown;
                log::info!("join popup shown, suppressed for the rest of the session");
            }
        }
    }

    /// Close the popup. Overlay click, the close control, "No Thanks"
    /// and the register call-to-action all end up here.
    pub fn dismiss(&mut self) {
        if self.phase == Phase::Shown {
            self.phase = Phase::Dismissed;
        }
    }

    /// True while the countdown is running. Drives the clock
    /// subscription: no armed popup, no timer.
    pub fn is_armed(&self) -> bool {
        matches!(self.phase, Phase::Armed { .. })
    }

    pub fn is_shown(&self) -> bool {
        self.phase == Phase::Shown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::MemorySession;

    #[test]
    fn test_fresh_session_arms() {
        let session = MemorySession::new();
        let popup = PopupController::mount(&session, Instant::now());
        assert!(popup.is_armed());
        assert!(!popup.is_shown());
    }

    #[test]
    fn test_suppressed_session_stays_idle() {
        let mut session = MemorySession::new();
        session.set(SUPPRESS_KEY, "1");
        let mut popup = PopupController::mount(&session, Instant::now());
        assert!(!popup.is_armed());

        popup.tick(&mut session, Instant::now() + ARM_DELAY * 2);
        assert!(!popup.is_shown());
    }

    #[test]
    fn test_timer_fires_after_delay() {
        let mut session = MemorySession::new();
        let start = Instant::now();
        let mut popup = PopupController::mount(&session, start);

        popup.tick(&mut session, start + Duration::from_secs(4));
        assert!(!popup.is_shown(), "must not fire early");

        popup.tick(&mut session, start + ARM_DELAY);
        assert!(popup.is_shown());
        assert_eq!(session.get(SUPPRESS_KEY).as_deref(), Some("1"));
    }

    #[test]
    fn test_shown_at_most_once_per_session() {
        let mut session = MemorySession::new();
        let start = Instant::now();
        let mut popup = PopupController::mount(&session, start);
        popup.tick(&mut session, start + ARM_DELAY);
        popup.dismiss();

        // A remount within the same session sees the flag and never arms.
        let remounted = PopupController::mount(&session, start + ARM_DELAY);
        assert!(!remounted.is_armed());
        assert!(!remounted.is_shown());
    }

    #[test]
    fn test_dismiss_is_final() {
        let mut session = MemorySession::new();
        let start = Instant::now();
        let mut popup = PopupController::mount(&session, start);
        popup.tick(&mut session, start + ARM_DELAY);
        popup.dismiss();
        assert!(!popup.is_shown());

        // Further ticks must not resurrect it.
        popup.tick(&mut session, start + ARM_DELAY * 3);
        assert!(!popup.is_shown());
        assert!(!popup.is_armed());
    }

    #[test]
    fn test_dismiss_before_shown_is_ignored() {
        let session = MemorySession::new();
        let mut popup = PopupController::mount(&session, Instant::now());
        popup.dismiss();
        assert!(popup.is_armed(), "dismiss only applies to a shown popup");
    }
}
