//! One-shot visibility latches for entrance animations.
//!
//! Each animated section owns a latch. The first time at least 10% of
//! the section enters the viewport the latch flips to visible and stays
//! there for the section's lifetime; scrolling back out never reverts
//! it. Latches are dropped together with the screen state that owns
//! them, which is the unobserve-on-unmount of this rendition.

use super::scroll::{ScrollSnapshot, SectionRect};

/// Portion of the section that must be visible before the latch flips.
pub const VISIBILITY_THRESHOLD: f32 = 0.10;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scroll observation. Latches on the first crossing of
    /// the threshold; later observations cannot un-latch.
    pub fn observe(&mut self, section: SectionRect, snap: &ScrollSnapshot) {
        if !self.visible && section.visible_fraction(snap) >= VISIBILITY_THRESHOLD {
            self.visible = true;
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
