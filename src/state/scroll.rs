//! Scroll geometry shared by the visibility and progress trackers.
//!
//! The browser hands this information out through observer callbacks
//! and bounding rectangles; here it arrives as snapshots of the page
//! scrollable, captured on every scroll event. Sections declare their
//! extent inside the scrolled content through fixed layout constants,
//! so all tracker math stays pure and testable.

use iced::widget::scrollable::Viewport;

/// Window height assumed before the first scroll event arrives.
///
/// Matches the initial window size requested at startup. Sections are
/// evaluated against this once at mount, so above-the-fold content
/// animates in immediately even if the user never scrolls.
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 720.0;

/// One observation of the page scrollable: where the viewport sits and
/// how tall it is, in content coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub offset_y: f32,
    pub viewport_height: f32,
}

impl ScrollSnapshot {
    /// The snapshot used for the mount-time evaluation, before any
    /// scroll event has fired: top of the page, default window height.
    pub fn at_mount() -> Self {
        ScrollSnapshot {
            offset_y: 0.0,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }

    pub fn from_viewport(viewport: &Viewport) -> Self {
        ScrollSnapshot {
            offset_y: viewport.absolute_offset().y,
            viewport_height: viewport.bounds().height,
        }
    }
}

/// A tracked section's vertical extent inside the scrolled content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    pub top: f32,
    pub height: f32,
}

impl SectionRect {
    pub fn new(top: f32, height: f32) -> Self {
        SectionRect { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True when any part of the section is vertically inside the
    /// viewport.
    pub fn intersects(&self, snap: &ScrollSnapshot) -> bool {
        let view_top = snap.offset_y;
        let view_bottom = snap.offset_y + snap.viewport_height;
        self.bottom() > view_top && self.top < view_bottom
    }

    /// Fraction of the section's height currently inside the viewport,
    /// in [0, 1].
    pub fn visible_fraction(&self, snap: &ScrollSnapshot) -> f32 {
        if self.height <= 0.0 {
            return 0.0;
        }
        let view_top = snap.offset_y;
        let view_bottom = snap.offset_y + snap.viewport_height;
        let overlap = self.bottom().min(view_bottom) - self.top.max(view_top);
        (overlap / self.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snap(offset_y: f32, viewport_height: f32) -> ScrollSnapshot {
        ScrollSnapshot { offset_y, viewport_height }
    }

    #[test]
    fn test_no_intersection_when_below_viewport() {
        let section = SectionRect::new(2000.0, 400.0);
        assert!(!section.intersects(&snap(0.0, 720.0)));
        assert_eq!(section.visible_fraction(&snap(0.0, 720.0)), 0.0);
    }

    #[test]
    fn test_full_visibility() {
        let section = SectionRect::new(100.0, 400.0);
        assert!(section.intersects(&snap(0.0, 720.0)));
        assert_eq!(section.visible_fraction(&snap(0.0, 720.0)), 1.0);
    }

    #[test]
    fn test_partial_visibility_from_below() {
        // Section starts 620 px into an 720 px viewport: 100 of its
        // 400 px are visible.
        let section = SectionRect::new(620.0, 400.0);
        let fraction = section.visible_fraction(&snap(0.0, 720.0));
        assert!((fraction - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_section_taller_than_viewport() {
        let section = SectionRect::new(0.0, 2000.0);
        let fraction = section.visible_fraction(&snap(500.0, 720.0));
        assert!((fraction - 720.0 / 2000.0).abs() < 1e-6);
    }

    #[test]
    fn test_mount_snapshot_covers_top_of_page() {
        let hero = SectionRect::new(0.0, 720.0);
        assert_eq!(hero.visible_fraction(&ScrollSnapshot::at_mount()), 1.0);
    }
}
