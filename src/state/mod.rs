/// UI state bookkeeping
///
/// This module holds the small state machines and trackers behind the
/// interface:
/// - Session-scoped key/value storage (session.rs)
/// - The one-shot join popup (popup.rs)
/// - The registration success toast (toast.rs)
/// - Scroll geometry shared by the trackers (scroll.rs)
/// - Entrance-animation visibility latches (visibility.rs)
/// - Scroll progress for alternating panels (progress.rs)

pub mod popup;
pub mod progress;
pub mod scroll;
pub mod session;
pub mod toast;
pub mod visibility;
