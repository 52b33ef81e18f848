//! Presentation widgets outside the form/locale core.
//!
//! Each widget is a small state machine; `Page` routes events to them and
//! forwards their changes to the surface.

mod accordion;
mod counter;
mod lang_menu;
mod overlay;
mod reveal;

pub use accordion::Accordion;
pub use counter::{group_digits, Counter, COUNTER_DURATION, COUNTER_THRESHOLD};
pub use lang_menu::LanguageMenus;
pub use overlay::{Overlay, OverlayAction, OverlayKind};
pub use reveal::{Bar, Reveal, BAR_THRESHOLD, REVEAL_THRESHOLD};
