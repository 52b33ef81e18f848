//! Scroll-visibility effects: fade-in reveals and progress-bar fills.

/// Fraction of a reveal element that must be visible to show it.
pub const REVEAL_THRESHOLD: f64 = 0.2;

/// Fraction of a bar that must be visible to fill it.
pub const BAR_THRESHOLD: f64 = 0.4;

/// An element that becomes visible once and stays visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reveal {
    visible: bool,
}

impl Reveal {
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns `true` when this intersection made the element visible.
    pub fn on_intersection(&mut self, ratio: f64) -> bool {
        if self.visible || ratio < REVEAL_THRESHOLD {
            return false;
        }
        self.visible = true;
        true
    }
}

/// A progress bar filled to a fixed percentage when visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bar {
    value: u8,
}

impl Bar {
    /// Values above 100 are clamped.
    pub fn new(value: u8) -> Self {
        Self {
            value: value.min(100),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    /// The width to apply, every time the bar is sufficiently visible.
    pub fn on_intersection(&self, ratio: f64) -> Option<u8> {
        (ratio >= BAR_THRESHOLD).then_some(self.value)
    }
}
