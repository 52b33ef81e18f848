//! Open/closed state of the slide-out drawer and the modal dialog.

use serde::{Deserialize, Serialize};

/// Which overlay an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayKind {
    Drawer,
    Modal,
}

/// Interactions an overlay reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverlayAction {
    /// An opener control (`data-drawer-open`, `data-modal-open`)
    Open,
    /// A close control (`data-drawer-close`, `data-modal-close`)
    Close,
    /// The `Escape` key
    Escape,
    /// A click that landed on the backdrop itself rather than the content
    BackdropClick,
    /// A click inside the overlay's content
    ContentClick,
    /// A click on an in-page `#anchor` link inside the overlay
    AnchorLinkClick,
}

/// State of one overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Overlay {
    kind: OverlayKind,
    open: bool,
}

impl Overlay {
    pub fn new(kind: OverlayKind) -> Self {
        Self { kind, open: false }
    }

    pub fn kind(&self) -> OverlayKind {
        self.kind
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Apply an action and return the new open state.
    ///
    /// Anchor links only close the drawer; in the modal they are plain
    /// content clicks.
    pub fn apply(&mut self, action: OverlayAction) -> bool {
        self.open = match (action, self.kind) {
            (OverlayAction::Open, _) => true,
            (OverlayAction::Close | OverlayAction::Escape | OverlayAction::BackdropClick, _) => false,
            (OverlayAction::AnchorLinkClick, OverlayKind::Drawer) => false,
            (OverlayAction::AnchorLinkClick, OverlayKind::Modal) => self.open,
            (OverlayAction::ContentClick, _) => self.open,
        };
        self.open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_closed() {
        assert!(!Overlay::new(OverlayKind::Drawer).is_open());
        assert!(!Overlay::new(OverlayKind::Modal).is_open());
    }

    #[test]
    fn test_open_then_close() {
        let mut drawer = Overlay::new(OverlayKind::Drawer);
        assert!(drawer.apply(OverlayAction::Open));
        assert!(!drawer.apply(OverlayAction::Close));
    }

    #[test]
    fn test_escape_closes_both() {
        for kind in [OverlayKind::Drawer, OverlayKind::Modal] {
            let mut overlay = Overlay::new(kind);
            overlay.apply(OverlayAction::Open);
            assert!(!overlay.apply(OverlayAction::Escape));
        }
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut modal = Overlay::new(OverlayKind::Modal);
        modal.apply(OverlayAction::Open);
        assert!(!modal.apply(OverlayAction::BackdropClick));
    }

    #[test]
    fn test_content_click_keeps_modal_open() {
        let mut modal = Overlay::new(OverlayKind::Modal);
        modal.apply(OverlayAction::Open);
        assert!(modal.apply(OverlayAction::ContentClick));
    }

    #[test]
    fn test_anchor_link_closes_drawer_only() {
        let mut drawer = Overlay::new(OverlayKind::Drawer);
        drawer.apply(OverlayAction::Open);
        assert!(!drawer.apply(OverlayAction::AnchorLinkClick));

        let mut modal = Overlay::new(OverlayKind::Modal);
        modal.apply(OverlayAction::Open);
        assert!(modal.apply(OverlayAction::AnchorLinkClick));
    }

    #[test]
    fn test_open_is_idempotent() {
        let mut drawer = Overlay::new(OverlayKind::Drawer);
        drawer.apply(OverlayAction::Open);
        assert!(drawer.apply(OverlayAction::Open));
    }
}
