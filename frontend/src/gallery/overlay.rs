use web_sys::MouseEvent;

use crate::gallery::state::GalleryAction;

/// Where a click inside the open lightbox landed.
///
/// The overlay root owns the close handler. The content panel consumes its
/// own clicks so they never reach that handler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

impl ClickTarget {
    pub fn dismisses(self) -> bool {
        matches!(self, ClickTarget::Backdrop)
    }

    pub fn action(self) -> Option<GalleryAction> {
        self.dismisses().then_some(GalleryAction::Close)
    }

    /// Content clicks are consumed here; backdrop clicks yield `Close`.
    pub fn handle(self, e: &MouseEvent) -> Option<GalleryAction> {
        if !self.dismisses() {
            consume(e);
        }
        self.action()
    }
}

pub fn consume(e: &MouseEvent) {
    e.stop_propagation();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_backdrop_dismisses() {
        assert!(ClickTarget::Backdrop.dismisses());
        assert!(!ClickTarget::Content.dismisses());
    }

    #[test]
    fn backdrop_click_closes() {
        assert_eq!(ClickTarget::Backdrop.action(), Some(GalleryAction::Close));
        assert_eq!(ClickTarget::Content.action(), None);
    }
}
