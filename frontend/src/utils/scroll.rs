use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// Page sections the hero links into. They are rendered by sibling
/// sections, so any of them may be missing from the current page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Services,
    Contact,
    Portfolio,
}

impl Anchor {
    pub fn selector(self) -> &'static str {
        match self {
            Anchor::Services => "#services",
            Anchor::Contact => "#contact",
            Anchor::Portfolio => "#portfolio",
        }
    }

    pub fn href(self) -> &'static str {
        self.selector()
    }
}

/// Smooth-scrolls to `anchor`. Returns false without side effects when
/// the section is not in the document.
pub fn scroll_to(anchor: Anchor) -> bool {
    let element = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(anchor.selector()).ok().flatten());

    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

/// Stops the page behind the lightbox from scrolling while it is open.
pub fn lock_body(locked: bool) {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let style = body.style();
        if locked {
            let _ = style.set_property("overflow", "hidden");
        } else {
            let _ = style.remove_property("overflow");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors_point_at_section_ids() {
        assert_eq!(Anchor::Services.selector(), "#services");
        assert_eq!(Anchor::Contact.href(), "#contact");
        assert_eq!(Anchor::Portfolio.selector(), "#portfolio");
    }
}
