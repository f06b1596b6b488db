use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::gallery::catalog::{ImageRef, Project};
use crate::utils::cyclic::{checked_index, next_index, prev_index};

/// Which project the lightbox shows, and which of its images.
///
/// `index` is always a valid position in `project.images` while open:
/// opening resets it to 0, arrows move through `cyclic`, and thumbnail
/// selection only accepts in-range positions.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum GalleryState {
    #[default]
    Closed,
    Open { project: Rc<Project>, index: usize },
}

#[derive(Clone, Debug, PartialEq)]
pub enum GalleryAction {
    Open(Rc<Project>),
    Close,
    Next,
    Prev,
    Select(usize),
}

impl GalleryState {
    pub fn open(&self, project: Rc<Project>) -> Self {
        if project.images.is_empty() {
            warn!("Ignoring open for '{}': project has no images", project.title);
            return self.clone();
        }
        debug!("Opening gallery for '{}'", project.title);
        GalleryState::Open { project, index: 0 }
    }

    pub fn close(&self) -> Self {
        if self.is_open() {
            debug!("Closing gallery");
        }
        GalleryState::Closed
    }

    pub fn next(&self) -> Self {
        self.step(next_index)
    }

    pub fn prev(&self) -> Self {
        self.step(prev_index)
    }

    pub fn select(&self, k: usize) -> Self {
        match self {
            GalleryState::Closed => GalleryState::Closed,
            GalleryState::Open { project, index } => {
                match checked_index(k, project.images.len()) {
                    Some(k) => GalleryState::Open {
                        project: project.clone(),
                        index: k,
                    },
                    None => {
                        warn!(
                            "Thumbnail {} out of range for '{}' ({} images)",
                            k,
                            project.title,
                            project.images.len()
                        );
                        GalleryState::Open {
                            project: project.clone(),
                            index: *index,
                        }
                    }
                }
            }
        }
    }

    fn step(&self, f: fn(usize, usize) -> usize) -> Self {
        match self {
            GalleryState::Closed => GalleryState::Closed,
            GalleryState::Open { project, index } => {
                let index = f(*index, project.images.len());
                debug!("Gallery '{}' now at image {}", project.title, index);
                GalleryState::Open {
                    project: project.clone(),
                    index,
                }
            }
        }
    }

    pub fn apply(&self, action: GalleryAction) -> Self {
        match action {
            GalleryAction::Open(project) => self.open(project),
            GalleryAction::Close => self.close(),
            GalleryAction::Next => self.next(),
            GalleryAction::Prev => self.prev(),
            GalleryAction::Select(k) => self.select(k),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, GalleryState::Open { .. })
    }

    pub fn project(&self) -> Option<&Rc<Project>> {
        match self {
            GalleryState::Open { project, .. } => Some(project),
            GalleryState::Closed => None,
        }
    }

    pub fn current_index(&self) -> Option<usize> {
        match self {
            GalleryState::Open { index, .. } => Some(*index),
            GalleryState::Closed => None,
        }
    }

    pub fn current_image(&self) -> Option<&ImageRef> {
        match self {
            GalleryState::Open { project, index } => project.images.get(*index),
            GalleryState::Closed => None,
        }
    }

    /// "2 / 3" style position label.
    pub fn counter_label(&self) -> Option<String> {
        match self {
            GalleryState::Open { project, index } => {
                Some(format!("{} / {}", index + 1, project.images.len()))
            }
            GalleryState::Closed => None,
        }
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(self.apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::catalog::Catalog;

    fn fixture() -> Catalog {
        Catalog::from_json(
            r#"{"projects": [
                {"title": "A", "category": "c", "description": "d",
                 "images": ["i0.jpg", "i1.jpg", "i2.jpg"]},
                {"title": "B", "category": "c", "description": "d",
                 "images": ["b0.jpg", "b1.jpg"]},
                {"title": "Solo", "category": "c", "description": "d",
                 "images": ["s0.jpg"]}
            ]}"#,
        )
        .unwrap()
    }

    fn project(title: &str) -> Rc<Project> {
        fixture().find(title).unwrap()
    }

    #[test]
    fn starts_closed() {
        let state = GalleryState::default();
        assert!(!state.is_open());
        assert_eq!(state.current_index(), None);
        assert_eq!(state.counter_label(), None);
    }

    #[test]
    fn walkthrough_with_wraparound() {
        let a = project("A");
        let state = GalleryState::Closed.apply(GalleryAction::Open(a.clone()));
        assert_eq!(state.current_index(), Some(0));

        let state = state.apply(GalleryAction::Next);
        assert_eq!(state.current_index(), Some(1));
        let state = state.apply(GalleryAction::Next);
        assert_eq!(state.current_index(), Some(2));
        let state = state.apply(GalleryAction::Next);
        assert_eq!(state.current_index(), Some(0));
        let state = state.apply(GalleryAction::Prev);
        assert_eq!(state.current_index(), Some(2));
        assert_eq!(state.current_image().map(ImageRef::name), Some("i2.jpg"));

        let state = state.apply(GalleryAction::Close);
        assert_eq!(state, GalleryState::Closed);
    }

    #[test]
    fn next_cycles_every_builtin_project() {
        let catalog = Catalog::builtin().unwrap();
        for p in catalog.iter() {
            let mut state = GalleryState::Closed.open(p.clone());
            for _ in 0..p.images.len() {
                state = state.next();
            }
            assert_eq!(state.current_index(), Some(0), "{}", p.title);
        }
    }

    #[test]
    fn prev_from_first_goes_to_last() {
        for title in ["A", "B", "Solo"] {
            let p = project(title);
            let state = GalleryState::Closed.open(p.clone()).prev();
            assert_eq!(state.current_index(), Some(p.images.len() - 1));
        }
    }

    #[test]
    fn open_resets_index() {
        let a = project("A");
        let b = project("B");
        let state = GalleryState::Closed.open(a.clone()).next().next();
        assert_eq!(state.current_index(), Some(2));

        let reopened = state.open(b.clone());
        assert_eq!(reopened.current_index(), Some(0));
        assert_eq!(reopened.project(), Some(&b));

        let same = state.open(a);
        assert_eq!(same.current_index(), Some(0));
    }

    #[test]
    fn close_then_open_leaks_nothing() {
        let a = project("A");
        let direct = GalleryState::Closed.open(a.clone());
        let via_close = GalleryState::Closed
            .open(a.clone())
            .next()
            .close()
            .open(a);
        assert_eq!(direct, via_close);
    }

    #[test]
    fn select_sets_exact_index() {
        let a = project("A");
        let state = GalleryState::Closed.open(a.clone());
        for k in 0..a.images.len() {
            assert_eq!(state.select(k).current_index(), Some(k));
        }
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let state = GalleryState::Closed.open(project("A")).next();
        assert_eq!(state.select(3), state);
    }

    #[test]
    fn navigation_while_closed_is_noop() {
        let state = GalleryState::Closed;
        assert_eq!(state.next(), GalleryState::Closed);
        assert_eq!(state.prev(), GalleryState::Closed);
        assert_eq!(state.select(0), GalleryState::Closed);
        assert_eq!(state.close(), GalleryState::Closed);
    }

    #[test]
    fn open_without_images_keeps_state() {
        let empty = Rc::new(Project {
            title: "Empty".to_string(),
            category: "c".to_string(),
            description: "d".to_string(),
            images: Vec::new(),
        });
        assert_eq!(GalleryState::Closed.open(empty.clone()), GalleryState::Closed);

        let open = GalleryState::Closed.open(project("A")).next();
        assert_eq!(open.open(empty), open);
    }

    #[test]
    fn counter_label_is_one_based() {
        let state = GalleryState::Closed.open(project("B"));
        assert_eq!(state.counter_label().as_deref(), Some("1 / 2"));
        assert_eq!(state.next().counter_label().as_deref(), Some("2 / 2"));
    }

    #[test]
    fn reducer_dispatches_actions() {
        let state = Rc::new(GalleryState::Closed);
        let state = state.reduce(GalleryAction::Open(project("A")));
        let state = state.reduce(GalleryAction::Select(2));
        assert_eq!(state.current_index(), Some(2));
        let state = state.reduce(GalleryAction::Close);
        assert!(!state.is_open());
    }
}
