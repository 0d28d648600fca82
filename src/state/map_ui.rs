use std::rc::Rc;
use yew::Reducible;

use super::OverlayToggle;

// Mirrors what the map markup needs; the camera is driven by the controller.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MapUiState {
    pub viewer_ready: bool,
    pub viewer_error: Option<String>,
    pub selected: Option<usize>,
    pub overlay: OverlayToggle,
    // a 2D tiles session exists
    pub imagery_available: bool,
}

pub enum MapAction {
    ViewerReady,
    ViewerFailed(String),
    Select(usize),
    ClearSelection,
    Overlay(bool),
    ImageryAvailable,
}

impl Reducible for MapUiState {
    type Action = MapAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use MapAction::*;
        let mut new = (*self).clone();
        match action {
            ViewerReady => {
                new.viewer_ready = true;
                new.viewer_error = None;
            }
            ViewerFailed(msg) => {
                new.viewer_ready = false;
                new.viewer_error = Some(msg);
            }
            Select(idx) => new.selected = Some(idx),
            ClearSelection => new.selected = None,
            Overlay(pressed) => {
                if !new.overlay.set(pressed) {
                    return self;
                }
            }
            ImageryAvailable => new.imagery_available = true,
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::{MapAction, MapUiState};
    use std::rc::Rc;
    use yew::Reducible;

    #[test]
    fn overlay_is_independent_of_selection() {
        let s = Rc::new(MapUiState::default())
            .reduce(MapAction::Select(2))
            .reduce(MapAction::Overlay(true));
        assert_eq!(s.selected, Some(2));
        assert!(s.overlay.is_showing());

        let s = s.reduce(MapAction::Overlay(false));
        assert_eq!(s.selected, Some(2));
        assert!(!s.overlay.is_showing());
    }

    #[test]
    fn repeated_release_keeps_same_state() {
        let s = Rc::new(MapUiState::default());
        let same = s.clone().reduce(MapAction::Overlay(false));
        assert!(Rc::ptr_eq(&s, &same));
    }

    #[test]
    fn failure_then_ready_clears_error() {
        let s = Rc::new(MapUiState::default())
            .reduce(MapAction::ViewerFailed("no webgl".into()))
            .reduce(MapAction::ViewerReady);
        assert!(s.viewer_ready);
        assert_eq!(s.viewer_error, None);
    }
}
