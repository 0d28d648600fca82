// Press-and-hold state for the alternate ("after" / 2D) view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverlayToggle {
    showing: bool,
}

impl OverlayToggle {
    /// Returns true when the state actually changed.
    pub fn set(&mut self, pressed: bool) -> bool {
        let changed = self.showing != pressed;
        self.showing = pressed;
        changed
    }

    pub fn is_showing(&self) -> bool {
        self.showing
    }
}

#[cfg(test)]
mod tests {
    use super::OverlayToggle;

    #[test]
    fn follows_press_and_release() {
        let mut t = OverlayToggle::default();
        assert!(!t.is_showing());
        assert!(t.set(true));
        assert!(t.is_showing());
        assert!(!t.set(true));
        assert!(t.set(false));
        assert!(!t.is_showing());
    }

    #[test]
    fn release_without_press_is_unchanged() {
        let mut t = OverlayToggle::default();
        assert!(!t.set(false));
        assert!(!t.is_showing());
    }
}
