/// Page-wide keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// `Ctrl+K` / `Cmd+K`: focus the search input.
    FocusSearch,
    /// `Escape`: close the menu and blur the search input.
    Dismiss,
}

impl Shortcut {
    /// Map a `keydown` event to a shortcut.
    pub fn from_key(key: &str, ctrl: bool, meta: bool) -> Option<Self> {
        if (ctrl || meta) && key.eq_ignore_ascii_case("k") {
            Some(Shortcut::FocusSearch)
        } else if key == "Escape" {
            Some(Shortcut::Dismiss)
        } else {
            None
        }
    }

    /// Whether the browser's default action for the key must be suppressed.
    pub fn prevents_default(self) -> bool {
        matches!(self, Shortcut::FocusSearch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_search() {
        assert_eq!(Shortcut::from_key("k", true, false), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("k", false, true), Some(Shortcut::FocusSearch));
        assert_eq!(Shortcut::from_key("K", true, false), Some(Shortcut::FocusSearch));
        assert!(Shortcut::FocusSearch.prevents_default());
    }

    #[test]
    fn test_plain_k_is_ignored() {
        assert_eq!(Shortcut::from_key("k", false, false), None);
    }

    #[test]
    fn test_escape_with_or_without_modifiers() {
        assert_eq!(Shortcut::from_key("Escape", false, false), Some(Shortcut::Dismiss));
        assert_eq!(Shortcut::from_key("Escape", true, false), Some(Shortcut::Dismiss));
        assert!(!Shortcut::Dismiss.prevents_default());
    }

    #[test]
    fn test_other_keys() {
        assert_eq!(Shortcut::from_key("Enter", true, true), None);
        assert_eq!(Shortcut::from_key("j", true, false), None);
    }
}
