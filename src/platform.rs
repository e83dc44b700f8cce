//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Modifier for form shortcuts
/// - macOS: SUPER (Cmd key), Ctrl also accepted
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const SHORTCUT_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Submit shortcut display for the help line
/// Ctrl+S works on all platforms
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Clear form shortcut display
/// - macOS: "Cmd+R"
/// - Linux/Windows: "Ctrl+R"
#[cfg(target_os = "macos")]
pub const RESET_SHORTCUT: &str = "Cmd+R";

#[cfg(not(target_os = "macos"))]
pub const RESET_SHORTCUT: &str = "Ctrl+R";

/// Show/hide password shortcut display
/// - macOS: "Cmd+P"
/// - Linux/Windows: "Ctrl+P"
#[cfg(target_os = "macos")]
pub const REVEAL_SHORTCUT: &str = "Cmd+P";

#[cfg(not(target_os = "macos"))]
pub const REVEAL_SHORTCUT: &str = "Ctrl+P";

/// True when `modifiers` is exactly the platform shortcut modifier or Ctrl.
///
/// AltGr arrives as Ctrl+Alt on Windows, so those keys are text, not shortcuts.
pub fn is_shortcut(modifiers: KeyModifiers) -> bool {
    modifiers == SHORTCUT_MODIFIER || modifiers == KeyModifiers::CONTROL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ctrl_is_always_a_shortcut() {
        assert!(is_shortcut(KeyModifiers::CONTROL));
    }

    #[test]
    fn test_plain_keys_are_not_shortcuts() {
        assert!(!is_shortcut(KeyModifiers::NONE));
        assert!(!is_shortcut(KeyModifiers::SHIFT));
    }

    #[test]
    fn test_altgr_is_not_a_shortcut() {
        assert!(!is_shortcut(KeyModifiers::CONTROL | KeyModifiers::ALT));
        assert!(!is_shortcut(KeyModifiers::CONTROL | KeyModifiers::SHIFT));
    }
}
