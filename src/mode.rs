//! Mode selectors and OS color-scheme resolution.
//!
//! A reader picks a [`ModeSelector`] (light, dark, or "follow the system");
//! the page always renders a concrete [`AppliedMode`]. Resolution of the
//! `System` selector goes through a process-wide detector function that can
//! be overridden for testing or embedding.

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Mutex;

/// The reader's mode intent.
///
/// `Light` and `Dark` are fixed choices; `System` defers to the operating
/// system's color-scheme preference at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSelector {
    /// Always render the light variant.
    Light,
    /// Always render the dark variant.
    Dark,
    /// Follow the operating system's preference.
    System,
}

/// The color mode actually rendered on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppliedMode {
    /// Light rendering.
    Light,
    /// Dark rendering.
    Dark,
}

impl ModeSelector {
    /// All selectors, in the order a settings UI lists them.
    pub const ALL: [ModeSelector; 3] =
        [ModeSelector::Light, ModeSelector::Dark, ModeSelector::System];

    /// Parses a stored selector string. Returns `None` for anything other
    /// than `"light"`, `"dark"` or `"system"`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "light" => Some(ModeSelector::Light),
            "dark" => Some(ModeSelector::Dark),
            "system" => Some(ModeSelector::System),
            _ => None,
        }
    }

    /// The storage representation of this selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeSelector::Light => "light",
            ModeSelector::Dark => "dark",
            ModeSelector::System => "system",
        }
    }

    /// Resolves this selector to the mode that should actually render.
    ///
    /// `System` queries the OS preference; when the preference cannot be
    /// determined, the page falls back to light.
    pub fn resolve(&self) -> AppliedMode {
        match self {
            ModeSelector::Light => AppliedMode::Light,
            ModeSelector::Dark => AppliedMode::Dark,
            ModeSelector::System => detect_os_preference().unwrap_or(AppliedMode::Light),
        }
    }
}

impl Default for ModeSelector {
    fn default() -> Self {
        ModeSelector::System
    }
}

impl fmt::Display for ModeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppliedMode {
    /// The class-name suffix for this mode (`"light"` / `"dark"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            AppliedMode::Light => "light",
            AppliedMode::Dark => "dark",
        }
    }
}

impl fmt::Display for AppliedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type PreferenceDetector = fn() -> Option<AppliedMode>;

static PREFERENCE_DETECTOR: Lazy<Mutex<PreferenceDetector>> =
    Lazy::new(|| Mutex::new(os_preference_detector));

/// Overrides the function used to query the OS color-scheme preference.
///
/// The detector returns `None` when the platform exposes no preference;
/// `System` then resolves to light. Useful for tests or hosts that source
/// the preference elsewhere.
pub fn set_os_preference_detector(detector: PreferenceDetector) {
    let mut guard = PREFERENCE_DETECTOR.lock().unwrap();
    *guard = detector;
}

pub(crate) fn detect_os_preference() -> Option<AppliedMode> {
    let detector = PREFERENCE_DETECTOR.lock().unwrap();
    (*detector)()
}

fn os_preference_detector() -> Option<AppliedMode> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(AppliedMode::Dark),
        OsThemeMode::Light => Some(AppliedMode::Light),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_parse_known_selectors() {
        assert_eq!(ModeSelector::parse("light"), Some(ModeSelector::Light));
        assert_eq!(ModeSelector::parse("dark"), Some(ModeSelector::Dark));
        assert_eq!(ModeSelector::parse("system"), Some(ModeSelector::System));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(ModeSelector::parse(""), None);
        assert_eq!(ModeSelector::parse("Dark"), None);
        assert_eq!(ModeSelector::parse("solarized"), None);
    }

    #[test]
    fn test_as_str_round_trip() {
        for selector in ModeSelector::ALL {
            assert_eq!(ModeSelector::parse(selector.as_str()), Some(selector));
        }
    }

    #[test]
    fn test_fixed_selectors_resolve_without_os_query() {
        assert_eq!(ModeSelector::Light.resolve(), AppliedMode::Light);
        assert_eq!(ModeSelector::Dark.resolve(), AppliedMode::Dark);
    }

    #[test]
    #[serial]
    fn test_system_follows_detector() {
        set_os_preference_detector(|| Some(AppliedMode::Dark));
        assert_eq!(ModeSelector::System.resolve(), AppliedMode::Dark);

        set_os_preference_detector(|| Some(AppliedMode::Light));
        assert_eq!(ModeSelector::System.resolve(), AppliedMode::Light);
    }

    #[test]
    #[serial]
    fn test_system_defaults_to_light_without_preference() {
        set_os_preference_detector(|| None);
        assert_eq!(ModeSelector::System.resolve(), AppliedMode::Light);
        set_os_preference_detector(|| Some(AppliedMode::Light));
    }
}
