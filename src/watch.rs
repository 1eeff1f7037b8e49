//! Reacting to OS color-scheme preference changes.

use crate::engine::{SubthemeRequest, ThemeEngine};
use crate::mode::{detect_os_preference, AppliedMode};
use crate::store::SettingsStore;

/// Edge-triggered watcher for the OS color-scheme preference.
///
/// The OS preference is a queried value, not a callback source, so the
/// watcher is driven by the host's event loop: call
/// [`check`](OsPreferenceWatcher::check) periodically (or whenever the host
/// toolkit signals an appearance change). On a change the watcher re-invokes
/// the engine with an empty request, re-deriving everything from the store;
/// only readers whose selector is `system` see a visible difference.
///
/// Lives for the whole process; there is nothing to unsubscribe.
#[derive(Debug)]
pub struct OsPreferenceWatcher {
    last_seen: Option<AppliedMode>,
}

impl OsPreferenceWatcher {
    /// Creates a watcher primed with the current OS preference.
    pub fn new() -> Self {
        Self {
            last_seen: detect_os_preference(),
        }
    }

    /// Re-queries the OS preference and, if it changed since the last check,
    /// recomputes the theme from stored state. Returns whether an update ran.
    pub fn check<S: SettingsStore>(&mut self, engine: &mut ThemeEngine<S>) -> bool {
        let current = detect_os_preference();
        if current == self.last_seen {
            return false;
        }
        self.last_seen = current;
        engine.update_theme(SubthemeRequest::new());
        true
    }
}

impl Default for OsPreferenceWatcher {
    fn default() -> Self {
        Self::new()
    }
}
