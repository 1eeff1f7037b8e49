//! Temporary theme override around printing.
//!
//! Print surfaces want the default look in light mode regardless of what the
//! reader picked on screen. [`PrintOverride`] is a two-state machine the
//! host wires to its before-print / after-print notifications; both
//! transitions are transient engine updates, so the store is never touched
//! and the surface is always physically rebuilt, even when the print theme
//! happens to match the on-screen one.

use crate::engine::{SubthemeRequest, SubthemeState, ThemeEngine};
use crate::mode::ModeSelector;
use crate::store::SettingsStore;

/// Whether a print is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintState {
    /// On-screen rendering; the reader's selection is applied.
    Normal,
    /// Between before-print and after-print; the print override is applied.
    PrintPending,
}

/// Swaps the page to the default/light look for printing and restores the
/// reader's selection afterwards.
///
/// The override tracks the reader's current selection in memory (fed by the
/// host from the engine's update notifications) rather than re-reading the
/// store at restore time.
///
/// # Example
///
/// ```rust
/// use retheme::{MemoryStore, ModeSelector, PrintOverride, SubthemeRequest, ThemeEngine};
///
/// let mut engine = ThemeEngine::new(MemoryStore::new());
/// let state = engine.update_theme(
///     SubthemeRequest::name("bella").with_mode(ModeSelector::Dark),
/// );
///
/// let mut print = PrintOverride::new(state);
/// print.before_print(&mut engine);
/// assert!(engine.surface().has_class("subtheme-default"));
///
/// print.after_print(&mut engine);
/// assert!(engine.surface().has_class("subtheme-bella"));
/// ```
#[derive(Debug)]
pub struct PrintOverride {
    state: PrintState,
    current: SubthemeState,
}

impl PrintOverride {
    /// Creates an override tracking the given on-screen selection.
    pub fn new(current: SubthemeState) -> Self {
        Self {
            state: PrintState::Normal,
            current,
        }
    }

    /// Updates the tracked on-screen selection.
    pub fn set_current(&mut self, current: SubthemeState) {
        self.current = current;
    }

    /// The tracked on-screen selection.
    pub fn current(&self) -> &SubthemeState {
        &self.current
    }

    /// Whether a print is in progress.
    pub fn is_print_pending(&self) -> bool {
        self.state == PrintState::PrintPending
    }

    /// Before-print transition: transiently applies the default subtheme in
    /// light mode. A repeated before-print without an intervening
    /// after-print is ignored.
    pub fn before_print<S: SettingsStore>(&mut self, engine: &mut ThemeEngine<S>) {
        if self.state == PrintState::PrintPending {
            return;
        }
        self.state = PrintState::PrintPending;

        let default_name = engine.registry().default_name().to_string();
        engine.update_theme_with(
            SubthemeRequest::name(default_name).with_mode(ModeSelector::Light),
            false,
            None,
        );
    }

    /// After-print transition: transiently restores the tracked selection.
    /// An after-print without a pending print is ignored.
    pub fn after_print<S: SettingsStore>(&mut self, engine: &mut ThemeEngine<S>) {
        if self.state == PrintState::Normal {
            return;
        }
        self.state = PrintState::Normal;

        engine.update_theme_with(SubthemeRequest::from(&self.current), false, None);
    }
}
