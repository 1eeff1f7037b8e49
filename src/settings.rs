//! View-model backing a theme settings panel.

use crate::engine::{SubthemeRequest, SubthemeState, ThemeEngine};
use crate::mode::ModeSelector;
use crate::store::SettingsStore;

/// The state a settings panel binds to: the current selection plus the
/// option lists for the two dropdowns.
///
/// Selection changes go through the engine and the model keeps its copy in
/// sync from the engine's update notification, so `current()` always
/// reflects the last persisted selection.
///
/// # Example
///
/// ```rust
/// use retheme::{MemoryStore, ModeSelector, SettingsModel, ThemeEngine};
///
/// let mut engine = ThemeEngine::new(MemoryStore::new());
/// let mut settings = SettingsModel::new(&engine);
///
/// settings.select_name(&mut engine, "modern");
/// settings.select_mode(&mut engine, ModeSelector::Dark);
///
/// assert_eq!(settings.current().name, "modern");
/// assert_eq!(settings.current().mode, ModeSelector::Dark);
/// ```
#[derive(Debug)]
pub struct SettingsModel {
    current: SubthemeState,
}

impl SettingsModel {
    /// Creates a model primed with the engine's persisted selection.
    pub fn new<S: SettingsStore>(engine: &ThemeEngine<S>) -> Self {
        Self {
            current: engine.stored_state(),
        }
    }

    /// The current selection.
    pub fn current(&self) -> &SubthemeState {
        &self.current
    }

    /// The subtheme dropdown options, in registry order.
    pub fn name_options<'a, S: SettingsStore>(
        &self,
        engine: &'a ThemeEngine<S>,
    ) -> Vec<&'a str> {
        engine.registry().names().collect()
    }

    /// The mode dropdown options.
    pub fn mode_options(&self) -> [ModeSelector; 3] {
        ModeSelector::ALL
    }

    /// Handles a subtheme selection from the panel.
    pub fn select_name<S: SettingsStore>(
        &mut self,
        engine: &mut ThemeEngine<S>,
        name: impl Into<String>,
    ) {
        let current = &mut self.current;
        engine.update_theme_with(
            SubthemeRequest::name(name),
            true,
            Some(&mut |state: &SubthemeState| *current = state.clone()),
        );
    }

    /// Handles a mode selection from the panel.
    pub fn select_mode<S: SettingsStore>(
        &mut self,
        engine: &mut ThemeEngine<S>,
        mode: ModeSelector,
    ) {
        let current = &mut self.current;
        engine.update_theme_with(
            SubthemeRequest::mode(mode),
            true,
            Some(&mut |state: &SubthemeState| *current = state.clone()),
        );
    }
}
