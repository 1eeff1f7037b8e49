//! The subtheme resolution and application engine.
//!
//! [`ThemeEngine`] is the single mutator of theme state. Every update runs
//! the same synchronous pipeline: read the persisted selection, normalize
//! the request against it, resolve mode selectors to concrete modes, persist
//! and notify if asked to, then transition the page surface unless it
//! already shows the target.

use crate::config::EngineConfig;
use crate::mode::{AppliedMode, ModeSelector};
use crate::registry::SubthemeRegistry;
use crate::store::SettingsStore;
use crate::surface::PageSurface;
use serde::{Deserialize, Serialize};

/// The durable record of the reader's intent: a subtheme name plus a mode
/// selector. Always normalized against the registry before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubthemeState {
    /// Registry name of the selected subtheme.
    pub name: String,
    /// The reader's mode selector (not the resolved mode).
    pub mode: ModeSelector,
}

/// A partial update request; omitted fields fall back to the persisted state.
///
/// # Example
///
/// ```rust
/// use retheme::{ModeSelector, SubthemeRequest};
///
/// // Change only the subtheme.
/// let _ = SubthemeRequest::name("bella");
/// // Change only the mode.
/// let _ = SubthemeRequest::mode(ModeSelector::Dark);
/// // Change both.
/// let _ = SubthemeRequest::name("bella").with_mode(ModeSelector::Dark);
/// // Re-derive everything from the store.
/// let _ = SubthemeRequest::default();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubthemeRequest {
    name: Option<String>,
    mode: Option<ModeSelector>,
}

impl SubthemeRequest {
    /// An empty request; both fields fall back to the persisted state.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request that changes the subtheme name.
    ///
    /// The name may be any string; unknown names normalize to the registry
    /// default with a logged warning.
    pub fn name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            mode: None,
        }
    }

    /// A request that changes the mode selector.
    pub fn mode(mode: ModeSelector) -> Self {
        Self {
            name: None,
            mode: Some(mode),
        }
    }

    /// Sets the name on an existing request.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the mode selector on an existing request.
    pub fn with_mode(mut self, mode: ModeSelector) -> Self {
        self.mode = Some(mode);
        self
    }
}

impl From<&SubthemeState> for SubthemeRequest {
    fn from(state: &SubthemeState) -> Self {
        Self {
            name: Some(state.name.clone()),
            mode: Some(state.mode),
        }
    }
}

/// Orchestrates subtheme transitions against a store, a registry and the
/// page surface.
///
/// The engine owns the surface and invokes registered units' lifecycle
/// methods on it; which unit is "current" is tracked through the store (for
/// durable intent) and the surface (for what is physically rendered).
///
/// # Example
///
/// ```rust
/// use retheme::{MemoryStore, ModeSelector, SubthemeRequest, ThemeEngine};
///
/// let mut engine = ThemeEngine::new(MemoryStore::new());
/// let state = engine.update_theme(
///     SubthemeRequest::name("bella").with_mode(ModeSelector::Dark),
/// );
///
/// assert_eq!(state.name, "bella");
/// assert!(engine.surface().has_class("subtheme-bella"));
/// assert!(engine.surface().has_class("subtheme-mode-dark"));
/// ```
pub struct ThemeEngine<S: SettingsStore> {
    config: EngineConfig,
    store: S,
    registry: SubthemeRegistry,
    surface: PageSurface,
    // What the surface currently shows; None until the first apply.
    rendered: Option<(String, AppliedMode)>,
}

impl<S: SettingsStore> ThemeEngine<S> {
    /// Creates an engine with the stock registry and default configuration.
    pub fn new(store: S) -> Self {
        Self::with_config(store, SubthemeRegistry::builtin(), EngineConfig::default())
    }

    /// Creates an engine with a custom registry.
    pub fn with_registry(store: S, registry: SubthemeRegistry) -> Self {
        Self::with_config(store, registry, EngineConfig::default())
    }

    /// Creates an engine with a custom registry and configuration.
    ///
    /// `config.init_name` should be a registered name; if it is not, reads
    /// of an empty store normalize it to the registry default.
    pub fn with_config(store: S, registry: SubthemeRegistry, config: EngineConfig) -> Self {
        Self {
            config,
            store,
            registry,
            surface: PageSurface::new(),
            rendered: None,
        }
    }

    /// The page surface this engine renders into.
    pub fn surface(&self) -> &PageSurface {
        &self.surface
    }

    /// The registry of available subthemes.
    pub fn registry(&self) -> &SubthemeRegistry {
        &self.registry
    }

    /// The backing settings store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The engine's configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Reads the persisted selection, normalizing missing or invalid values
    /// to the configured defaults.
    pub fn stored_state(&self) -> SubthemeState {
        let raw_name = self
            .store
            .get(&self.config.name_key)
            .unwrap_or_else(|| self.config.init_name.clone());
        let name = self.verify_name(&raw_name);

        let mode = match self.store.get(&self.config.mode_key) {
            Some(raw) => Self::verify_mode(&raw),
            None => self.config.init_mode,
        };

        SubthemeState { name, mode }
    }

    /// Updates the page theme, persisting the normalized selection.
    ///
    /// Equivalent to [`update_theme_with`](Self::update_theme_with) with
    /// `persist = true` and no notification callback.
    pub fn update_theme(&mut self, request: SubthemeRequest) -> SubthemeState {
        self.update_theme_with(request, true, None)
    }

    /// Updates the page theme.
    ///
    /// Fields omitted from `request` fall back to the persisted state.
    /// Unknown names and unparsable stored selectors never fail; they are
    /// normalized with a logged warning.
    ///
    /// When `persist` is true, the normalized selection is written to the
    /// store and `on_update` is invoked with it (before the write, with the
    /// selector still unresolved). When the surface already shows exactly
    /// the target subtheme and mode, the transition is skipped. When
    /// `persist` is false the transition is transient: nothing is written,
    /// `on_update` is not invoked, and the surface is always physically
    /// reset and re-applied.
    ///
    /// Returns the normalized selection.
    pub fn update_theme_with(
        &mut self,
        request: SubthemeRequest,
        persist: bool,
        on_update: Option<&mut dyn FnMut(&SubthemeState)>,
    ) -> SubthemeState {
        let stored = self.stored_state();

        let name = match &request.name {
            Some(raw) => self.verify_name(raw),
            None => stored.name.clone(),
        };
        let mode = request.mode.unwrap_or(stored.mode);
        let state = SubthemeState { name, mode };

        let applied = state.mode.resolve();

        // Store first, then decide whether the surface needs any work.
        if persist {
            if let Some(notify) = on_update {
                notify(&state);
            }
            self.store.set(&self.config.name_key, &state.name);
            self.store.set(&self.config.mode_key, state.mode.as_str());
        }

        // A transient update has no trustworthy baseline to compare against,
        // so the skip only runs on the persisting path.
        if persist
            && self
                .rendered
                .as_ref()
                .is_some_and(|(name, mode)| *name == state.name && *mode == applied)
        {
            return state;
        }

        let (previous_name, previous_applied) = match &self.rendered {
            Some((name, mode)) => (name.clone(), *mode),
            None => (stored.name.clone(), stored.mode.resolve()),
        };

        let old_unit = self
            .registry
            .get(&previous_name)
            .expect("previously applied subtheme is registered");
        old_unit.reset(&mut self.surface, previous_applied);

        let new_unit = self
            .registry
            .get(&state.name)
            .expect("normalized subtheme is registered");
        new_unit.apply(&mut self.surface, applied);

        self.rendered = Some((state.name.clone(), applied));
        state
    }

    fn verify_name(&self, raw: &str) -> String {
        if self.registry.contains(raw) {
            return raw.to_string();
        }
        let fallback = self.registry.default_name();
        log::warn!("invalid subtheme name {:?}; reverting to {:?}", raw, fallback);
        fallback.to_string()
    }

    fn verify_mode(raw: &str) -> ModeSelector {
        match ModeSelector::parse(raw) {
            Some(mode) => mode,
            None => {
                log::warn!("invalid subtheme mode {:?}; reverting to \"system\"", raw);
                ModeSelector::System
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::set_os_preference_detector;
    use crate::store::MemoryStore;
    use crate::subtheme::Subtheme;
    use proptest::prelude::*;
    use serial_test::serial;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct RecordingSubtheme {
        name: &'static str,
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Subtheme for RecordingSubtheme {
        fn name(&self) -> &str {
            self.name
        }

        fn apply(&self, _surface: &mut PageSurface, mode: AppliedMode) {
            self.log
                .borrow_mut()
                .push(format!("apply {} {}", self.name, mode));
        }

        fn reset(&self, _surface: &mut PageSurface, mode: AppliedMode) {
            self.log
                .borrow_mut()
                .push(format!("reset {} {}", self.name, mode));
        }
    }

    fn recording_engine(
        store: MemoryStore,
        names: &[&'static str],
    ) -> (ThemeEngine<MemoryStore>, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut names = names.iter().copied();
        let mut registry = SubthemeRegistry::new(Box::new(RecordingSubtheme {
            name: names.next().expect("at least one name"),
            log: Rc::clone(&log),
        }));
        for name in names {
            registry
                .register(Box::new(RecordingSubtheme {
                    name,
                    log: Rc::clone(&log),
                }))
                .unwrap();
        }
        (ThemeEngine::with_registry(store, registry), log)
    }

    // Seeding a concrete stored mode keeps the baseline resolution away
    // from the OS query.
    fn light_store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.set("subtheme-mode", "light");
        store
    }

    #[test]
    fn test_unknown_name_normalizes_to_default() {
        let mut engine = ThemeEngine::new(MemoryStore::new());
        let state = engine.update_theme(
            SubthemeRequest::name("no-such-theme").with_mode(ModeSelector::Light),
        );

        assert_eq!(state.name, "default");
        assert_eq!(
            engine.store().get("subtheme-name").as_deref(),
            Some("default")
        );
    }

    #[test]
    fn test_corrupt_stored_mode_normalizes_to_system() {
        let mut store = MemoryStore::new();
        store.set("subtheme-name", "bella");
        store.set("subtheme-mode", "blue");

        let engine = ThemeEngine::new(store);
        let stored = engine.stored_state();

        assert_eq!(stored.name, "bella");
        assert_eq!(stored.mode, ModeSelector::System);
    }

    #[test]
    #[serial]
    fn test_corrupt_stored_mode_is_rewritten_on_update() {
        set_os_preference_detector(|| Some(AppliedMode::Light));
        let mut store = MemoryStore::new();
        store.set("subtheme-mode", "blue");

        let mut engine = ThemeEngine::new(store);
        engine.update_theme(SubthemeRequest::new());

        assert_eq!(
            engine.store().get("subtheme-mode").as_deref(),
            Some("system")
        );
    }

    #[test]
    fn test_round_trip_persists_exact_selection() {
        let mut engine = ThemeEngine::new(MemoryStore::new());
        engine.update_theme(SubthemeRequest::name("bella").with_mode(ModeSelector::Dark));

        let stored = engine.stored_state();
        assert_eq!(
            stored,
            SubthemeState {
                name: "bella".to_string(),
                mode: ModeSelector::Dark,
            }
        );
    }

    #[test]
    fn test_second_identical_update_skips_surface_work() {
        let (mut engine, log) = recording_engine(light_store(), &["default", "paper"]);

        engine.update_theme(SubthemeRequest::name("paper").with_mode(ModeSelector::Dark));
        let after_first = log.borrow().len();
        engine.update_theme(SubthemeRequest::name("paper").with_mode(ModeSelector::Dark));

        assert_eq!(
            log.borrow().len(),
            after_first,
            "second identical update must not touch the surface"
        );
        assert_eq!(
            *log.borrow(),
            vec![
                "reset default light".to_string(),
                "apply paper dark".to_string(),
            ]
        );
    }

    #[test]
    fn test_transient_update_always_applies() {
        let (mut engine, log) = recording_engine(MemoryStore::new(), &["default", "paper"]);

        engine.update_theme(SubthemeRequest::name("paper").with_mode(ModeSelector::Dark));
        log.borrow_mut().clear();

        // Identical target, but transient updates bypass the skip.
        engine.update_theme_with(
            SubthemeRequest::name("paper").with_mode(ModeSelector::Dark),
            false,
            None,
        );

        assert_eq!(
            *log.borrow(),
            vec![
                "reset paper dark".to_string(),
                "apply paper dark".to_string(),
            ]
        );
    }

    #[test]
    fn test_transient_update_does_not_persist_or_notify() {
        let (mut engine, _log) = recording_engine(MemoryStore::new(), &["default", "paper"]);
        engine.update_theme(SubthemeRequest::name("paper").with_mode(ModeSelector::Light));

        let mut notified = false;
        engine.update_theme_with(
            SubthemeRequest::name("default").with_mode(ModeSelector::Dark),
            false,
            Some(&mut |_| notified = true),
        );

        assert!(!notified);
        assert_eq!(engine.store().get("subtheme-name").as_deref(), Some("paper"));
        assert_eq!(engine.store().get("subtheme-mode").as_deref(), Some("light"));
    }

    #[test]
    fn test_on_update_receives_normalized_unresolved_state() {
        let mut engine = ThemeEngine::new(MemoryStore::new());
        let mut seen = None;

        engine.update_theme_with(
            SubthemeRequest::name("nope").with_mode(ModeSelector::Light),
            true,
            Some(&mut |state: &SubthemeState| seen = Some(state.clone())),
        );

        assert_eq!(
            seen,
            Some(SubthemeState {
                name: "default".to_string(),
                mode: ModeSelector::Light,
            })
        );
    }

    #[test]
    #[serial]
    fn test_empty_store_first_update_applies_defaults() {
        set_os_preference_detector(|| Some(AppliedMode::Dark));
        let (mut engine, log) = recording_engine(MemoryStore::new(), &["default", "paper"]);

        let state = engine.update_theme(SubthemeRequest::new());

        assert_eq!(state.name, "default");
        assert_eq!(state.mode, ModeSelector::System);
        assert_eq!(
            engine.store().get("subtheme-name").as_deref(),
            Some("default")
        );
        assert_eq!(
            engine.store().get("subtheme-mode").as_deref(),
            Some("system")
        );
        assert_eq!(
            *log.borrow(),
            vec![
                "reset default dark".to_string(),
                "apply default dark".to_string(),
            ]
        );
        set_os_preference_detector(|| Some(AppliedMode::Light));
    }

    #[test]
    #[serial]
    fn test_same_name_reapplies_when_resolved_mode_changes() {
        set_os_preference_detector(|| Some(AppliedMode::Light));
        let (mut engine, log) = recording_engine(MemoryStore::new(), &["default", "paper"]);
        engine.update_theme(SubthemeRequest::name("paper").with_mode(ModeSelector::Light));
        log.borrow_mut().clear();

        set_os_preference_detector(|| Some(AppliedMode::Dark));
        engine.update_theme(SubthemeRequest::mode(ModeSelector::System));

        assert_eq!(
            *log.borrow(),
            vec![
                "reset paper light".to_string(),
                "apply paper dark".to_string(),
            ]
        );
        set_os_preference_detector(|| Some(AppliedMode::Light));
    }

    #[test]
    #[serial]
    fn test_selector_change_with_same_resolution_is_skipped() {
        set_os_preference_detector(|| Some(AppliedMode::Light));
        let (mut engine, log) = recording_engine(MemoryStore::new(), &["default"]);
        engine.update_theme(SubthemeRequest::mode(ModeSelector::System));
        log.borrow_mut().clear();

        // system -> light while the OS stays light: no visible change.
        engine.update_theme(SubthemeRequest::mode(ModeSelector::Light));

        assert!(log.borrow().is_empty());
        assert_eq!(
            engine.store().get("subtheme-mode").as_deref(),
            Some("light")
        );
    }

    proptest! {
        #[test]
        fn prop_unknown_names_normalize_to_default(raw in "[a-z0-9-]{1,16}") {
            let mut store = MemoryStore::new();
            store.set("subtheme-mode", "light");
            let mut engine = ThemeEngine::new(store);
            prop_assume!(!engine.registry().contains(&raw));

            let state = engine.update_theme(SubthemeRequest::name(raw));

            prop_assert_eq!(state.name.as_str(), "default");
            let stored_name = engine.store().get("subtheme-name");
            prop_assert_eq!(
                stored_name.as_deref(),
                Some("default")
            );
        }

        #[test]
        fn prop_unknown_stored_modes_normalize_to_system(raw in "[a-zA-Z0-9 ]{0,16}") {
            prop_assume!(ModeSelector::parse(&raw).is_none());
            let mut store = MemoryStore::new();
            store.set("subtheme-mode", &raw);
            let engine = ThemeEngine::new(store);

            prop_assert_eq!(engine.stored_state().mode, ModeSelector::System);
        }
    }
}
