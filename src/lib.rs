#![warn(missing_docs)]

//! Reader-configurable subtheme switching for static documentation pages.
//!
//! A page ships several visual packages ("subthemes"), each with a light and
//! a dark rendering. The reader picks a subtheme and a mode selector
//! (`light`, `dark`, or "follow the system"); this crate decides which
//! combination is active, persists the choice, and transitions the page from
//! one look to another.
//!
//! ## Components
//!
//! - [`ThemeEngine`]: the resolution and application engine, the only
//!   mutator of theme state
//! - [`SubthemeRegistry`] and the [`Subtheme`] trait: the available units
//! - [`ModeSelector`] / [`AppliedMode`]: reader intent vs. rendered mode,
//!   with OS preference resolution behind a swappable detector
//! - [`PageSurface`]: the CSS custom properties and root classes the page
//!   currently shows
//! - [`SettingsStore`]: key-value persistence ([`MemoryStore`],
//!   [`JsonFileStore`])
//! - [`OsPreferenceWatcher`]: re-derives the theme when the OS color scheme
//!   flips
//! - [`PrintOverride`]: transient default/light override around printing
//! - [`SettingsModel`]: view-model for a settings panel
//!
//! ## Quick start
//!
//! ```rust
//! use retheme::{MemoryStore, ModeSelector, SubthemeRequest, ThemeEngine};
//!
//! let mut engine = ThemeEngine::new(MemoryStore::new());
//!
//! // Apply and persist a selection.
//! let state = engine.update_theme(
//!     SubthemeRequest::name("bella").with_mode(ModeSelector::Dark),
//! );
//! assert_eq!(state.name, "bella");
//!
//! // The surface now carries bella's dark palette; the host materializes
//! // it into a <style> block and a root class attribute.
//! assert!(engine.surface().has_class("subtheme-mode-dark"));
//! let _css = engine.surface().style_block();
//! ```
//!
//! All engine invocations are synchronous and run to completion; the host's
//! event loop serializes UI changes, watcher checks, and print transitions,
//! so every update sees the fully written result of the previous one.

pub mod config;
pub mod engine;
pub mod mode;
pub mod print;
pub mod registry;
pub mod settings;
pub mod store;
pub mod subtheme;
pub mod surface;
pub mod watch;

pub use config::EngineConfig;
pub use engine::{SubthemeRequest, SubthemeState, ThemeEngine};
pub use mode::{set_os_preference_detector, AppliedMode, ModeSelector};
pub use print::{PrintOverride, PrintState};
pub use registry::{RegistryError, SubthemeRegistry};
pub use settings::SettingsModel;
pub use store::{JsonFileStore, MemoryStore, SettingsStore};
pub use subtheme::{builtin_subthemes, ModePalette, PaletteSubtheme, Subtheme};
pub use surface::PageSurface;
pub use watch::OsPreferenceWatcher;
