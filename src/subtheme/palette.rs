//! Palette-backed subtheme units.

use crate::mode::AppliedMode;
use crate::subtheme::Subtheme;
use crate::surface::PageSurface;

/// The CSS custom properties one mode of a subtheme installs.
///
/// # Example
///
/// ```rust
/// use retheme::ModePalette;
///
/// let light = ModePalette::new()
///     .var("--main-bg-color", "#ffffff")
///     .var("--main-text-color", "#24292e");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModePalette {
    vars: Vec<(String, String)>,
}

impl ModePalette {
    /// Creates an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, returning an updated palette for chaining.
    pub fn var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.push((name.into(), value.into()));
        self
    }

    /// Iterates over the palette's properties in declaration order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// A subtheme built from a light palette and a dark palette.
///
/// Applying the unit installs the palette for the applied mode plus two root
/// classes, `subtheme-<name>` and `subtheme-mode-<light|dark>`. Resetting
/// removes them again.
///
/// # Example
///
/// ```rust
/// use retheme::{AppliedMode, ModePalette, PageSurface, PaletteSubtheme, Subtheme};
///
/// let unit = PaletteSubtheme::new(
///     "plain",
///     ModePalette::new().var("--main-bg-color", "#ffffff"),
///     ModePalette::new().var("--main-bg-color", "#101010"),
/// );
///
/// let mut surface = PageSurface::new();
/// unit.apply(&mut surface, AppliedMode::Dark);
/// assert_eq!(surface.var("--main-bg-color"), Some("#101010"));
/// assert!(surface.has_class("subtheme-plain"));
///
/// unit.reset(&mut surface, AppliedMode::Dark);
/// assert!(surface.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct PaletteSubtheme {
    name: String,
    light: ModePalette,
    dark: ModePalette,
}

impl PaletteSubtheme {
    /// Creates a unit from a name and its two mode palettes.
    pub fn new(name: impl Into<String>, light: ModePalette, dark: ModePalette) -> Self {
        Self {
            name: name.into(),
            light,
            dark,
        }
    }

    fn palette(&self, mode: AppliedMode) -> &ModePalette {
        match mode {
            AppliedMode::Light => &self.light,
            AppliedMode::Dark => &self.dark,
        }
    }

    fn name_class(&self) -> String {
        format!("subtheme-{}", self.name)
    }

    fn mode_class(mode: AppliedMode) -> String {
        format!("subtheme-mode-{}", mode.as_str())
    }
}

impl Subtheme for PaletteSubtheme {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, surface: &mut PageSurface, mode: AppliedMode) {
        for (name, value) in self.palette(mode).vars() {
            surface.set_var(name, value);
        }
        surface.add_class(self.name_class());
        surface.add_class(Self::mode_class(mode));
    }

    fn reset(&self, surface: &mut PageSurface, mode: AppliedMode) {
        for (name, _) in self.palette(mode).vars() {
            surface.remove_var(name);
        }
        surface.remove_class(&self.name_class());
        surface.remove_class(&Self::mode_class(mode));
    }
}
