//! Registry of available subtheme units.
//!
//! The registry is a fixed, insertion-ordered mapping from subtheme name to
//! unit, built once at startup. One entry is the installation default; every
//! name the engine normalizes is guaranteed to be present here.

use indexmap::IndexMap;

use crate::subtheme::{builtin_subthemes, Subtheme};

/// Error type for registry construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A unit was registered under a name that is already taken.
    Duplicate {
        /// The name that was registered twice.
        name: String,
    },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::Duplicate { name } => {
                write!(f, "subtheme \"{}\" is already registered", name)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// An insertion-ordered mapping from subtheme name to unit.
///
/// Construction guarantees at least one entry: the default unit passed to
/// [`SubthemeRegistry::new`] (or `default` for [`SubthemeRegistry::builtin`]).
/// Iteration order is registration order, which is also the order a settings
/// UI lists the options in.
///
/// # Example
///
/// ```rust
/// use retheme::{ModePalette, PaletteSubtheme, SubthemeRegistry};
///
/// let registry = SubthemeRegistry::new(Box::new(PaletteSubtheme::new(
///     "plain",
///     ModePalette::new().var("--main-bg-color", "#ffffff"),
///     ModePalette::new().var("--main-bg-color", "#101010"),
/// )));
///
/// assert_eq!(registry.default_name(), "plain");
/// assert!(registry.contains("plain"));
/// ```
pub struct SubthemeRegistry {
    units: IndexMap<String, Box<dyn Subtheme>>,
    default_name: String,
}

impl SubthemeRegistry {
    /// Creates a registry whose only entry is the given default unit.
    pub fn new(default_unit: Box<dyn Subtheme>) -> Self {
        let default_name = default_unit.name().to_string();
        let mut units = IndexMap::new();
        units.insert(default_name.clone(), default_unit);
        Self {
            units,
            default_name,
        }
    }

    /// Creates a registry with the stock units; `default` is the default.
    pub fn builtin() -> Self {
        let mut stock = builtin_subthemes().into_iter();
        let mut registry = Self::new(Box::new(stock.next().expect("stock subthemes are non-empty")));
        for unit in stock {
            registry
                .register(Box::new(unit))
                .expect("stock subtheme names are distinct");
        }
        registry
    }

    /// Registers an additional unit.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the unit's name is taken.
    pub fn register(&mut self, unit: Box<dyn Subtheme>) -> Result<(), RegistryError> {
        let name = unit.name().to_string();
        if self.units.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.units.insert(name, unit);
        Ok(())
    }

    /// Looks up a unit by name.
    pub fn get(&self, name: &str) -> Option<&dyn Subtheme> {
        self.units.get(name).map(|unit| &**unit)
    }

    /// The name of the installation-default unit.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    /// Returns whether a name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.units.contains_key(name)
    }

    /// Iterates over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(|name| name.as_str())
    }

    /// The number of registered units.
    pub fn len(&self) -> usize {
        self.units.len()
    }
}

impl Default for SubthemeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
