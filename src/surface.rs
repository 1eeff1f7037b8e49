//! The mutable style state of the rendered page.
//!
//! Subtheme units do not touch the page directly; they write CSS custom
//! properties and root class names into a [`PageSurface`], and the host
//! materializes that surface into its output (a `<style>` block and a
//! `class` attribute on the document root).

use std::collections::{BTreeMap, BTreeSet};

/// CSS custom properties and root class names currently applied to the page.
///
/// # Example
///
/// ```rust
/// use retheme::PageSurface;
///
/// let mut surface = PageSurface::new();
/// surface.set_var("--main-bg-color", "#ffffff");
/// surface.add_class("subtheme-default");
///
/// assert_eq!(surface.var("--main-bg-color"), Some("#ffffff"));
/// assert_eq!(surface.class_list(), "subtheme-default");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageSurface {
    vars: BTreeMap<String, String>,
    classes: BTreeSet<String>,
}

impl PageSurface {
    /// Creates an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a CSS custom property, replacing any previous value.
    pub fn set_var(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes a CSS custom property. Removing an absent property is a no-op.
    pub fn remove_var(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }

    /// Returns the current value of a CSS custom property.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|v| v.as_str())
    }

    /// Iterates over all set properties in name order.
    pub fn vars(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Adds a class name to the document root.
    pub fn add_class(&mut self, class: impl Into<String>) {
        self.classes.insert(class.into());
    }

    /// Removes a class name. Returns whether it was present.
    pub fn remove_class(&mut self, class: &str) -> bool {
        self.classes.remove(class)
    }

    /// Returns whether a class name is currently present.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    /// Iterates over all class names in sorted order.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.as_str())
    }

    /// Returns true when no properties and no classes are applied.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.classes.is_empty()
    }

    /// Renders the set properties as a `:root { .. }` CSS block.
    pub fn style_block(&self) -> String {
        let mut block = String::from(":root {\n");
        for (name, value) in &self.vars {
            block.push_str("  ");
            block.push_str(name);
            block.push_str(": ");
            block.push_str(value);
            block.push_str(";\n");
        }
        block.push('}');
        block
    }

    /// Renders the class names as a space-separated `class` attribute value.
    pub fn class_list(&self) -> String {
        self.classes
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
