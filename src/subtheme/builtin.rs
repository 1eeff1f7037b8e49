//! The stock subthemes shipped with the crate.

use crate::subtheme::{ModePalette, PaletteSubtheme};

/// Returns the stock subtheme units in registration order.
///
/// The first entry, `default`, is the installation default. The remaining
/// units (`bella`, `modern`, `xcode-civic`) are alternative looks for the
/// same page structure.
pub fn builtin_subthemes() -> Vec<PaletteSubtheme> {
    vec![default_subtheme(), bella(), modern(), xcode_civic()]
}

fn default_subtheme() -> PaletteSubtheme {
    PaletteSubtheme::new(
        "default",
        ModePalette::new()
            .var("--main-bg-color", "#ffffff")
            .var("--main-text-color", "#24292e")
            .var("--main-link-color", "#0366d6")
            .var("--sidebar-bg-color", "#f6f8fa")
            .var("--code-bg-color", "#f6f8fa")
            .var("--border-color", "#e1e4e8"),
        ModePalette::new()
            .var("--main-bg-color", "#0d1117")
            .var("--main-text-color", "#c9d1d9")
            .var("--main-link-color", "#58a6ff")
            .var("--sidebar-bg-color", "#161b22")
            .var("--code-bg-color", "#161b22")
            .var("--border-color", "#30363d"),
    )
}

fn bella() -> PaletteSubtheme {
    PaletteSubtheme::new(
        "bella",
        ModePalette::new()
            .var("--main-bg-color", "#fdfbf7")
            .var("--main-text-color", "#40363a")
            .var("--main-link-color", "#b5475d")
            .var("--sidebar-bg-color", "#f7f1e9")
            .var("--code-bg-color", "#f4ece1")
            .var("--border-color", "#e8ddcc"),
        ModePalette::new()
            .var("--main-bg-color", "#241f21")
            .var("--main-text-color", "#e8e0d4")
            .var("--main-link-color", "#e08a9b")
            .var("--sidebar-bg-color", "#2d2629")
            .var("--code-bg-color", "#332b2e")
            .var("--border-color", "#463a3e"),
    )
}

fn modern() -> PaletteSubtheme {
    PaletteSubtheme::new(
        "modern",
        ModePalette::new()
            .var("--main-bg-color", "#f5f7fa")
            .var("--main-text-color", "#1f2d3d")
            .var("--main-link-color", "#0f7f7f")
            .var("--sidebar-bg-color", "#e9eef4")
            .var("--code-bg-color", "#e9eef4")
            .var("--border-color", "#d3dce6"),
        ModePalette::new()
            .var("--main-bg-color", "#17212b")
            .var("--main-text-color", "#d6e1ec")
            .var("--main-link-color", "#4fd1c5")
            .var("--sidebar-bg-color", "#1d2935")
            .var("--code-bg-color", "#212f3d")
            .var("--border-color", "#2e3f50"),
    )
}

fn xcode_civic() -> PaletteSubtheme {
    PaletteSubtheme::new(
        "xcode-civic",
        ModePalette::new()
            .var("--main-bg-color", "#ffffff")
            .var("--main-text-color", "#1d1d26")
            .var("--main-link-color", "#3900a0")
            .var("--sidebar-bg-color", "#f0f0f5")
            .var("--code-bg-color", "#f0f0f5")
            .var("--border-color", "#d8d8e0"),
        ModePalette::new()
            .var("--main-bg-color", "#1f2029")
            .var("--main-text-color", "#e5e5e9")
            .var("--main-link-color", "#6bdfff")
            .var("--sidebar-bg-color", "#24252f")
            .var("--code-bg-color", "#282934")
            .var("--border-color", "#35363f"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::subtheme::Subtheme;

    #[test]
    fn test_builtin_names_and_order() {
        let names: Vec<String> = builtin_subthemes()
            .iter()
            .map(|s| s.name().to_string())
            .collect();
        assert_eq!(names, ["default", "bella", "modern", "xcode-civic"]);
    }

    #[test]
    fn test_builtin_palettes_cover_both_modes() {
        use crate::mode::AppliedMode;
        use crate::surface::PageSurface;

        for unit in builtin_subthemes() {
            for mode in [AppliedMode::Light, AppliedMode::Dark] {
                let mut surface = PageSurface::new();
                unit.apply(&mut surface, mode);
                assert!(
                    surface.var("--main-bg-color").is_some(),
                    "{} missing background for {}",
                    unit.name(),
                    mode
                );
                unit.reset(&mut surface, mode);
                assert!(surface.is_empty(), "{} left residue", unit.name());
            }
        }
    }
}
