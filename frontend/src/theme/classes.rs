//! Utility class palettes for the two themes.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub bg: &'static str,
    pub surface: &'static str,
    pub surface_hover: &'static str,
    pub input: &'static str,
}

impl ThemeClasses {
    pub fn for_theme(is_dark: bool) -> Self {
        if is_dark {
            Self {
                bg: "bg-gray-900",
                surface: "bg-gray-800",
                surface_hover: "hover:bg-gray-700",
                input: "bg-gray-700 border-gray-600 text-white placeholder-gray-400",
            }
        } else {
            Self {
                bg: "bg-white",
                surface: "bg-white",
                surface_hover: "hover:bg-gray-50",
                input: "bg-white border-gray-200 text-gray-900 placeholder-gray-500",
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub muted: &'static str,
    pub error: &'static str,
}

impl TextColors {
    pub fn for_theme(is_dark: bool) -> Self {
        Self {
            primary: if is_dark { "text-white" } else { "text-gray-900" },
            secondary: if is_dark { "text-gray-300" } else { "text-gray-600" },
            muted: if is_dark { "text-gray-400" } else { "text-gray-500" },
            error: if is_dark { "text-red-400" } else { "text-red-600" },
        }
    }
}

/// Background for sections that alternate with the plain page background.
pub fn section_background(is_dark: bool) -> &'static str {
    if is_dark {
        "bg-gradient-to-br from-gray-800 to-gray-900"
    } else {
        "bg-gradient-to-br from-gray-50 to-white"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_follow_the_theme() {
        let light = TextColors::for_theme(false);
        let dark = TextColors::for_theme(true);
        assert_ne!(light.primary, dark.primary);
        assert_ne!(light.error, dark.error);
        assert_eq!(ThemeClasses::for_theme(true).bg, "bg-gray-900");
    }
}
