use thiserror::Error;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    /// The literal persisted in storage.
    pub fn as_str(self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemePreference::Light),
            "dark" => Some(ThemePreference::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ThemePreference::Light => ThemePreference::Dark,
            ThemePreference::Dark => ThemePreference::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("persistent storage is not available")]
    Unavailable,
    #[error("storage access failed: {0}")]
    Access(String),
}

/// Key/value slot the chosen theme survives reloads in.
pub trait PreferenceStore {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, value: &str) -> Result<(), StorageError>;
}

/// Host-reported colour scheme. `None` when the host cannot answer.
pub trait ColorSchemeQuery {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Global styling hook outside the component tree (the `dark` class on `<html>`).
pub trait ThemeMarker {
    fn apply(&self, theme: ThemePreference);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_only_the_two_literals() {
        assert_eq!(ThemePreference::parse("dark"), Some(ThemePreference::Dark));
        assert_eq!(ThemePreference::parse("light"), Some(ThemePreference::Light));
        assert_eq!(ThemePreference::parse("Dark"), None);
        assert_eq!(ThemePreference::parse(""), None);
    }

    #[test]
    fn toggling_twice_is_identity() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn stored_literal_parses_back() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_eq!(ThemePreference::parse(theme.as_str()), Some(theme));
        }
    }
}
