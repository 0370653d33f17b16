use web_sys::{window, Storage};

use super::preference::{ColorSchemeQuery, PreferenceStore, StorageError, ThemeMarker, ThemePreference};
use crate::browser;

pub struct LocalStorageStore {
    key: &'static str,
}

impl LocalStorageStore {
    pub fn new(key: &'static str) -> Self {
        Self { key }
    }
}

fn local_storage() -> Result<Storage, StorageError> {
    let window = window().ok_or(StorageError::Unavailable)?;
    window
        .local_storage()
        .map_err(|e| StorageError::Access(format!("{:?}", e)))?
        .ok_or(StorageError::Unavailable)
}

impl PreferenceStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StorageError> {
        local_storage()?
            .get_item(self.key)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }

    fn save(&self, value: &str) -> Result<(), StorageError> {
        local_storage()?
            .set_item(self.key, value)
            .map_err(|e| StorageError::Access(format!("{:?}", e)))
    }
}

pub struct MediaQueryColorScheme;

impl ColorSchemeQuery for MediaQueryColorScheme {
    fn prefers_dark(&self) -> Option<bool> {
        browser::media_matches("(prefers-color-scheme: dark)")
    }
}

pub struct DocumentClassMarker;

impl ThemeMarker for DocumentClassMarker {
    fn apply(&self, theme: ThemePreference) {
        if let Some(root) = browser::root_element() {
            let classes = root.class_list();
            let result = if theme.is_dark() {
                classes.add_1("dark")
            } else {
                classes.remove_1("dark")
            };
            if let Err(e) = result {
                log::warn!("Could not update document theme class: {:?}", e);
            }
        }
    }
}
