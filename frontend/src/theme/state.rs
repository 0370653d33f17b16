use std::rc::Rc;

use yew::prelude::*;

use super::preference::{ColorSchemeQuery, PreferenceStore, ThemeMarker, ThemePreference};

pub enum ThemeAction {
    Toggle,
    Set(ThemePreference),
}

/// The single authoritative theme value plus the side-effect sinks that every
/// change is pushed through.
#[derive(Clone)]
pub struct ThemeState {
    current: ThemePreference,
    store: Rc<dyn PreferenceStore>,
    marker: Rc<dyn ThemeMarker>,
}

pub type ThemeContext = UseReducerHandle<ThemeState>;

/// Persisted choice first, then the host colour scheme, then light.
pub fn initial_preference(
    store: &dyn PreferenceStore,
    query: &dyn ColorSchemeQuery,
) -> ThemePreference {
    match store.load() {
        Ok(Some(saved)) => match ThemePreference::parse(&saved) {
            Some(theme) => return theme,
            None => log::warn!("Ignoring unknown stored theme {:?}", saved),
        },
        Ok(None) => {}
        Err(e) => log::warn!("Theme preference not readable, using defaults: {}", e),
    }

    match query.prefers_dark() {
        Some(true) => ThemePreference::Dark,
        Some(false) => ThemePreference::Light,
        None => ThemePreference::default(),
    }
}

impl ThemeState {
    pub fn resolve(
        store: Rc<dyn PreferenceStore>,
        query: &dyn ColorSchemeQuery,
        marker: Rc<dyn ThemeMarker>,
    ) -> Self {
        let current = initial_preference(store.as_ref(), query);
        let state = Self { current, store, marker };
        state.commit();
        state
    }

    pub fn current(&self) -> ThemePreference {
        self.current
    }

    pub fn is_dark(&self) -> bool {
        self.current().is_dark()
    }

    fn commit(&self) {
        if let Err(e) = self.store.save(self.current.as_str()) {
            log::warn!("Theme kept in memory only: {}", e);
        }
        self.marker.apply(self.current);
    }

    fn with_theme(&self, next: ThemePreference) -> Self {
        let state = Self {
            current: next,
            store: self.store.clone(),
            marker: self.marker.clone(),
        };
        state.commit();
        state
    }
}

impl PartialEq for ThemeState {
    fn eq(&self, other: &Self) -> bool {
        self.current == other.current
    }
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            ThemeAction::Toggle => self.current.toggled(),
            ThemeAction::Set(theme) => theme,
        };
        log::info!("Theme set to {}", next.as_str());
        Rc::new(self.with_theme(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::preference::StorageError;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MemoryStore {
        value: RefCell<Option<String>>,
    }

    impl MemoryStore {
        fn holding(value: &str) -> Self {
            Self { value: RefCell::new(Some(value.to_string())) }
        }

        fn value(&self) -> Option<String> {
            self.value.borrow().clone()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Ok(self.value.borrow().clone())
        }

        fn save(&self, value: &str) -> Result<(), StorageError> {
            *self.value.borrow_mut() = Some(value.to_string());
            Ok(())
        }
    }

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn load(&self) -> Result<Option<String>, StorageError> {
            Err(StorageError::Access("SecurityError".into()))
        }

        fn save(&self, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    struct Scheme(Option<bool>);

    impl ColorSchemeQuery for Scheme {
        fn prefers_dark(&self) -> Option<bool> {
            self.0
        }
    }

    #[derive(Default)]
    struct RecordingMarker {
        applied: RefCell<Vec<ThemePreference>>,
    }

    impl ThemeMarker for RecordingMarker {
        fn apply(&self, theme: ThemePreference) {
            self.applied.borrow_mut().push(theme);
        }
    }

    fn provider(store: Rc<MemoryStore>, scheme: Option<bool>) -> Rc<ThemeState> {
        Rc::new(ThemeState::resolve(store, &Scheme(scheme), Rc::new(RecordingMarker::default())))
    }

    #[test]
    fn os_dark_preference_used_without_stored_choice() {
        let state = provider(Rc::new(MemoryStore::default()), Some(true));
        assert_eq!(state.current(), ThemePreference::Dark);
    }

    #[test]
    fn stored_choice_beats_os_preference() {
        let state = provider(Rc::new(MemoryStore::holding("light")), Some(true));
        assert_eq!(state.current(), ThemePreference::Light);
    }

    #[test]
    fn defaults_to_light_when_nothing_is_known() {
        let state = provider(Rc::new(MemoryStore::default()), None);
        assert_eq!(state.current(), ThemePreference::Light);
    }

    #[test]
    fn unknown_stored_value_falls_through_to_os() {
        let state = provider(Rc::new(MemoryStore::holding("purple")), Some(true));
        assert_eq!(state.current(), ThemePreference::Dark);
    }

    #[test]
    fn three_toggles_from_light_end_dark_and_persisted() {
        let store = Rc::new(MemoryStore::default());
        let mut state = provider(store.clone(), Some(false));
        for _ in 0..3 {
            state = state.reduce(ThemeAction::Toggle);
        }
        assert_eq!(state.current(), ThemePreference::Dark);
        assert_eq!(store.value().as_deref(), Some("dark"));
    }

    #[test]
    fn persisted_value_tracks_toggle_parity_and_survives_reload() {
        for n in 0..8 {
            let store = Rc::new(MemoryStore::default());
            let mut state = provider(store.clone(), None);
            for _ in 0..n {
                state = state.reduce(ThemeAction::Toggle);
            }
            let expected = if n % 2 == 0 { "light" } else { "dark" };
            assert_eq!(store.value().as_deref(), Some(expected), "after {n} toggles");

            // the OS answer must not matter once something is stored
            let reloaded = provider(store.clone(), Some(n % 2 == 0));
            assert_eq!(reloaded.current(), state.current());
        }
    }

    #[test]
    fn marker_follows_every_change() {
        let marker = Rc::new(RecordingMarker::default());
        let state = Rc::new(ThemeState::resolve(
            Rc::new(MemoryStore::default()),
            &Scheme(None),
            marker.clone(),
        ));
        let state = state.reduce(ThemeAction::Toggle);
        let _ = state.reduce(ThemeAction::Set(ThemePreference::Dark));
        assert_eq!(
            *marker.applied.borrow(),
            vec![ThemePreference::Light, ThemePreference::Dark, ThemePreference::Dark]
        );
    }

    #[test]
    fn broken_storage_keeps_working_in_memory() {
        let state = Rc::new(ThemeState::resolve(
            Rc::new(BrokenStore),
            &Scheme(Some(true)),
            Rc::new(RecordingMarker::default()),
        ));
        assert_eq!(state.current(), ThemePreference::Dark);
        let state = state.reduce(ThemeAction::Toggle);
        assert_eq!(state.current(), ThemePreference::Light);
    }
}
