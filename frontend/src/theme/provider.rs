use std::rc::Rc;

use yew::prelude::*;

use super::browser::{DocumentClassMarker, LocalStorageStore, MediaQueryColorScheme};
use super::state::{ThemeAction, ThemeContext, ThemeState};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let theme = use_reducer(|| {
        ThemeState::resolve(
            Rc::new(LocalStorageStore::new(config::THEME_STORAGE_KEY)),
            &MediaQueryColorScheme,
            Rc::new(DocumentClassMarker),
        )
    });

    html! {
        <ContextProvider<ThemeContext> context={theme}>
            { props.children.clone() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("use_theme must be used within a ThemeProvider")
}

pub fn toggle_theme(theme: &ThemeContext) {
    theme.dispatch(ThemeAction::Toggle);
}
