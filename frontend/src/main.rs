use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod browser;
mod config;
mod content;
mod theme {
    pub mod preference;
    pub mod state;
    pub mod browser;
    pub mod provider;
    pub mod toggle;
    pub mod classes;
}
mod motion {
    pub mod scheduler;
    pub mod count_up;
    pub mod typewriter;
    pub mod visibility;
    pub mod active_section;
    pub mod preferences;
    pub mod offscreen;
}
mod loading {
    pub mod deferred;
    pub mod section;
}
mod seo {
    pub mod meta;
    pub mod optimizer;
}
mod components {
    pub mod header;
    pub mod hero;
    pub mod about;
    pub mod services;
    pub mod portfolio;
    pub mod blog;
    pub mod contact;
    pub mod footer;
    pub mod loading_screen;
    pub mod optimized_image;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use loading::section::SectionRegistry;
use pages::{home::Home, not_found::NotFound};
use theme::provider::ThemeProvider;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Home /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component]
fn App() -> Html {
    let sections = use_memo(|_| SectionRegistry::default(), ());

    html! {
        <ThemeProvider>
            <ContextProvider<SectionRegistry> context={(*sections).clone()}>
                <BrowserRouter>
                    <Switch<Route> render={switch} />
                </BrowserRouter>
            </ContextProvider<SectionRegistry>>
        </ThemeProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(Level::Info) {
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }
    info!("Starting Supplier IT site");

    yew::Renderer::<App>::new().render();
}
