use yew::prelude::*;
use yew_router::prelude::*;

use crate::theme::classes::TextColors;
use crate::theme::provider::use_theme;
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());

    html! {
        <div class={classes!("min-h-screen", "flex", "items-center", "justify-center", "px-4",
            if theme.is_dark() { "bg-gray-900" } else { "bg-white" })}>
            <div class="text-center">
                <h1 class="text-6xl font-bold text-blue-600 mb-4">{"404"}</h1>
                <p class={classes!("text-lg", "mb-8", colors.secondary)}>{"Sahifa topilmadi"}</p>
                <Link<Route> to={Route::Home} classes="bg-blue-600 text-white px-8 py-3 rounded-full font-semibold hover:bg-blue-700 transition-colors duration-300">
                    {"Bosh sahifaga qaytish"}
                </Link<Route>>
            </div>
        </div>
    }
}
