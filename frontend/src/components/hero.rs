use yew::prelude::*;

use crate::browser;
use crate::content::HERO_PHRASES;
use crate::motion::offscreen::use_pause_offscreen;
use crate::motion::typewriter::use_typewriter;

const PARTICLES: usize = 24;

/// Spread of background dots. Deterministic so re-renders don't reshuffle them.
fn particle_style(index: usize) -> String {
    let golden = 0.618_033_988_75_f64;
    let left = ((index as f64 * golden) % 1.0) * 100.0;
    let top = ((index as f64 * golden * golden + 0.37) % 1.0) * 100.0;
    let delay = (index % 5) as f64;
    let duration = 3.0 + (index % 3) as f64 * 0.7;
    format!(
        "left: {:.1}%; top: {:.1}%; animation-delay: {:.1}s; animation-duration: {:.1}s;",
        left, top, delay, duration
    )
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let typed = use_typewriter(HERO_PHRASES);
    let section = use_node_ref();
    use_pause_offscreen(section.clone());

    let to_about = Callback::from(|_: MouseEvent| browser::scroll_to_section("about"));
    let to_portfolio = Callback::from(|_: MouseEvent| browser::scroll_to_section("portfolio"));

    html! {
        <section ref={section} id="hero" class="relative min-h-screen flex items-center justify-center overflow-hidden bg-gradient-to-br from-blue-600 via-blue-700 to-blue-800">
            <div class="absolute inset-0" aria-hidden="true">
                { for (0..PARTICLES).map(|i| html! {
                    <div key={i} class="absolute w-2 h-2 bg-white/10 rounded-full animate-pulse" style={particle_style(i)}></div>
                }) }
            </div>

            <div class="relative z-10 text-center px-4 sm:px-6 lg:px-8 max-w-4xl mx-auto">
                <div class="mb-4 md:mb-8 animate-fade-in-up">
                    <span class="hero-bot animate-bounce">{"🤖"}</span>
                </div>

                <h1 class="text-4xl sm:text-6xl lg:text-7xl font-bold text-white mb-6 animate-fade-in-up">
                    {"Biz Yaratamiz"}
                </h1>

                <div class="h-20 sm:h-24 flex items-center justify-center mb-8">
                    <span class="text-2xl sm:text-4xl lg:text-5xl font-bold text-blue-200" aria-live="polite">
                        { typed }
                        <span class="animate-pulse">{"|"}</span>
                    </span>
                </div>

                <p class="text-lg sm:text-xl text-blue-100 mb-12 max-w-2xl mx-auto">
                    {"G'oyalarni zamonaviy texnologiyalar va innovatsion yechimlar bilan raqamli haqiqatga aylantiramiz."}
                </p>

                <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                    <button onclick={to_about.clone()} class="bg-white text-blue-600 px-8 py-4 rounded-full font-semibold hover:bg-blue-50 transition-all duration-300 transform hover:scale-105 shadow-xl">
                        {"Boshlash"}
                    </button>
                    <button onclick={to_portfolio} class="border-2 border-white text-white px-8 py-4 rounded-full font-semibold hover:bg-white hover:text-blue-600 transition-all duration-300 transform hover:scale-105">
                        {"Portfolio ko'rish"}
                    </button>
                </div>

                <div class="mt-16 grid grid-cols-1 sm:grid-cols-3 gap-8">
                    { for [("💻", "Veb Dasturlash"), ("📱", "Mobil Ilovalar"), ("🤖", "Telegram Botlar")].iter().map(|(icon, label)| html! {
                        <div class="flex flex-col items-center text-white/90">
                            <span class="text-3xl mb-2" aria-hidden="true">{ *icon }</span>
                            <span class="text-sm">{ *label }</span>
                        </div>
                    }) }
                </div>
            </div>

            <button
                onclick={to_about}
                class="absolute bottom-8 left-1/2 transform -translate-x-1/2 text-white text-3xl animate-bounce cursor-pointer"
                aria-label="Pastga"
            >
                {"⌄"}
            </button>
            <style>
                {r#"
                    .hero-bot {
                        display: inline-block;
                        font-size: 4.5rem;
                        line-height: 1;
                    }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particles_stay_inside_the_hero() {
        for i in 0..PARTICLES {
            let style = particle_style(i);
            let left: f64 = style
                .trim_start_matches("left: ")
                .split('%')
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap();
            assert!((0.0..=100.0).contains(&left), "{style}");
        }
        assert_eq!(particle_style(3), particle_style(3));
    }
}
