use yew::prelude::*;

use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::loading_screen::LoadingScreen;
use crate::components::optimized_image::use_image_preload;
use crate::config;
use crate::content::{CRITICAL_IMAGES, FAQ};
use crate::loading::section::{DeferredSection, SectionId};
use crate::motion::preferences::apply_reduced_motion;
use crate::motion::scheduler::{BrowserScheduler, Scheduler};
use crate::seo::meta::SeoMeta;
use crate::seo::optimizer::{FaqStructuredData, SeoOptimizer};
use crate::theme::provider::use_theme;

#[function_component(Home)]
pub fn home() -> Html {
    let theme = use_theme();
    let loading = use_state_eq(|| true);
    use_image_preload(&CRITICAL_IMAGES);

    {
        let loading = loading.clone();
        use_effect_with_deps(
            move |_| {
                apply_reduced_motion();
                let splash = BrowserScheduler.schedule(config::LOADING_SCREEN_MS, Box::new(move || loading.set(false)));
                move || splash.cancel()
            },
            (),
        );
    }

    if *loading {
        return html! { <LoadingScreen /> };
    }

    html! {
        <div class={classes!("min-h-screen", "transition-colors", "duration-300",
            if theme.is_dark() { "bg-gray-900" } else { "bg-white" })}>
            <SeoOptimizer meta={SeoMeta::home()} />
            <FaqStructuredData faqs={FAQ} />
            <Header />
            <main>
                <Hero />
                { for SectionId::PAGE_ORDER.into_iter().filter(|id| *id != SectionId::Footer).map(|id| html! {
                    <DeferredSection key={id.as_str()} {id} />
                }) }
            </main>
            <DeferredSection id={SectionId::Footer} />
        </div>
    }
}
