use chrono::NaiveDate;
use yew::prelude::*;

use crate::components::optimized_image::{LazyBackgroundImage, OptimizedImage};
use crate::content::{BlogPost, POSTS};
use crate::motion::visibility::{use_in_view, InViewOptions};
use crate::theme::classes::{TextColors, ThemeClasses};
use crate::theme::provider::use_theme;

pub fn category_color(category: &str) -> &'static str {
    match category {
        "Veb Dasturlash" => "bg-blue-100 text-blue-700",
        "Mobil Dasturlash" => "bg-green-100 text-green-700",
        "Bot Dasturlash" => "bg-purple-100 text-purple-700",
        "Dizayn" => "bg-pink-100 text-pink-700",
        _ => "bg-gray-100 text-gray-700",
    }
}

/// `2024-01-15` as `15.01.2024`. Unparseable dates are shown as written.
pub fn format_post_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(parsed) => parsed.format("%d.%m.%Y").to_string(),
        Err(e) => {
            log::warn!("Bad post date {}: {}", date, e);
            date.to_string()
        }
    }
}

fn featured(post: &BlogPost, colors: TextColors, surface: &'static str) -> Html {
    html! {
        <article class={classes!("rounded-2xl", "overflow-hidden", "shadow-lg", "hover:shadow-xl", "transition-all", "duration-500", "transform", "hover:scale-105", "group", "cursor-pointer", "h-full", surface)}>
            <LazyBackgroundImage src={post.image} class="relative w-full h-64 overflow-hidden bg-gray-200">
                <span class="sr-only">{ post.title }</span>
                <div class="absolute top-4 left-4">
                    <span class={classes!("px-3", "py-1", "rounded-full", "text-sm", "font-medium", category_color(post.category))}>
                        { post.category }
                    </span>
                </div>
            </LazyBackgroundImage>
            <div class="p-8">
                <h3 class={classes!("text-2xl", "font-bold", "mb-4", "group-hover:text-blue-600", colors.primary)}>{ post.title }</h3>
                <p class={classes!("mb-6", "text-lg", "leading-relaxed", colors.secondary)}>{ post.excerpt }</p>
                <div class="flex items-center justify-between">
                    <div class={classes!("flex", "items-center", "space-x-4", "text-sm", colors.muted)}>
                        <span>{"👤 "}{ post.author }</span>
                        <span>{"📅 "}{ format_post_date(post.date) }</span>
                        <span>{"⏱ "}{ post.read_time }</span>
                    </div>
                    <span class="text-blue-600 group-hover:translate-x-1 transition-transform duration-300">{"→"}</span>
                </div>
            </div>
        </article>
    }
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let surface = ThemeClasses::for_theme(theme.is_dark()).surface;
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), InViewOptions::section());

    let Some((first, rest)) = POSTS.split_first() else {
        return html! {};
    };

    html! {
        <section
            id="blog"
            ref={section_ref}
            class={classes!("py-20", "reveal", visible.then(|| "is-visible"), if theme.is_dark() { "bg-gray-800" } else { "bg-gray-50" })}
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "sm:text-4xl", "font-bold", "mb-4", colors.primary)}>{"So'nggi Ma'lumotlar"}</h2>
                    <p class={classes!("text-lg", "max-w-3xl", "mx-auto", colors.secondary)}>
                        {"Texnologiya va dasturlash dunyosidagi eng so'nggi trendlar, maslahatlar va ma'lumotlar bilan yangilanib turing."}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-8 mb-12">
                    <div class="md:col-span-2 lg:col-span-1">
                        { featured(first, colors, surface) }
                    </div>
                    <div class="space-y-6">
                        { for rest.iter().map(|post| html! {
                            <article key={post.id} class={classes!("rounded-2xl", "overflow-hidden", "shadow-lg", "hover:shadow-xl", "transition-all", "duration-300", "transform", "hover:scale-105", "group", "cursor-pointer", surface)}>
                                <div class="flex">
                                    <div class="relative w-1/3 overflow-hidden">
                                        <OptimizedImage
                                            src={post.image}
                                            alt={post.title}
                                            class="w-full h-32 object-cover group-hover:scale-110 transition-transform duration-500"
                                        />
                                    </div>
                                    <div class="flex-1 p-6">
                                        <div class="mb-2">
                                            <span class={classes!("px-2", "py-1", "rounded-full", "text-xs", "font-medium", category_color(post.category))}>
                                                { post.category }
                                            </span>
                                        </div>
                                        <h3 class={classes!("text-lg", "font-bold", "mb-2", "group-hover:text-blue-600", "line-clamp-2", colors.primary)}>{ post.title }</h3>
                                        <p class={classes!("text-sm", "mb-3", "line-clamp-2", colors.secondary)}>{ post.excerpt }</p>
                                        <div class={classes!("flex", "items-center", "justify-between", "text-xs", colors.muted)}>
                                            <div class="flex items-center space-x-2">
                                                <span>{ post.author }</span>
                                                <span>{"•"}</span>
                                                <span>{ post.read_time }</span>
                                            </div>
                                            <span class="text-blue-600">{"→"}</span>
                                        </div>
                                    </div>
                                </div>
                            </article>
                        }) }
                    </div>
                </div>

                <div class="text-center">
                    <button class="bg-blue-600 text-white px-8 py-4 rounded-full font-semibold hover:bg-blue-700 transition-all duration-300 transform hover:scale-105 shadow-lg">
                        {"Barcha Maqolalarni Ko'rish"}
                    </button>
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_categories_get_their_colour() {
        assert_eq!(category_color("Dizayn"), "bg-pink-100 text-pink-700");
        assert_eq!(category_color("Boshqa"), "bg-gray-100 text-gray-700");
    }

    #[test]
    fn post_dates_are_day_first() {
        assert_eq!(format_post_date("2024-01-05"), "05.01.2024");
        assert_eq!(format_post_date("soon"), "soon");
    }
}
