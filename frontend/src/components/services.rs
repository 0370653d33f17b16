use yew::prelude::*;

use crate::content::{Accent, SERVICES};
use crate::motion::visibility::{use_in_view, InViewOptions};
use crate::theme::classes::TextColors;
use crate::theme::provider::use_theme;

pub struct AccentClasses {
    pub bg: String,
    pub text: String,
    pub icon: String,
    pub border: String,
}

pub fn accent_classes(accent: Accent, hovered: bool) -> AccentClasses {
    let c = accent.name();
    AccentClasses {
        bg: if hovered { format!("bg-{}-500", c) } else { format!("bg-{}-50", c) },
        text: if hovered { "text-white".to_string() } else { format!("text-{}-600", c) },
        icon: if hovered { "text-white".to_string() } else { format!("text-{}-500", c) },
        border: format!("border-{}-200 hover:border-{}-500", c, c),
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let hovered = use_state_eq(|| None::<usize>);
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), InViewOptions::section());

    html! {
        <section
            id="services"
            ref={section_ref}
            class={classes!("py-20", "reveal", visible.then(|| "is-visible"), if theme.is_dark() { "bg-gray-900" } else { "bg-white" })}
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "sm:text-4xl", "font-bold", "mb-4", colors.primary)}>
                        {"Bizning Xizmatlarimiz"}
                    </h2>
                    <p class={classes!("text-lg", "max-w-3xl", "mx-auto", colors.secondary)}>
                        {"Biznesingizni zamonaviy dunyoda rivojlantirishga yordam beradigan keng qamrovli raqamli yechimlarni taklif etamiz."}
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for SERVICES.iter().enumerate().map(|(index, service)| {
                        let is_hovered = *hovered == Some(index);
                        let accent = accent_classes(service.accent, is_hovered);
                        let onmouseenter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(index)))
                        };
                        let onmouseleave = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(None))
                        };
                        html! {
                            <div
                                key={index}
                                class={classes!(
                                    "relative", "overflow-hidden", "rounded-2xl", "border-2", "transition-all", "duration-500",
                                    "transform", "hover:scale-105", "hover:shadow-xl", "cursor-pointer",
                                    accent.border, accent.bg,
                                )}
                                {onmouseenter}
                                {onmouseleave}
                            >
                                <div class="p-8">
                                    <span class={classes!("block", "text-5xl", "mb-6", accent.icon)} aria-hidden="true">{ service.icon }</span>
                                    <h3 class={classes!("text-xl", "font-bold", "mb-4", "transition-colors", "duration-300", accent.text)}>
                                        { service.title }
                                    </h3>
                                    <p class={classes!("mb-6", if is_hovered { "text-white/90" } else { "text-gray-600" })}>
                                        { service.description }
                                    </p>
                                    <ul class="space-y-2">
                                        { for service.features.iter().map(|feature| html! {
                                            <li class={classes!("flex", "items-center", "text-sm", if is_hovered { "text-white/80" } else { "text-gray-500" })}>
                                                <div class={classes!("w-2", "h-2", "rounded-full", "mr-3", if is_hovered { "bg-white/60" } else { "bg-gray-400" })}></div>
                                                { *feature }
                                            </li>
                                        }) }
                                    </ul>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_swaps_to_solid_accent() {
        let idle = accent_classes(Accent::Purple, false);
        let hover = accent_classes(Accent::Purple, true);
        assert_eq!(idle.bg, "bg-purple-50");
        assert_eq!(hover.bg, "bg-purple-500");
        assert_eq!(hover.text, "text-white");
        assert_eq!(idle.border, hover.border);
    }
}
