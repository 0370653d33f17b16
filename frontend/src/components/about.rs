use yew::prelude::*;

use crate::config;
use crate::content::{Stat, STATS, TEAM};
use crate::motion::count_up::{use_count_up, CountUp};
use crate::motion::preferences::prefers_reduced_motion;
use crate::motion::visibility::{use_in_view, InViewOptions};
use crate::theme::classes::{ThemeClasses, TextColors};
use crate::theme::provider::use_theme;

#[derive(Properties, PartialEq)]
struct StatCardProps {
    index: usize,
    visible: bool,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let surface = ThemeClasses::for_theme(theme.is_dark()).surface;
    let reduced_motion = use_memo(|_| prefers_reduced_motion(), ());

    let Stat { icon, target, suffix, label } = &STATS[props.index];
    let spec = CountUp::new(*target, config::STATS_COUNT_UP_STEPS, config::STATS_COUNT_UP_MS);
    let counted = use_count_up(spec, props.visible && !*reduced_motion);
    let shown = if *reduced_motion { *target } else { counted };

    html! {
        <div class="text-center group cursor-pointer transform hover:scale-105 transition-all duration-300">
            <div class={classes!("rounded-2xl", "p-6", "shadow-lg", "hover:shadow-xl", "transition-shadow", "duration-300", surface)}>
                <span class="block text-5xl mb-4 group-hover:scale-110 transition-transform duration-300" aria-hidden="true">{ *icon }</span>
                <h3 class={classes!("text-3xl", "font-bold", "mb-2", colors.primary)}>
                    { format!("{}{}", shown, suffix) }
                </h3>
                <p class={colors.secondary}>{ *label }</p>
            </div>
        </div>
    }
}

#[function_component(About)]
pub fn about() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let palette = ThemeClasses::for_theme(theme.is_dark());

    let section_ref = use_node_ref();
    let stats_ref = use_node_ref();
    let section_visible = use_in_view(section_ref.clone(), InViewOptions::section());
    let stats_visible = use_in_view(stats_ref.clone(), InViewOptions::section());

    html! {
        <section
            id="about"
            ref={section_ref}
            class={classes!("py-20", "reveal", section_visible.then(|| "is-visible"), if theme.is_dark() { "bg-gray-800" } else { "bg-gray-50" })}
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "sm:text-4xl", "font-bold", "mb-4", colors.primary)}>
                        {"Supplier IT Haqida"}
                    </h2>
                    <p class={classes!("text-lg", "max-w-3xl", "mx-auto", colors.secondary)}>
                        {"Biz ajoyib raqamli tajribalar yaratishga bag'ishlangan ishtiyoqli dasturchilar va dizaynerlar jamoasimiz. \
                          O'zbekistonda joylashgan bo'lib, butun dunyo bo'ylab mijozlarga innovatsion texnologik yechimlar taqdim etamiz."}
                    </p>
                </div>

                <div ref={stats_ref} class="grid grid-cols-2 lg:grid-cols-4 gap-8 mb-20">
                    { for (0..STATS.len()).map(|index| html! {
                        <StatCard key={index} index={index} visible={stats_visible} />
                    }) }
                </div>

                <div>
                    <h3 class={classes!("text-2xl", "font-bold", "text-center", "mb-12", colors.primary)}>
                        {"Bizning Mutaxassis Jamoamiz"}
                    </h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                        { for TEAM.iter().map(|member| html! {
                            <div key={member.name} class="group cursor-pointer transform hover:scale-105 transition-all duration-300">
                                <div class={classes!("rounded-2xl", "p-6", "shadow-lg", "hover:shadow-xl", "text-center", palette.surface)}>
                                    <div class="relative mb-6">
                                        <img
                                            src={member.image}
                                            alt={member.name}
                                            loading="lazy"
                                            class="w-24 h-24 rounded-full mx-auto object-cover group-hover:scale-110 transition-transform duration-300"
                                        />
                                    </div>
                                    <h4 class={classes!("text-xl", "font-semibold", "mb-2", colors.primary)}>{ member.name }</h4>
                                    <p class="text-blue-600 font-medium mb-2">{ member.role }</p>
                                    <p class={classes!("text-sm", colors.secondary)}>{ member.expertise }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
