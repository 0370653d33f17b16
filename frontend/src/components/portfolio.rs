use yew::prelude::*;

use crate::components::optimized_image::OptimizedImage;
use crate::content::{Project, ProjectCategory, PROJECTS};
use crate::motion::visibility::{use_in_view, InViewOptions};
use crate::theme::classes::{section_background, TextColors, ThemeClasses};
use crate::theme::provider::use_theme;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectFilter {
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    pub const ALL: [(ProjectFilter, &'static str); 4] = [
        (ProjectFilter::All, "Barcha Loyihalar"),
        (ProjectFilter::Only(ProjectCategory::Web), "Veb Dasturlash"),
        (ProjectFilter::Only(ProjectCategory::Mobile), "Mobil Ilovalar"),
        (ProjectFilter::Only(ProjectCategory::Bot), "Telegram Botlar"),
    ];
}

pub fn filter_projects(projects: &'static [Project], filter: ProjectFilter) -> Vec<&'static Project> {
    projects
        .iter()
        .filter(|project| match filter {
            ProjectFilter::All => true,
            ProjectFilter::Only(category) => project.category == category,
        })
        .collect()
}

#[function_component(Portfolio)]
pub fn portfolio() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let palette = ThemeClasses::for_theme(theme.is_dark());
    let active = use_state_eq(|| ProjectFilter::All);
    let section_ref = use_node_ref();
    let visible = use_in_view(section_ref.clone(), InViewOptions::section());

    html! {
        <section
            id="portfolio"
            ref={section_ref}
            class={classes!("py-20", "reveal", visible.then(|| "is-visible"), section_background(theme.is_dark()))}
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-16">
                    <h2 class={classes!("text-3xl", "sm:text-4xl", "font-bold", "mb-4", colors.primary)}>
                        {"Bizning Portfolio"}
                    </h2>
                    <p class={classes!("text-lg", "max-w-3xl", "mx-auto", "mb-8", colors.secondary)}>
                        {"Eng so'nggi loyihalarimizni o'rganing va bizneslarning raqamli maqsadlariga erishishda qanday yordam berganimizni ko'ring."}
                    </p>

                    <div class="flex flex-wrap justify-center gap-4">
                        { for ProjectFilter::ALL.iter().map(|(filter, label)| {
                            let selected = *active == *filter;
                            let onclick = {
                                let active = active.clone();
                                let filter = *filter;
                                Callback::from(move |_: MouseEvent| active.set(filter))
                            };
                            html! {
                                <button
                                    {onclick}
                                    class={classes!(
                                        "px-6", "py-3", "rounded-full", "font-medium", "transition-all", "duration-300",
                                        if selected {
                                            "bg-blue-600 text-white shadow-lg transform scale-105"
                                        } else {
                                            "bg-white text-gray-600 hover:bg-blue-50 hover:text-blue-600 shadow-md"
                                        },
                                    )}
                                >
                                    { *label }
                                </button>
                            }
                        }) }
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    { for filter_projects(PROJECTS, *active).into_iter().enumerate().map(|(index, project)| html! {
                        <div
                            key={project.id}
                            class={classes!("group", "rounded-2xl", "overflow-hidden", "shadow-lg", "hover:shadow-2xl", "transition-all", "duration-500", "transform", "hover:scale-105", palette.surface)}
                            style={format!("animation-delay: {:.1}s", index as f64 * 0.1)}
                        >
                            <div class="relative overflow-hidden">
                                <OptimizedImage
                                    src={project.image}
                                    alt={project.title}
                                    class="w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500"
                                />
                                <div class="absolute inset-0 bg-blue-600/80 opacity-0 group-hover:opacity-100 transition-opacity duration-300 flex items-center justify-center space-x-4">
                                    <a href={project.live_url} class="bg-white text-blue-600 p-3 rounded-full hover:bg-blue-50" aria-label="Ko'rish">{"↗"}</a>
                                    <a href={project.github_url} class="bg-white text-blue-600 p-3 rounded-full hover:bg-blue-50" aria-label="GitHub">{"⌥"}</a>
                                </div>
                            </div>
                            <div class="p-6">
                                <h3 class={classes!("text-xl", "font-bold", "mb-2", "group-hover:text-blue-600", "transition-colors", "duration-300", colors.primary)}>
                                    { project.title }
                                </h3>
                                <p class={classes!("mb-4", colors.secondary)}>{ project.description }</p>
                                <div class="flex flex-wrap gap-2">
                                    { for project.technologies.iter().map(|tech| html! {
                                        <span class="px-3 py-1 bg-blue-100 text-blue-700 text-sm rounded-full font-medium">{ *tech }</span>
                                    }) }
                                </div>
                            </div>
                        </div>
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
    fn all_filter_keeps_every_project_in_order() {
        let ids: Vec<u32> = filter_projects(PROJECTS, ProjectFilter::All).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn category_filter_selects_matching_projects() {
        let bots: Vec<u32> = filter_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::Bot))
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(bots, vec![3, 6]);
        assert_eq!(filter_projects(PROJECTS, ProjectFilter::Only(ProjectCategory::Web)).len(), 2);
    }
}
