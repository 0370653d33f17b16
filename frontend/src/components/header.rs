use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use yew::prelude::*;

use crate::browser;
use crate::config;
use crate::content::NAV_LINKS;
use crate::motion::active_section::{active_section, FrameGate, SectionBounds};
use crate::theme::classes::TextColors;
use crate::theme::provider::use_theme;
use crate::theme::toggle::ThemeToggle;

fn measure_sections() -> Vec<SectionBounds> {
    NAV_LINKS
        .iter()
        .filter_map(|link| {
            browser::section_bounds(link.id).map(|(top, height)| SectionBounds { id: link.id, top, height })
        })
        .collect()
}

#[function_component(Header)]
pub fn header() -> Html {
    let theme = use_theme();
    let colors = TextColors::for_theme(theme.is_dark());
    let is_scrolled = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);
    let active = use_state_eq(|| "hero");

    {
        let is_scrolled = is_scrolled.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let gate = FrameGate::new();
                let alive = Rc::new(Cell::new(true));
                let previous = Rc::new(Cell::new("hero"));

                let on_scroll = {
                    let alive = alive.clone();
                    Closure::wrap(Box::new(move || {
                        is_scrolled.set(browser::scroll_y() > config::HEADER_SCROLLED_AFTER);
                        if !gate.try_arm() {
                            return;
                        }
                        let gate = gate.clone();
                        let alive = alive.clone();
                        let previous = previous.clone();
                        let active = active.clone();
                        let frame = Closure::once_into_js(move || {
                            gate.release();
                            if !alive.get() {
                                return;
                            }
                            let current = active_section(
                                &measure_sections(),
                                browser::scroll_y(),
                                config::ACTIVE_SECTION_OFFSET,
                                previous.get(),
                            );
                            previous.set(current);
                            active.set(current);
                        });
                        if let Some(window) = web_sys::window() {
                            if window.request_animation_frame(frame.unchecked_ref()).is_err() {
                                log::warn!("requestAnimationFrame unavailable");
                            }
                        }
                    }) as Box<dyn FnMut()>)
                };

                if let Some(window) = &window {
                    if let Err(e) =
                        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
                    {
                        log::warn!("Could not listen for scroll: {:?}", e);
                    }
                }

                move || {
                    alive.set(false);
                    if let Some(window) = window {
                        let _ = window
                            .remove_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
                    }
                }
            },
            (),
        );
    }

    let nav_to = {
        let menu_open = menu_open.clone();
        move |id: &'static str| {
            let menu_open = menu_open.clone();
            Callback::from(move |_: MouseEvent| {
                browser::scroll_to_section(id);
                menu_open.set(false);
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let surface = match (*is_scrolled, theme.is_dark()) {
        (false, _) => "bg-transparent",
        (true, true) => "bg-gray-900/95 backdrop-blur-md shadow-lg",
        (true, false) => "bg-white/95 backdrop-blur-md shadow-lg",
    };

    let nav_button = |id: &'static str, label: &'static str, mobile: bool| {
        let is_active = *active == id;
        let class = if id == "contact" && !mobile {
            classes!("bg-blue-600", "text-white", "px-6", "py-2", "rounded-full", "hover:bg-blue-700", "font-medium")
        } else {
            classes!(
                "nav-link",
                "font-medium",
                "transition-colors",
                "duration-200",
                mobile.then(|| "text-left px-4 py-2"),
                if is_active { "text-blue-600 active" } else { colors.secondary },
            )
        };
        html! {
            <button class={class} onclick={nav_to(id)} aria-current={is_active.then(|| "true")}>
                { label }
            </button>
        }
    };

    html! {
        <header class={classes!("fixed", "top-0", "left-0", "right-0", "z-50", "transition-all", "duration-300", surface)}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center py-4">
                    <div class="flex items-center space-x-2 cursor-pointer" onclick={nav_to("hero")}>
                        <span class="text-2xl" aria-hidden="true">{"🤖"}</span>
                        <span class={classes!("text-xl", "font-bold", colors.primary)}>{ config::COMPANY_NAME }</span>
                    </div>

                    <nav class="hidden md:flex items-center space-x-8">
                        { for NAV_LINKS.iter().map(|link| nav_button(link.id, link.label, false)) }
                        <ThemeToggle />
                    </nav>

                    <div class="md:hidden flex items-center space-x-3">
                        <ThemeToggle />
                        <button
                            class={classes!("p-2", colors.primary)}
                            onclick={toggle_menu}
                            aria-label="Menyu"
                            aria-expanded={(*menu_open).to_string()}
                        >
                            { if *menu_open { "✕" } else { "☰" } }
                        </button>
                    </div>
                </div>

                if *menu_open {
                    <div class={classes!(
                        "md:hidden", "border-t", "py-4", "mobile-menu",
                        if theme.is_dark() { "bg-gray-900 border-gray-700" } else { "bg-white border-gray-200" },
                    )}>
                        <nav class="flex flex-col space-y-4">
                            { for NAV_LINKS.iter().map(|link| nav_button(link.id, link.label, true)) }
                        </nav>
                    </div>
                }
            </div>
            <style>
                {r#"
                    .nav-link.active {
                        position: relative;
                    }
                    .nav-link.active::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: -6px;
                        height: 2px;
                        border-radius: 1px;
                        background: #2563eb;
                    }
                    .mobile-menu {
                        animation: fadeIn 0.2s ease-out;
                    }
                "#}
            </style>
        </header>
    }
}
