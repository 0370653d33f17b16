use yew::prelude::*;

use super::provider::{toggle_theme, use_theme};

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_theme();
    let is_dark = theme.is_dark();

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| toggle_theme(&theme))
    };

    let (label, title) = if is_dark {
        ("Light mode ga o'tish", "Light mode")
    } else {
        ("Dark mode ga o'tish", "Dark mode")
    };

    html! {
        <button
            class={classes!("theme-toggle", is_dark.then(|| "is-dark"))}
            onclick={onclick}
            aria-label={label}
            title={title}
        >
            <span class="theme-toggle-track"></span>
            <span class="theme-toggle-knob">
                { if is_dark { "🌙" } else { "☀️" } }
            </span>
            <style>
                {r#"
                    .theme-toggle {
                        position: relative;
                        width: 3.5rem;
                        height: 2rem;
                        border: none;
                        border-radius: 9999px;
                        cursor: pointer;
                        padding: 0;
                        background: transparent;
                        transition: transform 0.3s ease;
                    }
                    .theme-toggle:hover {
                        transform: scale(1.05);
                    }
                    .theme-toggle-track {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        background: linear-gradient(to right, #fde047, #fb923c);
                        transition: background 0.5s ease;
                    }
                    .theme-toggle.is-dark .theme-toggle-track {
                        background: linear-gradient(to right, #1f2937, #374151);
                    }
                    .theme-toggle-knob {
                        position: absolute;
                        top: 0.25rem;
                        left: 0.25rem;
                        width: 1.5rem;
                        height: 1.5rem;
                        border-radius: 9999px;
                        background: #ffffff;
                        font-size: 0.75rem;
                        line-height: 1.5rem;
                        text-align: center;
                        box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
                        transition: transform 0.5s ease;
                    }
                    .theme-toggle.is-dark .theme-toggle-knob {
                        transform: translateX(1.5rem);
                    }
                "#}
            </style>
        </button>
    }
}
