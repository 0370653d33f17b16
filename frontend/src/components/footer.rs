use yew::prelude::*;

use crate::browser::scroll_to_section;
use crate::config::COMPANY_NAME;
use crate::content::{ADDRESS, EMAIL, FOOTER_SERVICES, PHONE, PHONE_HREF, QUICK_LINKS, SOCIAL_LINKS};
use crate::theme::provider::use_theme;

#[function_component(Footer)]
pub fn footer() -> Html {
    let theme = use_theme();
    let dark = theme.is_dark();
    let muted = if dark { "text-gray-400" } else { "text-gray-600" };
    let link = if dark { "text-gray-400 hover:text-white" } else { "text-gray-600 hover:text-gray-800" };

    html! {
        <footer class={classes!("transition-colors", "duration-300", "text-white",
            if dark { "bg-gray-900" } else { "bg-gradient-to-br from-blue-600 via-blue-700 to-blue-800" })}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="py-16 grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div class="lg:col-span-1">
                        <div class="flex items-center space-x-2 mb-6">
                            <span class="text-3xl text-blue-400" aria-hidden="true">{"🤖"}</span>
                            <span class="text-xl font-bold">{ COMPANY_NAME }</span>
                        </div>
                        <p class={classes!("mb-6", "leading-relaxed", muted)}>
                            {"G'oyalarni zamonaviy texnologiyalar va innovatsion yechimlar bilan raqamli haqiqatga aylantiramiz. \
                              Veb dasturlash, mobil ilovalar va avtomatlashtirish sohasidagi ishonchli hamkoringiz."}
                        </p>
                        <div class="flex space-x-4">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <a
                                    key={social.label}
                                    href={social.href}
                                    aria-label={social.label}
                                    class={classes!("p-3", "rounded-full", "hover:bg-blue-600", "transition-all", "duration-300", "transform", "hover:scale-110",
                                        if dark { "bg-gray-800" } else { "bg-gray-200" })}
                                >
                                    <span class="inline-block w-5 h-5 text-center leading-5 font-bold">{ social.glyph }</span>
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-6">{"Tezkor Havolalar"}</h3>
                        <ul class="space-y-3">
                            { for QUICK_LINKS.iter().map(|quick| {
                                let id = quick.id;
                                html! {
                                    <li key={id}>
                                        <button
                                            onclick={Callback::from(move |_: MouseEvent| scroll_to_section(id))}
                                            class={classes!("transition-colors", "duration-300", "hover:translate-x-1", "transform", "inline-block", link)}
                                        >
                                            { quick.label }
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-6">{"Bizning Xizmatlarimiz"}</h3>
                        <ul class="space-y-3">
                            { for FOOTER_SERVICES.iter().map(|service| html! {
                                <li key={*service}>
                                    <span class={classes!("transition-colors", "duration-300", "cursor-pointer", "hover:translate-x-1", "transform", "inline-block", link)}>
                                        { *service }
                                    </span>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-lg font-semibold mb-6">{"Aloqa Ma'lumotlari"}</h3>
                        <div class="space-y-4">
                            <div class="flex items-start space-x-3">
                                <span class="text-blue-400" aria-hidden="true">{"📍"}</span>
                                <p class={muted}>{ ADDRESS }</p>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-blue-400" aria-hidden="true">{"📞"}</span>
                                <a href={PHONE_HREF} class={classes!("transition-colors", "duration-300", link)}>{ PHONE }</a>
                            </div>
                            <div class="flex items-center space-x-3">
                                <span class="text-blue-400" aria-hidden="true">{"✉"}</span>
                                <a href={format!("mailto:{}", EMAIL)} class={classes!("transition-colors", "duration-300", link)}>{ EMAIL }</a>
                            </div>
                        </div>

                        <div class="mt-8">
                            <h4 class="font-semibold mb-3">{"Yangilanib Turing"}</h4>
                            <div class="flex">
                                <input
                                    type="email"
                                    placeholder="Sizning emailingiz"
                                    class={classes!("flex-1", "px-4", "py-2", "rounded-l-lg", "focus:outline-none", "focus:border-blue-500", "transition-colors", "duration-300",
                                        if dark { "bg-gray-800 border-gray-700 text-white placeholder-gray-400" } else { "bg-white border-gray-300 text-gray-900 placeholder-gray-500" })}
                                />
                                <button class="bg-blue-600 px-4 py-2 rounded-r-lg hover:bg-blue-700 transition-colors duration-300" aria-label="Obuna bo'lish">
                                    {"✉"}
                                </button>
                            </div>
                        </div>
                    </div>
                </div>

                <div class={classes!("border-t", "py-8", if dark { "border-gray-800" } else { "border-gray-300" })}>
                    <div class="flex flex-col md:flex-row justify-between items-center space-y-4 md:space-y-0">
                        <div class={muted}>
                            {"© 2024 Supplier IT. All rights reserved. | supplier.uz"}
                        </div>
                        <div class={classes!("flex", "space-x-6", muted)}>
                            { for ["Maxfiylik Siyosati", "Xizmat Shartlari", "Sayt Xaritasi"].into_iter().map(|label| html! {
                                <a href="#" class={classes!("transition-colors", "duration-300", if dark { "hover:text-white" } else { "hover:text-gray-800" })}>
                                    { label }
                                </a>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </footer>
    }
}
