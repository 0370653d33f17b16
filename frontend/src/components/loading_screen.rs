use yew::prelude::*;

/// Full-viewport splash shown while the page settles.
#[function_component(LoadingScreen)]
pub fn loading_screen() -> Html {
    html! {
        <div class="fixed inset-0 bg-white dark:bg-gray-900 flex items-center justify-center z-50 will-change-transform">
            <div class="text-center" role="status" aria-label="Yuklanmoqda">
                <div class="animate-bounce mb-4 will-change-transform">
                    <span class="block text-6xl text-blue-500 mx-auto" aria-hidden="true">{"🤖"}</span>
                </div>
                <div
                    class="w-32 h-2 bg-gray-200 dark:bg-gray-700 rounded-full overflow-hidden"
                    role="progressbar"
                    aria-valuenow="50"
                    aria-valuemin="0"
                    aria-valuemax="100"
                >
                    <div class="h-full bg-gradient-to-r from-blue-500 to-blue-600 animate-pulse will-change-transform"></div>
                </div>
                <p class="mt-4 text-gray-600 dark:text-gray-300 font-medium" aria-live="polite">
                    {"Supplier IT yuklanmoqda..."}
                </p>
            </div>
        </div>
    }
}
