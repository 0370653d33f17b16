#[cfg(debug_assertions)]
pub fn get_site_url() -> &'static str {
    "http://localhost:8080/"  // trunk serve
}

#[cfg(not(debug_assertions))]
pub fn get_site_url() -> &'static str {
    "https://supplier.uz/"
}

pub const COMPANY_NAME: &str = "Supplier IT";

/// localStorage key holding "light" or "dark".
pub const THEME_STORAGE_KEY: &str = "theme";

pub const LOADING_SCREEN_MS: u32 = 800;

pub const SECTION_VISIBILITY_THRESHOLD: f64 = 0.3;
pub const IMAGE_VISIBILITY_THRESHOLD: f64 = 0.1;
pub const IMAGE_ROOT_MARGIN: &str = "50px";

pub const HEADER_SCROLLED_AFTER: f64 = 50.0;
pub const ACTIVE_SECTION_OFFSET: f64 = 100.0;

pub const STATS_COUNT_UP_MS: u32 = 2000;
pub const STATS_COUNT_UP_STEPS: u32 = 60;

pub const CONTACT_SUBMIT_DELAY_MS: u32 = 2000;
pub const CONTACT_SUCCESS_MS: u32 = 5000;
