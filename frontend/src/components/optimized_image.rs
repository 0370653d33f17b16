use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Element, HtmlImageElement};
use yew::prelude::*;

use crate::browser;
use crate::motion::visibility::{use_in_view, InViewOptions};

pub const BREAKPOINTS: [u32; 5] = [480, 768, 1024, 1200, 1920];
pub const DEFAULT_QUALITY: u32 = 80;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Webp,
}

impl ImageFormat {
    fn extension(self) -> &'static str {
        match self {
            ImageFormat::Avif => "avif",
            ImageFormat::Webp => "webp",
        }
    }

    fn mime(self) -> &'static str {
        match self {
            ImageFormat::Avif => "image/avif",
            ImageFormat::Webp => "image/webp",
        }
    }
}

/// Swaps a trailing `.jpg`, `.jpeg` or `.png` (any case) for the format's
/// extension. Anything else, including URLs with a query string, is returned as is.
pub fn optimized_src(src: &str, format: ImageFormat) -> String {
    let Some((stem, ext)) = src.rsplit_once('.') else {
        return src.to_string();
    };
    if stem.is_empty() || ext.contains('/') {
        return src.to_string();
    }
    match ext.to_ascii_lowercase().as_str() {
        "jpg" | "jpeg" | "png" => format!("{}.{}", stem, format.extension()),
        _ => src.to_string(),
    }
}

/// Density descriptors for every breakpoint up to twice the rendered width.
/// Without a width the bare optimized source is used.
pub fn srcset(src: &str, format: ImageFormat, width: Option<u32>, quality: u32) -> String {
    let optimized = optimized_src(src, format);
    let Some(width) = width.filter(|w| *w > 0) else {
        return optimized;
    };
    BREAKPOINTS
        .iter()
        .filter(|bp| **bp <= width * 2)
        .map(|bp| format!("{}?w={}&q={} {}x", optimized, bp, quality, *bp as f64 / width as f64))
        .collect::<Vec<_>>()
        .join(", ")
}

fn box_style(width: Option<u32>, height: Option<u32>) -> Option<String> {
    let mut style = String::new();
    if let Some(w) = width {
        style.push_str(&format!("width: {}px;", w));
    }
    if let Some(h) = height {
        style.push_str(&format!("height: {}px;", h));
    }
    (!style.is_empty()).then_some(style)
}

#[derive(Properties, PartialEq)]
pub struct OptimizedImageProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub width: Option<u32>,
    #[prop_or_default]
    pub height: Option<u32>,
    #[prop_or(DEFAULT_QUALITY)]
    pub quality: u32,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub sizes: Option<AttrValue>,
    /// Above-the-fold images skip the viewport wait.
    #[prop_or_default]
    pub priority: bool,
}

#[function_component(OptimizedImage)]
pub fn optimized_image(props: &OptimizedImageProps) -> Html {
    let node = use_node_ref();
    let seen = use_in_view(node.clone(), InViewOptions::image());
    let loaded = use_state_eq(|| false);
    let failed = use_state_eq(|| false);
    let in_view = props.priority || seen;
    let style = box_style(props.width, props.height);

    if *failed {
        return html! {
            <div
                class={classes!(props.class.clone(), "bg-gray-100", "border-2", "border-dashed", "border-gray-300", "flex", "items-center", "justify-center")}
                style={style}
                aria-label="Rasm yuklanmadi"
            >
                <span class="text-gray-500 text-sm">{"Rasm yuklanmadi"}</span>
            </div>
        };
    }

    if !in_view {
        return html! {
            <div ref={node} class={props.class.clone()} style={style.clone()} aria-label={props.alt.clone()}>
                if let Some(placeholder) = props.placeholder.clone() {
                    <img src={placeholder} alt="" aria-hidden="true" class={classes!(props.class.clone(), "blur-sm")} style={style.clone()} />
                } else {
                    <div
                        class={classes!(props.class.clone(), "bg-gray-200", "animate-pulse", "flex", "items-center", "justify-center")}
                        style={style.clone()}
                        aria-label="Rasm yuklanmoqda"
                    >
                        <span class="text-3xl text-gray-400" aria-hidden="true">{"🖼"}</span>
                    </div>
                }
            </div>
        };
    }

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };
    let onerror = {
        let failed = failed.clone();
        let src = props.src.clone();
        Callback::from(move |_: Event| {
            log::warn!("Image failed to load: {}", src);
            failed.set(true);
        })
    };
    let aspect = match (props.width, props.height) {
        (Some(w), Some(h)) => Some(format!("aspect-ratio: {}/{};", w, h)),
        _ => None,
    };

    html! {
        <picture class={classes!((!*loaded).then_some("animate-pulse"))}>
            { for [ImageFormat::Avif, ImageFormat::Webp].into_iter().map(|format| html! {
                <source
                    srcset={srcset(&props.src, format, props.width, props.quality)}
                    type={format.mime()}
                    sizes={props.sizes.clone()}
                />
            }) }
            <img
                ref={node}
                src={props.src.clone()}
                alt={props.alt.clone()}
                width={props.width.map(|w| w.to_string())}
                height={props.height.map(|h| h.to_string())}
                class={classes!(props.class.clone(), "transition-opacity", "duration-300", if *loaded { "opacity-100" } else { "opacity-0" })}
                loading={if props.priority { "eager" } else { "lazy" }}
                decoding="async"
                sizes={props.sizes.clone()}
                style={aspect}
                {onload}
                {onerror}
            />
        </picture>
    }
}

/// Inline style for a lazily loaded background. The real image replaces the
/// placeholder only once it has finished downloading.
pub fn background_style(src: &str, placeholder: Option<&str>, loaded: bool) -> String {
    let image = if loaded { Some(src) } else { placeholder };
    let mut style = String::new();
    if let Some(url) = image {
        style.push_str(&format!("background-image: url('{}');", url));
    }
    style.push_str(
        "background-size: cover; background-position: center; background-repeat: no-repeat; transition: background-image 0.3s ease-in-out;",
    );
    style
}

#[derive(Properties, PartialEq)]
pub struct LazyBackgroundImageProps {
    pub src: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
}

/// A container whose background image is fetched once it nears the viewport.
#[function_component(LazyBackgroundImage)]
pub fn lazy_background_image(props: &LazyBackgroundImageProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), InViewOptions::image());
    let loaded = use_state_eq(|| false);

    {
        let loaded = loaded.clone();
        use_effect_with_deps(
            move |(in_view, src)| {
                let alive = Rc::new(Cell::new(true));
                let image = if *in_view { fetch_image(src, alive.clone(), move || loaded.set(true)) } else { None };
                move || {
                    alive.set(false);
                    if let Some(image) = image {
                        image.set_onload(None);
                        image.set_onerror(None);
                    }
                }
            },
            (in_view, props.src.clone()),
        );
    }

    html! {
        <div
            ref={node}
            class={classes!(props.class.clone(), (!*loaded).then_some("animate-pulse"))}
            style={background_style(&props.src, props.placeholder.as_deref(), *loaded)}
        >
            { for props.children.iter() }
        </div>
    }
}

/// Starts downloading `src` off-DOM. `on_load` runs only while `alive` holds.
fn fetch_image(src: &str, alive: Rc<Cell<bool>>, on_load: impl FnOnce() + 'static) -> Option<HtmlImageElement> {
    let image = match HtmlImageElement::new() {
        Ok(image) => image,
        Err(e) => {
            log::warn!("Could not create image for {}: {:?}", src, e);
            return None;
        }
    };
    let onload = Closure::once_into_js(move || {
        if alive.get() {
            on_load();
        }
    });
    let onerror = {
        let src = src.to_string();
        Closure::once_into_js(move || log::warn!("Background image failed to load: {}", src))
    };
    image.set_onload(Some(onload.unchecked_ref()));
    image.set_onerror(Some(onerror.unchecked_ref()));
    image.set_src(src);
    Some(image)
}

/// Adds a `<link rel="preload" as="image">` per url not already preloaded.
/// The links this call added are removed on unmount.
#[hook]
pub fn use_image_preload(urls: &'static [&'static str]) {
    use_effect_with_deps(
        |urls| {
            let added: Vec<Element> = urls.iter().filter_map(|url| add_preload_link(url)).collect();
            if !added.is_empty() {
                log::debug!("Preloading {} images", added.len());
            }
            move || added.iter().for_each(Element::remove)
        },
        urls,
    );
}

fn add_preload_link(url: &str) -> Option<Element> {
    let document = browser::document()?;
    let head = document.head()?;
    let selector = format!("link[rel=\"preload\"][href=\"{}\"]", url);
    if document.query_selector(&selector).ok().flatten().is_some() {
        return None;
    }
    let link = document.create_element("link").ok()?;
    for (name, value) in [("rel", "preload"), ("as", "image"), ("href", url)] {
        link.set_attribute(name, value).ok()?;
    }
    head.append_child(&link).ok()?;
    Some(link)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raster_extensions_are_swapped() {
        assert_eq!(optimized_src("/images/team.JPG", ImageFormat::Webp), "/images/team.webp");
        assert_eq!(optimized_src("/images/logo.png", ImageFormat::Avif), "/images/logo.avif");
        assert_eq!(optimized_src("/images/anim.gif", ImageFormat::Webp), "/images/anim.gif");
    }

    #[test]
    fn urls_with_query_or_no_extension_are_untouched() {
        let pexels = "https://images.pexels.com/photos/1/p.jpeg?auto=compress&w=800";
        assert_eq!(optimized_src(pexels, ImageFormat::Avif), pexels);
        assert_eq!(optimized_src("https://cdn.example.uz/img/hero", ImageFormat::Webp), "https://cdn.example.uz/img/hero");
    }

    #[test]
    fn srcset_keeps_breakpoints_up_to_twice_the_width() {
        assert_eq!(
            srcset("/a.jpg", ImageFormat::Webp, Some(400), 80),
            "/a.webp?w=480&q=80 1.2x, /a.webp?w=768&q=80 1.92x"
        );
        let wide = srcset("/a.jpg", ImageFormat::Avif, Some(960), 70);
        assert_eq!(wide.split(", ").count(), 5);
        assert!(wide.ends_with("/a.avif?w=1920&q=70 2x"));
    }

    #[test]
    fn srcset_without_width_is_the_plain_source() {
        assert_eq!(srcset("/a.png", ImageFormat::Avif, None, 80), "/a.avif");
        assert_eq!(srcset("/a.png", ImageFormat::Avif, Some(0), 80), "/a.avif");
        assert_eq!(srcset("/a.png", ImageFormat::Webp, Some(100), 80), "");
    }

    #[test]
    fn background_shows_placeholder_until_loaded() {
        let waiting = background_style("/hero.jpg", Some("/hero-placeholder.jpg"), false);
        assert!(waiting.starts_with("background-image: url('/hero-placeholder.jpg');"));

        let done = background_style("/hero.jpg", Some("/hero-placeholder.jpg"), true);
        assert!(done.starts_with("background-image: url('/hero.jpg');"));

        let bare = background_style("/hero.jpg", None, false);
        assert!(!bare.contains("background-image"));
        assert!(bare.contains("background-size: cover;"));
    }
}
