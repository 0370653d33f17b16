use serde_json::Value;
use web_sys::{Document, Element};
use yew::prelude::*;

use super::meta::{faq_json_ld, SeoMeta};
use crate::browser;
use crate::content::FaqEntry;

const PAGE_JSON_LD_ATTR: &str = "data-page-jsonld";
const FAQ_JSON_LD_ATTR: &str = "data-faq-jsonld";

/// Updates `content` of an existing tag. Missing tags are left alone.
fn update_content(document: &Document, selector: &str, content: &str) {
    if let Ok(Some(element)) = document.query_selector(selector) {
        let _ = element.set_attribute("content", content);
    }
}

/// Finds the tag matching `selector` or appends a new one to `<head>`.
fn upsert(document: &Document, selector: &str, tag: &str, key: (&str, &str)) -> Option<Element> {
    if let Ok(Some(existing)) = document.query_selector(selector) {
        return Some(existing);
    }
    let element = document.create_element(tag).ok()?;
    element.set_attribute(key.0, key.1).ok()?;
    document.head()?.append_child(&element).ok()?;
    Some(element)
}

fn upsert_meta(document: &Document, attr: &str, key: &str, content: &str) {
    let selector = format!("meta[{}=\"{}\"]", attr, key);
    match upsert(document, &selector, "meta", (attr, key)) {
        Some(meta) => {
            let _ = meta.set_attribute("content", content);
        }
        None => log::warn!("Could not add meta {}", key),
    }
}

fn remove_tagged_script(document: &Document, attr: &str) {
    if let Ok(Some(script)) = document.query_selector(&format!("script[{}]", attr)) {
        script.remove();
    }
}

fn replace_json_ld(document: &Document, attr: &str, data: &Value) {
    remove_tagged_script(document, attr);
    let Some(head) = document.head() else {
        return;
    };
    let Ok(script) = document.create_element("script") else {
        return;
    };
    let _ = script.set_attribute("type", "application/ld+json");
    let _ = script.set_attribute(attr, "true");
    script.set_text_content(Some(&data.to_string()));
    if let Err(e) = head.append_child(&script) {
        log::warn!("Could not add structured data: {:?}", e);
    }
}

fn apply(document: &Document, meta: &SeoMeta) {
    if let Some(title) = meta.full_title() {
        document.set_title(&title);
        update_content(document, "meta[property=\"og:title\"]", &title);
        update_content(document, "meta[name=\"twitter:title\"], meta[property=\"twitter:title\"]", &title);
    }

    if let Some(description) = &meta.description {
        update_content(document, "meta[name=\"description\"]", description);
        update_content(document, "meta[property=\"og:description\"]", description);
        update_content(
            document,
            "meta[name=\"twitter:description\"], meta[property=\"twitter:description\"]",
            description,
        );
    }

    if let Some(keywords) = &meta.keywords {
        update_content(document, "meta[name=\"keywords\"]", keywords);
    }

    if !meta.author.is_empty() {
        upsert_meta(document, "name", "author", &meta.author);
    }

    if let Some(image) = &meta.og_image {
        update_content(document, "meta[property=\"og:image\"]", image);
        update_content(document, "meta[name=\"twitter:image\"], meta[property=\"twitter:image\"]", image);
        if !matches!(document.query_selector(&format!("link[href=\"{}\"]", image)), Ok(Some(_))) {
            if let Some(link) = upsert(document, "link[data-og-preload]", "link", ("data-og-preload", "true")) {
                let _ = link.set_attribute("rel", "preload");
                let _ = link.set_attribute("as", "image");
                let _ = link.set_attribute("href", image);
            }
        }
    }

    if let Some(url) = &meta.canonical_url {
        if let Some(link) = upsert(document, "link[rel=\"canonical\"]", "link", ("rel", "canonical")) {
            let _ = link.set_attribute("href", url);
        }
        update_content(document, "meta[property=\"og:url\"]", url);
        update_content(document, "meta[name=\"twitter:url\"], meta[property=\"twitter:url\"]", url);
    }

    update_content(document, "meta[property=\"og:locale\"]", &meta.locale);
    if let Some(root) = document.document_element() {
        let _ = root.set_attribute("lang", meta.lang());
    }

    for (property, value) in [
        ("article:published_time", &meta.publish_date),
        ("article:modified_time", &meta.modified_date),
        ("article:section", &meta.article_section),
    ] {
        if let Some(value) = value {
            upsert_meta(document, "property", property, value);
        }
    }

    let current_url = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    replace_json_ld(document, PAGE_JSON_LD_ATTR, &meta.page_json_ld(&current_url, chrono::Utc::now()));
}

#[derive(Properties, PartialEq)]
pub struct SeoOptimizerProps {
    pub meta: SeoMeta,
}

/// Writes page metadata into `<head>`. Renders nothing.
#[function_component(SeoOptimizer)]
pub fn seo_optimizer(props: &SeoOptimizerProps) -> Html {
    use_effect_with_deps(
        |meta: &SeoMeta| {
            if let Some(document) = browser::document() {
                apply(&document, meta);
                log::debug!("SEO metadata applied for {:?}", meta.title);
            }
            || {
                if let Some(document) = browser::document() {
                    remove_tagged_script(&document, PAGE_JSON_LD_ATTR);
                }
            }
        },
        props.meta.clone(),
    );

    html! {}
}

#[derive(Properties, PartialEq)]
pub struct FaqStructuredDataProps {
    pub faqs: &'static [FaqEntry],
}

#[function_component(FaqStructuredData)]
pub fn faq_structured_data(props: &FaqStructuredDataProps) -> Html {
    use_effect_with_deps(
        |faqs: &&'static [FaqEntry]| {
            let document = browser::document();
            if let (Some(document), Some(data)) = (document.as_ref(), faq_json_ld(faqs)) {
                replace_json_ld(document, FAQ_JSON_LD_ATTR, &data);
            }
            move || {
                if let Some(document) = document {
                    remove_tagged_script(&document, FAQ_JSON_LD_ATTR);
                }
            }
        },
        props.faqs,
    );

    html! {}
}
