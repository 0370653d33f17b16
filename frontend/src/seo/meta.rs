use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::{json, Value};

use crate::config;
use crate::content::FaqEntry;

const TITLE_SUFFIX: &str = " | Supplier IT";
const ORGANIZATION_ID: &str = "https://supplier.uz/#organization";
const WEBSITE_ID: &str = "https://supplier.uz/#website";

/// Document head metadata for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct SeoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
    pub keywords: Option<String>,
    pub og_image: Option<String>,
    pub canonical_url: Option<String>,
    pub author: String,
    pub publish_date: Option<String>,
    pub modified_date: Option<String>,
    pub article_section: Option<String>,
    pub locale: String,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: None,
            description: None,
            keywords: None,
            og_image: None,
            canonical_url: None,
            author: config::COMPANY_NAME.to_string(),
            publish_date: None,
            modified_date: None,
            article_section: None,
            locale: "uz_UZ".to_string(),
        }
    }
}

impl SeoMeta {
    pub fn home() -> Self {
        Self {
            title: Some("Supplier IT - Professional Veb Dasturlash, Mobil Ilovalar va Telegram Botlar".into()),
            description: Some(
                "Supplier IT - O'zbekistondagi yetakchi IT kompaniya. Professional veb-sayt dasturlash, iOS va Android uchun mobil ilovalar, maxsus Telegram botlar."
                    .into(),
            ),
            keywords: Some(
                "veb dasturlash, mobil ilovalar, telegram botlar, iOS, Android, IT xizmatlar, O'zbekiston, Toshkent".into(),
            ),
            canonical_url: Some(config::get_site_url().to_string()),
            ..Self::default()
        }
    }

    /// Title with the company suffix, unless it already names the company.
    pub fn full_title(&self) -> Option<String> {
        self.title.as_ref().map(|title| {
            if title.contains(config::COMPANY_NAME) {
                title.clone()
            } else {
                format!("{}{}", title, TITLE_SUFFIX)
            }
        })
    }

    /// `uz` for `uz_UZ`.
    pub fn lang(&self) -> &str {
        self.locale.split('_').next().unwrap_or(&self.locale)
    }

    pub fn page_json_ld(&self, current_url: &str, now: DateTime<Utc>) -> Value {
        let url = self.canonical_url.as_deref().unwrap_or(current_url);
        let now = now.to_rfc3339_opts(SecondsFormat::Millis, true);
        let organization = json!({ "@type": "Organization", "@id": ORGANIZATION_ID });

        json!({
            "@context": "https://schema.org",
            "@type": "WebPage",
            "@id": format!("{}#webpage", url),
            "url": url,
            "name": self.title.as_deref().unwrap_or("Supplier IT - Professional IT Xizmatlar"),
            "description": self
                .description
                .as_deref()
                .unwrap_or("Professional veb dasturlash, mobil ilovalar va Telegram botlar"),
            "inLanguage": self.lang(),
            "isPartOf": { "@type": "WebSite", "@id": WEBSITE_ID },
            "about": organization,
            "mainEntity": organization,
            "breadcrumb": {
                "@type": "BreadcrumbList",
                "itemListElement": [{
                    "@type": "ListItem",
                    "position": 1,
                    "name": "Bosh sahifa",
                    "item": "https://supplier.uz/"
                }]
            },
            "publisher": organization,
            "datePublished": self.publish_date.as_deref().unwrap_or(&now),
            "dateModified": self.modified_date.as_deref().unwrap_or(&now),
            "author": organization,
            "potentialAction": [{ "@type": "ReadAction", "target": [url] }]
        })
    }
}

pub fn faq_json_ld(faqs: &[FaqEntry]) -> Option<Value> {
    if faqs.is_empty() {
        return None;
    }
    let questions: Vec<Value> = faqs
        .iter()
        .enumerate()
        .map(|(index, faq)| {
            json!({
                "@type": "Question",
                "@id": format!("#faq-{}", index),
                "name": faq.question,
                "acceptedAnswer": { "@type": "Answer", "text": faq.answer }
            })
        })
        .collect();

    Some(json!({
        "@context": "https://schema.org",
        "@type": "FAQPage",
        "mainEntity": questions
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn with_title(title: &str) -> SeoMeta {
        SeoMeta { title: Some(title.to_string()), ..SeoMeta::default() }
    }

    #[test]
    fn title_gets_company_suffix_once() {
        assert_eq!(with_title("Blog").full_title().as_deref(), Some("Blog | Supplier IT"));
        assert_eq!(
            with_title("Supplier IT - Bosh sahifa").full_title().as_deref(),
            Some("Supplier IT - Bosh sahifa")
        );
        assert_eq!(SeoMeta::default().full_title(), None);
    }

    #[test]
    fn lang_is_the_locale_prefix() {
        assert_eq!(SeoMeta::default().lang(), "uz");
        let english = SeoMeta { locale: "en".into(), ..SeoMeta::default() };
        assert_eq!(english.lang(), "en");
    }

    #[test]
    fn page_json_ld_prefers_canonical_url_and_fills_dates() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).unwrap();
        let meta = SeoMeta {
            canonical_url: Some("https://supplier.uz/".into()),
            publish_date: Some("2024-01-01".into()),
            ..SeoMeta::default()
        };
        let ld = meta.page_json_ld("http://localhost:8080/", now);

        assert_eq!(ld["@id"], "https://supplier.uz/#webpage");
        assert_eq!(ld["inLanguage"], "uz");
        assert_eq!(ld["datePublished"], "2024-01-01");
        assert_eq!(ld["dateModified"], "2024-01-15T09:30:00.000Z");
        assert_eq!(ld["name"], "Supplier IT - Professional IT Xizmatlar");
        assert_eq!(ld["potentialAction"][0]["target"][0], "https://supplier.uz/");
    }

    #[test]
    fn faq_json_ld_lists_every_question() {
        assert!(faq_json_ld(&[]).is_none());

        let faqs = [
            FaqEntry { question: "Qancha?", answer: "Bepul maslahat." },
            FaqEntry { question: "Qachon?", answer: "2-4 hafta." },
        ];
        let ld = faq_json_ld(&faqs).unwrap();
        assert_eq!(ld["@type"], "FAQPage");
        assert_eq!(ld["mainEntity"].as_array().map(Vec::len), Some(2));
        assert_eq!(ld["mainEntity"][1]["@id"], "#faq-1");
        assert_eq!(ld["mainEntity"][1]["acceptedAnswer"]["text"], "2-4 hafta.");
    }
}
