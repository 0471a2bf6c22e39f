use crate::config::SiteConfig;
use serde::Serialize;
use url::Url;

/// Head metadata for one page, rendered into `<head>` by the base template
/// (title, meta description, canonical link, Open Graph tags).
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub og_type: &'static str,
}

impl PageMeta {
    pub fn home(site: &SiteConfig) -> Self {
        Self {
            title: site.title.clone(),
            description: site.description.clone(),
            canonical: canonical_url(&site.url, "/"),
            og_type: "website",
        }
    }

    /// Inner page; the title is composed as `Page | Site`.
    pub fn page(site: &SiteConfig, title: &str, description: &str, path: &str) -> Self {
        Self {
            title: format!("{} | {}", title, site.title),
            description: description.to_string(),
            canonical: canonical_url(&site.url, path),
            og_type: "article",
        }
    }
}

// site.url is validated at config load, so the parse only fails if the
// value changed underneath us; fall back to naive joining in that case.
fn canonical_url(site_url: &str, path: &str) -> String {
    match Url::parse(site_url).and_then(|base| base.join(path)) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}{}", site_url.trim_end_matches('/'), path),
    }
}
