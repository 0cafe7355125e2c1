//! Page metadata for search engines and social previews.
//!
//! Everything here is static except the URLs, which are derived from the
//! environment's site URL on every call.

use serde::Serialize;
use serde_json::json;

use crate::content::{
    OG_IMAGE_ALT, OG_IMAGE_HEIGHT, OG_IMAGE_PATH, OG_IMAGE_WIDTH, OG_LOCALE, PAGE_DESCRIPTION,
    PAGE_TITLE, SITE_DESCRIPTION, SITE_TITLE,
};
use crate::environment::EnvironmentDescriptor;

#[derive(Debug, Clone, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    pub images: Vec<OgImage>,
    pub locale: String,
    /// Rendered as `og:type`
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    /// Value of the `robots` meta tag, e.g. `"index, follow"`.
    pub fn directives(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{}, {}", index, follow)
    }
}

impl Default for Robots {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageMetadata {
    pub title: String,
    pub description: String,
    pub canonical_url: String,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: Robots,
    /// Pre-computed `robots.directives()` for templates
    pub robots_directives: String,
    /// Serialized schema.org Organization block
    pub json_ld: String,
}

impl PageMetadata {
    /// Metadata for the page served at `path`.
    pub fn for_page(environment: &EnvironmentDescriptor, path: &str) -> Self {
        let canonical_url = environment.canonical_url(path);
        let site_root = environment.canonical_url("/");
        let og_image = environment.canonical_url(OG_IMAGE_PATH);
        let robots = Robots::default();

        Self {
            title: PAGE_TITLE.to_string(),
            description: PAGE_DESCRIPTION.to_string(),
            open_graph: OpenGraph {
                title: PAGE_TITLE.to_string(),
                description: PAGE_DESCRIPTION.to_string(),
                url: canonical_url.clone(),
                site_name: SITE_TITLE.to_string(),
                images: vec![OgImage {
                    url: og_image.clone(),
                    width: OG_IMAGE_WIDTH,
                    height: OG_IMAGE_HEIGHT,
                    alt: OG_IMAGE_ALT.to_string(),
                }],
                locale: OG_LOCALE.to_string(),
                kind: "website".to_string(),
            },
            twitter: TwitterCard {
                card: "summary_large_image".to_string(),
                title: PAGE_TITLE.to_string(),
                description: PAGE_DESCRIPTION.to_string(),
                images: vec![og_image.clone()],
            },
            robots_directives: robots.directives(),
            robots,
            json_ld: organization_json_ld(&site_root, &og_image),
            canonical_url,
        }
    }
}

/// schema.org Organization block, safe to embed inside a `<script>` element.
fn organization_json_ld(url: &str, logo: &str) -> String {
    let value = json!({
        "@context": "https://schema.org",
        "@type": "Organization",
        "name": SITE_TITLE,
        "url": url,
        "logo": logo,
        "description": SITE_DESCRIPTION,
    });
    // `</script>` inside the payload would close the element early
    value.to_string().replace("</", "<\\/")
}
