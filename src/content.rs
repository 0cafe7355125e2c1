//! Landing page copy and the helpers used to present it.
//!
//! All page text is fixed at compile time. [`LandingPageContent::default_page`]
//! gathers it into a single serializable value for the templates.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

pub const SITE_TITLE: &str = "VolunTodo";
pub const SITE_DESCRIPTION: &str = "We're building something amazing for your team.";

pub const PAGE_TITLE: &str = "Coming Soon - VolunTodo";
pub const PAGE_DESCRIPTION: &str = "We're building something amazing for your team.";

pub const HERO_HEADLINE: &str = "Coming Soon";
pub const HERO_SUBTITLE: &str = "We're building something amazing for your team.";
pub const HERO_TEASER: &str = "Be the first to know when we launch";
pub const BADGE_TEXT: &str = "Coming Soon";

/// CTA label. With an empty [`CTA_URL`] the CTA renders as a disabled button.
pub const CTA_TEXT: &str = "Notify Me";
pub const CTA_URL: &str = "";

pub const FOOTER_TEXT: &str = "© 2026 VolunTodo. All rights reserved.";

pub const TWITTER_URL: &str = "https://twitter.com/voluntodo";
pub const GITHUB_URL: &str = "https://github.com/trippshelnutt/app.voluntodo.com";
pub const LINKEDIN_URL: &str = "https://linkedin.com/company/voluntodo";
pub const CONTACT_EMAIL: &str = "hello@voluntodo.app";

/// Open Graph image path, relative to the site URL
pub const OG_IMAGE_PATH: &str = "/og-image.png";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const OG_IMAGE_ALT: &str = "VolunTodo Coming Soon";
pub const OG_LOCALE: &str = "en_US";

/// Preferred color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    #[default]
    Auto,
}

/// Social profile links; absent entries are not rendered.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SocialLinks {
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub email: Option<String>,
}

/// A link as rendered in the page, with its accessible label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub label: String,
    pub href: String,
    /// Opens in a new tab with `rel="noopener noreferrer"`
    pub external: bool,
}

impl SocialLinks {
    /// Links in display order. Web links open externally; email becomes `mailto:`.
    pub fn links(&self) -> Vec<Link> {
        let web = [
            ("Twitter", &self.twitter),
            ("GitHub", &self.github),
            ("LinkedIn", &self.linkedin),
        ];

        let mut links: Vec<Link> = web
            .into_iter()
            .filter_map(|(label, href)| {
                href.as_ref().map(|href| Link {
                    label: label.to_string(),
                    href: href.clone(),
                    external: true,
                })
            })
            .collect();

        if let Some(email) = &self.email {
            links.push(Link {
                label: "Email".to_string(),
                href: format!("mailto:{}", email),
                external: false,
            });
        }
        links
    }
}

/// Everything the landing page displays.
#[derive(Debug, Clone, Serialize)]
pub struct LandingPageContent {
    pub title: String,
    pub headline: String,
    pub subtitle: Option<String>,
    pub badge: String,
    pub teaser: String,
    pub cta_text: String,
    pub cta_url: Option<String>,
    pub footer_text: Option<String>,
    pub social_links: SocialLinks,
    pub nav_links: Vec<Link>,
    pub theme: Theme,
}

impl LandingPageContent {
    pub fn default_page() -> Self {
        Self {
            title: SITE_TITLE.to_string(),
            headline: HERO_HEADLINE.to_string(),
            subtitle: Some(HERO_SUBTITLE.to_string()),
            badge: BADGE_TEXT.to_string(),
            teaser: HERO_TEASER.to_string(),
            cta_text: CTA_TEXT.to_string(),
            cta_url: None,
            footer_text: Some(FOOTER_TEXT.to_string()),
            social_links: SocialLinks {
                twitter: Some(TWITTER_URL.to_string()),
                github: Some(GITHUB_URL.to_string()),
                linkedin: Some(LINKEDIN_URL.to_string()),
                email: Some(CONTACT_EMAIL.to_string()).filter(|e| is_valid_email(e)),
            },
            nav_links: vec![
                Link {
                    label: "About".to_string(),
                    href: "#".to_string(),
                    external: false,
                },
                Link {
                    label: "Contact".to_string(),
                    href: "#".to_string(),
                    external: false,
                },
            ],
            theme: Theme::default(),
        }
        .with_cta_url(CTA_URL)
    }

    /// Point the CTA at `url`. Anything but an absolute URL leaves it disabled.
    pub fn with_cta_url(mut self, url: &str) -> Self {
        self.cta_url = Some(url.to_string()).filter(|url| is_valid_url(url));
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Join the non-empty class names with single spaces.
pub fn class_names<'a>(classes: impl IntoIterator<Item = Option<&'a str>>) -> String {
    classes
        .into_iter()
        .flatten()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// True when `value` parses as an absolute URL.
pub fn is_valid_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

/// Loose shape check: `local@domain.tld` with no whitespace and a single `@`.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
