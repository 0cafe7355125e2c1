//! Landing page handler.

use axum::{
    extract::{OriginalUri, State},
    response::Html,
    Extension,
};
use tera::Tera;
use tracing::instrument;

use crate::content::{class_names, LandingPageContent};
use crate::environment::resolve_environment;
use crate::error::{AppError, AppErrorResponse, ResultExt};
use crate::metadata::PageMetadata;
use crate::middleware::RequestId;
use crate::state::AppState;

/// Renders navigation, hero and footer with metadata for the requested path.
#[instrument(name = "home::index", skip(state, request_id, uri))]
pub async fn index(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    OriginalUri(uri): OriginalUri,
) -> Result<Html<String>, AppErrorResponse> {
    let environment = resolve_environment(state.env.as_ref());
    let metadata = PageMetadata::for_page(&environment, uri.path());

    tracing::debug!(
        environment = environment.environment().as_str(),
        canonical_url = %metadata.canonical_url,
        "Rendering landing page"
    );

    let html = render_landing_page(&state.tera, &metadata, &LandingPageContent::default_page())
        .with_request_id(&request_id)?;
    Ok(Html(html))
}

/// Render `home.html` for `page` with `metadata` in the head.
pub fn render_landing_page(
    tera: &Tera,
    metadata: &PageMetadata,
    page: &LandingPageContent,
) -> Result<String, AppError> {
    let cta_class = class_names([
        Some("button"),
        Some(if page.cta_url.is_some() {
            "button-primary"
        } else {
            "button-disabled"
        }),
    ]);

    let mut context = tera::Context::new();
    context.insert("meta", metadata);
    context.insert("social_links", &page.social_links.links());
    context.insert("cta_class", &cta_class);
    context.insert("page", page);

    Ok(tera.render("home.html", &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeConfig;
    use crate::content::Theme;
    use crate::environment::{Environment, EnvironmentDescriptor};
    use crate::templates::init_templates;

    fn tera() -> Tera {
        let theme = ThemeConfig {
            templates_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/templates").to_string(),
            ..Default::default()
        };
        init_templates(&theme).unwrap()
    }

    fn metadata() -> PageMetadata {
        let env = EnvironmentDescriptor::new(Environment::Production, "https://app.voluntodo.com");
        PageMetadata::for_page(&env, "/")
    }

    #[test]
    fn test_cta_with_url_renders_external_link() {
        let page = LandingPageContent::default_page().with_cta_url("https://voluntodo.app/notify");
        let html = render_landing_page(&tera(), &metadata(), &page).unwrap();

        assert!(html.contains(
            r#"<a class="button button-primary" href="https://voluntodo.app/notify" target="_blank" rel="noopener noreferrer">Notify Me</a>"#
        ));
        assert!(!html.contains("<button"));
    }

    #[test]
    fn test_cta_without_url_renders_disabled_button() {
        let html =
            render_landing_page(&tera(), &metadata(), &LandingPageContent::default_page()).unwrap();

        assert!(html.contains(
            r#"<button class="button button-disabled" type="button" disabled>Notify Me</button>"#
        ));
        assert!(!html.contains("button-primary"));
    }

    #[test]
    fn test_theme_rendered_on_root_element() {
        let page = LandingPageContent::default_page().with_theme(Theme::Dark);
        let html = render_landing_page(&tera(), &metadata(), &page).unwrap();
        assert!(html.contains(r#"<html lang="en" data-theme="dark">"#));
    }

    #[test]
    fn test_missing_template_is_template_error() {
        let result =
            render_landing_page(&Tera::default(), &metadata(), &LandingPageContent::default_page());
        assert!(matches!(result, Err(AppError::Template(_))));
    }
}
