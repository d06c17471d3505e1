//! HTTP server: pages, the contact form and the mail relay endpoint

mod error;

pub use error::{Result as HandlerResult, ServerError};

use anyhow::{Context, Result};
use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::contact::{
    ContactForm, ContactPipeline, HttpRelay, InquiryRelay, MailRelay, Mailer,
    RelayRequest, RelayResponse, SmtpMailer, SubmitButton, SubmitOutcome,
};
use crate::content::{ContentClient, ContentSource};
use crate::pages::{load_detail, load_listing, normalize_page_index, ContactSection, LandingView};
use crate::templates::{LayoutData, NotFoundView, TemplateRenderer};
use crate::theme::Theme;

/// Budget for the form's call to a remote relay
const RELAY_TIMEOUT: Duration = Duration::from_secs(30);

/// Server state shared by every handler
pub struct AppState {
    pub config: SiteConfig,
    pub renderer: TemplateRenderer,
    pub content: Arc<dyn ContentSource>,
    /// Where `POST /contact` delivers submissions
    pub inquiries: Arc<dyn InquiryRelay>,
    /// Backs `POST /api/v1/sendMail`
    pub mail_relay: MailRelay,
}

impl AppState {
    pub fn new(
        config: SiteConfig,
        content: Arc<dyn ContentSource>,
        mailer: Arc<dyn Mailer>,
    ) -> Result<Self> {
        let mail_relay = MailRelay::new(mailer, config.mail.clone());
        let inquiries: Arc<dyn InquiryRelay> = match &config.contact.relay_url {
            Some(url) => Arc::new(
                HttpRelay::new(url, RELAY_TIMEOUT)
                    .with_context(|| format!("Failed to set up contact relay {}", url))?,
            ),
            None => Arc::new(mail_relay.clone()),
        };

        Ok(Self {
            renderer: TemplateRenderer::new()?,
            config,
            content,
            inquiries,
            mail_relay,
        })
    }

    /// Wire the production content client and SMTP mailer
    pub fn from_config(config: SiteConfig) -> Result<Self> {
        let content = ContentClient::new(&config.news).context("Invalid news API configuration")?;
        let mailer = SmtpMailer::new(&config.mail).context("Invalid SMTP configuration")?;
        Self::new(config, Arc::new(content), Arc::new(mailer))
    }

    fn layout(&self, headers: &HeaderMap, path: &str) -> LayoutData {
        LayoutData::new(&self.config, theme_from_headers(headers), path)
    }

    fn revert_ms(&self) -> u64 {
        self.config.contact.success_reset_secs.saturating_mul(1000)
    }
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/", get(landing_handler))
        .route("/contact", post(contact_handler))
        .route("/theme", post(theme_handler))
        .route("/news", get(news_index_handler))
        .route("/news/page/:page", get(news_page_handler))
        .route("/news/:id", get(news_detail_handler))
        .route("/api/v1/sendMail", post(send_mail_handler))
        .nest_service("/static", static_files)
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(state: AppState, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(state);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    axum::serve(listener, app).await?;

    Ok(())
}

fn theme_from_headers(headers: &HeaderMap) -> Theme {
    Theme::from_cookie_header(headers.get(header::COOKIE).and_then(|v| v.to_str().ok()))
}

async fn landing_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> HandlerResult<Html<String>> {
    let view = LandingView::new(&state.config, ContactSection::blank(&state.config));
    let html = state.renderer.landing(&state.layout(&headers, "/"), &view)?;
    Ok(Html(html))
}

async fn contact_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Form(mut form): Form<ContactForm>,
) -> HandlerResult<Response> {
    let contact = &state.config.contact;
    let pipeline = ContactPipeline::new(
        state.inquiries.clone(),
        SubmitButton::new(Duration::from_secs(contact.success_reset_secs)),
        &contact.default_country_code,
    );

    let outcome = pipeline.submit(&mut form).await;
    let status = match &outcome {
        SubmitOutcome::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    };
    let toast = outcome.toast().cloned();
    let errors = outcome.errors().cloned().unwrap_or_default();

    let section = ContactSection::new(
        form,
        errors,
        pipeline.button().state(),
        toast,
        state.revert_ms(),
    );
    let view = LandingView::new(&state.config, section);
    let html = state.renderer.landing(&state.layout(&headers, "/"), &view)?;
    Ok((status, Html(html)).into_response())
}

#[derive(Debug, Deserialize)]
struct ThemeToggle {
    redirect: Option<String>,
}

/// Flip the theme cookie and go back where the visitor came from
async fn theme_handler(headers: HeaderMap, Form(toggle): Form<ThemeToggle>) -> Response {
    let theme = theme_from_headers(&headers).toggled();
    let target = toggle
        .redirect
        .filter(|r| r.starts_with('/') && !r.starts_with("//"))
        .unwrap_or_else(|| "/".to_string());

    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, target),
            (header::SET_COOKIE, theme.set_cookie()),
        ],
    )
        .into_response()
}

async fn news_index_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> HandlerResult<Html<String>> {
    render_listing(&state, &headers, 1, "/news").await
}

async fn news_page_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(page): Path<String>,
) -> HandlerResult<Html<String>> {
    let page_index = normalize_page_index(&page);
    let path = format!("/news/page/{}", page_index);
    render_listing(&state, &headers, page_index, &path).await
}

async fn render_listing(
    state: &AppState,
    headers: &HeaderMap,
    page_index: u32,
    path: &str,
) -> HandlerResult<Html<String>> {
    let view = load_listing(state.content.as_ref(), page_index, state.config.news.per_page).await;
    let html = state.renderer.news_list(&state.layout(headers, path), &view)?;
    Ok(Html(html))
}

async fn news_detail_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> HandlerResult<Response> {
    let path = format!("/news/{}", id);
    let layout = state.layout(&headers, &path);

    match load_detail(state.content.as_ref(), &id, &state.config).await {
        Some(view) => Ok(Html(state.renderer.news_detail(&layout, &view)?).into_response()),
        None => {
            let html = state.renderer.not_found(&layout, &NotFoundView::post())?;
            Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
        }
    }
}

/// Mail relay: one notification email per submission
async fn send_mail_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RelayRequest>,
) -> (StatusCode, Json<RelayResponse>) {
    match state.mail_relay.relay(&request).await {
        Ok(()) => (StatusCode::OK, Json(RelayResponse::sent())),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(RelayResponse::failed(e.to_string())),
        ),
    }
}

async fn fallback_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> HandlerResult<Response> {
    tracing::debug!("No route for {}", uri.path());
    let layout = state.layout(&headers, uri.path());
    let html = state.renderer.not_found(&layout, &NotFoundView::page())?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}
