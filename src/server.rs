// HTTP surface: page routes, JSON page records and HTMX widget fragments.
//
// Pages are rendered once per path and kept in a moka cache. Widget
// endpoints are stateless: the client sends its current state in the
// query string, the handler applies one transition and returns the
// re-rendered fragment.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Router,
};
use axum_htmx::HxRequest;
use moka::future::Cache;
use serde::Deserialize;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::config::SiteConfig;
use crate::content::practice;
use crate::error::SiteError;
use crate::render::widgets;
use crate::site::{normalise_route, CarouselSource, SiteRegistry, HOME_ROUTE};
use crate::widgets::{AccordionState, CarouselState, FaqState, Interaction, Orientation, Toggle, ToggleAction};

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<SiteRegistry>,
    pub cache: Cache<String, String>,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        tracing::info!("Building site registry...");
        let registry = Arc::new(SiteRegistry::new());

        tracing::info!(
            "Initializing Moka page cache (capacity {}, ttl {:?})...",
            config.cache_capacity,
            config.cache_ttl
        );
        let cache = Cache::builder()
            .max_capacity(config.cache_capacity)
            .time_to_live(config.cache_ttl)
            .build();

        Self {
            registry,
            cache,
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        .route("/health", get(health_check))
        // JSON page records
        .route("/api/pages", get(get_home_record))
        .route("/api/pages/*path", get(get_page_record))
        // HTMX widget fragments
        .route("/widgets/faq/*page", get(faq_widget))
        .route("/widgets/carousel/:id", get(carousel_widget))
        .route("/widgets/cards", get(cards_widget))
        .route("/widgets/menu", get(menu_widget));

    for route in state.registry.routes() {
        router = router.route(route, get(page));
    }

    router
        .fallback(fallback)
        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Page Handlers
// ============================================================================

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "routes": state.registry.routes().len(),
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

async fn render_cached(state: &AppState, path: &str) -> Result<Html<String>, AppError> {
    let route = normalise_route(path);
    if let Some(cached) = state.cache.get(route).await {
        tracing::debug!("Cache hit for page {}", route);
        return Ok(Html(cached));
    }

    let html = state.registry.render(route).map_err(|e| match e {
        SiteError::UnknownRoute(_) => AppError::PageNotFound(route.to_string()),
        other => AppError::from(other),
    })?;
    state.cache.insert(route.to_string(), html.clone()).await;
    Ok(Html(html))
}

async fn page(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    render_cached(&state, uri.path()).await
}

/// Unregistered paths. A trailing-slash variant of a known route is
/// served; anything else gets the not-found page.
async fn fallback(State(state): State<AppState>, uri: Uri) -> Result<Html<String>, AppError> {
    tracing::debug!("Fallback for {}", uri.path());
    render_cached(&state, uri.path()).await
}

async fn get_home_record(State(state): State<AppState>) -> Result<Response, AppError> {
    let page = state.registry.get(HOME_ROUTE)?;
    Ok(Json(page).into_response())
}

async fn get_page_record(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<Response, AppError> {
    let page = state.registry.get(&format!("/{}", path))?;
    Ok(Json(page).into_response())
}

// ============================================================================
// Widget Handlers
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct FaqQuery {
    pub open: Option<usize>,
    pub toggle: Option<usize>,
}

async fn faq_widget(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(page): Path<String>,
    Query(query): Query<FaqQuery>,
) -> Result<Response, AppError> {
    let route = format!("/{}", page);
    let section = state.registry.faq_section(&route)?;
    if !is_htmx {
        return Ok(Redirect::to(&section.page).into_response());
    }

    let mut faq = FaqState::with_open(section.items.len(), query.open);
    if let Some(i) = query.toggle {
        faq.toggle(i);
    }
    tracing::debug!("FAQ {} open={:?}", route, faq.open());
    Ok(Html(widgets::faq(section, &faq)?).into_response())
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselAction {
    Next,
    Prev,
    Goto,
    Drag,
}

#[derive(Debug, Deserialize)]
pub struct CarouselQuery {
    pub index: Option<i64>,
    pub action: Option<CarouselAction>,
    pub to: Option<i64>,
    pub offset: Option<f64>,
    pub velocity: Option<f64>,
    pub width: Option<f64>,
}

async fn carousel_widget(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Path(id): Path<String>,
    Query(query): Query<CarouselQuery>,
) -> Result<Response, AppError> {
    let source = state.registry.carousel(&id)?;
    if !is_htmx {
        return Ok(Redirect::to(source.host()).into_response());
    }

    let mut carousel = CarouselState::at(source.len(), query.index.unwrap_or(0))
        .ok_or_else(|| SiteError::UnknownWidget(format!("carousel/{}", id)))?;
    match query.action {
        Some(CarouselAction::Next) => carousel.next(),
        Some(CarouselAction::Prev) => carousel.prev(),
        Some(CarouselAction::Goto) => carousel.go_to(query.to.unwrap_or(0)),
        Some(CarouselAction::Drag) => {
            carousel.begin_drag();
            let outcome = carousel.end_drag(
                query.offset.unwrap_or(0.0),
                query.velocity.unwrap_or(0.0),
                query.width.unwrap_or(0.0),
            );
            tracing::debug!("Carousel {} drag released: {:?}", id, outcome);
        }
        None => {}
    }

    let html = match source {
        CarouselSource::Gallery { items, .. } => widgets::gallery(&id, items, &carousel)?,
        CarouselSource::Team { members, .. } => widgets::team(&id, members, &carousel)?,
    };
    Ok(Html(html).into_response())
}

#[derive(Debug, Deserialize)]
pub struct CardsQuery {
    pub active: Option<usize>,
    /// Input that fired the request, filled in by the layout script.
    pub via: Option<Interaction>,
    /// Viewport width in px, sent by the client on each interaction.
    pub width: Option<u32>,
}

async fn cards_widget(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<CardsQuery>,
) -> Result<Response, AppError> {
    if !is_htmx {
        return Ok(Redirect::to(HOME_ROUTE).into_response());
    }

    let items = state.registry.cards();
    let mut accordion = AccordionState::new(items.len(), 0)
        .ok_or_else(|| SiteError::UnknownWidget("cards".to_string()))?;
    if let Some(i) = query.active {
        let via = query.via.unwrap_or(Interaction::Click);
        tracing::debug!("Cards activate {} via {:?}", i, via);
        accordion.interact(i, via);
    }
    let breakpoint = state.config.wide_layout_min_px;
    let orientation = Orientation::for_viewport(query.width.unwrap_or(breakpoint), breakpoint);
    Ok(Html(widgets::cards(items, &accordion, orientation)?).into_response())
}

#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub open: Option<bool>,
    pub action: Option<ToggleAction>,
    /// Page the menu is shown on, for highlighting and redirects.
    pub path: Option<String>,
}

async fn menu_widget(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(query): Query<MenuQuery>,
) -> Result<Response, AppError> {
    // Only registered routes are echoed back, never arbitrary targets.
    let path = query
        .path
        .as_deref()
        .filter(|p| p.starts_with('/') && state.registry.contains(p))
        .map(normalise_route)
        .unwrap_or(HOME_ROUTE);
    if !is_htmx {
        return Ok(Redirect::to(path).into_response());
    }

    let mut menu = Toggle::new(query.open.unwrap_or(false));
    if let Some(action) = query.action {
        menu.apply(action);
    }
    let nav = practice::navigation();
    Ok(Html(widgets::menu(&nav, path, &menu)?).into_response())
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
pub enum AppError {
    /// Unknown page: answered with the not-found document.
    PageNotFound(String),
    NotFound(String),
    Internal(String),
}

impl From<SiteError> for AppError {
    fn from(err: SiteError) -> Self {
        match err {
            SiteError::UnknownRoute(_) | SiteError::UnknownWidget(_) => AppError::NotFound(err.to_string()),
            other => {
                tracing::error!("Request failed: {}", other);
                AppError::Internal(other.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::PageNotFound(path) => match crate::render::pages::not_found(&path) {
                Ok(html) => return (StatusCode::NOT_FOUND, Html(html)).into_response(),
                Err(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
