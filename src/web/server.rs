use axum::{
    extract::{DefaultBodyLimit, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::limit::ConcurrencyLimitLayer;
use tower::ServiceBuilder;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::timeout::TimeoutLayer;

use crate::catalog::store::PathologyCatalog;
use crate::cli::ServeArgs;
use crate::core::vector::RECOGNIZED_ATTRIBUTES;
use crate::matching::engine::MatchingEngine;
use crate::parsing::json::vector_from_value;

/// Questionnaire payloads are tiny; anything bigger is abuse
pub const MAX_BODY_SIZE: usize = 64 * 1024; // 64KB

/// Shared application state: the catalog, loaded once and immutable
pub struct AppState {
    pub catalog: PathologyCatalog,
}

/// Run the web server
///
/// # Errors
///
/// Returns an error if the tokio runtime cannot be created or the server
/// fails to start. An unreadable catalog is NOT an error here: the server
/// starts with an empty catalog and every diagnosis reports no match.
pub fn run(args: ServeArgs) -> anyhow::Result<()> {
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(async move { run_server(args).await })
}

/// The API and page routes without middleware, for direct testing
pub fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/api/diagnosis", post(diagnosis_handler))
        .route("/api/pathologies", get(pathologies_handler))
        .route("/api/attributes", get(attributes_handler))
        .with_state(state)
}

/// Create the application router with all routes and middleware configured
#[allow(clippy::missing_panics_doc)] // Panics only on invalid governor config (constants are valid)
pub fn create_router(state: Arc<AppState>) -> Router {
    // IP-based rate limiting
    let governor_conf = GovernorConfigBuilder::default()
        .per_second(10)
        .burst_size(50)
        .finish()
        .unwrap();

    api_routes(state).layer(
        ServiceBuilder::new()
            // Security headers for browser protection
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-content-type-options"),
                HeaderValue::from_static("nosniff"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("x-frame-options"),
                HeaderValue::from_static("DENY"),
            ))
            .layer(SetResponseHeaderLayer::if_not_present(
                HeaderName::from_static("referrer-policy"),
                HeaderValue::from_static("strict-origin-when-cross-origin"),
            ))
            .layer(GovernorLayer {
                config: Arc::new(governor_conf),
            })
            // Request timeout to prevent slow client attacks
            .layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                Duration::from_secs(30),
            ))
            .layer(ConcurrencyLimitLayer::new(100))
            .layer(DefaultBodyLimit::max(MAX_BODY_SIZE)),
    )
}

async fn run_server(args: ServeArgs) -> anyhow::Result<()> {
    // Degraded mode by design: a missing/broken catalog logs a warning and
    // the service answers "no diagnosis" instead of refusing to start
    let catalog = PathologyCatalog::load_or_empty(args.catalog.as_deref());
    tracing::info!("catalog loaded: {} pathologies", catalog.len());

    let state = Arc::new(AppState { catalog });
    let app = create_router(state);

    let addr = format!("{}:{}", args.address, args.port);
    println!("Starting patho-solver web server at http://{addr}");

    if args.open {
        let _ = open::that(format!("http://{addr}"));
    }

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Main page: the intake questionnaire form
async fn index_handler() -> Html<&'static str> {
    Html(include_str!("templates/index.html"))
}

/// Full catalog in the raw id-keyed representation
async fn pathologies_handler(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(Value::Object(state.catalog.to_wire_map()))
}

/// Attribute names the questionnaire recognizes
async fn attributes_handler() -> Json<&'static [&'static str]> {
    Json(RECOGNIZED_ATTRIBUTES)
}

/// Diagnosis endpoint.
///
/// Status codes carry the outcome: 200 with the diagnosis on a match, 404
/// when no pathology clears the confidence gate (an expected outcome, not a
/// fault), 400 on a malformed payload. 500 stays reserved for real server
/// errors.
async fn diagnosis_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> Response {
    let vector = match vector_from_value(&body) {
        Ok(vector) => vector,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({
                    "success": false,
                    "message": err.to_string(),
                })),
            )
                .into_response();
        }
    };

    let engine = MatchingEngine::new(&state.catalog);
    match engine.diagnose(&vector) {
        Some(result) => Json(serde_json::json!({
            "success": true,
            "diagnosis": {
                "id": result.pathology_id.as_str(),
                "nom": result.name,
                "description": result.description,
                "zone": result.zone,
                "confidence": result.display_confidence(),
            },
        }))
        .into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "success": false,
                "message": "Aucune pathologie trouvée",
            })),
        )
            .into_response(),
    }
}
