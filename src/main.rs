use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use friday_five::handlers;
use friday_five::middleware::require_session;
use friday_five::state::AppState;
use friday_five::{config, listing};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up FRIDAY_STORE_URL etc.
    let _ = dotenvy::dotenv();

    let config = config::config();
    tracing_subscriber::fmt::init();
    tracing::info!("Starting Friday Five API in {:?} mode", config.environment);

    let state = AppState::from_config(config);
    let app = app(state);

    let bind_addr = format!("0.0.0.0:{}", config.server.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    println!("Friday Five API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        .merge(public_routes(state.clone()))
        // Behind the session gate
        .merge(session_routes(state.clone()))
        .merge(submission_routes(state.clone()))
        .merge(preference_routes(state))
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

fn public_routes(state: AppState) -> Router {
    use axum::routing::post;
    use handlers::public::{auth, submit};

    Router::new()
        // The public form's insert call
        .route("/submit", post(submit::submit))
        // Token-free sign in against the shared password
        .route("/auth/login", post(auth::login))
        .with_state(state)
}

fn session_routes(state: AppState) -> Router {
    use axum::routing::delete;
    use handlers::protected::auth;

    Router::new()
        .route("/api/auth/whoami", get(auth::whoami))
        .route("/api/auth/session", delete(auth::logout))
        .route_layer(from_fn_with_state(state.clone(), require_session))
        .with_state(state)
}

fn submission_routes(state: AppState) -> Router {
    use axum::routing::{patch, post};
    use handlers::protected::submissions;

    Router::new()
        // Collection-level operations
        .route("/api/submissions", get(submissions::list))
        .route("/api/submissions/refresh", post(submissions::refresh))
        // Weekly-feature draw
        .route("/api/submissions/draw", post(submissions::draw))
        .route("/api/submissions/draw/commit", post(submissions::commit))
        // Row-level operations
        .route(
            "/api/submissions/:id",
            get(submissions::show).delete(submissions::delete),
        )
        .route("/api/submissions/:id/selected", patch(submissions::select))
        .route_layer(from_fn_with_state(state.clone(), require_session))
        .with_state(state)
}

fn preference_routes(state: AppState) -> Router {
    use handlers::protected::prefs;

    Router::new()
        .route(
            "/api/preferences/columns",
            get(prefs::get_columns).put(prefs::put_columns),
        )
        .route_layer(from_fn_with_state(state.clone(), require_session))
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Friday Five API",
            "version": version,
            "description": "Portfolio submission intake and weekly-feature dashboard",
            "page_size": listing::PAGE_SIZE,
            "draw_size": listing::DRAW_SIZE,
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "submit": "/submit (public - portfolio form)",
                "login": "/auth/login (public)",
                "session": "/api/auth/whoami, /api/auth/session (gated)",
                "submissions": "/api/submissions[/:id] (gated)",
                "draw": "/api/submissions/draw[/commit] (gated)",
                "preferences": "/api/preferences/columns (gated)",
            }
        }
    }))
}

async fn health() -> impl axum::response::IntoResponse {
    let now = chrono::Utc::now();

    if config::config().store.is_configured() {
        (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "store": "configured"
                }
            })),
        )
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "submission store not configured",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "store": "unconfigured"
                }
            })),
        )
    }
}
