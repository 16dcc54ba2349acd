mod assets;
mod config;
mod graphql;
mod steam;
mod storage;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::http::HeaderValue;
use axum::{extract::State, response::Html, routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use config::Config;
use graphql::Schema;

/// Client-side routes; each one is answered with the SPA shell.
const SPA_ROUTES: &[&str] = &[
    "/",
    "/projects",
    "/gallery",
    "/projects/{id}",
    "/about",
    "/bookshelf",
    "/map",
    "/city-manager",
];

#[derive(Clone)]
struct AppState {
    schema: Schema,
    index_path: Arc<PathBuf>,
}

async fn graphql_handler(State(state): State<AppState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> Html<String> {
    Html(
        async_graphql::http::GraphiQLSource::build()
            .endpoint("/graphql")
            .finish(),
    )
}

async fn serve_index(State(state): State<AppState>) -> Html<String> {
    // Serve the built frontend, fall back to a simple message
    match tokio::fs::read_to_string(state.index_path.as_path()).await {
        Ok(html) => Html(html),
        Err(e) => {
            tracing::debug!(path = %state.index_path.display(), error = %e, "Frontend not built");
            Html(
                r#"<!DOCTYPE html>
<html>
<head><title>Portfolio</title></head>
<body>
<h1>Portfolio</h1>
<p>Frontend not built yet. Visit <a href="/graphql">GraphiQL</a> to explore the API.</p>
</body>
</html>"#
                    .to_string(),
            )
        }
    }
}

/// Build a cache-controlled static file router.
fn cached_static_router(dir: &Path, cache_header: &'static str) -> Router {
    let layer = SetResponseHeaderLayer::overriding(
        axum::http::header::CACHE_CONTROL,
        HeaderValue::from_static(cache_header),
    );
    Router::new()
        .fallback_service(ServeDir::new(dir))
        .layer(layer)
}

const CACHE_1DAY: &str = "public, max-age=86400, must-revalidate";
const CACHE_IMMUTABLE: &str = "public, max-age=31536000, immutable";

/// Build the full application router.
fn build_app(schema: Schema, config: &Config) -> Router {
    // Static file routers are stateless, merge them before adding app state
    let static_files = Router::new()
        .nest(
            "/static",
            cached_static_router(&config.assets_dir, CACHE_1DAY),
        )
        .nest(
            "/dist",
            cached_static_router(&config.dist_dir, CACHE_IMMUTABLE),
        )
        .nest(
            "/assets",
            cached_static_router(&config.dist_dir.join("assets"), CACHE_IMMUTABLE),
        );

    let state = AppState {
        schema,
        index_path: Arc::new(config.dist_dir.join("index.html")),
    };

    let mut router = Router::new().route("/graphql", get(graphiql).post(graphql_handler));
    for route in SPA_ROUTES {
        router = router.route(route, get(serve_index));
    }

    router
        .with_state(state)
        .merge(static_files)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("portfolio_backend=info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::from_env()?;

    let loaded_assets = Arc::new(assets::Assets::load(&config.assets_dir)?);

    if let Some(parent) = config.db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let storage = storage::Storage::open(&config.db_path)?;
    tracing::info!(
        path = %config.db_path.display(),
        cities = storage.count_cities()?,
        "Opened city database"
    );

    let steam = steam::SteamClient::new(&config.steam)?;
    if !steam.has_api_key() {
        tracing::warn!("STEAM_API_KEY not set, recentGames will return an error");
    }

    let schema = graphql::build_schema(loaded_assets, storage, Arc::new(steam));
    let app = build_app(schema, &config);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running at http://localhost:{}", config.port);
    tracing::info!("GraphiQL playground at http://localhost:{}/graphql", config.port);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_tracing();
    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}
