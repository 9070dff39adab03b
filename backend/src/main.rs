use dotenvy::dotenv;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use governor::{
    clock::DefaultClock, state::keyed::DefaultKeyedStateStore, DefaultDirectRateLimiter, Quota,
    RateLimiter,
};
use nonzero_ext::nonzero;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use tracing_subscriber::EnvFilter;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

mod config;
mod error;
mod prompts;
mod handlers {
    pub mod welcome_handlers;
}
mod api {
    pub mod text_generation;
}

use api::text_generation::{OpenRouterGenerator, TextGenerator};
use config::Config;
use handlers::welcome_handlers;

type ClientLimiter = RateLimiter<IpAddr, DefaultKeyedStateStore<IpAddr>, DefaultClock>;

const LIMITER_PRUNE_INTERVAL: Duration = Duration::from_secs(60);

async fn health_check() -> &'static str {
    "OK"
}

pub struct AppState {
    generator: Arc<dyn TextGenerator>,
    welcome_limiter: ClientLimiter,
    welcome_budget: DefaultDirectRateLimiter,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            // 5 welcome messages per minute for each client address
            welcome_limiter: RateLimiter::keyed(Quota::per_minute(nonzero!(5u32))),
            // 30 per minute across all clients, bounds spend on the model key
            welcome_budget: RateLimiter::direct(Quota::per_minute(nonzero!(30u32))),
        }
    }

    /// Drops limiter entries for clients whose quota has fully refilled.
    pub fn prune_limiters(&self) {
        self.welcome_limiter.retain_recent();
        self.welcome_limiter.shrink_to_fit();
    }
}

fn spawn_limiter_pruning(state: Arc<AppState>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(LIMITER_PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            state.prune_limiters();
            tracing::debug!("Welcome limiter tracks {} clients", state.welcome_limiter.len());
        }
    })
}

pub fn api_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/welcome", post(welcome_handlers::generate_welcome))
        .with_state(state)
}

fn cors_layer(config: &Config) -> anyhow::Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Ok(match &config.frontend_url {
        Some(origin) => cors.allow_origin(origin.parse::<HeaderValue>()?),
        None => cors.allow_origin(Any),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let generator = OpenRouterGenerator::new(&config)?;
    tracing::info!("Using model {} at {}", config.model, config.endpoint);

    let state = Arc::new(AppState::new(Arc::new(generator)));
    spawn_limiter_pruning(state.clone());

    // Everything outside /api is the built frontend, with index.html for unknown paths
    let frontend = ServeDir::new(&config.frontend_dist)
        .not_found_service(ServeFile::new(config.frontend_dist.join("index.html")));

    let app = api_router(state)
        .fallback_service(frontend)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(cors_layer(&config)?);

    use tokio::net::TcpListener;

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Listening on {}", config.bind_addr);
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::text_generation::MockTextGenerator;
    use axum::{body::Body, http::{Request, StatusCode}};
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_check_answers_ok() {
        let state = Arc::new(AppState::new(Arc::new(MockTextGenerator::new())));
        let response = api_router(state)
            .oneshot(Request::builder().uri("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn pruning_keeps_clients_still_inside_their_window() {
        let state = AppState::new(Arc::new(MockTextGenerator::new()));
        let client = IpAddr::from([10, 0, 0, 1]);
        assert!(state.welcome_limiter.check_key(&client).is_ok());

        state.prune_limiters();
        assert_eq!(state.welcome_limiter.len(), 1);
    }

    #[test]
    fn cors_accepts_configured_origin() {
        let config = Config::from_lookup(|name| match name {
            "OPENROUTER_API_KEY" => Some("sk-test".to_string()),
            "FRONTEND_URL" => Some("https://pluravita.com".to_string()),
            _ => None,
        })
        .unwrap();
        assert!(cors_layer(&config).is_ok());
    }
}
