use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use client_core::{RecommendClient, RecommendForm};
use serde::Deserialize;
use tracing::{info, warn};

mod config;
mod pages;
mod style;

use config::{load_settings, parse_recommend_url};

#[derive(Clone)]
struct AppState {
    recommender: RecommendClient,
}

#[derive(Debug, Deserialize)]
struct SubmitBody {
    #[serde(default)]
    query: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let settings = load_settings();
    let recommend_url = parse_recommend_url(&settings.recommend_url)?;
    let state = AppState {
        recommender: RecommendClient::new(recommend_url.as_str()),
    };
    let app = build_router(Arc::new(state));

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, endpoint = %recommend_url, "recommendation page listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(index))
        .route("/recommend", post(submit))
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn index() -> Html<String> {
    Html(pages::render_page(&RecommendForm::new()))
}

async fn submit(
    State(state): State<Arc<AppState>>,
    Form(body): Form<SubmitBody>,
) -> Html<String> {
    let mut form = RecommendForm::with_query(body.query);
    form.submit(&state.recommender).await;

    // The query itself is user content; only its length is logged here.
    match (&form.result, &form.error) {
        (Some(result), _) => info!(
            query_len = form.query.chars().count(),
            courses = result.courses.len(),
            "recommendation rendered"
        ),
        (None, Some(error)) => warn!(
            query_len = form.query.chars().count(),
            %error,
            "recommendation failed"
        ),
        // Empty query: the submission was silently blocked.
        (None, None) => {}
    }

    Html(pages::render_page(&form))
}
