//! HTTP surface: one GET route per query, parameters in the query string.
//!
//! Domain outcomes (not found, invalid month, vote gate) are all 200 responses
//! carrying a `result` message.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::get,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::actor::get_actor;
use crate::data::Catalog;
use crate::dia::cantidad_filmaciones_dia;
use crate::director::get_director;
use crate::mes::cantidad_filmaciones_mes;
use crate::score::score_titulo;
use crate::votos::votos_titulo;

pub const GREETING: &str = "Bienvenido a la API de películas";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub result: String,
}

impl From<String> for QueryResult {
    fn from(result: String) -> Self {
        QueryResult { result }
    }
}

#[derive(Deserialize)]
struct MesParams {
    mes: String,
}

#[derive(Deserialize)]
struct DiaParams {
    dia: String,
}

#[derive(Deserialize)]
struct TituloParams {
    titulo: String,
}

#[derive(Deserialize)]
struct ActorParams {
    nombre_actor: String,
}

#[derive(Deserialize)]
struct DirectorParams {
    nombre_director: String,
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/cantidad_filmaciones_mes/", get(filmaciones_mes))
        .route("/cantidad_filmaciones_dia/", get(filmaciones_dia))
        .route("/score_titulo/", get(score))
        .route("/votos_titulo/", get(votos))
        .route("/actor/", get(actor))
        .route("/director/", get(director))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<serde_json::Value> {
    Json(json!({ "message": GREETING }))
}

async fn filmaciones_mes(
    State(state): State<AppState>,
    Query(params): Query<MesParams>,
) -> Json<QueryResult> {
    Json(cantidad_filmaciones_mes(&state.catalog, &params.mes).into())
}

async fn filmaciones_dia(
    State(state): State<AppState>,
    Query(params): Query<DiaParams>,
) -> Json<QueryResult> {
    Json(cantidad_filmaciones_dia(&state.catalog, &params.dia).into())
}

async fn score(
    State(state): State<AppState>,
    Query(params): Query<TituloParams>,
) -> Json<QueryResult> {
    Json(score_titulo(&state.catalog, &params.titulo).into())
}

async fn votos(
    State(state): State<AppState>,
    Query(params): Query<TituloParams>,
) -> Json<QueryResult> {
    Json(votos_titulo(&state.catalog, &params.titulo).into())
}

async fn actor(
    State(state): State<AppState>,
    Query(params): Query<ActorParams>,
) -> Json<QueryResult> {
    Json(get_actor(&state.catalog, &params.nombre_actor).into())
}

async fn director(
    State(state): State<AppState>,
    Query(params): Query<DirectorParams>,
) -> Json<QueryResult> {
    Json(get_director(&state.catalog, &params.nombre_director).into())
}

pub async fn serve(state: AppState, bind: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind).await?;
    info!(%bind, "starting HTTP server");
    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(err) => {
            error!(error = %err, "failed to listen for ctrl-c, running until killed");
            std::future::pending::<()>().await;
        }
    }
}
