use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use alcove_service::{
	ActivityEntry, AddActivityRequest, AddActivityResponse, GraphResponse, PaletteResponse,
	ReadDocumentResponse, RelatedRequest, RelatedResponse, SearchRequest, SearchResponse,
	ServiceError, StatsResponse, WhatMattersResponse, WriteDocumentRequest,
	WriteDocumentResponse,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/api/search", get(search))
		.route("/api/related", get(related))
		.route("/api/graph", get(graph))
		.route("/api/palette", get(palette))
		.route("/api/what-matters", get(what_matters))
		.route("/api/vault/read", get(vault_read))
		.route("/api/vault/write", post(vault_write))
		.route("/api/vault/stats", get(vault_stats))
		.route("/api/activity", get(activity_list).post(activity_add))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
	#[serde(default)]
	q: Option<String>,
	#[serde(default)]
	category: Option<String>,
	#[serde(default)]
	tag: Option<String>,
	#[serde(default)]
	limit: Option<usize>,
}

async fn search(
	State(state): State<AppState>,
	Query(query): Query<SearchQuery>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(SearchRequest {
		query: query.q.unwrap_or_default(),
		category: query.category,
		tag: query.tag,
		limit: query.limit,
	})?;
	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct RelatedQuery {
	#[serde(default)]
	path: Option<String>,
	#[serde(default)]
	activity_id: Option<String>,
}

async fn related(
	State(state): State<AppState>,
	Query(query): Query<RelatedQuery>,
) -> Result<Json<RelatedResponse>, ApiError> {
	let response = state
		.service
		.related(RelatedRequest { path: query.path, activity_id: query.activity_id })?;
	Ok(Json(response))
}

async fn graph(State(state): State<AppState>) -> Result<Json<GraphResponse>, ApiError> {
	let response = state.service.graph()?;
	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct PaletteQuery {
	#[serde(default)]
	q: Option<String>,
}

async fn palette(
	State(state): State<AppState>,
	Query(query): Query<PaletteQuery>,
) -> Result<Json<PaletteResponse>, ApiError> {
	let response = state.service.palette(query.q.as_deref().unwrap_or_default())?;
	Ok(Json(response))
}

async fn what_matters(
	State(state): State<AppState>,
) -> Result<Json<WhatMattersResponse>, ApiError> {
	let response = state.service.what_matters()?;
	Ok(Json(response))
}

#[derive(Debug, Deserialize)]
struct ReadQuery {
	#[serde(default)]
	slug: Option<String>,
}

async fn vault_read(
	State(state): State<AppState>,
	Query(query): Query<ReadQuery>,
) -> Result<Json<ReadDocumentResponse>, ApiError> {
	let response = state.service.read_document(query.slug.as_deref().unwrap_or_default())?;
	Ok(Json(response))
}

async fn vault_write(
	State(state): State<AppState>,
	Json(payload): Json<WriteDocumentRequest>,
) -> Result<Json<WriteDocumentResponse>, ApiError> {
	let response = state.service.write_document(payload)?;
	Ok(Json(response))
}

async fn vault_stats(State(state): State<AppState>) -> Result<Json<StatsResponse>, ApiError> {
	let response = state.service.stats()?;
	Ok(Json(response))
}

async fn activity_list(
	State(state): State<AppState>,
) -> Result<Json<Vec<ActivityEntry>>, ApiError> {
	let response = state.service.activity_feed()?;
	Ok(Json(response))
}

async fn activity_add(
	State(state): State<AppState>,
	Json(payload): Json<AddActivityRequest>,
) -> Result<(StatusCode, Json<AddActivityResponse>), ApiError> {
	let response = state.service.add_activity(payload)?;
	Ok((StatusCode::CREATED, Json(response)))
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: String,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: String,
}

impl From<ServiceError> for ApiError {
	fn from(err: ServiceError) -> Self {
		match err {
			ServiceError::InvalidRequest { message } => {
				Self { status: StatusCode::BAD_REQUEST, message }
			},
			ServiceError::NotFound { message } => {
				Self { status: StatusCode::NOT_FOUND, message }
			},
			ServiceError::Storage { message } => {
				tracing::error!(%message, "Storage failure.");

				Self {
					status: StatusCode::INTERNAL_SERVER_ERROR,
					message: "Internal server error".to_string(),
				}
			},
		}
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
