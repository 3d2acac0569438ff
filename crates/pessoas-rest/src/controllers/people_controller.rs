//! People controller.

use crate::{
    responses::{ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use pessoas_core::{with_timeout, PersonId, PessoasError};
use pessoas_service::CreatePersonRequest;
use serde::Deserialize;
use tracing::debug;

/// Creates the people router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(fetch_people_by_term).post(create_person))
        .route("/:id", get(fetch_people_by_id))
}

/// Query parameters for the term search.
#[derive(Debug, Deserialize)]
struct TermQuery {
    t: String,
}

/// Create a new person.
///
/// Validation runs here, before the save orchestrator is invoked; the whole
/// pipeline is bounded by the configured request timeout.
async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> ApiResult<impl IntoResponse> {
    debug!("Create person request: {}", request.nickname);

    request.validate(&state.limits)?;

    let id = with_timeout(state.request_timeout, || {
        state.save_service.save_people(&request)
    })
    .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/pessoas/{}", id))],
    ))
}

/// Resolve a person by id.
async fn fetch_people_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<PersonId>> {
    debug!("Fetch person request: {}", id);

    let person_id = parse_person_id(&id)?;

    let resolved = with_timeout(state.request_timeout, || {
        state.fetch_service.fetch_people_by_id(person_id)
    })
    .await?;

    Ok(Json(resolved))
}

/// Resolve a person by search term.
///
/// No match is a `200 OK` with an empty body, never an error.
async fn fetch_people_by_term(
    State(state): State<AppState>,
    Query(query): Query<TermQuery>,
) -> ApiResult<Response> {
    debug!("Fetch person by term request: {}", query.t);

    let resolved = with_timeout(state.request_timeout, || {
        state.fetch_service.fetch_people_by_term(&query.t)
    })
    .await?;

    Ok(match resolved {
        Some(id) => Json(id).into_response(),
        None => StatusCode::OK.into_response(),
    })
}

fn parse_person_id(raw: &str) -> Result<PersonId, AppError> {
    PersonId::parse(raw)
        .map_err(|_| AppError(PessoasError::validation(format!("Invalid person id: {}", raw))))
}
