use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use taproom_http::{error::AppError, error::ErrorResponse, validation::ValidatedJson};
use utoipa::{IntoParams, OpenApi};
use uuid::Uuid;

use super::dto::BeerDto;
use super::mapper;
use super::models::BeerStyle;
use super::repository::BeerRepository;

pub const BEER_PATH_V1: &str = "/api/v1/beer/";

#[derive(Clone)]
pub struct BeerState {
    pub repository: Arc<BeerRepository>,
}

#[derive(OpenApi)]
#[openapi(
    paths(get_beer_by_id, save_new_beer, update_beer_by_id),
    components(schemas(BeerDto, BeerStyle)),
    tags((name = "Beer", description = "Beer catalogue"))
)]
pub struct BeerApi;

pub fn router(repository: Arc<BeerRepository>) -> Router {
    Router::new()
        .route(BEER_PATH_V1, post(save_new_beer))
        .route("/api/v1/beer", post(save_new_beer))
        .route(
            "/api/v1/beer/{beerId}",
            get(get_beer_by_id).put(update_beer_by_id),
        )
        .with_state(BeerState { repository })
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct BeerQuery {
    /// Is Beer Cold Query param
    pub iscold: Option<String>,
}

/// Get Beer by id
#[utoipa::path(
    get,
    path = "/api/v1/beer/{beerId}",
    tag = "Beer",
    params(
        ("beerId" = Uuid, Path, description = "UUID of desired beer to get."),
        BeerQuery
    ),
    responses(
        (status = 200, description = "Beer found", body = BeerDto),
        (status = 400, description = "Malformed beer id", body = ErrorResponse),
        (status = 404, description = "No beer with this id", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "beers::get_beer_by_id", skip_all)]
async fn get_beer_by_id(
    State(state): State<BeerState>,
    path: Result<Path<Uuid>, PathRejection>,
    query: Result<Query<BeerQuery>, QueryRejection>,
) -> Result<Json<BeerDto>, AppError> {
    let Path(beer_id) = path?;
    let Query(query) = query?;
    tracing::debug!(%beer_id, iscold = ?query.iscold, "fetching beer");

    let beer = state
        .repository
        .find_by_id(beer_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("beer {beer_id} not found")))?;

    Ok(Json(mapper::entity_to_dto(beer)))
}

/// Create a new beer
#[utoipa::path(
    post,
    path = "/api/v1/beer/",
    tag = "Beer",
    request_body = BeerDto,
    responses(
        (status = 201, description = "Beer created",
            headers(("Location" = String, description = "Path of the new beer"))),
        (status = 400, description = "One `field: message` entry per violated constraint",
            body = Vec<String>),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "beers::save_new_beer", skip_all)]
async fn save_new_beer(
    State(state): State<BeerState>,
    ValidatedJson(beer_dto): ValidatedJson<BeerDto>,
) -> Result<impl IntoResponse, AppError> {
    let beer = mapper::dto_to_entity(beer_dto.without_server_fields());
    let saved = state.repository.save(beer).await?;
    let beer_id = saved
        .id
        .ok_or_else(|| anyhow!("store returned a beer without an id"))?;

    tracing::info!(%beer_id, "beer created");
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("{BEER_PATH_V1}{beer_id}"))],
    ))
}

/// Update a beer by id
#[utoipa::path(
    put,
    path = "/api/v1/beer/{beerId}",
    tag = "Beer",
    params(("beerId" = Uuid, Path, description = "UUID of the beer to update.")),
    request_body = BeerDto,
    responses(
        (status = 204, description = "Beer updated"),
        (status = 400, description = "One `field: message` entry per violated constraint",
            body = Vec<String>),
        (status = 409, description = "Beer was changed by another request", body = ErrorResponse),
        (status = 415, description = "Body is not JSON", body = ErrorResponse)
    )
)]
#[tracing::instrument(name = "beers::update_beer_by_id", skip_all)]
async fn update_beer_by_id(
    State(state): State<BeerState>,
    path: Result<Path<Uuid>, PathRejection>,
    ValidatedJson(beer_dto): ValidatedJson<BeerDto>,
) -> Result<StatusCode, AppError> {
    let Path(beer_id) = path?;

    match state.repository.find_by_id(beer_id).await? {
        Some(mut beer) => {
            mapper::apply_update(beer_dto, &mut beer);
            let saved = state.repository.save(beer).await?;
            tracing::info!(%beer_id, version = ?saved.version, "beer updated");
        }
        None => tracing::warn!(%beer_id, "update for unknown beer ignored"),
    }

    Ok(StatusCode::NO_CONTENT)
}
