use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::info;

use models::song;
use service::pagination::PageRequest;

use crate::{errors::JsonApiError, state::ServerState};

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct ListQuery {
    /// Maximum number of songs, oldest first. Non-positive values return an empty list.
    pub size: Option<i32>,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
pub struct SongInput {
    pub title: String,
    pub writer: String,
}

#[derive(Debug, Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSongOutput {
    /// The removed song's public id, or null when nothing matched.
    pub public_id: Option<String>,
}

#[utoipa::path(
    get, path = "/api/songs", tag = "song",
    params(ListQuery),
    responses(
        (status = 200, description = "Songs in creation order", body = [crate::openapi::SongDoc]),
        (status = 400, description = "Invalid Request"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    WithRejection(Query(q), _): WithRejection<Query<ListQuery>, JsonApiError>,
) -> Result<Json<Vec<song::Model>>, JsonApiError> {
    let size = q.size.unwrap_or(PageRequest::default().size);
    let rows = state.query.songs(size).await?;
    info!(size, count = rows.len(), "list songs");
    Ok(Json(rows))
}

#[utoipa::path(
    get, path = "/api/songs/{public_id}", tag = "song",
    params(("public_id" = String, Path, description = "Song public id")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::SongDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    WithRejection(Path(public_id), _): WithRejection<Path<String>, JsonApiError>,
) -> Result<Json<song::Model>, JsonApiError> {
    Ok(Json(state.query.song(&public_id).await?))
}

#[utoipa::path(
    post, path = "/api/songs", tag = "song",
    request_body = SongInput,
    responses(
        (status = 200, description = "Created", body = crate::openapi::SongDoc),
        (status = 400, description = "Validation Error or Invalid Request"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    WithRejection(Json(input), _): WithRejection<Json<SongInput>, JsonApiError>,
) -> Result<Json<song::Model>, JsonApiError> {
    let created = state.mutation.create_song(&input.title, &input.writer).await?;
    Ok(Json(created))
}

#[utoipa::path(
    put, path = "/api/songs/{public_id}", tag = "song",
    params(("public_id" = String, Path, description = "Song public id")),
    request_body = SongInput,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::SongDoc),
        (status = 400, description = "Validation Error or Invalid Request"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    WithRejection(Path(public_id), _): WithRejection<Path<String>, JsonApiError>,
    WithRejection(Json(input), _): WithRejection<Json<SongInput>, JsonApiError>,
) -> Result<Json<song::Model>, JsonApiError> {
    let updated = state.mutation.update_song(&public_id, &input.title, &input.writer).await?;
    Ok(Json(updated))
}

#[utoipa::path(
    delete, path = "/api/songs/{public_id}", tag = "song",
    params(("public_id" = String, Path, description = "Song public id")),
    responses(
        (status = 200, description = "Deleted public id, or null when absent", body = DeleteSongOutput),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    WithRejection(Path(public_id), _): WithRejection<Path<String>, JsonApiError>,
) -> Result<Json<DeleteSongOutput>, JsonApiError> {
    let public_id = state.mutation.delete_song(&public_id).await?;
    Ok(Json(DeleteSongOutput { public_id }))
}
