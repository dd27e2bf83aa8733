use serde::Serialize;
use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Song as seen by API callers; the internal id is never exposed.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SongDoc { pub public_id: String, pub title: String, pub writer: String }

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::songs::list,
        crate::routes::songs::get,
        crate::routes::songs::create,
        crate::routes::songs::update,
        crate::routes::songs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            SongDoc,
            crate::routes::songs::SongInput,
            crate::routes::songs::DeleteSongOutput,
        )
    ),
    tags(
        (name = "health"),
        (name = "song")
    )
)]
pub struct ApiDoc;
