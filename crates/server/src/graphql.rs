//! GraphQL endpoint exposing `song`, `songs`, `createSong`, `updateSong`
//! and `deleteSong` over the shared resolvers.

use std::sync::Arc;

use async_graphql::{EmptySubscription, ErrorExtensions, Object, Schema, SimpleObject};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{extract::State, response::Html};
use tracing::error;

use models::song;
use service::{errors::ServiceError, SeaOrmSongRepository, SongMutation, SongQuery};

use crate::state::ServerState;

pub type SongSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

#[derive(Debug, Clone, SimpleObject)]
#[graphql(name = "Song")]
pub struct SongObject {
    pub public_id: String,
    pub title: String,
    pub writer: String,
}

impl From<song::Model> for SongObject {
    fn from(m: song::Model) -> Self {
        Self { public_id: m.public_id, title: m.title, writer: m.writer }
    }
}

/// `extensions.code` is one of `VALIDATION`, `NOT_FOUND`, `INTERNAL`.
fn to_graphql_error(e: ServiceError) -> async_graphql::Error {
    let code = if e.is_validation() {
        "VALIDATION"
    } else if matches!(e, ServiceError::NotFound(_)) {
        "NOT_FOUND"
    } else {
        error!(err = %e, "song operation failed");
        "INTERNAL"
    };
    async_graphql::Error::new(e.to_string()).extend_with(|_, ext| ext.set("code", code))
}

pub struct QueryRoot {
    query: Arc<SongQuery<SeaOrmSongRepository>>,
}

#[Object]
impl QueryRoot {
    async fn song(&self, public_id: String) -> async_graphql::Result<SongObject> {
        self.query.song(&public_id).await.map(Into::into).map_err(to_graphql_error)
    }

    /// Up to `size` songs, oldest first.
    async fn songs(&self, size: i32) -> async_graphql::Result<Vec<SongObject>> {
        let rows = self.query.songs(size).await.map_err(to_graphql_error)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot {
    mutation: Arc<SongMutation<SeaOrmSongRepository>>,
}

#[Object]
impl MutationRoot {
    async fn create_song(&self, title: String, writer: String) -> async_graphql::Result<SongObject> {
        self.mutation.create_song(&title, &writer).await.map(Into::into).map_err(to_graphql_error)
    }

    async fn update_song(
        &self,
        public_id: String,
        title: String,
        writer: String,
    ) -> async_graphql::Result<SongObject> {
        self.mutation
            .update_song(&public_id, &title, &writer)
            .await
            .map(Into::into)
            .map_err(to_graphql_error)
    }

    /// The removed song's public id, or null when nothing matched.
    async fn delete_song(&self, public_id: String) -> async_graphql::Result<Option<String>> {
        self.mutation.delete_song(&public_id).await.map_err(to_graphql_error)
    }
}

pub fn build_schema(
    query: Arc<SongQuery<SeaOrmSongRepository>>,
    mutation: Arc<SongMutation<SeaOrmSongRepository>>,
) -> SongSchema {
    Schema::build(QueryRoot { query }, MutationRoot { mutation }, EmptySubscription).finish()
}

pub async fn graphql_handler(State(state): State<ServerState>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(async_graphql::http::GraphiQLSource::build().endpoint("/graphql").finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::SongService;

    #[test]
    fn schema_uses_camel_case_operation_names() {
        // never connected: building the SDL touches no storage
        let songs = Arc::new(SongService::new(
            sea_orm::DatabaseConnection::Disconnected,
            Arc::new(SeaOrmSongRepository),
        ));
        let schema = build_schema(
            Arc::new(SongQuery::new(Arc::clone(&songs))),
            Arc::new(SongMutation::new(songs)),
        );
        let sdl = schema.sdl();
        let operations = [
            "song(publicId: String!)",
            "songs(size: Int!)",
            "createSong(",
            "updateSong(",
            "deleteSong(",
        ];
        for name in operations {
            assert!(sdl.contains(name), "missing {name} in\n{sdl}");
        }
    }
}
