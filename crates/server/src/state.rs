use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::{SeaOrmSongRepository, SongMutation, SongQuery, SongService};

use crate::graphql::{build_schema, SongSchema};

/// Shared handler state: the two resolvers over one song service, and the
/// GraphQL schema built on the same resolvers.
#[derive(Clone)]
pub struct ServerState {
    pub query: Arc<SongQuery<SeaOrmSongRepository>>,
    pub mutation: Arc<SongMutation<SeaOrmSongRepository>>,
    pub schema: SongSchema,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let songs = Arc::new(SongService::new(db, Arc::new(SeaOrmSongRepository)));
        let query = Arc::new(SongQuery::new(Arc::clone(&songs)));
        let mutation = Arc::new(SongMutation::new(songs));
        let schema = build_schema(Arc::clone(&query), Arc::clone(&mutation));
        Self { query, mutation, schema }
    }
}
