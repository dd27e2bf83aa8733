//! Service layer for the song store.
//! - `song::repository` is the narrow storage adapter over the `song` table.
//! - `song::service` owns transaction boundaries and the create/read/update/delete rules.
//! - `resolvers` exposes the service as named query and mutation operations.

pub mod errors;
pub mod pagination;
pub mod song;
pub mod resolvers;
#[cfg(test)]
pub mod test_support;

pub use resolvers::{SongMutation, SongQuery};
pub use song::{repository::SeaOrmSongRepository, service::SongService};

/// Service wired to the SeaORM-backed repository.
pub type DefaultSongService = SongService<SeaOrmSongRepository>;
