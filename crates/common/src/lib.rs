//! Shared building blocks for the song service crates: wire types and
//! tracing setup.

pub mod types;
pub mod utils;
