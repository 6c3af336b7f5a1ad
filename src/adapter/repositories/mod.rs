//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod fs_artifact_repository;
pub mod http_auth_repository;
pub mod http_session_repository;
