//! # Domain Repositories
//!
//! Repository trait（インターフェース）定義
//!
//! ## 特徴
//!
//! - Domain層では実装を持たない（traitの定義のみ）
//! - Adapter層で具体的な実装を提供（HTTP, ファイルシステム）
//! - Use Case はこれらの trait にのみ依存する

pub mod analysis_repository;
pub mod artifact_repository;
pub mod auth_repository;
