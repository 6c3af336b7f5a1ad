//! HTTP Adapter
//!
//! reqwest を使ったAPIクライアントとレスポンス処理

pub mod client;
pub mod response;

pub use client::{ApiClient, AuthenticatedClient};
pub use response::JsonResponse;
