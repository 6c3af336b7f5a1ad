//! HTTP Auth Repository Implementation
//!
//! AuthRepositoryのHTTP実装（`POST /auth/login`）

use async_trait::async_trait;
use log::info;

use crate::adapter::http::response::{transport_failure, JsonResponse};
use crate::adapter::http::ApiClient;
use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::session::SessionToken;
use crate::domain::errors::FlowError;
use crate::domain::repositories::auth_repository::AuthRepository;

pub const LOGIN_PATH: &str = "/auth/login";

/// 認証前のクライアントでログインするリポジトリ
pub struct HttpAuthRepository {
    client: ApiClient,
}

impl HttpAuthRepository {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AuthRepository for HttpAuthRepository {
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, FlowError> {
        let response = self
            .client
            .post(LOGIN_PATH)
            .json(credentials)
            .send()
            .await
            .map_err(|e| FlowError::Auth(transport_failure(e)))?;

        let response = JsonResponse::read(response).await.map_err(FlowError::Auth)?;
        let token = response
            .str_field("/token")
            .ok_or_else(|| FlowError::Auth(response.missing_field("token")))?;

        info!("Login accepted ({})", response.status);
        Ok(SessionToken::new(token))
    }
}
