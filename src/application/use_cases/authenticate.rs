//! # Authenticate Use Case
//!
//! ログインしてセッショントークンを得る

use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::session::SessionToken;
use crate::domain::errors::FlowError;
use crate::domain::repositories::auth_repository::AuthRepository;

/// ログインユースケース
pub struct AuthenticateUseCase<A: AuthRepository> {
    auth_repository: Arc<A>,
}

impl<A: AuthRepository> AuthenticateUseCase<A> {
    pub fn new(auth_repository: Arc<A>) -> Self {
        Self { auth_repository }
    }

    /// ログインを実行
    ///
    /// # Errors
    ///
    /// ログインに失敗した場合は `FlowError::Auth`
    ///
    /// 空のトークンもそのまま返す。使えるかどうかは以降のリクエストでサーバーが判断する
    pub async fn execute(&self, credentials: &Credentials) -> Result<SessionToken, FlowError> {
        info!("Logging in as {}", credentials.email);

        let token = self.auth_repository.login(credentials).await?;

        debug!("Received session token {:?}", token);
        Ok(token)
    }
}
