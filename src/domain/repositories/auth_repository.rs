//! # Auth Repository Traits
//!
//! ログインと認証済みプロフィール取得を抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::credentials::Credentials;
use crate::domain::entities::session::{SessionToken, UserProfile};
use crate::domain::errors::FlowError;

/// ログインを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// 資格情報を送信してセッショントークンを得る
    ///
    /// # Errors
    ///
    /// 失敗ステータス、またはトークンを含まない応答の場合は `FlowError::Auth`
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, FlowError>;
}

/// ログイン済みユーザーのプロフィールを取得するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// # Errors
    ///
    /// 失敗ステータス、または `user.email` を含まない応答の場合は `FlowError::Request`
    async fn fetch_profile(&self) -> Result<UserProfile, FlowError>;
}
