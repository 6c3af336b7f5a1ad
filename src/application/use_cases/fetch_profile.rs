//! # Fetch Profile Use Case
//!
//! 認証済みのプロフィールを取得する

use std::sync::Arc;

use log::info;

use crate::domain::entities::session::UserProfile;
use crate::domain::errors::FlowError;
use crate::domain::repositories::auth_repository::ProfileRepository;

/// プロフィール取得ユースケース
pub struct FetchProfileUseCase<P: ProfileRepository> {
    profile_repository: Arc<P>,
}

impl<P: ProfileRepository> FetchProfileUseCase<P> {
    pub fn new(profile_repository: Arc<P>) -> Self {
        Self { profile_repository }
    }

    pub async fn execute(&self) -> Result<UserProfile, FlowError> {
        let profile = self.profile_repository.fetch_profile().await?;
        info!("Profile retrieved for {}", profile.email);
        Ok(profile)
    }
}
