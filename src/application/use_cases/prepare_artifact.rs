//! # Prepare Artifact Use Case
//!
//! アップロード用のテストファイルを用意する

use std::path::Path;
use std::sync::Arc;

use log::{debug, info};

use crate::domain::entities::artifact::{TestArtifact, PLACEHOLDER_CONTENT};
use crate::domain::errors::FlowError;
use crate::domain::repositories::artifact_repository::ArtifactRepository;

/// テストファイル準備ユースケース
///
/// 冪等: 2回目以降の実行では既存ファイルをそのまま使う
pub struct PrepareArtifactUseCase<R: ArtifactRepository> {
    artifact_repository: Arc<R>,
}

impl<R: ArtifactRepository> PrepareArtifactUseCase<R> {
    pub fn new(artifact_repository: Arc<R>) -> Self {
        Self {
            artifact_repository,
        }
    }

    pub async fn execute(&self, path: &Path) -> Result<TestArtifact, FlowError> {
        debug!("Checking test artifact at {}", path.display());

        let artifact = self
            .artifact_repository
            .ensure_exists(path, PLACEHOLDER_CONTENT)
            .await?;

        if artifact.created {
            info!("Created test artifact {}", artifact.path.display());
        } else {
            debug!("Reusing existing test artifact {}", artifact.path.display());
        }
        Ok(artifact)
    }
}
