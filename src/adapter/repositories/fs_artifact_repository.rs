//! Filesystem Artifact Repository Implementation
//!
//! ArtifactRepositoryのファイルシステム実装

use std::path::Path;

use async_trait::async_trait;
use log::debug;
use tokio::fs;

use crate::domain::entities::artifact::TestArtifact;
use crate::domain::errors::FlowError;
use crate::domain::repositories::artifact_repository::ArtifactRepository;

/// ローカルディスク上のテスト用ファイル
///
/// 作成したファイルは実行後も削除しない
pub struct FsArtifactRepository;

impl FsArtifactRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FsArtifactRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ArtifactRepository for FsArtifactRepository {
    async fn ensure_exists(&self, path: &Path, content: &[u8]) -> Result<TestArtifact, FlowError> {
        let exists = fs::try_exists(path)
            .await
            .map_err(|e| FlowError::artifact(path, e))?;
        if exists {
            return Ok(TestArtifact::new(path, false));
        }

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| FlowError::artifact(path, e))?;
        }

        debug!("Writing {} placeholder bytes to {}", content.len(), path.display());
        fs::write(path, content)
            .await
            .map_err(|e| FlowError::artifact(path, e))?;

        Ok(TestArtifact::new(path, true))
    }
}
