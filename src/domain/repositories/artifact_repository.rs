//! # Artifact Repository Trait
//!
//! テスト用ファイルの用意を抽象化

use std::path::Path;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::artifact::TestArtifact;
use crate::domain::errors::FlowError;

/// テスト用ファイルのリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ArtifactRepository: Send + Sync {
    /// `path` にファイルが無ければ `content` で作成する
    ///
    /// 既に存在する場合は何もしない（中身も上書きしない）
    ///
    /// # Errors
    ///
    /// 存在確認または書き込みに失敗した場合は `FlowError::Artifact`
    async fn ensure_exists(&self, path: &Path, content: &[u8]) -> Result<TestArtifact, FlowError>;
}
