//! # Analysis Repository Trait
//!
//! 画像アップロードと解析リクエストを抽象化

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::artifact::UploadForm;
use crate::domain::errors::FlowError;

/// 解析リポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnalysisRepository: Send + Sync {
    /// フォームをアップロードして解析結果を受け取る
    ///
    /// 画像ファイルはストリームとして送信し、リクエスト完了時に閉じる
    ///
    /// # Errors
    ///
    /// - 画像ファイルを開けない場合は `FlowError::Artifact`
    /// - 失敗ステータス、または `analysisId` / `report` を欠く応答の場合は `FlowError::Request`
    async fn analyze(&self, form: &UploadForm) -> Result<AnalysisResult, FlowError>;
}
