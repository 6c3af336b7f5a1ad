//! # Analyze Upload Use Case
//!
//! テストファイルをフォームに載せて解析エンドポイントへアップロードする

use std::sync::Arc;

use log::info;

use crate::application::dto::flow_config::FlowConfig;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::artifact::{TestArtifact, UploadForm};
use crate::domain::errors::FlowError;
use crate::domain::repositories::analysis_repository::AnalysisRepository;

/// アップロードユースケース
pub struct AnalyzeUploadUseCase<A: AnalysisRepository> {
    analysis_repository: Arc<A>,
}

impl<A: AnalysisRepository> AnalyzeUploadUseCase<A> {
    pub fn new(analysis_repository: Arc<A>) -> Self {
        Self {
            analysis_repository,
        }
    }

    /// フォームを組み立ててアップロード
    ///
    /// フォームはこの呼び出しの中でだけ使われ、完了後に破棄される
    pub async fn execute(
        &self,
        artifact: TestArtifact,
        config: &FlowConfig,
    ) -> Result<AnalysisResult, FlowError> {
        let form = UploadForm::new(
            artifact,
            config.patient_id.clone(),
            config.report_length.clone(),
        );
        info!(
            "Uploading {} for patient {}",
            form.image_path().display(),
            form.patient_id
        );

        let result = self.analysis_repository.analyze(&form).await?;
        info!("Analysis {} completed", result.analysis_id);
        Ok(result)
    }
}
