//! HTTP Session Repository Implementation
//!
//! ログイン後のリクエスト（プロフィール取得と解析アップロード）のHTTP実装

use async_trait::async_trait;
use log::debug;
use reqwest::multipart::{Form, Part};

use crate::adapter::http::response::{transport_failure, JsonResponse};
use crate::adapter::http::AuthenticatedClient;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::artifact::UploadForm;
use crate::domain::entities::session::UserProfile;
use crate::domain::errors::FlowError;
use crate::domain::repositories::analysis_repository::AnalysisRepository;
use crate::domain::repositories::auth_repository::ProfileRepository;

pub const PROFILE_PATH: &str = "/auth/profile";
pub const ANALYZE_PATH: &str = "/analyze";

/// 認証済みクライアントを使うリポジトリ
///
/// `SessionToken` が無いと作れないので、ログイン前にこれらのリクエストは送れない
pub struct HttpSessionRepository {
    client: AuthenticatedClient,
}

impl HttpSessionRepository {
    pub fn new(client: AuthenticatedClient) -> Self {
        Self { client }
    }

    /// 画像をストリームとして載せたマルチパートフォームを作る
    ///
    /// ファイルハンドルはフォームが所有し、リクエストの完了または失敗で閉じられる
    async fn build_form(form: &UploadForm) -> Result<Form, FlowError> {
        let path = form.image_path();
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|e| FlowError::artifact(path, e))?;
        let length = file
            .metadata()
            .await
            .map_err(|e| FlowError::artifact(path, e))?
            .len();
        debug!("Streaming {} ({} bytes)", path.display(), length);

        let image = Part::stream_with_length(file, length)
            .file_name(form.artifact.file_name())
            .mime_str(form.image_mime_type())
            .map_err(|e| FlowError::Request(transport_failure(e)))?;

        Ok(Form::new()
            .part("image", image)
            .text("patientId", form.patient_id.clone())
            .text("reportLength", form.report_length.clone()))
    }
}

#[async_trait]
impl ProfileRepository for HttpSessionRepository {
    async fn fetch_profile(&self) -> Result<UserProfile, FlowError> {
        let response = self
            .client
            .get(PROFILE_PATH)
            .send()
            .await
            .map_err(|e| FlowError::Request(transport_failure(e)))?;

        let response = JsonResponse::read(response)
            .await
            .map_err(FlowError::Request)?;
        let email = response
            .str_field("/user/email")
            .ok_or_else(|| FlowError::Request(response.missing_field("user.email")))?;

        Ok(UserProfile {
            email: email.to_string(),
        })
    }
}

#[async_trait]
impl AnalysisRepository for HttpSessionRepository {
    async fn analyze(&self, form: &UploadForm) -> Result<AnalysisResult, FlowError> {
        let multipart = Self::build_form(form).await?;

        let response = self
            .client
            .post(ANALYZE_PATH)
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| FlowError::Request(transport_failure(e)))?;

        let response = JsonResponse::read(response)
            .await
            .map_err(FlowError::Request)?;
        let analysis_id = response
            .text_field("/analysisId")
            .ok_or_else(|| FlowError::Request(response.missing_field("analysisId")))?;
        let report = response
            .str_field("/report")
            .ok_or_else(|| FlowError::Request(response.missing_field("report")))?;

        Ok(AnalysisResult::new(analysis_id, report))
    }
}
