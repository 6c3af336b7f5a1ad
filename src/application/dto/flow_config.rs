//! # Flow Configuration DTO
//!
//! フロー実行に必要な設定値のData Transfer Object

use std::path::PathBuf;

use crate::domain::entities::credentials::Credentials;

/// フロー設定
///
/// 設定ファイルとCLI引数を解決した後の値
#[derive(Debug, Clone)]
pub struct FlowConfig {
    /// ログインに使う資格情報
    pub credentials: Credentials,
    /// フォームの `patientId`
    pub patient_id: String,
    /// フォームの `reportLength`
    pub report_length: String,
    /// テスト用ファイルのパス
    pub artifact_path: PathBuf,
}

impl FlowConfig {
    /// 新しいフロー設定を作成します。
    ///
    /// # 例
    ///
    /// ```
    /// use upload_smoke::application::dto::flow_config::FlowConfig;
    /// use upload_smoke::domain::entities::credentials::Credentials;
    ///
    /// let config = FlowConfig::new(
    ///     Credentials::new("tech@test.com", "password123"),
    ///     "P167863300".to_string(),
    ///     "100".to_string(),
    ///     "test-xray.jpg".into(),
    /// );
    ///
    /// assert_eq!(config.credentials.email, "tech@test.com");
    /// assert_eq!(config.report_length, "100");
    /// ```
    pub fn new(
        credentials: Credentials,
        patient_id: String,
        report_length: String,
        artifact_path: PathBuf,
    ) -> Self {
        Self {
            credentials,
            patient_id,
            report_length,
            artifact_path,
        }
    }
}
