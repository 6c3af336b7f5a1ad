//! # Test Artifact
//!
//! アップロードに使うプレースホルダー画像とマルチパートフォーム

use std::path::{Path, PathBuf};

/// ファイルが存在しない場合に書き込むプレースホルダーの中身
pub const PLACEHOLDER_CONTENT: &[u8] = b"fake-image-data";

/// ディスク上に用意されたテスト用ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestArtifact {
    pub path: PathBuf,
    /// 今回の実行で新規作成したかどうか
    pub created: bool,
}

impl TestArtifact {
    pub fn new(path: impl Into<PathBuf>, created: bool) -> Self {
        Self {
            path: path.into(),
            created,
        }
    }

    /// フォームに載せるファイル名（パスの最後の要素）
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload.bin".to_string())
    }
}

/// `/analyze` に送るマルチパートフォームの内容
///
/// - `image`: アーティファクトのファイルストリーム
/// - `patientId`: 患者ID
/// - `reportLength`: レポート長
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub artifact: TestArtifact,
    pub patient_id: String,
    pub report_length: String,
}

impl UploadForm {
    pub fn new(artifact: TestArtifact, patient_id: String, report_length: String) -> Self {
        Self {
            artifact,
            patient_id,
            report_length,
        }
    }

    pub fn image_path(&self) -> &Path {
        &self.artifact.path
    }

    /// 拡張子から推定した画像のMIMEタイプ
    pub fn image_mime_type(&self) -> &'static str {
        let ext = self
            .artifact
            .path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase());
        match ext.as_deref() {
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("png") => "image/png",
            Some("gif") => "image/gif",
            Some("bmp") => "image/bmp",
            Some("dcm") => "application/dicom",
            _ => "application/octet-stream",
        }
    }
}
