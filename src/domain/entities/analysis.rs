//! # AnalysisResult Value Object
//!
//! `/analyze` の応答のうちフローが使う部分

use crate::domain::services::text_preview::preview;

/// 解析結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub analysis_id: String,
    pub report: String,
}

impl AnalysisResult {
    pub fn new(analysis_id: impl Into<String>, report: impl Into<String>) -> Self {
        Self {
            analysis_id: analysis_id.into(),
            report: report.into(),
        }
    }

    /// レポートの先頭 `max_chars` 文字のプレビュー
    pub fn report_preview(&self, max_chars: usize) -> String {
        preview(&self.report, max_chars)
    }
}
