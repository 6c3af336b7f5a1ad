//! # Flow Errors
//!
//! フローのどのステップで失敗しても同じ形で報告できるようにするエラー分類

use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

/// APIとの通信失敗の詳細
///
/// サーバーが返したボディ・ステータス・ヘッダーを可能な限り保持する。
/// 接続エラーなどレスポンスが無い場合は `message` だけが埋まる。
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    /// 下位レイヤーのエラーメッセージ
    pub message: String,
    /// HTTPステータスコード（レスポンスがある場合のみ）
    pub status: Option<u16>,
    /// サーバーが返したボディ（JSONでなければ文字列として保持）
    pub body: Option<Value>,
    /// レスポンスヘッダー
    pub headers: Vec<(String, String)>,
}

impl ApiFailure {
    /// レスポンスが得られなかった失敗
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
            body: None,
            headers: Vec::new(),
        }
    }

    /// 成功ステータス以外のレスポンス
    pub fn status(status: u16, body: Option<Value>, headers: Vec<(String, String)>) -> Self {
        Self {
            message: format!("server responded with status {}", status),
            status: Some(status),
            body,
            headers,
        }
    }

    /// 成功ステータスだがボディが期待した形でない
    pub fn malformed(status: u16, message: impl Into<String>, headers: Vec<(String, String)>) -> Self {
        Self {
            message: message.into(),
            status: Some(status),
            body: None,
            headers,
        }
    }

    /// 表示用の最も具体的なエラー内容
    ///
    /// サーバーのボディがあればそれを、無ければメッセージを返す
    pub fn detail(&self) -> String {
        match &self.body {
            Some(Value::String(text)) if !text.is_empty() => text.clone(),
            Some(Value::String(_)) | None => self.message.clone(),
            Some(body) => body.to_string(),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} (status {})", self.detail(), status),
            None => write!(f, "{}", self.detail()),
        }
    }
}

/// フロー全体のエラー
#[derive(Debug, Error)]
pub enum FlowError {
    /// ログインの失敗（ステータス異常またはトークン欠落）
    #[error("authentication failed: {0}")]
    Auth(ApiFailure),

    /// 認証後のリクエストの失敗
    #[error("request failed: {0}")]
    Request(ApiFailure),

    /// テスト用ファイルの準備・読み込みの失敗
    #[error("test artifact {} unavailable: {source}", .path.display())]
    Artifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FlowError {
    pub fn artifact(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Artifact {
            path: path.into(),
            source,
        }
    }

    /// HTTP由来のエラーなら詳細を返す
    pub fn api_failure(&self) -> Option<&ApiFailure> {
        match self {
            Self::Auth(failure) | Self::Request(failure) => Some(failure),
            Self::Artifact { .. } => None,
        }
    }

    /// 表示用の最も具体的なエラー内容
    pub fn detail(&self) -> String {
        match self.api_failure() {
            Some(failure) => failure.detail(),
            None => self.to_string(),
        }
    }
}
