//! Response Handling
//!
//! レスポンスを JSON として読み取り、失敗時は `ApiFailure` にまとめる

use log::warn;
use reqwest::header::HeaderMap;
use reqwest::Response;
use serde_json::Value;

use crate::domain::errors::ApiFailure;

/// 成功ステータスで返ってきた JSON レスポンス
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Value,
}

impl JsonResponse {
    /// レスポンスを読み取る
    ///
    /// # Errors
    ///
    /// - ボディの受信に失敗した場合（ステータスとヘッダーは保持）
    /// - 成功以外のステータス（ボディは JSON、無理なら文字列として保持）
    /// - 成功ステータスでもボディが JSON でない場合
    pub async fn read(response: Response) -> Result<Self, ApiFailure> {
        let status = response.status();
        let headers = collect_headers(response.headers());
        let text = response.text().await.map_err(|e| ApiFailure {
            status: Some(status.as_u16()),
            headers: headers.clone(),
            ..transport_failure(e)
        })?;

        if !status.is_success() {
            warn!("Server responded with status {}", status);
            return Err(ApiFailure::status(status.as_u16(), parse_body(text), headers));
        }

        let body = serde_json::from_str(&text).map_err(|e| {
            ApiFailure::malformed(
                status.as_u16(),
                format!("invalid JSON response: {}", e),
                headers.clone(),
            )
        })?;

        Ok(Self {
            status: status.as_u16(),
            headers,
            body,
        })
    }

    /// JSON Pointer で文字列フィールドを取り出す
    pub fn str_field(&self, pointer: &str) -> Option<&str> {
        self.body.pointer(pointer).and_then(Value::as_str)
    }

    /// 文字列または数値のフィールドを文字列として取り出す
    pub fn text_field(&self, pointer: &str) -> Option<String> {
        match self.body.pointer(pointer)? {
            Value::String(text) => Some(text.clone()),
            Value::Number(number) => Some(number.to_string()),
            _ => None,
        }
    }

    /// 必須フィールドが欠けていることを表す失敗
    pub fn missing_field(&self, field: &str) -> ApiFailure {
        ApiFailure::malformed(
            self.status,
            format!("response is missing `{}`", field),
            self.headers.clone(),
        )
    }
}

/// レスポンスを受け取る前の失敗（接続できない、など）
pub fn transport_failure(error: reqwest::Error) -> ApiFailure {
    let mut failure = ApiFailure::transport(error.to_string());
    failure.status = error.status().map(|s| s.as_u16());
    failure
}

pub fn collect_headers(headers: &HeaderMap) -> Vec<(String, String)> {
    headers
        .iter()
        .map(|(name, value)| {
            (
                name.to_string(),
                String::from_utf8_lossy(value.as_bytes()).to_string(),
            )
        })
        .collect()
}

fn parse_body(text: String) -> Option<Value> {
    if text.is_empty() {
        return None;
    }
    Some(serde_json::from_str(&text).unwrap_or(Value::String(text)))
}
