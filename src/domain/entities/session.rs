//! # Session Value Objects
//!
//! ログインで得たトークンとプロフィール

use std::fmt;

use crate::domain::services::text_preview::preview;

/// ログインで取得したセッショントークン
///
/// 中身は不透明な文字列で、以降のリクエストで Bearer 認証に使われる
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 先頭 `max_chars` 文字に `...` を付けた表示用文字列
    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.0, max_chars)
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionToken({})", self.preview(8))
    }
}

/// `/auth/profile` が返すユーザー情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub email: String,
}
