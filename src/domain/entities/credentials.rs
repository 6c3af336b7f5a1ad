//! # Credentials Value Object
//!
//! ログインエンドポイントに送信する資格情報

use serde::Serialize;
use std::fmt;

/// ログイン用の資格情報
///
/// `/auth/login` に `{ "email": ..., "password": ... }` としてそのまま送信される
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

// パスワードはログに出さない
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}
