//! API Client
//!
//! ベースURLを持つ素のクライアントと、全リクエストに Bearer ヘッダーを付ける
//! 認証済みクライアント

use anyhow::{Context, Result};
use log::debug;
use reqwest::{Client, Method, RequestBuilder};

use crate::domain::entities::session::SessionToken;

/// ベースURLに対してリクエストを組み立てるクライアント
///
/// タイムアウトは設定しない（応答が無ければそのまま待ち続ける）
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// ベースURLとパスを `/` 1つで連結する
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("{} {}", method, url);
        self.http.request(method, url)
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// トークンを持つ認証済みクライアントを派生させる
    ///
    /// 内部の接続プールは共有される
    pub fn authenticated(&self, token: SessionToken) -> AuthenticatedClient {
        AuthenticatedClient {
            inner: self.clone(),
            token,
        }
    }
}

/// `Authorization: Bearer <token>` を全リクエストに付けるクライアント
#[derive(Debug, Clone)]
pub struct AuthenticatedClient {
    inner: ApiClient,
    token: SessionToken,
}

impl AuthenticatedClient {
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.inner
            .request(method, path)
            .bearer_auth(self.token.as_str())
    }

    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }
}
