//! Configuration
//!
//! 設定ファイル（JSON）の読み込み。全項目にデフォルト値があり、
//! 設定ファイルが無くても元のスモークテストと同じ値で実行できる。

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::application::dto::flow_config::FlowConfig;
use crate::domain::entities::credentials::Credentials;

pub const DEFAULT_CONFIG_PATH: &str = "./upload-smoke.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:5004/api";
pub const DEFAULT_EMAIL: &str = "tech@test.com";
pub const DEFAULT_PASSWORD: &str = "password123";
pub const DEFAULT_PATIENT_ID: &str = "P167863300";
pub const DEFAULT_REPORT_LENGTH: &str = "100";
pub const DEFAULT_ARTIFACT_PATH: &str = "test-xray.jpg";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,

    // Login
    pub email: String,
    pub password: String,

    // Upload form
    pub patient_id: String,
    pub report_length: String,
    pub artifact_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            password: DEFAULT_PASSWORD.to_string(),
            patient_id: DEFAULT_PATIENT_ID.to_string(),
            report_length: DEFAULT_REPORT_LENGTH.to_string(),
            artifact_path: DEFAULT_ARTIFACT_PATH.to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path))?;
        Ok(config)
    }

    /// 設定を解決する
    ///
    /// - パス指定あり: そのファイルを読む（無ければエラー）
    /// - パス指定なし: `DEFAULT_CONFIG_PATH` があれば読み、無ければデフォルト値
    pub fn resolve(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                info!("Loading configuration from {}", path);
                Self::load(path)
            }
            None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                info!("Loading configuration from {}", DEFAULT_CONFIG_PATH);
                Self::load(DEFAULT_CONFIG_PATH)
            }
            None => {
                debug!("No config file found, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    /// `~` を展開したアーティファクトのパス
    pub fn expanded_artifact_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.artifact_path).as_ref())
    }

    pub fn to_flow_config(&self) -> FlowConfig {
        FlowConfig::new(
            Credentials::new(self.email.clone(), self.password.clone()),
            self.patient_id.clone(),
            self.report_length.clone(),
            self.expanded_artifact_path(),
        )
    }
}
