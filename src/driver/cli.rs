//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

use crate::adapter::config::Config;

/// ログイン・プロフィール取得・画像アップロードを順に試すスモークテスト
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "upload-smoke")]
#[command(about = "Exercise the login, profile and image upload API end to end", long_about = None)]
pub struct Args {
    /// Config file path (defaults to ./upload-smoke.json when present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// API base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Login email
    #[arg(long)]
    pub email: Option<String>,

    /// Login password
    #[arg(long)]
    pub password: Option<String>,

    /// Value sent as the patientId form field
    #[arg(long)]
    pub patient_id: Option<String>,

    /// Value sent as the reportLength form field
    #[arg(long)]
    pub report_length: Option<String>,

    /// Path of the test image (created if missing)
    #[arg(long)]
    pub artifact: Option<String>,
}

impl Args {
    /// 指定された引数で設定を上書きする
    pub fn apply_to(&self, config: &mut Config) {
        let overrides = [
            (&self.base_url, &mut config.base_url),
            (&self.email, &mut config.email),
            (&self.password, &mut config.password),
            (&self.patient_id, &mut config.patient_id),
            (&self.report_length, &mut config.report_length),
            (&self.artifact, &mut config.artifact_path),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value.clone();
            }
        }
    }
}
