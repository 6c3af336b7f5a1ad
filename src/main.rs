//! upload-smoke - Upload Flow Smoke Test
//!
//! ログイン・プロフィール取得・画像アップロードを順に実行して結果を表示する

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use upload_smoke::adapter::config::Config;
use upload_smoke::driver::{Args, Console, UploadFlowWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration, then apply CLI overrides
    let mut config = Config::resolve(args.config.as_deref())?;
    args.apply_to(&mut config);

    let workflow = UploadFlowWorkflow::new(config)?;

    // 失敗してもレポートを出力済みなので終了コードは変えない
    let mut console = Console::stdio();
    workflow.execute(&mut console).await?;

    Ok(())
}
