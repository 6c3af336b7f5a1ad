//! # Use Cases
//!
//! フローの各ステップ（順番に実行される）
//!
//! ## ユースケース
//!
//! - **AuthenticateUseCase**: ログインしてトークンを取得
//! - **FetchProfileUseCase**: 認証済みプロフィールの取得
//! - **PrepareArtifactUseCase**: テスト用ファイルの用意
//! - **AnalyzeUploadUseCase**: 画像アップロードと解析

pub mod analyze_upload;
pub mod authenticate;
pub mod fetch_profile;
pub mod prepare_artifact;
