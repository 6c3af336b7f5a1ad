//! # Domain Layer
//!
//! アップロードフローのビジネスルールと値オブジェクトを定義します。
//!
//! ## 特徴
//!
//! - HTTPクライアントやファイルシステムの詳細を知らない
//! - フレームワークに依存しない
//! - 純粋な値オブジェクトとエラー分類
//!
//! ## 構成要素
//!
//! - **entities**: 値オブジェクト（Credentials, SessionToken, AnalysisResultなど）
//! - **errors**: フロー全体で共有するエラー分類
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（表示用のプレビュー生成）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
