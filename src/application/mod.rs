//! # Application Layer
//!
//! アップロードフローの各ステップ（ユースケース）
//!
//! ## 特徴
//!
//! - Domain層の値オブジェクトと Repository trait を組み合わせてステップを実現
//! - Repository traitに依存（実装には依存しない）
//! - HTTPやファイルシステムの詳細は知らない
//!
//! ## 構成要素
//!
//! - **dto**: Data Transfer Object
//! - **use_cases**: ユースケース

pub mod dto;
pub mod use_cases;
