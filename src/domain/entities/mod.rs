//! # Domain Entities
//!
//! フローの各ステップで受け渡す値オブジェクト
//!
//! ## エンティティ
//!
//! - **Credentials**: ログイン用の資格情報
//! - **SessionToken / UserProfile**: 認証済みセッション
//! - **TestArtifact / UploadForm**: アップロード対象のファイルとフォーム
//! - **AnalysisResult**: 解析エンドポイントの応答

pub mod analysis;
pub mod artifact;
pub mod credentials;
pub mod session;
