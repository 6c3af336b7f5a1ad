//! # Driver Layer (Presentation)
//!
//! CLIやコンソール出力を提供
//!
//! ## 特徴
//!
//! - Use Caseを順番に呼び出してフローを実行
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **cli**: CLI引数のパース
//! - **console**: 進捗と失敗のコンソール出力
//! - **workflow**: フロー全体のオーケストレーション

pub mod cli;
pub mod console;
pub mod workflow;

pub use cli::Args;
pub use console::Console;
pub use workflow::{FlowOutcome, FlowStep, FlowSummary, UploadFlowWorkflow};
