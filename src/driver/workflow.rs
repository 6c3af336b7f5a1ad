//! Workflow Orchestration
//!
//! ログイン → プロフィール取得 → テストファイル準備 → アップロード を順に実行し、
//! 最初の失敗で残りのステップを打ち切る

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result};
use log::{info, warn};

use crate::adapter::config::Config;
use crate::adapter::http::ApiClient;
use crate::adapter::repositories::fs_artifact_repository::FsArtifactRepository;
use crate::adapter::repositories::http_auth_repository::HttpAuthRepository;
use crate::adapter::repositories::http_session_repository::HttpSessionRepository;
use crate::application::dto::flow_config::FlowConfig;
use crate::application::use_cases::analyze_upload::AnalyzeUploadUseCase;
use crate::application::use_cases::authenticate::AuthenticateUseCase;
use crate::application::use_cases::fetch_profile::FetchProfileUseCase;
use crate::application::use_cases::prepare_artifact::PrepareArtifactUseCase;
use crate::domain::entities::analysis::AnalysisResult;
use crate::domain::entities::artifact::TestArtifact;
use crate::domain::entities::session::{SessionToken, UserProfile};
use crate::domain::errors::FlowError;

use super::console::Console;

pub const TOKEN_PREVIEW_CHARS: usize = 50;
pub const REPORT_PREVIEW_CHARS: usize = 100;

/// フローのステップ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowStep {
    Login,
    Profile,
    PrepareArtifact,
    Upload,
}

impl fmt::Display for FlowStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Login => "login",
            Self::Profile => "profile",
            Self::PrepareArtifact => "prepare artifact",
            Self::Upload => "upload",
        };
        f.write_str(name)
    }
}

/// 全ステップ成功時の結果
#[derive(Debug, Clone)]
pub struct FlowSummary {
    pub token: SessionToken,
    pub profile: UserProfile,
    pub artifact: TestArtifact,
    pub analysis: AnalysisResult,
}

/// フローの実行結果
///
/// 失敗しても `execute` は `Ok` を返す（失敗はコンソールに報告済み）
#[derive(Debug)]
pub enum FlowOutcome {
    Passed(FlowSummary),
    Failed { step: FlowStep, error: FlowError },
}

impl FlowOutcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Self::Passed(_))
    }
}

enum RunError {
    Step(FlowStep, FlowError),
    Console(io::Error),
}

impl From<io::Error> for RunError {
    fn from(e: io::Error) -> Self {
        Self::Console(e)
    }
}

fn at(step: FlowStep) -> impl FnOnce(FlowError) -> RunError {
    move |error| RunError::Step(step, error)
}

/// Upload Flow Workflow
pub struct UploadFlowWorkflow {
    config: FlowConfig,
    client: ApiClient,
    authenticate_use_case: AuthenticateUseCase<HttpAuthRepository>,
    prepare_artifact_use_case: PrepareArtifactUseCase<FsArtifactRepository>,
}

impl UploadFlowWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Result<Self> {
        let client = ApiClient::new(config.base_url.clone())
            .with_context(|| format!("Failed to create API client for {}", config.base_url))?;

        let auth_repo = Arc::new(HttpAuthRepository::new(client.clone()));
        let artifact_repo = Arc::new(FsArtifactRepository::new());

        Ok(Self {
            config: config.to_flow_config(),
            client,
            authenticate_use_case: AuthenticateUseCase::new(auth_repo),
            prepare_artifact_use_case: PrepareArtifactUseCase::new(artifact_repo),
        })
    }

    pub fn config(&self) -> &FlowConfig {
        &self.config
    }

    /// Execute the upload flow
    ///
    /// # Errors
    ///
    /// コンソールへの書き込みに失敗した場合のみ。ステップの失敗は `FlowOutcome::Failed`
    pub async fn execute<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Result<FlowOutcome> {
        info!("Starting upload flow against {}", self.client.base_url());

        let result = self.run_steps(console).await;
        let outcome = match result {
            Ok(summary) => {
                console.line("")?;
                console.line("=== All tests passed! ===")?;
                FlowOutcome::Passed(summary)
            }
            Err(RunError::Step(step, error)) => {
                warn!("Upload flow failed at {} step: {}", step, error);
                console.failure(&error).context("Failed to write failure report")?;
                FlowOutcome::Failed { step, error }
            }
            Err(RunError::Console(e)) => {
                return Err(e).context("Failed to write to console");
            }
        };
        console.flush()?;

        Ok(outcome)
    }

    async fn run_steps<O: Write, E: Write>(
        &self,
        console: &mut Console<O, E>,
    ) -> Result<FlowSummary, RunError> {
        console.line("=== Testing Complete Upload Flow ===")?;

        // Step 1: Login
        console.step(1, "Logging in as technician...")?;
        let token = self
            .authenticate_use_case
            .execute(&self.config.credentials)
            .await
            .map_err(at(FlowStep::Login))?;
        console.success("Login successful")?;
        console.line(format!("Token: {}", token.preview(TOKEN_PREVIEW_CHARS)))?;

        // ログイン後のリクエストは全てこのクライアント経由
        let session_repo = Arc::new(HttpSessionRepository::new(
            self.client.authenticated(token.clone()),
        ));

        // Step 2: Profile
        console.step(2, "Testing profile endpoint...")?;
        let profile = FetchProfileUseCase::new(session_repo.clone())
            .execute()
            .await
            .map_err(at(FlowStep::Profile))?;
        console.success(format!("Profile retrieved: {}", profile.email))?;

        // Step 3: Upload
        console.step(3, "Testing image upload...")?;
        let artifact = self
            .prepare_artifact_use_case
            .execute(&self.config.artifact_path)
            .await
            .map_err(at(FlowStep::PrepareArtifact))?;
        if artifact.created {
            console.line("Created test image file")?;
        }

        let analysis = AnalyzeUploadUseCase::new(session_repo)
            .execute(artifact.clone(), &self.config)
            .await
            .map_err(at(FlowStep::Upload))?;
        console.success("Upload successful!")?;
        console.line(format!("Analysis ID: {}", analysis.analysis_id))?;
        console.line(format!(
            "Report preview: {}",
            analysis.report_preview(REPORT_PREVIEW_CHARS)
        ))?;

        Ok(FlowSummary {
            token,
            profile,
            artifact,
            analysis,
        })
    }
}
