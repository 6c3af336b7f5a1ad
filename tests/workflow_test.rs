//! Workflow Integration Tests
//!
//! UploadFlowWorkflow をモックサーバーに対して通しで実行する

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;
use tempfile::TempDir;
use upload_smoke::adapter::config::Config;
use upload_smoke::driver::{Console, FlowOutcome, FlowStep, UploadFlowWorkflow};
use upload_smoke::domain::errors::FlowError;
use wiremock::matchers::{body_json, body_string_contains, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "abc123def456ghi789jkl012mno345pqr678stu901vwx234yz0_long_jwt_tail";

/// 実行結果とコンソール出力
struct RunResult {
    outcome: FlowOutcome,
    out: String,
    err: String,
}

fn create_test_config(server: &MockServer, artifact: &Path) -> Config {
    Config {
        base_url: format!("{}/api", server.uri()),
        artifact_path: artifact.to_string_lossy().to_string(),
        ..Config::default()
    }
}

fn artifact_path(dir: &TempDir) -> PathBuf {
    dir.path().join("test-xray.jpg")
}

async fn run_flow(config: Config) -> RunResult {
    let workflow = UploadFlowWorkflow::new(config).unwrap();
    let mut console = Console::new(Vec::new(), Vec::new());

    let outcome = workflow.execute(&mut console).await.unwrap();

    let (out, err) = console.into_parts();
    RunResult {
        outcome,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

async fn mount_login_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({"email": "tech@test.com", "password": "password123"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": TOKEN})))
        .mount(server)
        .await;
}

async fn mount_profile_ok(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"user": {"email": "tech@test.com", "role": "technician"}})),
        )
        .mount(server)
        .await;
}

async fn mount_analyze_ok(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains("name=\"image\"; filename=\"test-xray.jpg\""))
        .and(body_string_contains("name=\"patientId\""))
        .and(body_string_contains("P167863300"))
        .and(body_string_contains("name=\"reportLength\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "analysisId": "A1",
            "report": format!("Findings: {}", "no acute cardiopulmonary abnormality. ".repeat(5)),
        })))
        .mount(server)
        .await;
}

async fn start_happy_server() -> MockServer {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_profile_ok(&server).await;
    mount_analyze_ok(&server).await;
    server
}

#[tokio::test]
async fn test_complete_flow_passes() {
    let server = start_happy_server().await;
    let temp_dir = TempDir::new().unwrap();
    let artifact = artifact_path(&temp_dir);

    let result = run_flow(create_test_config(&server, &artifact)).await;

    assert!(result.outcome.is_passed(), "unexpected outcome: {:?}", result.outcome);
    assert!(result.out.starts_with("=== Testing Complete Upload Flow ===\n\n1. Logging in as technician...\n"));
    assert!(result.out.contains("✓ Login successful\n"));
    assert!(result.out.contains(&format!("Token: {}...\n", &TOKEN[..50])));
    assert!(result.out.contains("✓ Profile retrieved: tech@test.com\n"));
    assert!(result.out.contains("Created test image file\n"));
    assert!(result.out.contains("✓ Upload successful!\n"));
    assert!(result.out.contains("Analysis ID: A1\n"));
    assert!(result.out.contains("Report preview: Findings: no acute"));
    assert!(result.out.ends_with("\n=== All tests passed! ===\n"));
    assert!(result.err.is_empty(), "unexpected error output: {}", result.err);

    match result.outcome {
        FlowOutcome::Passed(summary) => {
            assert_eq!(summary.profile.email, "tech@test.com");
            assert_eq!(summary.analysis.analysis_id, "A1");
            assert!(summary.artifact.created);
        }
        other => panic!("expected pass, got {:?}", other),
    }
}

#[tokio::test]
async fn test_requests_are_sent_in_order() {
    let server = start_happy_server().await;
    let temp_dir = TempDir::new().unwrap();

    run_flow(create_test_config(&server, &artifact_path(&temp_dir))).await;

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| req.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/api/auth/login", "/api/auth/profile", "/api/analyze"]);
}

#[tokio::test]
async fn test_wrong_password_skips_remaining_steps() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let artifact = artifact_path(&temp_dir);
    let config = Config {
        password: "wrong-password".to_string(),
        ..create_test_config(&server, &artifact)
    };

    let result = run_flow(config).await;

    assert!(matches!(
        result.outcome,
        FlowOutcome::Failed {
            step: FlowStep::Login,
            error: FlowError::Auth(_)
        }
    ));
    assert!(!result.out.contains("Login successful"));
    assert!(!result.out.contains("2. Testing profile endpoint..."));
    assert!(result.err.contains("❌ Test failed:\n"));
    assert!(result.err.contains("Invalid credentials"));
    assert!(result.err.contains("Status: 401\n"));
    assert!(!artifact.exists());
}

#[tokio::test]
async fn test_login_without_token_is_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "welcome"})))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let result = run_flow(create_test_config(&server, &artifact_path(&temp_dir))).await;

    match result.outcome {
        FlowOutcome::Failed {
            step: FlowStep::Login,
            error: FlowError::Auth(failure),
        } => assert_eq!(failure.status, Some(200)),
        other => panic!("expected auth failure, got {:?}", other),
    }
    assert!(result.err.contains("response is missing `token`"));
}

#[tokio::test]
async fn test_empty_token_is_rejected_by_server() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": ""})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid token"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let result = run_flow(create_test_config(&server, &artifact_path(&temp_dir))).await;

    let paths: Vec<String> = server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .map(|req| req.url.path().to_string())
        .collect();
    assert_eq!(paths, vec!["/api/auth/login", "/api/auth/profile"]);

    assert!(matches!(
        result.outcome,
        FlowOutcome::Failed {
            step: FlowStep::Profile,
            error: FlowError::Request(_)
        }
    ));
    assert!(result.out.contains("✓ Login successful\n"));
    assert!(result.err.contains("Invalid token"));
    assert!(result.err.contains("Status: 401\n"));
}

#[tokio::test]
async fn test_profile_without_email_is_request_error() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/auth/profile"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"user": {}})))
        .mount(&server)
        .await;
    Mock::given(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let result = run_flow(create_test_config(&server, &artifact_path(&temp_dir))).await;

    assert!(matches!(
        result.outcome,
        FlowOutcome::Failed {
            step: FlowStep::Profile,
            error: FlowError::Request(_)
        }
    ));
    assert!(result.out.contains("✓ Login successful\n"));
    assert!(result.err.contains("user.email"));
}

#[tokio::test]
async fn test_upload_server_error_is_reported() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_profile_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "Invalid file"})))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let artifact = artifact_path(&temp_dir);

    let result = run_flow(create_test_config(&server, &artifact)).await;

    assert!(matches!(
        result.outcome,
        FlowOutcome::Failed {
            step: FlowStep::Upload,
            error: FlowError::Request(_)
        }
    ));
    assert!(result.err.contains(r#"Error: {"error":"Invalid file"}"#));
    assert!(result.err.contains("Status: 500\n"));
    assert!(result.err.contains("Headers: {"));
    assert!(result.err.contains("content-type"));
    assert!(!result.out.contains("All tests passed"));

    // アップロードが失敗してもファイルは残る
    assert!(artifact.exists());
    assert!(!fs::read(&artifact).unwrap().is_empty());
}

#[tokio::test]
async fn test_rerun_reuses_artifact() {
    let server = start_happy_server().await;
    let temp_dir = TempDir::new().unwrap();
    let artifact = artifact_path(&temp_dir);

    let first = run_flow(create_test_config(&server, &artifact)).await;
    let second = run_flow(create_test_config(&server, &artifact)).await;

    assert!(first.outcome.is_passed());
    assert!(second.outcome.is_passed());
    assert!(first.out.contains("Created test image file"));
    assert!(!second.out.contains("Created test image file"));
}

#[tokio::test]
async fn test_existing_artifact_is_uploaded_as_is() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_profile_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_string_contains("existing-scan-bytes"))
        .and(body_string_contains("image/jpeg"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"analysisId": 7, "report": "ok"})),
        )
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let artifact = artifact_path(&temp_dir);
    fs::write(&artifact, b"existing-scan-bytes").unwrap();

    let result = run_flow(create_test_config(&server, &artifact)).await;

    assert!(result.outcome.is_passed(), "unexpected outcome: {:?}", result.outcome);
    assert!(result.out.contains("Analysis ID: 7\n"));
    assert!(result.out.contains("Report preview: ok...\n"));
    assert_eq!(fs::read(&artifact).unwrap(), b"existing-scan-bytes");
}

#[tokio::test]
async fn test_custom_form_values_are_sent() {
    let server = MockServer::start().await;
    mount_login_ok(&server).await;
    mount_profile_ok(&server).await;
    Mock::given(method("POST"))
        .and(path("/api/analyze"))
        .and(body_string_contains("P000001"))
        .and(body_string_contains("250"))
        .and(body_string_contains("filename=\"chest.png\""))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"analysisId": "A2", "report": "r"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let artifact = temp_dir.path().join("chest.png");
    let config = Config {
        patient_id: "P000001".to_string(),
        report_length: "250".to_string(),
        ..create_test_config(&server, &artifact)
    };

    let result = run_flow(config).await;

    assert!(result.outcome.is_passed(), "unexpected outcome: {:?}", result.outcome);
}
