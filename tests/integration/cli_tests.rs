//! CLI driver integration tests

#[cfg(test)]
mod tests {
    use crate::common::{ConfigFixture, TEST_TOKEN, cli_args, ranker_config};
    use model_deploy::DeployError;
    use model_deploy::cli::{self, Action};
    use serde_json::json;
    use std::path::PathBuf;
    use wiremock::matchers::{any, body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn server_expecting_no_calls() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;
        server
    }

    // ==================== Dry run ====================

    #[tokio::test]
    async fn test_dry_run_makes_no_requests() {
        let server = server_expecting_no_calls().await;
        let fixture = ConfigFixture::new(&ranker_config());

        for action in [Action::Register, Action::Update] {
            let mut args = cli_args(action, &fixture.path, Some(&server.uri()));
            args.dry_run = true;
            cli::run(args).await.unwrap();
        }

        server.verify().await;
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_accepts_relative_api_url() {
        let fixture = ConfigFixture::new(&ranker_config());

        let mut args = cli_args(Action::Update, &fixture.path, Some("api.example.com/models"));
        args.dry_run = true;
        cli::run(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_relative_api_url_fails_at_request_time() {
        let fixture = ConfigFixture::new(&ranker_config());

        let args = cli_args(Action::Register, &fixture.path, Some("api.example.com/models"));
        let err = cli::run(args).await.unwrap_err();

        assert!(matches!(err, DeployError::Transport(_)));
    }

    #[tokio::test]
    async fn test_dry_run_still_requires_valid_config() {
        let server = server_expecting_no_calls().await;
        let fixture = ConfigFixture::with_content("not json");

        let mut args = cli_args(Action::Register, &fixture.path, Some(&server.uri()));
        args.dry_run = true;
        let err = cli::run(args).await.unwrap_err();

        assert!(matches!(err, DeployError::ConfigParse { .. }));
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_missing_api_url_fails_before_file_io() {
        // The config path does not exist, so a validation error means it was never read
        let args = cli_args(
            Action::Register,
            &PathBuf::from("/nonexistent/model.json"),
            None,
        );
        let err = cli::run(args).await.unwrap_err();

        match err {
            DeployError::Validation(msg) => assert!(msg.contains("MODEL_API_URL")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_api_token_fails_before_network() {
        let server = server_expecting_no_calls().await;
        let fixture = ConfigFixture::new(&ranker_config());

        let mut args = cli_args(Action::Register, &fixture.path, Some(&server.uri()));
        args.api_token = Some(String::new());
        let err = cli::run(args).await.unwrap_err();

        match err {
            DeployError::Validation(msg) => assert!(msg.contains("API_TOKEN")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_config_not_found() {
        let server = server_expecting_no_calls().await;
        let dir = tempfile::tempdir().unwrap();

        let args = cli_args(
            Action::Update,
            &dir.path().join("missing.json"),
            Some(&server.uri()),
        );
        let err = cli::run(args).await.unwrap_err();

        assert!(matches!(err, DeployError::ConfigNotFound { .. }));
    }

    // ==================== Register ====================

    #[tokio::test]
    async fn test_register_end_to_end() {
        let server = MockServer::start().await;
        let config = ranker_config();
        let bearer = format!("Bearer {}", TEST_TOKEN);

        Mock::given(method("POST"))
            .and(path("/v1/models/register"))
            .and(header("authorization", bearer.as_str()))
            .and(body_json(config.clone()))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"status": "ok"})))
            .expect(1)
            .mount(&server)
            .await;

        let fixture = ConfigFixture::new(&config);
        let api_url = format!("{}/", server.uri());
        cli::run(cli_args(Action::Register, &fixture.path, Some(&api_url)))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_register_server_error_fails() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/models/register"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .expect(1)
            .mount(&server)
            .await;

        let fixture = ConfigFixture::new(&ranker_config());
        let err = cli::run(cli_args(Action::Register, &fixture.path, Some(&server.uri())))
            .await
            .unwrap_err();

        assert!(err.is_request_error());
        assert_eq!(err.status(), Some(500));
    }

    // ==================== Update ====================

    #[tokio::test]
    async fn test_update_end_to_end() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/models/update/CD:personalization:ranker:v2"))
            .and(body_json(json!({
                "model": {
                    "serving_configuration": {
                        "autoscaling": true,
                        "min_instance": 2,
                        "max_instance": 4,
                        "machine_type": "ml.c5.xlarge"
                    }
                }
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let fixture = ConfigFixture::new(&ranker_config());
        cli::run(cli_args(Action::Update, &fixture.path, Some(&server.uri())))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_update_with_model_id_flag() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/models/update/CD:search:reranker:canary"))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;

        let fixture = ConfigFixture::new(&ranker_config());
        let mut args = cli_args(Action::Update, &fixture.path, Some(&server.uri()));
        args.model_id = Some("CD:search:reranker:canary".to_string());
        cli::run(args).await.unwrap();
    }

    #[tokio::test]
    async fn test_unreachable_api_fails() {
        let addr = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap()
        };

        let fixture = ConfigFixture::new(&ranker_config());
        let api_url = format!("http://{}", addr);
        let err = cli::run(cli_args(Action::Update, &fixture.path, Some(&api_url)))
            .await
            .unwrap_err();

        assert!(matches!(err, DeployError::Transport(_)));
    }
}
