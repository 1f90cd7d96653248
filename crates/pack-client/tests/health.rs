use pack_client::{ClientConfig, GenerateError, GenerationClient};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> GenerationClient {
    let config = ClientConfig::new(std::env::temp_dir())
        .with_endpoint(format!("{}/generate", server.uri()));
    GenerationClient::new(&config).unwrap()
}

#[tokio::test]
async fn health_returns_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"status":"ok","message":"CreativeForge Backend Running"}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let message = client_for(&server).health().await.unwrap();
    assert_eq!(message, "CreativeForge Backend Running");
}

#[tokio::test]
async fn health_surfaces_non_success_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("starting"))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert_eq!(
        err,
        GenerateError::Server {
            status: 503,
            body: "starting".to_string()
        }
    );
}

#[tokio::test]
async fn health_rejects_unexpected_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    let err = client_for(&server).health().await.unwrap_err();
    assert!(matches!(err, GenerateError::Transport(_)));
}
