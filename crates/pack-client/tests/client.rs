mod common;

use common::short_body_server;
use pack_client::{
    ClientConfig, FormFields, GenerateError, GenerationClient, ImageUpload, UploadRequest,
};

fn client_for(endpoint: String) -> GenerationClient {
    let config = ClientConfig::new(std::env::temp_dir()).with_endpoint(endpoint);
    GenerationClient::new(&config).unwrap()
}

fn request() -> UploadRequest {
    UploadRequest::new(
        ImageUpload::from_bytes("logo.png", b"logo".to_vec()),
        ImageUpload::from_bytes("product.jpg", b"product".to_vec()),
        &FormFields::default(),
    )
}

#[tokio::test]
async fn huge_content_length_fails_without_reserving_it() {
    let endpoint = short_body_server(
        "HTTP/1.1 200 OK\r\nContent-Type: application/zip\r\nContent-Length: 1000000000000000\r\nConnection: close\r\n\r\n",
        b"PK",
    )
    .await;

    let err = client_for(endpoint).generate(request()).await.unwrap_err();

    match err {
        GenerateError::Transport(msg) => assert!(msg.contains("Failed to read archive"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn truncated_error_body_is_a_transport_failure() {
    let endpoint = short_body_server(
        "HTTP/1.1 500 Internal Server Error\r\nContent-Length: 100\r\nConnection: close\r\n\r\n",
        b"internal",
    )
    .await;

    let err = client_for(endpoint).generate(request()).await.unwrap_err();

    match err {
        GenerateError::Transport(msg) => assert!(msg.contains("Failed to read error body"), "{}", msg),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn invalid_endpoint_is_rejected_at_construction() {
    let config = ClientConfig::new(std::env::temp_dir()).with_endpoint("not a url");
    assert!(matches!(
        GenerationClient::new(&config),
        Err(GenerateError::Transport(_))
    ));
}
