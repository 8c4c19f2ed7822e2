//! Client behavior against a stubbed quote service

use std::fs;
use std::time::Duration;

use cotacao_client::{run, ClientConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn service_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/cotacao"))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn config(endpoint: String, dir: &tempfile::TempDir) -> ClientConfig {
    ClientConfig {
        endpoint,
        output: dir.path().join("cotacao.txt"),
    }
}

#[tokio::test]
async fn writes_the_artifact_on_success() {
    let service =
        service_with(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.43"}"#)).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);

    run(&config).await.unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "Dólar: 5.43");
}

#[tokio::test]
async fn overwrites_a_stale_artifact() {
    let service =
        service_with(ResponseTemplate::new(200).set_body_string(r#"{"bid":"5.50"}"#)).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);
    fs::write(&config.output, "Dólar: 4.00").unwrap();

    run(&config).await.unwrap();

    assert_eq!(fs::read_to_string(&config.output).unwrap(), "Dólar: 5.50");
}

#[tokio::test]
async fn server_error_is_fatal_and_writes_nothing() {
    let service = service_with(ResponseTemplate::new(500).set_body_string("failed")).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);

    let err = run(&config).await.unwrap_err();

    assert!(err.to_string().contains("500"));
    assert!(!config.output.exists());
}

#[tokio::test]
async fn decode_failure_is_fatal_and_writes_nothing() {
    let service = service_with(ResponseTemplate::new(200).set_body_string("not json")).await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);

    assert!(run(&config).await.is_err());
    assert!(!config.output.exists());
}

#[tokio::test]
async fn slow_service_hits_the_client_deadline() {
    // Beyond the 300ms client budget.
    let service = service_with(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"bid":"5.43"}"#)
            .set_delay(Duration::from_secs(1)),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);

    assert!(run(&config).await.is_err());
    assert!(!config.output.exists());
}

#[tokio::test]
async fn timeout_leaves_a_prior_artifact_intact() {
    let service = service_with(
        ResponseTemplate::new(200)
            .set_body_string(r#"{"bid":"5.43"}"#)
            .set_delay(Duration::from_secs(1)),
    )
    .await;
    let dir = tempfile::tempdir().unwrap();
    let config = config(service.uri(), &dir);
    fs::write(&config.output, "Dólar: 4.00").unwrap();

    assert!(run(&config).await.is_err());

    // Stale, never partial.
    assert_eq!(fs::read_to_string(&config.output).unwrap(), "Dólar: 4.00");
}

#[tokio::test]
async fn unreachable_service_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let config = config("http://127.0.0.1:1".to_string(), &dir);

    assert!(run(&config).await.is_err());
    assert!(!config.output.exists());
}
