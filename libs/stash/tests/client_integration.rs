//! Integration tests for the Stash client
//!
//! A wiremock server stands in for the Stash GraphQL endpoint.

use common::config::StashConfig;
use serde_json::json;
use stash::{ResolutionOrder, StashClient, StashError, StreamName, StreamOptions, get_streams};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIND_SCENE_FIXTURE: &str = include_str!("fixtures/find_scene.json");

fn stash_config(server: &MockServer, api_key: Option<&str>) -> StashConfig {
    StashConfig {
        graphql_url: format!("{}/graphql", server.uri()),
        api_key: api_key.map(str::to_string),
        timeout_seconds: 5,
    }
}

fn fixture() -> serde_json::Value {
    serde_json::from_str(FIND_SCENE_FIXTURE).expect("fixture is valid JSON")
}

#[tokio::test]
async fn test_find_scene_decodes_record() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({ "variables": { "id": "42" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    let scene = client.find_scene("42").await?;

    assert_eq!(scene.id, "42");
    assert_eq!(scene.title, "Sunset Dome");
    assert_eq!(scene.rating, Some(90));
    assert_eq!(scene.file().height, 2880);
    assert_eq!(scene.streams.len(), 5);
    assert_eq!(scene.markers.len(), 2);
    assert_eq!(scene.performers[1].rating, None);

    Ok(())
}

#[tokio::test]
async fn test_find_scene_sends_api_key_header() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("ApiKey", "secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
        .expect(1)
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, Some("secret")))?;
    client.find_scene("42").await?;

    Ok(())
}

#[tokio::test]
async fn test_find_scene_null_is_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "findScene": null } })),
        )
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    let err = client.find_scene("404").await.unwrap_err();

    assert!(matches!(err, StashError::SceneNotFound(ref id) if id == "404"));

    Ok(())
}

#[tokio::test]
async fn test_graphql_errors_are_reported() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "bad id" }, { "message": "try again" }]
        })))
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    let err = client.find_scene("x").await.unwrap_err();

    assert!(matches!(err, StashError::GraphQl(ref msg) if msg == "bad id; try again"));

    Ok(())
}

#[tokio::test]
async fn test_http_failure_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    let err = client.find_scene("42").await.unwrap_err();

    assert!(matches!(err, StashError::Status { status: 401, ref body } if body == "unauthorized"));

    Ok(())
}

#[tokio::test]
async fn test_health_check() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "version": { "version": "v0.26.2" } }
        })))
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    assert!(client.health_check().await?);

    let unreachable = StashClient::new(&StashConfig {
        graphql_url: "http://127.0.0.1:1/graphql".to_string(),
        api_key: None,
        timeout_seconds: 1,
    })?;
    assert!(!unreachable.health_check().await?);

    Ok(())
}

#[tokio::test]
async fn test_fetched_scene_stream_catalog() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixture()))
        .mount(&server)
        .await;

    let client = StashClient::new(&stash_config(&server, None))?;
    let scene = client.find_scene("42").await?;
    let streams = get_streams(
        &scene,
        &StreamOptions {
            order: ResolutionOrder::Descending,
            api_key: None,
        },
    );

    assert_eq!(streams.len(), 2);
    assert_eq!(streams[0].name, StreamName::Direct);
    assert_eq!(streams[1].name, StreamName::H265);
    let resolutions: Vec<u32> = streams[1].sources.iter().map(|s| s.resolution).collect();
    assert_eq!(resolutions, vec![2880, 1080, 720]);
    assert_eq!(
        streams[1].sources[2].url,
        "http://stash:9999/scene/42/stream.mp4?resolution=STANDARD_HD"
    );

    Ok(())
}
