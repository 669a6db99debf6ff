//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and drive the full
//! crawl cycle end-to-end, including JSON persistence.

use imagetrawl::config::{Config, FileConfig};
use imagetrawl::crawler::crawl;
use imagetrawl::{ConfigError, TrawlError};
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the given output path
fn create_test_config(start_url: &str, max_depth: i64, results_path: &Path) -> Config {
    Config::assemble(
        start_url.to_string(),
        max_depth,
        FileConfig::default(),
        Some(results_path.to_string_lossy().into_owned()),
    )
}

/// Mounts a 200 text/html page at the given path
async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

/// Reads the persisted results array back out of the output file
fn read_results(results_path: &Path) -> Vec<serde_json::Value> {
    let written = std::fs::read_to_string(results_path).expect("Output file not written");
    let value: serde_json::Value = serde_json::from_str(&written).expect("Output is not JSON");
    value["results"]
        .as_array()
        .expect("Output has no results array")
        .clone()
}

#[tokio::test]
async fn test_full_crawl_records_images_in_bfs_order() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <img src="home.png">
            <a href="{base}/gallery">Gallery</a>
            <a href="{base}/about">About</a>
            </body></html>"#,
            base = base_url
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/gallery",
        r#"<html><body><img src="cat.jpg"><img src="dog.jpeg"></body></html>"#.to_string(),
    )
    .await;

    mount_page(
        &mock_server,
        "/about",
        r#"<html><body><img src="team.png"></body></html>"#.to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 1, &results_path);

    let result = crawl(&config).await.expect("Crawl failed");
    assert_eq!(result.results.len(), 4);

    let records = read_results(&results_path);
    let images: Vec<&str> = records
        .iter()
        .map(|r| r["image_url"].as_str().unwrap())
        .collect();
    // Depth 0 page first, then its children in link order
    assert_eq!(images, ["home.png", "cat.jpg", "dog.jpeg", "team.png"]);

    assert_eq!(records[0]["source_url"], format!("{}/", base_url));
    assert_eq!(records[0]["depth"], 0);
    assert_eq!(records[1]["source_url"], format!("{}/gallery", base_url));
    assert_eq!(records[1]["depth"], 1);
}

#[tokio::test]
async fn test_depth_limit_prevents_deeper_fetches() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body><a href="{}/level1">Level 1</a></body></html>"#,
            base_url
        ),
    )
    .await;

    mount_page(
        &mock_server,
        "/level1",
        format!(
            r#"<html><body><a href="{}/level2">Level 2</a></body></html>"#,
            base_url
        ),
    )
    .await;

    // level2 sits at depth 2 and must never be fetched with max_depth = 1
    Mock::given(method("GET"))
        .and(path("/level2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"<html><body><img src="deep.png"></body></html>"#)
                .insert_header("content-type", "text/html"),
        )
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 1, &results_path);

    let result = crawl(&config).await.expect("Crawl failed");
    assert!(result.results.is_empty());
}

#[tokio::test]
async fn test_depth_zero_fetches_only_start_page() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <img src="front.jpg">
            <a href="{}/linked">Linked</a>
            </body></html>"#,
            base_url
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/linked"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 0, &results_path);

    let result = crawl(&config).await.expect("Crawl failed");
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].image_url, "front.jpg");
}

#[tokio::test]
async fn test_page_failures_are_soft() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        format!(
            r#"<html><body>
            <a href="{base}/missing">Missing</a>
            <a href="http://127.0.0.1:1/unreachable">Unreachable</a>
            <a href="{base}/good">Good</a>
            </body></html>"#,
            base = base_url
        ),
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/good",
        r#"<html><body><img src="survivor.png"></body></html>"#.to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 1, &results_path);

    // Both failures are absorbed; the good page still contributes
    let result = crawl(&config).await.expect("Crawl failed");
    assert_eq!(result.results.len(), 1);
    assert_eq!(result.results[0].image_url, "survivor.png");

    let records = read_results(&results_path);
    assert_eq!(records.len(), 1);
}

#[tokio::test]
async fn test_cyclic_links_fetch_each_page_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    r#"<html><body><a href="{}/other">Other</a></body></html>"#,
                    base_url
                ))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/other"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(format!(
                    r#"<html><body><a href="{}/">Back home</a></body></html>"#,
                    base_url
                ))
                .insert_header("content-type", "text/html"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 5, &results_path);

    crawl(&config).await.expect("Crawl failed");
    // Wiremock verifies the expect(1) counts when the server drops
}

#[tokio::test]
async fn test_negative_depth_aborts_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    let config = create_test_config("http://site.example/", -1, &results_path);

    let result = crawl(&config).await;

    assert!(matches!(
        result,
        Err(TrawlError::Config(ConfigError::InvalidDepth(-1)))
    ));
    assert!(!results_path.exists());
}

#[tokio::test]
async fn test_output_overwrites_existing_file() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><img src="fresh.png"></body></html>"#.to_string(),
    )
    .await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.json");
    std::fs::write(&results_path, r#"{"results": [{"image_url": "stale"}]}"#).unwrap();

    let config = create_test_config(&format!("{}/", base_url), 0, &results_path);
    crawl(&config).await.expect("Crawl failed");

    let records = read_results(&results_path);
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["image_url"], "fresh.png");
}

#[tokio::test]
async fn test_persist_failure_is_fatal() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(&mock_server, "/", "<html></html>".to_string()).await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("no-such-dir").join("results.json");
    let config = create_test_config(&format!("{}/", base_url), 0, &results_path);

    let result = crawl(&config).await;
    assert!(matches!(result, Err(TrawlError::Sink(_))));
}
