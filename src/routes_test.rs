use std::net::SocketAddr;
use std::path::PathBuf;

use super::*;

fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures/site")
}

/// Serve the fixture bundle on an ephemeral port and return its address.
async fn spawn_app() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind should succeed");
    let addr = listener.local_addr().expect("listener should have an address");
    let app = app(&fixture_dir());
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server should run");
    });
    addr
}

#[tokio::test]
async fn healthz_returns_ok() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn root_serves_index_html() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert!(res.text().await.unwrap().contains("knowledge-bank-index"));
}

#[tokio::test]
async fn static_assets_are_served_as_is() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/app.css")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert!(res.text().await.unwrap().contains(".fixture"));
}

#[tokio::test]
async fn client_routes_fall_back_to_index() {
    let addr = spawn_app().await;
    let res = reqwest::get(format!("http://{addr}/category/artifact-hunting")).await.unwrap();
    assert_eq!(res.status(), reqwest::StatusCode::OK);
    assert!(res.text().await.unwrap().contains("knowledge-bank-index"));
}
