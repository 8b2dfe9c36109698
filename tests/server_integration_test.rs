//! Server integration tests that exercise a real TCP listener.

mod common;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use brandframe::models::AppConfig;
use brandframe::server::build_router;
use common::TestApp;

/// Start a test server on an available port and return the port number.
async fn start_test_server(config: AppConfig) -> u16 {
    let app = build_router(TestApp::create_state(config));

    // Bind to port 0 to get an available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.ok();
    });

    // Give the server a moment to start
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    port
}

async fn raw_request(port: u16, request: &str) -> String {
    let mut stream = TcpStream::connect(format!("127.0.0.1:{port}"))
        .await
        .expect("Failed to connect");
    stream
        .write_all(request.as_bytes())
        .await
        .expect("Failed to write request");

    let mut response = Vec::new();
    tokio::time::timeout(
        tokio::time::Duration::from_secs(5),
        stream.read_to_end(&mut response),
    )
    .await
    .expect("Timed out reading response")
    .expect("Failed to read response");
    String::from_utf8_lossy(&response).to_string()
}

#[tokio::test]
async fn test_health_over_tcp() {
    let port = start_test_server(AppConfig::default()).await;

    let response = raw_request(
        port,
        "GET /health HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
    )
    .await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with("OK"), "{response}");
}
