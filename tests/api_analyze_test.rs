//! Tests for the /api/logo/analyze endpoint.

mod common;

use axum::http::StatusCode;
use common::fixtures::{self, RED, TRANSPARENT};
use common::TestApp;
use image::{Rgba, RgbaImage};

#[tokio::test]
async fn test_analyze_solid_logo() {
    let app = TestApp::new();
    let body = serde_json::json!({ "logo_image": fixtures::b64(&fixtures::png_bytes(50, 50, RED)) })
        .to_string();

    let response = app.post_json("/api/logo/analyze", &body).await;
    common::assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["fallback"], false);
    assert_eq!(json["colors"][0]["hex"], "#FF0000");
    assert_eq!(json["colors"][0]["name"], "Light Vibrant Red");
    assert_eq!(json["colors"][0]["percentage"], 100.0);
    assert_eq!(
        json["description"],
        "Logo design analysis: Primary color is Light Vibrant Red (#FF0000)."
    );
}

#[tokio::test]
async fn test_analyze_two_color_logo() {
    let app = TestApp::new();
    // Left three quarters red, right quarter white
    let logo = RgbaImage::from_fn(200, 200, |x, _| {
        if x < 150 {
            Rgba([255, 0, 0, 255])
        } else {
            Rgba([255, 255, 255, 255])
        }
    });
    let mut png = std::io::Cursor::new(Vec::new());
    logo.write_to(&mut png, image::ImageFormat::Png).unwrap();

    let body = serde_json::json!({ "logo_image": fixtures::b64(png.get_ref()) }).to_string();
    let response = app.post_json("/api/logo/analyze", &body).await;
    common::assert_ok(&response);

    let json: serde_json::Value = response.json();
    let colors = json["colors"].as_array().unwrap();
    assert!(colors.len() >= 2 && colors.len() <= 5);
    assert_eq!(colors[0]["name"], "Light Vibrant Red");
    assert!(json["description"]
        .as_str()
        .unwrap()
        .contains("with secondary colors"));
}

#[tokio::test]
async fn test_analyze_transparent_logo_reports_fallback() {
    let app = TestApp::new();
    let body = serde_json::json!({
        "logo_image": fixtures::b64(&fixtures::png_bytes(4, 4, TRANSPARENT))
    })
    .to_string();

    let response = app.post_json("/api/logo/analyze", &body).await;
    common::assert_ok(&response);

    let json: serde_json::Value = response.json();
    assert_eq!(json["fallback"], true);
    assert_eq!(json["colors"][0]["hex"], "#00B3AD");
}

#[tokio::test]
async fn test_analyze_without_logo_is_bad_request() {
    let app = TestApp::new();
    let response = app.post_json("/api/logo/analyze", "{}").await;
    common::assert_status(&response, StatusCode::BAD_REQUEST);
    common::assert_json_status(&response, 400);
}

#[tokio::test]
async fn test_analyze_garbage_is_unprocessable() {
    let app = TestApp::new();
    let body = serde_json::json!({ "logo_image": fixtures::b64(b"GIF89a but not really") })
        .to_string();
    let response = app.post_json("/api/logo/analyze", &body).await;
    common::assert_status(&response, StatusCode::UNPROCESSABLE_ENTITY);
}
