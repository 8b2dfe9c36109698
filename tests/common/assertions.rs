//! Assertion helpers for tests.

use axum::http::StatusCode;
use image::RgbaImage;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status, expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert response is a valid PNG image
pub fn assert_png(response: &TestResponse) {
    assert_ok(response);
    assert!(
        response.is_png(),
        "Expected PNG image, got {} bytes starting with {:?}",
        response.body.len(),
        &response.body[..8.min(response.body.len())]
    );

    // Check Content-Type header
    let content_type = response
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());
    assert_eq!(
        content_type,
        Some("image/png"),
        "Expected Content-Type: image/png"
    );
}

/// Assert the response is a PNG and decode it
pub fn decode_png(response: &TestResponse) -> RgbaImage {
    assert_png(response);
    image::load_from_memory(&response.body)
        .expect("Failed to decode PNG response")
        .to_rgba8()
}

/// Assert JSON error body has expected status field
pub fn assert_json_status(response: &TestResponse, expected_status: u16) {
    let json: serde_json::Value = response.json();
    assert_eq!(
        json["status"].as_u64(),
        Some(expected_status as u64),
        "Expected JSON status {}, got {:?}. Full response: {}",
        expected_status,
        json["status"],
        serde_json::to_string_pretty(&json).unwrap()
    );
    assert!(json["error"].is_string(), "Expected error message");
}

/// Assert a pixel is within `tolerance` of `expected` on every RGB channel
pub fn assert_pixel_near(image: &RgbaImage, x: u32, y: u32, expected: [u8; 3], tolerance: u8) {
    let px = image.get_pixel(x, y).0;
    for c in 0..3 {
        assert!(
            px[c].abs_diff(expected[c]) <= tolerance,
            "Pixel ({x}, {y}) is {px:?}, expected about {expected:?}"
        );
    }
}
