//! End-to-end flow tests covering complete user scenarios.

mod common;

use brandframe::models::CompanyProfile;
use brandframe::services::CompanyDirectory;
use common::fixtures::{self, BLUE, RED};
use common::TestApp;

#[tokio::test]
async fn test_instagram_feed_with_overlay() {
    let app = TestApp::new();
    let (main, logo) = fixtures::brand_pair();

    let body = fixtures::compose_body(
        &main,
        &logo,
        "Instagram",
        "Feed Image Posts",
        Some("Discover Our Brand"),
    );
    let response = app.post_json("/api/compose", &body).await;
    let image = common::decode_png(&response);

    assert_eq!(image.dimensions(), (1080, 1080));

    // Rails carry the logo's red
    common::assert_pixel_near(&image, 0, 0, [255, 0, 0], 2);
    common::assert_pixel_near(&image, 1079, 1079, [255, 0, 0], 2);

    // 2000x1000 fits the 912x800 content area as 912x456, centered at y=352.
    // The faint scrim tints it slightly.
    common::assert_pixel_near(&image, 114, 382, [0, 0, 255], 40);
    common::assert_pixel_near(&image, 966, 778, [0, 0, 255], 40);

    // Above and below the fitted image the canvas stays white
    common::assert_pixel_near(&image, 540, 340, [255, 255, 255], 0);
    common::assert_pixel_near(&image, 540, 820, [255, 255, 255], 0);
}

#[tokio::test]
async fn test_story_layout_is_taller() {
    let app = TestApp::new();
    let main = fixtures::png_bytes(1000, 1000, BLUE);
    let logo = fixtures::png_bytes(40, 40, RED);

    let body = fixtures::compose_body(&main, &logo, "Instagram", "Instagram Stories", None);
    let response = app.post_json("/api/compose", &body).await;
    let image = common::decode_png(&response);

    assert_eq!(image.dimensions(), (1080, 1920));
    // 912x912 square centered in the 912x1640 content area
    common::assert_pixel_near(&image, 540, 180 + 364 + 456, [0, 0, 255], 0);
    common::assert_pixel_near(&image, 540, 180 + 100, [255, 255, 255], 0);
}

#[tokio::test]
async fn test_company_from_config_and_directory() {
    let app = TestApp::with_yaml(
        r#"
companies:
  acme:
    name: Acme
    website: acme.example
"#,
    );

    let found = app.directory.find("acme").await.unwrap().unwrap();
    assert_eq!(found.website(), Some("acme.example"));

    app.directory
        .upsert(
            "globex".to_string(),
            CompanyProfile::new("Globex", Some("globex.example".into())),
        )
        .await
        .unwrap();

    let main = fixtures::png_bytes(300, 200, BLUE);
    let logo = fixtures::png_bytes(40, 40, RED);
    for company in ["acme", "globex", "unknown"] {
        let body = serde_json::json!({
            "main_image": fixtures::b64(&main),
            "logo_image": fixtures::b64(&logo),
            "platform": "LinkedIn",
            "content_type": "LinkedIn Image Posts",
            "company_id": company,
            "overlay_text": "Hello",
        })
        .to_string();
        let response = app.post_json("/api/compose", &body).await;
        common::assert_png(&response);
        assert_eq!(response.header("x-canvas-size"), Some("1200x1350"));
    }
}
