//! Web integration tests
//!
//! These run against a live server with an empty-or-seeded database:
//! start the server, then `cargo test -- --ignored`.

use reqwest::{redirect::Policy, Client, StatusCode};

const BASE_URL: &str = "http://localhost:8080";

/// Client that does not follow redirects, so create flows can be asserted
fn client() -> Client {
    Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("Failed to build client")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let response = client()
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("healthy"));
}

#[tokio::test]
#[ignore]
async fn test_root_redirects_to_catalog() {
    let response = client()
        .get(BASE_URL)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_redirection());
    assert_eq!(response.headers()["location"], "/catalog");
}

#[tokio::test]
#[ignore]
async fn test_home_page_shows_counts() {
    let response = client()
        .get(format!("{}/catalog", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Lil Library"));
    assert!(body.contains("Copies available"));
}

#[tokio::test]
#[ignore]
async fn test_list_pages_render() {
    for path in ["/catalog/books", "/catalog/authors", "/catalog/genres", "/catalog/bookinstances"] {
        let response = client()
            .get(format!("{}{}", BASE_URL, path))
            .send()
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success(), "GET {} failed", path);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"), "{}: {}", path, content_type);
    }
}

#[tokio::test]
#[ignore]
async fn test_unknown_author_is_404() {
    let response = client()
        .get(format!("{}/catalog/authors/999999", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("not found"));
}

#[tokio::test]
#[ignore]
async fn test_create_author_redirects_to_detail() {
    let response = client()
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "Integration"),
            ("family_name", "Test"),
            ("date_of_birth", "1970-01-01"),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_redirection());
    let location = response.headers()["location"].to_str().unwrap().to_string();
    assert!(location.starts_with("/catalog/authors/"), "{}", location);

    // The new detail page renders
    let detail = client()
        .get(format!("{}{}", BASE_URL, location))
        .send()
        .await
        .expect("Failed to send request");
    assert!(detail.status().is_success());
    let body = detail.text().await.expect("Failed to read body");
    assert!(body.contains("Test, Integration"));
}

#[tokio::test]
#[ignore]
async fn test_invalid_author_rerenders_form_with_input() {
    let response = client()
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "OnlyFirst"),
            ("family_name", ""),
            ("date_of_birth", "not-a-date"),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    // Submitted value preserved, both errors shown
    assert!(body.contains("OnlyFirst"));
    assert!(body.contains("Family name must be specified"));
    assert!(body.contains("Date of birth"));
}

#[tokio::test]
#[ignore]
async fn test_whitespace_only_author_is_rejected() {
    let response = client()
        .post(format!("{}/catalog/authors/create", BASE_URL))
        .form(&[
            ("first_name", "   "),
            ("family_name", "   "),
            ("date_of_birth", ""),
            ("date_of_death", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("First name must be specified"));
    assert!(body.contains("Family name must be specified"));
}

#[tokio::test]
#[ignore]
async fn test_stale_author_id_rerenders_book_form() {
    let response = client()
        .post(format!("{}/catalog/books/create", BASE_URL))
        .form(&[
            ("title", "Ghost Book"),
            ("author", "999999"),
            ("summary", "A book whose author vanished."),
            ("isbn", "0000000000"),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    // Form re-rendered with the error and the submitted values intact
    assert!(body.contains("Selected author does not exist"));
    assert!(body.contains("Ghost Book"));
}

#[tokio::test]
#[ignore]
async fn test_stale_book_id_rerenders_instance_form() {
    let response = client()
        .post(format!("{}/catalog/bookinstances/create", BASE_URL))
        .form(&[
            ("book", "999999"),
            ("imprint", "Nowhere Press, 2026"),
            ("status", "Available"),
            ("due_back", ""),
        ])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("Selected book does not exist"));
    assert!(body.contains("Nowhere Press, 2026"));
}

#[tokio::test]
#[ignore]
async fn test_genre_create_deduplicates_by_name() {
    let post = |name: &'static str| async move {
        client()
            .post(format!("{}/catalog/genres/create", BASE_URL))
            .form(&[("name", name)])
            .send()
            .await
            .expect("Failed to send request")
    };

    let first = post("Dedup Genre").await;
    assert!(first.status().is_redirection());
    let first_location = first.headers()["location"].to_str().unwrap().to_string();

    let second = post("Dedup Genre").await;
    assert!(second.status().is_redirection());
    let second_location = second.headers()["location"].to_str().unwrap().to_string();

    assert_eq!(first_location, second_location);
}

#[tokio::test]
#[ignore]
async fn test_short_genre_name_is_rejected() {
    let response = client()
        .post(format!("{}/catalog/genres/create", BASE_URL))
        .form(&[("name", "ab")])
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = response.text().await.expect("Failed to read body");
    assert!(body.contains("at least 3 characters"));
}
