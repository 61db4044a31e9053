use actix_web::http::StatusCode;
use actix_web::{test, web, App};
use animaqu_content_api::models::comic::ChapterData;
use animaqu_web::comic_config;
use serde_json::Value;

mod common;

use common::FakeComicApi;

macro_rules! comic_app {
    ($api:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($api.clone()))
                .configure(comic_config::<FakeComicApi>),
        )
        .await
    };
}

#[actix_rt::test]
async fn search_returns_400_given_blank_query() {
    // Arrange
    let api = FakeComicApi::new();
    let app = comic_app!(api);
    let req = test::TestRequest::get()
        .uri("/comic/search?q=%20%20")
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::BAD_REQUEST, resp.status());
    assert!(api.calls().await.is_empty());
}

#[actix_rt::test]
async fn search_passes_trimmed_query() {
    // Arrange
    let api = FakeComicApi::new();
    let app = comic_app!(api);
    let req = test::TestRequest::get()
        .uri("/comic/search?q=%20solo%20")
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::OK, resp.status());
    assert_eq!(vec![String::from("search solo")], api.calls().await);
}

#[actix_rt::test]
async fn chapter_normalises_previous_and_next_slugs() {
    // Arrange
    let api = FakeComicApi::new().with_chapter(ChapterData {
        title: String::from("Solo Leveling Chapter 2"),
        images: vec![String::from("https://img.example/1.jpg")],
        prev_slug: Some(String::from("/chapter/solo-leveling-chapter-1/")),
        next_slug: Some(String::from("/chapter/solo-leveling-chapter-3/")),
    });
    let app = comic_app!(api);
    let req = test::TestRequest::get()
        .uri("/comic/chapter/solo-leveling-chapter-2")
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;

    // Assert
    assert_eq!(StatusCode::OK, status);
    assert_eq!("solo-leveling-chapter-1", body["prevSlug"]);
    assert_eq!("solo-leveling-chapter-3", body["nextSlug"]);
}

#[actix_rt::test]
async fn list_passes_kind_and_page() {
    // Arrange
    let api = FakeComicApi::new();
    let app = comic_app!(api);
    let req = test::TestRequest::get()
        .uri("/comic/list/manhua?page=2")
        .to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::OK, resp.status());
    assert_eq!(vec![String::from("list manhua 2")], api.calls().await);
}

#[actix_rt::test]
async fn list_returns_404_given_unknown_kind() {
    // Arrange
    let api = FakeComicApi::new();
    let app = comic_app!(api);
    let req = test::TestRequest::get().uri("/comic/list/webtoon").to_request();

    // Act
    let resp = test::call_service(&app, req).await;

    // Assert
    assert_eq!(StatusCode::NOT_FOUND, resp.status());
}

#[actix_rt::test]
async fn detail_matches_after_fixed_routes() {
    // Arrange
    let api = FakeComicApi::new();
    let app = comic_app!(api);
    let home = test::TestRequest::get().uri("/comic/home").to_request();
    let detail = test::TestRequest::get()
        .uri("/comic/solo-leveling")
        .to_request();

    // Act
    test::call_service(&app, home).await;
    test::call_service(&app, detail).await;

    // Assert
    assert_eq!(
        vec![String::from("home"), String::from("detail solo-leveling")],
        api.calls().await
    );
}

#[actix_rt::test]
async fn genres_returns_500_given_content_api_failure() {
    // Arrange
    let api = FakeComicApi::failing();
    let app = comic_app!(api);
    let req = test::TestRequest::get().uri("/comic/genres").to_request();

    // Act
    let resp = test::call_service(&app, req).await;
    let status = resp.status();
    let body: Value = test::read_body_json(resp).await;

    // Assert
    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status);
    assert_eq!(500, body["error"]["status"]);
}
