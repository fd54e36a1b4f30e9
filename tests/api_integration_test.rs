use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use bookbrowse::infrastructure::AppState;
use bookbrowse::models::book;
use bookbrowse::nyt_reviews::ReviewClient;
use bookbrowse::{db, seed, server};
use sea_orm::DatabaseConnection;
use serde_json::Value;
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Helper to create a test database with the book table
async fn setup_test_db() -> DatabaseConnection {
    let db = db::init_db("sqlite::memory:", 1)
        .await
        .expect("Failed to init DB");
    seed::ensure_schema(&db)
        .await
        .expect("Failed to create schema");
    db
}

fn book_model(id: &str, title: &str) -> book::Model {
    book::Model {
        book_id: id.to_string(),
        title: title.to_string(),
        authors: Some("J.K. Rowling|Mary GrandPré".to_string()),
        description: Some("A boy wizard.".to_string()),
        edition: None,
        format: Some("Hardcover".to_string()),
        pages: Some(300),
        rating: Some(4.5),
        rating_count: Some(1000),
        review_count: Some(100),
        genres: Some("Fantasy|Young Adult".to_string()),
        image_url: None,
    }
}

// 25 "Harry" titles inserted out of order, plus rows the prefix must skip
async fn seed_harry_shelf(db: &DatabaseConnection) -> Vec<String> {
    let mut expected = Vec::new();
    for i in (0..25).rev() {
        let id = format!("h{:07}", i);
        seed::insert_book(db, book_model(&id, &format!("Harry Potter Volume {:02}", i)))
            .await
            .expect("Failed to insert book");
    }
    for i in 0..25 {
        expected.push(format!("h{:07}", i));
    }
    for (id, title) in [("x0000001", "Hobbit"), ("x0000002", "Dune"), ("x0000003", "A Harry Tale")] {
        seed::insert_book(db, book_model(id, title))
            .await
            .expect("Failed to insert book");
    }
    expected
}

fn app(db: DatabaseConnection, reviews_url: &str) -> Router {
    let state = AppState::new(db, ReviewClient::new(reviews_url, "test-key"));
    server::build_router(state, "tests/no-static", &[])
}

async fn get(app: &Router, uri: &str, accept: Option<&str>) -> Response {
    let mut builder = Request::builder().uri(uri).method("GET");
    if let Some(accept) = accept {
        builder = builder.header(header::ACCEPT, accept);
    }
    app.clone()
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let response = get(app, uri, Some("application/json")).await;
    assert_eq!(response.status(), StatusCode::OK, "GET {uri}");
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}

fn ids(page: &Value) -> Vec<String> {
    page["books"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["book_id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_first_page_json() {
    let db = setup_test_db().await;
    let expected = seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let page = get_json(&app, "/book/Harry").await;

    assert_eq!(page["offset"], 0);
    assert_eq!(page["total"], 25);
    assert_eq!(page["has_previous"], false);
    assert_eq!(page["has_next"], true);
    assert_eq!(page["next_link"], "/next/Harry/0");
    assert_eq!(ids(&page), expected[..10].to_vec());
    assert_eq!(page["books"][0]["title"], "Harry Potter Volume 00");
    assert_eq!(page["books"][0]["authors"][1], "Mary GrandPré");
}

#[tokio::test]
async fn test_json_first_accept_header_gets_json() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    for accept in [
        "application/json, text/plain, */*",
        "*/*, application/json",
        "text/*, application/json",
    ] {
        let response = get(&app, "/book/Harry", Some(accept)).await;
        assert_eq!(response.status(), StatusCode::OK, "Accept: {accept}");
        assert!(
            response.headers()[header::CONTENT_TYPE]
                .to_str()
                .unwrap()
                .starts_with("application/json"),
            "Accept: {accept}"
        );
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let page: Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(page["total"], 25);
    }
}

#[tokio::test]
async fn test_paging_forward_visits_each_row_once_in_title_order() {
    let db = setup_test_db().await;
    let expected = seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let mut page = get_json(&app, "/book/Harry").await;
    let mut seen = ids(&page);
    let mut pages = 1;
    while page["has_next"] == true {
        let next = page["next_link"].as_str().unwrap().to_string();
        page = get_json(&app, &next).await;
        seen.extend(ids(&page));
        pages += 1;
    }

    assert_eq!(pages, 3);
    assert_eq!(seen, expected);
}

#[tokio::test]
async fn test_next_then_prev_returns_to_first_page() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let first = get_json(&app, "/book/Harry").await;
    let second = get_json(&app, "/next/Harry/0").await;
    let back = get_json(&app, "/prev/Harry/10").await;

    assert_eq!(second["offset"], 10);
    assert_eq!(second["has_previous"], true);
    assert_ne!(ids(&second), ids(&first));
    assert_eq!(ids(&back), ids(&first));
}

#[tokio::test]
async fn test_out_of_range_offsets_are_clamped() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let before_start = get_json(&app, "/prev/Harry/0").await;
    assert_eq!(before_start["offset"], 0);

    let negative = get_json(&app, "/next/Harry/-50").await;
    assert_eq!(negative["offset"], 0);

    let past_end = get_json(&app, "/next/Harry/500").await;
    assert_eq!(past_end["offset"], 20);
    assert_eq!(past_end["has_next"], false);
    assert_eq!(ids(&past_end).len(), 5);

    let unaligned = get_json(&app, "/next/Harry/3").await;
    assert_eq!(unaligned["offset"], 10);
}

#[tokio::test]
async fn test_first_page_html() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let response = get(&app, "/book/Harry", Some("text/html")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Harry Potter Volume 00"));
    assert!(html.contains(r#"href="/next/Harry/0""#));
    assert!(!html.contains("/prev/Harry/0"));
    assert!(!html.contains("Hobbit"));
}

#[tokio::test]
async fn test_no_matching_books() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let page = get_json(&app, "/book/Zz").await;
    assert_eq!(page["has_content"], false);
    assert_eq!(page["total"], 0);
    assert_eq!(page["has_next"], false);
}

#[tokio::test]
async fn test_book_details_json_and_html() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let book = get_json(&app, "/bookdetails/h0000003").await;
    assert_eq!(book["title"], "Harry Potter Volume 03");
    assert_eq!(book["genres"][0], "Fantasy");

    let response = get(&app, "/bookdetails/h0000003", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("A boy wizard."));
    assert!(html.contains("/reviews/Harry%20Potter%20Volume%2003"));
}

#[tokio::test]
async fn test_reviews_are_proxied_and_reshaped() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/svc/books/v3/reviews.json"))
        .and(query_param("title", "Harry Potter Volume 03"))
        .and(query_param("api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "copyright": "Copyright (c) 2024 The New York Times Company.  All Rights Reserved.",
            "num_results": 2,
            "results": [
                {
                    "url": "https://www.nytimes.com/first",
                    "publication_dt": "1999-06-01",
                    "byline": "First Critic",
                    "book_title": "Harry Potter Volume 03",
                    "book_author": "J.K. Rowling",
                    "summary": "Magic.",
                    "isbn13": ["9780439136365"]
                },
                {
                    "url": "https://www.nytimes.com/second",
                    "byline": "Second Critic",
                    "book_title": "Harry Potter Volume 03"
                }
            ]
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let db = setup_test_db().await;
    let app = app(
        db,
        &format!("{}/svc/books/v3/reviews.json", mock_server.uri()),
    );

    let view = get_json(&app, "/reviews/Harry%20Potter%20Volume%2003").await;
    assert_eq!(view["has_results"], true);
    assert_eq!(view["first"]["byline"], "First Critic");
    assert_eq!(view["results"].as_array().unwrap().len(), 2);
    assert!(view["copyright"].as_str().unwrap().contains("New York Times"));

    let response = get(&app, "/reviews/Harry%20Potter%20Volume%2003", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("Second Critic") || html.contains("https://www.nytimes.com/second"));
    assert!(html.contains("Magic."));
}

#[tokio::test]
async fn test_reviews_without_results() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "OK",
            "copyright": "Copyright (c) NYT",
            "num_results": 0,
            "results": []
        })))
        .mount(&mock_server)
        .await;

    let db = setup_test_db().await;
    let app = app(db, &mock_server.uri());

    let view = get_json(&app, "/reviews/Nothing").await;
    assert_eq!(view["has_results"], false);
    assert!(view["first"].is_null());
}

#[tokio::test]
async fn test_home_page() {
    let db = setup_test_db().await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let response = get(&app, "/", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::VARY], "Accept");

    let home = get_json(&app, "/").await;
    assert_eq!(home["service"], "bookbrowse");
}

#[tokio::test]
async fn test_health_check() {
    let db = setup_test_db().await;
    let app = app(db, "http://127.0.0.1:9/unused");

    let response = get(&app, "/health", None).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_percent_prefix_does_not_list_whole_table() {
    let db = setup_test_db().await;
    seed_harry_shelf(&db).await;
    seed::insert_book(&db, book_model("p0000001", "100% Pure"))
        .await
        .expect("Failed to insert book");
    let app = app(db, "http://127.0.0.1:9/unused");

    let page = get_json(&app, "/book/%25").await;
    assert_eq!(page["total"], 0);

    let page = get_json(&app, "/book/100%25").await;
    assert_eq!(page["total"], 1);
    assert_eq!(page["books"][0]["title"], "100% Pure");
    assert_eq!(page["next_link"], "/next/100%25/0");
}
