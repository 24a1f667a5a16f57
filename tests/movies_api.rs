//! Integration tests for the movie resource API.

use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::{json, Value};

use movie_api::MovieStore;

mod common;

#[tokio::test]
async fn list_returns_the_seed_records() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/movies")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let movies = body.as_array().expect("expected a JSON array");
    assert_eq!(movies.len(), 4);
    assert_eq!(movies[0]["name"], "Inception");
    assert_eq!(movies[0]["genre"], json!(["sci-fi", "thriller"]));
    // Integer years must not come back as floats
    assert_eq!(movies[0]["year"], json!(2015));
}

#[tokio::test]
async fn list_on_empty_collection_returns_message_object() {
    let server = common::start_api(Arc::new(MovieStore::empty())).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/movies")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "message": "no movies yet!" }));
}

#[tokio::test]
async fn get_by_id_returns_the_record() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/movies/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], 2);
    assert_eq!(body["name"], "Inception 2");
}

#[tokio::test]
async fn missing_ids_return_404_everywhere() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let expected = json!({ "message": "The movie you are looking for is not there!" });

    let res = client.get(server.url("/movies/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    let res = client
        .put(server.url("/movies/99"))
        .json(&json!({"name": "Avatar", "year": 2009, "genre": ["sci-fi"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);

    let res = client.delete(server.url("/movies/99")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.json::<Value>().await.unwrap(), expected);
}

#[tokio::test]
async fn non_numeric_id_matches_nothing() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client.get(server.url("/movies/abc")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_then_get_round_trips() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Avatar", "year": 2009, "genre": ["sci-fi"]}))
        .send()
        .await
        .unwrap();
    // 200 rather than 201 is the documented surface
    assert_eq!(res.status(), StatusCode::OK);

    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 5);
    assert_eq!(created["name"], "Avatar");

    let res = client
        .get(server.url(&format!("/movies/{}", created["id"])))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched["name"], "Avatar");
    assert_eq!(fetched["year"], json!(2009));
    assert_eq!(fetched["genre"], json!(["sci-fi"]));
}

#[tokio::test]
async fn create_rejects_short_name_with_plain_text() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Up", "year": 2009, "genre": ["animation"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await.unwrap(),
        "\"name\" length must be at least 4 characters long"
    );
}

#[tokio::test]
async fn create_reports_the_first_missing_field() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Avatar"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "\"year\" is required");

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Avatar", "year": 2009, "genre": "sci-fi"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(res.text().await.unwrap(), "\"genre\" must be an array");
}

#[tokio::test]
async fn update_replaces_fields_and_keeps_the_id() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client
        .put(server.url("/movies/3"))
        .json(&json!({"name": "Interstellar", "year": 2014, "genre": ["sci-fi", "drama"]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let updated: Value = res.json().await.unwrap();
    assert_eq!(updated["id"], 3);
    assert_eq!(updated["name"], "Interstellar");
    assert_eq!(updated["year"], json!(2014));

    let res = client.get(server.url("/movies/3")).send().await.unwrap();
    let fetched: Value = res.json().await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn update_checks_existence_before_validating() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    // Invalid body, unknown id: lookup happens first, so this is a 404
    let res = client
        .put(server.url("/movies/99"))
        .json(&json!({"name": "Up"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Invalid body, known id: now validation fires
    let res = client
        .put(server.url("/movies/1"))
        .json(&json!({"name": "Up"}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        res.text().await.unwrap(),
        "\"name\" length must be at least 4 characters long"
    );
}

#[tokio::test]
async fn delete_removes_exactly_one_record() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client.delete(server.url("/movies/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    // Plain text, not JSON
    assert_eq!(res.text().await.unwrap(), "Success");

    let res = client.get(server.url("/movies")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);

    // Repeating the delete finds nothing
    let res = client.delete(server.url("/movies/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ids_minted_after_a_deletion_do_not_collide() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    // Delete a non-terminal record, leaving ids 1, 3, 4
    let res = client.delete(server.url("/movies/2")).send().await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Avatar", "year": 2009, "genre": ["sci-fi"]}))
        .send()
        .await
        .unwrap();
    let created: Value = res.json().await.unwrap();
    assert_eq!(created["id"], 5);

    let res = client.get(server.url("/movies")).send().await.unwrap();
    let body: Value = res.json().await.unwrap();
    let mut ids: Vec<u64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["id"].as_u64().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids, vec![1, 3, 4, 5]);
}

#[tokio::test]
async fn genre_element_types_are_not_checked() {
    let server = common::start_api(Arc::new(MovieStore::with_seed())).await;
    let client = reqwest::Client::new();

    let res = client
        .post(server.url("/movies"))
        .json(&json!({"name": "Avatar", "year": 2009, "genre": [1, "sci-fi", null]}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let created: Value = res.json().await.unwrap();
    assert_eq!(created["genre"], json!([1, "sci-fi", null]));
}
