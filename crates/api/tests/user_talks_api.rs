//! HTTP-level tests for `/users/{user_id}/talks` and `/talks`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn create_talk(app: axum::Router, token: &str, title: &str) -> serde_json::Value {
    let body = json!({ "title": title, "type": "regular", "level": "beginner" });
    let response = post_json_auth(app, "/api/v1/talks", body, token).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn owner_sees_their_talks(pool: PgPool) {
    let (user_id, token) = common::create_user_with_token(&pool, "owner@example.com").await;
    let app = common::build_test_app(pool);

    create_talk(app.clone(), &token, "Ownership").await;
    create_talk(app.clone(), &token, "Borrowing").await;

    let response = get_auth(app, &format!("/api/v1/users/{user_id}/talks"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let talks = json["data"].as_array().expect("data should be an array");
    assert_eq!(talks.len(), 2);

    let mut titles: Vec<&str> = talks
        .iter()
        .map(|t| t["attributes"]["title"].as_str().unwrap())
        .collect();
    titles.sort_unstable();
    assert_eq!(titles, vec!["Borrowing", "Ownership"]);
    assert!(talks.iter().all(|t| t["type"] == "talks"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_users_talks_are_not_found(pool: PgPool) {
    let (owner_id, owner_token) = common::create_user_with_token(&pool, "owner@example.com").await;
    let (_, intruder_token) = common::create_user_with_token(&pool, "intruder@example.com").await;
    let app = common::build_test_app(pool);

    create_talk(app.clone(), &owner_token, "Private").await;

    let response = get_auth(app, &format!("/api/v1/users/{owner_id}/talks"), &intruder_token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn listing_talks_requires_token(pool: PgPool) {
    let (user_id, _) = common::create_user_with_token(&pool, "owner@example.com").await;
    let app = common::build_test_app(pool);

    let response = get(app, &format!("/api/v1/users/{user_id}/talks")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn talk_resource_follows_latest_revision(pool: PgPool) {
    let (user_id, token) = common::create_user_with_token(&pool, "owner@example.com").await;
    let app = common::build_test_app(pool);

    let talk = create_talk(app.clone(), &token, "Draft title").await;
    let talk_id = talk["id"].as_i64().unwrap();

    let body = json!({ "title": "Final title", "description": "Now with examples" });
    let response =
        post_json_auth(app.clone(), &format!("/api/v1/talks/{talk_id}/revisions"), body, &token)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let revision = body_json(response).await;
    let revision_id = revision["data"]["id"].as_i64().unwrap();

    let response = get_auth(app, &format!("/api/v1/users/{user_id}/talks"), &token).await;
    let json = body_json(response).await;
    let attributes = &json["data"][0]["attributes"];
    assert_eq!(attributes["title"], "Final title");
    assert_eq!(attributes["description"], "Now with examples");
    assert_eq!(attributes["current_revision_id"], revision_id);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn creating_talk_without_title_fails_validation(pool: PgPool) {
    let (_, token) = common::create_user_with_token(&pool, "owner@example.com").await;
    let app = common::build_test_app(pool);

    let response = post_json_auth(app, "/api/v1/talks", json!({ "title": "" }), &token).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = body_json(response).await;
    assert!(json["errors"]["title"].is_array());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn revising_someone_elses_talk_is_not_found(pool: PgPool) {
    let (_, owner_token) = common::create_user_with_token(&pool, "owner@example.com").await;
    let (_, intruder_token) = common::create_user_with_token(&pool, "intruder@example.com").await;
    let app = common::build_test_app(pool);

    let talk = create_talk(app.clone(), &owner_token, "Mine").await;
    let talk_id = talk["id"].as_i64().unwrap();

    let response = post_json_auth(
        app,
        &format!("/api/v1/talks/{talk_id}/revisions"),
        json!({ "title": "Hijacked" }),
        &intruder_token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
