//! HTTP-level integration tests for the manufacturer endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Manufacturer CRUD
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_manufacturer_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/manufacturers",
        serde_json::json!({"name": "Haufe Brauerei", "nationality": "German"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Haufe Brauerei");
    assert_eq!(json["nationality"], "German");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_manufacturer_with_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/manufacturers",
        serde_json::json!({"id": 7, "name": "Presumptuous", "nationality": "Danish"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "ID_ALREADY_ASSIGNED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_manufacturer_with_blank_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/manufacturers",
        serde_json::json!({"name": "  ", "nationality": "Dutch"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_manufacturer_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": "Get Me", "nationality": "Czech"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/manufacturers/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Get Me");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_nonexistent_manufacturer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/manufacturers/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_manufacturer_merges_partial_payload(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": "Original", "nationality": "Spanish"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/manufacturers/{id}"),
        serde_json::json!({"nationality": "newNationality"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["nationality"], "newNationality");
    assert_eq!(json["name"], "Original", "absent fields keep their values");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_nonexistent_manufacturer_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        "/api/v1/manufacturers/999999",
        serde_json::json!({"name": "Ghost"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_manufacturer_then_404_everywhere(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": "Delete Me", "nationality": "Irish"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/manufacturers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Subsequent GET should 404.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/manufacturers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // A second DELETE must not silently succeed.
    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/api/v1/manufacturers/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_manufacturers_returns_page_envelope(pool: PgPool) {
    for i in 0..3 {
        let app = common::build_test_app(pool.clone());
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": format!("M{i}"), "nationality": "Belgian"}),
        )
        .await;
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/manufacturers?page=0&size=2").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 2);
    assert_eq!(json["total_elements"], 3);
    assert_eq!(json["page"], 0);
    assert_eq!(json["size"], 2);
}

// ---------------------------------------------------------------------------
// Scoped listing: /manufacturers/{id}/beers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_beers_of_unknown_manufacturer_returns_parent_not_found(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/manufacturers/999999/beers").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PARENT_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_parent_not_found_wins_over_invalid_sort(pool: PgPool) {
    // The parent gate runs before sort validation, so an unknown
    // manufacturer reports PARENT_NOT_FOUND even with bad criteria.
    let app = common::build_test_app(pool);
    let response = get(
        app,
        "/api/v1/manufacturers/999999/beers?sort=unknownField&sort=desc",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PARENT_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_beers_of_soft_deleted_manufacturer_returns_parent_not_found(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": "Short Lived", "nationality": "Polish"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    delete(app, &format!("/api/v1/manufacturers/{id}")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/manufacturers/{id}/beers")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "PARENT_NOT_FOUND");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_beers_of_manufacturer_with_none_is_empty_page(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/manufacturers",
            serde_json::json!({"name": "Beerless", "nationality": "French"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/manufacturers/{id}/beers")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["content"].as_array().unwrap().len(), 0);
    assert_eq!(json["total_elements"], 0);
}
