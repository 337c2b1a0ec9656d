use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

mod common;

use common::TestApp;

#[actix_web::test]
async fn test_create_member() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;

    let req = test::TestRequest::post()
        .uri("/api/members")
        .set_json(json!({ "name": "Dorcas", "phone": "+15550102", "teamId": team.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let member: Value = test::read_body_json(resp).await;
    assert_eq!(member["name"], "Dorcas");
    assert_eq!(member["teamId"], team.id.to_string());
    assert_eq!(member["state"], "active");
}

#[actix_web::test]
async fn test_create_member_validation() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);

    let req = test::TestRequest::post()
        .uri("/api/members")
        .set_json(json!({ "name": "Dorcas" }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "teamId is required");

    let req = test::TestRequest::post()
        .uri("/api/members")
        .set_json(json!({ "name": "Dorcas", "teamId": Uuid::new_v4() }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_list_members_requires_team() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);

    let req = test::TestRequest::get().uri("/api/members").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_members_ordered_by_name() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let other = app.team().await;
    app.named_member(team.id, "Zed").await;
    app.named_member(team.id, "Abigail").await;
    app.named_member(other.id, "Moses").await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/members?teamId={}", team.id))
        .to_request();
    let members: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    let names: Vec<&str> = members.iter().filter_map(|m| m["name"].as_str()).collect();

    assert_eq!(names, vec!["Abigail", "Zed"]);
}

#[actix_web::test]
async fn test_delete_member_is_soft() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.member(team.id).await;
    app.member(team.id).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/members/{}", member.id))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/api/members/{}", member.id))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(fetched["state"], "inactive");

    let req = test::TestRequest::get()
        .uri(&format!("/api/members?teamId={}&activeOnly=true", team.id))
        .to_request();
    let active: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(active.len(), 1);

    let req = test::TestRequest::get()
        .uri(&format!("/api/members?teamId={}", team.id))
        .to_request();
    let all: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(all.len(), 2);
}

#[actix_web::test]
async fn test_update_member_reactivates() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.member(team.id).await;

    let req = test::TestRequest::delete()
        .uri(&format!("/api/members/{}", member.id))
        .to_request();
    test::call_service(&service, req).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/members/{}", member.id))
        .set_json(json!({ "phone": "+15550103", "isActive": true }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], member.name);
    assert_eq!(updated["phone"], "+15550103");
    assert_eq!(updated["state"], "active");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/members/{}", Uuid::new_v4()))
        .set_json(json!({ "name": "Nobody" }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_member_clears_phone() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.member(team.id).await;

    let req = test::TestRequest::patch()
        .uri(&format!("/api/members/{}", member.id))
        .set_json(json!({ "phone": "+15550104" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(updated["phone"], "+15550104");

    // Omitted keeps the value; an empty string clears it.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/members/{}", member.id))
        .set_json(json!({ "name": "Renamed" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(updated["phone"], "+15550104");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/members/{}", member.id))
        .set_json(json!({ "phone": "" }))
        .to_request();
    let updated: Value = test::call_and_read_body_json(&service, req).await;
    assert_eq!(updated["phone"], Value::Null);
    assert_eq!(updated["name"], "Renamed");
}
