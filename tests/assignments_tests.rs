use actix_web::{http::StatusCode, test};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use roster::database::models::{AssignmentInput, EventKind};
use roster::error::AppError;

mod common;

use common::{TestApp, date};

#[actix_web::test]
async fn test_create_and_list_assignments() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.named_member(team.id, "Priscilla").await;
    let event = app
        .event(team.id, date(2099, 5, 3), EventKind::Sunday)
        .await;

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .set_json(json!({ "eventId": event.id, "memberId": member.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let assignment: Value = test::read_body_json(resp).await;
    assert_eq!(assignment["eventId"], event.id.to_string());

    let req = test::TestRequest::get()
        .uri(&format!("/api/assignments?eventId={}", event.id))
        .to_request();
    let assignments: Vec<Value> = test::call_and_read_body_json(&service, req).await;
    assert_eq!(assignments.len(), 1);
    assert_eq!(assignments[0]["id"], assignment["id"]);
    assert_eq!(assignments[0]["member"]["name"], "Priscilla");
}

#[actix_web::test]
async fn test_duplicate_assignment_conflicts() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.member(team.id).await;
    let event = app
        .event(team.id, date(2099, 5, 10), EventKind::Sunday)
        .await;

    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let req = test::TestRequest::post()
            .uri("/api/assignments")
            .set_json(json!({ "eventId": event.id, "memberId": member.id }))
            .to_request();
        let resp = test::call_service(&service, req).await;
        assert_eq!(resp.status(), expected);
    }
}

#[actix_web::test]
async fn test_assignment_to_missing_event_is_not_found() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let member = app.member(team.id).await;

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .set_json(json!({ "eventId": Uuid::new_v4(), "memberId": member.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/api/assignments")
        .set_json(json!({ "memberId": member.id }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "eventId is required");
}

#[actix_web::test]
async fn test_bulk_assignments() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let first = app.member(team.id).await;
    let second = app.member(team.id).await;
    let event = app
        .event(team.id, date(2099, 5, 17), EventKind::Sunday)
        .await;

    let req = test::TestRequest::post()
        .uri("/api/assignments/bulk")
        .set_json(json!({
            "assignments": [
                { "eventId": event.id, "memberId": first.id },
                { "eventId": event.id, "memberId": second.id }
            ]
        }))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Vec<Value> = test::read_body_json(resp).await;
    assert_eq!(created.len(), 2);

    let req = test::TestRequest::post()
        .uri("/api/assignments/bulk")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let error: Value = test::read_body_json(resp).await;
    assert_eq!(error["error"], "assignments array is required");
}

#[actix_web::test]
async fn test_bulk_assignments_roll_back_on_conflict() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let team = app.team().await;
    let first = app.member(team.id).await;
    let second = app.member(team.id).await;
    let event = app
        .event(team.id, date(2099, 5, 24), EventKind::Sunday)
        .await;
    let repo = &app.state.assignment_repository;

    let err = repo
        .create_many(vec![
            AssignmentInput {
                event_id: event.id,
                member_id: first.id,
            },
            AssignmentInput {
                event_id: event.id,
                member_id: second.id,
            },
            AssignmentInput {
                event_id: event.id,
                member_id: first.id,
            },
        ])
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Conflict(_)));

    assert!(repo.list_by_event(event.id).await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_delete_assignments() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let service = init_app!(app);
    let team = app.team().await;
    let event = app
        .event(team.id, date(2099, 5, 31), EventKind::Sunday)
        .await;
    let repo = &app.state.assignment_repository;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let member = app.member(team.id).await;
        let assignment = repo
            .create(AssignmentInput {
                event_id: event.id,
                member_id: member.id,
            })
            .await
            .unwrap();
        ids.push(assignment.id);
    }

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assignments/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assignments/{}", ids[0]))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.list_by_event(event.id).await.unwrap().len(), 2);

    let req = test::TestRequest::delete()
        .uri(&format!("/api/assignments?eventId={}", event.id))
        .to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "success": true }));
    assert!(repo.list_by_event(event.id).await.unwrap().is_empty());

    let req = test::TestRequest::delete().uri("/api/assignments").to_request();
    let resp = test::call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_deleting_event_removes_its_assignments() {
    common::setup_test_env();
    let app = TestApp::new().await.unwrap();
    let team = app.team().await;
    let member = app.member(team.id).await;
    let event = app
        .event(team.id, date(2099, 6, 14), EventKind::Sunday)
        .await;
    let repo = &app.state.assignment_repository;
    repo.create(AssignmentInput {
        event_id: event.id,
        member_id: member.id,
    })
    .await
    .unwrap();

    app.state.event_repository.delete(event.id).await.unwrap();

    assert!(repo.list_by_event(event.id).await.unwrap().is_empty());
}
