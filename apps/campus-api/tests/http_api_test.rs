//! HTTP integration tests
//!
//! Starts the router on an ephemeral port and drives it with reqwest.

use campus_api::{create_router, AppState};
use campus_domain::CampusServices;
use campus_memory::InMemoryStore;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Bind to port 0 and return the base URL
async fn start_server() -> String {
    let app = create_router(AppState::new(CampusServices::new(InMemoryStore::new())));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn student_body(first: &str, email: &str) -> Value {
    json!({
        "firstName": first,
        "lastName": "Smith",
        "email": email,
        "phone": "5551234567",
        "dateOfBirth": "2001-04-12"
    })
}

fn course_body(name: &str, code: &str) -> Value {
    json!({
        "courseName": name,
        "courseCode": code,
        "credits": 3,
        "instructor": "Dr. Hopper"
    })
}

async fn post(client: &Client, url: String, body: Value) -> (StatusCode, Value) {
    let resp = client.post(url).json(&body).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

async fn get(client: &Client, url: String) -> (StatusCode, Value) {
    let resp = client.get(url).send().await.unwrap();
    let status = resp.status();
    (status, resp.json().await.unwrap())
}

#[tokio::test]
async fn health_and_openapi() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "OK");

    let (status, doc) = get(&client, format!("{base}/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/students"].is_object());
    assert!(doc["paths"]["/api/enrollments/{id}/status"].is_object());
}

#[tokio::test]
async fn student_lifecycle() {
    let base = start_server().await;
    let client = Client::new();

    let (status, created) = post(
        &client,
        format!("{base}/api/students"),
        student_body("Alice", "alice@example.edu"),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], 1);
    assert_eq!(created["fullName"], "Alice Smith");
    let enrollment_date = created["enrollmentDate"].clone();

    let (status, fetched) = get(&client, format!("{base}/api/students/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["email"], "alice@example.edu");

    let (status, by_email) = get(&client, format!("{base}/api/students/email/alice@example.edu")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_email["id"], 1);

    let mut update = student_body("Alicia", "alicia@example.edu");
    update["enrollmentDate"] = json!("1999-01-01");
    let resp = client
        .put(format!("{base}/api/students/1"))
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["firstName"], "Alicia");
    assert_eq!(updated["enrollmentDate"], enrollment_date);

    let (status, found) = get(&client, format!("{base}/api/students/search?name=lici")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found.as_array().unwrap().len(), 1);

    let resp = client
        .delete(format!("{base}/api/students/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (status, body) = get(&client, format!("{base}/api/students/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], 404);
    assert_eq!(body["error"], "Not Found");
    assert_eq!(body["message"], "Student not found with ID: 1");
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let base = start_server().await;
    let client = Client::new();
    let url = format!("{base}/api/students");

    let (status, _) = post(&client, url.clone(), student_body("Alice", "dup@example.edu")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post(&client, url.clone(), student_body("Bob", "dup@example.edu")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["status"], 409);

    let (_, all) = get(&client, url).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn shape_validation_reports_fields() {
    let base = start_server().await;
    let client = Client::new();

    let (status, body) = post(
        &client,
        format!("{base}/api/students"),
        json!({
            "firstName": "A",
            "lastName": "Smith",
            "email": "not-an-email",
            "phone": "123"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let fields = body["validationErrors"].as_object().unwrap();
    assert!(fields.contains_key("firstName"));
    assert!(fields.contains_key("email"));
    assert!(fields.contains_key("phone"));
    assert!(!fields.contains_key("lastName"));

    let (status, body) = get(&client, format!("{base}/api/students/search?name=%20")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["validationErrors"]["name"].is_string());
}

#[tokio::test]
async fn malformed_requests_get_json_errors() {
    let base = start_server().await;
    let client = Client::new();

    let (status, body) = get(&client, format!("{base}/api/students/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let resp = client
        .post(format!("{base}/api/courses"))
        .header("content-type", "application/json")
        .body("{\"courseName\":")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn course_business_rules() {
    let base = start_server().await;
    let client = Client::new();
    let url = format!("{base}/api/courses");

    let (status, body) = post(&client, url.clone(), course_body("Intro to CS", "cs101")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.get("validationErrors").is_none());

    let mut bad_credits = course_body("Intro to CS", "CS101");
    bad_credits["credits"] = json!(7);
    let (status, _) = post(&client, url.clone(), bad_credits).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, created) = post(&client, url.clone(), course_body("Intro to CS", "CS101")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["courseCode"], "CS101");

    let (status, _) = post(&client, url.clone(), course_body("Other", "CS101")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, found) = get(&client, format!("{base}/api/courses/code/CS101")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["id"], created["id"]);

    let (_, by_credits) = get(&client, format!("{base}/api/courses/credits/3")).await;
    assert_eq!(by_credits.as_array().unwrap().len(), 1);

    let (status, _) = get(&client, format!("{base}/api/courses/credits/0")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, by_instructor) = get(&client, format!("{base}/api/courses/instructor/Dr.%20Hopper")).await;
    assert_eq!(by_instructor.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn enrollment_flow_and_cascade() {
    let base = start_server().await;
    let client = Client::new();

    post(&client, format!("{base}/api/students"), student_body("Alice", "a@example.edu")).await;
    post(&client, format!("{base}/api/courses"), course_body("Intro to CS", "CS101")).await;
    post(&client, format!("{base}/api/courses"), course_body("Algebra", "MATH201")).await;

    let enroll_url = format!("{base}/api/enrollments");
    let (status, first) = post(
        &client,
        enroll_url.clone(),
        json!({ "studentId": 1, "courseId": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(first["status"], "ACTIVE");
    assert!(first["grade"].is_null());
    assert_eq!(first["studentName"], "Alice Smith");
    assert_eq!(first["courseName"], "Intro to CS");
    assert_eq!(first["courseCode"], "CS101");

    let (status, _) = post(&client, enroll_url.clone(), json!({ "studentId": 1, "courseId": 1 })).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, missing) = post(&client, enroll_url.clone(), json!({ "studentId": 9, "courseId": 9 })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["message"], "Student not found with ID: 9");

    post(&client, enroll_url.clone(), json!({ "studentId": 1, "courseId": 2 })).await;

    let resp = client
        .patch(format!("{base}/api/enrollments/1/grade?grade=A-"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let graded: Value = resp.json().await.unwrap();
    assert_eq!(graded["grade"], "A-");
    assert_eq!(graded["status"], "ACTIVE");

    // Padding is trimmed before the length check and is not stored.
    let resp = client
        .patch(format!("{base}/api/enrollments/2/grade?grade=ABCDE%20"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let padded: Value = resp.json().await.unwrap();
    assert_eq!(padded["grade"], "ABCDE");
    let (_, stored) = get(&client, format!("{base}/api/enrollments/2")).await;
    assert_eq!(stored["grade"], "ABCDE");
    assert_eq!(stored["courseCode"], "MATH201");

    let resp = client
        .patch(format!("{base}/api/enrollments/1/status?status=completed"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = client
        .patch(format!("{base}/api/enrollments/1/status?status=COMPLETED"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let completed: Value = resp.json().await.unwrap();
    assert_eq!(completed["status"], "COMPLETED");
    assert_eq!(completed["grade"], "A-");

    let resp = client
        .patch(format!("{base}/api/enrollments/1/status?status=PAUSED"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let (_, active) = get(&client, format!("{base}/api/enrollments/student/1/active")).await;
    assert_eq!(active.as_array().unwrap().len(), 1);
    assert_eq!(active[0]["courseId"], 2);

    let (_, count) = get(&client, format!("{base}/api/enrollments/student/1/count")).await;
    assert_eq!(count["count"], 2);

    let (_, by_status) = get(&client, format!("{base}/api/enrollments/status/COMPLETED")).await;
    assert_eq!(by_status.as_array().unwrap().len(), 1);

    let (status, pair) = get(&client, format!("{base}/api/enrollments/lookup?studentId=1&courseId=2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(pair["id"], 2);

    let today = chrono::Utc::now().date_naive();
    let from = today - chrono::Duration::days(1);
    let to = today + chrono::Duration::days(1);
    let (status, window) = get(&client, format!("{base}/api/enrollments/between?from={from}&to={to}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(window.as_array().unwrap().len(), 2);

    let (status, _) = get(&client, format!("{base}/api/enrollments/between?from={to}&to={from}")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let resp = client
        .delete(format!("{base}/api/courses/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (_, remaining) = get(&client, enroll_url.clone()).await;
    let remaining = remaining.as_array().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0]["courseId"], 2);

    let resp = client
        .delete(format!("{base}/api/students/1"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let (_, remaining) = get(&client, enroll_url).await;
    assert!(remaining.as_array().unwrap().is_empty());

    let (status, _) = get(&client, format!("{base}/api/enrollments/course/2")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = get(&client, format!("{base}/api/enrollments/student/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn deleting_missing_enrollment_is_not_found() {
    let base = start_server().await;
    let client = Client::new();

    let resp = client
        .delete(format!("{base}/api/enrollments/77"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["message"], "Enrollment not found with ID: 77");
}
