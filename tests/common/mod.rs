// tests/common/mod.rs

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use careernexus::ApiClient;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::{Value, json};

/// What the fake backend saw.
#[derive(Debug, Default)]
pub struct Recorded {
    pub runs: Vec<Value>,
    pub run_auth_headers: Vec<Option<String>>,
    pub submissions: Vec<Value>,
    /// How many upcoming submits should be rejected.
    pub failing_submits: usize,
    pub created_jobs: Vec<Value>,
    pub applied_jobs: Vec<String>,
    pub uploads: Vec<(String, Vec<u8>)>,
    pub updated_jobs: Vec<(String, Value)>,
    pub deleted_jobs: Vec<String>,
    pub status_updates: Vec<(String, Value)>,
    pub deleted_resources: Vec<String>,
    pub approved_jobs: Vec<String>,
    pub assessments: Vec<Value>,
    pub recruiter_profiles: Vec<Value>,
}

pub type Shared = Arc<Mutex<Recorded>>;

pub struct TestApp {
    pub address: String,
    pub recorded: Shared,
}

impl TestApp {
    pub fn client(&self, token: Option<&str>) -> ApiClient {
        ApiClient::with_base(
            url::Url::parse(&format!("{}/api", self.address)).unwrap(),
            token,
            Duration::from_secs(5),
        )
        .expect("Failed to build client")
    }

    pub fn recorded(&self) -> std::sync::MutexGuard<'_, Recorded> {
        self.recorded.lock().unwrap()
    }
}

/// Helper function to spawn a fake portal backend on a random port.
pub async fn spawn_app() -> TestApp {
    let recorded: Shared = Arc::new(Mutex::new(Recorded::default()));

    let app = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/coding-exam/{id}", get(get_exam))
        .route("/api/coding-exam/{id}/submit", post(submit_exam))
        .route("/api/coding-exam/session/{id}/question", get(session_question))
        .route("/api/code/run", post(run_code))
        .route("/api/job/all", get(list_jobs))
        .route("/api/job/create", post(create_job))
        .route("/api/applications/apply/{id}", post(apply))
        .route("/api/resources/upload", post(upload))
        .route("/api/admin/create-user", post(create_user))
        .route("/api/student/profile", get(broken_profile))
        .route(
            "/api/recruiter/profile",
            get(recruiter_profile).put(update_recruiter_profile),
        )
        .route(
            "/api/job/{id}",
            get(get_job).put(update_job).delete(delete_job),
        )
        .route("/api/applications/job/{id}", get(applicants))
        .route("/api/applications/{id}/status", put(update_status))
        .route("/api/resources/{id}", axum::routing::delete(delete_resource))
        .route("/api/tpo/jobs/pending", get(pending_jobs))
        .route("/api/tpo/jobs/{id}/approve", put(approve_job))
        .route("/api/exam/recruiter/create", post(create_assessment))
        .route("/api/exam/recruiter/list", get(list_assessments))
        .route("/api/exam/recruiter/{id}/results", get(assessment_results))
        .with_state(recorded.clone());

    // Bind to port 0 to get a random available port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    // Spawn the server in the background
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    TestApp { address, recorded }
}

pub fn signed_token(role: &str, sub: &str) -> String {
    encode(
        &Header::default(),
        &json!({ "sub": sub, "role": role, "exp": 4102444800u64 }),
        &EncodingKey::from_secret(b"backend-only-secret"),
    )
    .unwrap()
}

pub fn question_json(id: &str, title: &str, points: u32) -> Value {
    json!({
        "id": id,
        "title": title,
        "description": format!("<p>Solve {}</p>", title),
        "constraints": "1 <= n <= 100",
        "points": points,
        "publicTestCases": [{ "input": "1", "expectedOutput": "1" }]
    })
}

async fn login(Json(body): Json<Value>) -> impl IntoResponse {
    match (body["email"].as_str(), body["password"].as_str()) {
        (Some("asha@campus.edu"), Some("secret")) => (
            StatusCode::OK,
            Json(json!({
                "token": signed_token("student", "7"),
                "userId": 7,
                "role": "student",
                "username": "asha"
            })),
        ),
        (Some("hr@acme.io"), Some("secret")) => (
            StatusCode::OK,
            // No role field: the client falls back to the token's claims.
            Json(json!({ "token": signed_token("recruiter", "12") })),
        ),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "message": "Invalid credentials" })),
        ),
    }
}

/// Exams: `e1` answers submits with JSON, `e-text` with a plain-text body
/// and `e-dup` with the score under two keys.
async fn get_exam(Path(id): Path<String>) -> impl IntoResponse {
    if !matches!(id.as_str(), "e1" | "e-text" | "e-dup") {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Exam not found" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "_id": id,
            "assessmentName": "Campus Drive 2026",
            "endTime": "2030-01-01T00:00:00Z",
            "questions": [question_json("A", "Sum", 10), question_json("B", "Reverse", 20)]
        })),
    )
}

async fn submit_exam(
    State(recorded): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    let mut recorded = recorded.lock().unwrap();
    if recorded.failing_submits > 0 {
        recorded.failing_submits -= 1;
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Submission window closed" })),
        )
            .into_response();
    }
    recorded.submissions.push(body);
    match id.as_str() {
        "e-text" => (StatusCode::OK, "Exam submitted successfully").into_response(),
        "e-dup" => Json(json!({ "totalScore": 25, "score": 25, "maxScore": 30 })).into_response(),
        _ => Json(json!({ "totalScore": 30, "maxScore": 30 })).into_response(),
    }
}

async fn session_question(Path(id): Path<String>) -> impl IntoResponse {
    if id == "s-ok" {
        (StatusCode::OK, Json(question_json("P1", "Palindrome", 5)))
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Session not found" })),
        )
    }
}

async fn run_code(
    State(recorded): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let mut recorded = recorded.lock().unwrap();
    recorded.run_auth_headers.push(
        headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    );
    recorded.runs.push(body.clone());

    let code = body["code"].as_str().unwrap_or_default();
    if code.contains("crash") {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Execution service unavailable" })),
        );
    }
    (
        StatusCode::OK,
        Json(json!({
            "stdout": format!("{} got [{}]", body["language"].as_str().unwrap_or("?"), body["stdin"].as_str().unwrap_or("")),
            "executionTime": 12
        })),
    )
}

async fn list_jobs() -> impl IntoResponse {
    Json(json!([
        { "id": 1, "title": "SDE Intern", "companyName": "Acme", "ctc": "8 LPA" },
        { "_id": "j-2", "job_title": "Analyst", "company_name": "Globex", "is_approved": true }
    ]))
}

async fn create_job(State(recorded): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut job = body.clone();
    job["id"] = json!(99);
    recorded.lock().unwrap().created_jobs.push(body);
    (StatusCode::CREATED, Json(job))
}

async fn apply(State(recorded): State<Shared>, Path(id): Path<String>) -> impl IntoResponse {
    let mut recorded = recorded.lock().unwrap();
    if recorded.applied_jobs.contains(&id) {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "You have already applied to this job" })),
        );
    }
    recorded.applied_jobs.push(id);
    (StatusCode::OK, Json(json!({ "message": "Applied" })))
}

async fn upload(State(recorded): State<Shared>, headers: HeaderMap, body: Bytes) -> impl IntoResponse {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    recorded.lock().unwrap().uploads.push((content_type, body.to_vec()));
    (
        StatusCode::CREATED,
        Json(json!({ "id": "r1", "title": "Aptitude Notes", "fileUrls": ["/files/r1/notes.txt"] })),
    )
}

async fn create_user(Json(body): Json<Value>) -> impl IntoResponse {
    if body["email"] == "taken@campus.edu" {
        return (
            StatusCode::CONFLICT,
            Json(json!({ "error": "User already exists" })),
        );
    }
    (StatusCode::CREATED, Json(json!({ "id": 1 })))
}

async fn broken_profile() -> impl IntoResponse {
    (StatusCode::INTERNAL_SERVER_ERROR, "database down")
}

async fn recruiter_profile() -> impl IntoResponse {
    Json(json!({
        "name": "Meera Shah",
        "email": "hr@acme.io",
        "company_name": "Acme",
        "designation": "Talent Lead"
    }))
}

async fn update_recruiter_profile(
    State(recorded): State<Shared>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    recorded.lock().unwrap().recruiter_profiles.push(body);
    (StatusCode::OK, "Profile updated")
}

fn job_json(id: &str) -> Value {
    json!({
        "id": id,
        "title": "SDE Intern",
        "companyName": "Acme",
        "description": "Build things",
        "minCgpa": 7.5
    })
}

async fn get_job(Path(id): Path<String>) -> Response {
    if id == "1" {
        Json(job_json("1")).into_response()
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Job not found" })),
        )
            .into_response()
    }
}

async fn update_job(
    State(recorded): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    recorded.lock().unwrap().updated_jobs.push((id, body));
    (StatusCode::OK, "Job updated")
}

async fn delete_job(State(recorded): State<Shared>, Path(id): Path<String>) -> impl IntoResponse {
    recorded.lock().unwrap().deleted_jobs.push(id);
    StatusCode::NO_CONTENT
}

async fn applicants(Path(id): Path<String>) -> impl IntoResponse {
    Json(json!([
        { "_id": 31, "jobId": id, "studentName": "Asha", "status": "applied" },
        { "id": "a-32", "job_id": id, "student_name": "Ravi", "status": "shortlisted" }
    ]))
}

async fn update_status(
    State(recorded): State<Shared>,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    recorded.lock().unwrap().status_updates.push((id, body));
    Json(json!({ "message": "Status updated" }))
}

async fn delete_resource(State(recorded): State<Shared>, Path(id): Path<String>) -> Response {
    if id == "missing" {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Resource not found" })),
        )
            .into_response();
    }
    recorded.lock().unwrap().deleted_resources.push(id);
    StatusCode::OK.into_response()
}

async fn pending_jobs() -> impl IntoResponse {
    Json(json!([
        { "id": 4, "title": "Data Intern", "companyName": "Initech" },
        { "id": 5, "title": "QA Engineer", "company_name": "Acme", "approved": true },
        { "id": 6, "title": "SRE", "companyName": "Globex", "is_approved": false }
    ]))
}

async fn approve_job(State(recorded): State<Shared>, Path(id): Path<String>) -> impl IntoResponse {
    recorded.lock().unwrap().approved_jobs.push(id);
    (StatusCode::OK, "Job approved")
}

async fn create_assessment(
    State(recorded): State<Shared>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    recorded.lock().unwrap().assessments.push(body);
    (StatusCode::CREATED, "Assessment created")
}

async fn list_assessments() -> impl IntoResponse {
    Json(json!([
        { "id": "x1", "assessmentName": "Campus Drive 2026", "questionCount": 2 }
    ]))
}

async fn assessment_results(Path(_id): Path<String>) -> impl IntoResponse {
    Json(json!([
        { "studentName": "Ravi", "totalScore": 10, "maxScore": 30 },
        { "student_name": "Asha", "name": "Asha", "totalScore": 25, "score": 25, "maxScore": 30 },
        { "name": "Meera", "score": 18 }
    ]))
}
