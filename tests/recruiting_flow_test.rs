use std::env;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value as JsonValue;
use tower::ServiceExt;
use uuid::Uuid;

use talentgate_backend::dto::auth_dto::RegisterPayload;
use talentgate_backend::dto::candidate_dto::CreateCandidatePayload;
use talentgate_backend::dto::interview_dto::UpdateInterviewPayload;
use talentgate_backend::dto::job_dto::CreateJobPayload;
use talentgate_backend::error::Error;
use talentgate_backend::services::auth_service::AuthService;
use talentgate_backend::services::candidate_service::CandidateService;
use talentgate_backend::services::company_service::CompanyService;
use talentgate_backend::services::interview_service::InterviewService;
use talentgate_backend::services::job_service::JobService;

// Runs against a real database. Set TEST_DATABASE_URL to enable; without it
// the test is a no-op so the suite still passes on machines with no Postgres.
#[tokio::test]
async fn hiring_flow_end_to_end() {
    dotenvy::dotenv().ok();
    let Ok(database_url) = env::var("TEST_DATABASE_URL") else {
        eprintln!("TEST_DATABASE_URL not set; skipping hiring_flow_end_to_end");
        return;
    };
    env::set_var("DATABASE_URL", database_url);
    env::set_var("SERVER_ADDRESS", "127.0.0.1:0");
    env::set_var("JWT_SECRET", "test_secret_key");

    let _ = talentgate_backend::config::init_config();
    let pool = talentgate_backend::database::pool::create_pool()
        .await
        .expect("pool");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    let run = Uuid::new_v4();
    let auth_service = AuthService::new(pool.clone());
    let job_service = JobService::new(pool.clone());
    let candidate_service = CandidateService::new(pool.clone());
    let interview_service = InterviewService::new(pool.clone());
    let company_service = CompanyService::new(pool.clone());

    // Company account; its email collides with the retry below.
    let company_email = format!("hr_{}@example.com", run);
    let company_user = auth_service
        .register(RegisterPayload {
            email: company_email.clone(),
            password: "longenough".into(),
            full_name: Some("Hiring Team".into()),
            role: "company".into(),
            company_name: Some(format!("Acme {}", run)),
        })
        .await
        .expect("register company");
    let company_id = company_user.company_id.expect("company id");

    // Registering the same email again must fail and leave no extra row.
    let err = auth_service
        .register(RegisterPayload {
            email: company_email.clone(),
            password: "longenough".into(),
            full_name: None,
            role: "candidate".into(),
            company_name: None,
        })
        .await
        .expect_err("duplicate email must be rejected");
    assert!(matches!(err, Error::Conflict(_)), "got {:?}", err);
    let (email_rows,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM users WHERE email = $1")
            .bind(&company_email)
            .fetch_one(&pool)
            .await
            .expect("count users");
    assert_eq!(email_rows, 1);

    let backend_job = job_service
        .create(CreateJobPayload {
            company_id,
            title: format!("Backend Engineer {}", run),
            location: "Remote".into(),
            description: "Own the API".into(),
            requirements: vec!["Rust".into(), "SQL".into(), "Docker".into()],
        })
        .await
        .expect("create backend job");
    let data_job = job_service
        .create(CreateJobPayload {
            company_id,
            title: format!("Data Engineer {}", run),
            location: "Berlin".into(),
            description: "Own the pipelines".into(),
            requirements: vec!["Python".into()],
        })
        .await
        .expect("create data job");

    // The listing must return each job's requirements in insertion order.
    let listed = job_service.list(0, 500).await.expect("list jobs");
    let listed_backend = listed
        .iter()
        .find(|d| d.job.id == backend_job.job.id)
        .expect("backend job listed");
    assert_eq!(listed_backend.requirements, vec!["Rust", "SQL", "Docker"]);
    assert_eq!(listed_backend.company, format!("Acme {}", run));
    let listed_data = listed
        .iter()
        .find(|d| d.job.id == data_job.job.id)
        .expect("data job listed");
    assert_eq!(listed_data.requirements, vec!["Python"]);

    let mut candidates = Vec::new();
    for name in ["alice", "bob", "carol"] {
        let profile = candidate_service
            .create(CreateCandidatePayload {
                email: format!("{}_{}@example.com", name, run),
                password: "longenough".into(),
                full_name: Some(name.to_string()),
                phone: None,
                resume_url: None,
            })
            .await
            .expect("create candidate");
        candidates.push(profile);
    }
    let (alice, bob, carol) = (&candidates[0], &candidates[1], &candidates[2]);

    // Alice passes interviews for both jobs, once via status and once via a
    // score over the pass mark. Bob passes one. Carol never interviews.
    let schedule = |candidate_id, job_id| {
        let interview_service = interview_service.clone();
        async move {
            interview_service
                .create(talentgate_backend::dto::interview_dto::CreateInterviewPayload {
                    candidate_id,
                    job_id,
                    date: Utc::now(),
                    status: "scheduled".into(),
                })
                .await
                .expect("create interview")
        }
    };
    let alice_first = schedule(alice.id, backend_job.job.id).await;
    let alice_second = schedule(alice.id, data_job.job.id).await;
    let bob_first = schedule(bob.id, backend_job.job.id).await;

    interview_service
        .update(
            alice_first.id,
            UpdateInterviewPayload {
                date: None,
                status: Some("passed".into()),
                feedback: Some("Strong systems answers".into()),
                score: Some(92),
            },
        )
        .await
        .expect("conclude alice first");
    interview_service
        .update(
            alice_second.id,
            UpdateInterviewPayload {
                date: None,
                status: Some("completed".into()),
                feedback: None,
                score: Some(85),
            },
        )
        .await
        .expect("conclude alice second");
    interview_service
        .update(
            bob_first.id,
            UpdateInterviewPayload {
                date: None,
                status: Some("passed".into()),
                feedback: None,
                score: Some(74),
            },
        )
        .await
        .expect("conclude bob");

    // A passed outcome must advance the candidate record too.
    let bob_after = candidate_service
        .get(bob.id)
        .await
        .expect("get bob")
        .expect("bob exists");
    assert_eq!(bob_after.status, "passed");

    // Alice appears once despite two qualifying interviews; Carol not at all.
    let passed = company_service
        .passed_candidates(company_id)
        .await
        .expect("passed candidates");
    assert_eq!(passed.len(), 2);
    let alice_row = passed
        .iter()
        .find(|p| p.id == alice.id)
        .expect("alice in results");
    assert_eq!(alice_row.best_score, Some(92));
    assert!(passed.iter().any(|p| p.id == bob.id));
    assert!(passed.iter().all(|p| p.id != carol.id));

    // Same result over the wire with a company bearer token.
    let config = talentgate_backend::config::get_config();
    let token = talentgate_backend::utils::token::issue_access_token(
        &config.jwt_secret,
        config.token_ttl_minutes,
        company_user.id,
        "company",
        Some(company_id),
    )
    .expect("token");
    let app = talentgate_backend::app_router(talentgate_backend::AppState::new(pool.clone()));
    let req = Request::builder()
        .method("GET")
        .uri("/api/company/candidates/passed")
        .header("authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body: JsonValue = serde_json::from_slice(&bytes).unwrap();
    let entries = body.as_array().expect("array body");
    assert_eq!(entries.len(), 2);
    assert!(entries.iter().all(|e| e["status"] == "passed"));
}
