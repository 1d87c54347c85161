mod common;

use common::{backend_down, client_for, client_with, Call, FakeApi};
use peoplegpt_web::{ApiError, AppConfig};
use rocket::http::{ContentType, Status};

#[rocket::async_test]
async fn test_search_page_renders_empty_form() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client.get("/").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert!(response.headers().get_one("X-Request-Id").is_some());

    let body = response.into_string().await.unwrap();
    assert!(body.contains(r#"name="query""#));
    assert!(api.calls().is_empty());
}

#[rocket::async_test]
async fn test_blank_search_never_reaches_backend() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/")
        .header(ContentType::Form)
        .body("query=+++")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    assert!(api.calls().is_empty());
}

#[rocket::async_test]
async fn test_search_results_link_to_profiles() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/")
        .header(ContentType::Form)
        .body("query=gen-ai+engineers")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.unwrap();
    assert!(body.contains(r#"href="/candidate/2""#));
    assert!(body.contains("Grace Hopper"));
    assert!(body.contains("88%"));
    assert_eq!(api.calls(), vec![Call::Search("gen-ai engineers".to_string())]);
}

#[rocket::async_test]
async fn test_search_failure_keeps_query() {
    let (client, _api) = client_for(FakeApi {
        search_result: Err(backend_down()),
        ..FakeApi::default()
    })
    .await;

    let response = client
        .post("/")
        .header(ContentType::Form)
        .body("query=rust")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadGateway);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("could not be reached"));
    assert!(body.contains(r#"value="rust""#));
}

#[rocket::async_test]
async fn test_candidate_profile() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client.get("/candidate/1").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("https://github.com/ada"));
    assert!(body.contains(r#"action="/candidate/1/screen""#));
    assert_eq!(api.calls(), vec![Call::Candidate("1".to_string())]);
}

#[rocket::async_test]
async fn test_missing_candidate_is_not_found() {
    let (client, _api) = client_for(FakeApi {
        candidate_result: Err(ApiError::not_found("Candidate")),
        ..FakeApi::default()
    })
    .await;

    let response = client.get("/candidate/42").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Candidate not found"));
}

#[rocket::async_test]
async fn test_candidate_fetch_failure_offers_retry() {
    let (client, _api) = client_for(FakeApi {
        candidate_result: Err(backend_down()),
        ..FakeApi::default()
    })
    .await;

    let response = client.get("/candidate/7").dispatch().await;
    assert_eq!(response.status(), Status::BadGateway);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Something went wrong"));
    assert!(body.contains("could not be reached"));
    assert!(body.contains(r#"href="/candidate/7">Try again"#));
}

#[rocket::async_test]
async fn test_start_screening_navigates_to_questionnaire() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client.post("/candidate/1/screen").dispatch().await;
    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/screening/s-1"));
    assert_eq!(api.calls(), vec![Call::StartScreening("1".to_string())]);
}

#[rocket::async_test]
async fn test_start_screening_failure_stays_on_profile() {
    let (client, api) = client_for(FakeApi {
        start_result: Err(ApiError::ServerFailure {
            status: 500,
            message: "boom".to_string(),
        }),
        ..FakeApi::default()
    })
    .await;

    let response = client.post("/candidate/1/screen").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Ada Lovelace"));
    assert!(body.contains("HTTP 500"));
    assert_eq!(
        api.calls(),
        vec![
            Call::StartScreening("1".to_string()),
            Call::Candidate("1".to_string())
        ]
    );
}

#[rocket::async_test]
async fn test_screening_first_step() {
    let (client, _api) = client_for(FakeApi::default()).await;

    let response = client.get("/screening/5").dispatch().await;
    assert_eq!(response.status(), Status::Ok);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Question 1 of 3"));
    assert!(body.contains("Describe a RAG system you built."));
    assert!(body.contains(r#"id="back" disabled"#));
    assert!(body.contains(r#"id="next">Next"#));
}

#[rocket::async_test]
async fn test_screening_load_failure_shows_error() {
    let (client, _api) = client_for(FakeApi {
        screening_result: Err(backend_down()),
        ..FakeApi::default()
    })
    .await;

    let response = client.get("/screening/5").dispatch().await;
    assert_eq!(response.status(), Status::BadGateway);

    let body = response.into_string().await.unwrap();
    assert!(body.contains("could not be reached"));
    assert!(!body.contains("Question 1 of 3"));
}

#[rocket::async_test]
async fn test_next_and_back_keep_answers() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=0&answers.0=&answers.1=&answers.2=&answer=Built+one&action=next")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Question 2 of 3"));
    assert!(body.contains(r#"name="answers.0" value="Built one""#));

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=1&answers.0=Built+one&answers.1=&answers.2=&answer=Evals&action=back")
        .dispatch()
        .await;
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Question 1 of 3"));
    assert!(body.contains(r#"name="answers.1" value="Evals""#));
    assert!(body.contains("Built one</textarea>"));

    assert!(api.calls().iter().all(|call| matches!(call, Call::Screening(_))));
}

#[rocket::async_test]
async fn test_next_requires_an_answer() {
    let (client, _api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=0&answer=+++&action=next")
        .dispatch()
        .await;

    let body = response.into_string().await.unwrap();
    assert!(body.contains("Question 1 of 3"));
    assert!(body.contains("Answer this question before moving on."));
}

#[rocket::async_test]
async fn test_submit_posts_answers_once_and_returns_to_profile() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=2&answers.0=a1&answers.1=a2&answers.2=&answer=a3&action=submit")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/candidate/1"));

    let submits: Vec<Call> = api
        .calls()
        .into_iter()
        .filter(|call| matches!(call, Call::Submit(..)))
        .collect();
    assert_eq!(
        submits,
        vec![Call::Submit(
            "5".to_string(),
            vec!["a1".to_string(), "a2".to_string(), "a3".to_string()]
        )]
    );
}

#[rocket::async_test]
async fn test_incomplete_submit_is_rejected_locally() {
    let (client, api) = client_for(FakeApi::default()).await;

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=2&answers.0=a1&answers.1=&answers.2=&answer=a3&action=submit")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::Ok);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Every question needs an answer before submitting."));
    assert!(!api.calls().iter().any(|call| matches!(call, Call::Submit(..))));
}

#[rocket::async_test]
async fn test_submit_failure_is_visible() {
    let (client, _api) = client_for(FakeApi {
        submit_result: Err(backend_down()),
        ..FakeApi::default()
    })
    .await;

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body("step=2&answers.0=a1&answers.1=a2&answers.2=a3&answer=a3&action=submit")
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::BadGateway);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("could not be reached"));
    assert!(body.contains("Question 3 of 3"));
    assert!(body.contains(r#"name="answers.2" value="a3""#));
}

#[rocket::async_test]
async fn test_unknown_path_renders_not_found_page() {
    let (client, _api) = client_for(FakeApi::default()).await;

    let response = client.get("/nowhere").dispatch().await;
    assert_eq!(response.status(), Status::NotFound);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("Page not found"));
}

#[rocket::async_test]
async fn test_health() {
    let (client, _api) = client_for(FakeApi::default()).await;

    let response = client.get("/health").dispatch().await;
    assert_eq!(response.status(), Status::Ok);
    assert_eq!(response.into_string().await.as_deref(), Some("OK"));
}

fn long_answer(fill: char) -> String {
    std::iter::repeat(fill).take(12_000).collect()
}

#[rocket::async_test]
async fn test_long_answers_are_submitted() {
    let (client, api) = client_for(FakeApi::default()).await;
    let (a1, a2, a3) = (long_answer('a'), long_answer('b'), long_answer('c'));

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body(format!(
            "step=2&answers.0={a1}&answers.1={a2}&answers.2={a3}&answer={a3}&action=submit"
        ))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::SeeOther);
    assert_eq!(response.headers().get_one("Location"), Some("/candidate/1"));
    assert!(api
        .calls()
        .contains(&Call::Submit("5".to_string(), vec![a1, a2, a3])));
}

#[rocket::async_test]
async fn test_oversized_form_renders_inside_shell() {
    let config = AppConfig {
        form_limit_kib: 4,
        ..AppConfig::default()
    };
    let (client, api) = client_with(config, FakeApi::default()).await;
    let answer = long_answer('x');

    let response = client
        .post("/screening/5")
        .header(ContentType::Form)
        .body(format!("step=0&answer={answer}&action=next"))
        .dispatch()
        .await;

    assert_eq!(response.status(), Status::PayloadTooLarge);
    let body = response.into_string().await.unwrap();
    assert!(body.contains("PeopleGPT"));
    assert!(body.contains("Submission too large"));
    assert!(body.contains(r#"href="/screening/5">Try again"#));
    assert!(api.calls().is_empty());
}
