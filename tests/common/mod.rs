#![allow(dead_code)]

use peoplegpt_web::core::RecruitingApi;
use peoplegpt_web::types::{Candidate, CandidateSummary, Screening, ScreeningEvaluation};
use peoplegpt_web::{build_rocket, ApiError, ApiResult, AppConfig};
use rocket::local::asynchronous::Client;
use std::sync::{Arc, Mutex};

/// One backend call as seen by the fake.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Search(String),
    Candidate(String),
    StartScreening(String),
    Screening(String),
    Submit(String, Vec<String>),
}

/// In-memory backend with canned answers and a call log.
pub struct FakeApi {
    pub search_result: ApiResult<Vec<CandidateSummary>>,
    pub candidate_result: ApiResult<Candidate>,
    pub start_result: ApiResult<String>,
    pub screening_result: ApiResult<Screening>,
    pub submit_result: ApiResult<ScreeningEvaluation>,
    pub calls: Mutex<Vec<Call>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            search_result: Ok(vec![summary("1", "Ada Lovelace"), summary("2", "Grace Hopper")]),
            candidate_result: Ok(candidate("1")),
            start_result: Ok("s-1".to_string()),
            screening_result: Ok(screening("5", "1")),
            submit_result: Ok(ScreeningEvaluation::default()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[rocket::async_trait]
impl RecruitingApi for FakeApi {
    async fn search(&self, query: &str) -> ApiResult<Vec<CandidateSummary>> {
        self.record(Call::Search(query.to_string()));
        self.search_result.clone()
    }

    async fn candidate(&self, id: &str) -> ApiResult<Candidate> {
        self.record(Call::Candidate(id.to_string()));
        self.candidate_result.clone()
    }

    async fn start_screening(&self, candidate_id: &str) -> ApiResult<String> {
        self.record(Call::StartScreening(candidate_id.to_string()));
        self.start_result.clone()
    }

    async fn screening(&self, id: &str) -> ApiResult<Screening> {
        self.record(Call::Screening(id.to_string()));
        self.screening_result.clone()
    }

    async fn submit_answers(
        &self,
        screening_id: &str,
        answers: &[String],
    ) -> ApiResult<ScreeningEvaluation> {
        self.record(Call::Submit(screening_id.to_string(), answers.to_vec()));
        self.submit_result.clone()
    }
}

pub fn summary(id: &str, name: &str) -> CandidateSummary {
    CandidateSummary {
        id: id.to_string(),
        name: name.to_string(),
        location: "London".to_string(),
        skills: vec!["Rust".to_string(), "LLMs".to_string()],
        score: 88.0,
        experience: Some("5 years".to_string()),
    }
}

pub fn candidate(id: &str) -> Candidate {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": "Ada Lovelace",
        "location": "London",
        "skills": ["Rust", "LLMs"],
        "experience": "Built retrieval pipelines for five years.",
        "education": [
            { "degree": "BSc Mathematics", "institution": "University of London", "year": "2015" }
        ],
        "email": "ada@example.com",
        "github_url": "https://github.com/ada",
        "score": 88.0
    }))
    .unwrap()
}

pub fn screening(id: &str, candidate_id: &str) -> Screening {
    Screening {
        id: id.to_string(),
        candidate_id: candidate_id.to_string(),
        questions: vec![
            "Describe a RAG system you built.".to_string(),
            "How do you evaluate LLM output?".to_string(),
            "What is your experience with vector databases?".to_string(),
        ],
    }
}

pub fn backend_down() -> ApiError {
    ApiError::NetworkFailure("connection refused".to_string())
}

pub async fn client_for(api: FakeApi) -> (Client, Arc<FakeApi>) {
    client_with(AppConfig::default(), api).await
}

pub async fn client_with(config: AppConfig, api: FakeApi) -> (Client, Arc<FakeApi>) {
    let api = Arc::new(api);
    let rocket = build_rocket(&config, api.clone());
    let client = Client::tracked(rocket).await.expect("valid rocket instance");
    (client, api)
}
