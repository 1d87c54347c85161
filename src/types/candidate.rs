// src/types/candidate.rs
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{flexible_string, non_blank, null_as_default};

/// Full profile returned by `GET /candidate/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub experience: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
    #[serde(default, deserialize_with = "non_blank")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub linkedin_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub github_url: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub resume_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "non_blank")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "non_blank")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default, deserialize_with = "null_as_default")]
    pub degree: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    #[serde(default, deserialize_with = "flexible_string")]
    pub year: String,
}

/// Search hit as returned inside `{ candidates: [...] }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSummary {
    #[serde(deserialize_with = "flexible_string")]
    pub id: String,
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "non_blank")]
    pub experience: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLink {
    pub label: &'static str,
    pub url: String,
}

/// Match scores are shown as whole percentages.
pub fn score_label(score: f64) -> String {
    if !score.is_finite() {
        return "0%".to_string();
    }
    format!("{}%", score.clamp(0.0, 100.0).round() as i64)
}

impl Candidate {
    pub fn score_label(&self) -> String {
        score_label(self.score)
    }

    /// External links, in display order. Missing links and anything that is
    /// not a plain http(s) URL are skipped.
    pub fn links(&self) -> Vec<ProfileLink> {
        [
            ("LinkedIn", &self.linkedin_url),
            ("GitHub", &self.github_url),
            ("Resume", &self.resume_url),
        ]
        .into_iter()
        .filter_map(|(label, url)| {
            url.as_deref().filter(|url| is_web_url(url)).map(|url| ProfileLink {
                label,
                url: url.trim().to_string(),
            })
        })
        .collect()
    }

    /// `updated_at` (falling back to `created_at`) formatted for display.
    pub fn last_updated(&self) -> Option<String> {
        self.updated_at
            .as_deref()
            .or(self.created_at.as_deref())
            .and_then(format_timestamp)
    }
}

fn is_web_url(raw: &str) -> bool {
    reqwest::Url::parse(raw.trim())
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

impl CandidateSummary {
    pub fn score_label(&self) -> String {
        score_label(self.score)
    }
}

impl Education {
    /// "Institution • Year", omitting whichever part is empty.
    pub fn detail_line(&self) -> String {
        [self.institution.trim(), self.year.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" • ")
    }
}

/// Accepts RFC 3339 as well as the offset-less ISO form Python's `isoformat()` emits.
fn format_timestamp(raw: &str) -> Option<String> {
    const DISPLAY: &str = "%Y-%m-%d %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.format(DISPLAY).to_string());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.format(DISPLAY).to_string())
}
