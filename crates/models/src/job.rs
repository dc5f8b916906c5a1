use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AmountRange;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    #[default]
    Open,
    Closed,
    Completed,
    Deleted,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub employer_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_estimated: Option<String>,
    pub workers_required: u32,
    pub budget_range: AmountRange,
    #[serde(default)]
    pub status: JobStatus,
    /// Worker ids, one entry per application (duplicates allowed).
    #[serde(default)]
    pub applicants: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Job {
    pub fn is_open(&self) -> bool { self.status == JobStatus::Open }

    /// Drop every applicant entry for `worker_id`.
    pub fn remove_applicant(&mut self, worker_id: &str) {
        self.applicants.retain(|id| id != worker_id);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewJob {
    pub employer_id: String,
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub time_estimated: Option<String>,
    pub workers_required: u32,
    pub budget_range: AmountRange,
}

impl NewJob {
    /// New jobs always start open with no applicants.
    pub fn into_job(self, id: String, now: DateTime<Utc>) -> Job {
        Job {
            id,
            employer_id: self.employer_id,
            title: self.title,
            category: self.category,
            description: self.description,
            time_estimated: self.time_estimated,
            workers_required: self.workers_required,
            budget_range: self.budget_range,
            status: JobStatus::Open,
            applicants: Vec::new(),
            created_at: now,
        }
    }
}
