use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    #[default]
    Applied,
    Accepted,
    Rejected,
    Completed,
    Withdrawn,
}

/// A worker's application to one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub worker_id: String,
    #[serde(default)]
    pub status: ApplicationStatus,
    pub applied_at: DateTime<Utc>,
}

impl Application {
    pub fn new(id: String, job_id: &str, worker_id: &str, now: DateTime<Utc>) -> Self {
        Self {
            id,
            job_id: job_id.to_string(),
            worker_id: worker_id.to_string(),
            status: ApplicationStatus::Applied,
            applied_at: now,
        }
    }
}
