use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::patch::Patch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// A pending change to a user record awaiting admin review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdateRequest {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub updates: Patch,
    #[serde(default)]
    pub status: RequestStatus,
    pub requested_at: DateTime<Utc>,
}

impl ProfileUpdateRequest {
    pub fn new(id: String, user_id: &str, updates: Patch, now: DateTime<Utc>) -> Self {
        Self { id, user_id: user_id.to_string(), updates, status: RequestStatus::Pending, requested_at: now }
    }

    pub fn is_pending(&self) -> bool { self.status == RequestStatus::Pending }
}
