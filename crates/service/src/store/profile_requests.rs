use chrono::Utc;
use tracing::{info, warn};

use models::ids::{generate_id, REQUEST_PREFIX};
use models::patch::Patch;
use models::profile_request::{ProfileUpdateRequest, RequestStatus};
use models::record::Record;

use super::RecordStore;

impl RecordStore {
    pub fn add_profile_update_request(&self, user_id: &str, updates: Patch) -> Option<Record<ProfileUpdateRequest>> {
        self.insert("add_profile_update_request", |doc| {
            let request = Record::new(ProfileUpdateRequest::new(generate_id(REQUEST_PREFIX), user_id, updates, Utc::now()));
            doc.profile_update_requests.push(request.clone());
            info!(request_id = %request.id, %user_id, "profile_update_requested");
            Ok(request)
        })
    }

    /// Requests still awaiting review.
    pub fn get_profile_update_requests(&self) -> Vec<Record<ProfileUpdateRequest>> {
        self.load().profile_update_requests.into_iter().filter(|r| r.is_pending()).collect()
    }

    /// Set a request's status. Approval first applies `updates` to the user
    /// through [`RecordStore::update_user`] (its own load/save), then records
    /// the status in a second load/save. The two writes are not atomic, and a
    /// request for a missing user is still marked approved.
    pub fn update_profile_request(&self, request_id: &str, status: RequestStatus) -> bool {
        let Some(request) = self.load().profile_update_requests.into_iter().find(|r| r.id == request_id) else {
            return false;
        };

        if status == RequestStatus::Approved && !self.update_user(&request.user_id, &request.updates) {
            warn!(%request_id, user_id = %request.user_id, "approved updates were not applied to the user");
        }

        self.mutate("update_profile_request", |doc| {
            let Some(slot) = doc.profile_update_requests.iter_mut().find(|r| r.id == request_id) else {
                return Ok(false);
            };
            slot.status = status;
            info!(%request_id, ?status, "profile_request_reviewed");
            Ok(true)
        })
    }
}
