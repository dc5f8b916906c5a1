use chrono::Utc;
use tracing::{debug, info, instrument};

use models::ids::{generate_id, USER_PREFIX};
use models::patch::{apply_patch, Patch};
use models::record::Record;
use models::user::{NewUser, User, UserRole};

use super::RecordStore;

impl RecordStore {
    /// Add a user with a generated id and fresh timestamps.
    /// Input is stored as given; duplicate emails are not rejected.
    #[instrument(skip(self, input), fields(email = %input.email, role = %input.profile.role()))]
    pub fn create_user(&self, input: NewUser) -> Option<Record<User>> {
        self.insert("create_user", |doc| {
            let user = Record::new(input.into_user(generate_id(USER_PREFIX), Utc::now()));
            doc.users.push(user.clone());
            info!(user_id = %user.id, "user_created");
            Ok(user)
        })
    }

    /// INSECURE demo login: first user whose email and plaintext password
    /// match exactly (case-sensitive), optionally restricted to a role.
    pub fn get_user(&self, email: &str, password: &str, role: Option<UserRole>) -> Option<Record<User>> {
        let found = self.load().users.into_iter().find(|u| u.credentials_match(email, password, role));
        debug!(%email, matched = found.is_some(), "credential lookup");
        found
    }

    pub fn get_user_by_id(&self, id: &str) -> Option<Record<User>> {
        self.load().users.into_iter().find(|u| u.id == id)
    }

    /// Merge `patch` over the user and refresh `updatedAt`. Patch keys the
    /// user type does not model are stored as given.
    pub fn update_user(&self, id: &str, patch: &Patch) -> bool {
        self.mutate("update_user", |doc| {
            let Some(slot) = doc.users.iter_mut().find(|u| u.id == id) else { return Ok(false) };
            let mut updated = apply_patch(&*slot, patch)?;
            updated.updated_at = Utc::now();
            *slot = updated;
            Ok(true)
        })
    }

    /// Hard delete. Jobs, documents and applications that reference the
    /// user are left in place.
    pub fn delete_user(&self, id: &str) -> bool {
        self.mutate("delete_user", |doc| {
            let before = doc.users.len();
            doc.users.retain(|u| u.id != id);
            Ok(doc.users.len() != before)
        })
    }

    /// Workers whose `createdBy` is the given kiosk.
    pub fn get_workers_by_kiosk_id(&self, kiosk_id: &str) -> Vec<Record<User>> {
        self.load()
            .users
            .into_iter()
            .filter(|u| u.as_worker().is_some_and(|w| w.created_by == kiosk_id))
            .collect()
    }
}
