use chrono::Utc;

use models::record::Record;
use models::user::{RoleProfile, User};

use super::StoreDocument;

pub const ADMIN_IDS: [&str; 2] = ["admin-1", "admin-2"];
pub const ADMIN_PASSWORD: &str = "syntaacs";

const ADMINS: [(&str, &str); 2] = [("Chaitanya", "chaitanya@gmail.com"), ("Anil Kumar", "anilkumar@gmail.com")];

/// Document used whenever nothing usable is stored: the two verification admins.
pub fn default_document() -> StoreDocument {
    let now = Utc::now();
    let users = ADMIN_IDS
        .iter()
        .zip(ADMINS.iter())
        .map(|(id, (name, email))| {
            Record::new(User {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                phone: String::new(),
                password: ADMIN_PASSWORD.to_string(),
                profile: RoleProfile::Admin,
                created_at: now,
                updated_at: now,
            })
        })
        .collect();
    StoreDocument { users, ..StoreDocument::default() }
}
