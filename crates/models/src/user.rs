use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::AmountRange;

/// `createdBy` value for workers who registered themselves.
pub const SELF_REGISTERED: &str = "self";
pub const DEFAULT_GIG_LEVEL: f64 = 1.0;

/// Daily wage band per gig level, levels 1 through 5.
const GIG_LEVEL_WAGES: [(f64, f64); 5] =
    [(200.0, 300.0), (300.0, 400.0), (400.0, 600.0), (500.0, 700.0), (600.0, 900.0)];

/// Wage band for a whole-numbered level; anything else has none.
pub fn wage_range_for_level(level: f64) -> Option<AmountRange> {
    if level.fract() != 0.0 || !(1.0..=GIG_LEVEL_WAGES.len() as f64).contains(&level) {
        return None;
    }
    GIG_LEVEL_WAGES.get(level as usize - 1).map(|&(min, max)| AmountRange::new(min, max))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Kiosk,
    Admin,
    Worker,
    Employer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Kiosk => "kiosk",
            UserRole::Admin => "admin",
            UserRole::Worker => "worker",
            UserRole::Employer => "employer",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployerType {
    #[default]
    Individual,
    Business,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KioskProfile {
    pub location: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorkerProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birthdate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub aadhaar_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voter_card: Option<String>,
    pub preferred_language: String,
    pub travellable_distance: f64,
    pub work_category: Vec<String>,
    pub skills: Vec<String>,
    /// `"self"` or the id of the kiosk that registered the worker.
    pub created_by: String,
    pub updated_by: String,
    pub verification_status: VerificationStatus,
    pub gig_level: f64,
    pub wage_range: AmountRange,
}

impl Default for WorkerProfile {
    fn default() -> Self {
        Self {
            birthdate: None,
            location: None,
            address: None,
            aadhaar_number: String::new(),
            pan_number: None,
            voter_card: None,
            preferred_language: String::new(),
            travellable_distance: 0.0,
            work_category: Vec::new(),
            skills: Vec::new(),
            created_by: SELF_REGISTERED.into(),
            updated_by: SELF_REGISTERED.into(),
            verification_status: VerificationStatus::Pending,
            gig_level: DEFAULT_GIG_LEVEL,
            wage_range: AmountRange::new(GIG_LEVEL_WAGES[0].0, GIG_LEVEL_WAGES[0].1),
        }
    }
}

impl WorkerProfile {
    /// Worker registered at a kiosk on its operator's behalf.
    pub fn registered_by_kiosk(kiosk_id: &str) -> Self {
        Self { created_by: kiosk_id.to_string(), updated_by: kiosk_id.to_string(), ..Self::default() }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EmployerProfile {
    #[serde(rename = "type")]
    pub employer_type: EmployerType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pan_card: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gstin_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cin_number: Option<String>,
}

/// Role-specific part of a user, tagged by the `role` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum RoleProfile {
    Kiosk(KioskProfile),
    Admin,
    Worker(WorkerProfile),
    Employer(EmployerProfile),
}

impl RoleProfile {
    pub fn role(&self) -> UserRole {
        match self {
            RoleProfile::Kiosk(_) => UserRole::Kiosk,
            RoleProfile::Admin => UserRole::Admin,
            RoleProfile::Worker(_) => UserRole::Worker,
            RoleProfile::Employer(_) => UserRole::Employer,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Stored in plaintext. Demo data only.
    pub password: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn role(&self) -> UserRole { self.profile.role() }

    pub fn as_worker(&self) -> Option<&WorkerProfile> {
        match &self.profile {
            RoleProfile::Worker(w) => Some(w),
            _ => None,
        }
    }

    /// INSECURE demo check: exact, case-sensitive plaintext comparison.
    /// `role: None` matches any role.
    pub fn credentials_match(&self, email: &str, password: &str, role: Option<UserRole>) -> bool {
        self.email == email && self.password == password && role.map_or(true, |r| self.role() == r)
    }
}

/// User fields supplied by the caller; id and timestamps are assigned on create.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    #[serde(flatten)]
    pub profile: RoleProfile,
}

impl NewUser {
    pub fn into_user(self, id: String, now: DateTime<Utc>) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            password: self.password,
            profile: self.profile,
            created_at: now,
            updated_at: now,
        }
    }
}
