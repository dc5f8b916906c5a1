use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Points granted per verified document.
pub const TRUST_POINTS_PER_DOCUMENT: u32 = 20;
pub const MAX_TRUST_SCORE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub doc_type: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub verified: bool,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub url: String,
}

impl NewDocument {
    /// Uploaded documents start unverified.
    pub fn into_document(self, id: String, user_id: &str, now: DateTime<Utc>) -> Document {
        Document {
            id,
            user_id: user_id.to_string(),
            name: self.name,
            doc_type: self.doc_type,
            url: self.url,
            verified: false,
            uploaded_at: now,
        }
    }
}

/// Display score: verified documents x 20, capped at 100.
pub fn trust_score<'a, I>(documents: I) -> u32
where
    I: IntoIterator<Item = &'a Document>,
{
    let verified = documents.into_iter().filter(|d| d.verified).count() as u32;
    verified.saturating_mul(TRUST_POINTS_PER_DOCUMENT).min(MAX_TRUST_SCORE)
}
