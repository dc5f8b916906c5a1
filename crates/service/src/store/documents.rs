use chrono::Utc;
use tracing::info;

use models::document::{trust_score, Document, NewDocument};
use models::ids::{generate_id, DOCUMENT_PREFIX};
use models::record::Record;

use super::RecordStore;

impl RecordStore {
    /// Attach an unverified document to a user. The user is not checked.
    pub fn add_document(&self, user_id: &str, input: NewDocument) -> Option<Record<Document>> {
        self.insert("add_document", |doc| {
            let document = Record::new(input.into_document(generate_id(DOCUMENT_PREFIX), user_id, Utc::now()));
            doc.documents.push(document.clone());
            info!(document_id = %document.id, %user_id, "document_added");
            Ok(document)
        })
    }

    pub fn get_documents_by_user_id(&self, user_id: &str) -> Vec<Record<Document>> {
        self.load().documents.into_iter().filter(|d| d.user_id == user_id).collect()
    }

    pub fn get_all_documents(&self) -> Vec<Record<Document>> { self.load().documents }

    pub fn update_document_status(&self, document_id: &str, verified: bool) -> bool {
        self.mutate("update_document_status", |doc| {
            let Some(document) = doc.documents.iter_mut().find(|d| d.id == document_id) else { return Ok(false) };
            document.verified = verified;
            info!(%document_id, verified, "document_status_updated");
            Ok(true)
        })
    }

    pub fn trust_score(&self, user_id: &str) -> u32 {
        trust_score(self.get_documents_by_user_id(user_id).iter().map(|d| &**d))
    }
}
