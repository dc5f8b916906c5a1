use chrono::Utc;
use tracing::info;

use models::ids::{generate_id, JOB_PREFIX};
use models::job::{Job, NewJob};
use models::patch::{apply_patch, Patch};
use models::record::Record;

use super::RecordStore;

impl RecordStore {
    /// Post a job; it starts `open` with no applicants.
    pub fn create_job(&self, input: NewJob) -> Option<Record<Job>> {
        self.insert("create_job", |doc| {
            let job = Record::new(input.into_job(generate_id(JOB_PREFIX), Utc::now()));
            doc.jobs.push(job.clone());
            info!(job_id = %job.id, employer_id = %job.employer_id, "job_created");
            Ok(job)
        })
    }

    pub fn get_job(&self, id: &str) -> Option<Record<Job>> {
        self.load().jobs.into_iter().find(|j| j.id == id)
    }

    pub fn get_jobs_by_employer_id(&self, employer_id: &str) -> Vec<Record<Job>> {
        self.load().jobs.into_iter().filter(|j| j.employer_id == employer_id).collect()
    }

    /// Merge `patch` over the job. Jobs carry no `updatedAt`.
    pub fn update_job(&self, id: &str, patch: &Patch) -> bool {
        self.mutate("update_job", |doc| {
            let Some(slot) = doc.jobs.iter_mut().find(|j| j.id == id) else { return Ok(false) };
            *slot = apply_patch(&*slot, patch)?;
            Ok(true)
        })
    }

    /// Hard delete; applications pointing at the job are kept.
    pub fn delete_job(&self, id: &str) -> bool {
        self.mutate("delete_job", |doc| {
            let before = doc.jobs.len();
            doc.jobs.retain(|j| j.id != id);
            Ok(doc.jobs.len() != before)
        })
    }

    /// Every job currently open for applications.
    pub fn get_all_jobs(&self) -> Vec<Record<Job>> {
        self.load().jobs.into_iter().filter(|j| j.is_open()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::memory_store;
    use models::job::JobStatus;
    use models::patch::patch_from_value;
    use models::AmountRange;
    use serde_json::json;

    fn new_job(employer_id: &str, title: &str) -> NewJob {
        NewJob {
            employer_id: employer_id.into(),
            title: title.into(),
            category: "construction".into(),
            description: "site work".into(),
            time_estimated: Some("2 days".into()),
            workers_required: 3,
            budget_range: AmountRange::new(500.0, 800.0),
        }
    }

    #[test]
    fn created_job_is_open_and_empty() {
        let store = memory_store();
        let job = store.create_job(new_job("user-e", "Mason")).expect("created");
        assert!(job.id.starts_with("job-"));
        assert_eq!(job.status, JobStatus::Open);
        assert!(job.applicants.is_empty());
        assert_eq!(store.get_job(&job.id), Some(job));
    }

    #[test]
    fn get_all_jobs_returns_open_only() -> Result<(), anyhow::Error> {
        let store = memory_store();
        let open = store.create_job(new_job("user-e", "Open")).expect("created");
        for (title, status) in [("Closed", "closed"), ("Done", "completed"), ("Gone", "deleted")] {
            let job = store.create_job(new_job("user-e", title)).expect("created");
            assert!(store.update_job(&job.id, &patch_from_value(json!({ "status": status }))?));
        }
        let listed = store.get_all_jobs();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, open.id);
        assert!(listed.iter().all(|j| j.status == JobStatus::Open));
        assert_eq!(store.get_jobs_by_employer_id("user-e").len(), 4);
        Ok(())
    }

    #[test]
    fn update_job_merges_and_rejects_bad_values() -> Result<(), anyhow::Error> {
        let store = memory_store();
        let job = store.create_job(new_job("user-e", "Mason")).expect("created");
        let patch = patch_from_value(json!({ "title": "Senior Mason", "budgetRange": { "min": 900, "max": 1200 } }))?;
        assert!(store.update_job(&job.id, &patch));
        let after = store.get_job(&job.id).expect("found");
        assert_eq!(after.title, "Senior Mason");
        assert_eq!(after.budget_range, AmountRange::new(900.0, 1200.0));
        assert_eq!(after.created_at, job.created_at);

        assert!(!store.update_job(&job.id, &patch_from_value(json!({ "status": "paused" }))?));
        assert!(!store.update_job("job-missing", &patch));
        Ok(())
    }

    #[test]
    fn delete_job_removes_it() {
        let store = memory_store();
        let job = store.create_job(new_job("user-e", "Mason")).expect("created");
        assert!(store.delete_job(&job.id));
        assert!(store.get_job(&job.id).is_none());
        assert!(!store.delete_job(&job.id));
        assert!(store.get_jobs_by_employer_id("user-e").is_empty());
    }
}
