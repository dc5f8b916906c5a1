use chrono::Utc;
use tracing::{info, warn};

use models::application::Application;
use models::ids::{generate_id, APPLICATION_PREFIX};
use models::record::Record;

use super::RecordStore;

impl RecordStore {
    /// Record an application and add the worker to the job's applicants,
    /// both in one load/save cycle. An unknown job still gets the
    /// application record; repeat applications are not deduplicated.
    pub fn apply_for_job(&self, worker_id: &str, job_id: &str) -> Option<Record<Application>> {
        self.insert("apply_for_job", |doc| {
            let application = Record::new(Application::new(generate_id(APPLICATION_PREFIX), job_id, worker_id, Utc::now()));
            doc.applications.push(application.clone());
            match doc.jobs.iter_mut().find(|j| j.id == job_id) {
                Some(job) => job.applicants.push(worker_id.to_string()),
                None => warn!(%job_id, %worker_id, "application recorded for unknown job"),
            }
            info!(application_id = %application.id, %job_id, %worker_id, "applied_for_job");
            Ok(application)
        })
    }

    pub fn get_applications_by_worker_id(&self, worker_id: &str) -> Vec<Record<Application>> {
        self.load().applications.into_iter().filter(|a| a.worker_id == worker_id).collect()
    }

    /// Remove the application and the worker's entries in the job's applicants.
    pub fn withdraw_application(&self, application_id: &str) -> bool {
        self.mutate("withdraw_application", |doc| {
            let Some(idx) = doc.applications.iter().position(|a| a.id == application_id) else {
                return Ok(false);
            };
            let application = doc.applications.remove(idx);
            if let Some(job) = doc.jobs.iter_mut().find(|j| j.id == application.job_id) {
                job.remove_applicant(&application.worker_id);
            }
            info!(%application_id, job_id = %application.job_id, "application_withdrawn");
            Ok(true)
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::memory_store;
    use models::application::ApplicationStatus;
    use models::job::NewJob;
    use models::AmountRange;

    fn post_job(store: &crate::RecordStore, title: &str) -> String {
        store
            .create_job(NewJob {
                employer_id: "user-e".into(),
                title: title.into(),
                category: "cleaning".into(),
                description: "office".into(),
                time_estimated: None,
                workers_required: 1,
                budget_range: AmountRange::new(100.0, 200.0),
            })
            .expect("job")
            .id
            .clone()
    }

    #[test]
    fn apply_links_application_and_exactly_one_job() {
        let store = memory_store();
        let target = post_job(&store, "A");
        let other = post_job(&store, "B");

        let app = store.apply_for_job("user-w", &target).expect("applied");
        assert!(app.id.starts_with("app-"));
        assert_eq!(app.status, ApplicationStatus::Applied);

        assert_eq!(store.get_job(&target).expect("job").applicants, vec!["user-w".to_string()]);
        assert!(store.get_job(&other).expect("job").applicants.is_empty());
        assert_eq!(store.get_applications_by_worker_id("user-w"), vec![app]);
    }

    #[test]
    fn withdraw_removes_both_sides() {
        let store = memory_store();
        let job_id = post_job(&store, "A");
        let app = store.apply_for_job("user-w", &job_id).expect("applied");
        store.apply_for_job("user-v", &job_id).expect("applied");

        assert!(store.withdraw_application(&app.id));
        assert!(store.get_applications_by_worker_id("user-w").is_empty());
        assert_eq!(store.get_job(&job_id).expect("job").applicants, vec!["user-v".to_string()]);
        assert!(!store.withdraw_application(&app.id));
    }

    #[test]
    fn apply_to_unknown_job_still_records_application() {
        let store = memory_store();
        let app = store.apply_for_job("user-w", "job-missing").expect("applied");
        assert_eq!(app.job_id, "job-missing");
        assert_eq!(store.get_applications_by_worker_id("user-w").len(), 1);
        // withdrawing an orphan only drops the application
        assert!(store.withdraw_application(&app.id));
        assert!(store.load().applications.is_empty());
    }
}
