use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

use configs::AppConfig;
use service::storage::open_backend;
use service::RecordStore;

fn run(cfg: &AppConfig, run_id: Uuid) -> anyhow::Result<()> {
    if cfg.storage.backend == configs::BackendKind::File {
        common::env::ensure_data_dir(&cfg.storage.data_dir)?;
    }
    let backend = open_backend(&cfg.storage)?;
    let store = RecordStore::with_key(backend, cfg.storage.key.clone());

    if store.ensure_seeded() {
        info!(service = "portal", event = "seeded", %run_id, key = %store.key(), "default admins written");
    }

    let doc = store.load();
    let summary = serde_json::json!({
        "users": doc.users.len(),
        "jobs": doc.jobs.len(),
        "openJobs": store.get_all_jobs().len(),
        "applications": doc.applications.len(),
        "documents": doc.documents.len(),
        "pendingProfileRequests": store.get_profile_update_requests().len(),
        "keptAside": doc.unreadable_count(),
    });
    info!(service = "portal", event = "summary", %run_id, key = %store.key(), summary = %summary, "store loaded");
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG and PORTAL_* take effect
    dotenv().ok();

    let cfg = match AppConfig::load_or_default() {
        Ok(cfg) => cfg,
        Err(e) => {
            common::utils::logging::init_logging_default();
            error!(service = "portal", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };
    common::utils::logging::init_logging(&cfg.logging.format);

    let run_id = Uuid::new_v4();
    let version = env!("CARGO_PKG_VERSION");
    info!(service = "portal", event = "start", %run_id, version, backend = ?cfg.storage.backend, "portal starting");

    match run(&cfg, run_id) {
        Ok(()) => std::process::ExitCode::SUCCESS,
        Err(e) => {
            error!(service = "portal", event = "run_failed", %run_id, error = %e, "portal run failed");
            std::process::ExitCode::FAILURE
        }
    }
}
