//! Server entry-point: loads settings, mounts the shell and serves the page.

use std::sync::Arc;

use actix_web::{App, HttpServer, web};
use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use candidate_intake::Trace;
use candidate_intake::domain::AppShell;
use candidate_intake::domain::ports::CandidateStore;
use candidate_intake::inbound::http::health::{live, ready};
use candidate_intake::inbound::http::{HealthState, HttpState, configure};
use candidate_intake::outbound::firestore::FirestoreCandidateStore;
use candidate_intake::outbound::memory::InMemoryCandidateStore;
use candidate_intake::settings::AppSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|err| eyre!("failed to load settings: {err}"))?;
    let store = build_store(&settings)?;

    let health_state = web::Data::new(HealthState::new());
    let shell = AppShell::mount(store).await;
    info!(records = shell.records().len(), "candidate records loaded");
    let http_state = web::Data::new(HttpState::new(shell));

    // Clone for server factory so readiness probe remains accessible.
    let server_health_state = health_state.clone();
    let server = HttpServer::new(move || {
        App::new()
            .app_data(server_health_state.clone())
            .app_data(http_state.clone())
            .wrap(Trace)
            .configure(configure)
            .service(ready)
            .service(live)
    })
    .bind(settings.bind_addr())
    .wrap_err_with(|| format!("failed to bind {}", settings.bind_addr()))?;

    health_state.mark_ready();
    info!(addr = settings.bind_addr(), "serving candidate intake");
    server.run().await?;
    health_state.mark_unhealthy();
    Ok(())
}

fn build_store(settings: &AppSettings) -> Result<Arc<dyn CandidateStore>> {
    match settings.firestore_target()? {
        Some(target) => {
            info!(
                project = %target.project_id,
                collection = %target.collection,
                "using firestore candidate store"
            );
            let store = FirestoreCandidateStore::new(target, settings.request_timeout())
                .wrap_err("failed to build firestore client")?;
            Ok(Arc::new(store))
        }
        None => {
            warn!("no firestore project configured; candidate records are kept in memory");
            Ok(Arc::new(InMemoryCandidateStore::new()))
        }
    }
}
