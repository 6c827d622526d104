//! ParkPass - Municipal Parks Passport
//!
//! Headless entry point: loads the stored passport, prints visit status
//! for every checkpoint, and renders the printable QR code signage.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use parkpass::catalog::{qr, CheckpointCatalog, QuestionnaireCatalog};
use parkpass::passport::PassportController;
use parkpass::storage::{load_config, SqliteVisitStore, VisitStore};
use parkpass::Database;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting ParkPass v{}", env!("CARGO_PKG_VERSION"));

    let config = load_config()?;
    let db = Database::open(&config.database_path())?;
    let store = SqliteVisitStore::new(db);
    let visits = store.load_all(config.profile.id)?;

    let checkpoints = Arc::new(CheckpointCatalog::builtin());
    let mut controller = PassportController::new(
        checkpoints.clone(),
        Arc::new(QuestionnaireCatalog::builtin()),
        config.profile.id,
    );
    controller.hydrate(&visits);

    let summary = controller.summary(config.program.deadline);
    println!(
        "{}'s passport: {}/{} parks stamped, {} to go",
        config.profile.name,
        summary.progress.completed,
        summary.progress.total,
        summary.parks_to_go
    );
    if let Some(days) = summary.days_remaining {
        println!("{days} days left in the program");
    }

    for status in controller.badges() {
        let mark = if status.earned { "earned" } else { "locked" };
        println!("  [{mark}] {} ({} parks)", status.badge.name, status.badge.threshold);
    }

    for marker in controller.map_markers() {
        let stamp = if marker.visited { "stamped" } else { "unstamped" };
        println!("\n#{} {} [{stamp}]", marker.id, marker.title);
        if let Some(checkpoint) = checkpoints.checkpoint_by_id(marker.id) {
            println!("{}", qr::printable_code(checkpoint)?);
        }
    }

    Ok(())
}
