mod actor_framework;
mod api;
mod app_system;
mod clients;
mod course_actor;
mod domain;
mod notification;
mod order_actor;
mod student_actor;
mod validation;

#[cfg(test)]
mod mock_framework;

use clap::Parser;
use tracing::{error, info};

use crate::api::AppState;
use crate::app_system::{setup_tracing, StorefrontConfig, StorefrontSystem, SystemError};
use crate::notification::WhatsAppLink;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = StorefrontConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    info!(address = %config.socket_addr(), "Starting course storefront");

    let system = StorefrontSystem::new(config.channel_capacity);

    if config.no_seed {
        info!("Catalog seeding disabled");
    } else {
        system.seed_catalog().await?;
    }

    let state = AppState::new(&system, WhatsAppLink::new(&config.whatsapp_number));
    let served = api::serve(&config, state).await;
    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    // Shutdown system gracefully
    system.shutdown().await?;
    served?;

    info!("Storefront stopped");
    Ok(())
}
