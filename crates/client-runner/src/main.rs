//! Rostering client - composition root binary
//!
//! Wires the reqwest transport, tracing notifier and in-memory store into the
//! Spot service and runs a single command against the server.

mod cli;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rostering_client_adapters::infrastructure::{HttpApiClient, InMemoryStore, TracingNotifier};
use rostering_client_app::application::ports::outbound::StorePort;
use rostering_client_app::application::services::SpotService;
use rostering_client_app::application::store::{
    current_tenant_id, is_spot_list_loading, spot_by_id, AppAction, AppState, SpotAction,
    TenantAction,
};
use rostering_client_app::application::{report_service_error, Api, ServiceError};
use rostering_client_ports::outbound::NotificationPort;
use rostering_client_ports::ClientConfig;
use rostering_domain::TenantId;

use cli::{Cli, Command, Output};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rostering=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config = config.with_base_url(api_url)?;
    }
    if let Some(tenant_id) = cli.tenant {
        config = config.with_tenant_id(tenant_id);
    }
    tracing::info!(api = %config.base_url, tenant_id = %config.tenant_id, "Configuration loaded");

    let store = build_store(config.tenant_id);
    let notifier = Arc::new(TracingNotifier::new());
    let api = Api::new(Arc::new(HttpApiClient::new(&config)));
    let service = SpotService::new(api, notifier.clone(), store.clone());

    let (context, result) = match cli.command {
        Command::List => (
            "refreshing Spots",
            service.refresh_spot_list().await.map(Output::Spots),
        ),
        Command::Add { name, skills } => {
            let spot = cli::new_spot(config.tenant_id, name, skills)?;
            ("adding Spot", service.add_spot(&spot).await.map(Output::Spot))
        }
        Command::Update { id, name, version } => {
            // Edit the server's copy so skills and unknown attributes survive
            if let Err(error) = service.refresh_spot_list().await {
                return fail(notifier.as_ref(), "refreshing Spots", error);
            }
            let state = store.state();
            let stored = spot_by_id(&state, id)
                .with_context(|| format!("Spot {id} not found in tenant {}", config.tenant_id))?;
            let spot = cli::renamed_spot(stored, name, version)?;
            ("updating Spot", service.update_spot(&spot).await.map(Output::Spot))
        }
        Command::Remove { id, name } => {
            let spot = cli::existing_spot(config.tenant_id, id, name, None);
            (
                "deleting Spot",
                service
                    .remove_spot(&spot)
                    .await
                    .map(|deleted| Output::Removed { id, deleted }),
            )
        }
    };

    match result {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(error) => fail(notifier.as_ref(), context, error),
    }
}

fn fail(notifier: &dyn NotificationPort, context: &str, error: ServiceError) -> Result<()> {
    report_service_error(notifier, context, &error);
    Err(error).with_context(|| format!("Failed {context}"))
}

/// Store scoped to `tenant_id`, with state changes logged.
fn build_store(tenant_id: TenantId) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());
    store.subscribe(log_store_change);
    store.dispatch(TenantAction::ChangeTenant(tenant_id).into());
    store
}

fn log_store_change(action: &AppAction, state: &AppState) {
    match action {
        AppAction::Spot(SpotAction::SetIsLoading(_)) => {
            tracing::debug!(loading = is_spot_list_loading(state), "Spot list loading");
        }
        AppAction::Spot(_) => {
            tracing::debug!(count = state.spot.spots_by_id.len(), "Spot slice changed");
        }
        AppAction::Tenant(_) => {
            tracing::info!(tenant_id = %current_tenant_id(state), "Tenant changed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rostering_domain::{Spot, SpotId};

    #[test]
    fn store_starts_on_the_configured_tenant_with_logging_attached() {
        let store = build_store(TenantId::new(4));

        assert_eq!(store.subscriber_count(), 1);
        assert_eq!(current_tenant_id(&store.state()), TenantId::new(4));
    }

    #[test]
    fn logging_subscriber_handles_every_action() {
        let store = build_store(TenantId::new(4));
        let spot = Spot::new(TenantId::new(4), "Bar").with_id(SpotId::new(1));

        store.dispatch(SpotAction::SetIsLoading(true).into());
        store.dispatch(SpotAction::RefreshList(vec![spot.clone()]).into());
        store.dispatch(SpotAction::Remove(spot).into());

        assert!(is_spot_list_loading(&store.state()));
        assert!(store.state().spot.spots_by_id.is_empty());

        store.dispatch(TenantAction::ChangeTenant(TenantId::new(5)).into());
        assert_eq!(current_tenant_id(&store.state()), TenantId::new(5));
    }
}
