//! Spot Service - keeps the store's Spot slice in sync with the server
//!
//! Each operation is one REST round trip followed by notifications and store
//! dispatches. The server is authoritative: whatever it returns is what gets
//! dispatched. Nothing is retried, cached or rolled back, and transport
//! failures are returned to the caller without notifying the user.

use std::sync::Arc;

use rostering_client_ports::outbound::{ApiPort, NotificationPort, NotifyExt};
use rostering_domain::{Spot, SpotId, TenantId};

use crate::application::ports::outbound::StorePort;
use crate::application::store::{current_tenant_id, SpotAction};
use crate::application::ServiceError;

pub struct SpotService<A: ApiPort> {
    api: A,
    notifier: Arc<dyn NotificationPort>,
    store: Arc<dyn StorePort>,
}

impl<A: ApiPort> SpotService<A> {
    pub fn new(api: A, notifier: Arc<dyn NotificationPort>, store: Arc<dyn StorePort>) -> Self {
        Self {
            api,
            notifier,
            store,
        }
    }

    /// Create a spot in its tenant and add the server's copy to the store.
    pub async fn add_spot(&self, spot: &Spot) -> Result<Spot, ServiceError> {
        let path = format!("/tenant/{}/spot/add", spot.tenant_id);
        let new_spot: Spot = self.api.post(&path, spot).await?;

        tracing::info!(tenant_id = %new_spot.tenant_id, spot_id = ?new_spot.id, "Spot added");
        self.notifier.show_success_message(
            "Successfully added Spot",
            &format!("The Spot \"{}\" was successfully added.", new_spot.name),
        );
        self.store.dispatch(SpotAction::Add(new_spot.clone()).into());
        Ok(new_spot)
    }

    /// Delete a spot.
    ///
    /// The server answers `false` when the spot cannot be deleted (for example
    /// because shifts still reference it). That is reported to the user and
    /// returned as `Ok(false)`; the store is left untouched since the spot
    /// still exists.
    pub async fn remove_spot(&self, spot: &Spot) -> Result<bool, ServiceError> {
        let spot_id = require_id(spot, "delete")?;
        let path = format!("/tenant/{}/spot/{}", spot.tenant_id, spot_id);
        let is_success: bool = self.api.delete(&path).await?;

        if is_success {
            tracing::info!(tenant_id = %spot.tenant_id, spot_id = %spot_id, "Spot deleted");
            self.notifier.show_success_message(
                "Successfully deleted Spot",
                &format!("The Spot \"{}\" was successfully deleted.", spot.name),
            );
            self.store.dispatch(SpotAction::Remove(spot.clone()).into());
        } else {
            tracing::warn!(tenant_id = %spot.tenant_id, spot_id = %spot_id, "Server refused to delete Spot");
            self.notifier.show_error_message(
                "Error deleting Spot",
                &format!("The Spot \"{}\" could not be deleted.", spot.name),
            );
        }
        Ok(is_success)
    }

    /// Send modified fields and store the server's normalized copy.
    pub async fn update_spot(&self, spot: &Spot) -> Result<Spot, ServiceError> {
        let spot_id = require_id(spot, "update")?;
        let path = format!("/tenant/{}/spot/update", spot.tenant_id);
        let updated_spot: Spot = self.api.post(&path, spot).await?;

        tracing::info!(tenant_id = %updated_spot.tenant_id, spot_id = %spot_id, "Spot updated");
        self.notifier.show_success_message(
            "Successfully updated Spot",
            &format!("The Spot with id \"{spot_id}\" was successfully updated."),
        );
        self.store.dispatch(SpotAction::Update(updated_spot.clone()).into());
        Ok(updated_spot)
    }

    /// Reload every spot of the store's current tenant.
    pub async fn refresh_spot_list(&self) -> Result<Vec<Spot>, ServiceError> {
        let tenant_id = current_tenant_id(&self.store.state());
        self.refresh_spot_list_for(tenant_id).await
    }

    /// Reload every spot of `tenant_id`.
    ///
    /// The loading flag is raised before the request and lowered only after a
    /// successful fetch. A failed fetch leaves it raised until a later refresh
    /// succeeds.
    pub async fn refresh_spot_list_for(
        &self,
        tenant_id: TenantId,
    ) -> Result<Vec<Spot>, ServiceError> {
        self.store.dispatch(SpotAction::SetIsLoading(true).into());

        let path = format!("/tenant/{tenant_id}/spot/");
        let spot_list: Vec<Spot> = self.api.get(&path).await?;

        tracing::debug!(tenant_id = %tenant_id, count = spot_list.len(), "Spot list refreshed");
        self.store
            .dispatch(SpotAction::RefreshList(spot_list.clone()).into());
        self.store.dispatch(SpotAction::SetIsLoading(false).into());
        Ok(spot_list)
    }
}

fn require_id(spot: &Spot, operation: &'static str) -> Result<SpotId, ServiceError> {
    spot.id.ok_or(ServiceError::MissingSpotId { operation })
}
