//! Client-side state container model
//!
//! State is only ever changed by applying an [`AppAction`]; services never
//! touch it directly. Selectors are plain functions over a state reference.

pub mod spot;
pub mod tenant;

pub use spot::{is_spot_list_loading, spot_by_id, spot_list, SpotAction, SpotState};
pub use tenant::{current_tenant_id, TenantAction, TenantState};

#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    Spot(SpotAction),
    Tenant(TenantAction),
}

impl From<SpotAction> for AppAction {
    fn from(action: SpotAction) -> Self {
        AppAction::Spot(action)
    }
}

impl From<TenantAction> for AppAction {
    fn from(action: TenantAction) -> Self {
        AppAction::Tenant(action)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub spot: SpotState,
    pub tenant: TenantState,
}

impl AppState {
    /// Apply one action in place
    pub fn apply(&mut self, action: &AppAction) {
        match action {
            AppAction::Spot(action) => self.spot.apply(action),
            AppAction::Tenant(action) => {
                self.tenant.apply(action);
                // Entities never leak across tenants
                if let TenantAction::ChangeTenant(_) = action {
                    self.spot = SpotState::default();
                }
            }
        }
    }

    /// Pure form of [`AppState::apply`]
    pub fn reduce(mut self, action: &AppAction) -> Self {
        self.apply(action);
        self
    }
}
