//! Tenant scope held by the store

use rostering_domain::TenantId;

use super::AppState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TenantAction {
    ChangeTenant(TenantId),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TenantState {
    pub current_tenant_id: TenantId,
}

impl TenantState {
    pub fn apply(&mut self, action: &TenantAction) {
        match action {
            TenantAction::ChangeTenant(tenant_id) => {
                tracing::debug!(tenant_id = %tenant_id, "Changing current tenant");
                self.current_tenant_id = *tenant_id;
            }
        }
    }
}

pub fn current_tenant_id(state: &AppState) -> TenantId {
    state.tenant.current_tenant_id
}
