//! Spot slice of the store: actions, reducer and selectors

use std::collections::BTreeMap;

use rostering_domain::{Spot, SpotId};

use super::AppState;

#[derive(Debug, Clone, PartialEq)]
pub enum SpotAction {
    Add(Spot),
    Remove(Spot),
    Update(Spot),
    RefreshList(Vec<Spot>),
    SetIsLoading(bool),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpotState {
    pub is_loading: bool,
    pub spots_by_id: BTreeMap<SpotId, Spot>,
}

impl SpotState {
    pub fn apply(&mut self, action: &SpotAction) {
        match action {
            SpotAction::Add(spot) | SpotAction::Update(spot) => self.upsert(spot),
            SpotAction::Remove(spot) => {
                if let Some(id) = spot.id {
                    self.spots_by_id.remove(&id);
                }
            }
            SpotAction::RefreshList(spots) => {
                self.spots_by_id.clear();
                for spot in spots {
                    self.upsert(spot);
                }
            }
            SpotAction::SetIsLoading(is_loading) => self.is_loading = *is_loading,
        }
    }

    fn upsert(&mut self, spot: &Spot) {
        match spot.id {
            Some(id) => {
                self.spots_by_id.insert(id, spot.clone());
            }
            None => tracing::warn!(name = %spot.name, "Ignoring Spot without an id"),
        }
    }
}

pub fn spot_by_id(state: &AppState, id: SpotId) -> Option<&Spot> {
    state.spot.spots_by_id.get(&id)
}

/// All spots of the current tenant, ordered by name
pub fn spot_list(state: &AppState) -> Vec<&Spot> {
    let mut spots: Vec<&Spot> = state.spot.spots_by_id.values().collect();
    spots.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
    spots
}

pub fn is_spot_list_loading(state: &AppState) -> bool {
    state.spot.is_loading
}
