/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use connector::{Building, BuildingDraft, BuildingId, Gateway, GatewayError, Resident};
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    None,
    Ascending,
    Descending,
}

impl SortOrder {
    pub const fn next(self) -> Self {
        match self {
            SortOrder::None => SortOrder::Ascending,
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::None,
        }
    }
}

/// Residents of one building, fetched for read-only display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    pub building_id: BuildingId,
    pub residents: Vec<Resident>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    Removed,
    /// The building still has residents; the warning is raised instead.
    Blocked,
}

/// State of the Apartments view.
pub struct BuildingViewModel {
    gateway: Arc<dyn Gateway>,
    buildings: Vec<Building>,
    sort_order: SortOrder,
    /// Order of `buildings` before the sort cycle entered `Ascending`.
    unsorted: Vec<BuildingId>,
    pending_edit: Option<BuildingDraft>,
    editing: bool,
    delete_gate: ConfirmationGate<Building>,
    unassign_gate: ConfirmationGate<ResidentRemoval>,
    roster: Option<Roster>,
    occupied_warning: bool,
    failure: Option<String>,
}

impl BuildingViewModel {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            buildings: Vec::new(),
            sort_order: SortOrder::None,
            unsorted: Vec::new(),
            pending_edit: None,
            editing: false,
            delete_gate: ConfirmationGate::new(),
            unassign_gate: ConfirmationGate::new(),
            roster: None,
            occupied_warning: false,
            failure: None,
        }
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub const fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub const fn pending_edit(&self) -> Option<&BuildingDraft> {
        self.pending_edit.as_ref()
    }

    pub fn pending_edit_mut(&mut self) -> Option<&mut BuildingDraft> {
        self.pending_edit.as_mut()
    }

    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub const fn is_dialog_open(&self) -> bool {
        self.pending_edit.is_some()
    }

    pub const fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    pub const fn delete_target(&self) -> Option<&Building> {
        self.delete_gate.target()
    }

    pub const fn unassign_target(&self) -> Option<&ResidentRemoval> {
        self.unassign_gate.target()
    }

    pub const fn occupied_warning(&self) -> bool {
        self.occupied_warning
    }

    pub fn dismiss_warning(&mut self) {
        self.occupied_warning = false;
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Replaces the list with the server's; keeps the current sort order.
    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.failure = None;
        match self.gateway.list_buildings().await {
            Ok(buildings) => {
                debug!("Loaded {} buildings", buildings.len());
                self.unsorted = buildings.iter().map(|b| b.id).collect();
                self.buildings = buildings;
                self.sort();
                Ok(())
            }
            Err(e) => Err(report(&mut self.failure, "Error fetching buildings", e)),
        }
    }

    pub fn start_create(&mut self) {
        self.pending_edit = Some(BuildingDraft::default());
        self.editing = false;
    }

    pub fn start_edit(&mut self, building: &Building) {
        self.pending_edit = Some(BuildingDraft::from(building));
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.pending_edit = None;
        self.editing = false;
    }

    /// Creates or updates the pending draft. The dialog stays open on failure.
    pub async fn save(&mut self) -> ConsoleResult<()> {
        let draft = self.pending_edit.clone().ok_or(ConsoleError::NoPendingEdit)?;
        self.failure = None;

        if self.editing {
            if let Err(e) = self.gateway.update_building(&draft).await {
                return Err(report(&mut self.failure, "Error saving building", e));
            }

            self.apply_update(&draft);
        } else {
            match self.gateway.create_building(&draft).await {
                Ok(created) => self.apply_create(created.id, draft),
                Err(e) => return Err(report(&mut self.failure, "Error saving building", e)),
            }
        }

        self.cancel_edit();
        Ok(())
    }

    fn apply_create(&mut self, id: BuildingId, draft: BuildingDraft) {
        info!("Created building {}", id);
        let building = Building {
            id,
            name: draft.name,
            address: draft.address,
            residents_count: 0,
        };

        match self.buildings.iter_mut().find(|b| b.id == id) {
            Some(existing) => *existing = building,
            None => self.buildings.push(building),
        }

        if !self.unsorted.contains(&id) {
            self.unsorted.push(id);
        }

        self.sort();
    }

    fn apply_update(&mut self, draft: &BuildingDraft) {
        let Some(id) = draft.id else {
            warn!("Updated building has no id, local list left as is");
            return;
        };

        if let Some(existing) = self.buildings.iter_mut().find(|b| b.id == id) {
            existing.name = draft.name.clone();
            existing.address = draft.address.clone();
        }
    }

    pub fn request_delete(&mut self, building: &Building) {
        self.delete_gate.open(building.clone());
    }

    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    /// Deletes the building awaiting confirmation. The request is always sent,
    /// but a building known to have residents is never removed locally,
    /// whatever the server answers.
    pub async fn confirm_delete(&mut self) -> ConsoleResult<Deletion> {
        let occupied = match self.delete_gate.target() {
            Some(target) => self
                .buildings
                .iter()
                .find(|b| b.id == target.id)
                .unwrap_or(target)
                .has_residents(),
            None => return Err(ConsoleError::NothingPending),
        };

        self.failure = None;
        let gateway = Arc::clone(&self.gateway);
        let (id, result) = self
            .delete_gate
            .confirm(|building| async move {
                (building.id, gateway.delete_building(building.id).await)
            })
            .await
            .ok_or(ConsoleError::NothingPending)?;

        match result {
            Ok(_) if occupied => {
                warn!("Building {} is listed with residents, kept locally", id);
                self.occupied_warning = true;
                Ok(Deletion::Blocked)
            }
            Ok(_) => {
                info!("Deleted building {}", id);
                self.buildings.retain(|b| b.id != id);
                self.unsorted.retain(|u| *u != id);
                Ok(Deletion::Removed)
            }
            Err(GatewayError::BuildingOccupied) => {
                warn!("Building {} cannot be deleted, it has assigned residents", id);
                self.occupied_warning = true;
                Ok(Deletion::Blocked)
            }
            Err(e) => Err(report(&mut self.failure, "Error deleting building", e)),
        }
    }

    /// Cycles `None -> Ascending -> Descending -> None` over the resident
    /// count. Back at `None` the order from before the cycle is restored.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.next();

        if self.sort_order == SortOrder::Ascending {
            self.unsorted = self.buildings.iter().map(|b| b.id).collect();
        }

        self.sort();
        self.sort_order
    }

    fn sort(&mut self) {
        match self.sort_order {
            SortOrder::Ascending => self.buildings.sort_by_key(|b| b.residents_count),
            SortOrder::Descending => self
                .buildings
                .sort_by(|a, b| b.residents_count.cmp(&a.residents_count)),
            SortOrder::None => {
                let unsorted = &self.unsorted;
                self.buildings.sort_by_key(|b| {
                    unsorted
                        .iter()
                        .position(|id| *id == b.id)
                        .unwrap_or(usize::MAX)
                });
            }
        }
    }

    /// Fetches the residents of one building into the roster.
    pub async fn view_residents(&mut self, building_id: BuildingId) -> ConsoleResult<()> {
        self.failure = None;
        match self.gateway.list_residents_in(building_id).await {
            Ok(residents) => {
                self.roster = Some(Roster {
                    building_id,
                    residents,
                });
                Ok(())
            }
            Err(e) => Err(report(&mut self.failure, "Error fetching residents", e)),
        }
    }

    pub fn close_roster(&mut self) {
        self.roster = None;
        self.unassign_gate.cancel();
    }

    pub fn request_unassign(&mut self, resident: &Resident) {
        self.unassign_gate
            .open(ResidentRemoval::UnassignFromBuilding(resident.id));
    }

    pub fn cancel_unassign(&mut self) {
        self.unassign_gate.cancel();
    }

    /// Detaches the resident from the roster's building. The resident record
    /// itself survives with no building.
    pub async fn confirm_unassign(&mut self) -> ConsoleResult<()> {
        self.failure = None;
        let gateway = Arc::clone(&self.gateway);
        let (id, result) = self
            .unassign_gate
            .confirm(|removal| async move {
                (removal.resident_id(), removal.apply(gateway.as_ref()).await)
            })
            .await
            .ok_or(ConsoleError::NothingPending)?;

        if let Err(e) = result {
            return Err(report(&mut self.failure, "Error unassigning resident", e));
        }

        info!("Unassigned resident {}", id);
        let Some(roster) = self.roster.as_mut() else {
            return Ok(());
        };

        let before = roster.residents.len();
        roster.residents.retain(|r| r.id != id);
        if roster.residents.len() == before {
            return Ok(());
        }

        let building_id = roster.building_id;
        if let Some(building) = self.buildings.iter_mut().find(|b| b.id == building_id) {
            building.residents_count = (building.residents_count - 1).max(0);
        }

        self.sort();
        Ok(())
    }
}
