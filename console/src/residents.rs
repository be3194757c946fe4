/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::*;
use connector::{Building, Gateway, Resident, ResidentDraft, ResidentId};
use std::sync::Arc;
use tracing::{debug, info};

/// Shown for residents whose building is not in the loaded list.
pub const UNKNOWN_BUILDING: &str = "Unknown";

/// State of the Residents view.
pub struct ResidentViewModel {
    gateway: Arc<dyn Gateway>,
    residents: Vec<Resident>,
    buildings: Vec<Building>,
    pending_edit: Option<ResidentDraft>,
    editing: bool,
    delete_gate: ConfirmationGate<ResidentRemoval>,
    failure: Option<String>,
}

impl ResidentViewModel {
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        Self {
            gateway,
            residents: Vec::new(),
            buildings: Vec::new(),
            pending_edit: None,
            editing: false,
            delete_gate: ConfirmationGate::new(),
            failure: None,
        }
    }

    pub fn residents(&self) -> &[Resident] {
        &self.residents
    }

    /// Buildings offered for selection, independent of the Apartments view.
    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    pub const fn pending_edit(&self) -> Option<&ResidentDraft> {
        self.pending_edit.as_ref()
    }

    pub fn pending_edit_mut(&mut self) -> Option<&mut ResidentDraft> {
        self.pending_edit.as_mut()
    }

    pub const fn is_editing(&self) -> bool {
        self.editing
    }

    pub const fn is_dialog_open(&self) -> bool {
        self.pending_edit.is_some()
    }

    pub const fn delete_target(&self) -> Option<&ResidentRemoval> {
        self.delete_gate.target()
    }

    pub fn failure(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// Replaces residents and buildings together, or neither.
    pub async fn load(&mut self) -> ConsoleResult<()> {
        self.failure = None;
        match self.gateway.directory().await {
            Ok(directory) => {
                debug!(
                    "Loaded {} residents and {} buildings",
                    directory.residents.len(),
                    directory.buildings.len()
                );
                self.residents = directory.residents;
                self.buildings = directory.buildings;
                Ok(())
            }
            Err(e) => Err(report(&mut self.failure, "Error fetching residents", e)),
        }
    }

    pub fn start_create(&mut self) {
        self.pending_edit = Some(ResidentDraft::default());
        self.editing = false;
    }

    pub fn start_edit(&mut self, resident: &Resident) {
        self.pending_edit = Some(ResidentDraft::from(resident));
        self.editing = true;
    }

    pub fn cancel_edit(&mut self) {
        self.pending_edit = None;
        self.editing = false;
    }

    /// Creates or updates the pending draft, then reloads everything: the
    /// server owns ids and the per-building counts.
    pub async fn save(&mut self) -> ConsoleResult<()> {
        let draft = self.pending_edit.clone().ok_or(ConsoleError::NoPendingEdit)?;
        self.failure = None;

        let result = if self.editing {
            self.gateway.update_resident(&draft).await
        } else {
            self.gateway.create_resident(&draft).await
        };

        if let Err(e) = result {
            return Err(report(&mut self.failure, "Error saving resident", e));
        }

        info!("Saved resident {}", draft.name);
        self.cancel_edit();
        self.load().await
    }

    pub fn request_delete(&mut self, id: ResidentId) {
        self.delete_gate.open(ResidentRemoval::Delete(id));
    }

    pub fn cancel_delete(&mut self) {
        self.delete_gate.cancel();
    }

    pub async fn confirm_delete(&mut self) -> ConsoleResult<()> {
        self.failure = None;
        let gateway = Arc::clone(&self.gateway);
        let (id, result) = self
            .delete_gate
            .confirm(|removal| async move {
                (removal.resident_id(), removal.apply(gateway.as_ref()).await)
            })
            .await
            .ok_or(ConsoleError::NothingPending)?;

        if let Err(e) = result {
            return Err(report(&mut self.failure, "Error deleting resident", e));
        }

        info!("Deleted resident {}", id);
        self.residents.retain(|r| r.id != id);
        Ok(())
    }

    pub fn resolve_building_name(&self, resident: &Resident) -> &str {
        if resident.is_unassigned() {
            return UNKNOWN_BUILDING;
        }

        self.buildings
            .iter()
            .find(|b| b.id == resident.apartment_id)
            .map_or(UNKNOWN_BUILDING, |b| b.name.as_str())
    }
}
