/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::notice;
use crate::input::*;
use anyhow::{Result, bail};
use clap::{Subcommand, ValueEnum};
use connector::{Building, BuildingId, Gateway, ResidentId};
use console::{BuildingViewModel, Deletion, SortOrder};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Asc,
    Desc,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    List {
        /// Order by resident count.
        #[arg(short, long, value_enum)]
        sort: Option<SortArg>,
    },
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
    },
    Edit {
        id: BuildingId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        address: Option<String>,
    },
    Delete {
        id: BuildingId,
        #[arg(short, long)]
        yes: bool,
    },
    /// Shows the residents assigned to a building.
    Residents {
        id: BuildingId,
    },
    /// Removes a resident from a building without deleting the resident.
    Unassign {
        building: BuildingId,
        resident: ResidentId,
        #[arg(short, long)]
        yes: bool,
    },
}

fn find(vm: &BuildingViewModel, id: BuildingId) -> Result<Building> {
    match vm.buildings().iter().find(|b| b.id == id) {
        Some(building) => Ok(building.clone()),
        None => bail!("Building {} not found.", id),
    }
}

fn print_buildings(buildings: &[Building], sort_order: SortOrder) {
    if buildings.is_empty() {
        println!("You have no buildings.");
        return;
    }

    let arrow = match sort_order {
        SortOrder::Ascending => "↑",
        SortOrder::Descending => "↓",
        SortOrder::None => "↕",
    };

    println!(
        "{:<6} {:<24} {:<32} RESIDENTS {}",
        "ID", "NAME", "ADDRESS", arrow
    );
    for building in buildings {
        println!(
            "{:<6} {:<24} {:<32} {}",
            building.id, building.name, building.address, building.residents_count
        );
    }
}

pub async fn handle(cmd: Commands, gateway: Arc<dyn Gateway>) -> Result<()> {
    let mut vm = BuildingViewModel::new(gateway);

    match cmd {
        Commands::List { sort } => {
            vm.load().await.map_err(|e| notice(vm.failure(), e))?;

            let target = match sort {
                Some(SortArg::Asc) => SortOrder::Ascending,
                Some(SortArg::Desc) => SortOrder::Descending,
                None => SortOrder::None,
            };
            while vm.sort_order() != target {
                vm.toggle_sort();
            }

            print_buildings(vm.buildings(), vm.sort_order());
        }

        Commands::Create { name, address } => {
            let name = value_or_ask(name, "Building Name")?;
            let address = value_or_ask(address, "Building Address")?;

            vm.start_create();
            if let Some(draft) = vm.pending_edit_mut() {
                draft.name = name;
                draft.address = address;
            }
            vm.save().await.map_err(|e| notice(vm.failure(), e))?;

            if let Some(building) = vm.buildings().last() {
                println!("Building created with id {}.", building.id);
            }
        }

        Commands::Edit { id, name, address } => {
            vm.load().await.map_err(|e| notice(vm.failure(), e))?;
            let building = find(&vm, id)?;

            vm.start_edit(&building);
            if let Some(draft) = vm.pending_edit_mut() {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(address) = address {
                    draft.address = address;
                }
            }
            vm.save().await.map_err(|e| notice(vm.failure(), e))?;

            println!("Building updated.");
        }

        Commands::Delete { id, yes } => {
            vm.load().await.map_err(|e| notice(vm.failure(), e))?;
            let building = find(&vm, id)?;
            vm.request_delete(&building);

            if !yes
                && !ask_for_confirmation(
                    "Are you sure you want to delete this building? This action cannot be undone.",
                )?
            {
                vm.cancel_delete();
                println!("Aborted.");
                return Ok(());
            }

            match vm.confirm_delete().await.map_err(|e| notice(vm.failure(), e))? {
                Deletion::Removed => println!("Building deleted."),
                Deletion::Blocked if vm.occupied_warning() => {
                    vm.dismiss_warning();
                    bail!("This building cannot be deleted because it has assigned residents.");
                }
                Deletion::Blocked => bail!("Building {} was not deleted.", id),
            }
        }

        Commands::Residents { id } => {
            vm.load().await.map_err(|e| notice(vm.failure(), e))?;
            let building = find(&vm, id)?;
            vm.view_residents(id).await.map_err(|e| notice(vm.failure(), e))?;

            let Some(roster) = vm.roster() else {
                return Ok(());
            };

            if roster.residents.is_empty() {
                println!("{} has no residents.", building.name);
            } else {
                println!("===== Residents of {} =====", building.name);
                for resident in &roster.residents {
                    println!("{}: {} {}", resident.id, resident.name, resident.last_name);
                }
            }
        }

        Commands::Unassign {
            building,
            resident,
            yes,
        } => {
            vm.load().await.map_err(|e| notice(vm.failure(), e))?;
            vm.view_residents(building).await.map_err(|e| notice(vm.failure(), e))?;

            let target = vm
                .roster()
                .and_then(|roster| roster.residents.iter().find(|r| r.id == resident))
                .cloned();
            let Some(target) = target else {
                bail!(
                    "Resident {} is not assigned to building {}.",
                    resident,
                    building
                );
            };

            vm.request_unassign(&target);

            if !yes
                && !ask_for_confirmation(
                    "Are you sure you want to remove this resident from the building?",
                )?
            {
                vm.cancel_unassign();
                println!("Aborted.");
                return Ok(());
            }

            vm.confirm_unassign().await.map_err(|e| notice(vm.failure(), e))?;
            println!("Resident removed from building.");
        }
    }

    Ok(())
}
