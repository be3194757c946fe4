/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::notice;
use crate::input::*;
use anyhow::{Context, Result, bail};
use clap::Subcommand;
use connector::{BuildingId, Gateway, ResidentId, UNASSIGNED};
use console::ResidentViewModel;
use std::sync::Arc;

#[derive(Subcommand, Debug)]
pub enum Commands {
    List,
    Create {
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        last_name: Option<String>,
        /// Building id, 0 for none.
        #[arg(short, long)]
        apartment: Option<BuildingId>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        mobile_number: Option<String>,
    },
    Edit {
        id: ResidentId,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(short, long)]
        last_name: Option<String>,
        #[arg(short, long)]
        apartment: Option<BuildingId>,
        #[arg(short, long)]
        email: Option<String>,
        #[arg(short, long)]
        mobile_number: Option<String>,
    },
    Delete {
        id: ResidentId,
        #[arg(short, long)]
        yes: bool,
    },
}

fn ask_for_apartment(vm: &ResidentViewModel) -> Result<BuildingId> {
    println!("Apartments:");
    println!("{:<6} none", UNASSIGNED);
    for building in vm.buildings() {
        println!("{:<6} {}", building.id, building.name);
    }

    let input = ask_for_input("Apartment")?;
    input
        .parse::<BuildingId>()
        .with_context(|| format!("Apartment must be a building id, got \"{}\".", input))
}

pub async fn handle(cmd: Commands, gateway: Arc<dyn Gateway>) -> Result<()> {
    let mut vm = ResidentViewModel::new(gateway);
    vm.load().await.map_err(|e| notice(vm.failure(), e))?;

    match cmd {
        Commands::List => {
            if vm.residents().is_empty() {
                println!("No residents found.");
                return Ok(());
            }

            println!(
                "{:<6} {:<16} {:<16} {:<20} {:<28} MOBILE NUMBER",
                "ID", "NAME", "LAST NAME", "APARTMENT", "EMAIL"
            );
            for resident in vm.residents() {
                println!(
                    "{:<6} {:<16} {:<16} {:<20} {:<28} {}",
                    resident.id,
                    resident.name,
                    resident.last_name,
                    vm.resolve_building_name(resident),
                    resident.email,
                    resident.mobile_number
                );
            }
        }

        Commands::Create {
            name,
            last_name,
            apartment,
            email,
            mobile_number,
        } => {
            let name = value_or_ask(name, "Resident Name")?;
            let last_name = value_or_ask(last_name, "Last Name")?;
            let apartment = match apartment {
                Some(apartment) => apartment,
                None => ask_for_apartment(&vm)?,
            };
            let email = value_or_ask(email, "Email")?;
            let mobile_number = value_or_ask(mobile_number, "Mobile Number")?;

            vm.start_create();
            if let Some(draft) = vm.pending_edit_mut() {
                draft.name = name;
                draft.last_name = last_name;
                draft.apartment_id = Some(apartment);
                draft.email = email;
                draft.mobile_number = mobile_number;
            }
            vm.save().await.map_err(|e| notice(vm.failure(), e))?;

            println!("Resident created.");
        }

        Commands::Edit {
            id,
            name,
            last_name,
            apartment,
            email,
            mobile_number,
        } => {
            let Some(resident) = vm.residents().iter().find(|r| r.id == id).cloned() else {
                bail!("Resident {} not found.", id);
            };

            vm.start_edit(&resident);
            if let Some(draft) = vm.pending_edit_mut() {
                if let Some(name) = name {
                    draft.name = name;
                }
                if let Some(last_name) = last_name {
                    draft.last_name = last_name;
                }
                if let Some(apartment) = apartment {
                    draft.apartment_id = Some(apartment);
                }
                if let Some(email) = email {
                    draft.email = email;
                }
                if let Some(mobile_number) = mobile_number {
                    draft.mobile_number = mobile_number;
                }
            }
            vm.save().await.map_err(|e| notice(vm.failure(), e))?;

            println!("Resident updated.");
        }

        Commands::Delete { id, yes } => {
            if !vm.residents().iter().any(|r| r.id == id) {
                bail!("Resident {} not found.", id);
            }

            vm.request_delete(id);

            if !yes && !ask_for_confirmation("Are you sure you want to delete this resident?")? {
                vm.cancel_delete();
                println!("Aborted.");
                return Ok(());
            }

            vm.confirm_delete().await.map_err(|e| notice(vm.failure(), e))?;
            println!("Resident deleted.");
        }
    }

    Ok(())
}
