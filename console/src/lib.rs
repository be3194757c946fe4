/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! View state of the Apartments and Residents views and its reconciliation
//! with the backend.
//!
//! Each view-model owns its own copy of the buildings list; the copies are
//! never synchronized with each other and only converge on the next `load`.

pub mod buildings;
pub mod gate;
pub mod removal;
pub mod residents;


pub use buildings::{BuildingViewModel, Deletion, Roster, SortOrder};
pub use gate::ConfirmationGate;
pub use removal::ResidentRemoval;
pub use residents::{ResidentViewModel, UNKNOWN_BUILDING};

use connector::GatewayError;

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    #[error("no record is being edited")]
    NoPendingEdit,
    #[error("nothing is awaiting confirmation")]
    NothingPending,
}

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Keeps a notice of a failed interaction for the front end, which is the one
/// that surfaces it to the user.
fn report(failure: &mut Option<String>, context: &str, err: GatewayError) -> ConsoleError {
    tracing::debug!("{}: {}", context, err);
    *failure = Some(format!("{}: {}", context, err));
    ConsoleError::Gateway(err)
}
