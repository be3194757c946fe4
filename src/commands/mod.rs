/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod base;
pub mod building;
pub mod resident;

use console::ConsoleError;

/// Prefers the view-model's failure notice over the bare error it wraps.
fn notice(failure: Option<&str>, err: ConsoleError) -> anyhow::Error {
    match failure {
        Some(failure) => anyhow::Error::msg(failure.to_string()),
        None => err.into(),
    }
}
