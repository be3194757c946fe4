/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use std::future::Future;

/// Yes/no guard in front of a destructive action.
///
/// `open` remembers the target and makes the prompt visible, `confirm` hands
/// the target to the action and closes, `cancel` closes without acting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate<T> {
    pending: Option<T>,
}

impl<T> Default for ConfirmationGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> ConfirmationGate<T> {
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn open(&mut self, target: T) {
        self.pending = Some(target);
    }

    pub const fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub const fn target(&self) -> Option<&T> {
        self.pending.as_ref()
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Returns `None` without running `action` when the gate is closed.
    pub async fn confirm<F, Fut, R>(&mut self, action: F) -> Option<R>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let target = self.pending.take()?;
        Some(action(target).await)
    }
}
