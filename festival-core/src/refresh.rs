// Copyright (c) Zefchain Labs, Inc.
// SPDX-License-Identifier: Apache-2.0

//! Re-assembly of the greeting views when the viewed account changes.
//!
//! Every assembly batch is tagged with a generation. Starting a new batch makes the
//! results of all older batches stale, and stale results are discarded instead of
//! being applied.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc, Mutex,
};

use festival_base::identifiers::Address;
use tracing::{debug, instrument};

use crate::{
    assembler::{self, GreetingViews},
    context::GreetingsContext,
};

/// A counter of assembly batches.
#[derive(Clone, Debug, Default)]
pub struct BatchGeneration {
    current: Arc<AtomicU64>,
}

impl BatchGeneration {
    /// Starts a new batch, superseding all batches started before.
    pub fn start(&self) -> BatchTicket {
        let generation = self.current.fetch_add(1, Ordering::SeqCst) + 1;
        BatchTicket {
            generation,
            current: self.current.clone(),
        }
    }

    /// Marks every outstanding batch as stale.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }
}

/// The handle of one assembly batch.
#[derive(Clone, Debug)]
pub struct BatchTicket {
    generation: u64,
    current: Arc<AtomicU64>,
}

impl BatchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether no newer batch was started since this one.
    pub fn is_current(&self) -> bool {
        self.current.load(Ordering::SeqCst) == self.generation
    }
}

#[derive(Debug, Default)]
struct ViewState {
    account: Option<Address>,
    views: GreetingViews,
}

/// The greetings of the currently viewed account.
#[derive(Debug)]
pub struct GreetingsView {
    context: GreetingsContext,
    generation: BatchGeneration,
    state: Mutex<ViewState>,
}

impl GreetingsView {
    pub fn new(context: GreetingsContext) -> Self {
        Self {
            context,
            generation: BatchGeneration::default(),
            state: Mutex::default(),
        }
    }

    /// Assembles the greetings of `account`.
    ///
    /// Returns the new views, or `None` if another refresh started in the meantime, in
    /// which case nothing is stored.
    #[instrument(skip(self))]
    pub async fn refresh(&self, account: Address) -> Option<GreetingViews> {
        let ticket = self.generation.start();
        let views = assembler::assemble_for_account(&self.context, account).await;
        let mut state = self.lock_state();
        if !ticket.is_current() {
            debug!(
                "Discarding stale greetings of {account} from batch {}",
                ticket.generation()
            );
            return None;
        }
        state.account = Some(account);
        state.views = views.clone();
        Some(views)
    }

    /// Forgets the current account and discards any refresh in flight.
    pub fn clear(&self) {
        self.generation.invalidate();
        *self.lock_state() = ViewState::default();
    }

    /// The account whose greetings are currently stored.
    pub fn account(&self) -> Option<Address> {
        self.lock_state().account
    }

    /// The greetings stored by the latest applied refresh.
    pub fn views(&self) -> GreetingViews {
        self.lock_state().views.clone()
    }

    pub fn context(&self) -> &GreetingsContext {
        &self.context
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, ViewState> {
        // The state is only replaced wholesale, so a poisoned lock still holds a
        // consistent value.
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
#[path = "unit_tests/refresh_tests.rs"]
mod refresh_tests;
