// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credit ledger with a conditional debit.
//!
//! The ledger holds the single shared credit balance. The only mutation is
//! [`CreditLedger::deduct_credits`], which debits only when the balance
//! covers the amount, so the balance can never go negative. Check and write
//! happen under one `&mut self` borrow; callers sharing the ledger across
//! tasks wrap its owner in a mutex.

use tracing::{debug, warn};

/// The shared credit balance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLedger {
    balance: u32,
}

impl CreditLedger {
    /// Create a ledger seeded with `initial` credits.
    pub fn new(initial: u32) -> Self {
        Self { balance: initial }
    }

    /// Current balance.
    pub fn balance(&self) -> u32 {
        self.balance
    }

    /// Whether `amount` could be debited right now.
    pub fn can_afford(&self, amount: u32) -> bool {
        self.balance >= amount
    }

    /// Debit `amount` if the balance covers it.
    ///
    /// Returns `true` and decrements the balance on success; returns `false`
    /// and leaves the balance unchanged otherwise.
    pub fn deduct_credits(&mut self, amount: u32) -> bool {
        match self.balance.checked_sub(amount) {
            Some(remaining) => {
                self.balance = remaining;
                debug!(amount, remaining, "credits deducted");
                true
            }
            None => {
                warn!(
                    amount,
                    balance = self.balance,
                    "insufficient credits, debit refused"
                );
                false
            }
        }
    }
}
