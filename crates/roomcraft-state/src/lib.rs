// SPDX-FileCopyrightText: 2026 Roomcraft Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-side application state for Roomcraft.
//!
//! This crate provides:
//! - **Flow state store**: per-wizard source/result/mask state, the active-flow
//!   pointer, and the shared room/style/color selections
//! - **Credit ledger**: the shared credit balance with a debit-if-sufficient operation

pub mod credits;
pub mod store;

pub use credits::CreditLedger;
pub use store::{RoomStore, Selections, SharedRoomStore};
