//! Primitive types for the bridge history service.

#![cfg_attr(not(feature = "std"), no_std)]

pub use batch::{BatchRecord, WithdrawRoot};
mod batch;
