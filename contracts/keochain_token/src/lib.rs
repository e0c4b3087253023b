#![no_std]

pub mod access;
pub mod events;
pub mod gate;
pub mod schedule;
pub mod storage;
pub mod token;
pub mod types;
pub mod validation;

// ============================================================================
// CONTRATO PRINCIPAL
// ============================================================================

pub use token::{KeochainToken, KeochainTokenClient};
pub use types::*;
