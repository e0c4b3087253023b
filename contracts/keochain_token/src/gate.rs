use soroban_sdk::{log, Address, Env};
use crate::access;
use crate::events;
use crate::storage;
use crate::types::KeoError;

// ============================================================================
// GATES DE MOVIMENTAÇÃO - PAUSA E TRAVA DE TRANSFERÊNCIA
// ============================================================================
//
// Pausa: reversível, restringe movimentação a endereços da whitelist.
// Trava: começa ativa, só pode ser liberada uma vez, nunca volta.
//
//   Unpaused+Locked (inicial) -> só whitelist
//   Unpaused+Released         -> qualquer um
//   Paused+Locked             -> só whitelist
//   Paused+Released           -> só whitelist

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GateState {
    pub paused: bool,
    pub released: bool,
}

impl GateState {
    pub fn load(env: &Env) -> Self {
        GateState {
            paused: storage::is_paused(env),
            released: storage::is_released(env),
        }
    }

    /// Regra única de autorização de movimentação
    pub fn allows(&self, whitelisted: bool) -> bool {
        whitelisted || (!self.paused && self.released)
    }
}

pub fn can_move(env: &Env, caller: &Address) -> bool {
    GateState::load(env).allows(storage::is_whitelisted(env, caller))
}

/// Consultado por toda entrada que move valor (transfer, approve*, transfer_from)
pub fn require_can_move(env: &Env, caller: &Address) -> Result<(), KeoError> {
    if !can_move(env, caller) {
        return Err(KeoError::TransferNotAllowed);
    }
    Ok(())
}

// ============================================================================
// TRANSIÇÕES (APENAS OWNER)
// ============================================================================

pub fn pause(env: &Env, caller: &Address) -> Result<(), KeoError> {
    access::require_owner(env, caller)?;

    if storage::is_paused(env) {
        return Err(KeoError::InvalidState);
    }

    storage::set_paused(env, true);
    log!(env, "paused by", caller);
    events::emit_pause(env);

    Ok(())
}

pub fn unpause(env: &Env, caller: &Address) -> Result<(), KeoError> {
    access::require_owner(env, caller)?;

    if !storage::is_paused(env) {
        return Err(KeoError::InvalidState);
    }

    storage::set_paused(env, false);
    log!(env, "unpaused by", caller);
    events::emit_unpause(env);

    Ok(())
}

/// Libera a trava de transferência. Chamadas repetidas são no-op.
pub fn release(env: &Env, caller: &Address) -> Result<(), KeoError> {
    access::require_owner(env, caller)?;

    if storage::is_released(env) {
        return Ok(());
    }

    storage::set_released(env);
    log!(env, "transfers released by", caller);
    events::emit_release(env);

    Ok(())
}
