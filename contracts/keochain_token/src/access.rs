use soroban_sdk::{log, Address, Env};
use crate::events;
use crate::storage;
use crate::types::KeoError;

// ============================================================================
// REGISTRO DE ACESSO - OWNER E WHITELIST
// ============================================================================

/// Valida se o caller é o owner
pub fn require_owner(env: &Env, caller: &Address) -> Result<(), KeoError> {
    let owner = storage::get_owner(env)?;
    if caller != &owner {
        return Err(KeoError::Unauthorized);
    }
    Ok(())
}

/// Valida se o caller está na whitelist (mint, burn, bulk_transfer)
pub fn require_whitelisted(env: &Env, caller: &Address) -> Result<(), KeoError> {
    if !storage::is_whitelisted(env, caller) {
        return Err(KeoError::Unauthorized);
    }
    Ok(())
}

/// Adiciona à whitelist. Idempotente: endereço já presente não gera evento.
pub fn add_to_whitelist(env: &Env, caller: &Address, addr: &Address) -> Result<(), KeoError> {
    require_owner(env, caller)?;

    if storage::is_whitelisted(env, addr) {
        return Ok(());
    }

    storage::set_whitelisted(env, addr, true);
    log!(env, "whitelist add", addr);
    events::emit_whitelisted(env, addr, true);

    Ok(())
}

/// Remove da whitelist. O papel de owner não é afetado: um owner fora da
/// whitelist continua administrando, mas passa a obedecer aos gates.
pub fn remove_from_whitelist(env: &Env, caller: &Address, addr: &Address) -> Result<(), KeoError> {
    require_owner(env, caller)?;

    if !storage::is_whitelisted(env, addr) {
        return Ok(());
    }

    storage::set_whitelisted(env, addr, false);
    log!(env, "whitelist remove", addr);
    events::emit_whitelisted(env, addr, false);

    Ok(())
}

/// Transfere o papel de owner. Não mexe na whitelist de nenhuma das partes.
pub fn transfer_ownership(env: &Env, caller: &Address, new_owner: &Address) -> Result<(), KeoError> {
    require_owner(env, caller)?;

    storage::set_owner(env, new_owner);
    log!(env, "ownership transferred", caller, new_owner);
    events::emit_ownership_transferred(env, caller, new_owner);

    Ok(())
}
