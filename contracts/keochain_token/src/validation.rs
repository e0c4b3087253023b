use soroban_sdk::{Address, Env, Vec};
use crate::storage;
use crate::types::KeoError;

// ============================================================================
// VALIDAÇÕES (CHECKS antes de qualquer EFFECT)
// ============================================================================

/// Valida se o contrato já passou pelo initialize
pub fn require_initialized(env: &Env) -> Result<(), KeoError> {
    if !storage::is_initialized(env) {
        return Err(KeoError::NotInitialized);
    }
    Ok(())
}

/// Valida se o amount não é negativo. Zero é aceito (transferência vazia).
pub fn require_non_negative_amount(amount: i128) -> Result<(), KeoError> {
    if amount < 0 {
        return Err(KeoError::InvalidArgument);
    }
    Ok(())
}

/// Valida se o balance é suficiente
pub fn require_sufficient_balance(env: &Env, addr: &Address, required: i128) -> Result<(), KeoError> {
    if storage::get_balance(env, addr) < required {
        return Err(KeoError::InsufficientBalance);
    }
    Ok(())
}

/// Valida se a allowance cobre o amount
pub fn require_sufficient_allowance(
    env: &Env,
    owner: &Address,
    spender: &Address,
    required: i128,
) -> Result<(), KeoError> {
    if storage::get_allowance(env, owner, spender) < required {
        return Err(KeoError::InsufficientAllowance);
    }
    Ok(())
}

/// Valida um lote de bulk_transfer e devolve a soma dos amounts
pub fn require_valid_batch(destinations: &Vec<Address>, amounts: &Vec<i128>) -> Result<i128, KeoError> {
    if destinations.len() != amounts.len() {
        return Err(KeoError::InvalidArgument);
    }

    let mut total: i128 = 0;
    for amount in amounts.iter() {
        require_non_negative_amount(amount)?;
        total = total.checked_add(amount).ok_or(KeoError::Overflow)?;
    }

    Ok(total)
}
