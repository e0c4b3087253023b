use soroban_sdk::Env;
use crate::storage;
use crate::types::KeoError;

// ============================================================================
// SCHEDULE DE EMISSÃO DIÁRIA (GAMIFICAÇÃO)
// ============================================================================
//
// Emissão por pull: nada roda em background. O valor liberado é função pura
// de (agora, criação, já emitido) e só é avaliado dentro da chamada de mint.

/// Dias completos decorridos desde a criação. Frações de dia não contam;
/// relógio anterior à criação conta como zero.
pub fn elapsed_days(now: u64, created: u64) -> u64 {
    now.saturating_sub(created) / storage::SECONDS_PER_DAY
}

/// Total que o schedule permite ter emitido até `now`
pub fn eligible_total(now: u64, created: u64) -> i128 {
    // u64::MAX / 86400 * DAILY_ALLOCATION ainda cabe em i128
    (elapsed_days(now, created) as i128).saturating_mul(storage::DAILY_ALLOCATION)
}

/// Quanto ainda pode ser emitido, nunca negativo
pub fn claimable_amount(now: u64, created: u64, cumulative_minted: i128) -> i128 {
    eligible_total(now, created)
        .saturating_sub(cumulative_minted)
        .max(0)
}

/// Leitura do valor emitível agora, sem efeitos
pub fn preview_mintable(env: &Env) -> Result<i128, KeoError> {
    let created = storage::get_creation_time(env)?;
    let minted = storage::get_cumulative_minted(env);
    Ok(claimable_amount(env.ledger().timestamp(), created, minted))
}

/// Consome o valor emitível: soma ao acumulado e devolve o delta a creditar.
/// Delta zero não grava nada.
pub fn settle(env: &Env) -> Result<i128, KeoError> {
    let claimable = preview_mintable(env)?;
    if claimable == 0 {
        return Ok(0);
    }

    let minted = storage::get_cumulative_minted(env)
        .checked_add(claimable)
        .ok_or(KeoError::Overflow)?;
    storage::set_cumulative_minted(env, minted);

    Ok(claimable)
}
