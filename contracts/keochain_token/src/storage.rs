use soroban_sdk::{symbol_short, Address, Env, IntoVal, TryFromVal, Val};
use crate::types::{KeoError, TokenMetadata};

// ============================================================================
// CONSTANTES
// ============================================================================

/// Casas decimais do KEO
pub const DECIMALS: u32 = 18;

/// 1 KEO em unidades mínimas (10^18)
pub const UNIT: i128 = 1_000_000_000_000_000_000;

/// Supply inicial: 1 bilhão de KEO, creditado ao owner no initialize
pub const INITIAL_SUPPLY: i128 = 1_000_000_000 * UNIT;

/// Emissão de gamificação liberada por dia completo decorrido
pub const DAILY_ALLOCATION: i128 = 30_000 * UNIT;

/// Duração de um dia em segundos (timestamp do ledger)
pub const SECONDS_PER_DAY: u64 = 86_400;

/// TTL para storage crítico (1 ano em ledgers ~= 6.3M ledgers)
pub const CRITICAL_STORAGE_TTL: u32 = 6_307_200;

/// TTL threshold para bump (30 dias ~= 518K ledgers)
const CRITICAL_STORAGE_THRESHOLD: u32 = 518_400;

// ============================================================================
// FUNÇÕES DE BUMP (TTL)
// ============================================================================

/// Faz bump do TTL do storage de instância (owner, gates, supply, schedule)
pub fn bump_critical_storage(env: &Env) {
    env.storage().instance().extend_ttl(
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Faz bump do TTL de uma entrada persistente existente
fn bump_persistent<K>(env: &Env, key: &K)
where
    K: IntoVal<Env, Val>,
{
    env.storage().persistent().extend_ttl(
        key,
        CRITICAL_STORAGE_THRESHOLD,
        CRITICAL_STORAGE_TTL,
    );
}

/// Lê uma entrada persistente; se ela existir, leitura também estende o TTL
/// (whitelist do owner e saldos são lidos muito mais do que gravados)
fn read_persistent<K, V>(env: &Env, key: &K) -> Option<V>
where
    K: IntoVal<Env, Val>,
    V: TryFromVal<Env, Val>,
    V::Error: core::fmt::Debug,
{
    let value = env.storage().persistent().get(key);
    if value.is_some() {
        bump_persistent(env, key);
    }
    value
}

// ============================================================================
// INICIALIZAÇÃO
// ============================================================================

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&symbol_short!("owner"))
}

// ============================================================================
// OWNER
// ============================================================================

pub fn get_owner(env: &Env) -> Result<Address, KeoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("owner"))
        .ok_or(KeoError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&symbol_short!("owner"), owner);
}

// ============================================================================
// GATES (PAUSA E TRAVA DE TRANSFERÊNCIA)
// ============================================================================

pub fn is_paused(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("paused"))
        .unwrap_or(false)
}

pub fn set_paused(env: &Env, paused: bool) {
    env.storage().instance().set(&symbol_short!("paused"), &paused);
}

/// `false` enquanto a trava de transferência estiver ativa
pub fn is_released(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("released"))
        .unwrap_or(false)
}

pub fn set_released(env: &Env) {
    env.storage().instance().set(&symbol_short!("released"), &true);
}

// ============================================================================
// WHITELIST
// ============================================================================

pub fn is_whitelisted(env: &Env, addr: &Address) -> bool {
    let key = (symbol_short!("white"), addr);
    read_persistent(env, &key).unwrap_or(false)
}

pub fn set_whitelisted(env: &Env, addr: &Address, whitelisted: bool) {
    let key = (symbol_short!("white"), addr);
    if whitelisted {
        env.storage().persistent().set(&key, &true);
        bump_persistent(env, &key);
    } else {
        env.storage().persistent().remove(&key);
    }
}

// ============================================================================
// TOTAL SUPPLY
// ============================================================================

pub fn get_total_supply(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("supply"))
        .unwrap_or(0)
}

pub fn set_total_supply(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("supply"), &amount);
}

// ============================================================================
// BALANCE
// ============================================================================

pub fn get_balance(env: &Env, addr: &Address) -> i128 {
    let key = (symbol_short!("balance"), addr);
    read_persistent(env, &key).unwrap_or(0)
}

pub fn set_balance(env: &Env, addr: &Address, amount: i128) {
    let key = (symbol_short!("balance"), addr);
    env.storage().persistent().set(&key, &amount);
    bump_persistent(env, &key);
}

// ============================================================================
// ALLOWANCE
// ============================================================================

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = (symbol_short!("allow"), owner, spender);
    read_persistent(env, &key).unwrap_or(0)
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = (symbol_short!("allow"), owner, spender);
    if amount == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &amount);
        bump_persistent(env, &key);
    }
}

// ============================================================================
// METADATA
// ============================================================================

pub fn get_metadata(env: &Env) -> Result<TokenMetadata, KeoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("metadata"))
        .ok_or(KeoError::NotInitialized)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&symbol_short!("metadata"), metadata);
}

// ============================================================================
// SCHEDULE DE EMISSÃO
// ============================================================================

pub fn get_creation_time(env: &Env) -> Result<u64, KeoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("created"))
        .ok_or(KeoError::NotInitialized)
}

pub fn set_creation_time(env: &Env, timestamp: u64) {
    env.storage().instance().set(&symbol_short!("created"), &timestamp);
}

pub fn get_gamification_wallet(env: &Env) -> Result<Address, KeoError> {
    env.storage()
        .instance()
        .get(&symbol_short!("gm_wallet"))
        .ok_or(KeoError::NotInitialized)
}

pub fn set_gamification_wallet(env: &Env, wallet: &Address) {
    env.storage().instance().set(&symbol_short!("gm_wallet"), wallet);
}

/// Total já emitido pelo schedule (não inclui o INITIAL_SUPPLY)
pub fn get_cumulative_minted(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&symbol_short!("rewarded"))
        .unwrap_or(0)
}

pub fn set_cumulative_minted(env: &Env, amount: i128) {
    env.storage().instance().set(&symbol_short!("rewarded"), &amount);
}

// ============================================================================
// GUARD DE REENTRÂNCIA
// ============================================================================

pub fn is_reentrancy_locked(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&symbol_short!("reentry"))
        .unwrap_or(false)
}

pub fn set_reentrancy_guard(env: &Env, locked: bool) {
    env.storage().instance().set(&symbol_short!("reentry"), &locked);
}
