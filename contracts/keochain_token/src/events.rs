use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ============================================================================
// EVENTOS DE SALDO
// Tópicos seguem a interface SEP-0041: (nome, contas...) e o amount como dado.
// ============================================================================

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, amount: i128) {
    let topics = (symbol_short!("transfer"), from.clone(), to.clone());
    env.events().publish(topics, amount);
}

/// Crédito de supply novo. No initialize vai para o owner.
pub fn emit_mint(env: &Env, to: &Address, amount: i128) {
    env.events().publish((symbol_short!("mint"), to.clone()), amount);
}

/// Mint do schedule diário: além do `mint` SEP-0041 para a carteira de
/// gamificação, publica `rewarded` com o valor da rodada e o total acumulado
pub fn emit_scheduled_mint(env: &Env, wallet: &Address, amount: i128, cumulative: i128) {
    emit_mint(env, wallet, amount);
    env.events()
        .publish((symbol_short!("rewarded"), wallet.clone()), (amount, cumulative));
}

pub fn emit_burn(env: &Env, from: &Address, amount: i128) {
    env.events().publish((symbol_short!("burn"), from.clone()), amount);
}

/// Dado é a allowance resultante, inclusive após increase / decrease
pub fn emit_approval(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let topics = (symbol_short!("approve"), owner.clone(), spender.clone());
    env.events().publish(topics, amount);
}

// ============================================================================
// EVENTOS ADMINISTRATIVOS
// ============================================================================

fn emit_flag(env: &Env, name: Symbol) {
    env.events().publish((name,), true);
}

pub fn emit_pause(env: &Env) {
    emit_flag(env, symbol_short!("pause"));
}

pub fn emit_unpause(env: &Env) {
    emit_flag(env, symbol_short!("unpause"));
}

/// Fim da trava de transferência (só é emitido uma vez)
pub fn emit_release(env: &Env) {
    emit_flag(env, symbol_short!("release"));
}

pub fn emit_whitelisted(env: &Env, addr: &Address, whitelisted: bool) {
    let name = if whitelisted {
        symbol_short!("wl_add")
    } else {
        symbol_short!("wl_rem")
    };
    env.events().publish((name, addr.clone()), whitelisted);
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events()
        .publish((symbol_short!("owner"), previous.clone()), new_owner.clone());
}
