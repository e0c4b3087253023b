use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use crate::access;
use crate::events;
use crate::gate;
use crate::schedule;
use crate::storage;
use crate::types::{KeoError, TokenMetadata};
use crate::validation;

//
// CONTRATO PRINCIPAL - KEOCHAIN TOKEN
//

#[contract]
pub struct KeochainToken;

/// Executa `f` com o guard de reentrância travado, liberando-o mesmo quando
/// `f` retorna erro.
fn guarded<T>(env: &Env, f: impl FnOnce() -> Result<T, KeoError>) -> Result<T, KeoError> {
    if storage::is_reentrancy_locked(env) {
        return Err(KeoError::Reentrant);
    }
    storage::set_reentrancy_guard(env, true);

    let result = f();

    storage::set_reentrancy_guard(env, false);
    result
}

/// Debita `from` e credita `to`. O saldo de `to` é lido depois da escrita em
/// `from`, então from == to não cria tokens.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), KeoError> {
    let new_from_balance = storage::get_balance(env, from)
        .checked_sub(amount)
        .ok_or(KeoError::InsufficientBalance)?;
    storage::set_balance(env, from, new_from_balance);

    let new_to_balance = storage::get_balance(env, to)
        .checked_add(amount)
        .ok_or(KeoError::Overflow)?;
    storage::set_balance(env, to, new_to_balance);

    Ok(())
}

#[contractimpl]
impl KeochainToken {

    //
    // INICIALIZAÇÃO
    //

    /// Inicializa o token. O `owner` recebe o INITIAL_SUPPLY, entra na
    /// whitelist e o timestamp atual vira a base do schedule de emissão.
    ///
    /// # Erros
    /// - `AlreadyInitialized`: se o contrato já foi inicializado
    pub fn initialize(
        env: Env,
        owner: Address,
        gamification_wallet: Address,
    ) -> Result<(), KeoError> {
        if storage::is_initialized(&env) {
            return Err(KeoError::AlreadyInitialized);
        }
        owner.require_auth();

        storage::set_owner(&env, &owner);
        storage::set_whitelisted(&env, &owner, true);
        storage::set_gamification_wallet(&env, &gamification_wallet);
        storage::set_creation_time(&env, env.ledger().timestamp());
        storage::set_cumulative_minted(&env, 0);

        // Gates: despausado e travado
        storage::set_paused(&env, false);

        storage::set_balance(&env, &owner, storage::INITIAL_SUPPLY);
        storage::set_total_supply(&env, storage::INITIAL_SUPPLY);

        storage::set_metadata(&env, &TokenMetadata {
            name: String::from_str(&env, "Keochain"),
            symbol: String::from_str(&env, "KEO"),
            decimals: storage::DECIMALS,
        });
        storage::bump_critical_storage(&env);

        events::emit_mint(&env, &owner, storage::INITIAL_SUPPLY);

        Ok(())
    }

    //
    // LEITURA
    // Valores gravados pelo initialize (metadata, owner, supply, schedule)
    // respondem `NotInitialized` antes dele. Consultas por conta e flags dos
    // gates respondem o default (0 / false).
    //

    pub fn name(env: Env) -> Result<String, KeoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.name)
    }

    pub fn symbol(env: Env) -> Result<String, KeoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.symbol)
    }

    pub fn decimals(env: Env) -> Result<u32, KeoError> {
        storage::bump_critical_storage(&env);
        Ok(storage::get_metadata(&env)?.decimals)
    }

    pub fn balance(env: Env, id: Address) -> i128 {
        storage::get_balance(&env, &id)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::get_allowance(&env, &owner, &spender)
    }

    pub fn total_supply(env: Env) -> Result<i128, KeoError> {
        validation::require_initialized(&env)?;
        storage::bump_critical_storage(&env);
        Ok(storage::get_total_supply(&env))
    }

    pub fn initial_supply(_env: Env) -> i128 {
        storage::INITIAL_SUPPLY
    }

    pub fn daily_allocation(_env: Env) -> i128 {
        storage::DAILY_ALLOCATION
    }

    pub fn creation_time(env: Env) -> Result<u64, KeoError> {
        storage::get_creation_time(&env)
    }

    pub fn gamification_wallet(env: Env) -> Result<Address, KeoError> {
        storage::get_gamification_wallet(&env)
    }

    /// Valor que um `mint` creditaria agora
    pub fn preview_mintable(env: Env) -> Result<i128, KeoError> {
        storage::bump_critical_storage(&env);
        schedule::preview_mintable(&env)
    }

    /// Total já emitido pelo schedule desde a criação
    pub fn cumulative_minted(env: Env) -> Result<i128, KeoError> {
        validation::require_initialized(&env)?;
        Ok(storage::get_cumulative_minted(&env))
    }

    pub fn is_paused(env: Env) -> bool {
        storage::is_paused(&env)
    }

    pub fn is_released(env: Env) -> bool {
        storage::is_released(&env)
    }

    pub fn is_whitelisted(env: Env, id: Address) -> bool {
        storage::is_whitelisted(&env, &id)
    }

    pub fn owner(env: Env) -> Result<Address, KeoError> {
        storage::bump_critical_storage(&env);
        storage::get_owner(&env)
    }

    //
    // TRANSFERÊNCIAS E ALLOWANCES
    // Todas passam pelo gate avaliado contra o dono dos fundos.
    //

    /// Transfere `amount` de `from` para `to`.
    ///
    /// # Erros
    /// - `TransferNotAllowed`: pausado ou travado para `from`
    /// - `InsufficientBalance`
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), KeoError> {
        from.require_auth();

        guarded(&env, || {
            storage::bump_critical_storage(&env);

            validation::require_non_negative_amount(amount)?;
            gate::require_can_move(&env, &from)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            move_balance(&env, &from, &to, amount)?;

            events::emit_transfer(&env, &from, &to, amount);
            Ok(())
        })
    }

    /// Define a allowance de `spender` sobre os fundos de `owner`.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), KeoError> {
        owner.require_auth();

        guarded(&env, || {
            validation::require_non_negative_amount(amount)?;
            gate::require_can_move(&env, &owner)?;

            storage::set_allowance(&env, &owner, &spender, amount);

            events::emit_approval(&env, &owner, &spender, amount);
            Ok(())
        })
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), KeoError> {
        owner.require_auth();

        guarded(&env, || {
            validation::require_non_negative_amount(amount)?;
            gate::require_can_move(&env, &owner)?;

            let new_allowance = storage::get_allowance(&env, &owner, &spender)
                .checked_add(amount)
                .ok_or(KeoError::Overflow)?;
            storage::set_allowance(&env, &owner, &spender, new_allowance);

            events::emit_approval(&env, &owner, &spender, new_allowance);
            Ok(())
        })
    }

    /// Reduz a allowance; abaixo de zero fica em zero.
    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        amount: i128,
    ) -> Result<(), KeoError> {
        owner.require_auth();

        guarded(&env, || {
            validation::require_non_negative_amount(amount)?;
            gate::require_can_move(&env, &owner)?;

            let new_allowance = storage::get_allowance(&env, &owner, &spender)
                .saturating_sub(amount)
                .max(0);
            storage::set_allowance(&env, &owner, &spender, new_allowance);

            events::emit_approval(&env, &owner, &spender, new_allowance);
            Ok(())
        })
    }

    /// Move fundos de `from` usando a allowance concedida a `spender`.
    /// O gate é avaliado contra `from`, não contra `spender`.
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), KeoError> {
        spender.require_auth();

        guarded(&env, || {
            storage::bump_critical_storage(&env);

            validation::require_non_negative_amount(amount)?;
            gate::require_can_move(&env, &from)?;
            validation::require_sufficient_allowance(&env, &from, &spender, amount)?;
            validation::require_sufficient_balance(&env, &from, amount)?;

            let allowance = storage::get_allowance(&env, &from, &spender);
            storage::set_allowance(&env, &from, &spender, allowance - amount);
            move_balance(&env, &from, &to, amount)?;

            events::emit_transfer(&env, &from, &to, amount);
            Ok(())
        })
    }

    //
    // EMISSÃO, BURN E BULK (APENAS WHITELIST)
    //

    /// Emite para a carteira de gamificação tudo o que o schedule liberou
    /// desde o último mint. Devolve o valor emitido; zero não é erro.
    pub fn mint(env: Env, caller: Address) -> Result<i128, KeoError> {
        caller.require_auth();

        guarded(&env, || {
            storage::bump_critical_storage(&env);
            access::require_whitelisted(&env, &caller)?;

            let wallet = storage::get_gamification_wallet(&env)?;
            let amount = schedule::preview_mintable(&env)?;
            if amount == 0 {
                return Ok(0);
            }

            let new_balance = storage::get_balance(&env, &wallet)
                .checked_add(amount)
                .ok_or(KeoError::Overflow)?;
            let new_supply = storage::get_total_supply(&env)
                .checked_add(amount)
                .ok_or(KeoError::Overflow)?;

            let settled = schedule::settle(&env)?;
            storage::set_balance(&env, &wallet, new_balance);
            storage::set_total_supply(&env, new_supply);

            let cumulative = storage::get_cumulative_minted(&env);
            log!(&env, "scheduled mint", settled, cumulative);
            events::emit_scheduled_mint(&env, &wallet, settled, cumulative);
            Ok(settled)
        })
    }

    /// Queima tokens do próprio caller, reduzindo o supply.
    pub fn burn(env: Env, caller: Address, amount: i128) -> Result<(), KeoError> {
        caller.require_auth();

        guarded(&env, || {
            storage::bump_critical_storage(&env);

            access::require_whitelisted(&env, &caller)?;
            validation::require_non_negative_amount(amount)?;
            validation::require_sufficient_balance(&env, &caller, amount)?;

            let new_balance = storage::get_balance(&env, &caller)
                .checked_sub(amount)
                .ok_or(KeoError::InsufficientBalance)?;
            let new_supply = storage::get_total_supply(&env)
                .checked_sub(amount)
                .ok_or(KeoError::Overflow)?;

            storage::set_balance(&env, &caller, new_balance);
            storage::set_total_supply(&env, new_supply);

            events::emit_burn(&env, &caller, amount);
            Ok(())
        })
    }

    /// Transfere `amounts[i]` para `destinations[i]`. O lote inteiro é
    /// validado (tamanhos e soma contra o saldo) antes de qualquer escrita.
    pub fn bulk_transfer(
        env: Env,
        caller: Address,
        destinations: Vec<Address>,
        amounts: Vec<i128>,
    ) -> Result<(), KeoError> {
        caller.require_auth();

        guarded(&env, || {
            storage::bump_critical_storage(&env);

            // === CHECKS ===
            access::require_whitelisted(&env, &caller)?;
            let total = validation::require_valid_batch(&destinations, &amounts)?;
            validation::require_sufficient_balance(&env, &caller, total)?;

            // === EFFECTS ===
            for (to, amount) in destinations.iter().zip(amounts.iter()) {
                move_balance(&env, &caller, &to, amount)?;
                events::emit_transfer(&env, &caller, &to, amount);
            }

            Ok(())
        })
    }

    //
    // FUNÇÕES ADMINISTRATIVAS (APENAS OWNER)
    //

    pub fn add_to_whitelist(env: Env, caller: Address, id: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || access::add_to_whitelist(&env, &caller, &id))
    }

    pub fn remove_from_whitelist(env: Env, caller: Address, id: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || access::remove_from_whitelist(&env, &caller, &id))
    }

    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || access::transfer_ownership(&env, &caller, &new_owner))
    }

    /// Pausa: só a whitelist movimenta. Pausar já pausado é `InvalidState`.
    pub fn pause(env: Env, caller: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || gate::pause(&env, &caller))
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || gate::unpause(&env, &caller))
    }

    /// Libera a trava de transferência para sempre.
    pub fn release(env: Env, caller: Address) -> Result<(), KeoError> {
        caller.require_auth();
        guarded(&env, || gate::release(&env, &caller))
    }
}

//
// TESTES UNITÁRIOS
//
