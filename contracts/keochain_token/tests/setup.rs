#![cfg(test)]
#![cfg(not(tarpaulin_include))]
#![allow(dead_code)]
use soroban_sdk::{Address, Env};
// IMPORTANTE: traits de testutils habilitam Address::generate() e set_timestamp()
use soroban_sdk::testutils::{Address as _, Ledger};

use keochain_token::storage::SECONDS_PER_DAY;
use keochain_token::token::{KeochainToken, KeochainTokenClient};

/// Timestamp do deploy em todos os testes
pub const START_TIME: u64 = 1_690_000_000;

pub struct TestEnv<'a> {
    pub env: Env,
    pub client: KeochainTokenClient<'a>,
    pub owner: Address,
    pub wallet: Address,
}

impl<'a> TestEnv<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.ledger().set_timestamp(START_TIME);

        let owner = Address::generate(&env);
        let wallet = Address::generate(&env);

        let contract_id = env.register_contract(None, KeochainToken);
        let client = KeochainTokenClient::new(&env, &contract_id);

        client.initialize(&owner, &wallet);

        Self { env, client, owner, wallet }
    }

    pub fn create_user(&self) -> Address {
        Address::generate(&self.env)
    }

    pub fn create_whitelisted_user(&self) -> Address {
        let user = self.create_user();
        self.client.add_to_whitelist(&self.owner, &user);
        user
    }

    /// Owner está na whitelist, então pode financiar mesmo com a trava ativa
    pub fn fund(&self, user: &Address, amount: i128) {
        self.client.transfer(&self.owner, user, &amount);
    }

    pub fn jump_time(&self, seconds: u64) {
        let now = self.env.ledger().timestamp();
        self.env.ledger().set_timestamp(now + seconds);
    }

    pub fn jump_days(&self, days: u64) {
        self.jump_time(days * SECONDS_PER_DAY);
    }

    /// Posiciona o relógio exatamente em `seconds` após o deploy
    pub fn set_elapsed(&self, seconds: u64) {
        self.env.ledger().set_timestamp(START_TIME + seconds);
    }
}
