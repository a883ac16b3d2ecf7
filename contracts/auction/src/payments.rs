use soroban_sdk::{token, Address, Env};

use crate::types::Config;

/// Moves a bid from the bidder into the contract's escrow.
pub fn collect_bid(env: &Env, config: &Config, bidder: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(bidder, &env.current_contract_address(), &amount);
}

/// Pays an authorized refund or seller proceeds out of escrow.
pub fn pay_out(env: &Env, config: &Config, recipient: &Address, amount: i128) {
    let token_client = token::TokenClient::new(env, &config.token);
    token_client.transfer(&env.current_contract_address(), recipient, &amount);
}
