pub mod withdraw_test;

use crate::{AuctionHouse, AuctionHouseClient};
use soroban_sdk::{
    testutils::{Address as _, Events, Ledger},
    token, vec, Address, Env, Event, String,
};

pub const STARTING_BALANCE: i128 = 10_000_000;

/// Registers the contract with a fresh asset, mints to two bidders and the
/// seller, and initializes with seller bidding forbidden.
///
/// Returns `(env, client, seller, alice, bob, token)`.
pub fn setup_test() -> (
    Env,
    AuctionHouseClient<'static>,
    Address,
    Address,
    Address,
    token::TokenClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(AuctionHouse, ());
    let client = AuctionHouseClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let seller = Address::generate(&env);
    let alice = Address::generate(&env);
    let bob = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin);
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    for holder in [&seller, &alice, &bob] {
        token_admin_client.mint(holder, &STARTING_BALANCE);
    }

    client.initialize(&admin, &token_address, &false);

    (env, client, seller, alice, bob, token_client)
}

/// Creates a titled auction lasting `duration` seconds.
pub fn create_auction(
    env: &Env,
    client: &AuctionHouseClient,
    seller: &Address,
    duration: u64,
    reserve: i128,
) -> u64 {
    client.create_auction(
        seller,
        &duration,
        &reserve,
        &String::from_str(env, "MacBook Pro 13"),
        &String::from_str(env, "ipfs://bafy-macbook"),
    )
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().with_mut(|li| {
        li.timestamp += seconds;
    });
}

/// Asserts the most recent event published by `contract` matches `expected`.
pub fn assert_last_event(env: &Env, contract: &Address, expected: impl Event) {
    let published = env
        .events()
        .all()
        .iter()
        .filter(|(id, _, _)| id == contract)
        .last()
        .expect("contract published no event");
    assert_eq!(
        vec![env, published],
        vec![env, (contract.clone(), expected.topics(env), expected.data(env))]
    );
}
