use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    Auction, Bid, Config, StorageKey, INSTANCE_TTL_AMOUNT, INSTANCE_TTL_THRESHOLD,
    PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

fn bump(env: &Env, key: &StorageKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&StorageKey::Config)
}

pub fn get_config(env: &Env) -> Option<Config> {
    env.storage().instance().get(&StorageKey::Config)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&StorageKey::Config, config);
}

// ============================================================================
// AUCTION STORAGE
// ============================================================================

pub fn get_auction_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&StorageKey::AuctionCounter)
        .unwrap_or(0)
}

/// Allocate the next auction id.
pub fn increment_auction_counter(env: &Env) -> u64 {
    let counter = get_auction_counter(env) + 1;
    env.storage()
        .instance()
        .set(&StorageKey::AuctionCounter, &counter);
    counter
}

pub fn get_auction(env: &Env, auction_id: u64) -> Option<Auction> {
    let key = StorageKey::Auction(auction_id);
    let auction = env.storage().persistent().get::<_, Auction>(&key);
    if auction.is_some() {
        bump(env, &key);
    }
    auction
}

pub fn save_auction(env: &Env, auction: &Auction) {
    let key = StorageKey::Auction(auction.id);
    env.storage().persistent().set(&key, auction);
    bump(env, &key);
}

// ============================================================================
// BID HISTORY STORAGE
// ============================================================================

pub fn get_bid_history(env: &Env, auction_id: u64) -> Vec<Bid> {
    let key = StorageKey::BidHistory(auction_id);
    let history = env
        .storage()
        .persistent()
        .get::<_, Vec<Bid>>(&key)
        .unwrap_or(Vec::new(env));
    if !history.is_empty() {
        bump(env, &key);
    }
    history
}

pub fn add_bid_to_history(env: &Env, auction_id: u64, bid: Bid) {
    let key = StorageKey::BidHistory(auction_id);
    let mut history = get_bid_history(env, auction_id);
    history.push_back(bid);
    env.storage().persistent().set(&key, &history);
    bump(env, &key);
}

// ============================================================================
// REFUND LEDGER STORAGE
// ============================================================================

pub fn get_refund(env: &Env, auction_id: u64, bidder: &Address) -> i128 {
    let key = StorageKey::Refund(auction_id, bidder.clone());
    let amount = env.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if amount > 0 {
        bump(env, &key);
    }
    amount
}

pub fn set_refund(env: &Env, auction_id: u64, bidder: &Address, amount: i128) {
    let key = StorageKey::Refund(auction_id, bidder.clone());
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}

pub fn remove_refund(env: &Env, auction_id: u64, bidder: &Address) {
    let key = StorageKey::Refund(auction_id, bidder.clone());
    env.storage().persistent().remove(&key);
}

// ============================================================================
// SELLER PROCEEDS STORAGE
// ============================================================================

pub fn get_proceeds(env: &Env, auction_id: u64) -> i128 {
    let key = StorageKey::Proceeds(auction_id);
    let amount = env.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if amount > 0 {
        bump(env, &key);
    }
    amount
}

pub fn set_proceeds(env: &Env, auction_id: u64, amount: i128) {
    let key = StorageKey::Proceeds(auction_id);
    env.storage().persistent().set(&key, &amount);
    bump(env, &key);
}

pub fn remove_proceeds(env: &Env, auction_id: u64) {
    env.storage()
        .persistent()
        .remove(&StorageKey::Proceeds(auction_id));
}
