#![no_std]

mod admin;
mod engine;
mod errors;
mod events;
mod payments;
mod storage;
mod types;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};

pub use crate::errors::Error;
pub use crate::types::{Auction, AuctionOutcome, AuctionStatus, Bid, Config};

use crate::events::*;

/// English auction house.
///
/// Sellers list items with a deadline and a reserve price, bidders escrow
/// strictly increasing bids in the configured token, and once the deadline
/// passes anyone may settle. Outbid bidders and paid sellers pull their funds
/// with `withdraw`.
#[contract]
pub struct AuctionHouse;

#[contractimpl]
impl AuctionHouse {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the auction house.
    ///
    /// # Arguments
    /// * `admin` - Address allowed to change the seller bidding policy
    /// * `token` - Asset contract bids are paid in
    /// * `allow_seller_bids` - Whether sellers may bid on their own auctions
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        allow_seller_bids: bool,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        let config = Config {
            admin: admin.clone(),
            token: token.clone(),
            allow_seller_bids,
        };
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        InitializedEventData {
            admin,
            token,
            allow_seller_bids,
        }
        .publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        admin::load_config(&env)
    }

    /// Allow or forbid sellers bidding on their own auctions (admin only)
    pub fn set_seller_bidding(env: Env, admin: Address, allowed: bool) -> Result<(), Error> {
        let mut config = admin::require_admin(&env, &admin)?;

        config.allow_seller_bids = allowed;
        storage::set_config(&env, &config);
        storage::extend_instance_ttl(&env);

        log!(&env, "seller bidding policy", allowed);
        SellerBiddingSetEventData { admin, allowed }.publish(&env);

        Ok(())
    }

    // ========================================================================
    // AUCTION LIFECYCLE
    // ========================================================================

    /// List a new auction ending `duration_seconds` from now.
    ///
    /// # Errors
    /// * `Error::InvalidInput` - Zero duration, empty title, negative reserve,
    ///   or title/uri over their length limits
    pub fn create_auction(
        env: Env,
        seller: Address,
        duration_seconds: u64,
        reserve_price: i128,
        title: String,
        uri: String,
    ) -> Result<u64, Error> {
        seller.require_auth();
        admin::load_config(&env)?;

        let now = env.ledger().timestamp();
        let auction = engine::create(
            &env,
            seller,
            duration_seconds,
            reserve_price,
            title,
            uri,
            now,
        )?;
        storage::extend_instance_ttl(&env);

        AuctionCreatedEventData {
            auction_id: auction.id,
            seller: auction.seller,
            title: auction.title,
            end_time: auction.end_time,
            reserve_price: auction.reserve_price,
        }
        .publish(&env);

        Ok(auction.id)
    }

    /// Place a bid strictly above the current highest bid.
    ///
    /// The bid amount is escrowed by the contract. The bid it displaces is
    /// credited to its bidder's refund balance, to be pulled with `withdraw`.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::AuctionEnded` - Deadline passed or auction settled
    /// * `Error::BidTooLow` - Amount not above the current highest bid
    /// * `Error::SelfNotAllowed` - Seller bid while the policy forbids it
    pub fn bid(env: Env, auction_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();
        let config = admin::load_config(&env)?;

        let now = env.ledger().timestamp();
        engine::bid(&env, &config, auction_id, bidder.clone(), amount, now)?;
        payments::collect_bid(&env, &config, &bidder, amount);
        storage::extend_instance_ttl(&env);

        BidPlacedEventData {
            auction_id,
            bidder,
            amount,
        }
        .publish(&env);

        Ok(())
    }

    /// Settle an auction whose deadline has passed. Anyone may call it.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::NotYetEnded` - Deadline not reached
    /// * `Error::AlreadySettled` - Auction was settled before
    pub fn end_auction(env: Env, auction_id: u64, caller: Address) -> Result<AuctionOutcome, Error> {
        caller.require_auth();
        admin::load_config(&env)?;

        let now = env.ledger().timestamp();
        let (auction, outcome) = engine::end(&env, auction_id, now)?;
        storage::extend_instance_ttl(&env);

        let winning_bid = match outcome {
            AuctionOutcome::Won => auction.highest_bid,
            _ => 0,
        };
        AuctionEndedEventData {
            auction_id,
            caller,
            outcome,
            winning_bid,
        }
        .publish(&env);

        Ok(outcome)
    }

    /// Pay out everything `caller` is owed on an auction: refunds from being
    /// outbid and, for the seller of a sold auction, the winning bid.
    ///
    /// # Errors
    /// * `Error::NotFound` - Unknown auction
    /// * `Error::NothingToWithdraw` - Nothing is owed to `caller`
    pub fn withdraw(env: Env, auction_id: u64, caller: Address) -> Result<i128, Error> {
        caller.require_auth();
        let config = admin::load_config(&env)?;

        let amount = engine::withdraw(&env, auction_id, &caller)?;
        payments::pay_out(&env, &config, &caller, amount);
        storage::extend_instance_ttl(&env);

        WithdrawnEventData {
            auction_id,
            recipient: caller,
            amount,
        }
        .publish(&env);

        Ok(amount)
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn get_auction(env: Env, auction_id: u64) -> Result<Auction, Error> {
        engine::load(&env, auction_id)
    }

    /// Number of auctions ever created; ids run from 1 to this value.
    pub fn auction_count(env: Env) -> u64 {
        storage::get_auction_counter(&env)
    }

    /// Most recent auctions first, at most `limit` (capped at 50).
    pub fn get_latest_auctions(env: Env, limit: u32) -> Vec<Auction> {
        engine::latest(&env, limit)
    }

    /// Seconds until the auction's deadline, zero once it has passed.
    pub fn time_left(env: Env, auction_id: u64) -> Result<u64, Error> {
        let auction = engine::load(&env, auction_id)?;
        Ok(engine::time_left(&auction, env.ledger().timestamp()))
    }

    pub fn get_status(env: Env, auction_id: u64) -> Result<AuctionStatus, Error> {
        let auction = engine::load(&env, auction_id)?;
        Ok(auction.status(env.ledger().timestamp()))
    }

    /// Amount `withdraw` would currently pay `who` on this auction.
    pub fn pending_withdrawal(env: Env, auction_id: u64, who: Address) -> Result<i128, Error> {
        let auction = engine::load(&env, auction_id)?;
        engine::pending(&env, &auction, &who)
    }

    pub fn get_bid_history(env: Env, auction_id: u64) -> Result<Vec<Bid>, Error> {
        engine::load(&env, auction_id)?;
        Ok(storage::get_bid_history(&env, auction_id))
    }
}

#[cfg(test)]
mod test;
