//! English-auction state machine.
//!
//! Every function here validates all of its preconditions before the first
//! storage write, and none of them move tokens: they only decide who owes and
//! who is owed what. Paying out is left to the contract entry points.
//! Time is always passed in as `now`.

use soroban_sdk::{log, Address, Env, String, Vec};

use crate::errors::Error;
use crate::storage;
use crate::types::{Auction, AuctionOutcome, Bid, Config, MAX_PAGE_SIZE, MAX_TITLE_LEN, MAX_URI_LEN};

pub fn create(
    env: &Env,
    seller: Address,
    duration_seconds: u64,
    reserve_price: i128,
    title: String,
    uri: String,
    now: u64,
) -> Result<Auction, Error> {
    if duration_seconds == 0 || reserve_price < 0 {
        return Err(Error::InvalidInput);
    }
    if title.is_empty() || title.len() > MAX_TITLE_LEN || uri.len() > MAX_URI_LEN {
        return Err(Error::InvalidInput);
    }
    let end_time = now
        .checked_add(duration_seconds)
        .ok_or(Error::InvalidInput)?;

    let auction = Auction {
        id: storage::increment_auction_counter(env),
        seller,
        title,
        uri,
        start_time: now,
        end_time,
        reserve_price,
        highest_bidder: None,
        highest_bid: 0,
        settled: false,
        canceled: false,
    };
    storage::save_auction(env, &auction);

    log!(env, "auction created", auction.id, auction.end_time);
    Ok(auction)
}

pub fn bid(
    env: &Env,
    config: &Config,
    auction_id: u64,
    bidder: Address,
    amount: i128,
    now: u64,
) -> Result<Auction, Error> {
    let mut auction = load(env, auction_id)?;

    if !auction.is_open(now) {
        return Err(Error::AuctionEnded);
    }
    if amount <= auction.highest_bid {
        return Err(Error::BidTooLow);
    }
    if !config.allow_seller_bids && bidder == auction.seller {
        return Err(Error::SelfNotAllowed);
    }

    // The displaced bid must be credited in the same step that replaces it.
    if let Some(previous) = auction.highest_bidder.as_ref() {
        let credited = checked_refund(env, auction_id, previous, auction.highest_bid)?;
        storage::set_refund(env, auction_id, previous, credited);
    }

    auction.highest_bid = amount;
    auction.highest_bidder = Some(bidder.clone());
    storage::save_auction(env, &auction);
    storage::add_bid_to_history(
        env,
        auction_id,
        Bid {
            bidder,
            amount,
            timestamp: now,
        },
    );

    log!(env, "bid accepted", auction_id, amount);
    Ok(auction)
}

pub fn end(env: &Env, auction_id: u64, now: u64) -> Result<(Auction, AuctionOutcome), Error> {
    let mut auction = load(env, auction_id)?;

    if auction.settled {
        return Err(Error::AlreadySettled);
    }
    if now < auction.end_time {
        return Err(Error::NotYetEnded);
    }

    let outcome = match auction.highest_bidder.clone() {
        None => {
            auction.canceled = true;
            AuctionOutcome::NoBids
        }
        Some(bidder) if auction.highest_bid < auction.reserve_price => {
            let credited = checked_refund(env, auction_id, &bidder, auction.highest_bid)?;
            storage::set_refund(env, auction_id, &bidder, credited);
            auction.canceled = true;
            AuctionOutcome::ReserveNotMet
        }
        Some(_) => {
            storage::set_proceeds(env, auction_id, auction.highest_bid);
            AuctionOutcome::Won
        }
    };

    auction.settled = true;
    storage::save_auction(env, &auction);

    log!(env, "auction settled", auction_id, outcome as u32);
    Ok((auction, outcome))
}

/// Amount `who` could withdraw from the auction right now.
pub fn pending(env: &Env, auction: &Auction, who: &Address) -> Result<i128, Error> {
    let refund = storage::get_refund(env, auction.id, who);
    if *who != auction.seller {
        return Ok(refund);
    }
    refund
        .checked_add(storage::get_proceeds(env, auction.id))
        .ok_or(Error::ArithmeticOverflow)
}

/// Clears everything owed to `caller` on the auction and returns the total.
pub fn withdraw(env: &Env, auction_id: u64, caller: &Address) -> Result<i128, Error> {
    let auction = load(env, auction_id)?;
    let amount = pending(env, &auction, caller)?;
    if amount <= 0 {
        return Err(Error::NothingToWithdraw);
    }

    storage::remove_refund(env, auction_id, caller);
    if *caller == auction.seller {
        storage::remove_proceeds(env, auction_id);
    }

    log!(env, "withdrawal authorized", auction_id, amount);
    Ok(amount)
}

pub fn load(env: &Env, auction_id: u64) -> Result<Auction, Error> {
    storage::get_auction(env, auction_id).ok_or(Error::NotFound)
}

/// Newest-first page of at most `limit` auctions.
pub fn latest(env: &Env, limit: u32) -> Vec<Auction> {
    let mut page = Vec::new(env);
    let mut id = storage::get_auction_counter(env);
    let limit = limit.min(MAX_PAGE_SIZE);
    while id > 0 && page.len() < limit {
        if let Some(auction) = storage::get_auction(env, id) {
            page.push_back(auction);
        }
        id -= 1;
    }
    page
}

pub fn time_left(auction: &Auction, now: u64) -> u64 {
    auction.end_time.saturating_sub(now)
}

fn checked_refund(env: &Env, auction_id: u64, bidder: &Address, amount: i128) -> Result<i128, Error> {
    storage::get_refund(env, auction_id, bidder)
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)
}
