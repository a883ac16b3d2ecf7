use soroban_sdk::{contractevent, Address, String};

use crate::types::AuctionOutcome;

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub token: Address,
    pub allow_seller_bids: bool,
}

/// Event emitted when the seller bidding policy changes
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SellerBiddingSetEventData {
    #[topic]
    pub admin: Address,
    pub allowed: bool,
}

/// Event emitted when an auction is created
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionCreatedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub seller: Address,
    pub title: String,
    pub end_time: u64,
    pub reserve_price: i128,
}

/// Event emitted when a bid becomes the highest bid
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
}

/// Event emitted when an auction is settled
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub auction_id: u64,
    pub caller: Address,
    pub outcome: AuctionOutcome,
    pub winning_bid: i128,
}

/// Event emitted when refunds or proceeds are paid out
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEventData {
    #[topic]
    pub auction_id: u64,
    #[topic]
    pub recipient: Address,
    pub amount: i128,
}
