use soroban_sdk::{contracttype, Address, String};

/// Result of settling an auction.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionOutcome {
    /// Highest bid met the reserve; the seller is owed it
    Won = 0,
    /// Nobody bid
    NoBids = 1,
    /// Highest bid stayed below the reserve and was refunded
    ReserveNotMet = 2,
}

/// Presentation status derived from the record and the ledger time.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum AuctionStatus {
    Open = 0,
    AwaitingSettlement = 1,
    Sold = 2,
    Canceled = 3,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Auction {
    pub id: u64,
    pub seller: Address,
    pub title: String,
    pub uri: String,
    pub start_time: u64,
    pub end_time: u64,
    pub reserve_price: i128,
    pub highest_bidder: Option<Address>,
    pub highest_bid: i128,
    pub settled: bool,
    /// Set only when settlement found no qualifying bid
    pub canceled: bool,
}

impl Auction {
    pub fn is_open(&self, now: u64) -> bool {
        !self.settled && now < self.end_time
    }

    pub fn status(&self, now: u64) -> AuctionStatus {
        if self.canceled {
            AuctionStatus::Canceled
        } else if self.settled {
            AuctionStatus::Sold
        } else if now < self.end_time {
            AuctionStatus::Open
        } else {
            AuctionStatus::AwaitingSettlement
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Contract-wide settings fixed at initialization.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Address allowed to change policy
    pub admin: Address,
    /// Asset every bid is paid in
    pub token: Address,
    /// Whether a seller may bid on their own auction
    pub allow_seller_bids: bool,
}

/// Storage keys for the auction house contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Contract configuration
    Config,
    /// Last allocated auction id
    AuctionCounter,
    /// Auction record by id
    Auction(u64),
    /// Accepted bids by auction id
    BidHistory(u64),
    /// Refund owed to a bidder on an auction
    Refund(u64, Address),
    /// Winning bid owed to the seller of a sold auction
    Proceeds(u64),
}

pub const MAX_TITLE_LEN: u32 = 128;
pub const MAX_URI_LEN: u32 = 256;

/// Upper bound on `get_latest_auctions` page size
pub const MAX_PAGE_SIZE: u32 = 50;

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
pub const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending instance storage
pub const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;
