use soroban_sdk::contracterror;

/// Error codes for the auction house contract.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has not been initialized
    NotInitialized = 1,
    /// Contract has already been initialized
    AlreadyInitialized = 2,
    /// Caller is not the configured admin
    Unauthorized = 3,
    /// Zero duration, empty or oversized title/uri, negative reserve
    InvalidInput = 4,
    /// No auction with the requested id
    NotFound = 5,
    /// Deadline passed or auction already settled
    AuctionEnded = 6,
    /// Bid does not exceed the current highest bid
    BidTooLow = 7,
    /// Seller bidding on their own auction while the policy forbids it
    SelfNotAllowed = 8,
    /// Settlement attempted before the deadline
    NotYetEnded = 9,
    /// Settlement attempted twice
    AlreadySettled = 10,
    /// Caller has no refund or proceeds on this auction
    NothingToWithdraw = 11,
    /// Ledger balance would overflow
    ArithmeticOverflow = 12,
}
