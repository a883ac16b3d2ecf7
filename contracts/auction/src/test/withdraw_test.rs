use crate::test::{advance_ledger, create_auction, setup_test, STARTING_BALANCE};
use crate::{AuctionOutcome, Error};

#[test]
fn test_won_auction_full_flow() {
    let (env, client, seller, alice, bob, token) = setup_test();
    let auction_id = create_auction(&env, &client, &seller, 60, 10);

    client.bid(&auction_id, &alice, &5);
    client.bid(&auction_id, &bob, &12);
    advance_ledger(&env, 61);
    assert_eq!(client.end_auction(&auction_id, &alice), AuctionOutcome::Won);

    assert_eq!(client.withdraw(&auction_id, &alice), 5);
    assert_eq!(token.balance(&alice), STARTING_BALANCE);
    assert_eq!(
        client.try_withdraw(&auction_id, &alice),
        Err(Ok(Error::NothingToWithdraw))
    );

    assert_eq!(client.withdraw(&auction_id, &seller), 12);
    assert_eq!(token.balance(&seller), STARTING_BALANCE + 12);
    assert_eq!(
        client.try_withdraw(&auction_id, &seller),
        Err(Ok(Error::NothingToWithdraw))
    );

    assert_eq!(token.balance(&bob), STARTING_BALANCE - 12);
    assert_eq!(token.balance(&client.address), 0);
}

#[test]
fn test_winner_has_nothing_to_withdraw() {
    let (env, client, seller, alice, _, _) = setup_test();
    let auction_id = create_auction(&env, &client, &seller, 60, 10);
    client.bid(&auction_id, &alice, &15);
    advance_ledger(&env, 61);
    client.end_auction(&auction_id, &alice);

    assert_eq!(
        client.try_withdraw(&auction_id, &alice),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_outbid_refund_withdrawable_while_open() {
    let (env, client, seller, alice, bob, token) = setup_test();
    let auction_id = create_auction(&env, &client, &seller, 60, 10);
    client.bid(&auction_id, &alice, &5);
    client.bid(&auction_id, &bob, &8);

    assert_eq!(client.withdraw(&auction_id, &alice), 5);
    assert_eq!(token.balance(&alice), STARTING_BALANCE);
    assert_eq!(client.pending_withdrawal(&auction_id, &alice), 0);

    // A fresh credit after withdrawing is paid out again.
    client.bid(&auction_id, &alice, &9);
    client.bid(&auction_id, &bob, &10);
    assert_eq!(client.withdraw(&auction_id, &alice), 9);
    assert_eq!(token.balance(&alice), STARTING_BALANCE);
}

#[test]
fn test_reserve_not_met_refunds_bidder() {
    let (env, client, seller, alice, _, token) = setup_test();
    let auction_id = create_auction(&env, &client, &seller, 60, 10);
    client.bid(&auction_id, &alice, &5);
    advance_ledger(&env, 61);
    client.end_auction(&auction_id, &seller);

    assert_eq!(
        client.try_withdraw(&auction_id, &seller),
        Err(Ok(Error::NothingToWithdraw))
    );
    assert_eq!(client.withdraw(&auction_id, &alice), 5);
    assert_eq!(token.balance(&alice), STARTING_BALANCE);
    assert_eq!(token.balance(&seller), STARTING_BALANCE);
}

#[test]
fn test_seller_proceeds_unavailable_before_settlement() {
    let (env, client, seller, alice, _, _) = setup_test();
    let auction_id = create_auction(&env, &client, &seller, 60, 10);
    client.bid(&auction_id, &alice, &50);
    advance_ledger(&env, 61);

    assert_eq!(
        client.try_withdraw(&auction_id, &seller),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_seller_collects_refund_and_proceeds_together() {
    let (env, client, seller, alice, _, token) = setup_test();
    let admin = client.get_config().admin;
    client.set_seller_bidding(&admin, &true);

    let auction_id = create_auction(&env, &client, &seller, 60, 10);
    client.bid(&auction_id, &seller, &4);
    client.bid(&auction_id, &alice, &30);
    advance_ledger(&env, 61);
    client.end_auction(&auction_id, &alice);

    assert_eq!(client.pending_withdrawal(&auction_id, &seller), 34);
    assert_eq!(client.withdraw(&auction_id, &seller), 34);
    assert_eq!(token.balance(&seller), STARTING_BALANCE + 30);
    assert_eq!(
        client.try_withdraw(&auction_id, &seller),
        Err(Ok(Error::NothingToWithdraw))
    );
}

#[test]
fn test_withdraw_is_scoped_to_auction() {
    let (env, client, seller, alice, bob, _) = setup_test();
    let first = create_auction(&env, &client, &seller, 60, 0);
    let second = create_auction(&env, &client, &seller, 60, 0);
    client.bid(&first, &alice, &5);
    client.bid(&first, &bob, &6);

    assert_eq!(
        client.try_withdraw(&second, &alice),
        Err(Ok(Error::NothingToWithdraw))
    );
    assert_eq!(client.withdraw(&first, &alice), 5);
}

#[test]
fn test_withdraw_unknown_auction() {
    let (_, client, _, alice, _, _) = setup_test();
    assert_eq!(client.try_withdraw(&11, &alice), Err(Ok(Error::NotFound)));
}
