//! # Concurrent Settlement
//!
//! Many submitters against one ledger. Balances must never go negative,
//! supply must be conserved, and replay protection must hold under races.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Barrier;
use std::thread;

use super::fixtures::network;
use sg_02_account_ledger::LedgerApi;
use sg_03_transfer_authorization::{
    AuthorizerConfig, ReplayProtection, TransferApi, TransferErrorKind, Wallet,
};

#[test]
fn test_racing_spenders_cannot_overdraw() {
    const SPENDERS: usize = 16;
    let (service, w) = network(&[100, 0, 0, 0], AuthorizerConfig::default());
    let requests: Vec<_> = (0..SPENDERS)
        .map(|i| {
            let recipient = &w[1 + i % 3];
            w[0].sign_transfer(&recipient.address(), 10, None).unwrap()
        })
        .collect();

    let barrier = Barrier::new(SPENDERS);
    let settled = AtomicUsize::new(0);
    let starved = AtomicUsize::new(0);

    thread::scope(|s| {
        let (service, barrier) = (&service, &barrier);
        let (settled, starved) = (&settled, &starved);
        for request in &requests {
            s.spawn(move || {
                barrier.wait();
                match service.submit(request) {
                    Ok(_) => settled.fetch_add(1, Ordering::SeqCst),
                    Err(e) => {
                        assert_eq!(e.kind(), TransferErrorKind::InsufficientFunds);
                        starved.fetch_add(1, Ordering::SeqCst)
                    }
                };
            });
        }
    });

    assert_eq!(settled.load(Ordering::SeqCst), 10);
    assert_eq!(starved.load(Ordering::SeqCst), SPENDERS - 10);
    assert_eq!(service.ledger().balance_of(&w[0].address()), Some(0));
    assert_eq!(service.ledger().total_supply(), 100);
}

#[test]
fn test_opposing_transfers_do_not_deadlock() {
    const ROUNDS: usize = 200;
    let (service, w) = network(&[1_000, 1_000], AuthorizerConfig::default());
    let a_to_b = w[0].sign_transfer(&w[1].address(), 1, None).unwrap();
    let b_to_a = w[1].sign_transfer(&w[0].address(), 1, None).unwrap();

    let barrier = Barrier::new(2);
    thread::scope(|s| {
        for request in [&a_to_b, &b_to_a] {
            let service = &service;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for _ in 0..ROUNDS {
                    service.submit(request).unwrap();
                }
            });
        }
    });

    assert_eq!(service.ledger().balance_of(&w[0].address()), Some(1_000));
    assert_eq!(service.ledger().balance_of(&w[1].address()), Some(1_000));
}

#[test]
fn test_snapshots_see_conserved_supply() {
    const MOVERS: usize = 4;
    let balances = [500u64; MOVERS];
    let (service, w) = network(&balances, AuthorizerConfig::default());
    let supply = service.ledger().total_supply();

    // A ring of transfers: each wallet pays the next.
    let ring: Vec<_> = (0..MOVERS)
        .map(|i| {
            let next: &Wallet = &w[(i + 1) % MOVERS];
            w[i].sign_transfer(&next.address(), 3, None).unwrap()
        })
        .collect();

    let barrier = Barrier::new(MOVERS + 1);
    thread::scope(|s| {
        for request in &ring {
            let service = &service;
            let barrier = &barrier;
            s.spawn(move || {
                barrier.wait();
                for _ in 0..100 {
                    // Rejections for a momentarily drained wallet are fine.
                    let _ = service.submit(request);
                }
            });
        }

        s.spawn(|| {
            barrier.wait();
            for _ in 0..200 {
                assert_eq!(service.ledger().total_supply(), supply);
                let listed: u128 = service
                    .list_accounts()
                    .iter()
                    .map(|a| u128::from(a.balance))
                    .sum();
                assert_eq!(listed, supply);
            }
        });
    });

    assert_eq!(service.ledger().total_supply(), supply);
}

#[test]
fn test_same_sequence_number_settles_once() {
    const REPLAYERS: usize = 8;
    let config = AuthorizerConfig {
        replay_protection: ReplayProtection::SequenceNumber,
        ..Default::default()
    };
    let (service, w) = network(&[100, 0], config);
    let request = w[0].sign_transfer(&w[1].address(), 10, Some(0)).unwrap();

    let barrier = Barrier::new(REPLAYERS);
    let settled = AtomicUsize::new(0);

    thread::scope(|s| {
        for _ in 0..REPLAYERS {
            s.spawn(|| {
                barrier.wait();
                match service.submit(&request) {
                    Ok(_) => {
                        settled.fetch_add(1, Ordering::SeqCst);
                    }
                    Err(e) => assert_eq!(e.kind(), TransferErrorKind::Replay),
                }
            });
        }
    });

    assert_eq!(settled.load(Ordering::SeqCst), 1);
    assert_eq!(service.ledger().balance_of(&w[0].address()), Some(90));
    assert_eq!(service.ledger().resolve(&w[0].address()).unwrap().nonce, 1);
}
