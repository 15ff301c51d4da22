//! # Signet Ledger Transfer Benchmarks
//!
//! | Path | What is measured |
//! |------|------------------|
//! | sg-01 | Canonical message hashing, signer recovery |
//! | sg-02 | Raw ledger settlement under the account locks |
//! | sg-03 | Full authorization pipeline, single and contended |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use sg_01_signature_recovery::{recover_address, CanonicalMessage, EcdsaSignature};
use sg_02_account_ledger::{AccountDirectory, GenesisAccount, LedgerApi, LedgerTransaction};
use sg_03_transfer_authorization::{
    AuthorizerConfig, TransferApi, TransferAuthorizationService, Wallet,
};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn funded(wallets: &[Wallet], balance: u64) -> Arc<AccountDirectory> {
    let genesis = wallets.iter().map(|w| GenesisAccount {
        address: w.address(),
        balance,
    });
    Arc::new(AccountDirectory::from_genesis(genesis).expect("genesis"))
}

// ============================================================================
// SG-01: Hashing and recovery
// ============================================================================

fn bench_recovery(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-01-signature-recovery");
    group.measurement_time(Duration::from_secs(10));

    let signer = Wallet::generate();
    let recipient = Wallet::generate().address();
    let request = signer.sign_transfer(&recipient, 30, None).expect("sign");
    let signature =
        EcdsaSignature::from_compact(&request.signature, request.recovery_id).expect("compact");
    let digest = CanonicalMessage::new(&recipient, 30).digest();

    group.bench_function("hash_canonical_message", |b| {
        b.iter(|| black_box(CanonicalMessage::new(black_box(&recipient), 30).digest()))
    });

    group.bench_function("recover_address", |b| {
        b.iter(|| black_box(recover_address(black_box(&digest), &signature)))
    });

    group.finish();
}

// ============================================================================
// SG-02: Settlement
// ============================================================================

fn bench_settlement(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-02-account-ledger");

    let wallets = [Wallet::generate(), Wallet::generate()];
    let ledger = funded(&wallets, u64::MAX / 2);
    let forward = LedgerTransaction::new(wallets[0].address(), wallets[1].address(), 1);
    let back = LedgerTransaction::new(wallets[1].address(), wallets[0].address(), 1);

    group.bench_function("transfer_pair", |b| {
        b.iter(|| {
            black_box(ledger.transfer(&forward)).ok();
            black_box(ledger.transfer(&back)).ok();
        })
    });

    group.finish();
}

// ============================================================================
// SG-03: Full pipeline
// ============================================================================

fn bench_authorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("sg-03-transfer-authorization");
    group.measurement_time(Duration::from_secs(10));

    let config = AuthorizerConfig {
        max_transfer_amount: u64::MAX,
        ..Default::default()
    };

    for senders in [1usize, 4, 8] {
        let wallets: Vec<Wallet> = (0..=senders).map(|_| Wallet::generate()).collect();
        let ledger = funded(&wallets, 1_000_000_000);
        let service = TransferAuthorizationService::new(ledger, config.clone());
        let sink = wallets[senders].address();
        let requests: Vec<_> = wallets[..senders]
            .iter()
            .map(|w| w.sign_transfer(&sink, 1, None).expect("sign"))
            .collect();

        group.throughput(Throughput::Elements(senders as u64));
        let id = BenchmarkId::new("submit_contended", senders);
        group.bench_with_input(id, &requests, |b, requests| {
            b.iter(|| {
                thread::scope(|s| {
                    for request in requests {
                        let service = &service;
                        s.spawn(move || black_box(service.submit(request)).ok());
                    }
                });
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_recovery, bench_settlement, bench_authorization);
criterion_main!(benches);
