//! Quote math benchmarks.
//!
//! The UI calls these previews on every input keystroke, so they must stay
//! comfortably in the microsecond range.

use amm::{proportional_token_deposit, swap_output, withdrawal_amounts, U256};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn wei(whole: u64) -> U256 {
    U256::from(whole) * U256::exp10(18)
}

fn bench_quotes(c: &mut Criterion) {
    let ether_reserve = wei(5_000);
    let token_reserve = wei(12_500_000);

    c.bench_function("proportional_token_deposit", |b| {
        b.iter(|| {
            proportional_token_deposit(
                black_box(wei(25)),
                black_box(ether_reserve),
                black_box(token_reserve),
            )
        })
    });

    c.bench_function("withdrawal_amounts", |b| {
        b.iter(|| {
            withdrawal_amounts(
                black_box(wei(100)),
                black_box(wei(4_000)),
                black_box(ether_reserve),
                black_box(token_reserve),
            )
        })
    });

    c.bench_function("swap_output", |b| {
        b.iter(|| {
            swap_output(
                black_box(wei(10)),
                black_box(ether_reserve),
                black_box(token_reserve),
                black_box(30),
            )
        })
    });
}

criterion_group!(benches, bench_quotes);
criterion_main!(benches);
