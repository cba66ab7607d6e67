use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion};
use rust_decimal::Decimal;

use paperdesk_ledger::{
    project_cash, project_inventory, InMemoryLedgerStore, LedgerStore, PendingTransaction,
    TransactionKind,
};

const ITEMS: &[&str] = &[
    "A4 paper",
    "Letter-sized paper",
    "Cardstock",
    "Glossy paper",
    "Poster paper",
    "Envelopes",
    "Sticky notes",
    "Banner paper",
];

fn seeded_store(rows: usize) -> InMemoryLedgerStore {
    let store = InMemoryLedgerStore::new();
    for i in 0..rows {
        let kind = if i % 3 == 0 {
            TransactionKind::StockOrder
        } else {
            TransactionKind::Sale
        };
        let day = (i % 28) as u32 + 1;
        let date = NaiveDate::from_ymd_opt(2025, (i % 12) as u32 + 1, day).unwrap();
        let pending = PendingTransaction::new(
            ITEMS[i % ITEMS.len()],
            kind,
            (i % 200) as i64 + 1,
            Decimal::new((i % 5_000) as i64, 2),
            date,
        )
        .unwrap();
        store.append(pending).unwrap();
    }
    store
}

fn bench_projections(c: &mut Criterion) {
    let store = seeded_store(10_000);
    let as_of = NaiveDate::from_ymd_opt(2025, 12, 28).unwrap();

    c.bench_function("project_inventory_10k", |b| {
        b.iter(|| project_inventory(&store, std::hint::black_box(as_of)).unwrap())
    });

    c.bench_function("project_cash_10k", |b| {
        b.iter(|| project_cash(&store, std::hint::black_box(as_of)).unwrap())
    });
}

criterion_group!(benches, bench_projections);
criterion_main!(benches);
