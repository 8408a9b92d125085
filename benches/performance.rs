use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rust_decimal::Decimal;
use showroom_core::{aggregate, order_movements, project};
use showroom_domain::{Account, AccountFilter, Dataset, Movement, Receipt};
use showroom_storage_json::{load_dataset_from_path, save_dataset_to_path};
use tempfile::tempdir;

fn build_sample_dataset(movement_count: usize) -> Dataset {
    let mut dataset = Dataset::new();
    let accounts: Vec<_> = (0..50)
        .map(|idx| {
            let account = Account::new(format!("Customer {idx}"));
            let account = if idx % 2 == 0 {
                account.with_tax_id(format!("GST{idx:04}"))
            } else {
                account
            };
            dataset.add_account(account)
        })
        .collect();

    let start_date = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap();
    for idx in 0..movement_count {
        let account = accounts[idx % accounts.len()];
        let date = start_date + Duration::days((idx % 365) as i64);
        let amount = Decimal::new(50_000 + (idx % 100) as i64 * 125, 2);
        let movement = if idx % 4 == 0 {
            Movement::credit(account, date, amount)
        } else {
            Movement::debit(account, date, amount)
        };
        dataset.add_movement(movement);
        if idx % 10 == 0 {
            dataset.add_receipt(Receipt::new(account, date, amount));
        }
    }
    dataset
}

fn bench_projection(c: &mut Criterion) {
    let dataset = build_sample_dataset(black_box(10_000));

    c.bench_function("order_and_project_10k", |b| {
        b.iter_batched(
            || dataset.movements.clone(),
            |mut movements| {
                order_movements(&mut movements);
                black_box(project(&movements));
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("aggregate_10k", |b| {
        b.iter(|| {
            let rows = aggregate(
                &dataset.accounts,
                &dataset.movements,
                &dataset.receipts,
                AccountFilter::All,
            );
            black_box(rows);
        })
    });
}

fn bench_dataset_io(c: &mut Criterion) {
    let dataset = build_sample_dataset(black_box(10_000));
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("dataset.json");

    c.bench_function("dataset_save_10k", |b| {
        b.iter(|| {
            save_dataset_to_path(&dataset, &file_path).expect("save dataset");
        })
    });

    save_dataset_to_path(&dataset, &file_path).expect("seed");

    c.bench_function("dataset_load_10k", |b| {
        b.iter(|| {
            let loaded = load_dataset_from_path(&file_path).expect("load dataset");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_projection, bench_dataset_io);
criterion_main!(benches);
