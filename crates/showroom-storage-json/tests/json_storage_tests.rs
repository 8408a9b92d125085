use chrono::NaiveDate;
use rust_decimal_macros::dec;
use showroom_core::{LedgerSource, MovementQuery, StatementService};
use showroom_domain::{Account, AmountPolicy, Dataset, DateRange, Movement, Receipt};
use showroom_storage_json::{load_dataset_from_path, save_dataset_to_path, JsonLedgerSource};
use std::fs;
use tempfile::tempdir;

fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    let buyer = dataset.add_account(Account::new("Buyer").with_tax_id("29AAAAA0000A1Z5"));
    let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
    dataset.add_movement(
        Movement::debit(buyer, date, dec!(1000))
            .with_breakdown_item("vehicle_price", dec!(900))
            .with_breakdown_item("insurance", dec!(100)),
    );
    dataset.add_movement(Movement::credit(buyer, date, dec!(400)).with_narration("Exchange"));
    dataset.add_receipt(Receipt::new(buyer, date, dec!(250)));
    dataset
}

#[test]
fn json_storage_can_save_and_load_dataset() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("showroom.json");
    let dataset = sample_dataset();

    save_dataset_to_path(&dataset, &path).expect("save dataset");
    let loaded = load_dataset_from_path(&path).expect("load dataset");

    assert_eq!(loaded, dataset);
    assert!(!path.with_extension("json.tmp").exists());
}

#[test]
fn source_answers_queries_from_file() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("showroom.json");
    let dataset = sample_dataset();
    save_dataset_to_path(&dataset, &path).expect("save dataset");

    let source = JsonLedgerSource::open(&path).expect("open source");
    assert_eq!(source.path(), path.as_path());

    let buyer = dataset.accounts[0].id;
    let movements = source
        .movements(&MovementQuery::for_account(buyer))
        .expect("movements");
    assert_eq!(movements.len(), 2);

    let statement = StatementService::account_statement(
        &source,
        buyer,
        DateRange::unbounded(),
        AmountPolicy::Permissive,
    )
    .expect("statement");
    assert_eq!(statement.closing_label().to_string(), "600.00 Dr");
}

#[test]
fn numeric_amounts_are_accepted() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("numeric.json");
    fs::write(
        &path,
        r#"{
            "accounts": [{"id": "0e9d3c52-5a4b-4c6f-8a55-1c2d3e4f5a6b", "name": "Numeric"}],
            "movements": [{
                "id": "6f1c9a7e-0b7e-4f4e-9d55-0d5f3f7c1a11",
                "account_id": "0e9d3c52-5a4b-4c6f-8a55-1c2d3e4f5a6b",
                "date": "2024-08-02",
                "kind": "Debit",
                "amount": 1500
            }]
        }"#,
    )
    .expect("write dataset");

    let dataset = load_dataset_from_path(&path).expect("load dataset");
    assert_eq!(dataset.movements[0].amount, dec!(1500));
    assert!(dataset.receipts.is_empty());
}

#[test]
fn malformed_dataset_reports_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "[1, 2").expect("write dataset");

    let err = load_dataset_from_path(&path).expect_err("malformed dataset");
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().expect("tempdir");
    let err = JsonLedgerSource::open(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(err.to_string().starts_with("I/O error"));
}
