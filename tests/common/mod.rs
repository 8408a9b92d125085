#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use showroom_domain::{Account, Dataset, Movement, Receipt};
use showroom_storage_json::save_dataset_to_path;
use tempfile::TempDir;

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).expect("valid date")
}

/// Fleet Motors (registered) closes at 800 Dr; Walk-in Buyer owes 750 and paid 250.
pub fn sample_dataset() -> Dataset {
    let mut dataset = Dataset::new();
    let fleet = dataset.add_account(Account::new("Fleet Motors").with_tax_id("29ABCDE1234F1Z5"));
    let walk_in = dataset.add_account(Account::new("Walk-in Buyer"));

    dataset.add_movement(Movement::debit(fleet, date(10), dec!(200)).with_narration("Service"));
    dataset.add_movement(Movement::debit(fleet, date(1), dec!(1000)).with_narration("Vehicle sale"));
    dataset.add_movement(Movement::credit(fleet, date(5), dec!(400)).with_narration("Trade-in"));
    dataset.add_movement(Movement::debit(walk_in, date(3), dec!(750)).with_narration("Accessories"));
    dataset.add_receipt(Receipt::new(walk_in, date(4), dec!(250)).with_reference("RCPT-1"));
    dataset
}

/// Writes `dataset` into a fresh temp dir, returning the guard and the file path.
pub fn write_dataset(dataset: &Dataset) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("create temp dir");
    let path = temp.path().join("dataset.json");
    save_dataset_to_path(dataset, &path).expect("write dataset");
    (temp, path)
}
