mod common;

use showroom_config::Config;
use showroom_ledger::cli::run_with;
use showroom_ledger::errors::AppError;

use common::{sample_dataset, write_dataset};

fn run(args: &[&str], config: Config) -> Result<String, AppError> {
    let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
    let mut out = Vec::new();
    run_with(&args, config, &mut out)?;
    Ok(String::from_utf8(out).expect("utf8 output"))
}

fn plain_config() -> Config {
    Config {
        ui_color_enabled: false,
        ..Config::default()
    }
}

#[test]
fn ledger_accepts_account_id() {
    let dataset = sample_dataset();
    let fleet = dataset.accounts[0].id.to_string();
    let (_guard, path) = write_dataset(&dataset);
    let path = path.to_string_lossy().into_owned();

    let output = run(&["ledger", &fleet, "--data", &path, "--json"], plain_config()).unwrap();
    let statement: serde_json::Value = serde_json::from_str(&output).unwrap();
    let balances: Vec<&str> = statement["entries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["balance"].as_str().unwrap())
        .collect();
    assert_eq!(balances, vec!["1000", "600", "800"]);
    assert_eq!(statement["closing_balance"], "800");
}

#[test]
fn equals_form_and_double_dash_are_accepted() {
    let (_guard, path) = write_dataset(&sample_dataset());
    let data = format!("--data={}", path.display());

    let summary = run(&["summary", &data], plain_config()).unwrap();
    assert!(summary.contains("₹1,300.00 Dr"));

    let ledger = run(&["ledger", &data, "--", "Fleet Motors"], plain_config()).unwrap();
    assert!(ledger.contains("₹800.00 Dr"));
}

#[test]
fn account_name_is_taken_verbatim() {
    let (_guard, path) = write_dataset(&sample_dataset());
    let path = path.to_string_lossy().into_owned();

    let err = run(&["ledger", "Fleet  Motors", "--data", &path], plain_config()).unwrap_err();
    assert!(err.to_string().contains("Fleet  Motors"));

    let split = run(&["ledger", "Fleet", "Motors", "--data", &path], plain_config());
    assert!(matches!(split, Err(AppError::Cli(_))));
}

#[test]
fn default_dataset_comes_from_config() {
    let (_guard, path) = write_dataset(&sample_dataset());
    let config = Config {
        default_dataset: Some(path),
        ..plain_config()
    };

    let output = run(&["summary", "--filter", "registered"], config).unwrap();
    assert!(output.contains("Fleet Motors"));
    assert!(!output.contains("Walk-in Buyer"));
    assert!(output.contains("₹800.00 Dr"));
}

#[test]
fn strict_flag_rejects_negative_amounts() {
    let mut dataset = sample_dataset();
    dataset.movements[0].amount = rust_decimal_macros::dec!(-5);
    let (_guard, path) = write_dataset(&dataset);
    let path = path.to_string_lossy().into_owned();

    let permissive = run(&["summary", "--data", &path], plain_config());
    assert!(permissive.is_ok());

    let strict = run(&["summary", "--data", &path, "--strict"], plain_config());
    assert!(matches!(
        strict,
        Err(AppError::Core(showroom_core::CoreError::Validation(_)))
    ));
}

#[test]
fn bad_command_lines_are_rejected() {
    assert!(matches!(run(&["ledger"], plain_config()), Err(AppError::Cli(_))));
    assert!(matches!(
        run(&["summary", "--filter", "gst"], plain_config()),
        Err(AppError::Cli(_))
    ));
    assert!(matches!(
        run(
            &["summary", "--from", "2024-02-01", "--to", "2024-01-01", "--data", "x.json"],
            plain_config()
        ),
        Err(AppError::Usage(_))
    ));
}

#[test]
fn help_is_written_to_output() {
    let top = run(&[], plain_config()).unwrap();
    for name in ["ledger", "summary", "accounts", "init"] {
        assert!(top.contains(name), "missing {name} in help");
    }

    let summary = run(&["help", "summary"], plain_config()).unwrap();
    assert!(summary.contains("--filter"));
    assert!(summary.contains("unregistered"));
}
