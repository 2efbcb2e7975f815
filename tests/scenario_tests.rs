//! Library-level scenarios
//!
//! Each test gets its own data directory with the default categories seeded,
//! then drives the services the way the menu and CLI do.

use std::fs;

use fintrack::config::FintrackPaths;
use fintrack::error::ValidationError;
use fintrack::models::{default_categories, FlowType, Money, Transaction};
use fintrack::services::{CategoryService, TransactionService};
use fintrack::storage::{initialize_storage, Storage};
use fintrack::FintrackError;
use tempfile::TempDir;

fn seeded_storage() -> (TempDir, Storage) {
    let temp_dir = TempDir::new().unwrap();
    let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
    let storage = Storage::new(paths);
    initialize_storage(&storage, &default_categories()).unwrap();
    (temp_dir, storage)
}

fn file_snapshot(storage: &Storage) -> Option<String> {
    fs::read_to_string(storage.paths().transactions_file()).ok()
}

#[test]
fn grocery_purchase_is_recorded() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    service
        .add_transaction(
            Money::from_cents(10050),
            "Продукты",
            "Покупка в магазине",
            "expense",
        )
        .unwrap();

    let all = service.get_all_transactions().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].amount, Money::from_cents(10050));
    assert_eq!(all[0].category, "Продукты");
    assert_eq!(all[0].kind, FlowType::Expense);
}

#[test]
fn salary_cannot_be_an_expense() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    let err = service
        .add_transaction(Money::from_cents(5000), "Зарплата", "desc", "expense")
        .unwrap_err();

    assert!(matches!(
        err,
        FintrackError::TypeMismatch {
            category_type: FlowType::Income,
            requested: FlowType::Expense,
            ..
        }
    ));
    assert!(service.get_all_transactions().unwrap().is_empty());
}

#[test]
fn non_positive_amounts_leave_the_file_alone() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);
    service
        .add_transaction(Money::from_cents(100), "Транспорт", "Метро", "expense")
        .unwrap();
    let before = file_snapshot(&storage);

    for cents in [-500, -1, 0] {
        let err = service
            .add_transaction(Money::from_cents(cents), "Продукты", "desc", "expense")
            .unwrap_err();
        assert!(matches!(
            err,
            FintrackError::Validation(ValidationError::InvalidAmount { .. })
        ));
    }

    assert_eq!(file_snapshot(&storage), before);
}

#[test]
fn unknown_category_is_reported_by_name() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    let err = service
        .add_transaction(Money::from_cents(100), "Кафе", "Обед", "expense")
        .unwrap_err();

    match err {
        FintrackError::CategoryNotFound { name } => assert_eq!(name, "Кафе"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(file_snapshot(&storage).is_none());
}

#[test]
fn category_match_ignores_case() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    let txn = service
        .add_transaction(Money::from_cents(2500), "  транспорт ", "Такси", "expense")
        .unwrap();

    assert_eq!(txn.category, "Транспорт");
}

#[test]
fn transactions_round_trip_in_order() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    let inputs = [
        (100_000, "Зарплата", "Аванс", "income"),
        (10050, "Продукты", "Покупка в магазине", "expense"),
        (3000, "Подарки", "От бабушки", "income"),
        (45000, "Жилье", "Аренда", "expense"),
    ];
    let written: Vec<Transaction> = inputs
        .iter()
        .map(|(cents, category, description, kind)| {
            service
                .add_transaction(Money::from_cents(*cents), category, description, kind)
                .unwrap()
        })
        .collect();

    // A fresh handle reads the same bytes back
    let reopened = Storage::new(storage.paths().clone());
    let read = TransactionService::new(&reopened)
        .get_all_transactions()
        .unwrap();
    assert_eq!(read, written);

    let totals = service.totals().unwrap();
    assert_eq!(totals.income, Money::from_cents(103_000));
    assert_eq!(totals.expense, Money::from_cents(55_050));
    assert_eq!(totals.balance, Money::from_cents(47_950));
}

#[test]
fn missing_transaction_file_reads_empty_every_time() {
    let (_temp_dir, storage) = seeded_storage();
    let service = TransactionService::new(&storage);

    for _ in 0..3 {
        assert!(service.get_all_transactions().unwrap().is_empty());
    }
    assert!(file_snapshot(&storage).is_none());
}

#[test]
fn categories_split_by_type_in_file_order() {
    let (_temp_dir, storage) = seeded_storage();
    let service = CategoryService::new(&storage);
    service.add_category("Кафе", false).unwrap();
    service.add_category("Кэшбэк", true).unwrap();

    let all = service.list_categories().unwrap();
    let income = service.get_categories_by_type(true).unwrap();
    let expense = service.get_categories_by_type(false).unwrap();

    let expected_income: Vec<_> = all.iter().filter(|c| c.is_income).cloned().collect();
    let expected_expense: Vec<_> = all.iter().filter(|c| !c.is_income).cloned().collect();
    assert_eq!(income, expected_income);
    assert_eq!(expense, expected_expense);
    assert_eq!(income.len() + expense.len(), all.len());

    let names: Vec<&str> = income.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Зарплата", "Подарки", "Прочие доходы", "Кэшбэк"]);
}

#[test]
fn blank_category_name_changes_nothing() {
    let (_temp_dir, storage) = seeded_storage();
    let service = CategoryService::new(&storage);
    let before = fs::read_to_string(storage.paths().categories_file()).unwrap();

    let err = service.add_category("", true).unwrap_err();
    assert!(matches!(
        err,
        FintrackError::Validation(ValidationError::EmptyCategoryName)
    ));

    let after = fs::read_to_string(storage.paths().categories_file()).unwrap();
    assert_eq!(before, after);
}

#[test]
fn user_categories_get_fresh_ids_and_are_usable() {
    let (_temp_dir, storage) = seeded_storage();
    let categories = CategoryService::new(&storage);

    let cafe = categories.add_category("Кафе", false).unwrap();
    let cashback = categories.add_category("Кэшбэк", true).unwrap();
    assert_eq!(cafe.id.as_str(), "8");
    assert_eq!(cashback.id.as_str(), "9");
    assert!(cafe.editable);

    let txn = TransactionService::new(&storage)
        .add_transaction(Money::from_cents(35000), "кафе", "Ужин", "expense")
        .unwrap();
    assert_eq!(txn.category, "Кафе");
}

#[test]
fn stored_files_use_the_documented_field_names() {
    let (_temp_dir, storage) = seeded_storage();
    TransactionService::new(&storage)
        .add_transaction(
            Money::from_cents(10050),
            "Продукты",
            "Покупка в магазине",
            "expense",
        )
        .unwrap();

    let categories: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(storage.paths().categories_file()).unwrap())
            .unwrap();
    let first = &categories[0];
    for field in ["id", "name", "type", "is_income", "edit"] {
        assert!(first.get(field).is_some(), "category field {field} missing");
    }

    let transactions: serde_json::Value = serde_json::from_str(
        &fs::read_to_string(storage.paths().transactions_file()).unwrap(),
    )
    .unwrap();
    let txn = &transactions[0];
    assert_eq!(txn["amount"], serde_json::json!(100.5));
    assert_eq!(txn["type"], "expense");
    assert!(txn["id"].as_str().unwrap().starts_with("tx_"));
    assert!(txn["date"].is_string());
}

#[test]
fn corrupt_transaction_file_is_kept_aside_and_store_recovers() {
    let (_temp_dir, storage) = seeded_storage();
    let path = storage.paths().transactions_file().to_path_buf();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();

    let service = TransactionService::new(&storage);
    assert!(service.get_all_transactions().unwrap().is_empty());

    let txn = service
        .add_transaction(Money::from_cents(100), "Продукты", "desc", "expense")
        .unwrap();
    assert_eq!(service.get_all_transactions().unwrap(), vec![txn]);

    let kept: Vec<String> = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|p| {
            p.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("transactions.json.corrupt-")
        })
        .map(|p| fs::read_to_string(p).unwrap())
        .collect();
    assert_eq!(kept, vec!["{ not json".to_string()]);
}
