use registro_core::core::services::{Diagnostic, ImportService, RawRecord};
use registro_core::domain::AccountType;
use rust_decimal_macros::dec;
use serde_json::json;

fn record(value: serde_json::Value) -> RawRecord {
    match value {
        serde_json::Value::Object(map) => map,
        other => panic!("expected an object record, got {other:?}"),
    }
}

#[test]
fn numeric_cells_are_coerced_to_text() {
    let accounts = vec![record(json!({
        "id_account": 10000000006u64,
        "name_account": "Tax",
        "id_branches": "B1",
        "type_account": "debit",
        "percentage_account": 0.1,
    }))];
    let (reference, diagnostics) = ImportService::parse(&[], &accounts, &[]);
    let account = reference.account_by_id("10000000006").expect("account");
    assert_eq!(account.name, "Tax");
    assert_eq!(account.percentage, dec!(0.1));
    assert!(diagnostics.is_empty());
}

#[test]
fn missing_identity_cells_degrade_with_a_warning() {
    let providers = vec![record(json!({ "name_provider": "Acme" }))];
    let (reference, diagnostics) = ImportService::parse(&providers, &[], &[]);
    assert_eq!(reference.providers.len(), 1);
    assert_eq!(reference.providers[0].id, "");
    assert_eq!(reference.providers[0].name, "Acme");
    assert!(diagnostics.contains(&Diagnostic::MissingField {
        sheet: "Providers",
        field: "id_provider",
        row: 0,
    }));
}

#[test]
fn duplicate_id_replaces_earlier_record_in_place() {
    let branches = vec![
        record(json!({ "id_branch": "B1", "name_branch": "Main" })),
        record(json!({ "id_branch": "B2", "name_branch": "North" })),
        record(json!({ "id_branch": "B1", "name_branch": "Main Renamed" })),
    ];
    let (reference, diagnostics) = ImportService::parse(&[], &[], &branches);
    assert_eq!(reference.branches.len(), 2);
    assert_eq!(reference.branches[0].id, "B1");
    assert_eq!(reference.branches[0].name, "Main Renamed");
    assert_eq!(reference.branches[1].id, "B2");
    assert!(diagnostics.contains(&Diagnostic::DuplicateId {
        sheet: "Branches",
        id: "B1".into(),
    }));
}

#[test]
fn unrecognized_account_type_is_kept_but_flagged() {
    let accounts = vec![record(json!({
        "id_account": "A1",
        "name_account": "Weird",
        "type_account": "asset",
    }))];
    let (reference, diagnostics) = ImportService::parse(&[], &accounts, &[]);
    assert_eq!(reference.accounts[0].kind, AccountType::Other);
    assert!(diagnostics.contains(&Diagnostic::UnknownAccountType {
        id: "A1".into(),
        raw: "asset".into(),
    }));
}

#[test]
fn percentage_defaults_to_one_when_absent_or_unparsable() {
    let accounts = vec![
        record(json!({ "id_account": "A1", "name_account": "NoPct", "type_account": "debit" })),
        record(json!({
            "id_account": "A2",
            "name_account": "BadPct",
            "type_account": "debit",
            "percentage_account": "half",
        })),
    ];
    let (reference, diagnostics) = ImportService::parse(&[], &accounts, &[]);
    assert_eq!(reference.accounts[0].percentage, dec!(1));
    assert_eq!(reference.accounts[1].percentage, dec!(1));
    assert!(diagnostics.contains(&Diagnostic::BadPercentage {
        id: "A2".into(),
        raw: "half".into(),
    }));
}

#[test]
fn optional_cells_default_silently() {
    let accounts = vec![record(json!({
        "id_account": "A1",
        "name_account": "Plain",
        "type_account": "credit",
    }))];
    let (reference, diagnostics) = ImportService::parse(&[], &accounts, &[]);
    let account = &reference.accounts[0];
    assert_eq!(account.branch_ids, "");
    assert_eq!(account.code, "");
    assert!(diagnostics.is_empty());
}
