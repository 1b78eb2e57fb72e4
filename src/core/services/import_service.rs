//! Validated parsing of the three reference sheets into typed tables.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::domain::{Account, AccountType, Branch, Provider, ReferenceData};

use super::Diagnostic;

/// One loosely-typed record from the spreadsheet collaborator. Cells arrive
/// as strings or numbers depending on how the sheet column was typed.
pub type RawRecord = Map<String, Value>;

/// Builds the session's reference tables from the raw sheet records.
pub struct ImportService;

impl ImportService {
    /// Parses the `Providers`, `Accounts`, and `Branches` sheets.
    ///
    /// Missing identity cells degrade to empty strings, a duplicated id
    /// replaces the earlier record in place, an unparsable percentage falls
    /// back to 1. Every degradation is surfaced as a [`Diagnostic`], never as
    /// an error.
    pub fn parse(
        providers: &[RawRecord],
        accounts: &[RawRecord],
        branches: &[RawRecord],
    ) -> (ReferenceData, Vec<Diagnostic>) {
        let mut diagnostics = Vec::new();
        let reference = ReferenceData {
            providers: parse_providers(providers, &mut diagnostics),
            accounts: parse_accounts(accounts, &mut diagnostics),
            branches: parse_branches(branches, &mut diagnostics),
        };
        tracing::debug!(
            providers = reference.providers.len(),
            accounts = reference.accounts.len(),
            branches = reference.branches.len(),
            warnings = diagnostics.len(),
            "reference sheets parsed"
        );
        (reference, diagnostics)
    }
}

fn parse_providers(records: &[RawRecord], diagnostics: &mut Vec<Diagnostic>) -> Vec<Provider> {
    let mut providers: Vec<Provider> = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let id = identity_cell(record, "Providers", "id_provider", row, diagnostics);
        let name = identity_cell(record, "Providers", "name_provider", row, diagnostics);
        upsert(
            &mut providers,
            Provider { id, name },
            |provider| provider.id.as_str(),
            "Providers",
            diagnostics,
        );
    }
    providers
}

fn parse_accounts(records: &[RawRecord], diagnostics: &mut Vec<Diagnostic>) -> Vec<Account> {
    let mut accounts: Vec<Account> = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let id = identity_cell(record, "Accounts", "id_account", row, diagnostics);
        let name = identity_cell(record, "Accounts", "name_account", row, diagnostics);
        let raw_kind = optional_cell(record, "type_account");
        let kind = AccountType::parse(&raw_kind);
        if kind == AccountType::Other && !raw_kind.trim().is_empty() {
            diagnostics.push(Diagnostic::UnknownAccountType {
                id: id.clone(),
                raw: raw_kind,
            });
        }
        let account = Account::new(id.clone(), name, kind)
            .with_branches(optional_cell(record, "id_branches"))
            .with_code(optional_cell(record, "code_account"))
            .with_percentage(parse_percentage(
                record.get("percentage_account"),
                &id,
                diagnostics,
            ));
        upsert(
            &mut accounts,
            account,
            |account| account.id.as_str(),
            "Accounts",
            diagnostics,
        );
    }
    accounts
}

fn parse_branches(records: &[RawRecord], diagnostics: &mut Vec<Diagnostic>) -> Vec<Branch> {
    let mut branches: Vec<Branch> = Vec::with_capacity(records.len());
    for (row, record) in records.iter().enumerate() {
        let id = identity_cell(record, "Branches", "id_branch", row, diagnostics);
        let name = identity_cell(record, "Branches", "name_branch", row, diagnostics);
        upsert(
            &mut branches,
            Branch { id, name },
            |branch| branch.id.as_str(),
            "Branches",
            diagnostics,
        );
    }
    branches
}

/// Inserts a parsed record, replacing an earlier record that carries the same
/// non-empty id. Last record wins but keeps the earlier record's position, so
/// name lookups stay deterministic.
fn upsert<T>(
    rows: &mut Vec<T>,
    row: T,
    id_of: impl Fn(&T) -> &str,
    sheet: &'static str,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let id = id_of(&row).to_owned();
    if !id.is_empty() {
        if let Some(slot) = rows.iter().position(|existing| id_of(existing) == id) {
            diagnostics.push(Diagnostic::DuplicateId { sheet, id });
            rows[slot] = row;
            return;
        }
    }
    rows.push(row);
}

/// Reads a cell the record must have; a miss degrades to an empty string and
/// a diagnostic.
fn identity_cell(
    record: &RawRecord,
    sheet: &'static str,
    field: &'static str,
    row: usize,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    match record.get(field) {
        Some(value) => text(value),
        None => {
            diagnostics.push(Diagnostic::MissingField { sheet, field, row });
            String::new()
        }
    }
}

/// Reads a cell some sheets legitimately omit; a miss is just the default.
fn optional_cell(record: &RawRecord, field: &str) -> String {
    record.get(field).map(text).unwrap_or_default()
}

fn parse_percentage(
    value: Option<&Value>,
    account_id: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> Decimal {
    let raw = match value {
        Some(value) => text(value),
        None => return Decimal::ONE,
    };
    if raw.trim().is_empty() {
        return Decimal::ONE;
    }
    match Decimal::from_str(raw.trim()) {
        Ok(percentage) => percentage,
        Err(_) => {
            diagnostics.push(Diagnostic::BadPercentage {
                id: account_id.to_owned(),
                raw,
            });
            Decimal::ONE
        }
    }
}

/// Coerces a sheet cell to text: numeric cells become their decimal
/// rendering, everything else its plain string form.
fn text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
