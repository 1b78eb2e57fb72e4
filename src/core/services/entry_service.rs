//! The entry generator: turns one bill form into bank posting rows.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rust_decimal::Decimal;

use crate::amount::{format_amount, ZERO_CELL};
use crate::domain::{Account, BillInput, PostingRow, ReferenceData};

use super::{Diagnostic, LookupKind};

/// Suspense/holding account: always books against the fixed agency and
/// carries no document, detail, or reference.
pub const SUSPENSE_ACCOUNT_ID: &str = "112070101";

/// Tax/fee account: always books against the fixed agency, carries the bill's
/// due date, and no reference. Its percentage also sizes the provider credit
/// row.
pub const TAX_ACCOUNT_ID: &str = "10000000006";

/// Agency code the bank assigns to the special accounts and to the provider
/// credit row.
pub const FIXED_AGENCY: &str = "1N";

/// Bank-imposed posting conventions for one special account id. These ids are
/// domain constants, not configuration; the table keeps the rule set
/// auditable in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialAccountRule {
    pub fixed_agency: &'static str,
    pub suppress_document: bool,
    pub suppress_detail: bool,
    pub populates_due_date: bool,
    pub suppress_reference: bool,
}

static SPECIAL_ACCOUNTS: Lazy<HashMap<&'static str, SpecialAccountRule>> = Lazy::new(|| {
    HashMap::from([
        (
            SUSPENSE_ACCOUNT_ID,
            SpecialAccountRule {
                fixed_agency: FIXED_AGENCY,
                suppress_document: true,
                suppress_detail: true,
                populates_due_date: false,
                suppress_reference: true,
            },
        ),
        (
            TAX_ACCOUNT_ID,
            SpecialAccountRule {
                fixed_agency: FIXED_AGENCY,
                suppress_document: false,
                suppress_detail: false,
                populates_due_date: true,
                suppress_reference: true,
            },
        ),
    ])
});

/// The posting conventions for `account_id`, if it is one of the special
/// accounts.
pub fn special_rule(account_id: &str) -> Option<&'static SpecialAccountRule> {
    SPECIAL_ACCOUNTS.get(account_id)
}

/// A generated batch plus the lookup misses recorded along the way.
#[derive(Debug, Clone, Default)]
pub struct Generated {
    pub rows: Vec<PostingRow>,
    pub diagnostics: Vec<Diagnostic>,
}

pub struct EntryService;

impl EntryService {
    /// Produces the posting batch for one bill: one debit row per resolvable
    /// debit selection, in input order, then the provider credit row.
    ///
    /// Lookups degrade instead of failing: an unresolved name becomes an
    /// empty cell, and a debit selection with no backing account record drops
    /// that row alone. Every miss lands in the batch diagnostics.
    pub fn generate(bill: &BillInput, reference: &ReferenceData) -> Generated {
        let mut generated = Generated::default();
        let detail_tag = bill.detail_tag();

        for selection in bill.debit_selections() {
            match reference.account_by_name(selection) {
                Some(account) => {
                    let row =
                        debit_row(bill, reference, account, &detail_tag, &mut generated.diagnostics);
                    generated.rows.push(row);
                }
                None => {
                    tracing::debug!(name = selection, "debit selection unresolved, row dropped");
                    generated.diagnostics.push(Diagnostic::DroppedDebitRow {
                        name: selection.trim().to_owned(),
                    });
                }
            }
        }

        let row = provider_row(bill, reference, &detail_tag, &mut generated.diagnostics);
        generated.rows.push(row);
        tracing::debug!(
            rows = generated.rows.len(),
            misses = generated.diagnostics.len(),
            bill = %bill.bill_number,
            "posting batch generated"
        );
        generated
    }
}

fn debit_row(
    bill: &BillInput,
    reference: &ReferenceData,
    account: &Account,
    detail_tag: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> PostingRow {
    let rule = special_rule(&account.id);
    let agency = match rule {
        Some(rule) => rule.fixed_agency.to_owned(),
        None => resolve(
            reference.branch_id_by_name(&bill.branch_name),
            LookupKind::Branch,
            &bill.branch_name,
            diagnostics,
        ),
    };
    let value = bill.amount * account.percentage;
    PostingRow {
        agency,
        account: account.id.clone(),
        description: account.name.clone(),
        document: unless(rule.map_or(false, |rule| rule.suppress_document), &account.code),
        due_date: if rule.map_or(false, |rule| rule.populates_due_date) {
            bill.due_date_cell()
        } else {
            String::new()
        },
        detail: unless(rule.map_or(false, |rule| rule.suppress_detail), detail_tag),
        debit_local: format_amount(value),
        credit_local: ZERO_CELL.to_owned(),
        debit_foreign: String::new(),
        credit_foreign: String::new(),
        reference: unless(
            rule.map_or(false, |rule| rule.suppress_reference),
            &account.code,
        ),
    }
}

/// The trailing credit posting against the provider. The credited value uses
/// the tax account's percentage, looked up fresh by id and defaulting to 1
/// when that record is absent.
fn provider_row(
    bill: &BillInput,
    reference: &ReferenceData,
    detail_tag: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> PostingRow {
    let provider_id = resolve(
        reference.provider_id_by_name(&bill.provider_name),
        LookupKind::Provider,
        &bill.provider_name,
        diagnostics,
    );
    let percentage = reference
        .account_by_id(TAX_ACCOUNT_ID)
        .map(|account| account.percentage)
        .unwrap_or(Decimal::ONE);
    PostingRow {
        agency: FIXED_AGENCY.to_owned(),
        account: provider_id,
        description: bill.provider_name.clone(),
        document: bill.document_tag(),
        due_date: bill.due_date_cell(),
        detail: detail_tag.to_owned(),
        debit_local: ZERO_CELL.to_owned(),
        credit_local: format_amount(bill.amount * percentage),
        debit_foreign: String::new(),
        credit_foreign: String::new(),
        reference: String::new(),
    }
}

fn resolve(
    found: Option<&str>,
    kind: LookupKind,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> String {
    match found {
        Some(id) => id.to_owned(),
        None => {
            tracing::debug!(?kind, name, "reference lookup missed, cell left empty");
            diagnostics.push(Diagnostic::LookupMiss {
                kind,
                name: name.trim().to_owned(),
            });
            String::new()
        }
    }
}

fn unless(suppressed: bool, cell: &str) -> String {
    if suppressed {
        String::new()
    } else {
        cell.to_owned()
    }
}
