//! Stateless services implementing the bill-to-grid workflow.

pub mod entry_service;
pub mod filter_service;
pub mod grid_service;
pub mod import_service;

pub use entry_service::{
    special_rule, EntryService, Generated, SpecialAccountRule, FIXED_AGENCY, SUSPENSE_ACCOUNT_ID,
    TAX_ACCOUNT_ID,
};
pub use filter_service::{FilterService, FilteredAccounts};
pub use grid_service::GridService;
pub use import_service::{ImportService, RawRecord};

/// Non-fatal conditions surfaced while importing or generating. The workflow
/// degrades silently (empty cells, dropped rows) but records what it skipped
/// so callers and tests can observe the misses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Diagnostic {
    #[error("{sheet} row {row}: missing `{field}`")]
    MissingField {
        sheet: &'static str,
        field: &'static str,
        row: usize,
    },
    #[error("{sheet}: duplicate id `{id}` replaced the earlier record")]
    DuplicateId { sheet: &'static str, id: String },
    #[error("account `{id}`: unrecognized type `{raw}`")]
    UnknownAccountType { id: String, raw: String },
    #[error("account `{id}`: percentage `{raw}` is not a number, using 1")]
    BadPercentage { id: String, raw: String },
    #[error("{kind:?} lookup missed `{name}`")]
    LookupMiss { kind: LookupKind, name: String },
    #[error("debit selection `{name}` has no account record, row dropped")]
    DroppedDebitRow { name: String },
}

/// Which reference table a failed lookup went against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Provider,
    Branch,
}
