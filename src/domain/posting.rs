use serde::{Deserialize, Serialize};

/// Column headers of the exported grid, in field order. The Spanish names are
/// the bank's file contract, not a display choice.
pub const COLUMNS: [&str; 11] = [
    "AGENCIA",
    "CUENTA",
    "DESCRIPCION",
    "DOCUMENTO",
    "VENCIMIENTO",
    "DETALLE",
    "DEBEBOL",
    "HABERBOL",
    "DEBEDOL",
    "HABERDOL",
    "REFERENCIA",
];

/// One ledger posting line in the bank's grid format.
///
/// Amount cells hold the canonical formatted string with `"0"` on the unused
/// side; the foreign-currency cells are placeholders and stay empty. Rows are
/// never mutated once generated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PostingRow {
    #[serde(rename = "AGENCIA")]
    pub agency: String,
    #[serde(rename = "CUENTA")]
    pub account: String,
    #[serde(rename = "DESCRIPCION")]
    pub description: String,
    #[serde(rename = "DOCUMENTO")]
    pub document: String,
    #[serde(rename = "VENCIMIENTO")]
    pub due_date: String,
    #[serde(rename = "DETALLE")]
    pub detail: String,
    #[serde(rename = "DEBEBOL")]
    pub debit_local: String,
    #[serde(rename = "HABERBOL")]
    pub credit_local: String,
    #[serde(rename = "DEBEDOL")]
    pub debit_foreign: String,
    #[serde(rename = "HABERDOL")]
    pub credit_foreign: String,
    #[serde(rename = "REFERENCIA")]
    pub reference: String,
}
