//! Domain models: reference tables, the bill form, and posting rows.

pub mod bill;
pub mod posting;
pub mod reference;

pub use bill::BillInput;
pub use posting::{PostingRow, COLUMNS};
pub use reference::{Account, AccountType, Branch, Provider, ReferenceData};
