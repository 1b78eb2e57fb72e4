//! Session state: the imported reference tables plus the accumulated grid.

use serde::{Deserialize, Serialize};

use crate::core::services::{
    Diagnostic, EntryService, GridService, ImportService, RawRecord,
};
use crate::domain::{BillInput, PostingRow, ReferenceData};

/// Owns everything one bookkeeping session accumulates: the reference tables
/// loaded from the spreadsheet collaborator and the append-only posting grid.
/// An explicit lifecycle (create, load, post, reset) instead of ambient
/// module state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    reference: ReferenceData,
    grid: Vec<PostingRow>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Imports the three reference sheets, replacing any previously loaded
    /// tables outright (no merge). The grid is left untouched.
    pub fn load_reference(
        &mut self,
        providers: &[RawRecord],
        accounts: &[RawRecord],
        branches: &[RawRecord],
    ) -> Vec<Diagnostic> {
        let (reference, diagnostics) = ImportService::parse(providers, accounts, branches);
        self.reference = reference;
        diagnostics
    }

    /// Generates the posting batch for one bill form submission and appends
    /// it to the grid. Returns the rows just added plus any lookup
    /// diagnostics.
    pub fn post_bill(&mut self, bill: &BillInput) -> (Vec<PostingRow>, Vec<Diagnostic>) {
        let generated = EntryService::generate(bill, &self.reference);
        self.append_rows(&generated.rows);
        (generated.rows, generated.diagnostics)
    }

    /// Appends already-generated rows to the session grid.
    pub fn append_rows(&mut self, rows: &[PostingRow]) {
        self.grid = GridService::append(&self.grid, rows);
    }

    pub fn reference(&self) -> &ReferenceData {
        &self.reference
    }

    /// The accumulated grid, in insertion order.
    pub fn grid(&self) -> &[PostingRow] {
        &self.grid
    }

    /// Starts the session over: drops reference tables and grid alike.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
