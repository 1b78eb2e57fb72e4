use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A supplier that bills the company.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Provider {
    pub id: String,
    pub name: String,
}

impl Provider {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A bank branch that postings can be booked against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Branch {
    pub id: String,
    pub name: String,
}

impl Branch {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Classification of an account within a posting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AccountType {
    Debit,
    Credit,
    /// Anything the source sheet labels with an unrecognized type. Kept in
    /// the account list but excluded from both filter buckets.
    Other,
}

impl AccountType {
    /// Parses the sheet's `type_account` cell, case-insensitively after
    /// trimming.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "debit" => AccountType::Debit,
            "credit" => AccountType::Credit,
            _ => AccountType::Other,
        }
    }
}

/// A ledger account from the reference sheet.
///
/// `branch_ids` keeps the sheet cell verbatim: one cell may encode several
/// associated branch ids, so branch membership is a substring check.
/// `percentage` is the fraction of the bill amount this account claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub branch_ids: String,
    pub kind: AccountType,
    pub code: String,
    pub percentage: Decimal,
}

impl Account {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: AccountType) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            branch_ids: String::new(),
            kind,
            code: String::new(),
            percentage: Decimal::ONE,
        }
    }

    pub fn with_branches(mut self, branch_ids: impl Into<String>) -> Self {
        self.branch_ids = branch_ids.into();
        self
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_percentage(mut self, percentage: Decimal) -> Self {
        self.percentage = percentage;
        self
    }
}

/// The three lookup tables a session imports from the spreadsheet
/// collaborator. Name lookups match exactly after trimming and return `None`
/// on a miss; callers degrade a miss to an empty cell.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReferenceData {
    pub providers: Vec<Provider>,
    pub accounts: Vec<Account>,
    pub branches: Vec<Branch>,
}

impl ReferenceData {
    pub fn provider_id_by_name(&self, name: &str) -> Option<&str> {
        let wanted = name.trim();
        self.providers
            .iter()
            .find(|provider| provider.name.trim() == wanted)
            .map(|provider| provider.id.as_str())
    }

    pub fn branch_id_by_name(&self, name: &str) -> Option<&str> {
        let wanted = name.trim();
        self.branches
            .iter()
            .find(|branch| branch.name.trim() == wanted)
            .map(|branch| branch.id.as_str())
    }

    pub fn account_by_name(&self, name: &str) -> Option<&Account> {
        let wanted = name.trim();
        self.accounts
            .iter()
            .find(|account| account.name.trim() == wanted)
    }

    pub fn account_id_by_name(&self, name: &str) -> Option<&str> {
        self.account_by_name(name).map(|account| account.id.as_str())
    }

    pub fn account_by_id(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_type_parse_trims_and_ignores_case() {
        assert_eq!(AccountType::parse("  Debit "), AccountType::Debit);
        assert_eq!(AccountType::parse("CREDIT"), AccountType::Credit);
        assert_eq!(AccountType::parse("asset"), AccountType::Other);
        assert_eq!(AccountType::parse(""), AccountType::Other);
    }

    #[test]
    fn name_lookups_match_trimmed_exact() {
        let reference = ReferenceData {
            providers: vec![Provider::new("P1", "  Acme  ")],
            accounts: vec![Account::new("A1", "Fees", AccountType::Debit)],
            branches: vec![Branch::new("B1", "Main")],
        };
        assert_eq!(reference.provider_id_by_name("Acme"), Some("P1"));
        assert_eq!(reference.provider_id_by_name("acme"), None);
        assert_eq!(reference.branch_id_by_name(" Main "), Some("B1"));
        assert_eq!(reference.account_id_by_name("Fees"), Some("A1"));
        assert_eq!(reference.account_by_id("A2"), None);
    }
}
